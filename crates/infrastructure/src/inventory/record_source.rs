use netbox_resolver_domain::RecordSourceKind;

/// Inventory collection that can be enumerated into records.
///
/// Both variants decode into `InventoryRecord`; the client picks the wire
/// shape from the variant instead of inspecting payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordSource {
    /// Every IP address with its assigned device/VM interface
    AddressEnumeration,
    /// Every device with its primary IPv4
    DeviceEnumeration,
}

impl RecordSource {
    /// Path below `{base}/api/`, without slashes
    pub fn resource_path(&self) -> &'static str {
        match self {
            Self::AddressEnumeration => "ipam/ip-addresses",
            Self::DeviceEnumeration => "dcim/devices",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AddressEnumeration => "address_enumeration",
            Self::DeviceEnumeration => "device_enumeration",
        }
    }
}

impl From<RecordSourceKind> for RecordSource {
    fn from(kind: RecordSourceKind) -> Self {
        match kind {
            RecordSourceKind::IpAddresses => Self::AddressEnumeration,
            RecordSourceKind::Devices => Self::DeviceEnumeration,
        }
    }
}
