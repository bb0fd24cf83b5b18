//! Wire shapes of the inventory list endpoints.
//!
//! Only the fields the resolver reads are declared; everything else in the
//! payload is ignored. Nullable fields default to `None`.

use netbox_resolver_domain::{AddressFamily, InventoryRecord, RecordOwner};
use serde::Deserialize;

/// Converts one decoded list item into the common record shape.
///
/// Items that cannot yield a record (e.g. a device without a primary IPv4)
/// return `None`.
pub trait IntoInventoryRecord {
    fn into_record(self) -> Option<InventoryRecord>;
}

/// `family` is `{"value": 4, "label": "IPv4"}` on current releases and a bare
/// integer on older ones.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FamilyDto {
    Labelled { value: u8 },
    Plain(u8),
}

impl FamilyDto {
    pub fn family(&self) -> AddressFamily {
        match self {
            Self::Labelled { value } | Self::Plain(value) => AddressFamily::from_value(*value),
        }
    }
}

/// Nested reference to a device or virtual machine.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedRefDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub display: Option<String>,
}

/// Interface (or FHRP group, ...) an address is assigned to.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssignedObjectDto {
    #[serde(default)]
    pub device: Option<NamedRefDto>,
    #[serde(default)]
    pub virtual_machine: Option<NamedRefDto>,
}

/// Item of `/api/ipam/ip-addresses/`.
#[derive(Debug, Clone, Deserialize)]
pub struct IpAddressDto {
    pub address: String,
    #[serde(default)]
    pub family: Option<FamilyDto>,
    #[serde(default)]
    pub dns_name: Option<String>,
    #[serde(default)]
    pub assigned_object: Option<AssignedObjectDto>,
}

impl IpAddressDto {
    fn owner(&self) -> RecordOwner {
        let Some(assigned) = &self.assigned_object else {
            return RecordOwner::Unassigned;
        };

        if let Some(device) = &assigned.device {
            if let Some(name) = non_blank(&device.name) {
                return RecordOwner::Device {
                    name: name.to_string(),
                    display: distinct_display(name, &device.display),
                };
            }
        }

        if let Some(vm) = &assigned.virtual_machine {
            if let Some(name) = non_blank(&vm.name) {
                return RecordOwner::VirtualMachine {
                    name: name.to_string(),
                };
            }
        }

        RecordOwner::Unassigned
    }
}

impl IntoInventoryRecord for IpAddressDto {
    fn into_record(self) -> Option<InventoryRecord> {
        let owner = self.owner();
        let family = self.family.as_ref().map(FamilyDto::family);
        Some(InventoryRecord::new(self.address, family, owner, self.dns_name))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PrimaryIpDto {
    pub address: String,
    #[serde(default)]
    pub family: Option<FamilyDto>,
}

/// Item of `/api/dcim/devices/`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub display: Option<String>,
    #[serde(default)]
    pub primary_ip4: Option<PrimaryIpDto>,
}

impl IntoInventoryRecord for DeviceDto {
    fn into_record(self) -> Option<InventoryRecord> {
        let primary = self.primary_ip4?;
        let name = non_blank(&self.name)?.to_string();
        let display = distinct_display(&name, &self.display);
        let family = primary.family.as_ref().map(FamilyDto::family);

        Some(InventoryRecord::new(
            primary.address,
            family,
            RecordOwner::Device { name, display },
            None,
        ))
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn distinct_display(name: &str, display: &Option<String>) -> Option<String> {
    non_blank(display)
        .filter(|display| *display != name)
        .map(str::to_string)
}
