use std::fmt;

/// Key-kind tried when resolving a name by targeted inventory queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriorityTier {
    /// DNS name declared on the IP address record
    DnsName,
    /// Name of the virtual machine owning the interface
    VirtualMachine,
    /// Name of the device owning the interface
    Device,
}

impl PriorityTier {
    pub const ALL: [PriorityTier; 3] = [Self::DnsName, Self::VirtualMachine, Self::Device];

    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "dns_name" => Some(Self::DnsName),
            "virtual_machine" => Some(Self::VirtualMachine),
            "device" => Some(Self::Device),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DnsName => "dns_name",
            Self::VirtualMachine => "virtual_machine",
            Self::Device => "device",
        }
    }

    /// Query parameter used to filter IP address records by this key-kind.
    pub fn query_param(&self) -> &'static str {
        self.as_str()
    }

    pub fn default_order() -> Vec<PriorityTier> {
        Self::ALL.to_vec()
    }
}

impl fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How results from several tiers are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolutionPolicy {
    /// Stop after the first tier that yields at least one address.
    pub stop_on_first_match: bool,
}

impl ResolutionPolicy {
    pub fn new(stop_on_first_match: bool) -> Self {
        Self {
            stop_on_first_match,
        }
    }
}

/// Inventory collection enumerated by the full-index refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordSourceKind {
    /// `/api/ipam/ip-addresses/`: every address with its assigned object
    #[default]
    IpAddresses,
    /// `/api/dcim/devices/`: every device with its primary IPv4
    Devices,
}

impl RecordSourceKind {
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "ip_addresses" => Some(Self::IpAddresses),
            "devices" => Some(Self::Devices),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IpAddresses => "ip_addresses",
            Self::Devices => "devices",
        }
    }
}

/// What the resolver does on a cache miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshStrategy {
    /// Query each configured tier for the missing name.
    PriorityTiers,
    /// Re-enumerate the whole inventory and rebuild the cache.
    FullIndex { source: RecordSourceKind },
}

impl Default for RefreshStrategy {
    fn default() -> Self {
        Self::PriorityTiers
    }
}
