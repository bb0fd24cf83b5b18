use crate::errors::DomainError;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

/// Address family reported by the inventory (or inferred from the address).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    Ipv4,
    Other,
}

impl AddressFamily {
    /// Map the numeric family used by the inventory API (`4`, `6`).
    pub fn from_value(value: u8) -> Self {
        match value {
            4 => Self::Ipv4,
            _ => Self::Other,
        }
    }
}

/// Object that owns the interface an address is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOwner {
    Device {
        name: String,
        /// Display name, when the inventory exposes one.
        display: Option<String>,
    },
    VirtualMachine {
        name: String,
    },
    Unassigned,
}

/// One normalized record decoded from an inventory response page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryRecord {
    /// Address exactly as the inventory returned it (CIDR notation).
    pub raw_address: String,
    pub family: AddressFamily,
    pub owner: RecordOwner,
    /// DNS name declared on the record itself.
    pub dns_name: Option<String>,
}

impl InventoryRecord {
    /// Build a record, inferring the family from the address when the
    /// inventory did not report one.
    pub fn new(
        raw_address: impl Into<String>,
        family: Option<AddressFamily>,
        owner: RecordOwner,
        dns_name: Option<String>,
    ) -> Self {
        let raw_address = raw_address.into();
        let family = family.unwrap_or_else(|| infer_family(&raw_address));
        let dns_name = dns_name.filter(|name| !name.trim().is_empty());

        Self {
            raw_address,
            family,
            owner,
            dns_name,
        }
    }

    pub fn is_ipv4(&self) -> bool {
        self.family == AddressFamily::Ipv4
    }

    /// Host address with the network prefix stripped.
    pub fn host_address(&self) -> Result<Ipv4Addr, DomainError> {
        strip_prefix(&self.raw_address)
    }
}

/// Strip a `/prefix` suffix and parse the remaining IPv4 host address.
///
/// # Examples
/// ```
/// use netbox_resolver_domain::inventory_record::strip_prefix;
/// use std::net::Ipv4Addr;
///
/// assert_eq!(strip_prefix("10.0.0.2/25").unwrap(), Ipv4Addr::new(10, 0, 0, 2));
/// assert_eq!(strip_prefix("192.0.2.7").unwrap(), Ipv4Addr::new(192, 0, 2, 7));
/// assert!(strip_prefix("2001:db8::1/64").is_err());
/// ```
pub fn strip_prefix(address: &str) -> Result<Ipv4Addr, DomainError> {
    let host = address.split('/').next().unwrap_or_default().trim();
    Ipv4Addr::from_str(host).map_err(|_| DomainError::InvalidIpAddress(address.to_string()))
}

fn infer_family(address: &str) -> AddressFamily {
    let host = address.split('/').next().unwrap_or_default().trim();
    match IpAddr::from_str(host) {
        Ok(IpAddr::V4(_)) => AddressFamily::Ipv4,
        _ => AddressFamily::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_inferred_from_address() {
        let v4 = InventoryRecord::new("10.0.0.2/25", None, RecordOwner::Unassigned, None);
        let v6 = InventoryRecord::new("2001:db8::1/64", None, RecordOwner::Unassigned, None);

        assert!(v4.is_ipv4());
        assert!(!v6.is_ipv4());
    }

    #[test]
    fn test_reported_family_wins() {
        let record = InventoryRecord::new(
            "10.0.0.2/25",
            Some(AddressFamily::Other),
            RecordOwner::Unassigned,
            None,
        );

        assert!(!record.is_ipv4());
    }

    #[test]
    fn test_blank_dns_name_is_dropped() {
        let record = InventoryRecord::new(
            "10.0.0.2/25",
            None,
            RecordOwner::Unassigned,
            Some("  ".to_string()),
        );

        assert!(record.dns_name.is_none());
    }

    #[test]
    fn test_strip_prefix_rejects_garbage() {
        assert!(matches!(
            strip_prefix("not-an-ip/24"),
            Err(DomainError::InvalidIpAddress(_))
        ));
        assert!(strip_prefix("").is_err());
    }

    #[test]
    fn test_family_from_value() {
        assert_eq!(AddressFamily::from_value(4), AddressFamily::Ipv4);
        assert_eq!(AddressFamily::from_value(6), AddressFamily::Other);
    }
}
