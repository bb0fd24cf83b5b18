use netbox_resolver_application::ports::AddressList;
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Cached addresses for one name
#[derive(Clone, Debug)]
pub struct CachedEntry {
    /// Resolved addresses, never empty
    pub addresses: AddressList,

    /// When this entry stops being served (lazy expiration)
    pub expires_at: Instant,
}

impl CachedEntry {
    pub fn new(addresses: Vec<Ipv4Addr>, ttl: Duration) -> Self {
        Self::expiring_at(addresses, Instant::now() + ttl)
    }

    pub fn expiring_at(addresses: Vec<Ipv4Addr>, expires_at: Instant) -> Self {
        Self {
            addresses: Arc::from(addresses),
            expires_at,
        }
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}
