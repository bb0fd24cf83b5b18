use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::{Arc, LazyLock};
use std::time::Duration;

/// Resolved addresses, shared without copying between cache and callers.
pub type AddressList = Arc<[Ipv4Addr]>;

/// Name → addresses mapping produced by the record indexer.
pub type NameIndex = HashMap<String, Vec<Ipv4Addr>>;

static EMPTY_ADDRESSES: LazyLock<AddressList> = LazyLock::new(|| Arc::from([]));

pub fn empty_addresses() -> AddressList {
    Arc::clone(&EMPTY_ADDRESSES)
}

/// Port for the time-bounded name cache.
///
/// All methods are synchronous: the cache lives in memory and every mutation
/// is a short critical section, so no lock is ever held across network I/O.
pub trait ResolutionCache: Send + Sync {
    /// Cached addresses for `key`; expired entries are treated as absent.
    fn get(&self, key: &str) -> Option<AddressList>;

    /// Insert or overwrite `key`. Empty keys and empty address lists are ignored.
    fn set(&self, key: &str, addresses: Vec<Ipv4Addr>, ttl: Duration);

    /// Replace the whole cache content in one atomic step.
    fn rebuild(&self, entries: NameIndex, ttl: Duration);
}

/// Proactive removal of expired entries, driven by the janitor job.
pub trait CacheCompaction: Send + Sync {
    /// Drop every expired entry and return how many were removed.
    fn compact(&self) -> usize;
}
