use super::entry::CachedEntry;
use arc_swap::ArcSwap;
use dashmap::DashMap;
use netbox_resolver_application::ports::{AddressList, NameIndex, ResolutionCache};
use rustc_hash::FxBuildHasher;
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

pub(super) type CacheIndex = DashMap<String, CachedEntry, FxBuildHasher>;

/// Time-bounded name → addresses cache.
///
/// The current index sits behind an `ArcSwap`: readers load it without locking,
/// single-name writes go to the shard owning the key, and `rebuild` swaps in a
/// complete new index in one store. A reader overlapping a rebuild therefore
/// sees either the whole old index or the whole new one.
///
/// A `set` racing a `rebuild` may land in the retired index and be lost; the
/// next miss for that name refetches it.
pub struct NameCache {
    pub(super) index: ArcSwap<CacheIndex>,
}

impl NameCache {
    pub fn new() -> Self {
        Self {
            index: ArcSwap::from_pointee(CacheIndex::with_hasher(FxBuildHasher)),
        }
    }

    /// Number of stored entries, including expired ones not yet evicted.
    pub fn len(&self) -> usize {
        self.index.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for NameCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolutionCache for NameCache {
    fn get(&self, key: &str) -> Option<AddressList> {
        let index = self.index.load();

        let entry = index.get(key)?;
        if !entry.is_expired() {
            return Some(Arc::clone(&entry.addresses));
        }
        drop(entry);

        // Re-check under the shard lock: a concurrent set may have refreshed it.
        if index.remove_if(key, |_, entry| entry.is_expired()).is_some() {
            debug!(name = %key, "Cache entry expired (lazy)");
        }
        None
    }

    fn set(&self, key: &str, addresses: Vec<Ipv4Addr>, ttl: Duration) {
        if key.is_empty() || addresses.is_empty() {
            return;
        }

        let index = self.index.load();
        index.insert(key.to_string(), CachedEntry::new(addresses, ttl));

        debug!(
            name = %key,
            ttl_ms = ttl.as_millis() as u64,
            cache_size = index.len(),
            "Inserted into cache"
        );
    }

    fn rebuild(&self, entries: NameIndex, ttl: Duration) {
        let expires_at = Instant::now() + ttl;
        let fresh = CacheIndex::with_capacity_and_hasher(entries.len(), FxBuildHasher);

        for (key, addresses) in entries {
            if key.is_empty() || addresses.is_empty() {
                continue;
            }
            fresh.insert(key, CachedEntry::expiring_at(addresses, expires_at));
        }

        let size = fresh.len();
        self.index.store(Arc::new(fresh));

        debug!(cache_size = size, "Cache index replaced");
    }
}
