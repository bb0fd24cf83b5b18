use super::storage::NameCache;
use netbox_resolver_application::ports::CacheCompaction;
use tracing::debug;

/// Extension methods for NameCache cleanup
impl NameCache {
    /// Physically remove expired entries from the current index.
    ///
    /// Reads already skip expired entries; this only reclaims memory for
    /// names that are never looked up again.
    pub fn compact(&self) -> usize {
        let index = self.index.load();
        let mut removed = 0;

        index.retain(|_name, entry| {
            if entry.is_expired() {
                removed += 1;
                false
            } else {
                true
            }
        });

        if removed > 0 {
            debug!(removed, cache_size = index.len(), "Cache compaction completed");
        }

        removed
    }
}

impl CacheCompaction for NameCache {
    fn compact(&self) -> usize {
        NameCache::compact(self)
    }
}
