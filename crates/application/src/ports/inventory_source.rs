use async_trait::async_trait;
use netbox_resolver_domain::{DomainError, InventoryRecord, PriorityTier, RecordSourceKind};

/// Application-layer port for the remote inventory.
///
/// Implementations perform network I/O only: they never touch the resolution
/// cache, and a failed call leaves no partial state behind. Dropping the
/// returned future aborts the in-flight request.
#[async_trait]
pub trait InventorySource: Send + Sync {
    /// Records whose `tier` key matches `key` exactly.
    async fn query_by_key(
        &self,
        tier: PriorityTier,
        key: &str,
    ) -> Result<Vec<InventoryRecord>, DomainError>;

    /// Every record of `source`, across all pages.
    ///
    /// An empty inventory is `Ok(vec![])`, not an error.
    async fn enumerate(&self, source: RecordSourceKind)
        -> Result<Vec<InventoryRecord>, DomainError>;
}
