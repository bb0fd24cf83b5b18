use netbox_resolver_domain::{
    normalize_lookup_key, LookupState, PriorityTier, RecordSourceKind, RefreshStrategy,
    ResolutionPolicy, ResolverSettings,
};
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::ports::{empty_addresses, AddressList, InventorySource, ResolutionCache};
use crate::services::{index_records, push_unique, record_addresses};

/// Use case: resolve a name to IPv4 addresses through the cache, refreshing
/// from the inventory on a miss.
///
/// Remote failures never escape `lookup`: they are logged and the result
/// degrades to whatever the cache still holds, possibly nothing. An empty
/// result tells the caller to delegate the query elsewhere.
pub struct ResolveNameUseCase {
    inventory: Arc<dyn InventorySource>,
    cache: Arc<dyn ResolutionCache>,
    cache_ttl: Duration,
    priority: Vec<PriorityTier>,
    policy: ResolutionPolicy,
    strategy: RefreshStrategy,
}

impl ResolveNameUseCase {
    pub fn new(
        inventory: Arc<dyn InventorySource>,
        cache: Arc<dyn ResolutionCache>,
        settings: &ResolverSettings,
    ) -> Self {
        Self {
            inventory,
            cache,
            cache_ttl: settings.cache_ttl,
            priority: settings.priority.clone(),
            policy: settings.policy,
            strategy: settings.strategy,
        }
    }

    pub async fn lookup(&self, name: &str) -> AddressList {
        let key = normalize_lookup_key(name);
        if key.is_empty() {
            debug!(name = %name, "Empty lookup key, nothing to resolve");
            return empty_addresses();
        }

        if let Some(addresses) = self.cache.get(key) {
            debug!(name = %key, state = %LookupState::CacheHit, "Cache HIT");
            return addresses;
        }

        debug!(name = %key, state = %LookupState::CacheMissNeedsRefresh, "Cache MISS");

        let resolved = match self.strategy {
            RefreshStrategy::FullIndex { source } => self.refresh_full_index(key, source).await,
            RefreshStrategy::PriorityTiers => self.refresh_by_priority(key).await,
        };

        match resolved {
            Some(addresses) => {
                debug!(
                    name = %key,
                    state = %LookupState::Resolved,
                    addresses = addresses.len(),
                    "Name resolved"
                );
                addresses
            }
            None => {
                debug!(name = %key, state = %LookupState::Unresolved, "Name not found");
                empty_addresses()
            }
        }
    }

    /// Like [`lookup`](Self::lookup), but gives up with an empty result once
    /// `cancel` fires. The in-flight request is dropped, closing its connection.
    pub async fn lookup_with_cancellation(
        &self,
        name: &str,
        cancel: &CancellationToken,
    ) -> AddressList {
        if cancel.is_cancelled() {
            return empty_addresses();
        }

        tokio::select! {
            addresses = self.lookup(name) => addresses,
            _ = cancel.cancelled() => {
                debug!(name = %name, "Lookup cancelled by caller");
                empty_addresses()
            }
        }
    }

    async fn refresh_full_index(&self, key: &str, source: RecordSourceKind) -> Option<AddressList> {
        debug!(
            name = %key,
            source = source.as_str(),
            state = %LookupState::RefreshInFlight,
            "Rebuilding index from inventory"
        );

        match self.inventory.enumerate(source).await {
            Ok(records) => {
                let index = index_records(&records);
                info!(
                    source = source.as_str(),
                    records = records.len(),
                    names = index.len(),
                    "Index rebuilt"
                );
                self.cache.rebuild(index, self.cache_ttl);
            }
            Err(e) => {
                warn!(
                    name = %key,
                    source = source.as_str(),
                    error = %e,
                    "Index rebuild failed, keeping current cache"
                );
            }
        }

        self.cache.get(key)
    }

    async fn refresh_by_priority(&self, key: &str) -> Option<AddressList> {
        let mut found: Vec<Ipv4Addr> = Vec::new();
        let mut failed_tiers = 0usize;

        for tier in &self.priority {
            debug!(
                name = %key,
                tier = %tier,
                state = %LookupState::RefreshInFlight,
                "Querying inventory"
            );

            let records = match self.inventory.query_by_key(*tier, key).await {
                Ok(records) => records,
                Err(e) => {
                    warn!(name = %key, tier = %tier, error = %e, "Inventory query failed");
                    failed_tiers += 1;
                    continue;
                }
            };

            let tier_addresses = record_addresses(&records);
            debug!(
                name = %key,
                tier = %tier,
                records = records.len(),
                addresses = tier_addresses.len(),
                "Tier answered"
            );

            let matched = !tier_addresses.is_empty();
            for address in tier_addresses {
                push_unique(&mut found, address);
            }

            if matched && self.policy.stop_on_first_match {
                break;
            }
        }

        if found.is_empty() {
            if failed_tiers > 0 {
                // Another task may have filled the entry meanwhile.
                return self.cache.get(key);
            }
            return None;
        }

        let addresses: AddressList = Arc::from(found.as_slice());
        self.cache.set(key, found, self.cache_ttl);
        Some(addresses)
    }
}
