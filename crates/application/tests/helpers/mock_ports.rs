#![allow(dead_code)]

use async_trait::async_trait;
use netbox_resolver_application::ports::{AddressList, InventorySource, NameIndex, ResolutionCache};
use netbox_resolver_domain::{
    DomainError, InventoryRecord, PriorityTier, RecordOwner, RecordSourceKind,
};
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use std::time::{Duration, Instant};

// ============================================================================
// Mock InventorySource
// ============================================================================

#[derive(Clone, Default)]
pub struct MockInventory {
    by_key: Arc<RwLock<HashMap<(PriorityTier, String), Vec<InventoryRecord>>>>,
    everything: Arc<RwLock<Vec<InventoryRecord>>>,
    failing_tiers: Arc<RwLock<Vec<PriorityTier>>>,
    should_fail: Arc<AtomicBool>,
    delay: Arc<RwLock<Option<Duration>>>,
    targeted_calls: Arc<Mutex<Vec<(PriorityTier, String)>>>,
    enumerate_calls: Arc<AtomicUsize>,
}

impl MockInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records returned by a targeted query for `(tier, key)`
    pub fn with_records(self, tier: PriorityTier, key: &str, records: Vec<InventoryRecord>) -> Self {
        self.by_key
            .write()
            .unwrap()
            .insert((tier, key.to_string()), records);
        self
    }

    /// Records returned by a full enumeration
    pub fn with_enumeration(self, records: Vec<InventoryRecord>) -> Self {
        *self.everything.write().unwrap() = records;
        self
    }

    pub fn set_enumeration(&self, records: Vec<InventoryRecord>) {
        *self.everything.write().unwrap() = records;
    }

    pub fn fail_tier(self, tier: PriorityTier) -> Self {
        self.failing_tiers.write().unwrap().push(tier);
        self
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.write().unwrap() = Some(delay);
    }

    pub fn targeted_calls(&self) -> Vec<(PriorityTier, String)> {
        self.targeted_calls.lock().unwrap().clone()
    }

    pub fn enumerate_calls(&self) -> usize {
        self.enumerate_calls.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.targeted_calls().len() + self.enumerate_calls()
    }

    async fn maybe_wait(&self) {
        let delay = *self.delay.read().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn failure() -> DomainError {
        DomainError::InventoryStatus {
            status: 503,
            url: "https://netbox.test/api/".to_string(),
        }
    }
}

#[async_trait]
impl InventorySource for MockInventory {
    async fn query_by_key(
        &self,
        tier: PriorityTier,
        key: &str,
    ) -> Result<Vec<InventoryRecord>, DomainError> {
        self.targeted_calls
            .lock()
            .unwrap()
            .push((tier, key.to_string()));
        self.maybe_wait().await;

        if self.should_fail.load(Ordering::SeqCst) || self.failing_tiers.read().unwrap().contains(&tier) {
            return Err(Self::failure());
        }

        Ok(self
            .by_key
            .read()
            .unwrap()
            .get(&(tier, key.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    async fn enumerate(
        &self,
        _source: RecordSourceKind,
    ) -> Result<Vec<InventoryRecord>, DomainError> {
        self.enumerate_calls.fetch_add(1, Ordering::SeqCst);
        self.maybe_wait().await;

        if self.should_fail.load(Ordering::SeqCst) {
            return Err(Self::failure());
        }

        Ok(self.everything.read().unwrap().clone())
    }
}

// ============================================================================
// In-memory ResolutionCache
// ============================================================================

#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, (AddressList, Instant)>>,
    rebuilds: AtomicUsize,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.read().unwrap().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    pub fn rebuilds(&self) -> usize {
        self.rebuilds.load(Ordering::SeqCst)
    }
}

impl ResolutionCache for MemoryCache {
    fn get(&self, key: &str) -> Option<AddressList> {
        let entries = self.entries.read().unwrap();
        entries
            .get(key)
            .filter(|(_, expires_at)| Instant::now() < *expires_at)
            .map(|(addresses, _)| Arc::clone(addresses))
    }

    fn set(&self, key: &str, addresses: Vec<Ipv4Addr>, ttl: Duration) {
        if key.is_empty() || addresses.is_empty() {
            return;
        }
        self.entries
            .write()
            .unwrap()
            .insert(key.to_string(), (Arc::from(addresses), Instant::now() + ttl));
    }

    fn rebuild(&self, entries: NameIndex, ttl: Duration) {
        let expires_at = Instant::now() + ttl;
        let fresh = entries
            .into_iter()
            .filter(|(key, addresses)| !key.is_empty() && !addresses.is_empty())
            .map(|(key, addresses)| (key, (Arc::from(addresses), expires_at)))
            .collect();
        *self.entries.write().unwrap() = fresh;
        self.rebuilds.fetch_add(1, Ordering::SeqCst);
    }
}

// ============================================================================
// Record builders
// ============================================================================

pub fn ip(s: &str) -> Ipv4Addr {
    s.parse().unwrap()
}

pub fn addressed(address: &str, dns_name: &str) -> InventoryRecord {
    InventoryRecord::new(address, None, RecordOwner::Unassigned, Some(dns_name.to_string()))
}

pub fn device_record(address: &str, name: &str) -> InventoryRecord {
    InventoryRecord::new(
        address,
        None,
        RecordOwner::Device {
            name: name.to_string(),
            display: None,
        },
        None,
    )
}

pub fn vm_record(address: &str, name: &str) -> InventoryRecord {
    InventoryRecord::new(
        address,
        None,
        RecordOwner::VirtualMachine {
            name: name.to_string(),
        },
        None,
    )
}
