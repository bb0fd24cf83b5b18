#![allow(dead_code)]

use netbox_resolver_application::ports::CacheCompaction;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Compaction port that counts passes and reports a fixed removal count.
#[derive(Clone, Default)]
pub struct CountingCompaction {
    passes: Arc<AtomicUsize>,
}

impl CountingCompaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn passes(&self) -> usize {
        self.passes.load(Ordering::SeqCst)
    }
}

impl CacheCompaction for CountingCompaction {
    fn compact(&self) -> usize {
        self.passes.fetch_add(1, Ordering::SeqCst);
        1
    }
}
