use netbox_resolver_application::ports::CacheCompaction;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Periodically drops expired entries that no lookup touches anymore.
pub struct CacheJanitorJob {
    cache: Arc<dyn CacheCompaction>,
    interval: Duration,
    shutdown: CancellationToken,
}

impl CacheJanitorJob {
    pub fn new(cache: Arc<dyn CacheCompaction>) -> Self {
        Self {
            cache,
            interval: Duration::from_secs(60),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) -> JoinHandle<()> {
        info!(
            interval_ms = self.interval.as_millis() as u64,
            "Starting cache janitor job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.interval);
            // The first tick fires immediately and the cache is empty at startup.
            interval.tick().await;
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("CacheJanitorJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        let removed = self.cache.compact();
                        debug!(removed, "Cache janitor pass completed");
                    }
                }
            }
        })
    }
}
