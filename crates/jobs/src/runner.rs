use crate::CacheJanitorJob;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

/// Central orchestrator for background jobs.
///
/// Register jobs with the builder methods, then call `.start()` once.
///
/// ```rust,ignore
/// let handles = JobRunner::new()
///     .with_cache_janitor(CacheJanitorJob::new(cache).with_cancellation(token))
///     .start()
///     .await;
/// ```
pub struct JobRunner {
    cache_janitor: Option<CacheJanitorJob>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            cache_janitor: None,
        }
    }

    pub fn with_cache_janitor(mut self, job: CacheJanitorJob) -> Self {
        self.cache_janitor = Some(job);
        self
    }

    /// Start all registered jobs, returning their task handles.
    pub async fn start(self) -> Vec<JoinHandle<()>> {
        info!("Starting background job runner");

        let mut handles = Vec::new();
        if let Some(job) = self.cache_janitor {
            handles.push(Arc::new(job).start().await);
        }

        info!(jobs = handles.len(), "All background jobs started");
        handles
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
