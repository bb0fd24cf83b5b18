pub mod cache_janitor;
pub mod runner;

pub use cache_janitor::CacheJanitorJob;
pub use runner::JobRunner;
