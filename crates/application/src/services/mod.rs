pub mod record_indexer;

pub use record_indexer::{index_records, push_unique, record_addresses};
