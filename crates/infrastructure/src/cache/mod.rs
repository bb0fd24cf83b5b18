// Name cache: lazy expiry on read, atomic whole-index rebuild

pub mod compaction;
pub mod entry;
pub mod storage;

pub use entry::CachedEntry;
pub use storage::NameCache;
