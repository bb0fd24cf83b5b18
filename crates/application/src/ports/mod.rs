pub mod inventory_source;
pub mod resolution_cache;

pub use inventory_source::InventorySource;
pub use resolution_cache::{
    empty_addresses, AddressList, CacheCompaction, NameIndex, ResolutionCache,
};
