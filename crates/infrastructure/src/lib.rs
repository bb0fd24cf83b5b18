//! NetBox Resolver Infrastructure Layer
//!
//! - `inventory`: HTTP client for the inventory REST API
//! - `cache`: in-memory name cache with TTL expiry and atomic rebuild
pub mod cache;
pub mod inventory;

pub use cache::NameCache;
pub use inventory::NetboxClient;
