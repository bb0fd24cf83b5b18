//! NetBox Resolver Domain Layer
pub mod config;
pub mod errors;
pub mod inventory_record;
pub mod lookup;
pub mod priority;

pub use config::{CliOverrides, Config, ConfigError, ResolverSettings};
pub use errors::DomainError;
pub use inventory_record::{AddressFamily, InventoryRecord, RecordOwner};
pub use lookup::{normalize_lookup_key, LookupState};
pub use priority::{PriorityTier, RecordSourceKind, RefreshStrategy, ResolutionPolicy};
