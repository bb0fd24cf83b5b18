//! Configuration module for the NetBox resolver
//!
//! - `root`: Main configuration file and CLI overrides
//! - `netbox`: Inventory connection, cache and priority settings
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod logging;
pub mod netbox;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use netbox::{NetboxConfig, ResolverSettings};
pub use root::{CliOverrides, Config};
