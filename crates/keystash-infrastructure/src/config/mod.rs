//! Configuration
//!
//! Layered configuration built with figment: defaults, then a TOML file,
//! then `KEYSTASH_` environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::*;
