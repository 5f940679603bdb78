//! # Keystash - Infrastructure Layer
//!
//! Cross-cutting technical concerns around value cells.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration: defaults, TOML file, environment |
//! | [`logging`] | Structured logging with tracing |
//! | [`crypto`] | AES-256-GCM encryption of stored blobs |
//! | [`bus`] | Process-wide change bus |
//! | [`di`] | Bootstrap of storage and change bus from configuration |
//! | [`error_ext`] | Context helpers for foreign errors |
//! | [`constants`] | Centralized configuration constants |

pub mod bus;
pub mod config;
pub mod constants;
pub mod crypto;
pub mod di;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use bus::{global_change_bus, init_global_change_bus};
pub use di::{KeystashContext, init_context};
pub use error_ext::ErrorContext;
