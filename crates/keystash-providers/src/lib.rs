//! # Keystash - Provider Implementations
//!
//! This crate contains the adapters behind the ports defined in
//! `keystash-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Change Bus | `ChangeBusProvider` | Tokio broadcast, Null |
//! | Codec | `ValueCodec<T>` | JSON |
//! | Storage | `SecureStorageProvider` | InMemory, Filesystem, Encrypted, Null |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! keystash-providers = { version = "0.1", default-features = false, features = ["storage-memory"] }
//! ```
//!
//! Storage providers register themselves in the application-layer registry
//! (`keystash_application::registry`) at link time, so they can be selected
//! by name from configuration.

// Re-export keystash-domain types commonly used with providers
pub use keystash_domain::error::{Error, Result};
pub use keystash_domain::ports::{ChangeBusProvider, SecureStorageProvider, ValueCodec};

/// Provider-specific constants
pub mod constants;

/// Change bus implementations
///
/// Implements `ChangeBusProvider` for in-process fan-out.
pub mod events;

/// Value codec implementations
///
/// Implements `ValueCodec<T>` for serde-compatible values.
pub mod codec;

/// Secure storage provider implementations
///
/// Implements `SecureStorageProvider` for the supported backends.
pub mod storage;

pub use codec::JsonCodec;
pub use events::{NullChangeBus, TokioChangeBus};
