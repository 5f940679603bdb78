//! # Keystash
//!
//! Observable values persisted in secure storage. Every binding to the same
//! key stays in sync: a write goes to storage once, then reaches the other
//! bindings through an in-process change bus without being written again.
//!
//! ## Example
//!
//! ```ignore
//! use keystash::{KeychainStorage, StoredValue};
//! use keystash::providers::storage::InMemoryStorageProvider;
//! use std::sync::Arc;
//!
//! let vault = Arc::new(InMemoryStorageProvider::new());
//! let settings = KeychainStorage::new(false, vault.clone(), "flag");
//! let toolbar = KeychainStorage::with_invalidation(false, vault, "flag", || redraw());
//!
//! settings.set(true);
//! // toolbar observes `true` and redraws; storage was written once
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Value objects, change events and port traits
//! - `application` - Value cells, bindings and the storage provider registry
//! - `providers` - Change buses, codecs and storage backends
//! - `infrastructure` - Configuration, logging, encryption and bootstrap

mod keychain_storage;

/// Domain layer - value objects, events and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use keystash_domain::*;
}

/// Application layer - value cells and bindings
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use keystash_application::*;
}

/// Provider implementations
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use keystash_providers::*;
}

/// Infrastructure layer - configuration, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use keystash_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

pub use application::{CellSubscription, StorageBinding, ValueCell};
pub use domain::ports::{SecureStorageProvider, SharedStorageProvider};
pub use infrastructure::{global_change_bus, init_context};
pub use keychain_storage::KeychainStorage;
pub use providers::JsonCodec;
