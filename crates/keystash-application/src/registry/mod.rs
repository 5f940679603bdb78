//! Provider Registry System
//!
//! Uses the `linkme` crate for compile-time registration of storage
//! providers that can be discovered and instantiated at runtime.
//!
//! ## Architecture
//!
//! ```text
//! 1. Provider defines:  #[linkme::distributed_slice(STORAGE_PROVIDERS)]
//!                       static ENTRY: StorageProviderEntry = ...
//! 2. Registry declares: #[linkme::distributed_slice]
//!                       pub static STORAGE_PROVIDERS: [StorageProviderEntry] = [..]
//! 3. Resolver queries:  STORAGE_PROVIDERS.iter()
//! 4. Config selects:    provider = "filesystem" -> FilesystemStorageProvider
//! ```
//!
//! ## Usage
//!
//! ### Registering a Provider (in keystash-providers)
//!
//! ```ignore
//! use keystash_application::registry::{StorageProviderEntry, STORAGE_PROVIDERS};
//!
//! #[linkme::distributed_slice(STORAGE_PROVIDERS)]
//! static MEMORY_PROVIDER: StorageProviderEntry = StorageProviderEntry {
//!     name: "memory",
//!     description: "In-memory storage provider",
//!     factory: |_config| Ok(Arc::new(InMemoryStorageProvider::new())),
//! };
//! ```
//!
//! ### Resolving a Provider (in keystash-infrastructure)
//!
//! ```ignore
//! use keystash_application::registry::{resolve_storage_provider, StorageProviderConfig};
//!
//! let storage = resolve_storage_provider(&StorageProviderConfig::new("memory"))?;
//! ```

pub mod storage;

pub use storage::{
    STORAGE_PROVIDERS, StorageProviderConfig, StorageProviderEntry, list_storage_providers,
    resolve_storage_provider,
};
