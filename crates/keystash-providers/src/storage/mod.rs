//! Secure Storage Provider Implementations
//!
//! ## Available Providers
//!
//! | Provider | Registry name | Description |
//! |----------|---------------|-------------|
//! | InMemoryStorageProvider | `memory` | Concurrent map, lost on restart |
//! | FilesystemStorageProvider | `filesystem` | One file per key under a directory |
//! | NullStorageProvider | `null` | Accepts every write, stores nothing |
//! | EncryptedStorageProvider | n/a | AES-GCM decorator over any provider |
//!
//! The encrypted decorator needs a `CryptoProvider` and is composed by the
//! bootstrap code rather than resolved by name.

#[cfg(feature = "storage-encrypted")]
pub mod encrypted;
#[cfg(feature = "storage-filesystem")]
pub mod filesystem;
#[cfg(feature = "storage-memory")]
pub mod in_memory;
pub mod null;

#[cfg(feature = "storage-encrypted")]
pub use encrypted::EncryptedStorageProvider;
#[cfg(feature = "storage-filesystem")]
pub use filesystem::FilesystemStorageProvider;
#[cfg(feature = "storage-memory")]
pub use in_memory::InMemoryStorageProvider;
pub use null::NullStorageProvider;

// Re-export port trait from the domain layer
pub use keystash_domain::ports::SecureStorageProvider;
