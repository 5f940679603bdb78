//! Secure Storage Provider Port
//!
//! The capability a credential vault (Keychain, Secret Service, an encrypted
//! file, ...) offers to value cells: opaque byte blobs addressed by string key.
//!
//! ## Contract
//!
//! - `put` and `delete` return `false` when nothing was written or deleted.
//!   Callers assume no state change in that case.
//! - `get` returns `None` when there is no entry.
//!
//! Implementations log their internal failures and report them through the
//! boolean / optional return values; they never panic on backend errors.

use std::sync::Arc;

/// Secure storage provider interface
///
/// # Example
///
/// ```
/// use keystash_domain::ports::providers::SecureStorageProvider;
///
/// fn store_token(vault: &dyn SecureStorageProvider, token: &[u8]) -> bool {
///     vault.put("session.token", token)
/// }
/// ```
pub trait SecureStorageProvider: Send + Sync + std::fmt::Debug {
    /// Insert or replace the blob stored under `key`
    fn put(&self, key: &str, data: &[u8]) -> bool;

    /// Read the blob stored under `key`
    fn get(&self, key: &str) -> Option<Vec<u8>>;

    /// Remove the blob stored under `key`
    fn delete(&self, key: &str) -> bool;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}

/// Shared storage provider for dependency injection
pub type SharedStorageProvider = Arc<dyn SecureStorageProvider>;

impl<P: SecureStorageProvider + ?Sized> SecureStorageProvider for Arc<P> {
    fn put(&self, key: &str, data: &[u8]) -> bool {
        (**self).put(key, data)
    }

    fn get(&self, key: &str) -> Option<Vec<u8>> {
        (**self).get(key)
    }

    fn delete(&self, key: &str) -> bool {
        (**self).delete(key)
    }

    fn provider_name(&self) -> &str {
        (**self).provider_name()
    }
}
