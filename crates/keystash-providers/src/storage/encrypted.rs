//! Encrypted storage wrapper
//!
//! Provides encryption at rest for any secure storage provider.
//!
//! ## Architecture
//!
//! This provider follows the Decorator pattern:
//! - Wraps any `SecureStorageProvider` implementation
//! - Encrypts each blob before it reaches the inner provider
//! - Stores ciphertext and nonce together as a JSON envelope
//!
//! ## Usage
//!
//! ```ignore
//! use keystash_providers::storage::EncryptedStorageProvider;
//!
//! let encrypted = EncryptedStorageProvider::new(inner_provider, crypto_service);
//! ```

use keystash_domain::error::{Error, Result};
use keystash_domain::ports::{CryptoProvider, EncryptedData, SecureStorageProvider};
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// Encrypted storage provider
///
/// Keys are passed through unchanged; only the stored blobs are encrypted.
pub struct EncryptedStorageProvider {
    /// Underlying storage provider
    inner: Arc<dyn SecureStorageProvider>,
    /// Cryptography provider
    crypto: Arc<dyn CryptoProvider>,
}

impl EncryptedStorageProvider {
    /// Create a new encrypted storage provider
    ///
    /// # Arguments
    ///
    /// * `inner` - The underlying storage provider to wrap
    /// * `crypto` - The cryptography provider for encryption operations
    pub fn new(inner: Arc<dyn SecureStorageProvider>, crypto: Arc<dyn CryptoProvider>) -> Self {
        Self { inner, crypto }
    }

    /// Get a reference to the inner provider
    pub fn inner(&self) -> &Arc<dyn SecureStorageProvider> {
        &self.inner
    }

    /// Get a reference to the crypto provider
    pub fn crypto(&self) -> &Arc<dyn CryptoProvider> {
        &self.crypto
    }

    fn seal(&self, data: &[u8]) -> Result<Vec<u8>> {
        let encrypted = self.crypto.encrypt(data)?;
        serde_json::to_vec(&encrypted).map_err(|e| Error::Infrastructure {
            message: format!("Failed to serialize encrypted envelope: {}", e),
            source: Some(Box::new(e)),
        })
    }

    fn open(&self, envelope: &[u8]) -> Result<Vec<u8>> {
        let encrypted: EncryptedData = serde_json::from_slice(envelope).map_err(|e| {
            Error::Infrastructure {
                message: format!("Failed to parse encrypted envelope: {}", e),
                source: Some(Box::new(e)),
            }
        })?;
        self.crypto.decrypt(&encrypted)
    }
}

impl fmt::Debug for EncryptedStorageProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncryptedStorageProvider")
            .field("inner", &self.inner)
            .field("crypto", &self.crypto.provider_name())
            .finish()
    }
}

impl SecureStorageProvider for EncryptedStorageProvider {
    fn put(&self, key: &str, data: &[u8]) -> bool {
        match self.seal(data) {
            Ok(envelope) => self.inner.put(key, &envelope),
            Err(e) => {
                warn!(key = %key, error = %e, "Encryption failed, entry not stored");
                false
            }
        }
    }

    fn get(&self, key: &str) -> Option<Vec<u8>> {
        let envelope = self.inner.get(key)?;
        match self.open(&envelope) {
            Ok(plaintext) => Some(plaintext),
            Err(e) => {
                warn!(key = %key, error = %e, "Decryption failed, treating entry as missing");
                None
            }
        }
    }

    fn delete(&self, key: &str) -> bool {
        self.inner.delete(key)
    }

    fn provider_name(&self) -> &str {
        "encrypted"
    }
}
