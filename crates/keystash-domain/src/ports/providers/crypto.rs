//! Cryptographic Provider Port
//!
//! Defines the interface for cryptographic operations used by storage
//! providers that encrypt blobs at rest (e.g., `EncryptedStorageProvider`).
//!
//! ## Usage
//!
//! This port follows the Dependency Inversion Principle:
//! - The trait is defined here (keystash-domain)
//! - Implementations live in keystash-infrastructure (`CryptoService`)
//! - Providers depend on the abstraction, not the concrete implementation

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cryptographic provider port
///
/// Implementations provide the actual cryptographic primitives (e.g., AES-256-GCM).
pub trait CryptoProvider: Send + Sync {
    /// Encrypt plaintext data
    fn encrypt(&self, plaintext: &[u8]) -> Result<EncryptedData>;

    /// Decrypt encrypted data
    fn decrypt(&self, encrypted_data: &EncryptedData) -> Result<Vec<u8>>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}

/// Encrypted data container
///
/// Holds the ciphertext and nonce produced by encryption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedData {
    /// The encrypted ciphertext
    pub ciphertext: Vec<u8>,
    /// The nonce used for encryption
    pub nonce: Vec<u8>,
}

impl EncryptedData {
    /// Create a new encrypted data container
    pub fn new(ciphertext: Vec<u8>, nonce: Vec<u8>) -> Self {
        Self { ciphertext, nonce }
    }
}

impl fmt::Display for EncryptedData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EncryptedData {{ ciphertext: {} bytes, nonce: {} bytes }}",
            self.ciphertext.len(),
            self.nonce.len()
        )
    }
}
