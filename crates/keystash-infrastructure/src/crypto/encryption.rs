//! Encryption/decryption service using AES-GCM

use crate::constants::{AES_GCM_KEY_SIZE, AES_GCM_NONCE_SIZE};
use crate::error_ext::ErrorContext;
use aes_gcm::{
    Aes256Gcm, Key, Nonce,
    aead::{Aead, AeadCore, KeyInit, OsRng as AeadOsRng, rand_core::RngCore as AeadRngCore},
};
use keystash_domain::error::{Error, Result};
use keystash_domain::ports::{CryptoProvider, EncryptedData};
use std::fmt;

/// Encryption/decryption service
///
/// Implements the CryptoProvider port from keystash-domain.
#[derive(Clone)]
pub struct CryptoService {
    /// Master key for encryption operations
    master_key: Vec<u8>,
}

impl CryptoService {
    /// Create a new crypto service with the provided master key
    pub fn new(master_key: Vec<u8>) -> Result<Self> {
        if master_key.len() != AES_GCM_KEY_SIZE {
            return Err(Error::configuration(format!(
                "Invalid master key size: expected {} bytes, got {}",
                AES_GCM_KEY_SIZE,
                master_key.len()
            )));
        }

        Ok(Self { master_key })
    }

    /// Create a crypto service from a hex-encoded master key
    pub fn from_hex(master_key_hex: &str) -> Result<Self> {
        let master_key =
            hex::decode(master_key_hex.trim()).config_context("Master key is not valid hex")?;
        Self::new(master_key)
    }

    /// Generate a random master key
    pub fn generate_master_key() -> Vec<u8> {
        let mut key = vec![0u8; AES_GCM_KEY_SIZE];
        AeadOsRng.fill_bytes(&mut key);
        key
    }

    /// Encrypt data using AES-GCM with a fresh random nonce
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<EncryptedData> {
        let key = Key::<Aes256Gcm>::from_slice(&self.master_key);
        let cipher = Aes256Gcm::new(key);
        let nonce = Aes256Gcm::generate_nonce(&mut AeadOsRng);

        let ciphertext = cipher
            .encrypt(&nonce, plaintext)
            .map_err(|e| Error::crypto(format!("Encryption failed: {}", e)))?;

        Ok(EncryptedData::new(ciphertext, nonce.to_vec()))
    }

    /// Decrypt data using AES-GCM
    pub fn decrypt(&self, encrypted_data: &EncryptedData) -> Result<Vec<u8>> {
        if encrypted_data.nonce.len() != AES_GCM_NONCE_SIZE {
            return Err(Error::crypto(format!(
                "Invalid nonce size: expected {} bytes, got {}",
                AES_GCM_NONCE_SIZE,
                encrypted_data.nonce.len()
            )));
        }

        let key = Key::<Aes256Gcm>::from_slice(&self.master_key);
        let cipher = Aes256Gcm::new(key);
        let nonce = Nonce::from_slice(&encrypted_data.nonce);

        cipher
            .decrypt(nonce, encrypted_data.ciphertext.as_ref())
            .map_err(|e| Error::crypto(format!("Decryption failed: {}", e)))
    }
}

impl fmt::Debug for CryptoService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CryptoService")
            .field("master_key", &"<redacted>")
            .finish()
    }
}

// Implement the CryptoProvider port from keystash-domain
impl CryptoProvider for CryptoService {
    fn encrypt(&self, plaintext: &[u8]) -> Result<EncryptedData> {
        CryptoService::encrypt(self, plaintext)
    }

    fn decrypt(&self, encrypted_data: &EncryptedData) -> Result<Vec<u8>> {
        CryptoService::decrypt(self, encrypted_data)
    }

    fn provider_name(&self) -> &str {
        "aes-256-gcm"
    }
}
