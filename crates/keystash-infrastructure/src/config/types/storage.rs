//! Secure storage configuration types

use crate::constants::{DEFAULT_CONFIG_DIR, DEFAULT_STORAGE_PROVIDER, DEFAULT_STORAGE_SERVICE};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Secure storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Registered provider name ("memory", "filesystem", "null")
    pub provider: String,

    /// Base directory for file-backed providers
    pub path: Option<PathBuf>,

    /// Service name; entries of different services never collide
    pub service: String,

    /// Encryption at rest
    pub encryption: EncryptionConfig,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_STORAGE_PROVIDER.to_string(),
            path: dirs::data_local_dir().map(|dir| dir.join(DEFAULT_CONFIG_DIR)),
            service: DEFAULT_STORAGE_SERVICE.to_string(),
            encryption: EncryptionConfig::default(),
        }
    }
}

impl StorageConfig {
    /// In-memory storage (default)
    pub fn memory() -> Self {
        Self::default()
    }

    /// Filesystem storage rooted at `path`
    pub fn filesystem(path: impl Into<PathBuf>) -> Self {
        Self {
            provider: "filesystem".to_string(),
            path: Some(path.into()),
            ..Default::default()
        }
    }

    /// Storage that accepts writes and keeps nothing
    pub fn null() -> Self {
        Self {
            provider: "null".to_string(),
            ..Default::default()
        }
    }

    /// Set the service name
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = service.into();
        self
    }

    /// Encrypt stored blobs with the given hex-encoded AES-256 key
    pub fn with_encryption_key(mut self, master_key_hex: impl Into<String>) -> Self {
        self.encryption = EncryptionConfig {
            enabled: true,
            master_key_hex: Some(master_key_hex.into()),
        };
        self
    }
}

/// Encryption at rest configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncryptionConfig {
    /// Wrap the storage provider in AES-256-GCM encryption
    pub enabled: bool,

    /// Hex-encoded 32-byte master key, required when enabled
    pub master_key_hex: Option<String>,
}
