//! Null storage provider for testing
//!
//! Reports success for every write and never returns data. A cell bound to
//! it always starts from its default value.

use keystash_application::registry::{
    STORAGE_PROVIDERS, StorageProviderConfig, StorageProviderEntry,
};
use keystash_domain::ports::SecureStorageProvider;
use std::sync::Arc;

/// Null storage provider
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStorageProvider;

impl NullStorageProvider {
    /// Create a new null storage provider
    pub fn new() -> Self {
        Self
    }
}

impl SecureStorageProvider for NullStorageProvider {
    fn put(&self, _key: &str, _data: &[u8]) -> bool {
        true
    }

    fn get(&self, _key: &str) -> Option<Vec<u8>> {
        None
    }

    fn delete(&self, _key: &str) -> bool {
        true
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(STORAGE_PROVIDERS)]
static NULL_PROVIDER: StorageProviderEntry = StorageProviderEntry {
    name: "null",
    description: "Null storage provider (accepts writes, stores nothing)",
    factory: |_config: &StorageProviderConfig| Ok(Arc::new(NullStorageProvider::new())),
};
