//! In-memory storage provider implementation
//!
//! Provides an in-memory secure storage backend for development and testing.
//! Data is not persisted and will be lost on restart.

use dashmap::DashMap;
use keystash_application::registry::{
    STORAGE_PROVIDERS, StorageProviderConfig, StorageProviderEntry,
};
use keystash_domain::ports::SecureStorageProvider;
use std::sync::Arc;

/// In-memory storage provider
///
/// Stores blobs in a concurrent hash map. Clones share the same entries, so
/// a clone handed to a test can inspect what a cell wrote.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorageProvider {
    entries: Arc<DashMap<String, Vec<u8>>>,
}

impl InMemoryStorageProvider {
    /// Create a new, empty in-memory storage provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the provider holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether an entry exists for `key`
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove every entry
    pub fn clear(&self) {
        self.entries.clear();
    }
}

impl SecureStorageProvider for InMemoryStorageProvider {
    fn put(&self, key: &str, data: &[u8]) -> bool {
        self.entries.insert(key.to_string(), data.to_vec());
        true
    }

    fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    fn delete(&self, key: &str) -> bool {
        // Removing a missing entry still leaves the key absent
        self.entries.remove(key);
        true
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(STORAGE_PROVIDERS)]
static MEMORY_PROVIDER: StorageProviderEntry = StorageProviderEntry {
    name: "memory",
    description: "In-memory storage provider (not persisted)",
    factory: |_config: &StorageProviderConfig| Ok(Arc::new(InMemoryStorageProvider::new())),
};
