//! Storage Provider Registry
//!
//! Providers register themselves via `#[linkme::distributed_slice]` and are
//! discovered at runtime by iterating [`STORAGE_PROVIDERS`].

use keystash_domain::ports::SecureStorageProvider;
use std::path::PathBuf;
use std::sync::Arc;

/// Configuration for storage provider creation
///
/// Providers read the fields they need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct StorageProviderConfig {
    /// Provider name (e.g., "memory", "filesystem", "null")
    pub provider: String,
    /// Base directory (for file-backed providers)
    pub path: Option<PathBuf>,
    /// Namespace separating the entries of different applications
    pub namespace: Option<String>,
}

impl StorageProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the base directory
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set the namespace
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }
}

/// Registry entry for storage providers
///
/// Each storage provider implementation registers itself with this entry.
/// The entry contains metadata and a factory function to create provider
/// instances.
pub struct StorageProviderEntry {
    /// Unique provider name (e.g., "memory", "filesystem", "null")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory: fn(&StorageProviderConfig) -> Result<Arc<dyn SecureStorageProvider>, String>,
}

/// Storage providers registered at link time
#[linkme::distributed_slice]
pub static STORAGE_PROVIDERS: [StorageProviderEntry] = [..];

/// Resolve storage provider by name from registry
///
/// Searches the registry for a provider matching the configured name
/// and creates an instance using the provider's factory function.
///
/// # Returns
/// * `Ok(Arc<dyn SecureStorageProvider>)` - Created provider instance
/// * `Err(String)` - Error message if provider not found or creation failed
pub fn resolve_storage_provider(
    config: &StorageProviderConfig,
) -> Result<Arc<dyn SecureStorageProvider>, String> {
    let provider_name = &config.provider;

    if let Some(entry) = STORAGE_PROVIDERS.iter().find(|e| e.name == provider_name) {
        return (entry.factory)(config);
    }

    // List available providers for helpful error message
    let available: Vec<&str> = STORAGE_PROVIDERS.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown storage provider '{}'. Available providers: {:?}",
        provider_name, available
    ))
}

/// List all registered storage providers
///
/// Returns a list of (name, description) tuples for all registered
/// storage providers.
pub fn list_storage_providers() -> Vec<(&'static str, &'static str)> {
    STORAGE_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
