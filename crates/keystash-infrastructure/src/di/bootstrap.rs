//! Bootstrap
//!
//! Turns an [`AppConfig`] into ready-to-use collaborators for value cells:
//! the storage provider (resolved by name from the link-time registry and
//! optionally wrapped in encryption) and the change bus.

use crate::bus::init_global_change_bus;
use crate::config::{AppConfig, ChangeBusConfig, ChangeBusKind, StorageConfig};
use crate::crypto::CryptoService;
use keystash_application::registry::{StorageProviderConfig, resolve_storage_provider};
use keystash_application::{StorageBinding, ValueCell};
use keystash_domain::error::{Error, Result};
use keystash_domain::ports::{SharedChangeBus, SharedStorageProvider};
use keystash_domain::value_objects::{StorageKey, StoredValue};
use keystash_providers::storage::EncryptedStorageProvider;
use keystash_providers::{JsonCodec, NullChangeBus};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::info;

/// Collaborators shared by every cell of an application
#[derive(Debug, Clone)]
pub struct KeystashContext {
    /// Configuration the context was built from
    pub config: AppConfig,
    /// Secure storage backend
    pub storage: SharedStorageProvider,
    /// Change bus connecting the cells
    pub change_bus: SharedChangeBus,
}

impl KeystashContext {
    /// Create a JSON-encoded cell bound to `key`
    ///
    /// Outside a tokio runtime the cell does not follow the change bus.
    pub fn cell<T>(&self, key: impl Into<StorageKey>, default: impl Into<StoredValue<T>>) -> ValueCell<T>
    where
        T: Serialize + DeserializeOwned + Clone + PartialEq + Send + Sync + 'static,
    {
        ValueCell::new(
            key,
            default,
            Arc::clone(&self.storage),
            Arc::new(JsonCodec),
            Arc::clone(&self.change_bus),
        )
    }

    /// Create a binding over a JSON-encoded cell bound to `key`
    pub fn binding<T>(
        &self,
        key: impl Into<StorageKey>,
        default: impl Into<StoredValue<T>>,
    ) -> StorageBinding<T>
    where
        T: Serialize + DeserializeOwned + Clone + PartialEq + Send + Sync + 'static,
    {
        StorageBinding::new(self.cell(key, default))
    }
}

/// Build the application context from configuration
pub fn init_context(config: AppConfig) -> Result<KeystashContext> {
    crate::config::loader::validate_app_config(&config)?;

    let storage = resolve_storage(&config.storage)?;
    let change_bus = resolve_change_bus(&config.change_bus);

    info!(
        storage = storage.provider_name(),
        encrypted = config.storage.encryption.enabled,
        change_bus = change_bus.provider_name(),
        "Keystash context initialized"
    );

    Ok(KeystashContext {
        config,
        storage,
        change_bus,
    })
}

/// Resolve the configured storage provider
///
/// The service name becomes the provider namespace. With encryption
/// enabled, the provider is wrapped in AES-256-GCM.
pub fn resolve_storage(config: &StorageConfig) -> Result<SharedStorageProvider> {
    let mut provider_config =
        StorageProviderConfig::new(&config.provider).with_namespace(&config.service);
    if let Some(path) = &config.path {
        provider_config = provider_config.with_path(path);
    }

    let storage = resolve_storage_provider(&provider_config).map_err(Error::configuration)?;

    if !config.encryption.enabled {
        return Ok(storage);
    }

    let key_hex = config.encryption.master_key_hex.as_deref().ok_or_else(|| {
        Error::configuration("A master key is required when encryption is enabled")
    })?;
    let crypto = CryptoService::from_hex(key_hex)?;
    Ok(Arc::new(EncryptedStorageProvider::new(
        storage,
        Arc::new(crypto),
    )))
}

/// Resolve the configured change bus
///
/// The Tokio bus is the process-wide instance, so cells built from any
/// context see each other's writes.
pub fn resolve_change_bus(config: &ChangeBusConfig) -> SharedChangeBus {
    match config.provider {
        ChangeBusKind::Tokio => init_global_change_bus(config.capacity),
        ChangeBusKind::Null => Arc::new(NullChangeBus::new()),
    }
}
