//! Tests for wiring storage and change bus from configuration
//!
//! The Tokio change bus is process-wide, so every test binds its own keys.

use keystash_domain::StoredValue;
use keystash_infrastructure::config::{AppConfig, ChangeBusConfig, ConfigBuilder, StorageConfig};
use keystash_infrastructure::di::{init_context, resolve_change_bus, resolve_storage};
use keystash_infrastructure::global_change_bus;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

const TEST_KEY_HEX: &str = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";

#[tokio::test]
async fn test_default_context() {
    let context = init_context(AppConfig::default()).unwrap();
    assert_eq!(context.storage.provider_name(), "memory");
    assert_eq!(context.change_bus.provider_name(), "tokio");
}

#[tokio::test]
async fn test_context_cells_stay_in_sync() {
    let context = init_context(AppConfig::default()).unwrap();
    let editor = context.binding::<bool>("bootstrap.sync.flag", false);
    let viewer = context.cell::<bool>("bootstrap.sync.flag", false);
    let mut changes = viewer.watch();

    editor.set(true);
    tokio::time::timeout(Duration::from_secs(1), changes.changed())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(viewer.get(), StoredValue::Present(true));
}

#[tokio::test]
async fn test_tokio_bus_is_the_global_instance() {
    let bus = resolve_change_bus(&ChangeBusConfig::tokio_with_capacity(8));
    assert!(Arc::ptr_eq(&bus, &global_change_bus()));
}

#[tokio::test]
async fn test_null_bus_isolates_cells() {
    let config = ConfigBuilder::new()
        .with_change_bus(ChangeBusConfig::null())
        .build();
    let context = init_context(config).unwrap();
    let a = context.cell::<bool>("bootstrap.null.flag", false);
    let b = context.cell::<bool>("bootstrap.null.flag", false);

    a.set(true);
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert_eq!(b.get(), StoredValue::Present(false));
    b.reload();
    assert_eq!(b.get(), StoredValue::Present(true));
}

#[tokio::test]
async fn test_filesystem_storage_persists_across_contexts() {
    let dir = TempDir::new().unwrap();
    let config = ConfigBuilder::new()
        .with_storage(StorageConfig::filesystem(dir.path()).with_service("com.example.tests"))
        .build();

    let first = init_context(config.clone()).unwrap();
    first
        .cell::<String>("bootstrap.fs.user", StoredValue::Absent)
        .set("alice".to_string());

    let second = init_context(config).unwrap();
    let user = second.cell::<String>("bootstrap.fs.user", StoredValue::Absent);
    assert_eq!(user.get(), StoredValue::Present("alice".to_string()));
    assert!(dir.path().join("com.example.tests").is_dir());
}

#[tokio::test]
async fn test_encrypted_storage_hides_plaintext() {
    let dir = TempDir::new().unwrap();
    let storage_config = StorageConfig::filesystem(dir.path()).with_encryption_key(TEST_KEY_HEX);

    let storage = resolve_storage(&storage_config).unwrap();
    assert_eq!(storage.provider_name(), "encrypted");
    assert!(storage.put("token", b"plain-secret"));
    assert_eq!(storage.get("token"), Some(b"plain-secret".to_vec()));

    for entry in std::fs::read_dir(dir.path().join("keystash")).unwrap() {
        let bytes = std::fs::read(entry.unwrap().path()).unwrap();
        assert!(!bytes.windows(12).any(|w| w == b"plain-secret"));
    }
}

#[test]
fn test_unknown_provider_is_a_configuration_error() {
    let config = ConfigBuilder::new()
        .with_storage(StorageConfig {
            provider: "keyring".to_string(),
            ..StorageConfig::memory()
        })
        .build();
    let err = init_context(config).unwrap_err();
    assert!(err.to_string().contains("keyring"));
}
