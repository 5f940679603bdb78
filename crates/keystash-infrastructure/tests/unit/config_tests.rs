//! Tests for configuration loading and validation

use keystash_domain::error::Error;
use keystash_infrastructure::config::{
    AppConfig, ChangeBusConfig, ChangeBusKind, ConfigBuilder, ConfigLoader, LoggingConfig,
    StorageConfig,
};
use std::env;
use tempfile::TempDir;

const TEST_KEY_HEX: &str = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";

fn loader_for(dir: &TempDir, contents: &str) -> ConfigLoader {
    let path = dir.path().join("keystash.toml");
    std::fs::write(&path, contents).unwrap();
    ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("KEYSTASH_CONFIG_TESTS")
}

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.storage.provider, "memory");
    assert_eq!(config.storage.service, "keystash");
    assert!(!config.storage.encryption.enabled);
    assert_eq!(config.change_bus.provider, ChangeBusKind::Tokio);
    assert_eq!(config.change_bus.capacity, 1024);
}

#[test]
fn test_toml_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let config = loader_for(
        &dir,
        r#"
[storage]
provider = "filesystem"
path = "/tmp/keystash-vault"
service = "com.example.app"

[change_bus]
provider = "null"
"#,
    )
    .load()
    .unwrap();

    assert_eq!(config.storage.provider, "filesystem");
    assert_eq!(config.storage.service, "com.example.app");
    assert_eq!(config.change_bus.provider, ChangeBusKind::Null);
    // Untouched sections keep their defaults
    assert_eq!(config.change_bus.capacity, 1024);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = ConfigLoader::new()
        .with_config_path(dir.path().join("absent.toml"))
        .with_env_prefix("KEYSTASH_CONFIG_TESTS")
        .load()
        .unwrap();
    assert_eq!(config.storage.provider, "memory");
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let dir = TempDir::new().unwrap();
    let result = loader_for(&dir, "[logging]\nlevel = \"loud\"\n").load();
    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_malformed_file_is_a_configuration_error() {
    let dir = TempDir::new().unwrap();
    let result = loader_for(&dir, "[storage\nprovider = ").load();
    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_filesystem_provider_requires_path() {
    let mut storage = StorageConfig::filesystem("/tmp/unused");
    storage.path = None;
    let result = ConfigBuilder::new().with_storage(storage).try_build();
    assert!(result.is_err());
}

#[test]
fn test_zero_capacity_is_rejected() {
    let result = ConfigBuilder::new()
        .with_change_bus(ChangeBusConfig::tokio_with_capacity(0))
        .try_build();
    assert!(result.is_err());
}

#[test]
fn test_encryption_requires_valid_key() {
    let missing_key = StorageConfig {
        encryption: keystash_infrastructure::config::EncryptionConfig {
            enabled: true,
            master_key_hex: None,
        },
        ..StorageConfig::memory()
    };
    assert!(ConfigBuilder::new().with_storage(missing_key).try_build().is_err());

    let short_key = StorageConfig::memory().with_encryption_key("00ff");
    assert!(ConfigBuilder::new().with_storage(short_key).try_build().is_err());

    let not_hex = StorageConfig::memory().with_encryption_key("zz".repeat(32));
    assert!(ConfigBuilder::new().with_storage(not_hex).try_build().is_err());

    let valid = StorageConfig::memory().with_encryption_key(TEST_KEY_HEX);
    assert!(ConfigBuilder::new().with_storage(valid).try_build().is_ok());
}

#[test]
fn test_builder() {
    let config = ConfigBuilder::new()
        .with_logging(LoggingConfig {
            level: "debug".to_string(),
            json_format: true,
            file_output: None,
        })
        .with_storage(StorageConfig::null().with_service("previews"))
        .with_change_bus(ChangeBusConfig::null())
        .build();

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.storage.provider, "null");
    assert_eq!(config.storage.service, "previews");
    assert_eq!(config.change_bus.provider, ChangeBusKind::Null);
}

#[test]
fn test_saved_file_loads_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.toml");
    let config = ConfigBuilder::new()
        .with_storage(StorageConfig::filesystem(dir.path().join("vault")).with_service("svc"))
        .with_change_bus(ChangeBusConfig::tokio_with_capacity(64))
        .build();

    let loader = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("KEYSTASH_CONFIG_TESTS");
    loader.save_to_file(&config, &path).unwrap();
    let loaded = loader.load().unwrap();

    assert_eq!(loaded.storage.provider, "filesystem");
    assert_eq!(loaded.storage.path, Some(dir.path().join("vault")));
    assert_eq!(loaded.storage.service, "svc");
    assert_eq!(loaded.change_bus.capacity, 64);
}

/// Verify nested keys are read from prefixed environment variables
///
/// Run with: `cargo test -p keystash-infrastructure --test unit env -- --test-threads=1 --ignored`
#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_overrides_file() {
    let dir = TempDir::new().unwrap();
    let loader = loader_for(&dir, "[storage]\nservice = \"from-file\"\n")
        .with_env_prefix("KEYSTASH_ENV_TEST");

    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var("KEYSTASH_ENV_TEST_STORAGE__SERVICE", "from-env");
        env::set_var("KEYSTASH_ENV_TEST_CHANGE_BUS__CAPACITY", "16");
    }
    let config = loader.load();
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var("KEYSTASH_ENV_TEST_STORAGE__SERVICE");
        env::remove_var("KEYSTASH_ENV_TEST_CHANGE_BUS__CAPACITY");
    }

    let config = config.unwrap();
    assert_eq!(config.storage.service, "from-env");
    assert_eq!(config.change_bus.capacity, 16);
}
