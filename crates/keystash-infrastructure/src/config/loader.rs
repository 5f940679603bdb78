//! Configuration loader
//!
//! Handles loading configuration from various sources including
//! TOML files, environment variables, and default values.

use crate::config::{AppConfig, ChangeBusKind, LoggingConfig, StorageConfig};
use crate::constants::{
    AES_GCM_KEY_SIZE, CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR,
    DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use keystash_domain::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix, nesting separated by `__`
    ///    (e.g., `KEYSTASH_STORAGE__PROVIDER=filesystem`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_SEPARATOR),
        );

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// First existing file among the default configuration locations
    fn find_default_config_path() -> Option<PathBuf> {
        let mut candidates = Vec::new();
        if let Ok(current_dir) = env::current_dir() {
            candidates.push(current_dir.join(DEFAULT_CONFIG_FILENAME));
            candidates.push(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            );
        }
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME));
        }

        candidates.into_iter().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
///
/// Performs validation of all configuration sections.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_logging_config(&config.logging)?;
    validate_storage_config(&config.storage)?;
    validate_change_bus_config(config)?;
    Ok(())
}

fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    parse_log_level(&config.level).map(|_| ())
}

fn validate_storage_config(config: &StorageConfig) -> Result<()> {
    if config.provider.trim().is_empty() {
        return Err(Error::configuration("Storage provider cannot be empty"));
    }
    if config.provider == "filesystem" && config.path.is_none() {
        return Err(Error::configuration(
            "Storage path is required for the filesystem provider",
        ));
    }
    if config.service.trim().is_empty() {
        return Err(Error::configuration("Storage service name cannot be empty"));
    }
    if config.encryption.enabled {
        let key_hex = config.encryption.master_key_hex.as_deref().ok_or_else(|| {
            Error::configuration("A master key is required when encryption is enabled")
        })?;
        let key = hex::decode(key_hex)
            .config_context("Encryption master key is not valid hex")?;
        if key.len() != AES_GCM_KEY_SIZE {
            return Err(Error::configuration(format!(
                "Encryption master key must be {} bytes, got {}",
                AES_GCM_KEY_SIZE,
                key.len()
            )));
        }
    }
    Ok(())
}

fn validate_change_bus_config(config: &AppConfig) -> Result<()> {
    if config.change_bus.provider == ChangeBusKind::Tokio && config.change_bus.capacity == 0 {
        return Err(Error::configuration("Change bus capacity cannot be 0"));
    }
    Ok(())
}

/// Configuration builder for programmatic configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set logging configuration
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Set storage configuration
    pub fn with_storage(mut self, storage: StorageConfig) -> Self {
        self.config.storage = storage;
        self
    }

    /// Set change bus configuration
    pub fn with_change_bus(mut self, change_bus: crate::config::ChangeBusConfig) -> Self {
        self.config.change_bus = change_bus;
        self
    }

    /// Build the configuration
    pub fn build(self) -> AppConfig {
        self.config
    }

    /// Build and validate the configuration
    pub fn try_build(self) -> Result<AppConfig> {
        validate_app_config(&self.config)?;
        Ok(self.config)
    }
}
