//! Top-level application configuration

use super::{ChangeBusConfig, LoggingConfig, StorageConfig};
use serde::{Deserialize, Serialize};

/// Complete Keystash configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Secure storage backend
    pub storage: StorageConfig,

    /// Change bus shared by value cells
    pub change_bus: ChangeBusConfig,
}
