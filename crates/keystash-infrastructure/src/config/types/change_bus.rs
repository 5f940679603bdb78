//! Change bus configuration types

use keystash_domain::constants::CHANGE_BUS_DEFAULT_CAPACITY;
use serde::{Deserialize, Serialize};

/// Change bus implementations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChangeBusKind {
    /// In-process broadcast channel (Tokio), shared process-wide
    #[default]
    Tokio,
    /// No-op bus; cells stay isolated from each other
    Null,
}

/// Change bus configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeBusConfig {
    /// Change bus implementation to use
    pub provider: ChangeBusKind,

    /// Events buffered per subscriber before the oldest are skipped
    pub capacity: usize,
}

impl Default for ChangeBusConfig {
    fn default() -> Self {
        Self {
            provider: ChangeBusKind::Tokio,
            capacity: CHANGE_BUS_DEFAULT_CAPACITY,
        }
    }
}

impl ChangeBusConfig {
    /// Create config for Tokio broadcast (default)
    pub fn tokio() -> Self {
        Self::default()
    }

    /// Create config for Tokio broadcast with custom capacity
    pub fn tokio_with_capacity(capacity: usize) -> Self {
        Self {
            provider: ChangeBusKind::Tokio,
            capacity,
        }
    }

    /// Create config for Null (testing)
    pub fn null() -> Self {
        Self {
            provider: ChangeBusKind::Null,
            ..Default::default()
        }
    }
}
