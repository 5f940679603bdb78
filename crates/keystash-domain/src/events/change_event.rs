//! Change event broadcast between cells

use crate::value_objects::{CellId, StorageKey};
use serde::{Deserialize, Serialize};

/// Notification that a cell committed a new value for a key
///
/// Events are immutable facts. The payload is the value as encoded by the
/// publishing cell's codec; `None` means the value was deleted. Receivers
/// decode it with their own codec and ignore payloads they cannot decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    /// Key whose value changed
    pub key: StorageKey,
    /// Cell that performed the write
    pub origin: CellId,
    /// Encoded new value, `None` when the entry was deleted
    pub payload: Option<Vec<u8>>,
    /// Position of this write among the origin cell's writes, starting at 1
    ///
    /// Zero for events not published by a cell.
    #[serde(default)]
    pub sequence: u64,
}

impl ChangeEvent {
    /// Event for a newly written value
    pub fn present(key: StorageKey, origin: CellId, payload: Vec<u8>) -> Self {
        Self {
            key,
            origin,
            payload: Some(payload),
            sequence: 0,
        }
    }

    /// Event for a deleted value
    pub fn absent(key: StorageKey, origin: CellId) -> Self {
        Self {
            key,
            origin,
            payload: None,
            sequence: 0,
        }
    }

    /// Set the origin cell's write sequence number
    pub fn with_sequence(mut self, sequence: u64) -> Self {
        self.sequence = sequence;
        self
    }

    /// Returns `true` if the event reports a deletion
    pub fn is_absent(&self) -> bool {
        self.payload.is_none()
    }

    /// Returns `true` if the event concerns `key`
    pub fn concerns(&self, key: &StorageKey) -> bool {
        &self.key == key
    }
}
