//! Property-wrapper style entry point
//!
//! [`KeychainStorage`] bundles the usual choices: JSON encoding and the
//! process-wide change bus. Use [`ValueCell`] directly for anything else.

use crate::application::{StorageBinding, ValueCell};
use crate::domain::ports::SharedStorageProvider;
use crate::domain::{StorageKey, StoredValue, WriteOutcome};
use crate::infrastructure::global_change_bus;
use crate::providers::JsonCodec;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// A value stored under `key` in `storage`, shared by every
/// `KeychainStorage` bound to the same key
///
/// Created outside a tokio runtime it still reads and writes storage, but
/// does not follow changes made through other bindings.
#[derive(Debug)]
pub struct KeychainStorage<T> {
    binding: StorageBinding<T>,
}

impl<T> KeychainStorage<T>
where
    T: Serialize + DeserializeOwned + Clone + PartialEq + Send + Sync + 'static,
{
    /// Load the value stored under `key`, or `default` when there is none
    pub fn new(
        default: impl Into<StoredValue<T>>,
        storage: SharedStorageProvider,
        key: impl Into<StorageKey>,
    ) -> Self {
        Self {
            binding: StorageBinding::new(bind_cell(default, storage, key)),
        }
    }

    /// Like [`KeychainStorage::new`], calling `on_invalidate` after every change
    pub fn with_invalidation<F>(
        default: impl Into<StoredValue<T>>,
        storage: SharedStorageProvider,
        key: impl Into<StorageKey>,
        on_invalidate: F,
    ) -> Self
    where
        F: Fn() + Send + 'static,
    {
        Self {
            binding: StorageBinding::with_invalidation(
                bind_cell(default, storage, key),
                on_invalidate,
            ),
        }
    }

    /// Current value
    pub fn get(&self) -> StoredValue<T> {
        self.binding.get()
    }

    /// Current value, `None` when absent
    pub fn value(&self) -> Option<T> {
        self.binding.value()
    }

    /// Store a new value; [`StoredValue::Absent`] or `None` deletes the entry
    pub fn set(&self, value: impl Into<StoredValue<T>>) -> WriteOutcome {
        self.binding.set(value)
    }
}

impl<T> KeychainStorage<T> {
    /// Key the value is stored under
    pub fn key(&self) -> &StorageKey {
        self.binding.key()
    }

    /// The underlying binding
    pub fn binding(&self) -> &StorageBinding<T> {
        &self.binding
    }

    /// The underlying cell
    pub fn cell(&self) -> &ValueCell<T> {
        self.binding.cell()
    }
}

fn bind_cell<T>(
    default: impl Into<StoredValue<T>>,
    storage: SharedStorageProvider,
    key: impl Into<StorageKey>,
) -> ValueCell<T>
where
    T: Serialize + DeserializeOwned + Clone + PartialEq + Send + Sync + 'static,
{
    ValueCell::new(
        key,
        default,
        storage,
        Arc::new(JsonCodec),
        global_change_bus(),
    )
}
