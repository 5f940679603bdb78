//! UI-facing binding over a value cell
//!
//! A [`StorageBinding`] is what a view holds: it reads and writes through its
//! cell and calls an invalidation hook whenever the value changes, whether the
//! change came from this binding or from another one bound to the same key.

use crate::cell::{CellSubscription, ValueCell};
use keystash_domain::value_objects::{StorageKey, StoredValue, WriteOutcome};

/// Binding of a view property to a [`ValueCell`]
#[derive(Debug)]
pub struct StorageBinding<T> {
    cell: ValueCell<T>,
    invalidation: Option<CellSubscription>,
}

impl<T> StorageBinding<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    /// Bind to `cell` without an invalidation hook
    pub fn new(cell: ValueCell<T>) -> Self {
        Self {
            cell,
            invalidation: None,
        }
    }

    /// Bind to `cell`, calling `on_invalidate` after every value change
    pub fn with_invalidation<F>(cell: ValueCell<T>, on_invalidate: F) -> Self
    where
        F: Fn() + Send + 'static,
    {
        let invalidation = cell.subscribe(move |_| on_invalidate());
        Self {
            cell,
            invalidation: Some(invalidation),
        }
    }

    /// Current value
    pub fn get(&self) -> StoredValue<T> {
        self.cell.get()
    }

    /// Current value, `None` when absent
    pub fn value(&self) -> Option<T> {
        self.cell.get().into_option()
    }

    /// Write a new value through the cell
    pub fn set(&self, value: impl Into<StoredValue<T>>) -> WriteOutcome {
        self.cell.set(value)
    }

    /// Whether an invalidation hook is registered and running
    pub fn is_observed(&self) -> bool {
        self.invalidation
            .as_ref()
            .is_some_and(CellSubscription::is_active)
    }
}

impl<T> StorageBinding<T> {
    /// Key of the underlying cell
    pub fn key(&self) -> &StorageKey {
        self.cell.key()
    }

    /// The underlying cell
    pub fn cell(&self) -> &ValueCell<T> {
        &self.cell
    }
}
