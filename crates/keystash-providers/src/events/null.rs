//! Null change bus for testing
//!
//! Discards all published events without any side effects. Cells bound to
//! it behave as isolated, storage-backed observables.

use futures::stream;
use keystash_domain::events::ChangeEvent;
use keystash_domain::ports::{ChangeBusProvider, ChangeEventStream};
use std::sync::Arc;

/// Null change bus
///
/// Publishing reaches nobody and subscriptions end immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullChangeBus;

impl NullChangeBus {
    /// Create a new null change bus
    pub fn new() -> Self {
        Self
    }

    /// Create as Arc for sharing
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

impl ChangeBusProvider for NullChangeBus {
    fn publish(&self, _event: ChangeEvent) -> usize {
        0
    }

    fn subscribe(&self) -> ChangeEventStream {
        Box::pin(stream::empty())
    }

    fn subscriber_count(&self) -> usize {
        0
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
