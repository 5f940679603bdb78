//! Change Bus Provider Port
//!
//! Defines the contract for in-process fan-out of [`ChangeEvent`]s.
//!
//! ## Delivery Guarantees
//!
//! - Every subscriber receives every event; filtering by key is the
//!   subscriber's job.
//! - `publish` never waits for subscribers.
//! - Events from one publisher reach each subscriber in publish order.
//! - A subscriber only sees events published after it subscribed.
//!
//! ## Usage
//!
//! ```no_run
//! use futures::StreamExt;
//! use keystash_domain::ports::infrastructure::ChangeBusProvider;
//! use keystash_domain::{CellId, ChangeEvent, StorageKey};
//!
//! async fn relay(bus: &dyn ChangeBusProvider) {
//!     let mut events = bus.subscribe();
//!     bus.publish(ChangeEvent::absent(StorageKey::new("token"), CellId::new()));
//!     while let Some(event) = events.next().await {
//!         println!("{} changed", event.key);
//!     }
//! }
//! ```

use crate::events::ChangeEvent;
use futures::Stream;
use std::pin::Pin;
use std::sync::Arc;

/// Boxed async stream of change events
///
/// Hides the channel implementation behind a plain `Stream`. Dropping the
/// stream releases the subscription.
pub type ChangeEventStream = Pin<Box<dyn Stream<Item = ChangeEvent> + Send + 'static>>;

/// Change bus provider interface
///
/// | Method | Purpose |
/// |--------|---------|
/// | `publish` | Fire-and-forget broadcast of one event |
/// | `subscribe` | Stream of all events published from now on |
/// | `subscriber_count` | Number of live subscriptions |
pub trait ChangeBusProvider: Send + Sync + std::fmt::Debug {
    /// Broadcast an event to all current subscribers
    ///
    /// Returns the number of subscribers the event was handed to. Never blocks.
    fn publish(&self, event: ChangeEvent) -> usize;

    /// Subscribe to all events published after this call returns
    fn subscribe(&self) -> ChangeEventStream;

    /// Number of live subscriptions
    fn subscriber_count(&self) -> usize;

    /// Check if there are any live subscriptions
    fn has_subscribers(&self) -> bool {
        self.subscriber_count() > 0
    }

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}

/// Shared change bus for dependency injection
pub type SharedChangeBus = Arc<dyn ChangeBusProvider>;
