//! Tokio Broadcast Change Bus
//!
//! Change bus implementation using tokio broadcast channels for
//! in-process event distribution.
//!
//! ## Features
//!
//! - Fan-out to any number of subscribers
//! - Non-blocking publish (publishers never wait for subscribers)
//! - Per-subscriber ordering of events
//! - No persistence (events are ephemeral)
//!
//! ## Example
//!
//! ```ignore
//! use keystash_providers::events::TokioChangeBus;
//!
//! let bus = TokioChangeBus::new();
//! let mut events = bus.subscribe();
//! bus.publish(ChangeEvent::absent("flag".into(), CellId::new()));
//! ```

use futures::stream;
use keystash_domain::constants::{CHANGE_BUS_DEFAULT_CAPACITY, STORAGE_UPDATED_TOPIC};
use keystash_domain::events::ChangeEvent;
use keystash_domain::ports::{ChangeBusProvider, ChangeEventStream};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, warn};

/// Change bus using tokio broadcast channels
///
/// ## Capacity
///
/// Each subscriber buffers up to `capacity` events. A subscriber that falls
/// further behind skips the oldest events and logs the lag; publishers are
/// never blocked.
#[derive(Clone)]
pub struct TokioChangeBus {
    /// Broadcast sender for publishing events
    sender: Arc<broadcast::Sender<ChangeEvent>>,
    /// Channel capacity
    capacity: usize,
}

impl TokioChangeBus {
    /// Create a new change bus with default capacity (1024)
    pub fn new() -> Self {
        Self::with_capacity(CHANGE_BUS_DEFAULT_CAPACITY)
    }

    /// Create with custom capacity
    ///
    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender: Arc::new(sender),
            capacity,
        }
    }

    /// Create as Arc for sharing
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Configured channel capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for TokioChangeBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TokioChangeBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokioChangeBus")
            .field("capacity", &self.capacity)
            .field("subscribers", &self.sender.receiver_count())
            .finish()
    }
}

impl ChangeBusProvider for TokioChangeBus {
    fn publish(&self, event: ChangeEvent) -> usize {
        let key = event.key.clone();
        match self.sender.send(event) {
            Ok(count) => {
                debug!(topic = STORAGE_UPDATED_TOPIC, key = %key, "Published change to {} subscribers", count);
                count
            }
            Err(_) => {
                debug!(topic = STORAGE_UPDATED_TOPIC, key = %key, "Published change but no subscribers");
                0
            }
        }
    }

    fn subscribe(&self) -> ChangeEventStream {
        let receiver = self.sender.subscribe();

        // Convert broadcast receiver to a Stream that skips over lag
        let stream = stream::unfold(receiver, |mut rx| async move {
            loop {
                match rx.recv().await {
                    Ok(event) => return Some((event, rx)),
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        warn!(topic = STORAGE_UPDATED_TOPIC, "Change stream lagged by {} events", n);
                        continue;
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        return None;
                    }
                }
            }
        });

        Box::pin(stream)
    }

    fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    fn provider_name(&self) -> &str {
        "tokio"
    }
}
