//! Storage-backed observable value
//!
//! A [`ValueCell`] owns one observable value for one [`StorageKey`]:
//!
//! - On construction it loads the stored bytes and decodes them, falling back
//!   to the default value when the entry is missing or unreadable.
//! - On [`ValueCell::set`] it writes through to storage first, then updates
//!   its value, then publishes a [`ChangeEvent`] on the change bus.
//! - Events published by other cells for the same key are applied to the
//!   local value when it differs. Applying an event never touches storage and
//!   never publishes, so a write propagates exactly once.
//!
//! A cell's own events only advance its write bookkeeping: the value was
//! already set when the write committed. While one of its writes is still on
//! the bus, events from other cells were published before that write and are
//! skipped. Every cell therefore ends on the last published value without
//! ever stepping back to an older one.
//!
//! Storage and codec failures never surface as errors. The value simply does
//! not change, and [`WriteOutcome`] / [`LoadOutcome`] tell callers what
//! happened.

use futures::StreamExt;
use keystash_domain::events::ChangeEvent;
use keystash_domain::ports::{
    ChangeEventStream, SharedChangeBus, SharedCodec, SharedStorageProvider,
};
use keystash_domain::value_objects::{CellId, LoadOutcome, StorageKey, StoredValue, WriteOutcome};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// State shared between a cell and its bus listener
struct CellShared<T> {
    id: CellId,
    key: StorageKey,
    default: StoredValue<T>,
    storage: SharedStorageProvider,
    codec: SharedCodec<T>,
    bus: SharedChangeBus,
    state: watch::Sender<StoredValue<T>>,
    writes: Mutex<WriteSequence>,
}

/// Own writes published vs. own events received back from the bus
#[derive(Debug, Default, Clone, Copy)]
struct WriteSequence {
    published: u64,
    echoed: u64,
}

impl WriteSequence {
    fn in_flight(&self) -> bool {
        self.echoed < self.published
    }
}

impl<T> CellShared<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    /// Read and decode the stored entry, falling back to the default
    fn load(&self) -> (StoredValue<T>, LoadOutcome) {
        load_or_default(&self.storage, &self.codec, &self.key, &self.default)
    }

    /// Replace the current value, notifying watchers only on change
    fn replace_if_changed(&self, value: StoredValue<T>) -> bool {
        self.state.send_if_modified(|current| {
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        })
    }

    /// Lock the write bookkeeping; reads and writes of the value happen under it
    fn writes(&self) -> MutexGuard<'_, WriteSequence> {
        self.writes.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply an event from the bus
    ///
    /// Returns `true` if the local value changed.
    fn apply_event(&self, event: &ChangeEvent) -> bool {
        if !event.concerns(&self.key) {
            return false;
        }

        let mut writes = self.writes();
        if event.origin == self.id {
            writes.echoed = writes.echoed.max(event.sequence);
            return false;
        }
        if writes.in_flight() {
            debug!(
                cell = %self.id,
                key = %self.key,
                origin = %event.origin,
                "Skipping change published before a pending write"
            );
            return false;
        }

        let incoming = match &event.payload {
            None => StoredValue::Absent,
            Some(bytes) => match self.codec.decode(bytes) {
                Ok(value) => StoredValue::Present(value),
                Err(e) => {
                    debug!(cell = %self.id, key = %self.key, error = %e, "Ignoring undecodable change");
                    return false;
                }
            },
        };

        let applied = self.replace_if_changed(incoming);
        if applied {
            debug!(cell = %self.id, key = %self.key, origin = %event.origin, "Applied change from bus");
        }
        applied
    }
}

fn load_or_default<T: Clone>(
    storage: &SharedStorageProvider,
    codec: &SharedCodec<T>,
    key: &StorageKey,
    default: &StoredValue<T>,
) -> (StoredValue<T>, LoadOutcome) {
    let Some(bytes) = storage.get(key.as_str()) else {
        return (default.clone(), LoadOutcome::Absent);
    };
    match codec.decode(&bytes) {
        Ok(value) => (StoredValue::Present(value), LoadOutcome::Stored),
        Err(e) => {
            warn!(key = %key, error = %e, "Stored value could not be decoded, using default");
            (default.clone(), LoadOutcome::DecodeFailed)
        }
    }
}

/// Listen for bus events until the stream ends or the cell is dropped
async fn listen<T>(cell: Weak<CellShared<T>>, mut events: ChangeEventStream)
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    while let Some(event) = events.next().await {
        let Some(shared) = cell.upgrade() else {
            break;
        };
        shared.apply_event(&event);
    }
}

/// Observable value persisted in secure storage and kept in sync with every
/// other cell bound to the same key
///
/// # Example
///
/// ```ignore
/// let cell = ValueCell::new("flag", false, storage, Arc::new(JsonCodec), bus);
/// cell.set(true);
/// assert_eq!(cell.get(), StoredValue::Present(true));
/// ```
pub struct ValueCell<T> {
    shared: Arc<CellShared<T>>,
    load_outcome: LoadOutcome,
    listener: Option<JoinHandle<()>>,
}

impl<T> ValueCell<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    /// Create a cell bound to `key`
    ///
    /// Loads the stored value (or uses `default`) and subscribes to the bus
    /// before returning, so every event published afterwards is observed.
    ///
    /// The bus listener runs on the current tokio runtime. Outside a runtime
    /// the cell still loads and writes through, but it does not follow
    /// changes made by other cells until [`ValueCell::reload`] is called.
    pub fn new(
        key: impl Into<StorageKey>,
        default: impl Into<StoredValue<T>>,
        storage: SharedStorageProvider,
        codec: SharedCodec<T>,
        bus: SharedChangeBus,
    ) -> Self {
        let key = key.into();
        let default = default.into();
        let runtime = Handle::try_current();
        let events = runtime.is_ok().then(|| bus.subscribe());

        let (initial, load_outcome) = load_or_default(&storage, &codec, &key, &default);
        let (state, _) = watch::channel(initial);

        let shared = Arc::new(CellShared {
            id: CellId::new(),
            key,
            default,
            storage,
            codec,
            bus,
            state,
            writes: Mutex::new(WriteSequence::default()),
        });
        debug!(cell = %shared.id, key = %shared.key, outcome = %load_outcome, "Cell initialized");

        let listener = match runtime {
            Ok(handle) => events.map(|events| handle.spawn(listen(Arc::downgrade(&shared), events))),
            Err(_) => {
                warn!(cell = %shared.id, key = %shared.key, "No tokio runtime, cell will not follow the change bus");
                None
            }
        };

        Self {
            shared,
            load_outcome,
            listener,
        }
    }

    /// Current value
    pub fn get(&self) -> StoredValue<T> {
        self.shared.state.borrow().clone()
    }

    /// Run `f` against the current value without cloning it
    pub fn with<R>(&self, f: impl FnOnce(&StoredValue<T>) -> R) -> R {
        f(&self.shared.state.borrow())
    }

    /// Write a new value
    ///
    /// [`StoredValue::Absent`] deletes the storage entry. The local value is
    /// updated and an event is published only when storage accepted the
    /// write; otherwise nothing changes.
    pub fn set(&self, value: impl Into<StoredValue<T>>) -> WriteOutcome {
        let value = value.into();
        let shared = &self.shared;
        let key = shared.key.as_str();
        let mut writes = shared.writes();

        let payload = match &value {
            StoredValue::Absent => {
                if !shared.storage.delete(key) {
                    warn!(cell = %shared.id, key = %shared.key, "Storage rejected delete, value unchanged");
                    return WriteOutcome::StorageRejected;
                }
                None
            }
            StoredValue::Present(inner) => {
                let bytes = match shared.codec.encode(inner) {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        warn!(cell = %shared.id, key = %shared.key, error = %e, "Value could not be encoded, write skipped");
                        return WriteOutcome::EncodeFailed;
                    }
                };
                if !shared.storage.put(key, &bytes) {
                    warn!(cell = %shared.id, key = %shared.key, "Storage rejected put, value unchanged");
                    return WriteOutcome::StorageRejected;
                }
                Some(bytes)
            }
        };

        shared.replace_if_changed(value);
        writes.published += 1;
        let sequence = writes.published;
        let delivered = shared.bus.publish(ChangeEvent {
            key: shared.key.clone(),
            origin: shared.id,
            payload,
            sequence,
        });
        if delivered == 0 {
            // Nobody listens, not even this cell: the event never comes back
            writes.echoed = sequence;
        }
        debug!(cell = %shared.id, key = %shared.key, sequence, delivered, "Committed write");
        WriteOutcome::Committed
    }

    /// Re-read storage and apply the result locally
    ///
    /// Picks up entries written or deleted outside of any cell. Nothing is
    /// written and nothing is published.
    pub fn reload(&self) -> LoadOutcome {
        let mut writes = self.shared.writes();
        // Own events still on the bus no longer hold back other cells' changes
        writes.echoed = writes.published;
        let (value, outcome) = self.shared.load();
        if self.shared.replace_if_changed(value) {
            debug!(cell = %self.shared.id, key = %self.shared.key, outcome = %outcome, "Reloaded changed value");
        }
        outcome
    }

    /// Receiver that resolves whenever the value changes
    ///
    /// The current value is marked as seen.
    pub fn watch(&self) -> watch::Receiver<StoredValue<T>> {
        self.shared.state.subscribe()
    }

    /// Invoke `on_change` with the new value after every change
    ///
    /// Rapid consecutive changes may be reported once, with the latest value.
    /// The callback runs on a tokio task until the returned subscription is
    /// cancelled or dropped, or the cell is dropped.
    pub fn subscribe<F>(&self, on_change: F) -> CellSubscription
    where
        F: Fn(&StoredValue<T>) + Send + 'static,
    {
        let Ok(runtime) = Handle::try_current() else {
            warn!(cell = %self.shared.id, key = %self.shared.key, "No tokio runtime, change callback not registered");
            return CellSubscription { task: None };
        };
        let mut changes = self.shared.state.subscribe();
        let task = runtime.spawn(async move {
            while changes.changed().await.is_ok() {
                let value = changes.borrow_and_update().clone();
                on_change(&value);
            }
        });
        CellSubscription { task: Some(task) }
    }
}

impl<T> ValueCell<T> {
    /// Key this cell is bound to
    pub fn key(&self) -> &StorageKey {
        &self.shared.key
    }

    /// Identity of this cell on the change bus
    pub fn id(&self) -> CellId {
        self.shared.id
    }

    /// Value used when storage holds nothing readable
    pub fn default_value(&self) -> &StoredValue<T> {
        &self.shared.default
    }

    /// How the initial value was obtained
    pub fn load_outcome(&self) -> LoadOutcome {
        self.load_outcome
    }
}

impl<T> Drop for ValueCell<T> {
    fn drop(&mut self) {
        if let Some(listener) = &self.listener {
            listener.abort();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ValueCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueCell")
            .field("id", &self.shared.id)
            .field("key", &self.shared.key)
            .field("value", &*self.shared.state.borrow())
            .field("storage", &self.shared.storage.provider_name())
            .field("codec", &self.shared.codec.codec_name())
            .finish()
    }
}

/// Handle to a change callback registered with [`ValueCell::subscribe`]
///
/// Dropping the handle cancels the callback.
#[derive(Debug)]
pub struct CellSubscription {
    task: Option<JoinHandle<()>>,
}

impl CellSubscription {
    /// Stop invoking the callback
    pub fn cancel(self) {
        if let Some(task) = &self.task {
            task.abort();
        }
    }

    /// Whether the callback is still registered
    ///
    /// Becomes `false` once the owning cell has been dropped, and is never
    /// `true` for a subscription made outside a tokio runtime.
    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for CellSubscription {
    fn drop(&mut self) {
        if let Some(task) = &self.task {
            task.abort();
        }
    }
}
