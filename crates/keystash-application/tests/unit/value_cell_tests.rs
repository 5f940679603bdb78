//! Tests for a single value cell: loading, writing and local observation

use crate::test_utils::{RecordingStorage, flag_cell, json, next_value, settle, shared_bus};
use futures::StreamExt;
use keystash_application::ValueCell;
use keystash_domain::{LoadOutcome, StoredValue, WriteOutcome};
use keystash_providers::JsonCodec;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[tokio::test]
async fn test_missing_entry_uses_default() {
    let storage = RecordingStorage::new();
    let cell = flag_cell("flag", false, &storage, &shared_bus());

    assert_eq!(cell.get(), StoredValue::Present(false));
    assert_eq!(cell.load_outcome(), LoadOutcome::Absent);
    assert_eq!(storage.gets(), 1);
}

#[tokio::test]
async fn test_undecodable_entry_uses_default() {
    let storage = RecordingStorage::with_entry("flag", b"{not json");
    let cell = flag_cell("flag", true, &storage, &shared_bus());

    assert_eq!(cell.get(), StoredValue::Present(true));
    assert_eq!(cell.load_outcome(), LoadOutcome::DecodeFailed);
    assert!(cell.load_outcome().used_default());
}

#[tokio::test]
async fn test_absent_default() {
    let storage = RecordingStorage::new();
    let cell = flag_cell("flag", StoredValue::Absent, &storage, &shared_bus());

    assert!(cell.get().is_absent());
    assert!(cell.default_value().is_absent());
}

#[tokio::test]
async fn test_stored_entry_is_loaded() {
    let storage = RecordingStorage::with_entry("flag", &json(true));
    let cell = flag_cell("flag", false, &storage, &shared_bus());

    assert_eq!(cell.get(), StoredValue::Present(true));
    assert_eq!(cell.load_outcome(), LoadOutcome::Stored);
}

#[tokio::test]
async fn test_written_value_is_loaded_by_a_new_cell() {
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Session {
        user: String,
        expires: u64,
    }

    let storage = RecordingStorage::new();
    let bus = shared_bus();
    let session = Session {
        user: "alice".into(),
        expires: 1_700_000_000,
    };

    let writer: ValueCell<Session> = ValueCell::new(
        "session",
        StoredValue::Absent,
        storage.clone(),
        Arc::new(JsonCodec),
        bus.clone(),
    );
    assert_eq!(writer.set(session.clone()), WriteOutcome::Committed);
    drop(writer);

    let reader: ValueCell<Session> = ValueCell::new(
        "session",
        StoredValue::Absent,
        storage.clone(),
        Arc::new(JsonCodec),
        bus,
    );
    assert_eq!(reader.get(), StoredValue::Present(session));
}

#[tokio::test]
async fn test_set_writes_through_and_publishes() {
    let storage = RecordingStorage::new();
    let bus = shared_bus();
    let cell = flag_cell("flag", false, &storage, &bus);
    let mut events = bus.subscribe();

    assert_eq!(cell.set(true), WriteOutcome::Committed);

    assert_eq!(cell.get(), StoredValue::Present(true));
    assert_eq!(storage.raw("flag"), Some(json(true)));
    assert_eq!(storage.puts(), 1);

    let event = events.next().await.unwrap();
    assert_eq!(event.key.as_str(), "flag");
    assert_eq!(event.origin, cell.id());
    assert_eq!(event.payload, Some(json(true)));
}

#[tokio::test]
async fn test_rejected_put_changes_nothing() {
    let storage = RecordingStorage::with_entry("flag", &json(false));
    let bus = shared_bus();
    let cell = flag_cell("flag", false, &storage, &bus);
    let mut events = bus.subscribe();
    storage.reject_writes(true);

    assert_eq!(cell.set(true), WriteOutcome::StorageRejected);

    assert_eq!(cell.get(), StoredValue::Present(false));
    assert_eq!(storage.raw("flag"), Some(json(false)));
    let published = tokio::time::timeout(Duration::from_millis(50), events.next()).await;
    assert!(published.is_err(), "no event may follow a rejected write");
}

#[tokio::test]
async fn test_rejected_delete_changes_nothing() {
    let storage = RecordingStorage::with_entry("flag", &json(true));
    let cell = flag_cell("flag", false, &storage, &shared_bus());
    storage.reject_writes(true);

    assert_eq!(cell.set(StoredValue::Absent), WriteOutcome::StorageRejected);
    assert_eq!(cell.get(), StoredValue::Present(true));
    assert_eq!(storage.raw("flag"), Some(json(true)));
}

#[tokio::test]
async fn test_unencodable_value_never_reaches_storage() {
    use keystash_domain::error::{Error, Result};
    use keystash_domain::ports::ValueCodec;

    struct RefusingCodec;

    impl ValueCodec<u32> for RefusingCodec {
        fn encode(&self, _value: &u32) -> Result<Vec<u8>> {
            Err(Error::encode("refused"))
        }

        fn decode(&self, bytes: &[u8]) -> Result<u32> {
            Ok(u32::from(bytes.first().copied().unwrap_or_default()))
        }

        fn codec_name(&self) -> &str {
            "refusing"
        }
    }

    let storage = RecordingStorage::new();
    let cell: ValueCell<u32> = ValueCell::new(
        "counter",
        7u32,
        storage.clone(),
        Arc::new(RefusingCodec),
        shared_bus(),
    );

    assert_eq!(cell.set(8u32), WriteOutcome::EncodeFailed);
    assert_eq!(cell.get(), StoredValue::Present(7));
    assert_eq!(storage.writes(), 0);
}

#[tokio::test]
async fn test_set_absent_deletes_entry() {
    let storage = RecordingStorage::with_entry("flag", &json(true));
    let bus = shared_bus();
    let cell = flag_cell("flag", false, &storage, &bus);
    let mut events = bus.subscribe();

    assert_eq!(cell.set(None), WriteOutcome::Committed);

    assert!(cell.get().is_absent());
    assert_eq!(storage.raw("flag"), None);
    assert_eq!(storage.deletes(), 1);
    assert_eq!(storage.puts(), 0);
    assert!(events.next().await.unwrap().is_absent());
}

#[tokio::test]
async fn test_reload_picks_up_external_changes() {
    let storage = RecordingStorage::with_entry("flag", &json(true));
    let bus = shared_bus();
    let cell = flag_cell("flag", false, &storage, &bus);
    let mut events = bus.subscribe();

    storage.overwrite("flag", None);
    assert_eq!(cell.reload(), LoadOutcome::Absent);
    assert_eq!(cell.get(), StoredValue::Present(false));

    storage.overwrite("flag", Some(&json(true)));
    assert_eq!(cell.reload(), LoadOutcome::Stored);
    assert_eq!(cell.get(), StoredValue::Present(true));

    assert_eq!(storage.writes(), 0);
    let published = tokio::time::timeout(Duration::from_millis(50), events.next()).await;
    assert!(published.is_err(), "reload must not publish");
}

#[tokio::test]
async fn test_watch_reports_local_writes() {
    let storage = RecordingStorage::new();
    let cell = flag_cell("flag", false, &storage, &shared_bus());
    let mut rx = cell.watch();

    cell.set(true);
    assert_eq!(next_value(&mut rx).await, StoredValue::Present(true));
}

#[tokio::test]
async fn test_subscribe_callback_runs_until_cancelled() {
    let storage = RecordingStorage::new();
    let cell = flag_cell("flag", false, &storage, &shared_bus());
    let calls = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&calls);
    let subscription = cell.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    assert!(subscription.is_active());

    cell.set(true);
    settle().await;
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    subscription.cancel();
    cell.set(false);
    settle().await;
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_setting_equal_value_does_not_notify() {
    let storage = RecordingStorage::new();
    let cell = flag_cell("flag", false, &storage, &shared_bus());
    let calls = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&calls);
    let _subscription = cell.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    assert_eq!(cell.set(false), WriteOutcome::Committed);
    settle().await;
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(storage.puts(), 1);
}

#[tokio::test]
async fn test_subscription_ends_with_the_cell() {
    let storage = RecordingStorage::new();
    let cell = flag_cell("flag", false, &storage, &shared_bus());
    let subscription = cell.subscribe(|_| {});

    drop(cell);
    settle().await;
    assert!(!subscription.is_active());
}

#[tokio::test]
async fn test_dropped_cell_leaves_the_bus() {
    let storage = RecordingStorage::new();
    let bus = shared_bus();
    let cell = flag_cell("flag", false, &storage, &bus);
    assert_eq!(bus.subscriber_count(), 1);

    drop(cell);
    settle().await;
    assert_eq!(bus.subscriber_count(), 0);
}
