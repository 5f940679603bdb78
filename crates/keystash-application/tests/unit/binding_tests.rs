//! Tests for the UI-facing binding

use crate::test_utils::{RecordingStorage, flag_cell, next_value, settle, shared_bus};
use keystash_application::StorageBinding;
use keystash_domain::{StoredValue, WriteOutcome};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn invalidation_counter() -> (Arc<AtomicUsize>, impl Fn() + Send + 'static) {
    let count = Arc::new(AtomicUsize::new(0));
    let hook = {
        let count = Arc::clone(&count);
        move || {
            count.fetch_add(1, Ordering::SeqCst);
        }
    };
    (count, hook)
}

#[tokio::test]
async fn test_binding_reads_and_writes_through_cell() {
    let storage = RecordingStorage::new();
    let binding = StorageBinding::new(flag_cell("flag", false, &storage, &shared_bus()));

    assert_eq!(binding.value(), Some(false));
    assert_eq!(binding.set(true), WriteOutcome::Committed);
    assert_eq!(binding.get(), StoredValue::Present(true));
    assert_eq!(binding.key().as_str(), "flag");
    assert!(!binding.is_observed());
}

#[tokio::test]
async fn test_sibling_binding_is_invalidated_by_remote_write() {
    let storage = RecordingStorage::new();
    let bus = shared_bus();
    let (count, hook) = invalidation_counter();

    let editor = StorageBinding::new(flag_cell("flag", false, &storage, &bus));
    let viewer = StorageBinding::with_invalidation(flag_cell("flag", false, &storage, &bus), hook);
    let mut viewer_rx = viewer.cell().watch();
    assert!(viewer.is_observed());

    editor.set(true);
    assert_eq!(next_value(&mut viewer_rx).await, StoredValue::Present(true));
    settle().await;

    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert_eq!(viewer.value(), Some(true));
    assert_eq!(storage.puts(), 1);
}

#[tokio::test]
async fn test_own_write_invalidates_binding() {
    let storage = RecordingStorage::new();
    let (count, hook) = invalidation_counter();
    let binding =
        StorageBinding::with_invalidation(flag_cell("flag", false, &storage, &shared_bus()), hook);

    binding.set(true);
    settle().await;
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_rejected_write_does_not_invalidate() {
    let storage = RecordingStorage::new();
    let (count, hook) = invalidation_counter();
    let binding =
        StorageBinding::with_invalidation(flag_cell("flag", false, &storage, &shared_bus()), hook);
    storage.reject_writes(true);

    assert_eq!(binding.set(true), WriteOutcome::StorageRejected);
    settle().await;
    assert_eq!(count.load(Ordering::SeqCst), 0);
    assert_eq!(binding.value(), Some(false));
}
