//! Tests for the in-memory storage provider

use keystash_providers::SecureStorageProvider;
use keystash_providers::storage::InMemoryStorageProvider;

#[test]
fn test_put_then_get() {
    let storage = InMemoryStorageProvider::new();
    assert!(storage.put("token", b"secret"));
    assert_eq!(storage.get("token"), Some(b"secret".to_vec()));
    assert_eq!(storage.len(), 1);
}

#[test]
fn test_put_replaces_existing_entry() {
    let storage = InMemoryStorageProvider::new();
    storage.put("token", b"old");
    storage.put("token", b"new");
    assert_eq!(storage.get("token"), Some(b"new".to_vec()));
    assert_eq!(storage.len(), 1);
}

#[test]
fn test_get_missing_key() {
    let storage = InMemoryStorageProvider::new();
    assert!(storage.get("missing").is_none());
}

#[test]
fn test_delete_removes_entry() {
    let storage = InMemoryStorageProvider::new();
    storage.put("token", b"secret");
    assert!(storage.delete("token"));
    assert!(!storage.contains_key("token"));
    assert!(storage.is_empty());
}

#[test]
fn test_delete_missing_key_succeeds() {
    let storage = InMemoryStorageProvider::new();
    assert!(storage.delete("missing"));
}

#[test]
fn test_clones_share_entries() {
    let storage = InMemoryStorageProvider::new();
    let view = storage.clone();
    storage.put("token", b"secret");
    assert!(view.contains_key("token"));

    view.clear();
    assert!(storage.is_empty());
}
