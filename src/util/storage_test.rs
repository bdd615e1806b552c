use super::*;

#[test]
fn memory_storage_set_then_get() {
    let storage = MemoryStorage::new();
    storage.set("auth_token", "T1").unwrap();
    assert_eq!(storage.get("auth_token").as_deref(), Some("T1"));
}

#[test]
fn memory_storage_set_overwrites() {
    let storage = MemoryStorage::with_entries([("user_id", "U1")]);
    storage.set("user_id", "U2").unwrap();
    assert_eq!(storage.get("user_id").as_deref(), Some("U2"));
    assert_eq!(storage.len(), 1);
}

#[test]
fn memory_storage_remove_missing_key_is_noop() {
    let storage = MemoryStorage::new();
    storage.remove("auth_token");
    assert!(storage.is_empty());
}

#[test]
fn memory_storage_remove_deletes_entry() {
    let storage = MemoryStorage::with_entries([("auth_token", "T1"), ("user_id", "U1")]);
    storage.remove("auth_token");
    assert_eq!(storage.get("auth_token"), None);
    assert_eq!(storage.get("user_id").as_deref(), Some("U1"));
}

#[cfg(not(feature = "csr"))]
#[test]
fn local_storage_is_unavailable_outside_browser() {
    let storage = LocalStorage;
    assert_eq!(storage.get("auth_token"), None);
    assert_eq!(storage.set("auth_token", "T1"), Err(StorageError::Unavailable));
}
