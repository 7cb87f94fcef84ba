//! Integration tests for the expiration extension

use bytes::Bytes;
use memstore::{Expiry, KvStore, StoreConfig};
use std::time::Duration;

#[test]
fn test_expired_key_reads_as_absent() {
    let store = KvStore::new();
    store.set("session", "token");

    assert!(store.expire(b"session", Duration::from_millis(30)));
    assert_eq!(store.get("session"), Some(Bytes::from("token")));

    std::thread::sleep(Duration::from_millis(60));

    assert_eq!(store.get("session"), None);
    assert!(!store.exists("session"));
    assert_eq!(store.len(), 0);
}

#[test]
fn test_delete_after_expiry_returns_false() {
    let store = KvStore::new();
    store.set("key", "value");
    store.expire(b"key", Duration::from_millis(10));

    std::thread::sleep(Duration::from_millis(30));

    assert!(!store.delete("key"));
}

#[test]
fn test_overwrite_revives_expired_key() {
    let store = KvStore::new();
    store.set("key", "old");
    store.expire(b"key", Duration::from_millis(10));

    std::thread::sleep(Duration::from_millis(30));

    store.set("key", "new");
    assert_eq!(store.get("key"), Some(Bytes::from("new")));
    assert_eq!(store.ttl(b"key"), None);
}

#[test]
fn test_purge_reclaims_memory() {
    let store = KvStore::with_config(StoreConfig::with_shards(2)).unwrap();

    for i in 0..10 {
        let key = format!("key_{}", i);
        store.set(key.clone(), "value");
        store.expire(key.as_bytes(), Duration::from_millis(10));
    }
    store.set("keeper", "value");

    std::thread::sleep(Duration::from_millis(30));

    // Readers already see the expired keys as absent before the sweep
    assert_eq!(store.len(), 1);
    assert_eq!(store.stats().expired_entries, 10);

    assert_eq!(store.purge_expired(), 10);
    assert_eq!(store.stats().total_entries, 1);
    assert_eq!(store.get("keeper"), Some(Bytes::from("value")));
}
