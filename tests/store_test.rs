//! Integration tests for the point operations

use bytes::Bytes;
use memstore::{KvStore, StoreConfig};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

#[test]
fn test_set_then_get() {
    init_tracing();
    let store = KvStore::new();

    store.set("foo", "bar");
    assert_eq!(store.get("foo"), Some(Bytes::from("bar")));
}

#[test]
fn test_get_without_set_is_absent() {
    let store = KvStore::new();
    assert_eq!(store.get("never_set"), None);
}

#[test]
fn test_overwrite_returns_latest_value() {
    let store = KvStore::new();

    store.set("key", "first");
    store.set("key", "second");

    assert_eq!(store.get("key"), Some(Bytes::from("second")));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_delete_is_idempotent() {
    let store = KvStore::new();
    store.set("key", "value");

    assert!(store.delete("key"));
    assert!(!store.delete("key"));
    assert_eq!(store.get("key"), None);
}

#[test]
fn test_deleted_key_indistinguishable_from_missing() {
    let store = KvStore::new();
    store.set("key", "value");
    store.delete("key");

    assert_eq!(store.get("key"), store.get("never_set"));
    assert_eq!(store.exists("key"), store.exists("never_set"));
}

#[test]
fn test_empty_value_is_distinct_from_absence() {
    let store = KvStore::new();
    store.set("key", "");

    assert_eq!(store.get("key"), Some(Bytes::new()));
    assert!(store.exists("key"));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_exists_matches_get() {
    let store = KvStore::new();
    store.set("present", "value");

    assert!(store.exists("present"));
    assert!(!store.exists("missing"));
}

#[test]
fn test_clear_removes_everything() {
    let store = KvStore::new();
    for i in 0..50 {
        store.set(format!("key_{}", i), format!("value_{}", i));
    }

    store.clear();

    assert_eq!(store.len(), 0);
    for i in 0..50 {
        assert_eq!(store.get(format!("key_{}", i)), None);
    }
}

#[test]
fn test_binary_keys_and_values() {
    let store = KvStore::new();
    let key = Bytes::from_static(&[0x00, 0xff, 0x7f, 0x00]);
    let value = Bytes::from_static(&[0xde, 0xad, 0xbe, 0xef]);

    store.set(key.clone(), value.clone());
    assert_eq!(store.get(&key), Some(value));
}

#[test]
fn test_stored_value_unaffected_by_caller_buffer() {
    let store = KvStore::new();
    let mut buffer = b"original".to_vec();

    store.set("key", buffer.clone());
    buffer[0] = b'X';

    assert_eq!(store.get("key"), Some(Bytes::from("original")));
}

#[test]
fn test_independent_instances() {
    let a = KvStore::new();
    let b = KvStore::new();

    a.set("key", "from_a");

    assert_eq!(b.get("key"), None);
    assert_eq!(b.len(), 0);
}

#[test]
fn test_single_shard_store() {
    let store = KvStore::with_config(StoreConfig::with_shards(1)).unwrap();
    store.set("key", "value");

    assert_eq!(store.num_shards(), 1);
    assert_eq!(store.get("key"), Some(Bytes::from("value")));
}

#[test]
fn test_hello_world_scenario() {
    let store = KvStore::new();

    store.set("hello", "world");
    assert_eq!(store.get("hello"), Some(Bytes::from("world")));

    assert!(store.delete("hello"));
    assert_eq!(store.get("hello"), None);
    assert_eq!(store.len(), 0);
}
