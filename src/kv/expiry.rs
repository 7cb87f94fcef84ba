//! Key expiration extension
//!
//! Time-to-live support layered over [`KvStore`], kept out of the core
//! operation set. The policy is lazy-check-on-access: an entry past its
//! deadline reads as absent everywhere, and its memory is reclaimed either
//! by the next mutation of the key or by an explicit
//! [`purge_expired`](Expiry::purge_expired) sweep. There is no background
//! task; the embedder decides when to sweep.
//!
//! Expiry checks run under the same shard lock as the operation performing
//! them, so they inherit the per-key ordering guarantees of the core.

use super::KvStore;
use std::time::Duration;
use tracing::debug;

/// Time-to-live operations for a key-value store
pub trait Expiry {
    /// Set a time-to-live on a key
    ///
    /// Returns false if the key is absent. Overwriting the key with `set`
    /// drops the deadline.
    fn expire(&self, key: &[u8], ttl: Duration) -> bool;

    /// Remove the time-to-live from a key
    ///
    /// Returns false if the key is absent or carries no deadline.
    fn persist(&self, key: &[u8]) -> bool;

    /// Get the remaining time to live for a key
    ///
    /// Returns None if the key is absent, already expired, or has no
    /// deadline. Use `exists` to tell the latter case apart.
    fn ttl(&self, key: &[u8]) -> Option<Duration>;

    /// Reclaim expired entries, returns the number of entries removed
    fn purge_expired(&self) -> usize;
}

impl Expiry for KvStore {
    fn expire(&self, key: &[u8], ttl: Duration) -> bool {
        self.shard_for(key).expire(key, ttl)
    }

    fn persist(&self, key: &[u8]) -> bool {
        self.shard_for(key).persist(key)
    }

    fn ttl(&self, key: &[u8]) -> Option<Duration> {
        self.shard_for(key).ttl(key)
    }

    fn purge_expired(&self) -> usize {
        let removed: usize = self
            .shards()
            .iter()
            .map(|shard| shard.purge_expired())
            .sum();

        if removed > 0 {
            debug!("Purged {} expired entries", removed);
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;

    #[test]
    fn test_expire_absent_key() {
        let store = KvStore::new();
        assert!(!store.expire(b"missing", Duration::from_secs(1)));
        assert_eq!(store.ttl(b"missing"), None);
    }

    #[test]
    fn test_ttl_reports_remaining() {
        let store = KvStore::new();
        store.set("key1", "value1");

        assert_eq!(store.ttl(b"key1"), None);
        assert!(store.expire(b"key1", Duration::from_secs(100)));

        let remaining = store.ttl(b"key1").unwrap();
        assert!(remaining <= Duration::from_secs(100));
        assert!(remaining > Duration::from_secs(99));
    }

    #[test]
    fn test_persist_clears_deadline() {
        let store = KvStore::new();
        store.set("key1", "value1");

        assert!(store.expire(b"key1", Duration::from_millis(20)));
        assert!(store.persist(b"key1"));
        assert!(!store.persist(b"key1"));

        std::thread::sleep(Duration::from_millis(40));
        assert!(store.exists("key1"));
    }

    #[test]
    fn test_purge_sweeps_all_shards() {
        let store = KvStore::with_config(StoreConfig::with_shards(4)).unwrap();

        for i in 0..20 {
            let key = format!("key_{}", i);
            store.set(key.clone(), "value");
            store.expire(key.as_bytes(), Duration::from_millis(10));
        }

        std::thread::sleep(Duration::from_millis(30));

        assert_eq!(store.purge_expired(), 20);
        assert_eq!(store.stats().total_entries, 0);
    }
}
