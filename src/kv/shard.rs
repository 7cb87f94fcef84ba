//! Shard implementation
//!
//! Each shard owns an independent partition of the key space behind its own
//! reader/writer lock. Readers share the lock; writers are exclusive within
//! the shard, so operations on keys living on different shards proceed in
//! parallel.

use crate::store::{MemoryStore, StoreStats};
use bytes::Bytes;
use parking_lot::{RwLock, RwLockWriteGuard};
use std::time::Duration;

/// A lock-protected partition of the store
pub struct Shard {
    store: RwLock<MemoryStore>,
}

impl Shard {
    /// Create a new shard with the given initial map capacity
    pub(crate) fn new(capacity: usize) -> Self {
        Shard {
            store: RwLock::new(MemoryStore::with_capacity(capacity)),
        }
    }

    /// Set a key-value pair
    pub fn set(&self, key: impl Into<Bytes>, value: impl Into<Bytes>) -> bool {
        self.store.write().set(key, value)
    }

    /// Get a value by key
    pub fn get(&self, key: &[u8]) -> Option<Bytes> {
        self.store.read().get(key)
    }

    /// Delete a key, returns true if a live entry was removed
    pub fn delete(&self, key: &[u8]) -> bool {
        self.store.write().delete(key)
    }

    /// Check if a key exists without touching the value
    pub fn exists(&self, key: &[u8]) -> bool {
        self.store.read().exists(key)
    }

    /// Get the number of live entries in this shard
    pub fn len(&self) -> usize {
        self.store.read().len()
    }

    /// Check if this shard holds no live entries
    pub fn is_empty(&self) -> bool {
        self.store.read().is_empty()
    }

    /// Set expiration on a key
    pub fn expire(&self, key: &[u8], ttl: Duration) -> bool {
        self.store.write().expire(key, ttl)
    }

    /// Remove expiration from a key
    pub fn persist(&self, key: &[u8]) -> bool {
        self.store.write().persist(key)
    }

    /// Get remaining time to live for a key
    pub fn ttl(&self, key: &[u8]) -> Option<Duration> {
        self.store.read().ttl(key)
    }

    /// Reclaim expired entries, returns the number removed
    pub fn purge_expired(&self) -> usize {
        self.store.write().purge_expired()
    }

    /// Calculate approximate memory usage of this shard in bytes
    pub fn memory_usage(&self) -> usize {
        self.store.read().memory_usage()
    }

    /// Get statistics for this shard
    pub fn stats(&self) -> StoreStats {
        self.store.read().stats()
    }

    /// Acquire this shard's write lock
    ///
    /// Used by whole-store operations that must hold every shard at once.
    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, MemoryStore> {
        self.store.write()
    }
}
