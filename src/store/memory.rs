//! In-memory storage implementation

use super::entry::Entry;
use bytes::Bytes;
use siphasher::sip::SipHasher13;
use std::collections::HashMap;
use std::hash::BuildHasherDefault;
use std::time::Duration;

/// Type alias for our hash map with SipHasher
type StoreMap = HashMap<Bytes, Entry, BuildHasherDefault<SipHasher13>>;

/// In-memory key-value map
///
/// This is the storage behind a single shard. It is single-threaded by
/// itself; the shard layer wraps it in a reader/writer lock.
///
/// Expired entries are treated as absent by every operation but are only
/// reclaimed by mutating operations ([`purge_expired`](Self::purge_expired)
/// in particular), so that read operations can run under a shared lock.
pub struct MemoryStore {
    /// The main storage map
    store: StoreMap,
}

impl MemoryStore {
    /// Create a new memory store with default capacity
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Create a new memory store with specified initial capacity
    pub fn with_capacity(capacity: usize) -> Self {
        MemoryStore {
            store: HashMap::with_capacity_and_hasher(
                capacity,
                BuildHasherDefault::<SipHasher13>::default(),
            ),
        }
    }

    /// Set a key-value pair, replacing any previous entry
    ///
    /// Returns true if no live entry existed for the key before the call.
    /// Replacing a key also drops any expiration it carried.
    pub fn set(&mut self, key: impl Into<Bytes>, value: impl Into<Bytes>) -> bool {
        match self.store.insert(key.into(), Entry::new(value)) {
            Some(prior) => prior.is_expired(),
            None => true,
        }
    }

    /// Get a value by key, returns None if not found or expired
    ///
    /// The returned [`Bytes`] is a refcounted handle to the stored value,
    /// not a copy of its contents.
    pub fn get(&self, key: &[u8]) -> Option<Bytes> {
        self.store
            .get(key)
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.value.clone())
    }

    /// Delete a key, returns true if a live entry was removed
    pub fn delete(&mut self, key: &[u8]) -> bool {
        match self.store.remove(key) {
            Some(entry) => !entry.is_expired(),
            None => false,
        }
    }

    /// Check if a key exists (and is not expired) without touching the value
    pub fn exists(&self, key: &[u8]) -> bool {
        self.store
            .get(key)
            .map(|entry| !entry.is_expired())
            .unwrap_or(false)
    }

    /// Set expiration on a key
    ///
    /// Returns false if the key is absent or already expired.
    pub fn expire(&mut self, key: &[u8], ttl: Duration) -> bool {
        let is_expired = self
            .store
            .get(key)
            .map(|entry| entry.is_expired())
            .unwrap_or(false);

        if is_expired {
            self.store.remove(key);
            return false;
        }

        match self.store.get_mut(key) {
            Some(entry) => {
                entry.set_expiration(ttl);
                true
            }
            None => false,
        }
    }

    /// Remove expiration from a key
    ///
    /// Returns false if the key is absent, already expired, or carried no
    /// expiration.
    pub fn persist(&mut self, key: &[u8]) -> bool {
        let is_expired = self
            .store
            .get(key)
            .map(|entry| entry.is_expired())
            .unwrap_or(false);

        if is_expired {
            self.store.remove(key);
            return false;
        }

        match self.store.get_mut(key) {
            Some(entry) if entry.expire_at.is_some() => {
                entry.clear_expiration();
                true
            }
            _ => false,
        }
    }

    /// Get remaining time to live for a key
    ///
    /// Returns None if the key is absent, expired, or has no expiration set.
    pub fn ttl(&self, key: &[u8]) -> Option<Duration> {
        self.store
            .get(key)
            .filter(|entry| !entry.is_expired())
            .and_then(|entry| entry.remaining_ttl())
    }

    /// Remove all keys
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Get the number of live entries
    pub fn len(&self) -> usize {
        self.store
            .values()
            .filter(|entry| !entry.is_expired())
            .count()
    }

    /// Check if the store holds no live entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reclaim expired entries, returns the number of entries removed
    pub fn purge_expired(&mut self) -> usize {
        let before = self.store.len();
        self.store.retain(|_, entry| !entry.is_expired());
        before - self.store.len()
    }

    /// Calculate approximate memory usage of live entries in bytes
    pub fn memory_usage(&self) -> usize {
        self.store
            .iter()
            .filter(|(_, entry)| !entry.is_expired())
            .map(|(key, entry)| key.len() + entry.memory_usage())
            .sum()
    }

    /// Get statistics about the store
    pub fn stats(&self) -> StoreStats {
        let live_entries = self.len();
        let total_entries = self.store.len();

        StoreStats {
            total_entries,
            expired_entries: total_entries - live_entries,
            live_entries,
            memory_bytes: self.memory_usage(),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about the memory store
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct StoreStats {
    /// Entries held in the map, expired ones included
    pub total_entries: usize,
    /// Expired entries not yet reclaimed
    pub expired_entries: usize,
    /// Entries visible to readers
    pub live_entries: usize,
    /// Approximate payload bytes of live entries
    pub memory_bytes: usize,
}

impl StoreStats {
    /// Accumulate another shard's statistics into this one
    pub(crate) fn merge(&mut self, other: &StoreStats) {
        self.total_entries += other.total_entries;
        self.expired_entries += other.expired_entries;
        self.live_entries += other.live_entries;
        self.memory_bytes += other.memory_bytes;
    }
}
