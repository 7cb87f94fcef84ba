//! Concurrent key-value store
//!
//! This module implements the sharding logic for distributing keys across
//! multiple shards, each behind its own reader/writer lock. [`KvStore`] owns
//! the shards and routes every per-key operation to the shard responsible
//! for the key.

mod expiry;
mod router;
mod shard;

pub use expiry::Expiry;
pub use router::ShardRouter;
pub use shard::Shard;

use crate::config::StoreConfig;
use crate::store::StoreStats;
use bytes::Bytes;
use tracing::{debug, info};

/// Thread-safe, sharded key-value store
///
/// Keys and values are opaque byte sequences. All operations take `&self`
/// and are safe to call from any number of threads without external
/// synchronization. Operations on a given key are linearizable; operations
/// on different keys have no relative ordering and may run in parallel when
/// the keys land on different shards.
pub struct KvStore {
    shards: Vec<Shard>,
    router: ShardRouter,
}

impl KvStore {
    /// Create a store with the default configuration
    pub fn new() -> Self {
        Self::from_config(StoreConfig::default())
    }

    /// Create a store with the given configuration
    pub fn with_config(config: StoreConfig) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: StoreConfig) -> Self {
        let num_shards = config.num_shards;

        let mut shards = Vec::with_capacity(num_shards);
        for _ in 0..num_shards {
            shards.push(Shard::new(config.initial_capacity));
        }

        info!("Initialized store with {} shards", num_shards);

        KvStore {
            shards,
            router: ShardRouter::new(num_shards),
        }
    }

    /// Set a key to a value, replacing any previous value
    ///
    /// After this call completes, every `get` of the key observes the new
    /// value until it is overwritten or deleted.
    pub fn set(&self, key: impl Into<Bytes>, value: impl Into<Bytes>) {
        let key = key.into();
        self.shard_for(&key).set(key, value);
    }

    /// Get the value stored for a key
    ///
    /// Returns a refcounted handle to the stored bytes, or None if the key
    /// is absent. Absence is not an error.
    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<Bytes> {
        let key = key.as_ref();
        self.shard_for(key).get(key)
    }

    /// Delete a key, returns true if a live entry was removed
    ///
    /// Deleting an absent key is a no-op returning false.
    pub fn delete(&self, key: impl AsRef<[u8]>) -> bool {
        let key = key.as_ref();
        self.shard_for(key).delete(key)
    }

    /// Check if a key exists without copying its value
    pub fn exists(&self, key: impl AsRef<[u8]>) -> bool {
        let key = key.as_ref();
        self.shard_for(key).exists(key)
    }

    /// Remove all entries
    ///
    /// Every shard's write lock is acquired, in index order, before any
    /// shard is emptied, so a concurrent reader sees either the old store
    /// or an empty one.
    pub fn clear(&self) {
        let mut guards: Vec<_> = self.shards.iter().map(|shard| shard.write()).collect();
        for guard in guards.iter_mut() {
            guard.clear();
        }
        debug!("Store cleared");
    }

    /// Get the current number of entries
    ///
    /// Exact under single-threaded use. Under concurrent mutation this is a
    /// snapshot count that may be stale the instant it returns.
    pub fn len(&self) -> usize {
        self.shards.iter().map(|shard| shard.len()).sum()
    }

    /// Check if the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(|shard| shard.is_empty())
    }

    /// Calculate approximate memory usage of stored data in bytes
    pub fn memory_usage(&self) -> usize {
        self.shards.iter().map(|shard| shard.memory_usage()).sum()
    }

    /// Get statistics aggregated across all shards
    pub fn stats(&self) -> StoreStats {
        let mut stats = StoreStats::default();
        for shard in &self.shards {
            stats.merge(&shard.stats());
        }
        stats
    }

    /// Get per-shard statistics
    pub fn shard_stats(&self) -> Vec<StoreStats> {
        self.shards.iter().map(|shard| shard.stats()).collect()
    }

    /// Get the number of shards
    pub fn num_shards(&self) -> usize {
        self.shards.len()
    }

    /// Get the shard responsible for a key
    fn shard_for(&self, key: &[u8]) -> &Shard {
        &self.shards[self.router.route(key)]
    }

    pub(crate) fn shards(&self) -> &[Shard] {
        &self.shards
    }
}

impl Default for KvStore {
    fn default() -> Self {
        Self::new()
    }
}
