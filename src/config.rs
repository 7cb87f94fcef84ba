//! Store configuration

use serde::{Deserialize, Serialize};

/// Default upper bound on the shard count derived from the CPU count
const DEFAULT_MAX_SHARDS: usize = 16;

/// Configuration for a [`KvStore`](crate::KvStore)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Number of independent shards
    ///
    /// Defaults to one shard per CPU core, clamped to [1, 16].
    pub num_shards: usize,

    /// Initial hash map capacity of each shard
    pub initial_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            num_shards: num_cpus::get().clamp(1, DEFAULT_MAX_SHARDS),
            initial_capacity: 1024,
        }
    }
}

impl StoreConfig {
    /// Create a configuration with an explicit shard count
    pub fn with_shards(num_shards: usize) -> Self {
        StoreConfig {
            num_shards,
            ..Default::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.num_shards > 0, "number of shards must be > 0");
        Ok(())
    }
}
