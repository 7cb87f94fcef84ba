//! Key routing logic for sharding
//!
//! Routes keys to shards using hashing based on SipHash.

use siphasher::sip::SipHasher13;
use std::hash::{Hash, Hasher};

/// Routes keys to shards by hashing
pub struct ShardRouter {
    num_shards: usize,
}

impl ShardRouter {
    /// Create a new shard router
    pub fn new(num_shards: usize) -> Self {
        assert!(num_shards > 0, "Number of shards must be > 0");
        ShardRouter { num_shards }
    }

    /// Route a key to a shard index
    ///
    /// Uses SipHash13 for fast hashing with good distribution, so keys are
    /// spread evenly across shards.
    pub fn route(&self, key: &[u8]) -> usize {
        (self.hash_key(key) as usize) % self.num_shards
    }

    /// Hash a key using SipHash13
    fn hash_key(&self, key: &[u8]) -> u64 {
        let mut hasher = SipHasher13::new();
        key.hash(&mut hasher);
        hasher.finish()
    }

    /// Get the number of shards
    pub fn num_shards(&self) -> usize {
        self.num_shards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routing_deterministic() {
        let router = ShardRouter::new(4);

        // Same key should always route to same shard
        let shard1 = router.route(b"test_key");
        let shard2 = router.route(b"test_key");
        assert_eq!(shard1, shard2);
    }

    #[test]
    fn test_routing_distribution() {
        let router = ShardRouter::new(4);
        let mut shard_counts = vec![0; 4];

        // Test with 1000 keys
        for i in 0..1000 {
            let key = format!("key_{}", i);
            let shard = router.route(key.as_bytes());
            shard_counts[shard] += 1;
        }

        // Each shard should get roughly 250 keys (±50 for variance)
        for count in shard_counts {
            assert!(count > 200 && count < 300, "Uneven distribution: {}", count);
        }
    }

    #[test]
    fn test_routing_in_range() {
        let router = ShardRouter::new(3);
        for i in 0..100 {
            let key = format!("key_{}", i);
            assert!(router.route(key.as_bytes()) < 3);
        }
    }

    #[test]
    fn test_single_shard() {
        let router = ShardRouter::new(1);
        assert_eq!(router.route(b"any_key"), 0);
    }
}
