//! Entry structure for stored values

use bytes::Bytes;
use std::time::{Duration, Instant};

/// Represents a single entry in the store
#[derive(Debug, Clone)]
pub struct Entry {
    /// The stored value (immutable, refcounted)
    pub value: Bytes,

    /// Optional expiration time (absolute)
    pub expire_at: Option<Instant>,
}

impl Entry {
    /// Create a new entry without expiration
    pub fn new(value: impl Into<Bytes>) -> Self {
        Entry {
            value: value.into(),
            expire_at: None,
        }
    }

    /// Create a new entry with expiration
    pub fn with_expiration(value: impl Into<Bytes>, ttl: Duration) -> Self {
        Entry {
            value: value.into(),
            expire_at: Some(Instant::now() + ttl),
        }
    }

    /// Check if the entry has expired
    pub fn is_expired(&self) -> bool {
        if let Some(expire_at) = self.expire_at {
            Instant::now() >= expire_at
        } else {
            false
        }
    }

    /// Set expiration time relative to now
    pub fn set_expiration(&mut self, ttl: Duration) {
        self.expire_at = Some(Instant::now() + ttl);
    }

    /// Remove expiration
    pub fn clear_expiration(&mut self) {
        self.expire_at = None;
    }

    /// Get remaining time to live, or None if no expiration is set
    pub fn remaining_ttl(&self) -> Option<Duration> {
        self.expire_at
            .map(|expire_at| expire_at.saturating_duration_since(Instant::now()))
    }

    /// Calculate approximate memory usage of this entry in bytes
    pub fn memory_usage(&self) -> usize {
        self.value.len() + std::mem::size_of::<Option<Instant>>()
    }
}
