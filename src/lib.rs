//! Memstore - An embeddable in-memory key-value store
//!
//! Memstore keeps string-keyed byte values in process memory and is safe to
//! share across threads without external synchronization:
//! - Keys route to independent shards, each behind a reader/writer lock
//! - Operations on a given key are linearizable; readers never block readers
//! - Keys and values are opaque byte sequences; absence is a value, not an
//!   error
//!
//! The store is volatile: no persistence, no replication, no network
//! surface. Foreign-language bindings go through the C ABI adapter in
//! [`ffi`].

pub mod config;
pub mod ffi;
pub mod kv;
pub mod store;

/// Re-export commonly used types
pub use config::StoreConfig;
pub use kv::{Expiry, KvStore};
pub use store::{Entry, MemoryStore, StoreStats};
