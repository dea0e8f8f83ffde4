//! # folio-cache
//!
//! Expiring key-value cache for repository snapshots.
//!
//! A [`CacheStore`] wraps any [`KeyValueStore`] backend, namespaces every key
//! with a fixed prefix, stamps entries with their write time, and evicts them
//! once they outlive the configured TTL (on read, or via
//! [`CacheStore::sweep_expired`]).
//!
//! Backends:
//! - [`FileStore`]: one JSON file per key in a directory (the default)
//! - [`MemoryStore`]: in-process, for tests and embedding

mod backend;
mod error;
mod store;

pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use error::CacheError;
pub use store::{CacheEntry, CacheStore};
