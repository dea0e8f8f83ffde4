//! Expiring, namespaced snapshot cache on top of a [`KeyValueStore`].

use std::time::Duration;

use folio_core::now_millis;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::backend::KeyValueStore;
use crate::error::CacheError;

/// A stored snapshot plus the epoch-millisecond time it was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    pub payload: T,
    pub timestamp: i64,
}

impl<T> CacheEntry<T> {
    /// Age strictly greater than `ttl_ms` is expired; exactly `ttl_ms` is not.
    #[must_use]
    pub const fn is_expired(&self, now_ms: i64, ttl_ms: i64) -> bool {
        now_ms.saturating_sub(self.timestamp) > ttl_ms
    }
}

/// Only the timestamp, for sweeping without decoding payloads.
#[derive(Deserialize)]
struct Stamp {
    timestamp: i64,
}

/// Best-effort cache of per-repository snapshots.
///
/// Every key is `prefix + id`. No operation returns an error: read, write,
/// and parse failures are logged and treated as a miss or a no-op.
#[derive(Debug)]
pub struct CacheStore<S> {
    store: S,
    prefix: String,
    ttl_ms: i64,
}

impl<S: KeyValueStore> CacheStore<S> {
    pub fn new(store: S, prefix: impl Into<String>, ttl: Duration) -> Self {
        Self {
            store,
            prefix: prefix.into(),
            ttl_ms: i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX),
        }
    }

    /// The underlying key-value backend.
    pub const fn backend(&self) -> &S {
        &self.store
    }

    pub fn key_for(&self, id: &str) -> String {
        format!("{}{id}", self.prefix)
    }

    /// Read a fresh entry for `id`.
    ///
    /// Returns `None` if the entry was never written, cannot be decoded (the
    /// entry is evicted), or is older than the TTL (the entry is evicted).
    pub fn get<T: DeserializeOwned>(&self, id: &str) -> Option<CacheEntry<T>> {
        self.get_at(id, now_millis())
    }

    /// [`Self::get`] evaluated at an explicit time.
    pub fn get_at<T: DeserializeOwned>(&self, id: &str, now_ms: i64) -> Option<CacheEntry<T>> {
        let key = self.key_for(id);
        let raw = match self.store.get(&key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(error) => {
                tracing::warn!(%key, %error, "error reading from cache");
                return None;
            }
        };

        let entry: CacheEntry<T> = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(error) => {
                let error = CacheError::Corrupt {
                    key: key.clone(),
                    reason: error.to_string(),
                };
                tracing::warn!(%error, "evicting unreadable cache entry");
                self.evict(&key);
                return None;
            }
        };

        if entry.is_expired(now_ms, self.ttl_ms) {
            tracing::debug!(%key, "evicting expired cache entry");
            self.evict(&key);
            return None;
        }

        Some(entry)
    }

    /// Write `payload` for `id` stamped with the current time, replacing any
    /// prior entry.
    pub fn put<T: Serialize>(&self, id: &str, payload: &T) {
        self.put_at(id, payload, now_millis());
    }

    /// [`Self::put`] with an explicit timestamp.
    pub fn put_at<T: Serialize>(&self, id: &str, payload: &T, timestamp: i64) {
        let key = self.key_for(id);
        let result = serde_json::to_string(&CacheEntry { payload, timestamp })
            .map_err(CacheError::from)
            .and_then(|raw| self.store.set(&key, &raw));
        if let Err(error) = result {
            tracing::warn!(%key, %error, "error saving to cache");
        }
    }

    /// Delete every namespaced entry older than the TTL, whether or not it
    /// is ever read again. Returns the number of entries removed.
    ///
    /// An entry whose timestamp cannot be parsed is logged and left alone;
    /// it never stops the sweep of the remaining keys.
    pub fn sweep_expired(&self) -> usize {
        self.sweep_expired_at(now_millis())
    }

    /// [`Self::sweep_expired`] evaluated at an explicit time.
    pub fn sweep_expired_at(&self, now_ms: i64) -> usize {
        let mut removed = 0;
        for key in self.namespaced_keys() {
            let raw = match self.store.get(&key) {
                Ok(Some(raw)) => raw,
                Ok(None) => continue,
                Err(error) => {
                    tracing::warn!(%key, %error, "error reading cache entry during sweep");
                    continue;
                }
            };
            let stamp: Stamp = match serde_json::from_str(&raw) {
                Ok(stamp) => stamp,
                Err(error) => {
                    tracing::warn!(%key, %error, "skipping unparsable cache entry during sweep");
                    continue;
                }
            };
            if now_ms.saturating_sub(stamp.timestamp) > self.ttl_ms && self.evict(&key) {
                removed += 1;
            }
        }
        if removed > 0 {
            tracing::info!(removed, "cleared expired cache entries");
        }
        removed
    }

    /// Delete every namespaced entry. Returns the number removed.
    pub fn clear(&self) -> usize {
        self.namespaced_keys()
            .into_iter()
            .filter(|key| self.evict(key))
            .count()
    }

    /// Identifiers (prefix stripped) of every namespaced entry.
    pub fn ids(&self) -> Vec<String> {
        self.namespaced_keys()
            .into_iter()
            .filter_map(|key| key.strip_prefix(&self.prefix).map(str::to_string))
            .collect()
    }

    fn namespaced_keys(&self) -> Vec<String> {
        match self.store.keys() {
            Ok(keys) => keys
                .into_iter()
                .filter(|key| key.starts_with(&self.prefix))
                .collect(),
            Err(error) => {
                tracing::warn!(%error, "error listing cache keys");
                Vec::new()
            }
        }
    }

    fn evict(&self, key: &str) -> bool {
        match self.store.remove(key) {
            Ok(()) => true,
            Err(error) => {
                tracing::warn!(%key, %error, "error removing cache entry");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryStore;
    use pretty_assertions::assert_eq;

    const HOUR_MS: i64 = 60 * 60 * 1000;

    #[test]
    fn put_stamps_with_wall_clock_millis() {
        let cache = CacheStore::new(MemoryStore::new(), "p_", Duration::from_secs(60));
        let before = now_millis();
        cache.put("o/r", &snapshot("r"));
        let after = now_millis();

        let raw = cache.backend().get("p_o/r").unwrap().unwrap();
        let entry: CacheEntry<Snapshot> = serde_json::from_str(&raw).unwrap();
        assert!((before..=after).contains(&entry.timestamp));
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    struct Snapshot {
        name: String,
    }

    fn snapshot(name: &str) -> Snapshot {
        Snapshot { name: name.into() }
    }

    fn cache() -> CacheStore<MemoryStore> {
        CacheStore::new(MemoryStore::new(), "github_repo_", Duration::from_secs(24 * 3600))
    }

    #[test]
    fn put_then_get_returns_payload() {
        let cache = cache();
        cache.put("o/r", &snapshot("r"));

        let entry: CacheEntry<Snapshot> = cache.get("o/r").expect("fresh entry");
        assert_eq!(entry.payload, snapshot("r"));
        assert!(cache.backend().get("github_repo_o/r").unwrap().is_some());
    }

    #[test]
    fn stored_shape_is_payload_and_timestamp() {
        let cache = cache();
        cache.put_at("o/r", &snapshot("r"), 1234);
        let raw = cache.backend().get("github_repo_o/r").unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["timestamp"], 1234);
        assert_eq!(value["payload"]["name"], "r");
    }

    #[test]
    fn never_written_is_absent() {
        assert!(cache().get::<Snapshot>("o/r").is_none());
    }

    #[test]
    fn expired_entry_is_absent_and_evicted() {
        let cache = cache();
        cache.put_at("o/r", &snapshot("r"), 0);

        assert!(cache.get_at::<Snapshot>("o/r", 25 * HOUR_MS).is_none());
        assert!(cache.backend().get("github_repo_o/r").unwrap().is_none());
    }

    #[test]
    fn entry_at_exact_ttl_is_still_fresh() {
        let cache = cache();
        cache.put_at("o/r", &snapshot("r"), 0);
        assert!(cache.get_at::<Snapshot>("o/r", 24 * HOUR_MS).is_some());
        assert!(cache.get_at::<Snapshot>("o/r", 24 * HOUR_MS + 1).is_none());
    }

    #[test]
    fn corrupt_entry_is_absent_and_evicted() {
        let cache = cache();
        cache.backend().set("github_repo_o/r", "{not json").unwrap();

        assert!(cache.get::<Snapshot>("o/r").is_none());
        assert!(cache.backend().get("github_repo_o/r").unwrap().is_none());
    }

    #[test]
    fn payload_shape_mismatch_is_treated_as_corrupt() {
        let cache = cache();
        cache
            .backend()
            .set("github_repo_o/r", r#"{"payload": 5, "timestamp": 0}"#)
            .unwrap();
        assert!(cache.get_at::<Snapshot>("o/r", 0).is_none());
        assert!(cache.backend().keys().unwrap().is_empty());
    }

    #[test]
    fn put_overwrites_prior_entry() {
        let cache = cache();
        cache.put("o/r", &snapshot("old"));
        cache.put("o/r", &snapshot("new"));
        let entry: CacheEntry<Snapshot> = cache.get("o/r").unwrap();
        assert_eq!(entry.payload.name, "new");
    }

    #[test]
    fn sweep_removes_only_expired_namespaced_entries() {
        let cache = cache();
        cache.put_at("o/old", &snapshot("old"), 0);
        cache.put_at("o/fresh", &snapshot("fresh"), 20 * HOUR_MS);
        cache.backend().set("unrelated_key", r#"{"timestamp": 0}"#).unwrap();

        let removed = cache.sweep_expired_at(25 * HOUR_MS);

        assert_eq!(removed, 1);
        assert_eq!(cache.ids(), vec!["o/fresh"]);
        assert!(cache.backend().get("unrelated_key").unwrap().is_some());
    }

    #[test]
    fn sweep_tolerates_unparsable_entries() {
        let cache = cache();
        cache.backend().set("github_repo_a/broken", "garbage").unwrap();
        cache.put_at("z/old", &snapshot("old"), 0);

        let removed = cache.sweep_expired_at(25 * HOUR_MS);

        assert_eq!(removed, 1);
        assert_eq!(cache.ids(), vec!["a/broken"]);
    }

    #[test]
    fn clear_removes_namespace_only() {
        let cache = cache();
        cache.put("a/b", &snapshot("b"));
        cache.put("c/d", &snapshot("d"));
        cache.backend().set("other", "x").unwrap();

        assert_eq!(cache.clear(), 2);
        assert!(cache.ids().is_empty());
        assert_eq!(cache.backend().keys().unwrap(), vec!["other"]);
    }
}
