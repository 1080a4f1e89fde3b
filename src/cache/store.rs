//! Cache Store Module
//!
//! Unsynchronized storage core: a HashMap of entries plus the fixed TTL.
//! `Cache` wraps it in a mutex and drives the sweep.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats};

// == Expiry Mode ==
/// How lookups treat entries that outlived the TTL but were not yet swept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExpiryMode {
    /// Lookups return any present entry; only the sweep removes stale ones.
    /// Worst-case staleness is one sweep period.
    #[default]
    SweepOnly,
    /// Lookups also reject (and drop) entries older than the TTL.
    Strict,
}

// == Cache Store ==
/// Key-value storage with a fixed TTL.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Age beyond which an entry is stale
    ttl: Duration,
    mode: ExpiryMode,
    /// Performance statistics
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store. The TTL is fixed for the store's lifetime.
    pub fn new(ttl: Duration, mode: ExpiryMode) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            mode,
            stats: CacheStats::new(),
        }
    }

    // == Add ==
    /// Inserts or fully replaces the entry for `key`, stamped with the current time.
    pub fn add(&mut self, key: String, value: Vec<u8>) {
        self.entries.insert(key, CacheEntry::new(value));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns a copy of the stored value, if present.
    ///
    /// In `SweepOnly` mode the entry's age is ignored. In `Strict` mode a
    /// stale entry is removed and reported as a miss.
    pub fn get(&mut self, key: &str) -> Option<Vec<u8>> {
        let stale = match self.entries.get(key) {
            Some(entry) => self.mode == ExpiryMode::Strict && entry.is_expired(self.ttl),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if stale {
            self.entries.remove(key);
            self.stats.record_reaped();
            self.stats.record_miss();
            self.stats.set_total_entries(self.entries.len());
            return None;
        }

        self.stats.record_hit();
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Reap Expired ==
    /// Removes every entry older than the TTL.
    ///
    /// Returns the number of entries removed.
    pub fn reap_expired(&mut self) -> usize {
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(ttl));
        let removed = before - self.entries.len();

        self.stats.record_sweep(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Stats ==
    /// Returns a snapshot of the current statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn mode(&self) -> ExpiryMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    fn store() -> CacheStore {
        CacheStore::new(Duration::from_secs(5), ExpiryMode::SweepOnly)
    }

    #[test]
    fn test_store_new() {
        let store = store();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.ttl(), Duration::from_secs(5));
        assert_eq!(store.mode(), ExpiryMode::SweepOnly);
    }

    #[test]
    fn test_store_add_and_get() {
        let mut store = store();

        store.add("https://example.com".to_string(), b"testdata".to_vec());
        store.add("https://example.com/path".to_string(), b"moretestdata".to_vec());

        assert_eq!(store.get("https://example.com").unwrap(), b"testdata");
        assert_eq!(store.get("https://example.com/path").unwrap(), b"moretestdata");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let mut store = store();
        assert!(store.get("nonexistent").is_none());
    }

    #[test]
    fn test_store_overwrite() {
        let mut store = store();

        store.add("key1".to_string(), b"value1".to_vec());
        store.add("key1".to_string(), b"value2".to_vec());

        assert_eq!(store.get("key1").unwrap(), b"value2");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_overwrite_resets_age() {
        let mut store = CacheStore::new(Duration::from_millis(30), ExpiryMode::SweepOnly);

        store.add("key1".to_string(), b"old".to_vec());
        sleep(Duration::from_millis(40));
        store.add("key1".to_string(), b"new".to_vec());

        assert_eq!(store.reap_expired(), 0);
        assert_eq!(store.get("key1").unwrap(), b"new");
    }

    #[test]
    fn test_empty_value_is_a_hit() {
        let mut store = store();
        store.add("empty".to_string(), Vec::new());
        assert_eq!(store.get("empty"), Some(Vec::new()));
    }

    #[test]
    fn test_sweep_only_get_returns_stale_entry() {
        let mut store = CacheStore::new(Duration::from_millis(5), ExpiryMode::SweepOnly);

        store.add("key1".to_string(), b"value1".to_vec());
        sleep(Duration::from_millis(20));

        // Not yet swept, so still served
        assert_eq!(store.get("key1").unwrap(), b"value1");
        assert!(store.contains_key("key1"));
    }

    #[test]
    fn test_strict_get_rejects_stale_entry() {
        let mut store = CacheStore::new(Duration::from_millis(5), ExpiryMode::Strict);

        store.add("key1".to_string(), b"value1".to_vec());
        assert!(store.get("key1").is_some());

        sleep(Duration::from_millis(20));

        assert!(store.get("key1").is_none());
        assert!(!store.contains_key("key1"));
        assert_eq!(store.stats().reaped, 1);
    }

    #[test]
    fn test_store_reap_expired() {
        let mut store = CacheStore::new(Duration::from_millis(50), ExpiryMode::SweepOnly);

        store.add("key1".to_string(), b"value1".to_vec());
        sleep(Duration::from_millis(80));
        store.add("key2".to_string(), b"value2".to_vec());

        let removed = store.reap_expired();
        assert_eq!(removed, 1);
        assert_eq!(store.len(), 1);
        assert!(store.get("key1").is_none());
        assert!(store.get("key2").is_some());
    }

    #[test]
    fn test_store_stats() {
        let mut store = store();

        store.add("key1".to_string(), b"value1".to_vec());
        store.get("key1").unwrap();
        let _ = store.get("nonexistent");
        store.reap_expired();

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.sweeps, 1);
        assert_eq!(stats.reaped, 0);
        assert_eq!(stats.total_entries, 1);
    }
}
