use dashmap::DashMap;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing::debug;

use super::Cache;

/// Cached entry with TTL support
#[derive(Debug, Clone)]
struct CacheEntry {
    value: Value,
    created_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    fn new(value: Value, ttl: Duration) -> Self {
        Self {
            value,
            created_at: Instant::now(),
            ttl,
        }
    }

    fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.ttl
    }
}

/// Cache statistics for monitoring
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries_count: usize,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        if self.hits + self.misses == 0 {
            0.0
        } else {
            self.hits as f64 / (self.hits + self.misses) as f64
        }
    }
}

/// In-memory TTL cache backing the aggregate read paths.
///
/// Entries expire on read; there is no background sweeper because the key
/// space is a handful of fixed constants.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: DashMap<String, CacheEntry>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries_count: self.entries.len(),
        }
    }

    /// Clear all cached entries
    pub fn clear(&self) {
        self.entries.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}

impl Cache for MemoryCache {
    fn get(&self, key: &str) -> Option<Value> {
        if let Some(entry) = self.entries.get(key) {
            if !entry.is_expired() {
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!("Cache hit for key: {}", key);
                return Some(entry.value.clone());
            }
        }

        // Remove expired entry outside the read guard
        if self
            .entries
            .remove_if(key, |_, entry| entry.is_expired())
            .is_some()
        {
            debug!("Removed expired cache entry for key: {}", key);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        debug!("Cache miss for key: {}", key);
        None
    }

    fn set(&self, key: &str, value: Value, ttl: Duration) {
        self.entries
            .insert(key.to_string(), CacheEntry::new(value, ttl));
        debug!("Cached value for key: {} with TTL: {:?}", key, ttl);
    }

    fn delete(&self, key: &str) {
        self.entries.remove(key);
    }

    fn delete_many(&self, keys: &[&str]) {
        for key in keys {
            self.entries.remove(*key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn get_returns_cached_value_before_expiry() {
        let cache = MemoryCache::new();
        cache.set("genres", json!([1, 2, 3]), Duration::from_secs(60));

        assert_eq!(cache.get("genres"), Some(json!([1, 2, 3])));
        assert_eq!(cache.stats().hits, 1);
    }

    #[test]
    fn expired_entry_is_removed_on_read() {
        let cache = MemoryCache::new();
        cache.set("years", json!([2010]), Duration::from_millis(0));
        std::thread::sleep(Duration::from_millis(5));

        assert_eq!(cache.get("years"), None);
        assert_eq!(cache.stats().entries_count, 0);
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn delete_many_removes_all_given_keys() {
        let cache = MemoryCache::new();
        cache.set("a", json!(1), Duration::from_secs(60));
        cache.set("b", json!(2), Duration::from_secs(60));
        cache.set("c", json!(3), Duration::from_secs(60));

        cache.delete_many(&["a", "b"]);

        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), None);
        assert_eq!(cache.get("c"), Some(json!(3)));
    }
}
