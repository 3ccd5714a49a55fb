pub mod keys;
mod memory_cache;

pub use memory_cache::{CacheStats, MemoryCache};

use crate::log_warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Cache collaborator injected into the read/write services.
///
/// Values are JSON documents so one store can hold the heterogeneous
/// aggregate payloads (genre samples, year lists, movie cards).
pub trait Cache: Send + Sync {
    fn get(&self, key: &str) -> Option<Value>;
    fn set(&self, key: &str, value: Value, ttl: Duration);
    fn delete(&self, key: &str);
    fn delete_many(&self, keys: &[&str]);
}

/// Fetch and deserialize a cached value, treating a malformed payload as a miss
pub fn get_json<T: DeserializeOwned>(cache: &dyn Cache, key: &str) -> Option<T> {
    let value = cache.get(key)?;
    match serde_json::from_value(value) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            log_warn!("Discarding malformed cache entry '{}': {}", key, e);
            cache.delete(key);
            None
        }
    }
}

/// Serialize and store a value under the given key
pub fn set_json<T: Serialize>(cache: &dyn Cache, key: &str, value: &T, ttl: Duration) {
    match serde_json::to_value(value) {
        Ok(encoded) => cache.set(key, encoded, ttl),
        Err(e) => log_warn!("Failed to serialize cache entry '{}': {}", key, e),
    }
}

/// Evict the aggregate caches affected by a mutation.
///
/// Movie mutations clear the year listing too: year distinctness is derived
/// from the movie table. Unknown keys fall back to the recency key.
pub fn reset_cache(cache: &dyn Cache, key: &str) {
    match key.to_lowercase().as_str() {
        "movie" => {
            cache.delete_many(&[keys::CACHE_FOR_NEW_MOVIES, keys::CACHE_FOR_YEARS]);
        }
        "genre" => cache.delete(keys::CACHE_FOR_GENRES),
        "year" => cache.delete(keys::CACHE_FOR_YEARS),
        "user_movie" => cache.delete(keys::CACHE_FOR_USER_ADDED_MOVIES),
        _ => cache.delete(keys::CACHE_FOR_NEW_MOVIES),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn movie_reset_clears_movie_and_year_keys() {
        let cache = MemoryCache::new();
        cache.set(keys::CACHE_FOR_NEW_MOVIES, json!([1]), keys::CACHE_TTL);
        cache.set(keys::CACHE_FOR_YEARS, json!([2020]), keys::CACHE_TTL);
        cache.set(keys::CACHE_FOR_GENRES, json!(["drama"]), keys::CACHE_TTL);

        reset_cache(&cache, "movie");

        assert!(cache.get(keys::CACHE_FOR_NEW_MOVIES).is_none());
        assert!(cache.get(keys::CACHE_FOR_YEARS).is_none());
        assert!(cache.get(keys::CACHE_FOR_GENRES).is_some());
    }

    #[test]
    fn genre_reset_clears_only_genre_key() {
        let cache = MemoryCache::new();
        cache.set(keys::CACHE_FOR_GENRES, json!(["drama"]), keys::CACHE_TTL);
        cache.set(keys::CACHE_FOR_YEARS, json!([2020]), keys::CACHE_TTL);

        reset_cache(&cache, "genre");

        assert!(cache.get(keys::CACHE_FOR_GENRES).is_none());
        assert!(cache.get(keys::CACHE_FOR_YEARS).is_some());
    }

    #[test]
    fn unknown_key_falls_back_to_recency_key() {
        let cache = MemoryCache::new();
        cache.set(keys::CACHE_FOR_NEW_MOVIES, json!([1]), keys::CACHE_TTL);

        reset_cache(&cache, "something_else");

        assert!(cache.get(keys::CACHE_FOR_NEW_MOVIES).is_none());
    }

    #[test]
    fn get_json_roundtrips_typed_values() {
        let cache = MemoryCache::new();
        set_json(&cache, "years", &vec![2010i16, 2020], keys::CACHE_TTL);

        let years: Option<Vec<i16>> = get_json(&cache, "years");
        assert_eq!(years, Some(vec![2010, 2020]));
    }
}
