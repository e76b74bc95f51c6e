//! In-memory vector cache keyed by blake3 content hashes.

use std::time::Duration;

use moka::sync::Cache;

/// Hash a text into its cache key.
pub fn key_for(text: &str) -> String {
    blake3::hash(text.as_bytes()).to_hex().to_string()
}

/// Embedding vector cache.
///
/// Taxonomy terms are re-embedded on every request without this; with it,
/// the whole term list is warm after the first request of a process.
pub struct VectorCache {
    cache: Cache<String, Vec<f32>>,
}

impl VectorCache {
    pub fn new(max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_idle(Duration::from_secs(3600))
            .build();
        Self { cache }
    }

    pub fn get(&self, key: &str) -> Option<Vec<f32>> {
        self.cache.get(key)
    }

    pub fn insert(&self, key: String, vector: Vec<f32>) {
        self.cache.insert(key, vector);
    }

    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get_by_key() {
        let cache = VectorCache::new(16);
        let key = key_for("network effects");
        cache.insert(key.clone(), vec![1.0, 2.0]);
        assert_eq!(cache.get(&key), Some(vec![1.0, 2.0]));
    }

    #[test]
    fn miss_returns_none() {
        let cache = VectorCache::new(16);
        assert_eq!(cache.get(&key_for("absent")), None);
    }

    #[test]
    fn keys_are_content_addressed() {
        assert_eq!(key_for("same text"), key_for("same text"));
        assert_ne!(key_for("same text"), key_for("other text"));
    }

    #[test]
    fn clear_empties_cache() {
        let cache = VectorCache::new(16);
        cache.insert(key_for("a"), vec![1.0]);
        cache.clear();
        assert_eq!(cache.get(&key_for("a")), None);
    }
}
