use async_trait::async_trait;
use na_core::{cache_key, ArticleCache, CacheEntry, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use crate::{CacheConfig, StorageBackend};

#[derive(Default)]
pub struct MemoryStore {
    entries: HashMap<String, CacheEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, company: &str) -> Option<CacheEntry> {
        self.entries.get(&cache_key(company)).cloned()
    }

    pub fn put(&mut self, entry: &CacheEntry) {
        self.entries.insert(entry.key(), entry.clone());
    }

    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        removed
    }
}

/// Process-local cache, lost on exit.
#[derive(Clone, Default)]
pub struct MemoryCache {
    store: Arc<RwLock<MemoryStore>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageBackend for MemoryCache {
    fn kind() -> &'static str {
        "memory"
    }

    async fn open(_config: &CacheConfig) -> Result<Self> {
        Ok(Self::new())
    }
}

#[async_trait]
impl ArticleCache for MemoryCache {
    async fn load(&self, company: &str) -> Option<CacheEntry> {
        self.store.read().await.get(company)
    }

    async fn save(&self, entry: &CacheEntry) -> Result<()> {
        self.store.write().await.put(entry);
        Ok(())
    }

    async fn clear(&self) -> Result<usize> {
        Ok(self.store.write().await.clear())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use na_core::Article;

    fn articles(n: usize) -> Vec<Article> {
        (0..n)
            .map(|i| Article::new(format!("Title {}", i), "test", "2025-01-01", format!("http://test.com/{}", i), "Body"))
            .collect()
    }

    #[tokio::test]
    async fn test_memory_cache() {
        let cache = MemoryCache::new();
        assert!(cache.load("Tesla").await.is_none());

        let entry = CacheEntry::new("Tesla", articles(3));
        cache.save(&entry).await.unwrap();
        assert_eq!(cache.load("tesla").await, Some(entry.clone()));
        assert!(cache.load_usable("Tesla", 3, None).await.is_some());
        assert!(cache.load_usable("Tesla", 4, None).await.is_none());

        assert_eq!(cache.clear().await.unwrap(), 1);
        assert!(cache.load("Tesla").await.is_none());
    }
}
