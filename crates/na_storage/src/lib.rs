use async_trait::async_trait;
use na_core::{ArticleCache, Error, Result};
use std::path::PathBuf;
use std::sync::Arc;

pub mod backends;

pub use backends::*;

pub const DEFAULT_CACHE_DIR: &str = "cache";

#[async_trait]
pub trait StorageBackend: ArticleCache {
    /// Name used to select this backend on the command line.
    fn kind() -> &'static str
    where
        Self: Sized;

    async fn open(config: &CacheConfig) -> Result<Self>
    where
        Self: Sized;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    pub cache_dir: PathBuf,
}

impl CacheConfig {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self { cache_dir: cache_dir.into() }
    }

    pub fn with_dir(&mut self, cache_dir: impl Into<PathBuf>) -> &mut Self {
        self.cache_dir = cache_dir.into();
        self
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_DIR)
    }
}

pub fn available_backends() -> Vec<&'static str> {
    vec![FileCache::kind(), MemoryCache::kind()]
}

pub async fn create_cache(kind: &str, config: &CacheConfig) -> Result<Arc<dyn ArticleCache>> {
    match kind {
        k if k == FileCache::kind() => Ok(Arc::new(FileCache::open(config).await?)),
        k if k == MemoryCache::kind() => Ok(Arc::new(MemoryCache::open(config).await?)),
        other => Err(Error::Storage(format!(
            "Unknown cache backend '{}', expected one of: {}",
            other,
            available_backends().join(", ")
        ))),
    }
}

pub mod prelude {
    pub use super::backends::*;
    pub use super::{create_cache, CacheConfig, StorageBackend};
}
