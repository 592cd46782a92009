use async_trait::async_trait;
use na_core::{cache_key, ArticleCache, CacheEntry, Error, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};
use crate::{CacheConfig, StorageBackend};

const ENTRY_EXTENSION: &str = ".json";
const TEMP_EXTENSION: &str = ".json.tmp";

/// One JSON document per company under `cache_dir`.
#[derive(Debug, Clone)]
pub struct FileCache {
    cache_dir: PathBuf,
}

impl FileCache {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self { cache_dir: cache_dir.into() }
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    pub fn entry_path(&self, company: &str) -> PathBuf {
        self.cache_dir.join(format!("{}{}", cache_key(company), ENTRY_EXTENSION))
    }

    fn temp_path(&self, company: &str) -> PathBuf {
        self.cache_dir.join(format!("{}{}", cache_key(company), TEMP_EXTENSION))
    }

    async fn read_entry(&self, path: &Path, company: &str) -> Result<Option<CacheEntry>> {
        let raw = match fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(Error::CacheCorrupt { path: path.to_path_buf(), reason: e.to_string() })
            }
        };
        let entry: CacheEntry = serde_json::from_str(&raw)
            .map_err(|e| Error::CacheCorrupt { path: path.to_path_buf(), reason: e.to_string() })?;
        if entry.key() != cache_key(company) {
            return Err(Error::CacheCorrupt {
                path: path.to_path_buf(),
                reason: format!("entry belongs to '{}'", entry.company),
            });
        }
        Ok(Some(entry))
    }

    async fn write_entry(&self, entry: &CacheEntry) -> std::io::Result<()> {
        fs::create_dir_all(&self.cache_dir).await?;
        let json = serde_json::to_vec_pretty(entry)?;
        let temp = self.temp_path(&entry.company);

        let written = async {
            let mut file = fs::File::create(&temp).await?;
            file.write_all(&json).await?;
            file.sync_all().await?;
            fs::rename(&temp, self.entry_path(&entry.company)).await
        }
        .await;

        if written.is_err() {
            if let Err(e) = fs::remove_file(&temp).await {
                debug!("Could not remove temporary cache file {}: {}", temp.display(), e);
            }
        }
        written
    }
}

#[async_trait]
impl StorageBackend for FileCache {
    fn kind() -> &'static str {
        "file"
    }

    async fn open(config: &CacheConfig) -> Result<Self> {
        fs::create_dir_all(&config.cache_dir).await?;
        Ok(Self::new(&config.cache_dir))
    }
}

#[async_trait]
impl ArticleCache for FileCache {
    async fn load(&self, company: &str) -> Option<CacheEntry> {
        if cache_key(company).is_empty() {
            return None;
        }
        let path = self.entry_path(company);
        match self.read_entry(&path, company).await {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Ignoring cache entry: {}", e);
                None
            }
        }
    }

    async fn save(&self, entry: &CacheEntry) -> Result<()> {
        if entry.key().is_empty() {
            return Err(Error::CacheWrite {
                company: entry.company.clone(),
                reason: "company name is empty".to_string(),
            });
        }
        self.write_entry(entry).await.map_err(|e| Error::CacheWrite {
            company: entry.company.clone(),
            reason: e.to_string(),
        })?;
        debug!("Cached {} articles for {}", entry.articles.len(), entry.company);
        Ok(())
    }

    async fn clear(&self) -> Result<usize> {
        let mut dir = match fs::read_dir(&self.cache_dir).await {
            Ok(dir) => dir,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };

        let mut removed = 0;
        let mut failures = Vec::new();
        loop {
            let dir_entry = match dir.next_entry().await {
                Ok(Some(dir_entry)) => dir_entry,
                Ok(None) => break,
                Err(e) => {
                    failures.push((self.cache_dir.clone(), e.to_string()));
                    break;
                }
            };
            let path = dir_entry.path();
            let name = dir_entry.file_name().to_string_lossy().into_owned();
            let is_entry = name.ends_with(ENTRY_EXTENSION);
            if !is_entry && !name.ends_with(TEMP_EXTENSION) {
                continue;
            }
            match fs::remove_file(&path).await {
                Ok(()) if is_entry => removed += 1,
                Ok(()) => {}
                Err(e) => {
                    warn!("Failed to remove cache file {}: {}", path.display(), e);
                    failures.push((path, e.to_string()));
                }
            }
        }

        if failures.is_empty() {
            info!("🧹 Removed {} cache entries from {}", removed, self.cache_dir.display());
            Ok(removed)
        } else {
            Err(Error::CacheClear { failures })
        }
    }
}
