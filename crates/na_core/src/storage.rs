use async_trait::async_trait;

use crate::types::CacheEntry;
use crate::Result;

#[async_trait]
pub trait ArticleCache: Send + Sync {
    /// Load the entry for `company`. Missing or unreadable entries are `None`.
    async fn load(&self, company: &str) -> Option<CacheEntry>;

    /// Replace the entry for `entry.company` wholesale.
    async fn save(&self, entry: &CacheEntry) -> Result<()>;

    /// Remove every entry, returning how many were removed.
    async fn clear(&self) -> Result<usize>;

    /// Load the entry only if it holds at least `requested` articles and is
    /// not older than `max_age`.
    async fn load_usable(
        &self,
        company: &str,
        requested: usize,
        max_age: Option<chrono::Duration>,
    ) -> Option<CacheEntry> {
        let entry = self.load(company).await?;
        if entry.articles.len() < requested {
            tracing::debug!(
                "Cache for {} holds {} articles, {} requested",
                company,
                entry.articles.len(),
                requested
            );
            return None;
        }
        if let Some(max_age) = max_age {
            if entry.age() > max_age {
                tracing::debug!("Cache for {} is older than {}", company, max_age);
                return None;
            }
        }
        Some(entry)
    }
}
