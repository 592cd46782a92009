use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Corrupt cache entry at {path}: {reason}")]
    CacheCorrupt { path: PathBuf, reason: String },

    #[error("Failed to write cache entry for {company}: {reason}")]
    CacheWrite { company: String, reason: String },

    #[error("Failed to clear {} cache entries: {}", .failures.len(), format_failures(.failures))]
    CacheClear { failures: Vec<(PathBuf, String)> },

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Analysis error: {0}")]
    Analysis(String),

    #[error("Cannot compare an empty article set")]
    EmptyArticleSet,

    #[error("Translation error: {0}")]
    Translation(String),

    #[error("Speech synthesis error: {0}")]
    Synthesis(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

fn format_failures(failures: &[(PathBuf, String)]) -> String {
    failures
        .iter()
        .map(|(path, reason)| format!("{} ({})", path.display(), reason))
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_clear_lists_every_failure() {
        let err = Error::CacheClear {
            failures: vec![
                (PathBuf::from("cache/tesla.json"), "permission denied".to_string()),
                (PathBuf::from("cache/apple.json"), "busy".to_string()),
            ],
        };
        let message = err.to_string();
        assert!(message.starts_with("Failed to clear 2 cache entries"));
        assert!(message.contains("cache/tesla.json (permission denied)"));
        assert!(message.contains("cache/apple.json (busy)"));
    }
}
