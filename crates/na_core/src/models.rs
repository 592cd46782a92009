use async_trait::async_trait;
use std::fmt;

use crate::types::Article;
use crate::Result;

/// Language code used by the translation and speech collaborators.
pub const HINDI: &str = "hi";

#[async_trait]
pub trait NewsFetcher: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Fetch up to `count` raw articles about `company`, in feed order.
    async fn fetch(&self, company: &str, count: usize) -> Result<Vec<Article>>;
}

#[async_trait]
pub trait Translator: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    async fn translate(&self, text: &str, target_language: &str) -> Result<String>;
}

#[async_trait]
pub trait SpeechSynthesizer: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Returns encoded audio bytes.
    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>>;

    /// File extension of the produced audio.
    fn extension(&self) -> &str {
        "mp3"
    }
}
