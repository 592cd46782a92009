//! Per-article enrichment: summary, reading time, sentiment and topics.
//!
//! Each field is derived independently. A field that cannot be derived falls
//! back to a default and is recorded in [`Article::degraded`], so one bad
//! field never costs the rest of the article, and one bad article never
//! costs the rest of the batch.

pub mod sentiment;
pub mod summary;
pub mod topics;

use na_core::{Article, DegradedField, Result, Sentiment, TopicSet};
use std::fmt;
use tracing::{debug, warn};

use crate::{text, Config};
use sentiment::SentimentModel;

pub const FALLBACK_SUMMARY: &str = "No summary available.";

pub struct ArticleAnalyzer {
    config: Config,
    sentiment: SentimentModel,
}

impl fmt::Debug for ArticleAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArticleAnalyzer")
            .field("config", &self.config)
            .field("sentiment", &"<vader>")
            .finish()
    }
}

impl Default for ArticleAnalyzer {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl ArticleAnalyzer {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            sentiment: SentimentModel::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fill in the derived fields of `article` in place.
    pub fn analyze(&self, article: &mut Article) {
        article.degraded.clear();

        let max_chars = self.config.summary_max_chars;
        let derived_summary = summary::summarize(&article.content, self.config.summary_sentences, max_chars);
        article.summary = self.field(article, DegradedField::Summary, derived_summary, || {
            text::truncate_words(FALLBACK_SUMMARY, max_chars)
        });

        let derived_time = summary::reading_time(&article.content, self.config.words_per_minute);
        article.reading_time = self.field(article, DegradedField::ReadingTime, derived_time, || {
            summary::format_minutes(0)
        });

        let derived_sentiment = self.sentiment.score(&article.title, &article.content);
        article.sentiment = self.field(article, DegradedField::Sentiment, derived_sentiment, Sentiment::neutral);

        let derived_topics = topics::extract_topics(&article.title, &article.content, self.config.max_topics);
        article.topics = self.field(article, DegradedField::Topics, derived_topics, TopicSet::new);

        debug!(
            "🧪 {} → {} ({:.2}), {} topics",
            article.title,
            article.sentiment.label(),
            article.sentiment.score(),
            article.topics.len()
        );
    }

    /// Analyze every article in order, reporting `(index, total)` after each.
    pub fn analyze_all<F>(&self, articles: &mut [Article], mut on_analyzed: F)
    where
        F: FnMut(usize, usize),
    {
        let total = articles.len();
        for (index, article) in articles.iter_mut().enumerate() {
            self.analyze(article);
            on_analyzed(index, total);
        }
    }

    fn field<T>(
        &self,
        article: &mut Article,
        field: DegradedField,
        derived: Result<T>,
        fallback: impl FnOnce() -> T,
    ) -> T {
        match derived {
            Ok(value) => value,
            Err(e) => {
                warn!("⚠️ {:?} of '{}' fell back to default: {}", field, article.title, e);
                article.degraded.push(field);
                fallback()
            }
        }
    }
}
