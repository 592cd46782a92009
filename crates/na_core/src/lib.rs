pub mod analysis;
pub mod error;
pub mod models;
pub mod progress;
pub mod report;
pub mod storage;
pub mod types;

pub use analysis::{ComparativeAnalysis, CoverageDifference, SentimentCounts, TopicCount, TopicOverlap, UniqueTopics};
pub use error::Error;
pub use models::{NewsFetcher, SpeechSynthesizer, Translator};
pub use progress::{LoggingObserver, NoopObserver, PipelineEvent, ProgressObserver};
pub use report::Report;
pub use storage::ArticleCache;
pub use types::{cache_key, Article, CacheEntry, DegradedField, Sentiment, SentimentLabel, TopicSet};

pub type Result<T> = std::result::Result<T, Error>;

/// Companies offered as presets by the front ends.
pub const PRESET_COMPANIES: &[&str] = &[
    "Tesla", "Samsung", "Apple", "Microsoft", "Google", "Amazon", "Tata", "Reliance", "Infosys", "TCS",
];
