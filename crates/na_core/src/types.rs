use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Scores above this are Positive, scores below its negation are Negative.
pub const SENTIMENT_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Neutral,
        SentimentLabel::Negative,
    ];

    pub fn from_score(score: f64) -> Self {
        if score > SENTIMENT_THRESHOLD {
            SentimentLabel::Positive
        } else if score < -SENTIMENT_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A polarity score and the label derived from it.
///
/// The label cannot be set on its own: every constructor, including
/// deserialization, goes through [`Sentiment::from_score`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "SentimentRepr")]
pub struct Sentiment {
    label: SentimentLabel,
    score: f64,
}

#[derive(Deserialize)]
struct SentimentRepr {
    score: f64,
}

impl From<SentimentRepr> for Sentiment {
    fn from(repr: SentimentRepr) -> Self {
        Sentiment::from_score(repr.score)
    }
}

impl Sentiment {
    pub fn from_score(score: f64) -> Self {
        let score = if score.is_finite() { score.clamp(-1.0, 1.0) } else { 0.0 };
        Self {
            label: SentimentLabel::from_score(score),
            score,
        }
    }

    pub fn neutral() -> Self {
        Self::from_score(0.0)
    }

    pub fn label(&self) -> SentimentLabel {
        self.label
    }

    pub fn score(&self) -> f64 {
        self.score
    }
}

impl Default for Sentiment {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Duplicate-free topics, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TopicSet(Vec<String>);

impl TopicSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Adds a topic, returning false if it was already present.
    pub fn insert(&mut self, topic: impl Into<String>) -> bool {
        let topic = topic.into();
        if self.contains(&topic) {
            return false;
        }
        self.0.push(topic);
        true
    }

    pub fn contains(&self, topic: &str) -> bool {
        self.0.iter().any(|t| t == topic)
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for TopicSet {
    fn from(topics: Vec<String>) -> Self {
        topics.into_iter().collect()
    }
}

impl From<TopicSet> for Vec<String> {
    fn from(topics: TopicSet) -> Self {
        topics.0
    }
}

impl<S: Into<String>> FromIterator<S> for TopicSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TopicSet::new();
        for topic in iter {
            set.insert(topic);
        }
        set
    }
}

impl<'a> IntoIterator for &'a TopicSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A derived article field that fell back to its default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegradedField {
    Summary,
    ReadingTime,
    Sentiment,
    Topics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub source: String,
    pub date: String,
    pub url: String,
    pub content: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub reading_time: String,
    #[serde(default)]
    pub sentiment: Sentiment,
    #[serde(default)]
    pub topics: TopicSet,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub degraded: Vec<DegradedField>,
}

impl Article {
    /// A raw article as delivered by a fetcher, with empty derived fields.
    pub fn new(
        title: impl Into<String>,
        source: impl Into<String>,
        date: impl Into<String>,
        url: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            source: source.into(),
            date: date.into(),
            url: url.into(),
            content: content.into(),
            summary: String::new(),
            reading_time: String::new(),
            sentiment: Sentiment::neutral(),
            topics: TopicSet::new(),
            degraded: Vec::new(),
        }
    }

    pub fn is_degraded(&self, field: DegradedField) -> bool {
        self.degraded.contains(&field)
    }
}

/// Normalized storage key: lowercased with all whitespace removed. Anything
/// other than alphanumerics, `-` and `_` becomes `_`, so a key is always a
/// single path component.
pub fn cache_key(company: &str) -> String {
    company
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub company: String,
    pub articles: Vec<Article>,
    pub timestamp: DateTime<Utc>,
}

impl CacheEntry {
    pub fn new(company: impl Into<String>, articles: Vec<Article>) -> Self {
        Self {
            company: company.into(),
            articles,
            timestamp: Utc::now(),
        }
    }

    pub fn key(&self) -> String {
        cache_key(&self.company)
    }

    pub fn age(&self) -> chrono::Duration {
        Utc::now().signed_duration_since(self.timestamp)
    }
}
