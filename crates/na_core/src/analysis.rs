use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{SentimentLabel, TopicSet};

/// Number of ranked topics surfaced by the presentation layers.
pub const TOP_TOPICS_DISPLAYED: usize = 8;

/// Article count per label. All three labels are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<SentimentLabel, usize>", into = "BTreeMap<SentimentLabel, usize>")]
pub struct SentimentCounts {
    positive: usize,
    neutral: usize,
    negative: usize,
}

impl SentimentCounts {
    pub fn from_labels<I: IntoIterator<Item = SentimentLabel>>(labels: I) -> Self {
        let mut counts = Self { positive: 0, neutral: 0, negative: 0 };
        for label in labels {
            *counts.slot(label) += 1;
        }
        counts
    }

    fn slot(&mut self, label: SentimentLabel) -> &mut usize {
        match label {
            SentimentLabel::Positive => &mut self.positive,
            SentimentLabel::Neutral => &mut self.neutral,
            SentimentLabel::Negative => &mut self.negative,
        }
    }

    pub fn get(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Neutral => self.neutral,
            SentimentLabel::Negative => self.negative,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }

    /// Share of articles with `label`, in percent.
    pub fn percentage(&self, label: SentimentLabel) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.get(label) as f64 / total as f64 * 100.0,
        }
    }

    /// The label with the strictly highest count, or `None` on a tie.
    pub fn dominant(&self) -> Option<SentimentLabel> {
        let max = SentimentLabel::ALL.iter().map(|l| self.get(*l)).max()?;
        let mut leaders = SentimentLabel::ALL.iter().filter(|l| self.get(**l) == max);
        let first = *leaders.next()?;
        match leaders.next() {
            Some(_) => None,
            None => Some(first),
        }
    }
}

impl From<BTreeMap<SentimentLabel, usize>> for SentimentCounts {
    fn from(map: BTreeMap<SentimentLabel, usize>) -> Self {
        Self {
            positive: map.get(&SentimentLabel::Positive).copied().unwrap_or(0),
            neutral: map.get(&SentimentLabel::Neutral).copied().unwrap_or(0),
            negative: map.get(&SentimentLabel::Negative).copied().unwrap_or(0),
        }
    }
}

impl From<SentimentCounts> for BTreeMap<SentimentLabel, usize> {
    fn from(counts: SentimentCounts) -> Self {
        SentimentLabel::ALL.iter().map(|l| (*l, counts.get(*l))).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicCount {
    pub topic: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicOverlap {
    #[serde(rename = "Common Topics")]
    pub common_topics: TopicSet,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueTopics {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Unique Topics")]
    pub unique_topics: TopicSet,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageDifference {
    #[serde(rename = "Comparison")]
    pub comparison: String,
    #[serde(rename = "Impact")]
    pub impact: String,
}

/// Aggregate view over the articles of one report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparativeAnalysis {
    pub sentiment_counts: SentimentCounts,
    pub average_sentiment_score: f64,
    /// Every topic seen, most frequent first.
    pub common_topics: Vec<TopicCount>,
    pub topic_overlap: TopicOverlap,
    pub unique_topics_by_article: Vec<UniqueTopics>,
    pub coverage_differences: Vec<CoverageDifference>,
    pub final_sentiment_analysis: String,
}

impl ComparativeAnalysis {
    pub fn top_topics(&self, limit: usize) -> &[TopicCount] {
        &self.common_topics[..limit.min(self.common_topics.len())]
    }

    pub fn average_label(&self) -> SentimentLabel {
        SentimentLabel::from_score(self.average_sentiment_score)
    }
}
