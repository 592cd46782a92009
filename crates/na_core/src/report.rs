use serde::{Deserialize, Serialize};

use crate::analysis::{ComparativeAnalysis, CoverageDifference, SentimentCounts, TopicOverlap};
use crate::types::{Article, SentimentLabel, TopicSet};

/// Placeholder the exported report carries in place of the audio itself.
pub const AUDIO_PLACEHOLDER: &str = "[Play Hindi Speech]";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleReport {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Summary")]
    pub summary: String,
    #[serde(rename = "Sentiment")]
    pub sentiment: SentimentLabel,
    #[serde(rename = "Topics")]
    pub topics: TopicSet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportTopicOverlap {
    #[serde(rename = "Common Topics")]
    pub common_topics: TopicSet,
    #[serde(rename = "Most Frequent Topics")]
    pub most_frequent_topics: Vec<(String, usize)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparativeScore {
    #[serde(rename = "Sentiment Distribution")]
    pub sentiment_distribution: SentimentCounts,
    #[serde(rename = "Coverage Differences")]
    pub coverage_differences: Vec<CoverageDifference>,
    #[serde(rename = "Topic Overlap")]
    pub topic_overlap: ReportTopicOverlap,
}

/// The exported analysis document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Articles")]
    pub articles: Vec<ArticleReport>,
    #[serde(rename = "Comparative Sentiment Score")]
    pub comparative_sentiment_score: ComparativeScore,
    #[serde(rename = "Final Sentiment Analysis")]
    pub final_sentiment_analysis: String,
    #[serde(rename = "Audio")]
    pub audio: String,
}

impl Report {
    pub fn build(company: &str, articles: &[Article], analysis: &ComparativeAnalysis) -> Self {
        let TopicOverlap { common_topics } = analysis.topic_overlap.clone();
        Self {
            company: company.to_string(),
            articles: articles
                .iter()
                .map(|article| ArticleReport {
                    title: article.title.clone(),
                    summary: article.summary.clone(),
                    sentiment: article.sentiment.label(),
                    topics: article.topics.clone(),
                })
                .collect(),
            comparative_sentiment_score: ComparativeScore {
                sentiment_distribution: analysis.sentiment_counts.clone(),
                coverage_differences: analysis.coverage_differences.clone(),
                topic_overlap: ReportTopicOverlap {
                    common_topics,
                    most_frequent_topics: analysis
                        .common_topics
                        .iter()
                        .map(|tc| (tc.topic.clone(), tc.count))
                        .collect(),
                },
            },
            final_sentiment_analysis: analysis.final_sentiment_analysis.clone(),
            audio: AUDIO_PLACEHOLDER.to_string(),
        }
    }

    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// Keeps the company readable in file names while never producing a path
// separator or a `..` component.
fn file_stem(company: &str) -> String {
    company
        .chars()
        .map(|c| if c.is_alphanumeric() || matches!(c, ' ' | '-' | '_') { c } else { '_' })
        .collect()
}

/// `<company>_analysis.json`
pub fn report_file_name(company: &str) -> String {
    format!("{}_analysis.json", file_stem(company))
}

/// `<company>_summary_hindi.<extension>`
pub fn audio_file_name(company: &str, extension: &str) -> String {
    format!("{}_summary_hindi.{}", file_stem(company), extension)
}
