//! Template narratives contrasting two articles.
//!
//! Articles are compared with their successor only: 1 vs 2, 2 vs 3, ...

use na_core::{Article, CoverageDifference, SentimentLabel};

use crate::text::join_list;

const FOCUS_TOPICS: usize = 3;

pub fn adjacent_differences(articles: &[Article]) -> Vec<CoverageDifference> {
    articles
        .windows(2)
        .enumerate()
        .map(|(i, pair)| describe_pair(i + 1, &pair[0], i + 2, &pair[1]))
        .collect()
}

/// Comparison and impact sentences for articles at 1-based positions
/// `first_pos` and `second_pos`.
pub fn describe_pair(first_pos: usize, first: &Article, second_pos: usize, second: &Article) -> CoverageDifference {
    let shared: Vec<&str> = first
        .topics
        .iter()
        .filter(|t| second.topics.contains(t))
        .map(String::as_str)
        .collect();

    let mut comparison = format!(
        "Article {} (\"{}\") focuses on {}, while Article {} (\"{}\") focuses on {}.",
        first_pos,
        first.title,
        focus(first, &shared),
        second_pos,
        second.title,
        focus(second, &shared),
    );
    if !shared.is_empty() {
        comparison.push_str(&format!(" Both cover {}.", join_list(&shared[..shared.len().min(FOCUS_TOPICS)])));
    }

    CoverageDifference {
        comparison,
        impact: impact(first.sentiment.label(), second.sentiment.label()),
    }
}

/// The article's own topics, preferring those the other article lacks.
fn focus(article: &Article, shared: &[&str]) -> String {
    let mut topics: Vec<&str> = article
        .topics
        .iter()
        .map(String::as_str)
        .filter(|t| !shared.contains(t))
        .take(FOCUS_TOPICS)
        .collect();
    if topics.is_empty() {
        topics = article.topics.iter().map(String::as_str).take(FOCUS_TOPICS).collect();
    }
    if topics.is_empty() {
        "general coverage".to_string()
    } else {
        join_list(&topics)
    }
}

fn takeaway(label: SentimentLabel) -> &'static str {
    match label {
        SentimentLabel::Positive => "is likely to boost reader confidence",
        SentimentLabel::Neutral => "keeps to a factual, balanced account",
        SentimentLabel::Negative => "is likely to raise concerns among readers",
    }
}

fn impact(first: SentimentLabel, second: SentimentLabel) -> String {
    if first == second {
        let tone = match first {
            SentimentLabel::Positive => "optimistic",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "critical",
        };
        return format!(
            "Both articles take a {} tone, reinforcing the same impression for readers.",
            tone
        );
    }
    format!(
        "The first article {}, while the second {}, so readers get a contrasting picture.",
        takeaway(first),
        takeaway(second)
    )
}
