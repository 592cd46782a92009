use na_core::{SentimentCounts, SentimentLabel, TopicCount};

const VERDICT_TOPICS: usize = 3;

/// One-paragraph verdict on the overall coverage tone.
pub fn final_sentiment_analysis(counts: &SentimentCounts, average: f64, ranked_topics: &[TopicCount]) -> String {
    let tone = match SentimentLabel::from_score(average) {
        SentimentLabel::Positive => "mostly positive",
        SentimentLabel::Neutral => "largely neutral",
        SentimentLabel::Negative => "mostly negative",
    };

    let mut verdict = format!(
        "The latest news coverage is {}: {} positive, {} neutral and {} negative articles \
         with an average sentiment score of {:.2}.",
        tone,
        counts.get(SentimentLabel::Positive),
        counts.get(SentimentLabel::Neutral),
        counts.get(SentimentLabel::Negative),
        average,
    );

    let topics: Vec<&str> = ranked_topics
        .iter()
        .take(VERDICT_TOPICS)
        .map(|t| t.topic.as_str())
        .collect();
    if !topics.is_empty() {
        verdict.push_str(&format!(" Key themes: {}.", topics.join(", ")));
    }
    verdict
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topics(names: &[&str]) -> Vec<TopicCount> {
        names.iter().map(|n| TopicCount { topic: n.to_string(), count: 1 }).collect()
    }

    #[test]
    fn test_verdict_reports_tone_counts_and_themes() {
        let counts = SentimentCounts::from_labels([
            SentimentLabel::Positive,
            SentimentLabel::Positive,
            SentimentLabel::Negative,
        ]);
        let verdict = final_sentiment_analysis(&counts, 0.3456, &topics(&["Sales", "Europe", "Chips", "Ai"]));
        assert_eq!(
            verdict,
            "The latest news coverage is mostly positive: 2 positive, 0 neutral and 1 negative articles \
             with an average sentiment score of 0.35. Key themes: Sales, Europe, Chips."
        );
    }

    #[test]
    fn test_verdict_without_topics() {
        let counts = SentimentCounts::from_labels([SentimentLabel::Neutral]);
        let verdict = final_sentiment_analysis(&counts, 0.1, &[]);
        assert!(verdict.contains("largely neutral"));
        assert!(!verdict.contains("Key themes"));
    }

    #[test]
    fn test_negative_average() {
        let counts = SentimentCounts::from_labels([SentimentLabel::Negative]);
        assert!(final_sentiment_analysis(&counts, -0.5, &[]).contains("mostly negative"));
    }
}
