//! Aggregates a set of analyzed articles into a [`ComparativeAnalysis`].

pub mod coverage;
pub mod verdict;

use std::collections::HashMap;

use na_core::{
    Article, ComparativeAnalysis, Error, Result, SentimentCounts, TopicCount, TopicOverlap, TopicSet,
    UniqueTopics,
};

pub fn compare(articles: &[Article]) -> Result<ComparativeAnalysis> {
    if articles.is_empty() {
        return Err(Error::EmptyArticleSet);
    }

    let sentiment_counts = SentimentCounts::from_labels(articles.iter().map(|a| a.sentiment.label()));
    let average_sentiment_score =
        articles.iter().map(|a| a.sentiment.score()).sum::<f64>() / articles.len() as f64;
    let common_topics = rank_topics(articles);
    let final_sentiment_analysis =
        verdict::final_sentiment_analysis(&sentiment_counts, average_sentiment_score, &common_topics);

    Ok(ComparativeAnalysis {
        sentiment_counts,
        average_sentiment_score,
        topic_overlap: TopicOverlap { common_topics: shared_topics(articles) },
        unique_topics_by_article: unique_topics(articles),
        coverage_differences: coverage::adjacent_differences(articles),
        common_topics,
        final_sentiment_analysis,
    })
}

/// Every topic with the number of articles mentioning it, most frequent
/// first. Equal counts keep first-encounter order.
pub fn rank_topics(articles: &[Article]) -> Vec<TopicCount> {
    let mut ranking: Vec<TopicCount> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for topic in articles.iter().flat_map(|a| a.topics.iter()) {
        match positions.get(topic.as_str()) {
            Some(&pos) => ranking[pos].count += 1,
            None => {
                positions.insert(topic.as_str(), ranking.len());
                ranking.push(TopicCount { topic: topic.clone(), count: 1 });
            }
        }
    }
    // sort_by is stable, so ties stay in encounter order
    ranking.sort_by(|a, b| b.count.cmp(&a.count));
    ranking
}

/// Topics present in every article.
pub fn shared_topics(articles: &[Article]) -> TopicSet {
    let Some((first, rest)) = articles.split_first() else {
        return TopicSet::new();
    };
    first
        .topics
        .iter()
        .filter(|topic| rest.iter().all(|other| other.topics.contains(topic)))
        .cloned()
        .collect()
}

/// For each article, the topics no other article mentions.
pub fn unique_topics(articles: &[Article]) -> Vec<UniqueTopics> {
    articles
        .iter()
        .enumerate()
        .map(|(i, article)| UniqueTopics {
            title: article.title.clone(),
            unique_topics: article
                .topics
                .iter()
                .filter(|topic| {
                    articles
                        .iter()
                        .enumerate()
                        .all(|(j, other)| j == i || !other.topics.contains(topic))
                })
                .cloned()
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use na_core::{Sentiment, SentimentLabel};

    fn article(title: &str, score: f64, topics: &[&str]) -> Article {
        let mut a = Article::new(title, "test", "2025-01-01", "http://test.com", "content");
        a.sentiment = Sentiment::from_score(score);
        a.topics = topics.iter().copied().collect();
        a
    }

    fn scenario() -> Vec<Article> {
        vec![
            article("First", 0.5, &["A", "B"]),
            article("Second", 0.0, &["B", "C"]),
            article("Third", -0.4, &["B", "D"]),
        ]
    }

    #[test]
    fn test_empty_set_is_rejected() {
        assert!(matches!(compare(&[]), Err(Error::EmptyArticleSet)));
    }

    #[test]
    fn test_three_article_scenario() {
        let analysis = compare(&scenario()).unwrap();

        assert_eq!(analysis.topic_overlap.common_topics.as_slice(), &["B".to_string()]);

        let unique: Vec<Vec<String>> = analysis
            .unique_topics_by_article
            .iter()
            .map(|u| u.unique_topics.as_slice().to_vec())
            .collect();
        assert_eq!(unique, vec![vec!["A".to_string()], vec!["C".to_string()], vec!["D".to_string()]]);
        assert_eq!(analysis.unique_topics_by_article[1].title, "Second");

        assert_eq!(analysis.common_topics[0], TopicCount { topic: "B".into(), count: 3 });
        let order: Vec<&str> = analysis.common_topics.iter().map(|t| t.topic.as_str()).collect();
        assert_eq!(order, vec!["B", "A", "C", "D"]);
    }

    #[test]
    fn test_counts_and_average() {
        let analysis = compare(&scenario()).unwrap();
        let counts = &analysis.sentiment_counts;
        assert_eq!(counts.get(SentimentLabel::Positive), 1);
        assert_eq!(counts.get(SentimentLabel::Neutral), 1);
        assert_eq!(counts.get(SentimentLabel::Negative), 1);
        assert_eq!(counts.total(), 3);
        assert!((analysis.average_sentiment_score - (0.5 + 0.0 - 0.4) / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_counts_sum_to_article_count() {
        for n in 1..=12 {
            let articles: Vec<Article> = (0..n)
                .map(|i| article(&format!("A{}", i), (i as f64 - 6.0) / 6.0, &[]))
                .collect();
            assert_eq!(compare(&articles).unwrap().sentiment_counts.total(), n);
        }
    }

    #[test]
    fn test_ranking_is_non_increasing_with_encounter_ties() {
        let articles = vec![
            article("1", 0.0, &["X", "Y", "Z"]),
            article("2", 0.0, &["Z", "W"]),
            article("3", 0.0, &["W", "Y", "V"]),
        ];
        let ranking = rank_topics(&articles);
        assert!(ranking.windows(2).all(|w| w[0].count >= w[1].count));
        let order: Vec<&str> = ranking.iter().map(|t| t.topic.as_str()).collect();
        assert_eq!(order, vec!["Y", "Z", "W", "X", "V"]);
    }

    #[test]
    fn test_overlap_is_empty_when_an_article_has_no_topics() {
        let articles = vec![article("1", 0.0, &["A", "B"]), article("2", 0.0, &[]), article("3", 0.0, &["A"])];
        assert!(shared_topics(&articles).is_empty());
    }

    #[test]
    fn test_overlap_is_subset_of_every_article() {
        let articles = vec![
            article("1", 0.0, &["A", "B", "C"]),
            article("2", 0.0, &["C", "B"]),
            article("3", 0.0, &["B", "C", "E"]),
        ];
        let overlap = shared_topics(&articles);
        assert_eq!(overlap.as_slice(), &["B".to_string(), "C".to_string()]);
        for a in &articles {
            assert!(overlap.iter().all(|t| a.topics.contains(t)));
        }
    }

    #[test]
    fn test_unique_topics_never_shared() {
        let articles = vec![
            article("1", 0.0, &["A", "B"]),
            article("2", 0.0, &["B"]),
            article("3", 0.0, &["B", "C", "A"]),
        ];
        let unique = unique_topics(&articles);
        assert_eq!(unique.len(), 3);
        assert!(unique[0].unique_topics.is_empty());
        assert!(unique[1].unique_topics.is_empty());
        assert_eq!(unique[2].unique_topics.as_slice(), &["C".to_string()]);
        for (i, u) in unique.iter().enumerate() {
            for (j, other) in articles.iter().enumerate() {
                if i != j {
                    assert!(u.unique_topics.iter().all(|t| !other.topics.contains(t)));
                }
            }
        }
    }

    #[test]
    fn test_single_article() {
        let analysis = compare(&[article("Only", 0.3, &["A"])]).unwrap();
        assert_eq!(analysis.topic_overlap.common_topics.as_slice(), &["A".to_string()]);
        assert_eq!(analysis.unique_topics_by_article[0].unique_topics.as_slice(), &["A".to_string()]);
        assert!(analysis.coverage_differences.is_empty());
    }
}
