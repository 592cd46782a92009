//! The headline paragraph shown above a report.

use na_core::{Article, ComparativeAnalysis, Error, Result, SentimentLabel};

use crate::text::join_list;

const OVERVIEW_TOPICS: usize = 3;

pub fn overall_summary(company: &str, articles: &[Article], analysis: &ComparativeAnalysis) -> Result<String> {
    if articles.is_empty() {
        return Err(Error::EmptyArticleSet);
    }
    let counts = &analysis.sentiment_counts;
    let noun = if articles.len() == 1 { "article" } else { "articles" };

    let mut out = format!(
        "Analysis of {} recent news {} about {} shows ",
        articles.len(),
        noun,
        company
    );
    match counts.dominant() {
        Some(label) => out.push_str(&format!(
            "predominantly {} coverage ({} of {}).",
            label.as_str().to_lowercase(),
            counts.get(label),
            articles.len()
        )),
        None => out.push_str(&format!(
            "mixed coverage: {} positive, {} neutral and {} negative.",
            counts.get(SentimentLabel::Positive),
            counts.get(SentimentLabel::Neutral),
            counts.get(SentimentLabel::Negative)
        )),
    }
    out.push_str(&format!(
        " The average sentiment score is {:.2} ({}).",
        analysis.average_sentiment_score,
        analysis.average_label()
    ));

    let topics: Vec<&str> = analysis
        .top_topics(OVERVIEW_TOPICS)
        .iter()
        .map(|t| t.topic.as_str())
        .collect();
    if !topics.is_empty() {
        out.push_str(&format!(" Coverage centres on {}.", join_list(&topics)));
    }

    out.push_str(match analysis.average_label() {
        SentimentLabel::Positive => " Overall, the news flow paints a favourable picture of the company.",
        SentimentLabel::Neutral => " Overall, the news flow is balanced with no clear lean.",
        SentimentLabel::Negative => " Overall, the news flow points to concerns worth watching.",
    });
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::compare;
    use na_core::Sentiment;

    fn article(score: f64, topics: &[&str]) -> Article {
        let mut a = Article::new("t", "s", "2025-01-01", "http://test.com", "c");
        a.sentiment = Sentiment::from_score(score);
        a.topics = topics.iter().copied().collect();
        a
    }

    #[test]
    fn test_dominant_label_and_topics() {
        let articles = vec![
            article(0.6, &["Sales", "Europe"]),
            article(0.4, &["Sales"]),
            article(-0.3, &["Recall"]),
        ];
        let analysis = compare(&articles).unwrap();
        let summary = overall_summary("Tesla", &articles, &analysis).unwrap();
        assert!(summary.starts_with("Analysis of 3 recent news articles about Tesla"));
        assert!(summary.contains("predominantly positive coverage (2 of 3)"));
        assert!(summary.contains("0.23 (Positive)"));
        assert!(summary.contains("Sales, Europe and Recall"));
        assert!(summary.ends_with("favourable picture of the company."));
    }

    #[test]
    fn test_tie_is_mixed() {
        let articles = vec![article(0.5, &[]), article(-0.5, &[])];
        let analysis = compare(&articles).unwrap();
        let summary = overall_summary("Apple", &articles, &analysis).unwrap();
        assert!(summary.contains("mixed coverage: 1 positive, 0 neutral and 1 negative."));
        assert!(!summary.contains("centres on"));
    }

    #[test]
    fn test_single_article_and_empty_set() {
        let articles = vec![article(0.0, &["Chips"])];
        let analysis = compare(&articles).unwrap();
        let summary = overall_summary("Samsung", &articles, &analysis).unwrap();
        assert!(summary.contains("1 recent news article about Samsung"));
        assert!(matches!(overall_summary("Samsung", &[], &analysis), Err(Error::EmptyArticleSet)));
    }
}
