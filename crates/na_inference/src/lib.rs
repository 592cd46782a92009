pub mod analyzer;
pub mod comparison;
pub mod models;
pub mod overview;
mod text;

/// Knobs for the per-article analyzer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Leading sentences kept in a summary.
    pub summary_sentences: usize,
    /// Hard bound on summary length, in characters.
    pub summary_max_chars: usize,
    pub words_per_minute: usize,
    pub max_topics: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            summary_sentences: 3,
            summary_max_chars: 250,
            words_per_minute: 200,
            max_topics: 5,
        }
    }
}

pub mod prelude {
    pub use super::analyzer::ArticleAnalyzer;
    pub use super::comparison::compare;
    pub use super::models::{create_synthesizer, create_translator};
    pub use super::overview::overall_summary;
    pub use super::Config;
    pub use na_core::{Article, ComparativeAnalysis, Error, Result};
}

pub use analyzer::ArticleAnalyzer;
pub use comparison::compare;
pub use models::{create_synthesizer, create_translator};
pub use overview::overall_summary;

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_inference_pipeline() {
        let analyzer = ArticleAnalyzer::new(Config::default());
        let mut articles = vec![
            Article::new(
                "Tesla posts record deliveries",
                "Reuters",
                "2025-01-02",
                "https://example.com/1",
                "Tesla delivered a record number of vehicles this quarter. Investors cheered the strong growth.",
            ),
            Article::new(
                "Tesla faces recall over software fault",
                "AP",
                "2025-01-03",
                "https://example.com/2",
                "Regulators ordered a recall after a dangerous software fault. Owners are worried and angry.",
            ),
        ];
        analyzer.analyze_all(&mut articles, |_, _| {});

        let analysis = compare(&articles).unwrap();
        assert_eq!(analysis.sentiment_counts.total(), 2);
        assert_eq!(analysis.coverage_differences.len(), 1);

        let summary = overall_summary("Tesla", &articles, &analysis).unwrap();
        assert!(summary.contains("Tesla"));
        assert!(summary.contains("2 recent news articles"));
    }
}
