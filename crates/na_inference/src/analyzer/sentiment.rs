//! Lexicon-based polarity scoring with VADER.

use na_core::{Error, Result, Sentiment};
use vader_sentiment::SentimentIntensityAnalyzer;

use crate::text;

pub struct SentimentModel {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl SentimentModel {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }

    /// VADER compound score of a single piece of text, in [-1, 1].
    pub fn compound(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }
        let scores = self.analyzer.polarity_scores(text);
        scores.get("compound").copied().unwrap_or(0.0)
    }

    /// Mean compound score over the title and every sentence of the content.
    ///
    /// Averaging per sentence keeps long articles from saturating at the
    /// ends of the scale.
    pub fn score(&self, title: &str, content: &str) -> Result<Sentiment> {
        let sentences = text::sentences(content);
        if sentences.is_empty() {
            return Err(Error::Analysis("no text to score".to_string()));
        }
        let scores: Vec<f64> = std::iter::once(title)
            .filter(|t| !t.trim().is_empty())
            .chain(sentences)
            .map(|s| self.compound(s))
            .collect();
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        Ok(Sentiment::from_score(mean))
    }
}

impl Default for SentimentModel {
    fn default() -> Self {
        Self::new()
    }
}
