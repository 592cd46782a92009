use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;
use na_core::{Error, Result, TopicSet};
use unicode_segmentation::UnicodeSegmentation;

use crate::text::{capitalize, char_len};

const MIN_TOPIC_CHARS: usize = 3;
const TITLE_WEIGHT: usize = 2;

lazy_static! {
    static ref STOPWORDS: HashSet<&'static str> = [
        "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
        "are", "around", "as", "at", "be", "because", "been", "before", "being", "below", "between",
        "both", "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each",
        "even", "few", "for", "from", "further", "get", "gets", "got", "had", "has", "have", "having",
        "he", "her", "here", "hers", "herself", "him", "himself", "his", "how", "however", "i", "if",
        "in", "into", "is", "it", "its", "itself", "just", "last", "like", "made", "make", "makes",
        "many", "may", "me", "might", "more", "most", "much", "must", "my", "myself", "new", "next",
        "no", "nor", "not", "now", "of", "off", "on", "once", "one", "only", "or", "other", "our",
        "ours", "ourselves", "out", "over", "own", "per", "percent", "said", "same", "say", "says",
        "she", "should", "since", "so", "some", "still", "such", "than", "that", "the", "their",
        "theirs", "them", "themselves", "then", "there", "these", "they", "this", "those", "three",
        "through", "to", "too", "two", "under", "until", "up", "upon", "us", "very", "was", "we",
        "week", "were", "what", "when", "where", "which", "while", "who", "whom", "why", "will",
        "with", "within", "without", "would", "year", "years", "yet", "you", "your", "yours",
        "yourself", "according", "reported", "report", "reports", "news", "today", "yesterday",
        "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday", "told",
        "including", "another", "across", "first", "back", "well", "way",
    ]
    .into_iter()
    .collect();
}

const CONTRACTION_SUFFIXES: &[&str] = &["'s", "n't", "'re", "'ll", "'ve", "'d", "'m"];

fn normalize(word: &str) -> Option<String> {
    let word = word.to_lowercase().replace('\u{2019}', "'");
    let word = CONTRACTION_SUFFIXES
        .iter()
        .find_map(|suffix| word.strip_suffix(suffix))
        .unwrap_or(word.as_str());
    if word.starts_with('\'') || word.ends_with('\'') {
        return None;
    }
    let word = word.to_string();
    if char_len(&word) < MIN_TOPIC_CHARS
        || !word.chars().any(char::is_alphabetic)
        || word.chars().all(|c| c.is_numeric() || c == '.' || c == ',')
        || STOPWORDS.contains(word.as_str())
    {
        return None;
    }
    Some(word)
}

/// Most salient keywords of an article. Title words count double; ties keep
/// the order in which words first appear.
pub fn extract_topics(title: &str, content: &str, max_topics: usize) -> Result<TopicSet> {
    if content.trim().is_empty() {
        return Err(Error::Analysis("no content to extract topics from".to_string()));
    }

    let mut weights: HashMap<String, (usize, usize)> = HashMap::new();
    let mut order = 0;
    let weighted = title
        .unicode_words()
        .map(|w| (w, TITLE_WEIGHT))
        .chain(content.unicode_words().map(|w| (w, 1)));
    for (word, weight) in weighted {
        let Some(word) = normalize(word) else { continue };
        let slot = weights.entry(word).or_insert_with(|| {
            order += 1;
            (0, order)
        });
        slot.0 += weight;
    }

    let mut ranked: Vec<(String, usize, usize)> =
        weights.into_iter().map(|(word, (weight, first))| (word, weight, first)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    Ok(ranked
        .into_iter()
        .take(max_topics)
        .map(|(word, _, _)| capitalize(&word))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_frequent_keywords() {
        let topics = extract_topics(
            "Tesla battery plant opens",
            "The battery plant will build battery cells. Tesla says the plant creates jobs.",
            3,
        )
        .unwrap();
        assert_eq!(topics.as_slice(), &["Battery", "Plant", "Tesla"]);
    }

    #[test]
    fn test_skips_stopwords_numbers_and_short_words() {
        let topics = extract_topics("", "The 2025 EV of the year is in 3.5 markets and it is the one.", 10).unwrap();
        assert!(topics.iter().all(|t| t != "The" && t != "2025" && t != "Ev" && t != "3.5"));
        assert!(topics.contains("Markets"));
    }

    #[test]
    fn test_possessives_merge_with_base_word() {
        let topics = extract_topics("Apple's profits", "Apple profits grew.", 5).unwrap();
        assert_eq!(topics.iter().filter(|t| t.as_str() == "Apple").count(), 1);
        assert_eq!(topics.as_slice()[0], "Apple");
    }

    #[test]
    fn test_contraction_fragments_are_not_topics() {
        let topics = extract_topics(
            "Buyers won't wait",
            "Dealers don't agree. n't they're 'tis shouldn\u{2019}t couldn't. Buyers want deliveries.",
            10,
        )
        .unwrap();
        assert!(topics.iter().all(|t| !t.contains('\'') && !t.contains('\u{2019}')));
        assert!(topics.iter().all(|t| t != "Don" && t != "Won" && t != "Shouldn"));
        assert_eq!(topics.as_slice()[0], "Buyers");
    }

    #[test]
    fn test_no_duplicates_and_bounded() {
        let topics = extract_topics("Samsung Samsung", "Samsung chips Samsung chips memory", 2).unwrap();
        assert_eq!(topics.len(), 2);
        assert_eq!(topics.as_slice(), &["Samsung", "Chips"]);
    }

    #[test]
    fn test_empty_content_fails() {
        assert!(extract_topics("A title", " ", 5).is_err());
    }
}
