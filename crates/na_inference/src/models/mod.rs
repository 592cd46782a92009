//! Translation and speech collaborators.

use std::sync::Arc;

use na_core::{Error, Result, SpeechSynthesizer, Translator};

use crate::text::{char_len, sentences};

pub mod dummy;
pub mod google;

pub use dummy::{DummySpeech, DummyTranslator};
pub use google::{GoogleSpeech, GoogleTranslator};

pub const AVAILABLE_TRANSLATORS: &[&str] = &["google", "dummy"];
pub const AVAILABLE_SYNTHESIZERS: &[&str] = &["google", "dummy"];

pub fn create_translator(name: &str) -> Result<Arc<dyn Translator>> {
    match name.to_lowercase().as_str() {
        "google" => Ok(Arc::new(GoogleTranslator::new()?)),
        "dummy" => Ok(Arc::new(DummyTranslator)),
        other => Err(Error::InvalidRequest(format!(
            "unknown translator '{}', expected one of: {}",
            other,
            AVAILABLE_TRANSLATORS.join(", ")
        ))),
    }
}

pub fn create_synthesizer(name: &str) -> Result<Arc<dyn SpeechSynthesizer>> {
    match name.to_lowercase().as_str() {
        "google" => Ok(Arc::new(GoogleSpeech::new()?)),
        "dummy" => Ok(Arc::new(DummySpeech)),
        other => Err(Error::InvalidRequest(format!(
            "unknown speech synthesizer '{}', expected one of: {}",
            other,
            AVAILABLE_SYNTHESIZERS.join(", ")
        ))),
    }
}

/// Split `text` into pieces of at most `max_chars` characters, preferring
/// sentence then word boundaries.
pub(crate) fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();

    for sentence in sentences(text) {
        if char_len(sentence) <= max_chars {
            push_piece(sentence, max_chars, &mut chunks, &mut current);
            continue;
        }
        for word in sentence.split_whitespace() {
            if char_len(word) <= max_chars {
                push_piece(word, max_chars, &mut chunks, &mut current);
                continue;
            }
            let chars: Vec<char> = word.chars().collect();
            for part in chars.chunks(max_chars) {
                let part: String = part.iter().collect();
                push_piece(&part, max_chars, &mut chunks, &mut current);
            }
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

fn push_piece(piece: &str, max_chars: usize, chunks: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() && char_len(current) + 1 + char_len(piece) > max_chars {
        chunks.push(std::mem::take(current));
    }
    if !current.is_empty() {
        current.push(' ');
    }
    current.push_str(piece);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factories() {
        assert_eq!(create_translator("dummy").unwrap().name(), "Dummy");
        assert_eq!(create_synthesizer("Dummy").unwrap().name(), "Dummy");
        assert!(create_translator("babel").is_err());
        assert!(matches!(create_synthesizer("nope"), Err(Error::InvalidRequest(_))));
    }

    #[test]
    fn test_chunk_text_respects_limit() {
        let text = "Tesla shares rose today. Analysts expect strong deliveries next quarter. \
                    Supercalifragilisticexpialidocious words get split.";
        for limit in [10, 25, 40, 200] {
            let chunks = chunk_text(text, limit);
            assert!(!chunks.is_empty());
            assert!(chunks.iter().all(|c| char_len(c) <= limit), "limit {}: {:?}", limit, chunks);
        }
        assert_eq!(chunk_text(text, 500).len(), 1);
        assert!(chunk_text("   ", 10).is_empty());
    }

    #[test]
    fn test_chunk_text_keeps_sentences_whole_when_possible() {
        let chunks = chunk_text("One two. Three four.", 12);
        assert_eq!(chunks, vec!["One two.", "Three four."]);
    }
}
