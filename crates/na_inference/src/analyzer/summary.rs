use na_core::{Error, Result};

use crate::text::{self, char_len};

/// Leading sentences of `content`, never longer than `max_chars` and never
/// cut inside a word.
pub fn summarize(content: &str, max_sentences: usize, max_chars: usize) -> Result<String> {
    let content = text::clean_text(content);
    let sentences = text::sentences(&content);
    let first = *sentences
        .first()
        .ok_or_else(|| Error::Analysis("content too short to summarize".to_string()))?;

    let mut summary = String::new();
    for sentence in sentences.iter().take(max_sentences.max(1)) {
        let extra = if summary.is_empty() { char_len(sentence) } else { char_len(sentence) + 1 };
        if char_len(&summary) + extra > max_chars {
            break;
        }
        if !summary.is_empty() {
            summary.push(' ');
        }
        summary.push_str(sentence);
    }

    if summary.is_empty() {
        summary = text::truncate_words(first, max_chars);
    }
    if summary.is_empty() {
        return Err(Error::Analysis(format!("no words fit in {} characters", max_chars)));
    }
    Ok(summary)
}

/// `"N min read"`, rounded up, at least one minute for any text.
pub fn reading_time(content: &str, words_per_minute: usize) -> Result<String> {
    let words = text::word_count(content);
    if words == 0 {
        return Err(Error::Analysis("no words to time".to_string()));
    }
    let minutes = words.div_ceil(words_per_minute.max(1));
    Ok(format_minutes(minutes))
}

pub fn format_minutes(minutes: usize) -> String {
    format!("{} min read", minutes)
}
