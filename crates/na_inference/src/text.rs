use unicode_segmentation::UnicodeSegmentation;

const ELLIPSIS: &str = "...";

/// Collapse every whitespace run into a single space.
pub(crate) fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub(crate) fn sentences(text: &str) -> Vec<&str> {
    text.unicode_sentences()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

pub(crate) fn word_count(text: &str) -> usize {
    text.unicode_words().count()
}

pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Cut `text` to at most `max_chars` characters on a word boundary, marking
/// the cut with an ellipsis that counts toward the bound.
pub(crate) fn truncate_words(text: &str, max_chars: usize) -> String {
    if char_len(text) <= max_chars {
        return text.to_string();
    }
    let ellipsis_len = char_len(ELLIPSIS);
    if max_chars < ellipsis_len {
        return String::new();
    }
    let room = max_chars - ellipsis_len;

    let mut out = String::new();
    for word in text.split_whitespace() {
        let needed = if out.is_empty() { char_len(word) } else { char_len(word) + 1 };
        if char_len(&out) + needed > room {
            break;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    let trimmed = out.trim_end_matches(|c: char| c.is_ascii_punctuation()).to_string();
    trimmed + ELLIPSIS
}

/// "a", "a and b", "a, b and c"
pub(crate) fn join_list(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
