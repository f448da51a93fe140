//! Sentence context for a change.
//!
//! Two pieces of context accompany every record: a word window around the
//! snippet, and the sentence rewritten with the change applied. Both are
//! textual heuristics and never fail; when the snippet cannot be located
//! the full text comes back unchanged.

use crate::config::ContextOptions;

/// A window of words around `target` inside `text`.
///
/// The window is anchored on the first exact occurrence of the target's
/// first word in the whitespace-tokenized text, and extends
/// `options.window` words before it and `options.window` words past the
/// target's own length. Returns `text` unchanged when the target is blank
/// or its first word is not found.
pub fn surrounding_text(text: &str, target: &str, options: &ContextOptions) -> String {
    let target_words: Vec<&str> = target.split_whitespace().collect();
    let first = match target_words.first() {
        Some(first) => *first,
        None => return text.to_string(),
    };

    let words: Vec<&str> = text.split_whitespace().collect();
    match words.iter().position(|word| *word == first) {
        Some(index) => {
            let start = index.saturating_sub(options.window);
            let end = index
                .saturating_add(options.window)
                .saturating_add(target_words.len())
                .min(words.len());
            options.joiner.join(&words[start..end])
        }
        None => text.to_string(),
    }
}

/// `text` with the first literal occurrence of `original` replaced by
/// `correction`, or removed when there is no correction.
///
/// This is a content search, not a positional edit: if `original` occurs
/// more than once, the first occurrence is the one rewritten.
pub fn corrected_sentence(text: &str, original: &str, correction: Option<&str>) -> String {
    if original.is_empty() {
        return text.to_string();
    }
    text.replacen(original, correction.unwrap_or(""), 1)
}
