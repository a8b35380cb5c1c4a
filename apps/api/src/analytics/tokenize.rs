//! Word, sentence and line splitting shared by every analyzer.
//!
//! Matching is surface-form only: no stemming, no lemmatisation, and sentence
//! boundaries are naive (`Dr. Smith` ends a sentence after `Dr.`).

use once_cell::sync::Lazy;
use regex::Regex;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").expect("valid word regex"));

/// A run of non-terminators closed by one terminator. Trailing text with no
/// terminator is not a sentence.
static SENTENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^.!?]+[.!?]").expect("valid sentence regex"));

static LINE_BREAK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r\n|\n|\r").expect("valid line break regex"));

/// Word tokens as they appear in the text, case preserved.
pub fn raw_words(text: &str) -> impl Iterator<Item = &str> {
    WORD_RE.find_iter(text).map(|m| m.as_str())
}

/// Lowercase word tokens.
pub fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    raw_words(text).map(str::to_lowercase)
}

/// Sentences including their terminator, untrimmed.
pub fn sentences(text: &str) -> impl Iterator<Item = &str> {
    SENTENCE_RE.find_iter(text).map(|m| m.as_str())
}

/// Lines of the text. Empty text has no lines.
pub fn lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    LINE_BREAK_RE.split(text).collect()
}

/// Whitespace-delimited word count, as a reader would count.
pub fn whitespace_word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
