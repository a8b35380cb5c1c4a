//! Local spell check: a token is misspelled when it is neither a stopword nor
//! in the dictionary. No fuzzy matching and no suggestions.
//!
//! The dictionary is small, so proper nouns, jargon, abbreviations and bare
//! numbers are reported too. That is the accepted cost of checking offline.

use serde::{Deserialize, Serialize};

use crate::analytics::lexicon::{is_known_word, is_stopword};
use crate::analytics::tokenize::words;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpellingReport {
    pub error_count: usize,
    /// Unknown tokens in text order, lowercase, repeats kept.
    pub errors: Vec<String>,
}

impl SpellingReport {
    /// The first `limit` errors and whether any were left out.
    pub fn sample(&self, limit: usize) -> (&[String], bool) {
        let end = limit.min(self.errors.len());
        (&self.errors[..end], self.errors.len() > limit)
    }
}

pub fn spelling_errors(text: &str) -> Vec<String> {
    words(text)
        .filter(|w| !is_stopword(w) && !is_known_word(w))
        .collect()
}

pub fn check_spelling(text: &str) -> SpellingReport {
    let errors = spelling_errors(text);
    SpellingReport {
        error_count: errors.len(),
        errors,
    }
}
