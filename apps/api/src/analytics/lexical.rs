//! Lexical statistics: unique words, vocabulary richness, most common words.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::analytics::lexicon::is_stopword;
use crate::analytics::round_to;
use crate::analytics::tokenize::words;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LexicalStats {
    /// All `\w+` tokens, stopwords included.
    pub token_count: usize,
    /// Distinct tokens after stopword removal.
    pub unique_word_count: usize,
    /// unique / token_count, 2 decimals; 0 for empty text.
    pub vocabulary_richness: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

pub fn lexical_stats(text: &str) -> LexicalStats {
    let tokens: Vec<String> = words(text).collect();
    let unique: HashSet<&str> = tokens
        .iter()
        .map(String::as_str)
        .filter(|w| !is_stopword(w))
        .collect();

    let vocabulary_richness = if tokens.is_empty() {
        0.0
    } else {
        round_to(unique.len() as f64 / tokens.len() as f64, 2)
    };

    LexicalStats {
        token_count: tokens.len(),
        unique_word_count: unique.len(),
        vocabulary_richness,
    }
}

/// The `top_n` most frequent non-stopword tokens, highest count first.
/// Equal counts keep the order in which the words first appeared.
pub fn most_common_words(text: &str, top_n: usize) -> Vec<WordFrequency> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<WordFrequency> = Vec::new();

    for word in words(text).filter(|w| !is_stopword(w)) {
        match index.get(&word) {
            Some(&slot) => counts[slot].count += 1,
            None => {
                index.insert(word.clone(), counts.len());
                counts.push(WordFrequency { word, count: 1 });
            }
        }
    }

    // sort_by is stable, so first-seen order survives among ties
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(top_n);
    counts
}
