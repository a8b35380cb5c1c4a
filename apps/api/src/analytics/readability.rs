//! Flesch Reading Ease with a regex syllable estimator.
//!
//! Formula: `206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words)`
//!
//! Higher is easier. Typical prose lands between 0 and 100; very short
//! words and sentences can push it past 100.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analytics::round_to;
use crate::analytics::tokenize::{raw_words, sentences};
use crate::models::resume::{ResumeFields, Section};

/// Silent endings: consonant + "es", "ed", consonant + "e" ("l" keeps its "e").
static SILENT_SUFFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:[^laeiouy]es|ed|[^laeiouy]e)$").expect("valid suffix regex"));

static LEADING_Y_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^y").expect("valid leading y regex"));

static VOWEL_GROUP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[aeiouy]{1,2}").expect("valid vowel group regex"));

/// Estimated syllables in one word. Never less than one.
pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    if word.chars().count() <= 3 {
        return 1;
    }
    let stripped = SILENT_SUFFIX_RE.replace(&word, "");
    let stripped = LEADING_Y_RE.replace(&stripped, "");
    VOWEL_GROUP_RE.find_iter(&stripped).count().max(1)
}

/// Flesch Reading Ease of `text`, 1 decimal.
///
/// Sentence and word counts floor at one, so empty text scores 206.8
/// rather than dividing by zero.
pub fn flesch_reading_ease(text: &str) -> f64 {
    let sentence_count = sentences(text).count().max(1);
    let words: Vec<&str> = raw_words(text).collect();
    let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();
    let word_count = words.len();

    let words_per_sentence = word_count as f64 / sentence_count as f64;
    let syllables_per_word = syllables as f64 / word_count.max(1) as f64;

    round_to(
        206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word,
        1,
    )
}

/// Readability of a single section; `None` when the section is blank.
pub fn section_flesch(text: &str) -> Option<f64> {
    if text.trim().is_empty() {
        None
    } else {
        Some(flesch_reading_ease(text))
    }
}

/// Per-section Flesch scores, each computed on that section's text alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionReadability {
    pub summary: Option<f64>,
    pub work: Option<f64>,
    pub education: Option<f64>,
    pub skills: Option<f64>,
}

pub fn section_readability(fields: &ResumeFields) -> SectionReadability {
    SectionReadability {
        summary: section_flesch(&fields.section_text(Section::Summary)),
        work: section_flesch(&fields.section_text(Section::WorkExperience)),
        education: section_flesch(&fields.section_text(Section::Education)),
        skills: section_flesch(&fields.section_text(Section::Skills)),
    }
}
