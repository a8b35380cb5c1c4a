// Local resume analytics engine.
// Pure functions over resume text and a job description: lexical stats,
// spelling, style heuristics, readability, keyword gaps, and the aggregate.
// No I/O and no network; handlers.rs is the only HTTP-aware file.

pub mod handlers;
pub mod keywords;
pub mod lexical;
pub mod lexicon;
pub mod readability;
pub mod report;
pub mod sections;
pub mod spelling;
pub mod style;
pub mod tokenize;

use serde::{Deserialize, Serialize};

// Re-export the public API consumed by handlers and library callers.
pub use keywords::{analyze_keywords, KeywordReport};
pub use report::{analyze, analyze_with, AnalysisResult};

/// Tunables for a single analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Length of the most-common-words list.
    pub top_words: usize,
    pub words_per_minute: f64,
    /// Missing keywords named in the suggestion sentence.
    pub suggestion_keywords: usize,
    /// Spelling errors shown before the list is elided.
    pub spelling_sample: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            top_words: 5,
            words_per_minute: 200.0,
            suggestion_keywords: keywords::DEFAULT_SUGGESTION_KEYWORDS,
            spelling_sample: 5,
        }
    }
}

/// Rounds half away from zero to `decimals` places.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
