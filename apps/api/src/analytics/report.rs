//! Aggregator: composes every analyzer into one immutable `AnalysisResult`.
//!
//! Total over its input domain: empty resumes and empty job descriptions
//! produce the documented zero values, never an error. Identical inputs
//! always produce identical results.

use serde::{Deserialize, Serialize};

use crate::analytics::keywords::{analyze_keywords, KeywordFrequency};
use crate::analytics::lexical::{lexical_stats, most_common_words, WordFrequency};
use crate::analytics::readability::{flesch_reading_ease, section_readability, SectionReadability};
use crate::analytics::sections::{
    compute_completeness_report, section_analytics, CompletenessReport, SectionAnalytics,
};
use crate::analytics::spelling::check_spelling;
use crate::analytics::style::{
    bullet_stats, detect_cliches, passive_sentences, sentence_length_stats, BulletStats,
    SentenceLengthStats,
};
use crate::analytics::tokenize::whitespace_word_count;
use crate::analytics::{round_to, AnalysisOptions};
use crate::models::resume::ResumeFields;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    // Lexical
    pub word_count: usize,
    pub unique_word_count: usize,
    pub vocabulary_richness: f64,
    pub most_common_words: Vec<WordFrequency>,

    // Spelling
    pub spelling_error_count: usize,
    pub spelling_errors: Vec<String>,
    /// Leading errors for display, and whether the list goes on.
    pub spelling_sample: Vec<String>,
    pub spelling_truncated: bool,

    // Style
    pub passive_sentence_count: usize,
    pub passive_sentences: Vec<String>,
    pub sentence_stats: SentenceLengthStats,
    pub bullet_stats: BulletStats,
    pub cliches: Vec<String>,

    // Readability
    pub reading_time_minutes: f64,
    pub flesch: f64,
    pub section_readability: SectionReadability,

    // Structure
    pub completeness: CompletenessReport,
    pub section_analytics: Vec<SectionAnalytics>,

    // Job match
    pub keyword_coverage: u32,
    pub missing_keywords: Vec<String>,
    pub keyword_frequencies: Vec<KeywordFrequency>,
    pub suggestion: String,
}

/// Analyses a resume against a job description with default options.
pub fn analyze(fields: &ResumeFields, job_description: &str) -> AnalysisResult {
    analyze_with(fields, job_description, &AnalysisOptions::default())
}

/// `words / words_per_minute`, 2 decimals; 0 for a non-positive or non-finite rate.
pub fn reading_time_minutes(word_count: usize, words_per_minute: f64) -> f64 {
    if !words_per_minute.is_finite() || words_per_minute <= 0.0 {
        return 0.0;
    }
    round_to(word_count as f64 / words_per_minute, 2)
}

#[tracing::instrument(skip_all, fields(job_description_len = job_description.len()))]
pub fn analyze_with(
    fields: &ResumeFields,
    job_description: &str,
    options: &AnalysisOptions,
) -> AnalysisResult {
    let text = fields.combined_text();

    let word_count = whitespace_word_count(&text);
    let lexical = lexical_stats(&text);
    let spelling = check_spelling(&text);
    let (spelling_sample, spelling_truncated) = {
        let (sample, more) = spelling.sample(options.spelling_sample);
        (sample.to_vec(), more)
    };
    let passive = passive_sentences(&text);
    let keywords = analyze_keywords(job_description, &text, options.suggestion_keywords);

    let result = AnalysisResult {
        word_count,
        unique_word_count: lexical.unique_word_count,
        vocabulary_richness: lexical.vocabulary_richness,
        most_common_words: most_common_words(&text, options.top_words),

        spelling_error_count: spelling.error_count,
        spelling_errors: spelling.errors,
        spelling_sample,
        spelling_truncated,

        passive_sentence_count: passive.len(),
        passive_sentences: passive,
        sentence_stats: sentence_length_stats(&text),
        bullet_stats: bullet_stats(&text),
        cliches: detect_cliches(&text),

        reading_time_minutes: reading_time_minutes(word_count, options.words_per_minute),
        flesch: flesch_reading_ease(&text),
        section_readability: section_readability(fields),

        completeness: compute_completeness_report(fields),
        section_analytics: section_analytics(fields, &keywords.keywords),

        keyword_coverage: keywords.coverage_percent,
        missing_keywords: keywords.missing_keywords,
        keyword_frequencies: keywords.frequencies,
        suggestion: keywords.suggestion,
    };

    tracing::debug!(
        text_len = text.len(),
        word_count = result.word_count,
        spelling_errors = result.spelling_error_count,
        keyword_coverage = result.keyword_coverage,
        "resume analysed"
    );

    result
}
