//! Keyword gap analysis: which job-description terms the resume never mentions.
//!
//! Pure and local: no LLM, no network. Works the same whether or not an
//! AI suggestion service is configured elsewhere.
//!
//! Algorithm:
//! 1. Tokenize the job description, drop keyword stopwords and tokens shorter
//!    than three characters, dedupe in first-seen order.
//! 2. A keyword is present when it occurs as a substring of the lowercase
//!    resume text; otherwise it is missing.
//! 3. coverage = round(100 × present / total), 0 when there are no keywords.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::analytics::lexicon::is_keyword_stopword;
use crate::analytics::tokenize::words;

/// Shorter tokens are dropped, which also loses terms like "go" and "ai".
const MIN_KEYWORD_LEN: usize = 3;

/// How many missing keywords the suggestion sentence names by default.
pub const DEFAULT_SUGGESTION_KEYWORDS: usize = 5;

/// Whole-word occurrences of one job-description keyword in the resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordFrequency {
    pub keyword: String,
    pub count: usize,
}

/// Full keyword gap report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordReport {
    /// Candidate keywords, deduplicated, in job-description order.
    pub keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub coverage_percent: u32, // 0 – 100
    pub suggestion: String,
    /// One row per candidate keyword, present or missing.
    pub frequencies: Vec<KeywordFrequency>,
}

/// Significant terms from a job description.
pub fn extract_keywords(job_description: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    words(job_description)
        .filter(|w| w.chars().count() >= MIN_KEYWORD_LEN && !is_keyword_stopword(w))
        .filter(|w| seen.insert(w.clone()))
        .collect()
}

/// Keywords not found (case-insensitive substring) in the resume text.
pub fn missing_keywords(keywords: &[String], resume_text: &str) -> Vec<String> {
    let resume_lower = resume_text.to_lowercase();
    keywords
        .iter()
        .filter(|k| !resume_lower.contains(k.as_str()))
        .cloned()
        .collect()
}

/// round(100 × present / total); 0 when there is nothing to cover.
pub fn coverage_percent(total: usize, missing: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let present = total.saturating_sub(missing);
    (present as f64 / total as f64 * 100.0).round() as u32
}

/// Whole-word occurrence counts for each keyword.
///
/// Keywords are single `\w+` tokens, so a whole-word match is exactly a token
/// equal to the keyword.
pub fn keyword_frequencies(keywords: &[String], text: &str) -> Vec<KeywordFrequency> {
    let mut token_counts: HashMap<String, usize> = HashMap::new();
    for token in words(text) {
        *token_counts.entry(token).or_insert(0) += 1;
    }

    keywords
        .iter()
        .map(|k| KeywordFrequency {
            keyword: k.clone(),
            count: token_counts.get(k).copied().unwrap_or(0),
        })
        .collect()
}

/// Builds the human-readable suggestion sentence.
///
/// Nothing missing reads as complete coverage, even when the job description
/// had no keywords at all.
pub fn build_suggestion(missing: &[String], limit: usize) -> String {
    if missing.is_empty() {
        return "Your resume covers most keywords from the job description!".to_string();
    }
    let named: Vec<&str> = missing.iter().take(limit).map(String::as_str).collect();
    format!(
        "Consider adding these keywords to your resume: {}",
        named.join(", ")
    )
}

/// Runs the full gap analysis of `resume_text` against `job_description`.
pub fn analyze_keywords(
    job_description: &str,
    resume_text: &str,
    suggestion_limit: usize,
) -> KeywordReport {
    let keywords = extract_keywords(job_description);
    let missing = missing_keywords(&keywords, resume_text);
    let coverage = coverage_percent(keywords.len(), missing.len());
    let suggestion = build_suggestion(&missing, suggestion_limit);
    let frequencies = keyword_frequencies(&keywords, resume_text);

    KeywordReport {
        keywords,
        missing_keywords: missing,
        coverage_percent: coverage,
        suggestion,
        frequencies,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JD: &str = "Looking for a Python developer with AWS experience";

    #[test]
    fn test_extract_keywords_drops_stopwords_and_short_tokens() {
        let keywords = extract_keywords(JD);
        assert_eq!(
            keywords,
            vec!["looking", "python", "developer", "aws", "experience"]
        );
    }

    #[test]
    fn test_extract_keywords_dedupes_case_insensitively() {
        let keywords = extract_keywords("Rust, rust and RUST. Kafka!");
        assert_eq!(keywords, vec!["rust", "kafka"]);
    }

    #[test]
    fn test_python_present_aws_missing() {
        let report = analyze_keywords(
            JD,
            "Senior Python developer looking for new challenges with deep experience",
            DEFAULT_SUGGESTION_KEYWORDS,
        );
        assert!(report.missing_keywords.contains(&"aws".to_string()));
        assert!(!report.missing_keywords.contains(&"python".to_string()));
        assert!(report.coverage_percent < 100);
        assert_eq!(report.coverage_percent, 80);
    }

    #[test]
    fn test_presence_is_substring_based() {
        // "developers" contains "developer"
        let missing = missing_keywords(&["developer".to_string()], "Managed DEVELOPERS");
        assert!(missing.is_empty());
    }

    #[test]
    fn test_empty_job_description_covers_nothing() {
        let report = analyze_keywords("", "Python developer", DEFAULT_SUGGESTION_KEYWORDS);
        assert!(report.keywords.is_empty());
        assert!(report.missing_keywords.is_empty());
        assert_eq!(report.coverage_percent, 0);
        assert_eq!(
            report.suggestion,
            "Your resume covers most keywords from the job description!"
        );
    }

    #[test]
    fn test_stopword_only_job_description_has_zero_coverage() {
        let report = analyze_keywords("and the of with you", "anything", 5);
        assert_eq!(report.coverage_percent, 0);
        assert!(report.frequencies.is_empty());
    }

    #[test]
    fn test_full_coverage_is_one_hundred() {
        let report = analyze_keywords("Kubernetes Terraform", "terraform and kubernetes daily", 5);
        assert!(report.missing_keywords.is_empty());
        assert_eq!(report.coverage_percent, 100);
        assert!(report.suggestion.contains("covers most keywords"));
    }

    #[test]
    fn test_coverage_bounded() {
        assert_eq!(coverage_percent(0, 0), 0);
        assert_eq!(coverage_percent(3, 0), 100);
        assert_eq!(coverage_percent(3, 3), 0);
        assert_eq!(coverage_percent(3, 1), 67);
        assert_eq!(coverage_percent(2, 5), 0);
    }

    #[test]
    fn test_suggestion_names_first_five_missing() {
        let missing: Vec<String> = ["aaa", "bbb", "ccc", "ddd", "eee", "fff"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let suggestion = build_suggestion(&missing, 5);
        assert_eq!(
            suggestion,
            "Consider adding these keywords to your resume: aaa, bbb, ccc, ddd, eee"
        );
        assert!(!suggestion.contains("fff"));
    }

    #[test]
    fn test_frequencies_count_whole_words_only() {
        let keywords = vec!["java".to_string(), "sql".to_string(), "go_lang".to_string()];
        let freq = keyword_frequencies(&keywords, "Java, JavaScript and java. No SQL here: sql.");
        assert_eq!(
            freq,
            vec![
                KeywordFrequency {
                    keyword: "java".into(),
                    count: 2,
                },
                KeywordFrequency {
                    keyword: "sql".into(),
                    count: 2,
                },
                KeywordFrequency {
                    keyword: "go_lang".into(),
                    count: 0,
                },
            ]
        );
    }

    #[test]
    fn test_frequencies_cover_present_and_missing_keywords() {
        let report = analyze_keywords(JD, "python python", 5);
        assert_eq!(report.frequencies.len(), report.keywords.len());
        assert_eq!(report.frequencies[1].keyword, "python");
        assert_eq!(report.frequencies[1].count, 2);
    }
}
