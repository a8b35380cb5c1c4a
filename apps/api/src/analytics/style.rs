//! Writing-style heuristics: passive voice, bullet usage, clichés, sentence length.
//!
//! Each heuristic is a small pure function so its false positives and
//! negatives can be pinned by tests.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analytics::lexicon::CLICHES;
use crate::analytics::round_to;
use crate::analytics::tokenize::{lines, sentences, whitespace_word_count};

/// A form of "to be" followed by a word ending in "ed". Irregular
/// participles ("was written") are missed and any "-ed" word after the
/// auxiliary ("is red") is caught.
static PASSIVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(was|were|is|are|been|being)\b\s+\w+ed\b").expect("valid passive regex")
});

static BULLET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*[-*•]").expect("valid bullet regex"));

// ────────────────────────────────────────────────────────────────────────────
// Passive voice
// ────────────────────────────────────────────────────────────────────────────

pub fn is_passive(sentence: &str) -> bool {
    PASSIVE_RE.is_match(sentence)
}

/// Sentences flagged as passive, trimmed.
pub fn passive_sentences(text: &str) -> Vec<String> {
    sentences(text)
        .filter(|s| is_passive(s))
        .map(|s| s.trim().to_string())
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Bullet points
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulletStats {
    pub bullet_count: usize,
    pub total_lines: usize,
    pub percent_bullets: u32,
}

pub fn is_bullet_line(line: &str) -> bool {
    BULLET_RE.is_match(line)
}

pub fn bullet_stats(text: &str) -> BulletStats {
    let all_lines = lines(text);
    let bullet_count = all_lines.iter().filter(|l| is_bullet_line(l)).count();
    let total_lines = all_lines.len();

    let percent_bullets = if total_lines == 0 {
        0
    } else {
        (bullet_count as f64 / total_lines as f64 * 100.0).round() as u32
    };

    BulletStats {
        bullet_count,
        total_lines,
        percent_bullets,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Clichés
// ────────────────────────────────────────────────────────────────────────────

/// Listed clichés found anywhere in the text, case-insensitively, in list
/// order. Matching is by substring, so "dynamic" also hits "dynamically".
pub fn detect_cliches(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    CLICHES
        .iter()
        .filter(|&&phrase| lower.contains(phrase))
        .map(|phrase| phrase.to_string())
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Sentence length
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentenceLengthStats {
    pub min: usize,
    pub max: usize,
    /// Mean words per sentence, 1 decimal.
    pub avg: f64,
    /// Words per sentence, in text order.
    pub distribution: Vec<usize>,
}

pub fn sentence_length_stats(text: &str) -> SentenceLengthStats {
    let distribution: Vec<usize> = sentences(text).map(whitespace_word_count).collect();

    let (Some(&min), Some(&max)) = (distribution.iter().min(), distribution.iter().max()) else {
        return SentenceLengthStats::default();
    };
    let total: usize = distribution.iter().sum();
    let avg = round_to(total as f64 / distribution.len() as f64, 1);

    SentenceLengthStats {
        min,
        max,
        avg,
        distribution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passive_clean_positive() {
        let found = passive_sentences("The report was completed.");
        assert_eq!(found, vec!["The report was completed."]);
    }

    #[test]
    fn test_passive_all_auxiliaries() {
        for aux in ["was", "were", "is", "are", "been", "being"] {
            let sentence = format!("It {aux} reviewed.");
            assert!(is_passive(&sentence), "{sentence:?} should be passive");
        }
    }

    #[test]
    fn test_passive_is_case_insensitive() {
        assert!(is_passive("WAS DEPLOYED"));
    }

    #[test]
    fn test_active_sentence_not_flagged() {
        assert!(!is_passive("I completed the report."));
        assert!(!is_passive("The team shipped weekly."));
    }

    #[test]
    fn test_irregular_participle_is_missed() {
        // known false negative: "given" does not end in "ed"
        assert!(!is_passive("I was given the task."));
    }

    #[test]
    fn test_adjective_ending_in_ed_is_flagged() {
        // known false positive: "red" is not a participle
        assert!(is_passive("The button is red."));
    }

    #[test]
    fn test_auxiliary_must_be_a_whole_word() {
        assert!(!is_passive("This wasted time."));
    }

    #[test]
    fn test_passive_only_in_terminated_sentences() {
        let found = passive_sentences("Built the API. The API was tested. Docs were updated");
        assert_eq!(found, vec!["The API was tested."]);
    }

    #[test]
    fn test_bullet_ratio_three_of_ten() {
        let text = "- one\n* two\n  • three\nfour\nfive\nsix\nseven\neight\nnine\nten";
        let stats = bullet_stats(text);
        assert_eq!(stats.bullet_count, 3);
        assert_eq!(stats.total_lines, 10);
        assert_eq!(stats.percent_bullets, 30);
    }

    #[test]
    fn test_bullet_stats_empty_text() {
        assert_eq!(bullet_stats(""), BulletStats::default());
    }

    #[test]
    fn test_bullet_marker_must_lead_the_line() {
        assert!(!is_bullet_line("cost - benefit"));
        assert!(is_bullet_line("\t-indented"));
    }

    #[test]
    fn test_bullet_percent_rounds() {
        let stats = bullet_stats("- a\nb\nc");
        assert_eq!(stats.percent_bullets, 33);
        let stats = bullet_stats("- a\n- b\nc");
        assert_eq!(stats.percent_bullets, 67);
    }

    #[test]
    fn test_cliches_detected_case_insensitively() {
        let found = detect_cliches("A Results-Driven TEAM PLAYER with great synergy.");
        assert_eq!(found, vec!["team player", "results-driven", "synergy"]);
    }

    #[test]
    fn test_cliche_substring_match() {
        assert_eq!(detect_cliches("Dynamically scaled services"), vec!["dynamic"]);
    }

    #[test]
    fn test_cliche_reported_once() {
        assert_eq!(detect_cliches("synergy synergy synergy").len(), 1);
    }

    #[test]
    fn test_no_cliches() {
        assert!(detect_cliches("Reduced build times by 40%.").is_empty());
        assert!(detect_cliches("").is_empty());
    }

    #[test]
    fn test_sentence_length_stats() {
        let stats = sentence_length_stats("One two three. Four five! Six seven eight nine?");
        assert_eq!(stats.distribution, vec![3, 2, 4]);
        assert_eq!(stats.min, 2);
        assert_eq!(stats.max, 4);
        assert_eq!(stats.avg, 3.0);
    }

    #[test]
    fn test_sentence_length_average_rounds_to_one_decimal() {
        let stats = sentence_length_stats("a b. c d. e f g.");
        assert_eq!(stats.avg, 2.3);
    }

    #[test]
    fn test_sentence_length_stats_without_sentences() {
        assert_eq!(sentence_length_stats("no terminator"), SentenceLengthStats::default());
        assert_eq!(sentence_length_stats(""), SentenceLengthStats::default());
    }
}
