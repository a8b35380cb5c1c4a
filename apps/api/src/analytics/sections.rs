use serde::{Deserialize, Serialize};

use crate::analytics::keywords::{coverage_percent, missing_keywords};
use crate::analytics::readability::section_flesch;
use crate::analytics::tokenize::whitespace_word_count;
use crate::models::resume::{ResumeFields, Section};

/// Sections shorter than this are unlikely to survive ATS parsing intact.
const ATS_MIN_CHARS: usize = 100;

/// Layout words that tend to come from tables or images ATS tools cannot read.
const ATS_RISK_TERMS: &[&str] = &["table", "column", "image", "font"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionStatus {
    pub section: Section,
    pub name: String,
    pub filled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompletenessReport {
    pub completeness_percent: u32,
    pub sections: Vec<SectionStatus>,
    pub missing_sections: Vec<String>,
}

pub fn compute_completeness_report(fields: &ResumeFields) -> CompletenessReport {
    let sections: Vec<SectionStatus> = Section::ALL
        .iter()
        .map(|&section| SectionStatus {
            section,
            name: section.label().to_string(),
            filled: fields.has_section(section),
        })
        .collect();

    let filled = sections.iter().filter(|s| s.filled).count();
    let completeness_percent = (filled as f64 / sections.len() as f64 * 100.0).round() as u32;
    let missing_sections = sections
        .iter()
        .filter(|s| !s.filled)
        .map(|s| s.name.clone())
        .collect();

    CompletenessReport {
        completeness_percent,
        sections,
        missing_sections,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AtsCompatibility {
    High,
    Low,
}

pub fn ats_compatibility(text: &str) -> AtsCompatibility {
    let lower = text.to_lowercase();
    if ATS_RISK_TERMS.iter().any(|term| lower.contains(term)) {
        return AtsCompatibility::Low;
    }
    if text.chars().count() < ATS_MIN_CHARS {
        return AtsCompatibility::Low;
    }
    AtsCompatibility::High
}

/// Size, keyword reach and readability of one section on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionAnalytics {
    pub section: Section,
    pub name: String,
    pub word_count: usize,
    pub char_count: usize,
    pub keyword_coverage: u32,
    /// Flesch score rounded to a whole number; absent for a blank section.
    pub readability: Option<i64>,
    pub ats: AtsCompatibility,
}

pub fn section_analytics(fields: &ResumeFields, keywords: &[String]) -> Vec<SectionAnalytics> {
    fields
        .section_texts()
        .into_iter()
        .map(|(section, text)| {
            let missing = missing_keywords(keywords, &text);
            SectionAnalytics {
                section,
                name: section.label().to_string(),
                word_count: whitespace_word_count(&text),
                char_count: text.chars().count(),
                keyword_coverage: coverage_percent(keywords.len(), missing.len()),
                readability: section_flesch(&text).map(|score| score.round() as i64),
                ats: ats_compatibility(&text),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::EducationEntry;

    fn partial_resume() -> ResumeFields {
        ResumeFields {
            summary: "Platform engineer focused on reliability.".to_string(),
            skill_names: vec!["Rust".to_string(), "Kubernetes".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_resume_is_zero_percent_complete() {
        let report = compute_completeness_report(&ResumeFields::default());
        assert_eq!(report.completeness_percent, 0);
        assert_eq!(report.sections.len(), 4);
        assert_eq!(report.missing_sections.len(), 4);
    }

    #[test]
    fn test_half_complete_resume() {
        let report = compute_completeness_report(&partial_resume());
        assert_eq!(report.completeness_percent, 50);
        assert_eq!(report.missing_sections, vec!["Work Experience", "Education"]);
    }

    #[test]
    fn test_full_resume_is_complete() {
        let mut fields = partial_resume();
        fields.work_experience_descriptions.push("Ran on-call.".to_string());
        fields
            .education_entries
            .push(EducationEntry::new("BSc", "CS", "ETH"));
        let report = compute_completeness_report(&fields);
        assert_eq!(report.completeness_percent, 100);
        assert!(report.missing_sections.is_empty());
    }

    #[test]
    fn test_three_of_four_rounds() {
        let mut fields = partial_resume();
        fields.work_experience_descriptions.push(String::new());
        assert_eq!(compute_completeness_report(&fields).completeness_percent, 75);
    }

    #[test]
    fn test_ats_low_for_short_text() {
        assert_eq!(ats_compatibility("Rust Go"), AtsCompatibility::Low);
    }

    #[test]
    fn test_ats_low_for_layout_terms() {
        let text = "Built a reporting Table component ".repeat(5);
        assert_eq!(ats_compatibility(&text), AtsCompatibility::Low);
    }

    #[test]
    fn test_ats_high_for_long_plain_text() {
        let text = "Designed and operated event pipelines for billing. ".repeat(3);
        assert_eq!(ats_compatibility(&text), AtsCompatibility::High);
    }

    #[test]
    fn test_section_analytics_per_section() {
        let keywords = vec!["rust".to_string(), "reliability".to_string()];
        let rows = section_analytics(&partial_resume(), &keywords);

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].name, "Summary");
        assert_eq!(rows[0].word_count, 5);
        assert_eq!(rows[0].keyword_coverage, 50);
        assert!(rows[0].readability.is_some());

        assert_eq!(rows[1].word_count, 0);
        assert_eq!(rows[1].readability, None);
        assert_eq!(rows[1].keyword_coverage, 0);

        assert_eq!(rows[3].keyword_coverage, 50);
        assert_eq!(rows[3].char_count, "Rust Kubernetes".len());
    }

    #[test]
    fn test_section_analytics_without_keywords() {
        let rows = section_analytics(&partial_resume(), &[]);
        assert!(rows.iter().all(|r| r.keyword_coverage == 0));
    }
}
