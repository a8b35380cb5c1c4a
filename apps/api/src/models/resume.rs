use serde::{Deserialize, Serialize};

use crate::models::lenient;

// ────────────────────────────────────────────────────────────────────────────
// Resume document as stored by the builder (camelCase JSON)
// ────────────────────────────────────────────────────────────────────────────

/// A full resume record as the data store ships it.
///
/// Every field defaults when absent, `null` or of the wrong type; the
/// analytics core treats missing content as empty and performs no schema
/// validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    #[serde(deserialize_with = "lenient::or_default")]
    pub personal_info: PersonalInfo,
    #[serde(deserialize_with = "lenient::vec_skip_invalid")]
    pub work_experience: Vec<WorkExperience>,
    #[serde(deserialize_with = "lenient::vec_skip_invalid")]
    pub education: Vec<Education>,
    #[serde(deserialize_with = "lenient::vec_skip_invalid")]
    pub skill_categories: Vec<SkillCategory>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    #[serde(deserialize_with = "lenient::or_default")]
    pub first_name: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub last_name: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub email: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub phone: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub address: Option<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub linkedin: Option<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkExperience {
    #[serde(deserialize_with = "lenient::or_default")]
    pub id: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub title: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub company: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub start_date: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub end_date: Option<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub current: bool,
    #[serde(deserialize_with = "lenient::or_default")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    #[serde(deserialize_with = "lenient::or_default")]
    pub id: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub degree: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub field: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub institution: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub start_year: Option<i32>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub end_year: Option<i32>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub gpa: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillCategory {
    #[serde(deserialize_with = "lenient::or_default")]
    pub id: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub name: String,
    #[serde(deserialize_with = "lenient::vec_skip_invalid")]
    pub skills: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Analysis input
// ────────────────────────────────────────────────────────────────────────────

/// The degree/field/institution triple the analyzer reads from an education entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub degree: String,
    pub field: String,
    pub institution: String,
}

impl EducationEntry {
    pub fn new(degree: &str, field: &str, institution: &str) -> Self {
        EducationEntry {
            degree: degree.to_string(),
            field: field.to_string(),
            institution: institution.to_string(),
        }
    }

    /// "degree field institution", the form used for readability and keyword matching.
    pub fn as_text(&self) -> String {
        format!("{} {} {}", self.degree, self.field, self.institution)
    }
}

/// The four logical resume sections analysed independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Summary,
    WorkExperience,
    Education,
    Skills,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Summary,
        Section::WorkExperience,
        Section::Education,
        Section::Skills,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Summary => "Summary",
            Section::WorkExperience => "Work Experience",
            Section::Education => "Education",
            Section::Skills => "Skills",
        }
    }
}

/// Everything the analytics core reads from a resume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeFields {
    pub summary: String,
    pub work_experience_descriptions: Vec<String>,
    pub education_entries: Vec<EducationEntry>,
    pub skill_names: Vec<String>,
}

impl ResumeFields {
    /// All analysable content joined by single spaces, skipping empty parts.
    pub fn combined_text(&self) -> String {
        let education: Vec<String> = self
            .education_entries
            .iter()
            .map(EducationEntry::as_text)
            .collect();

        std::iter::once(self.summary.as_str())
            .chain(self.work_experience_descriptions.iter().map(String::as_str))
            .chain(education.iter().map(String::as_str))
            .chain(self.skill_names.iter().map(String::as_str))
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Text of a single section, on its own.
    pub fn section_text(&self, section: Section) -> String {
        match section {
            Section::Summary => self.summary.clone(),
            Section::WorkExperience => self.work_experience_descriptions.join(" "),
            Section::Education => self
                .education_entries
                .iter()
                .map(EducationEntry::as_text)
                .collect::<Vec<_>>()
                .join(" "),
            Section::Skills => self.skill_names.join(" "),
        }
    }

    pub fn section_texts(&self) -> Vec<(Section, String)> {
        Section::ALL
            .iter()
            .map(|&section| (section, self.section_text(section)))
            .collect()
    }

    /// Whether the section counts as filled in for completeness.
    pub fn has_section(&self, section: Section) -> bool {
        match section {
            Section::Summary => !self.summary.trim().is_empty(),
            Section::WorkExperience => !self.work_experience_descriptions.is_empty(),
            Section::Education => !self.education_entries.is_empty(),
            Section::Skills => !self.skill_names.is_empty(),
        }
    }

    /// Total characters across every field; used to bound request size.
    pub fn char_len(&self) -> usize {
        self.summary.chars().count()
            + self
                .work_experience_descriptions
                .iter()
                .map(|d| d.chars().count())
                .sum::<usize>()
            + self
                .education_entries
                .iter()
                .map(|e| e.as_text().chars().count())
                .sum::<usize>()
            + self
                .skill_names
                .iter()
                .map(|s| s.chars().count())
                .sum::<usize>()
    }
}

impl From<&ResumeData> for ResumeFields {
    fn from(data: &ResumeData) -> Self {
        ResumeFields {
            summary: data.personal_info.summary.clone().unwrap_or_default(),
            // One entry per job, even when the description is blank: presence
            // of the job is what completeness counts.
            work_experience_descriptions: data
                .work_experience
                .iter()
                .map(|w| w.description.clone().unwrap_or_default())
                .collect(),
            education_entries: data
                .education
                .iter()
                .map(|e| EducationEntry::new(&e.degree, &e.field, &e.institution))
                .collect(),
            skill_names: data
                .skill_categories
                .iter()
                .flat_map(|c| c.skills.iter().cloned())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fields() -> ResumeFields {
        ResumeFields {
            summary: "Backend engineer.".to_string(),
            work_experience_descriptions: vec![
                "Built APIs.".to_string(),
                String::new(),
                "Led migrations.".to_string(),
            ],
            education_entries: vec![EducationEntry::new("BSc", "Physics", "MIT")],
            skill_names: vec!["Rust".to_string(), "SQL".to_string()],
        }
    }

    #[test]
    fn test_combined_text_skips_empty_parts() {
        let text = sample_fields().combined_text();
        assert_eq!(
            text,
            "Backend engineer. Built APIs. Led migrations. BSc Physics MIT Rust SQL"
        );
    }

    #[test]
    fn test_combined_text_of_empty_resume_is_empty() {
        assert_eq!(ResumeFields::default().combined_text(), "");
    }

    #[test]
    fn test_section_text_joins_entries() {
        let fields = sample_fields();
        assert_eq!(fields.section_text(Section::Education), "BSc Physics MIT");
        assert_eq!(fields.section_text(Section::Skills), "Rust SQL");
        assert_eq!(
            fields.section_text(Section::WorkExperience),
            "Built APIs.  Led migrations."
        );
    }

    #[test]
    fn test_whitespace_summary_is_not_filled() {
        let fields = ResumeFields {
            summary: "   ".to_string(),
            ..Default::default()
        };
        assert!(!fields.has_section(Section::Summary));
    }

    #[test]
    fn test_from_resume_data_flattens_skill_categories() {
        let json = r#"{
            "personalInfo": {"firstName": "Ada", "summary": "Engineer"},
            "workExperience": [{"id": "1", "title": "Dev", "company": "Acme"}],
            "education": [{"id": "e", "degree": "BSc", "field": "CS", "institution": "UCL"}],
            "skillCategories": [
                {"id": "a", "name": "Lang", "skills": ["Rust", "Go"]},
                {"id": "b", "name": "Empty", "skills": []},
                {"id": "c", "name": "Cloud", "skills": ["AWS"]}
            ]
        }"#;
        let data: ResumeData = serde_json::from_str(json).unwrap();
        let fields = ResumeFields::from(&data);

        assert_eq!(fields.summary, "Engineer");
        assert_eq!(fields.work_experience_descriptions, vec![String::new()]);
        assert_eq!(fields.education_entries[0].as_text(), "BSc CS UCL");
        assert_eq!(fields.skill_names, vec!["Rust", "Go", "AWS"]);
    }

    #[test]
    fn test_resume_data_tolerates_missing_fields() {
        let data: ResumeData = serde_json::from_str("{}").unwrap();
        assert_eq!(data, ResumeData::default());
        assert_eq!(ResumeFields::from(&data), ResumeFields::default());
    }

    #[test]
    fn test_resume_data_treats_null_as_empty() {
        let json = r#"{
            "personalInfo": {"summary": null, "firstName": null},
            "workExperience": null,
            "education": null,
            "skillCategories": [{"id": "a", "name": null, "skills": null}]
        }"#;
        let data: ResumeData = serde_json::from_str(json).unwrap();
        let fields = ResumeFields::from(&data);

        assert_eq!(data.personal_info, PersonalInfo::default());
        assert!(data.work_experience.is_empty());
        assert_eq!(data.skill_categories.len(), 1);
        assert_eq!(fields, ResumeFields::default());
    }

    #[test]
    fn test_resume_data_tolerates_mismatched_types() {
        let json = r#"{
            "personalInfo": "Ada Lovelace",
            "workExperience": [null, {"title": "Dev", "current": "yes", "description": "Built APIs."}],
            "education": [{"degree": "BSc", "startYear": "2019", "gpa": "3.9"}],
            "skillCategories": [{"skills": ["Rust", 42, null, "SQL"]}]
        }"#;
        let data: ResumeData = serde_json::from_str(json).unwrap();
        let fields = ResumeFields::from(&data);

        assert_eq!(data.personal_info, PersonalInfo::default());
        assert_eq!(data.work_experience.len(), 1);
        assert!(!data.work_experience[0].current);
        assert_eq!(data.education[0].degree, "BSc");
        assert_eq!(data.education[0].start_year, None);
        assert_eq!(data.education[0].gpa, None);
        assert_eq!(fields.work_experience_descriptions, vec!["Built APIs."]);
        assert_eq!(fields.skill_names, vec!["Rust", "SQL"]);
    }
}
