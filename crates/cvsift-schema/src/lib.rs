//! Shared domain record types for resume extraction.
//!
//! These are plain data carriers: all extraction logic lives in
//! `cvsift-parsing` and `cvsift-contact`. Every field that a heuristic may
//! fail to fill is an `Option` — absence is the error model, so none of
//! these types has a failure state of its own.

use serde::{Deserialize, Serialize};

/// A single education entry parsed from an education section line.
///
/// The education parser never emits a record without a graduation-year
/// token, but the field stays optional so partially-assembled records
/// deserialize cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationRecord {
    #[serde(default)]
    pub graduation_date: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub institution: Option<String>,
}

/// A single job entry parsed from a work-history section.
///
/// `start_date` and `end_date` are canonical "YYYY-MM" strings or the
/// literal "Present" for open-ended ranges. Description lines are kept in
/// document order with bullet markers already stripped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub description_lines: Vec<String>,
}

/// Contact and identity fields extracted from the raw text, independent of
/// section structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub phone_other: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
}

/// A labeled, contiguous span of the source document delimited by header
/// lines, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Lowercased header phrase as matched in the document (e.g.
    /// "work history", not a normalized canonical form).
    pub label: String,
    /// Trimmed body text between this header and the next.
    pub body: String,
}

/// Ordered, non-overlapping section mapping produced by the segmenter.
///
/// Lookup is by substring of the matched label rather than exact equality:
/// header phrasing varies ("Work History" vs "Experience"), so callers ask
/// for the phrase they care about and any label containing it matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sections(Vec<Section>);

impl Sections {
    pub fn new(sections: Vec<Section>) -> Self {
        Self(sections)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.0.iter()
    }

    /// Body of the first section whose label contains `needle`
    /// (case-insensitive on the needle; labels are already lowercased).
    pub fn find(&self, needle: &str) -> Option<&str> {
        let needle = needle.to_lowercase();
        self.0
            .iter()
            .find(|s| s.label.contains(&needle))
            .map(|s| s.body.as_str())
    }

    /// Body of the first section matching any of the candidate phrases,
    /// tried in the given preference order.
    pub fn find_any(&self, needles: &[&str]) -> Option<&str> {
        needles.iter().find_map(|n| self.find(n))
    }
}

/// Core pipeline output: everything the section parsers produce from one
/// document, before contact/skill enrichment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredResume {
    pub sections: Sections,
    #[serde(default)]
    pub education: Vec<EducationRecord>,
    #[serde(default)]
    pub experience: Vec<ExperienceRecord>,
    #[serde(default)]
    pub profile: Option<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub skills_profile: Option<String>,
}

/// The final assembled resume record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resume {
    pub candidate: Candidate,
    #[serde(default)]
    pub education: Vec<EducationRecord>,
    #[serde(default)]
    pub experience: Vec<ExperienceRecord>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub profile: Option<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub skills_profile: Option<String>,
    #[serde(default)]
    pub raw_text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_find_substring_match() {
        let sections = Sections::new(vec![
            Section {
                label: "work history".to_string(),
                body: "2019 - 2021 - Engineer at Acme".to_string(),
            },
            Section {
                label: "education".to_string(),
                body: "2020 - BSc".to_string(),
            },
        ]);
        // "history" is a substring of the matched label
        assert!(sections.find("history").is_some());
        assert!(sections.find("Work History").is_some());
        assert!(sections.find("employment").is_none());
    }

    #[test]
    fn test_sections_find_any_preference_order() {
        let sections = Sections::new(vec![
            Section {
                label: "profile".to_string(),
                body: "generic".to_string(),
            },
            Section {
                label: "personal profile".to_string(),
                body: "preferred".to_string(),
            },
        ]);
        // "personal profile" is tried first even though "profile" appears
        // earlier in document order
        assert_eq!(
            sections.find_any(&["personal profile", "profile"]),
            Some("preferred")
        );
    }

    #[test]
    fn test_resume_serializes_round_trip() {
        let resume = Resume {
            candidate: Candidate {
                name: Some("Jane Doe".to_string()),
                email: Some("jane@example.com".to_string()),
                ..Default::default()
            },
            education: vec![EducationRecord {
                graduation_date: Some("2020".to_string()),
                course: Some("BSc Computer Science".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };
        let json = serde_json::to_string(&resume).unwrap();
        let back: Resume = serde_json::from_str(&json).unwrap();
        assert_eq!(resume, back);
    }
}
