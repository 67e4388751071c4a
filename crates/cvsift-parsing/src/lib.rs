//! Heuristic section segmentation and record extraction for resume text.
//!
//! The pipeline is purely functional over an input string: segmentation
//! runs once, then the section parsers consume their bodies independently.
//! There is no fatal error path — every extraction returns absence (an
//! empty list or `None`) on failure to match, never an error.

pub mod dates;
pub mod education;
pub mod lines;
pub mod profile;
pub mod section;
pub mod work_history;

pub use dates::{PRESENT, normalize_date};
pub use education::parse_education_section;
pub use lines::{LineClass, classify_line};
pub use profile::{extract_achievements, extract_profile, extract_skills_profile, parse_achievements};
pub use section::split_sections;
pub use work_history::{parse_experience, parse_experience_section};
// Domain types (canonical definitions live in the schema crate)
pub use cvsift_schema::{EducationRecord, ExperienceRecord, Section, Sections, StructuredResume};

/// Run the full structured-extraction pipeline on raw resume text.
///
/// Segments the document, then parses education, work history, profile,
/// achievements, and skills-profile from the resulting sections. Work
/// history falls back to scanning the whole document when no
/// experience-like section was found. Deterministic: identical input text
/// yields identical output.
pub fn extract_structured(text: &str) -> StructuredResume {
    let sections = split_sections(text);
    extract_structured_with_sections(text, sections)
}

/// Pipeline variant for callers that already segmented the document (the
/// section mapping is part of the public output, so it can be reused).
pub fn extract_structured_with_sections(text: &str, sections: Sections) -> StructuredResume {
    let education = sections
        .find("education")
        .map(parse_education_section)
        .unwrap_or_default();
    let experience = parse_experience(&sections, text);
    let profile = extract_profile(&sections);
    let achievements = extract_achievements(&sections);
    let skills_profile = extract_skills_profile(&sections);

    StructuredResume {
        sections,
        education,
        experience,
        profile,
        achievements,
        skills_profile,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_empty_results() {
        let out = extract_structured("");
        assert!(out.education.is_empty());
        assert!(out.experience.is_empty());
        assert_eq!(out.profile, None);
        assert!(out.achievements.is_empty());
        assert_eq!(out.skills_profile, None);
    }

    #[test]
    fn test_no_sections_still_finds_experience_in_whole_text() {
        // No headers at all: a degenerate "body" section is synthesized,
        // education lookup comes back empty, and the work-history parser
        // scans the whole document
        let text = "2019 - 2021 - Software Engineer at Acme Corp\n- Built the thing\n";
        let out = extract_structured(text);
        assert!(out.education.is_empty());
        assert_eq!(out.experience.len(), 1);
        assert_eq!(out.experience[0].company.as_deref(), Some("Acme Corp"));
    }
}
