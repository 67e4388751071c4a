use once_cell::sync::Lazy;
use regex::Regex;

use cvsift_schema::{Section, Sections};

/// Label used for the synthetic whole-document section when no header line
/// is detected anywhere in the text.
pub const BODY_LABEL: &str = "body";

/// Canonical section header phrases. A line is a section header iff,
/// ignoring surrounding whitespace, the whole line matches one of these
/// (case-insensitive). Kept as one alternation so the scan is a single
/// linear pass over the document.
static HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?im)^[ \t]*(education|experience|work history|employment|skills|projects|certifications|personal profile|summary|profile|achievements|awards|computer skills profile|technical skills profile|computer skills)[ \t]*$",
    )
    .unwrap()
});

/// A header match with its line span, used for segmentation and for the
/// span-reconstruction property test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HeaderSpan {
    pub start: usize,
    pub end: usize,
    pub label: String,
}

pub(crate) fn scan_headers(text: &str) -> Vec<HeaderSpan> {
    HEADER_RE
        .captures_iter(text)
        .map(|caps| {
            let whole = caps.get(0).unwrap();
            HeaderSpan {
                start: whole.start(),
                end: whole.end(),
                label: caps.get(1).unwrap().as_str().to_lowercase(),
            }
        })
        .collect()
}

/// Partition raw text into labeled sections.
///
/// Headers are found in document order; each section's body is the text
/// strictly between its header line and the next header (or end of
/// document). Sections never overlap. Text before the first header belongs
/// to no section. When no headers are detected at all, the entire text
/// becomes a single section under the generic [`BODY_LABEL`].
pub fn split_sections(text: &str) -> Sections {
    let headers = scan_headers(text);

    if headers.is_empty() {
        return Sections::new(vec![Section {
            label: BODY_LABEL.to_string(),
            body: text.trim().to_string(),
        }]);
    }

    let mut sections = Vec::with_capacity(headers.len());
    for (i, h) in headers.iter().enumerate() {
        let body_end = headers.get(i + 1).map_or(text.len(), |next| next.start);
        sections.push(Section {
            label: h.label.clone(),
            body: text[h.end..body_end].trim().to_string(),
        });
    }

    tracing::debug!(sections = sections.len(), "segmented document");
    Sections::new(sections)
}

/// Whether a (trimmed) line is a bare echo of a recognized section name.
/// Used by downstream parsers to skip header lines that leaked into a body
/// through imperfect segmentation.
pub fn is_section_echo(line: &str) -> bool {
    HEADER_RE.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_basic() {
        let text = "Jane Doe\n\nEducation\n2020 - BSc\n\nExperience\n2019 - 2021 - Engineer at Acme\n";
        let sections = split_sections(text);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections.find("education"), Some("2020 - BSc"));
        assert!(
            sections
                .find("experience")
                .unwrap()
                .contains("Engineer at Acme")
        );
    }

    #[test]
    fn test_split_no_headers_synthesizes_body() {
        let text = "just some text\nwith no headers\n";
        let sections = split_sections(text);
        assert_eq!(sections.len(), 1);
        assert_eq!(
            sections.find(BODY_LABEL),
            Some("just some text\nwith no headers")
        );
    }

    #[test]
    fn test_split_header_case_and_whitespace() {
        let text = "  WORK HISTORY  \nstuff\n";
        let sections = split_sections(text);
        assert_eq!(sections.find("work history"), Some("stuff"));
    }

    #[test]
    fn test_header_must_be_whole_line() {
        // "experience" inside a sentence is not a header
        let text = "I have experience with Rust\n";
        let sections = split_sections(text);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections.iter().next().unwrap().label, BODY_LABEL);
    }

    #[test]
    fn test_spans_non_overlapping_and_reconstruct() {
        let text = "preamble line\nEducation\n2020 - BSc\nSkills\nRust, Python\nAchievements\n- won stuff\n";
        let headers = scan_headers(text);
        assert_eq!(headers.len(), 3);

        // Pairwise non-overlapping and ordered
        for pair in headers.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }

        // Pre-header remainder + (header span + body span) per section
        // reconstructs the original text exactly
        let mut rebuilt = String::new();
        rebuilt.push_str(&text[..headers[0].start]);
        for (i, h) in headers.iter().enumerate() {
            let body_end = headers.get(i + 1).map_or(text.len(), |n| n.start);
            rebuilt.push_str(&text[h.start..h.end]);
            rebuilt.push_str(&text[h.end..body_end]);
        }
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_is_section_echo() {
        assert!(is_section_echo("Education"));
        assert!(is_section_echo("  awards "));
        assert!(!is_section_echo("2020 - BSc - Trinity"));
    }
}
