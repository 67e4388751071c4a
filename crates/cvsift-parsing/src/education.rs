use once_cell::sync::Lazy;
use regex::Regex;

use cvsift_schema::EducationRecord;

/// Leading year range "YYYY - YYYY" / "YYYY/YYYY" / "YYYY to YYYY"; the END
/// year is the graduation year.
static YEAR_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(\d{4})\s*(?:[-\u{2013}\u{2014}]|/|to)\s*(\d{4})\b").unwrap()
});

static YEAR_AT_START_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(\d{4})\b").unwrap());

/// Dash-separated segment boundary (hyphen or en/em dash, optional
/// surrounding whitespace).
static SEGMENT_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*[-\u{2013}\u{2014}]\s*").unwrap());

/// Degree/grade vocabulary: a segment containing one of these reads as a
/// result (qualification outcome) rather than an institution name.
static RESULT_HINT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?ix)\b(
            (bsc|ba|msc|ma|phd|b\.?eng|m\.?eng|b\.?tech|m\.?tech)   # degrees
            |honours?|hons|first\s+class|second\s+class|2\.?1|2\.?2|distinction|merit|gpa
            |major\s+award|certificate|cert|diploma|higher\s+diploma|hnd|scqf
        )\b",
    )
    .unwrap()
});

/// Institution vocabulary: overrides the result classification when a
/// segment mentions both (e.g. "University Diploma Centre").
static INSTITUTION_HINT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(univ|university|college|institute|institut|school|centre|center|polytechnic|academy|dit|it)\b",
    )
    .unwrap()
});

/// Lines inside an education body that are echoes of section names (header
/// leakage); they never carry a record.
static ECHO_PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(education|achievements|awards|work\s+history|experience)\b").unwrap()
});

pub fn is_result_hint(segment: &str) -> bool {
    RESULT_HINT_RE.is_match(segment)
}

pub fn is_institution_hint(segment: &str) -> bool {
    INSTITUTION_HINT_RE.is_match(segment)
}

/// Role assigned to a dash-separated segment after the course segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentRole {
    Result,
    Institution,
}

/// Disambiguate a lone trailing segment: it is a result iff it matches the
/// result-hint vocabulary AND does not match the institution-hint
/// vocabulary; otherwise it is the institution.
pub fn classify_lone_segment(segment: &str) -> SegmentRole {
    if is_result_hint(segment) && !is_institution_hint(segment) {
        SegmentRole::Result
    } else {
        SegmentRole::Institution
    }
}

/// Extract a leading graduation year from a line. A year range keeps the
/// end year. Returns the year and the remaining text with the matched
/// prefix (and any joining dashes) stripped.
fn extract_leading_year(line: &str) -> Option<(String, &str)> {
    if let Some(caps) = YEAR_RANGE_RE.captures(line) {
        let year = caps.get(2).unwrap().as_str().to_string();
        let rest = line[caps.get(0).unwrap().end()..]
            .trim_start_matches([' ', '-', '\u{2013}', '\u{2014}']);
        return Some((year, rest));
    }
    if let Some(caps) = YEAR_AT_START_RE.captures(line) {
        let year = caps.get(1).unwrap().as_str().to_string();
        let rest = line[caps.get(0).unwrap().end()..]
            .trim_start_matches([' ', '-', '\u{2013}', '\u{2014}']);
        return Some((year, rest));
    }
    None
}

fn classify_segments(segments: Vec<&str>) -> (Option<String>, Option<String>, Option<String>) {
    let parts: Vec<&str> = segments
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    let Some((course, tail)) = parts.split_first() else {
        return (None, None, None);
    };
    let course = Some(course.to_string());

    match tail {
        [] => (course, None, None),
        [only] => match classify_lone_segment(only) {
            SegmentRole::Result => (course, Some(only.to_string()), None),
            SegmentRole::Institution => (course, None, Some(only.to_string())),
        },
        _ => {
            // First result-hint segment (left to right) is the result; all
            // other trailing segments are rejoined as the institution.
            let result_idx = tail.iter().position(|s| is_result_hint(s));
            match result_idx {
                Some(idx) => {
                    let result = Some(tail[idx].to_string());
                    let inst_parts: Vec<&str> = tail
                        .iter()
                        .enumerate()
                        .filter(|(i, _)| *i != idx)
                        .map(|(_, s)| *s)
                        .collect();
                    let institution = if inst_parts.is_empty() {
                        None
                    } else {
                        Some(inst_parts.join(" - "))
                    };
                    (course, result, institution)
                }
                None => (course, None, Some(tail.join(" - "))),
            }
        }
    }
}

/// Parse an education-section body into ordered records.
///
/// A graduation year is mandatory: lines without a leading year (or year
/// range) are dropped silently, as are blank lines and section-name echoes.
pub fn parse_education_section(section_text: &str) -> Vec<EducationRecord> {
    let mut records = Vec::new();

    for raw in section_text.lines() {
        let line = raw.trim();
        if line.is_empty() || ECHO_PREFIX_RE.is_match(line) {
            continue;
        }

        let Some((year, rest)) = extract_leading_year(line) else {
            continue;
        };

        let segments: Vec<&str> = SEGMENT_SPLIT_RE.split(rest).collect();
        let (course, result, institution) = classify_segments(segments);

        records.push(EducationRecord {
            graduation_date: Some(year),
            course,
            result,
            institution,
        });
    }

    tracing::debug!(records = records.len(), "parsed education section");
    records
}
