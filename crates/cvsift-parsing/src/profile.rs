use once_cell::sync::Lazy;
use regex::Regex;

use cvsift_schema::Sections;

use crate::lines::strip_bullet;

/// Bare section-name echoes that end a profile body (defense against
/// imperfect segmentation leaking the next section in).
static PROFILE_STOP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(achievements?|awards?|work\s+history|experience|education|skills?)\s*$")
        .unwrap()
});

static ACHIEVEMENT_HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*(achievements?|awards?)\s*$").unwrap());

/// Profile text from the best-matching section.
///
/// Preference order: a "personal profile" section, then "summary", then any
/// label containing "profile". The body is truncated at the first bare
/// section-name echo; remaining non-blank lines are joined with newlines.
pub fn extract_profile(sections: &Sections) -> Option<String> {
    let body = sections.find_any(&["personal profile", "summary", "profile"])?;

    let mut out_lines = Vec::new();
    for line in body.lines() {
        if PROFILE_STOP_RE.is_match(line) {
            break;
        }
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            out_lines.push(trimmed);
        }
    }

    if out_lines.is_empty() {
        None
    } else {
        Some(out_lines.join("\n"))
    }
}

/// Parse an achievements/awards body into one string per achievement.
///
/// With no bullet-marked lines, every non-blank, non-header-echo line is
/// one achievement verbatim. With bullets, each bullet starts a new
/// achievement and unmarked continuation lines are appended to the current
/// one, whitespace-normalized and joined with single spaces.
pub fn parse_achievements(body: &str) -> Vec<String> {
    let cleaned: Vec<&str> = body
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !ACHIEVEMENT_HEADER_RE.is_match(l))
        .collect();

    if cleaned.is_empty() {
        return Vec::new();
    }

    let has_bullets = cleaned.iter().any(|l| strip_bullet(l).is_some());
    if !has_bullets {
        return cleaned.iter().map(|l| l.to_string()).collect();
    }

    let mut items: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    fn flush(items: &mut Vec<String>, current: &mut Vec<&str>) {
        if current.is_empty() {
            return;
        }
        let joined = current
            .iter()
            .flat_map(|part| part.split_whitespace())
            .collect::<Vec<_>>()
            .join(" ");
        if !joined.is_empty() {
            items.push(joined);
        }
        current.clear();
    }

    for line in cleaned {
        match strip_bullet(line) {
            Some(content) => {
                flush(&mut items, &mut current);
                current.push(content);
            }
            None => current.push(line),
        }
    }
    flush(&mut items, &mut current);

    items
}

/// Achievements from the achievements/awards section, if any.
pub fn extract_achievements(sections: &Sections) -> Vec<String> {
    sections
        .find_any(&["achievements", "awards"])
        .map(parse_achievements)
        .unwrap_or_default()
}

/// Trimmed skills-profile body verbatim, or absent when empty/missing.
pub fn extract_skills_profile(sections: &Sections) -> Option<String> {
    let body = sections.find_any(&[
        "computer skills profile",
        "technical skills profile",
        "computer skills",
    ])?;
    let trimmed = body.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvsift_schema::Section;

    fn sections(entries: &[(&str, &str)]) -> Sections {
        Sections::new(
            entries
                .iter()
                .map(|(label, body)| Section {
                    label: label.to_string(),
                    body: body.to_string(),
                })
                .collect(),
        )
    }

    #[test]
    fn test_profile_preference_order() {
        let s = sections(&[
            ("profile", "generic profile text"),
            ("summary", "summary text"),
            ("personal profile", "personal text"),
        ]);
        assert_eq!(extract_profile(&s).as_deref(), Some("personal text"));

        let s = sections(&[("profile", "generic"), ("summary", "summary text")]);
        assert_eq!(extract_profile(&s).as_deref(), Some("summary text"));
    }

    #[test]
    fn test_profile_truncates_at_section_echo() {
        let s = sections(&[(
            "personal profile",
            "Motivated engineer.\nLikes parsers.\nEducation\n2020 - BSc",
        )]);
        assert_eq!(
            extract_profile(&s).as_deref(),
            Some("Motivated engineer.\nLikes parsers.")
        );
    }

    #[test]
    fn test_profile_absent() {
        let s = sections(&[("skills", "Rust")]);
        assert_eq!(extract_profile(&s), None);
    }

    #[test]
    fn test_achievements_bullets_with_continuation() {
        let body = "- Won award X\n  continued\n- Spoke at conf";
        let items = parse_achievements(body);
        assert_eq!(items, vec!["Won award X continued", "Spoke at conf"]);
    }

    #[test]
    fn test_achievements_without_bullets_verbatim() {
        let body = "Awards\nEmployee of the month\nHackathon winner\n";
        let items = parse_achievements(body);
        assert_eq!(items, vec!["Employee of the month", "Hackathon winner"]);
    }

    #[test]
    fn test_achievements_whitespace_normalized() {
        let body = "- Won   award\n   with    spacing\n";
        let items = parse_achievements(body);
        assert_eq!(items, vec!["Won award with spacing"]);
    }

    #[test]
    fn test_skills_profile_verbatim_or_absent() {
        let s = sections(&[("computer skills profile", "  MS Office, Rust  ")]);
        assert_eq!(extract_skills_profile(&s).as_deref(), Some("MS Office, Rust"));

        let s = sections(&[("computer skills profile", "   ")]);
        assert_eq!(extract_skills_profile(&s), None);

        let s = sections(&[("education", "2020 - BSc")]);
        assert_eq!(extract_skills_profile(&s), None);
    }
}
