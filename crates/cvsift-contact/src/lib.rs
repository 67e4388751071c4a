//! Contact/identity extraction and fuzzy skill matching.
//!
//! Operates on the raw document text independently of section structure.
//! Everything here is infallible: failure to match is `None` or an empty
//! list, never an error.

use once_cell::sync::Lazy;
use regex::Regex;

mod skills;

pub use skills::{DEFAULT_VOCAB, match_skills};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}").unwrap());

static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)https?://\S+|www\.\S+").unwrap());

static PUNCT_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-\u{2013}\u{2014}•·]+$").unwrap());

/// Phone-like run: optional +, then digits with common separators, bounded
/// so matching stays linear. Digit-count validation happens after the
/// match (7–15 digits, the practical subscriber-number range).
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+?\d[\d\s().\-]{5,17}\d").unwrap());

static GITHUB_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:https?://|www\.)?github\.com/[A-Za-z0-9_.\-]+(?:/[^\s)]*)?").unwrap()
});

static LINKEDIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:https?://|www\.)?linkedin\.com/(?:in|pub|profile)/[A-Za-z0-9._%+\-/]+")
        .unwrap()
});

static LINKEDIN_ANY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:https?://|www\.)?linkedin\.com/\S+").unwrap());

/// First email address in the text, if any.
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

fn normalize_phone(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for (i, ch) in raw.chars().enumerate() {
        if ch.is_ascii_digit() || (i == 0 && ch == '+') {
            out.push(ch);
        }
    }
    out
}

/// All distinct phone-like numbers in the text, `+`-international matches
/// first. Without a phone-metadata library this is a digit-run heuristic:
/// a candidate counts as a phone when it carries 7–15 digits.
pub fn extract_phones(text: &str) -> Vec<String> {
    let mut international = Vec::new();
    let mut national = Vec::new();

    for m in PHONE_RE.find_iter(text) {
        let normalized = normalize_phone(m.as_str());
        let digits = normalized.chars().filter(char::is_ascii_digit).count();
        if !(7..=15).contains(&digits) {
            continue;
        }
        let bucket = if normalized.starts_with('+') {
            &mut international
        } else {
            &mut national
        };
        if !bucket.contains(&normalized) {
            bucket.push(normalized);
        }
    }

    let national: Vec<String> = national
        .into_iter()
        .filter(|n| {
            // A national form that is a suffix of an international match is
            // the same number seen twice
            !international.iter().any(|i| i.ends_with(n.as_str()))
        })
        .collect();
    international.extend(national);
    international
}

/// Guess the candidate's name from the contact block (first lines of the
/// document): the first line of 2–4 word-like tokens that carries no
/// digits, email, or URL.
pub fn guess_name(text: &str) -> Option<String> {
    for line in text.lines().take(10) {
        let line = URL_RE.replace_all(line, "");
        let line = line.trim();
        if line.is_empty() || PUNCT_LINE_RE.is_match(line) {
            continue;
        }
        if EMAIL_RE.is_match(line) || line.chars().any(|c| c.is_ascii_digit()) {
            continue;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if (2..=4).contains(&tokens.len())
            && tokens
                .iter()
                .all(|t| t.chars().all(|c| c.is_alphabetic() || c == '.' || c == '-'))
        {
            return Some(line.to_string());
        }
    }
    None
}

fn clean_url(url: &str) -> String {
    let url = url.trim().trim_end_matches([')', ']', ';', ',', '.']);
    if url.to_lowercase().starts_with("www.") {
        format!("https://{url}")
    } else {
        url.to_string()
    }
}

/// First GitHub profile/repository URL in the text.
pub fn extract_github_url(text: &str) -> Option<String> {
    GITHUB_RE.find(text).map(|m| clean_url(m.as_str()))
}

/// First LinkedIn profile URL in the text. Prefers canonical profile paths
/// (`/in/`, `/pub/`, `/profile/`) but falls back to any linkedin.com link.
pub fn extract_linkedin_url(text: &str) -> Option<String> {
    if let Some(m) = LINKEDIN_RE.find(text) {
        return Some(clean_url(m.as_str()));
    }
    LINKEDIN_ANY_RE.find(text).map(|m| clean_url(m.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_email() {
        assert_eq!(
            extract_email("Contact: jane.doe+cv@example.co.uk, phone below").as_deref(),
            Some("jane.doe+cv@example.co.uk")
        );
        assert_eq!(extract_email("no email here"), None);
    }

    #[test]
    fn test_extract_phones_international_first() {
        let text = "Mobile: +353 87 123 4567\nHome: (01) 234 5678";
        let phones = extract_phones(text);
        assert_eq!(phones[0], "+353871234567");
        assert!(phones.contains(&"012345678".to_string()));
    }

    #[test]
    fn test_phone_digit_bounds() {
        // Too few digits to be a phone
        assert!(extract_phones("room 12-345").is_empty());
        // A zip-like 5-digit run is ignored
        assert!(extract_phones("Dublin 12345").is_empty());
    }

    #[test]
    fn test_phone_dedup_national_suffix() {
        let text = "+353 87 123 4567 or 87 123 4567";
        let phones = extract_phones(text);
        assert_eq!(phones, vec!["+353871234567"]);
    }

    #[test]
    fn test_guess_name_from_contact_block() {
        let text = "----\nJane Doe\njane@example.com\n+353 87 123 4567\n";
        assert_eq!(guess_name(text).as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_guess_name_skips_noise_lines() {
        let text = "jane@example.com\n42 Some Street\nMary-Anne O. Connor\n";
        assert_eq!(guess_name(text).as_deref(), Some("Mary-Anne O. Connor"));
    }

    #[test]
    fn test_guess_name_absent() {
        assert_eq!(guess_name("a b c d e f too many tokens\n123\n"), None);
    }

    #[test]
    fn test_github_url() {
        assert_eq!(
            extract_github_url("code at github.com/janedoe).").as_deref(),
            Some("github.com/janedoe")
        );
        assert_eq!(
            extract_github_url("see www.github.com/janedoe/project,").as_deref(),
            Some("https://www.github.com/janedoe/project")
        );
        assert_eq!(extract_github_url("no links"), None);
    }

    #[test]
    fn test_linkedin_url_prefers_profile_paths() {
        let text = "https://linkedin.com/company/acme and https://www.linkedin.com/in/jane-doe";
        assert_eq!(
            extract_linkedin_url(text).as_deref(),
            Some("https://www.linkedin.com/in/jane-doe")
        );
        assert_eq!(
            extract_linkedin_url("linkedin.com/company/acme").as_deref(),
            Some("linkedin.com/company/acme")
        );
    }
}
