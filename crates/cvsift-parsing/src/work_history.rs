use once_cell::sync::Lazy;
use regex::Regex;

use cvsift_schema::{ExperienceRecord, Sections};

use crate::dates::normalize_date;
use crate::lines::{LineClass, classify_line, is_separator_line, strip_bullet};

const MONTHS: &str = r"(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|jun(?:e)?|jul(?:y)?|aug(?:ust)?|sep(?:t\.?|tember)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)";
const NUM_MONTH: &str = r"(?:1[0-2]|0?[1-9])";
const DASH: &str = r"[-\u{2013}\u{2014}]";

fn date_token() -> String {
    format!(r"(?:{MONTHS}\s+\d{{4}}|\d{{4}}/{NUM_MONTH}|{NUM_MONTH}/\d{{4}}|\d{{4}})")
}

/// Two date tokens joined by a dash or "to"; the end token may be an
/// open-ended marker.
static DATE_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    let token = date_token();
    Regex::new(&format!(
        r"(?i)(?P<start>{token})\s*(?:{DASH}|to)\s*(?P<end>{token}|present|current|now)"
    ))
    .unwrap()
});

static YEAR_AT_START_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\d{4}\b").unwrap());

/// Header-style separator between title and company parts.
static HEADER_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"(?i)\s*(?:{DASH}|\sat\s|\s@\s)\s*")).unwrap());

/// " at X" / " @ X" clause; text after is the company candidate.
static AT_CLAUSE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\s(?:at|@)\s(.+)$").unwrap());

/// Dash boundary usable for a title/company split (dash must be
/// whitespace-surrounded, so hyphenated words stay intact).
static DASH_BOUNDARY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"\s{DASH}\s")).unwrap());

/// Words that make a free-text fragment read like a job title. Substring
/// containment on the lowercased fragment, as coarse as that is: a company
/// name that happens to contain one of these ("Lead Systems Ltd") is a
/// known false positive of this heuristic.
const LIKELY_TITLE_TOKENS: &[&str] = &[
    "engineer",
    "developer",
    "programmer",
    "lead",
    "senior",
    "principal",
    "architect",
    "manager",
    "consultant",
    "intern",
    "analyst",
    "administrator",
    "director",
    "specialist",
    "freelance",
];

fn looks_like_title(s: &str) -> bool {
    let low = s.to_lowercase();
    LIKELY_TITLE_TOKENS.iter().any(|tok| low.contains(tok))
}

/// Whether a line starts a new job entry: it contains a recognizable date
/// range, or starts with a bare year and also carries a header-style
/// separator. Blank and decorative lines are never headers.
pub fn looks_like_entry_header(line: &str) -> bool {
    if line.trim().is_empty() || is_separator_line(line) {
        return false;
    }
    if DATE_RANGE_RE.is_match(line) {
        return true;
    }
    YEAR_AT_START_RE.is_match(line) && HEADER_SPLIT_RE.is_match(line)
}

fn strip_edges(s: &str) -> &str {
    s.trim_matches([' ', '-', '\u{2013}', '\u{2014}'])
}

/// Derive (title, company) from a header line.
///
/// The leading date range is stripped first. An " at "/" @ " clause wins
/// over dash splitting; in both cases, a company candidate that itself
/// reads like a job title means the clause was part of the title (e.g.
/// "Engineer at Scale"), so the whole header stays an unsplit title.
fn split_header(header: &str) -> (Option<String>, Option<String>) {
    let mut s = header.trim();

    if let Some(m) = DATE_RANGE_RE.find(s)
        && m.start() == 0
    {
        s = &s[m.end()..];
    }
    let s = strip_edges(s);

    if let Some(caps) = AT_CLAUSE_RE.captures(s) {
        let clause = caps.get(0).unwrap();
        let title = strip_edges(&s[..clause.start()]);
        let company = strip_edges(caps.get(1).unwrap().as_str());
        if !company.is_empty() && looks_like_title(company) {
            return (non_empty(s), None);
        }
        return (non_empty(title), non_empty(company));
    }

    let parts: Vec<&str> = DASH_BOUNDARY_RE.split(s).collect();
    if let Some((last, init)) = parts.split_last()
        && !init.is_empty()
    {
        let company = strip_edges(last);
        if !company.is_empty() && looks_like_title(company) {
            return (non_empty(s), None);
        }
        let joined = init.join(" - ");
        return (non_empty(strip_edges(&joined)), non_empty(company));
    }

    (non_empty(s), None)
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

fn start_entry(header: &str) -> ExperienceRecord {
    let (start_date, end_date) = match DATE_RANGE_RE.captures(header) {
        Some(caps) => (
            caps.name("start").and_then(|m| normalize_date(m.as_str())),
            caps.name("end").and_then(|m| normalize_date(m.as_str())),
        ),
        None => (None, None),
    };
    let (title, company) = split_header(header);
    ExperienceRecord {
        title,
        company,
        start_date,
        end_date,
        description_lines: Vec::new(),
    }
}

fn finalize(mut entry: ExperienceRecord) -> ExperienceRecord {
    while entry.description_lines.last().is_some_and(|l| l.is_empty()) {
        entry.description_lines.pop();
    }
    entry
}

/// Scanner state: looking for the next entry header, or collecting
/// description lines into the current entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    SeekingHeader,
    Collecting,
}

/// Run the header/description state machine over a section body.
///
/// An entry is created the moment a header line is recognized and mutated
/// only while its description is being collected; the next header (or end
/// of input) finalizes it. Non-header lines seen while seeking belong to
/// no entry and are skipped. No recognizable header anywhere yields an
/// empty list — a valid outcome for tabular layouts, not an error.
pub fn parse_experience_section(text: &str) -> Vec<ExperienceRecord> {
    let mut items = Vec::new();
    let mut state = ScanState::SeekingHeader;
    let mut current: Option<ExperienceRecord> = None;

    for raw in text.lines() {
        let line = raw.trim();

        if looks_like_entry_header(line) {
            if let Some(entry) = current.take() {
                items.push(finalize(entry));
            }
            current = Some(start_entry(line));
            state = ScanState::Collecting;
            continue;
        }

        if state == ScanState::SeekingHeader {
            continue;
        }
        let Some(entry) = current.as_mut() else {
            continue;
        };

        match classify_line(line) {
            LineClass::Blank => {
                // Consecutive blanks collapse to one separator within the
                // description
                if entry
                    .description_lines
                    .last()
                    .is_some_and(|l| !l.is_empty())
                {
                    entry.description_lines.push(String::new());
                }
            }
            LineClass::Bullet => {
                if let Some(content) = strip_bullet(line) {
                    entry.description_lines.push(content.trim().to_string());
                }
            }
            LineClass::Separator | LineClass::Text => {
                entry.description_lines.push(line.to_string());
            }
        }
    }

    if let Some(entry) = current.take() {
        items.push(finalize(entry));
    }

    tracing::debug!(entries = items.len(), "parsed work history");
    items
}

/// Parse work history from the best-matching section, falling back to the
/// whole document when no experience-like section was segmented.
pub fn parse_experience(sections: &Sections, raw_text: &str) -> Vec<ExperienceRecord> {
    match sections.find_any(&["experience", "work history", "employment"]) {
        Some(body) => parse_experience_section(body),
        None => parse_experience_section(raw_text),
    }
}
