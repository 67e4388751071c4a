use once_cell::sync::Lazy;
use regex::Regex;

/// Marker for open-ended date ranges ("present", "current", "now").
pub const PRESENT: &str = "Present";

static MONTH_YEAR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i)(jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|jun(?:e)?|jul(?:y)?|aug(?:ust)?|sep(?:t\.?|tember)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?\s+(\d{4})$").unwrap()
});

static YEAR_SLASH_MONTH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{4})/(\d{1,2})$").unwrap());

static MONTH_SLASH_YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{1,2})/(\d{4})$").unwrap());

static BARE_YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{4})$").unwrap());

static CANONICAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-(?:0[1-9]|1[0-2])$").unwrap());

fn month_number(name: &str) -> Option<u32> {
    let key: String = name.to_lowercase().chars().take(3).collect();
    let n = match key.as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(n)
}

/// Normalize a free-form date token to a canonical "YYYY-MM" string, or the
/// literal [`PRESENT`] for open-ended tokens.
///
/// Accepted shapes: month-name + year ("March 2019", "Sep 2019"),
/// "YYYY/MM", "MM/YYYY", a bare "YYYY" (month defaults to January), an
/// already-canonical "YYYY-MM" (returned unchanged), and
/// present/current/now in any case. Anything else is `None`: only tokens
/// carrying an explicit 4-digit year are interpreted, so abbreviated
/// formats are never guessed into future dates.
///
/// Pure and total — never panics, never errors.
pub fn normalize_date(token: &str) -> Option<String> {
    let token = token.trim().replace(['\u{2013}', '\u{2014}'], "-");
    if token.is_empty() {
        return None;
    }

    if token.eq_ignore_ascii_case("present")
        || token.eq_ignore_ascii_case("current")
        || token.eq_ignore_ascii_case("now")
    {
        return Some(PRESENT.to_string());
    }

    if CANONICAL_RE.is_match(&token) {
        return Some(token);
    }

    if let Some(caps) = MONTH_YEAR_RE.captures(&token) {
        let month = month_number(caps.get(1).unwrap().as_str())?;
        let year = caps.get(2).unwrap().as_str();
        return Some(format!("{year}-{month:02}"));
    }

    if let Some(caps) = YEAR_SLASH_MONTH_RE.captures(&token) {
        let year = caps.get(1).unwrap().as_str();
        let month: u32 = caps.get(2).unwrap().as_str().parse().ok()?;
        if (1..=12).contains(&month) {
            return Some(format!("{year}-{month:02}"));
        }
        return None;
    }

    if let Some(caps) = MONTH_SLASH_YEAR_RE.captures(&token) {
        let month: u32 = caps.get(1).unwrap().as_str().parse().ok()?;
        let year = caps.get(2).unwrap().as_str();
        if (1..=12).contains(&month) {
            return Some(format!("{year}-{month:02}"));
        }
        return None;
    }

    if let Some(caps) = BARE_YEAR_RE.captures(&token) {
        // Year-only tokens default to the first month of that year
        return Some(format!("{}-01", caps.get(1).unwrap().as_str()));
    }

    None
}
