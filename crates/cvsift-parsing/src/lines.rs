use once_cell::sync::Lazy;
use regex::Regex;

/// Stateless per-line classification shared by the section parsers.
///
/// Classification depends only on the line's own text — parser state never
/// feeds back into it. Entry-header detection for work history is a
/// separate predicate in `work_history` because it needs the date-range
/// patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    Blank,
    /// Decorative run of bullet/dash/dot characters with no content.
    Separator,
    /// Bullet- or number-marked list item.
    Bullet,
    Text,
}

/// Decorative separator: a run of two or more bullet/dash/dot glyphs
/// (optionally space-separated) and nothing else.
static SEPARATOR_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(?:[•\-\u{2013}\u{2014}·.]\s*){2,}$").unwrap());

/// Bullet marker: one or more bullet glyphs, dashes, or asterisks, or a
/// numbered-list marker ("1." / "1)"), followed by whitespace and content.
static BULLET_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:[\u{2022}\u{2023}\u{25E6}*\-\u{2013}\u{2014}]+|\d{1,2}[.)])\s+(\S.*?)\s*$")
        .unwrap()
});

pub fn classify_line(line: &str) -> LineClass {
    if line.trim().is_empty() {
        LineClass::Blank
    } else if SEPARATOR_LINE_RE.is_match(line) {
        LineClass::Separator
    } else if BULLET_RE.is_match(line) {
        LineClass::Bullet
    } else {
        LineClass::Text
    }
}

/// Content of a bullet line with its marker stripped, or `None` if the
/// line carries no bullet marker.
pub fn strip_bullet(line: &str) -> Option<&str> {
    BULLET_RE
        .captures(line)
        .map(|caps| caps.get(1).unwrap().as_str())
}

pub fn is_separator_line(line: &str) -> bool {
    SEPARATOR_LINE_RE.is_match(line)
}
