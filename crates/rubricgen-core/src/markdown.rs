//! Markdown section and bullet extraction
//!
//! Only ATX headings (`#` through `######`) delimit sections. Everything else
//! is treated as plain body text.

use regex::Regex;
use std::sync::OnceLock;

/// Marker that opens a bullet line
pub const BULLET_MARKER: &str = "- ";

static HEADING_RE: OnceLock<Regex> = OnceLock::new();

fn heading_re() -> &'static Regex {
    HEADING_RE.get_or_init(|| {
        Regex::new(r"^(#{1,6})\s+(.+?)\s*$").expect("Invalid heading regex pattern")
    })
}

/// Split text into lines on every line boundary, with `\r\n` counted once.
///
/// Boundaries are `\n`, `\r`, vertical tab, form feed, the ASCII file, group
/// and record separators, NEL, and the Unicode line and paragraph separators.
/// A trailing boundary does not produce an empty final line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !is_line_boundary(c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' && chars.next_if(|&(_, next)| next == '\n').is_some() {
            start += 1;
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// A parsed heading line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading<'a> {
    pub level: usize,
    pub title: &'a str,
}

/// Parse a line as a heading, ignoring surrounding whitespace
pub fn parse_heading(line: &str) -> Option<Heading<'_>> {
    let caps = heading_re().captures(line.trim())?;
    let level = caps.get(1)?.as_str().len();
    let title = caps.get(2)?.as_str().trim();
    Some(Heading { level, title })
}

/// Return the body lines of the first section titled `section_name`.
///
/// Title comparison is case-insensitive. The body stops at the next heading
/// whose level is equal to or shallower than the section's own. Heading lines
/// are never part of the body. A missing section yields an empty body.
pub fn extract_section_lines(markdown: &str, section_name: &str) -> Vec<String> {
    let wanted = section_name.trim().to_lowercase();
    let mut section_level: Option<usize> = None;
    let mut out = Vec::new();

    for line in split_lines(markdown) {
        if let Some(heading) = parse_heading(line) {
            match section_level {
                Some(level) if heading.level <= level => break,
                Some(_) => {}
                None if heading.title.to_lowercase() == wanted => {
                    section_level = Some(heading.level);
                }
                None => {}
            }
            continue;
        }
        if section_level.is_some() {
            out.push(line.trim_end().to_string());
        }
    }

    out
}

/// Collect `- ` bullet texts from `lines`, skipping everything else
pub fn extract_bullets<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines
        .iter()
        .filter_map(|line| line.as_ref().trim().strip_prefix(BULLET_MARKER))
        .map(|text| text.trim().to_string())
        .collect()
}
