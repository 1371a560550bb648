//! Inline `**bold**` spans inside a paragraph line.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for the shortest `**...**` span
    static ref RE_BOLD: Regex = Regex::new(r"\*\*.*?\*\*").unwrap();
}

/// A piece of a paragraph line painted in a single font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Text without the `**` markers
    pub text: &'a str,
    /// True for text that was inside a `**` span
    pub bold: bool,
}

/// Split `line` into alternating regular and bold segments.
///
/// Returns `None` when the line contains no bold span. Empty pieces are dropped, so
/// `"**a** b"` yields two segments.
pub fn bold_segments(line: &str) -> Option<Vec<Segment<'_>>> {
    let mut segments = Vec::new();
    let mut last = 0;

    for m in RE_BOLD.find_iter(line) {
        if m.start() > last {
            segments.push(Segment {
                text: &line[last..m.start()],
                bold: false,
            });
        }
        segments.push(Segment {
            text: &line[m.start() + 2..m.end() - 2],
            bold: true,
        });
        last = m.end();
    }

    if segments.is_empty() {
        return None;
    }
    if last < line.len() {
        segments.push(Segment {
            text: &line[last..],
            bold: false,
        });
    }
    Some(segments)
}
