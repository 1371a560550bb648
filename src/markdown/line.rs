//! Classification of a single prose line.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for horizontal rules (`---`, `-----`)
    static ref RE_RULE: Regex = Regex::new(r"^---+$").unwrap();

    /// Regex for unordered list items (`* item`, `- item`, `+ item`)
    static ref RE_BULLET: Regex = Regex::new(r"^\s*([*\-+])\s+(.*)").unwrap();

    /// Regex for ordered list items (`1. item`)
    static ref RE_NUMBERED: Regex = Regex::new(r"^\s*(\d+)\.\s+(.*)").unwrap();
}

/// Opening or closing code fence marker.
pub const FENCE: &str = "```";

/// What a prose line is, first match wins in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `#`-prefixed heading
    Heading {
        /// Number of leading `#`
        level: usize,
        /// Heading text, trimmed
        text: &'a str,
    },
    /// Horizontal rule
    Rule,
    /// `>`-prefixed quote, with the marker removed and trimmed
    Quote(&'a str),
    /// Unordered list item text
    Bullet(&'a str),
    /// Ordered list item
    Numbered {
        /// Item number as written
        number: &'a str,
        /// Item text
        text: &'a str,
    },
    /// Any other line with visible content (untrimmed)
    Paragraph(&'a str),
    /// Empty or whitespace-only line
    Blank,
}

/// If `line` is a code fence, return the info string after the backticks.
pub fn fence_info(line: &str) -> Option<&str> {
    line.strip_prefix(FENCE).map(str::trim)
}

/// Classify a line outside of a code block.
pub fn classify(line: &str) -> LineKind<'_> {
    if line.starts_with('#') {
        let level = line.chars().take_while(|c| *c == '#').count();
        return LineKind::Heading {
            level,
            text: line[level..].trim(),
        };
    }
    if RE_RULE.is_match(line) {
        return LineKind::Rule;
    }
    if let Some(rest) = line.strip_prefix('>') {
        return LineKind::Quote(rest.trim());
    }
    if let Some(caps) = RE_BULLET.captures(line) {
        let text = caps.get(2).map_or("", |m| m.as_str());
        return LineKind::Bullet(text);
    }
    if let Some(caps) = RE_NUMBERED.captures(line) {
        let number = caps.get(1).map_or("", |m| m.as_str());
        let text = caps.get(2).map_or("", |m| m.as_str());
        return LineKind::Numbered { number, text };
    }
    if line.trim().is_empty() {
        LineKind::Blank
    } else {
        LineKind::Paragraph(line)
    }
}
