//! Whitespace normalization for generated markdown.
//!
//! Text nodes lose runs of spaces and runs of blank lines; every converted element is
//! trimmed and capped at one blank line in a row.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for 2+ consecutive spaces
    static ref RE_MULTI_SPACE: Regex = Regex::new(r" {2,}").unwrap();

    /// Regex for a blank-line run: newline, optional whitespace, newline
    static ref RE_BLANK_RUN: Regex = Regex::new(r"\n\s*\n").unwrap();

    /// Regex for normalizing 3+ consecutive newlines
    static ref RE_MULTI_NEWLINE: Regex = Regex::new(r"\n{3,}").unwrap();
}

/// Normalize the value of a text node.
///
/// Runs of spaces become one space and any blank-line run becomes exactly one blank
/// line. Leading and trailing whitespace is kept, so adjacent inline nodes still join
/// with a space.
///
/// # Examples
///
/// ```
/// use convo_pdf::converters::whitespace::normalize_text;
///
/// assert_eq!(normalize_text("a   b\n \n\n c"), "a b\n\n c");
/// ```
pub fn normalize_text(text: &str) -> String {
    let spaced = RE_MULTI_SPACE.replace_all(text, " ");
    RE_BLANK_RUN.replace_all(&spaced, "\n\n").into_owned()
}

/// Clean up the markdown produced for one element.
///
/// Trims the text and collapses 3+ consecutive newlines to a single blank line.
///
/// # Examples
///
/// ```
/// use convo_pdf::converters::whitespace::cleanup_markdown;
///
/// assert_eq!(cleanup_markdown("\n# Title\n\n\n\nBody\n\n"), "# Title\n\nBody");
/// ```
pub fn cleanup_markdown(text: &str) -> String {
    RE_MULTI_NEWLINE.replace_all(text.trim(), "\n\n").into_owned()
}
