//! Approximate text metrics.
//!
//! Every glyph is assumed to be half an em wide and lines are 120% of the font size.
//! Good enough for wrapping readable text without parsing font programs.

/// Average glyph advance as a fraction of the font size.
pub const AVERAGE_CHAR_WIDTH: f64 = 0.5;

/// Line height as a multiple of the font size.
pub const LINE_HEIGHT_FACTOR: f64 = 1.2;

/// Measured extent of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    /// Advance width in points
    pub width: f64,
    /// Line height in points
    pub height: f64,
}

/// Measure `text` at `font_size`.
pub fn measure(text: &str, font_size: f64) -> TextMetrics {
    TextMetrics {
        width: text_width(text, font_size),
        height: line_height(font_size),
    }
}

/// Width of `text` in points.
pub fn text_width(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * font_size * AVERAGE_CHAR_WIDTH
}

/// Height of one line at `font_size`.
pub fn line_height(font_size: f64) -> f64 {
    font_size * LINE_HEIGHT_FACTOR
}
