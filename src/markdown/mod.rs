//! Markdown line renderer.
//!
//! Paints a markdown string onto a [`DrawTarget`] one line at a time. Block structure is
//! limited to what a chat transcript needs: fenced code, headings, rules, quotes, list
//! items and paragraphs with `**bold**` spans. Everything else is painted as plain text.
//!
//! ```
//! use convo_pdf::layout::{Document, LayoutOptions};
//!
//! let mut doc = Document::new(LayoutOptions::default());
//! doc.render_markdown_block("# Notes\n\n* first\n* second");
//! assert_eq!(doc.pages()[0].runs().len(), 3);
//! ```

mod inline;
mod line;

pub use inline::{bold_segments, Segment};
pub use line::{classify, fence_info, LineKind};

use crate::layout::{metrics, Color, Document, FontFamily};

/// Body text size.
pub const BODY_SIZE: f64 = 11.0;
/// Fenced code size.
pub const CODE_SIZE: f64 = 10.0;

/// The drawing surface the renderer paints on.
///
/// [`Document`] is the production target; tests substitute a recorder.
pub trait DrawTarget {
    /// Select the font family for subsequent text.
    fn set_font(&mut self, family: FontFamily);
    /// Set the font size for subsequent text.
    fn set_font_size(&mut self, size: f64);
    /// Set the fill color for subsequent text.
    fn set_fill_color(&mut self, color: Color);
    /// Paint wrapped text and advance past it.
    fn text(&mut self, content: &str);
    /// Advance by a number of line pitches.
    fn move_down(&mut self, lines: f64);
    /// Place one run at `x` on the current line.
    fn place_run(&mut self, text: &str, x: f64);
    /// Advance by `dy` points.
    fn advance(&mut self, dy: f64);
    /// Page margin.
    fn margin(&self) -> f64;
    /// Page width.
    fn page_width(&self) -> f64;
    /// Extra space between lines.
    fn line_gap(&self) -> f64;
}

impl DrawTarget for Document {
    fn set_font(&mut self, family: FontFamily) {
        Document::set_font(self, family);
    }

    fn set_font_size(&mut self, size: f64) {
        Document::set_font_size(self, size);
    }

    fn set_fill_color(&mut self, color: Color) {
        Document::set_fill_color(self, color);
    }

    fn text(&mut self, content: &str) {
        Document::text(self, content);
    }

    fn move_down(&mut self, lines: f64) {
        Document::move_down(self, lines);
    }

    fn place_run(&mut self, text: &str, x: f64) {
        Document::place_run(self, text, x);
    }

    fn advance(&mut self, dy: f64) {
        Document::advance(self, dy);
    }

    fn margin(&self) -> f64 {
        Document::margin(self)
    }

    fn page_width(&self) -> f64 {
        Document::page_width(self)
    }

    fn line_gap(&self) -> f64 {
        Document::line_gap(self)
    }
}

/// Whether the renderer is inside a fenced code block.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FenceState {
    Prose,
    Code { language: String },
}

fn code_color() -> Color {
    Color::rgb8(0x33, 0x33, 0x33)
}

fn quote_color() -> Color {
    Color::rgb8(0x55, 0x55, 0x55)
}

/// Render `markdown` onto `target`.
///
/// The style register is left as the last line set it.
pub fn render<T: DrawTarget + ?Sized>(target: &mut T, markdown: &str) {
    let mut state = FenceState::Prose;

    for line in markdown.trim().split('\n') {
        if let Some(info) = fence_info(line) {
            state = match state {
                FenceState::Prose => {
                    log::trace!("Entering code block (language {:?})", info);
                    FenceState::Code {
                        language: info.to_string(),
                    }
                },
                FenceState::Code { language } => {
                    log::trace!("Leaving code block (language {:?})", language);
                    FenceState::Prose
                },
            };
            target.move_down(0.5);
            continue;
        }

        if let FenceState::Code { .. } = state {
            target.set_font(FontFamily::Mono);
            target.set_font_size(CODE_SIZE);
            target.set_fill_color(code_color());
            target.text(line);
            continue;
        }

        target.set_font(FontFamily::Regular);
        target.set_font_size(BODY_SIZE);
        target.set_fill_color(Color::black());
        render_prose_line(target, line);
    }
}

fn render_prose_line<T: DrawTarget + ?Sized>(target: &mut T, line: &str) {
    match classify(line) {
        LineKind::Heading { level, text } => {
            let size = (18.0 - 2.0 * level as f64).max(BODY_SIZE);
            target.set_font(FontFamily::Bold);
            target.set_font_size(size);
            target.text(text);
            target.move_down(if level <= 2 { 0.8 } else { 0.5 });
        },
        LineKind::Rule => {
            target.move_down(0.5);
            target.move_down(1.0);
        },
        LineKind::Quote(text) => {
            target.set_fill_color(quote_color());
            target.text(text);
            target.set_fill_color(Color::black());
        },
        LineKind::Bullet(text) => target.text(&format!("• {}", text)),
        LineKind::Numbered { number, text } => target.text(&format!("{}. {}", number, text)),
        LineKind::Paragraph(text) => match bold_segments(text) {
            Some(segments) => render_segments(target, &segments),
            None => target.text(text.trim()),
        },
        LineKind::Blank => target.move_down(0.5),
    }
}

/// Place segments left to right at body size, wrapping on segment boundaries.
fn render_segments<T: DrawTarget + ?Sized>(target: &mut T, segments: &[Segment<'_>]) {
    let margin = target.margin();
    let right = target.page_width() - margin;
    let mut x = margin;
    let mut line_height: f64 = 0.0;

    for segment in segments {
        let family = if segment.bold {
            FontFamily::Bold
        } else {
            FontFamily::Regular
        };
        target.set_font(family);
        target.set_font_size(BODY_SIZE);
        if segment.text.is_empty() {
            continue;
        }

        let m = metrics::measure(segment.text, BODY_SIZE);
        line_height = line_height.max(m.height);
        if x + m.width > right {
            target.move_down(1.0);
            x = margin;
        }
        target.place_run(segment.text, x);
        x += m.width;
    }

    let gap = target.line_gap();
    target.advance(line_height + gap);
}

/// Split a message body into blocks separated by blank lines.
///
/// Blank lines inside a fenced code block do not split it. Whitespace-only blocks are
/// dropped.
pub fn split_blocks(markdown: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut in_fence = false;

    for line in markdown.split('\n') {
        if fence_info(line).is_some() {
            in_fence = !in_fence;
        } else if !in_fence && line.trim().is_empty() {
            push_block(&mut blocks, &mut current);
            continue;
        }
        current.push(line);
    }
    push_block(&mut blocks, &mut current);

    blocks
}

fn push_block(blocks: &mut Vec<String>, lines: &mut Vec<&str>) {
    let block = lines.join("\n");
    lines.clear();
    if !block.trim().is_empty() {
        blocks.push(block);
    }
}
