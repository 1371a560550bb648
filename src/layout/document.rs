//! The layout session: pages, cursor and the active style register.

use super::metrics;
use super::style::{Color, FontFamily, Style};
use crate::error::Result;
use crate::writer::{PdfWriter, PdfWriterConfig};

/// Standard page sizes.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Deserialize)]
pub enum PageSize {
    /// US Letter (8.5" x 11")
    Letter,
    /// A4 (210mm x 297mm)
    #[default]
    A4,
    /// Legal (8.5" x 14")
    Legal,
    /// A3 (297mm x 420mm)
    A3,
    /// Custom dimensions in points
    Custom(f64, f64),
}

impl PageSize {
    /// Get dimensions in points (1 inch = 72 points).
    pub fn dimensions(&self) -> (f64, f64) {
        match self {
            PageSize::Letter => (612.0, 792.0),
            PageSize::A4 => (595.28, 841.89),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::A3 => (841.89, 1190.55),
            PageSize::Custom(w, h) => (*w, *h),
        }
    }

    /// Dimensions for layout. A custom size with a side that is not a positive finite
    /// number falls back to A4.
    pub fn usable_dimensions(&self) -> (f64, f64) {
        let (width, height) = self.dimensions();
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            (width, height)
        } else {
            log::warn!("Invalid page size {} x {}, falling back to A4", width, height);
            PageSize::A4.dimensions()
        }
    }
}

/// Construction options for a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    /// Margin on all four sides, in points
    pub margin: f64,
    /// Page size
    pub page_size: PageSize,
    /// Extra space between lines, in points
    pub line_gap: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            margin: 50.0,
            page_size: PageSize::A4,
            line_gap: 4.0,
        }
    }
}

/// One contiguous, single-style, positioned piece of text.
///
/// `y` is measured from the top edge of the page (authoring space).
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    /// Text to paint
    pub text: String,
    /// Left edge in points
    pub x: f64,
    /// Distance from the top of the page in points
    pub y: f64,
    /// Style the run was placed with
    pub style: Style,
}

/// A page and the runs painted on it, in paint order.
#[derive(Debug, Clone, Default)]
pub struct Page {
    runs: Vec<TextRun>,
    content_height: f64,
}

impl Page {
    fn new() -> Self {
        Self::default()
    }

    /// Runs in paint order.
    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    /// Lowest point reached by any run (top of run plus its line height).
    pub fn content_height(&self) -> f64 {
        self.content_height
    }

    /// True if nothing has been painted on this page.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    fn push(&mut self, run: TextRun) {
        let bottom = run.y + metrics::line_height(run.style.size);
        self.content_height = self.content_height.max(bottom);
        self.runs.push(run);
    }
}

/// The vertical write position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    /// Index of the page receiving content
    pub page_index: usize,
    /// Distance from the top of the page in points
    pub y: f64,
}

/// A document being laid out.
///
/// Style changes persist until changed again; every placement reads the current
/// style. Content is wrapped to the content width and pages are appended whenever
/// the cursor would pass the bottom margin.
///
/// ```
/// use convo_pdf::layout::{Document, FontFamily, LayoutOptions};
///
/// let mut doc = Document::new(LayoutOptions::default());
/// doc.set_font(FontFamily::Bold).set_font_size(14.0).text("Title");
/// doc.move_down(1.0);
/// let bytes = doc.finalize().unwrap();
/// assert!(bytes.starts_with(b"%PDF-1.7"));
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    pages: Vec<Page>,
    cursor: Cursor,
    style: Style,
    margin: f64,
    page_width: f64,
    page_height: f64,
    line_gap: f64,
}

impl Document {
    /// Create a document with one empty page and the cursor at the top margin.
    pub fn new(options: LayoutOptions) -> Self {
        let (page_width, page_height) = options.page_size.usable_dimensions();
        let defaults = LayoutOptions::default();
        let margin = if options.margin.is_finite() {
            options.margin
        } else {
            log::warn!("Ignoring invalid margin {}, using {}", options.margin, defaults.margin);
            defaults.margin
        };
        let margin = margin.clamp(0.0, page_width.min(page_height) / 2.0);
        let line_gap = if options.line_gap.is_finite() {
            options.line_gap.max(0.0)
        } else {
            log::warn!("Ignoring invalid line gap {}", options.line_gap);
            defaults.line_gap
        };

        let mut doc = Self {
            pages: Vec::new(),
            cursor: Cursor {
                page_index: 0,
                y: margin,
            },
            style: Style::default(),
            margin,
            page_width,
            page_height,
            line_gap,
        };
        doc.add_page();
        doc
    }

    /// Select the font family for subsequent text.
    pub fn set_font(&mut self, family: FontFamily) -> &mut Self {
        self.style.family = family;
        self
    }

    /// Set the font size for subsequent text. Non-positive sizes are ignored.
    pub fn set_font_size(&mut self, size: f64) -> &mut Self {
        if size.is_finite() && size > 0.0 {
            self.style.size = size;
        } else {
            log::warn!("Ignoring invalid font size {}", size);
        }
        self
    }

    /// Set the fill color for subsequent text.
    pub fn set_fill_color(&mut self, color: Color) -> &mut Self {
        self.style.color = color;
        self
    }

    /// Set the fill color from a `#rrggbb` string.
    pub fn set_fill_color_hex(&mut self, hex: &str) -> Result<&mut Self> {
        let color = Color::from_hex(hex)?;
        Ok(self.set_fill_color(color))
    }

    /// Append a page and move the cursor to its top margin.
    pub fn add_page(&mut self) -> &mut Self {
        self.pages.push(Page::new());
        self.cursor = Cursor {
            page_index: self.pages.len() - 1,
            y: self.margin,
        };
        log::trace!("Started page {}", self.pages.len());
        self
    }

    /// Paint `content` in the current style, wrapping at word boundaries.
    ///
    /// Words are the pieces between single spaces, so runs of spaces (code indentation)
    /// survive. A word wider than the content area gets a line of its own.
    pub fn text(&mut self, content: &str) -> &mut Self {
        if content.trim().is_empty() {
            return self;
        }

        let size = self.style.size;
        let max_width = self.content_width();
        let space_width = metrics::text_width(" ", size);

        let mut line = String::new();
        let mut line_width = 0.0;
        for (i, word) in content.split(' ').enumerate() {
            let word_width = metrics::text_width(word, size);
            if i == 0 {
                line.push_str(word);
                line_width = word_width;
            } else if line_width + space_width + word_width > max_width {
                self.flush_line(&line);
                line.clear();
                line.push_str(word);
                line_width = word_width;
            } else {
                line.push(' ');
                line.push_str(word);
                line_width += space_width + word_width;
            }
        }
        self.flush_line(&line);

        self.check_cursor();
        self
    }

    /// Advance the cursor by `lines` times the current line pitch (size + line gap).
    pub fn move_down(&mut self, lines: f64) -> &mut Self {
        let pitch = self.style.size + self.line_gap;
        self.advance(pitch * lines);
        self
    }

    /// Render a markdown block with the line renderer.
    pub fn render_markdown_block(&mut self, markdown: &str) -> &mut Self {
        crate::markdown::render(self, markdown);
        self.check_cursor();
        self
    }

    /// Place one run at `x` on the current line without wrapping or advancing.
    pub fn place_run(&mut self, text: &str, x: f64) -> &mut Self {
        let run = TextRun {
            text: text.to_string(),
            x,
            y: self.cursor.y,
            style: self.style,
        };
        self.pages[self.cursor.page_index].push(run);
        self
    }

    /// Advance the cursor by `dy` points, starting a new page past the bottom margin.
    pub fn advance(&mut self, dy: f64) -> &mut Self {
        // Moving up never leaves the top margin.
        self.cursor.y = (self.cursor.y + dy).max(self.margin);
        if self.cursor.y > self.page_height - self.margin {
            self.add_page();
        }
        self.check_cursor();
        self
    }

    /// Encode the document with the default writer configuration.
    pub fn finalize(self) -> Result<Vec<u8>> {
        self.finalize_with(&PdfWriterConfig::default())
    }

    /// Encode the document with a custom writer configuration.
    pub fn finalize_with(self, config: &PdfWriterConfig) -> Result<Vec<u8>> {
        PdfWriter::with_config(config.clone()).encode(&self)
    }

    /// Pages in order.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Current cursor.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Current style register.
    pub fn style(&self) -> Style {
        self.style
    }

    /// Page margin.
    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Page width in points.
    pub fn page_width(&self) -> f64 {
        self.page_width
    }

    /// Page height in points.
    pub fn page_height(&self) -> f64 {
        self.page_height
    }

    /// Extra space between lines.
    pub fn line_gap(&self) -> f64 {
        self.line_gap
    }

    /// Horizontal budget for wrapping: page width minus both margins.
    pub fn content_width(&self) -> f64 {
        self.page_width - 2.0 * self.margin
    }

    fn flush_line(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }
        let x = self.margin;
        self.place_run(line, x);
        let height = metrics::line_height(self.style.size);
        self.advance(height + self.line_gap);
    }

    fn check_cursor(&self) {
        debug_assert!(
            self.cursor.y >= self.margin && self.cursor.y <= self.page_height - self.margin,
            "cursor y {} outside [{}, {}]",
            self.cursor.y,
            self.margin,
            self.page_height - self.margin
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> Document {
        Document::new(LayoutOptions::default())
    }

    #[test]
    fn test_new_document_has_one_page() {
        let doc = doc();
        assert_eq!(doc.pages().len(), 1);
        assert_eq!(doc.cursor(), Cursor { page_index: 0, y: 50.0 });
        assert_eq!(doc.style(), Style::default());
        assert!((doc.content_width() - 495.28).abs() < 1e-9);
    }

    #[test]
    fn test_text_single_line() {
        let mut doc = doc();
        doc.text("Hello world");

        let runs = doc.pages()[0].runs();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, "Hello world");
        assert_eq!(runs[0].x, 50.0);
        assert_eq!(runs[0].y, 50.0);
        // 12pt: line height 14.4 + gap 4
        assert!((doc.cursor().y - 68.4).abs() < 1e-9);
    }

    #[test]
    fn test_text_empty_is_noop() {
        let mut doc = doc();
        doc.text("").text("   ");
        assert!(doc.pages()[0].is_empty());
        assert_eq!(doc.cursor().y, 50.0);
    }

    #[test]
    fn test_text_wraps_at_content_width() {
        // 100pt page, 10pt margin, 10pt font: content width 80pt = 16 chars
        let mut doc = Document::new(LayoutOptions {
            margin: 10.0,
            page_size: PageSize::Custom(100.0, 500.0),
            line_gap: 0.0,
        });
        doc.set_font_size(10.0).text("aaaa bbbb cccc dddd eeee");

        let texts: Vec<&str> = doc.pages()[0].runs().iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["aaaa bbbb cccc", "dddd eeee"]);
        assert_eq!(doc.pages()[0].runs()[1].y, 22.0);
    }

    #[test]
    fn test_long_word_is_not_split() {
        let mut doc = Document::new(LayoutOptions {
            margin: 10.0,
            page_size: PageSize::Custom(100.0, 500.0),
            line_gap: 0.0,
        });
        doc.set_font_size(10.0).text("a abcdefghijklmnopqrstuvwxyz b");

        let texts: Vec<&str> = doc.pages()[0].runs().iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "abcdefghijklmnopqrstuvwxyz", "b"]);
    }

    #[test]
    fn test_indentation_survives() {
        let mut doc = doc();
        doc.text("    let x = 1;");
        assert_eq!(doc.pages()[0].runs()[0].text, "    let x = 1;");
    }

    #[test]
    fn test_style_register_persists() {
        let mut doc = doc();
        doc.set_font(FontFamily::Mono).set_font_size(10.0);
        doc.text("one").text("two");

        for run in doc.pages()[0].runs() {
            assert_eq!(run.style.family, FontFamily::Mono);
            assert_eq!(run.style.size, 10.0);
        }
    }

    #[test]
    fn test_set_fill_color_hex() {
        let mut doc = doc();
        doc.set_fill_color_hex("#10a37f").unwrap();
        assert_eq!(doc.style().color, Color::from_hex("#10a37f").unwrap());
        assert!(doc.set_fill_color_hex("green").is_err());
    }

    #[test]
    fn test_invalid_font_size_ignored() {
        let mut doc = doc();
        doc.set_font_size(-3.0).set_font_size(f64::NAN);
        assert_eq!(doc.style().size, 12.0);
    }

    #[test]
    fn test_move_down_uses_size_and_gap() {
        let mut doc = doc();
        doc.set_font_size(11.0).move_down(0.5);
        assert!((doc.cursor().y - 57.5).abs() < 1e-9);
    }

    #[test]
    fn test_move_down_paginates() {
        let mut doc = doc();
        doc.move_down(100.0);
        assert_eq!(doc.pages().len(), 2);
        assert_eq!(doc.cursor(), Cursor { page_index: 1, y: 50.0 });
    }

    #[test]
    fn test_text_paginates_before_overflow() {
        let mut doc = doc();
        for i in 0..200 {
            doc.text(&format!("line {}", i));
            let cursor = doc.cursor();
            assert!(cursor.y >= doc.margin());
            assert!(cursor.y <= doc.page_height() - doc.margin());
        }
        assert!(doc.pages().len() > 1);
        for page in doc.pages() {
            for run in page.runs() {
                assert!(run.y <= doc.page_height() - doc.margin());
            }
        }
    }

    #[test]
    fn test_add_page_resets_cursor() {
        let mut doc = doc();
        doc.text("first");
        doc.add_page();
        assert_eq!(doc.cursor(), Cursor { page_index: 1, y: 50.0 });
        doc.text("second");
        assert_eq!(doc.pages()[1].runs()[0].text, "second");
    }

    #[test]
    fn test_content_height_never_shrinks() {
        let mut doc = doc();
        doc.text("a");
        let first = doc.pages()[0].content_height();
        doc.place_run("b", 100.0);
        assert!(doc.pages()[0].content_height() >= first);
        assert!((first - (50.0 + 14.4)).abs() < 1e-9);
    }

    #[test]
    fn test_oversized_margin_is_clamped() {
        let doc = Document::new(LayoutOptions {
            margin: 1000.0,
            page_size: PageSize::Custom(200.0, 300.0),
            line_gap: 4.0,
        });
        assert_eq!(doc.margin(), 100.0);
    }

    #[test]
    fn test_invalid_page_size_falls_back_to_a4() {
        for page_size in [
            PageSize::Custom(-100.0, 800.0),
            PageSize::Custom(300.0, 0.0),
            PageSize::Custom(f64::NAN, 400.0),
            PageSize::Custom(300.0, f64::INFINITY),
        ] {
            let mut doc = Document::new(LayoutOptions {
                margin: 50.0,
                page_size,
                line_gap: 4.0,
            });
            assert_eq!((doc.page_width(), doc.page_height()), (595.28, 841.89));
            assert_eq!(doc.margin(), 50.0);
            doc.text("hello");
            assert_eq!(doc.pages()[0].runs()[0].y, 50.0);
        }
    }

    #[test]
    fn test_non_finite_margin_and_gap_use_defaults() {
        let mut doc = Document::new(LayoutOptions {
            margin: f64::NAN,
            page_size: PageSize::A4,
            line_gap: f64::INFINITY,
        });
        assert_eq!(doc.margin(), 50.0);
        assert_eq!(doc.line_gap(), 4.0);
        doc.text("hello");
        assert!((doc.cursor().y - 68.4).abs() < 1e-9);

        let doc = Document::new(LayoutOptions {
            margin: f64::NEG_INFINITY,
            page_size: PageSize::Custom(200.0, 300.0),
            line_gap: f64::NAN,
        });
        assert_eq!(doc.margin(), 50.0);
        assert_eq!(doc.line_gap(), 4.0);
    }

    #[test]
    fn test_page_size_dimensions() {
        assert_eq!(PageSize::A4.dimensions(), (595.28, 841.89));
        assert_eq!(PageSize::Letter.dimensions(), (612.0, 792.0));
        assert_eq!(PageSize::Custom(10.0, 20.0).dimensions(), (10.0, 20.0));
    }
}
