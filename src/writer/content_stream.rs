//! PDF content stream builder.
//!
//! Builds page content streams out of text operators
//! (ISO 32000-1:2008, Section 9.4).

use super::object_serializer::format_number;
use crate::error::Result;
use crate::layout::{Color, TextRun};
use std::io::Write;

/// Operations that can be added to a content stream.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentStreamOp {
    /// Begin text object (BT)
    BeginText,
    /// End text object (ET)
    EndText,
    /// Set font resource and size (Tf)
    SetFont(String, f64),
    /// Set fill color RGB (rg)
    SetFillColorRGB(f64, f64, f64),
    /// Move text position (Td)
    MoveText(f64, f64),
    /// Show text (Tj) - literal string
    ShowText(String),
}

/// Builder for PDF content streams.
#[derive(Debug, Default)]
pub struct ContentStreamBuilder {
    operations: Vec<ContentStreamOp>,
}

impl ContentStreamBuilder {
    /// Create a new content stream builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an operation to the stream.
    pub fn op(&mut self, op: ContentStreamOp) -> &mut Self {
        self.operations.push(op);
        self
    }

    /// Begin a text object.
    pub fn begin_text(&mut self) -> &mut Self {
        self.op(ContentStreamOp::BeginText)
    }

    /// End a text object.
    pub fn end_text(&mut self) -> &mut Self {
        self.op(ContentStreamOp::EndText)
    }

    /// Set font resource and size.
    pub fn set_font(&mut self, resource_name: &str, size: f64) -> &mut Self {
        self.op(ContentStreamOp::SetFont(resource_name.to_string(), size))
    }

    /// Set fill color.
    pub fn fill_color(&mut self, color: Color) -> &mut Self {
        self.op(ContentStreamOp::SetFillColorRGB(color.r, color.g, color.b))
    }

    /// Move to a position in PDF user space (origin bottom-left).
    pub fn move_text(&mut self, x: f64, y: f64) -> &mut Self {
        self.op(ContentStreamOp::MoveText(x, y))
    }

    /// Show a literal string.
    pub fn show_text(&mut self, text: &str) -> &mut Self {
        self.op(ContentStreamOp::ShowText(text.to_string()))
    }

    /// Paint one laid-out run as a self-contained text object.
    ///
    /// Runs are positioned from the top of the page; the baseline is placed one font
    /// size below that, in the bottom-left origin of PDF user space.
    pub fn text_run(&mut self, run: &TextRun, page_height: f64) -> &mut Self {
        let y = page_height - run.y - run.style.size;
        self.begin_text()
            .set_font(run.style.family.resource_name(), run.style.size)
            .fill_color(run.style.color)
            .move_text(run.x, y)
            .show_text(&run.text)
            .end_text()
    }

    /// Build the content stream to bytes.
    pub fn build(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();

        for op in &self.operations {
            self.write_op(&mut buf, op)?;
            writeln!(buf)?;
        }

        Ok(buf)
    }

    fn write_op<W: Write>(&self, w: &mut W, op: &ContentStreamOp) -> std::io::Result<()> {
        match op {
            ContentStreamOp::BeginText => write!(w, "BT"),
            ContentStreamOp::EndText => write!(w, "ET"),
            ContentStreamOp::SetFont(name, size) => {
                write!(w, "/{} {} Tf", name, format_number(*size))
            },
            ContentStreamOp::SetFillColorRGB(r, g, b) => write!(
                w,
                "{} {} {} rg",
                format_number(*r),
                format_number(*g),
                format_number(*b)
            ),
            ContentStreamOp::MoveText(tx, ty) => {
                write!(w, "{} {} Td", format_number(*tx), format_number(*ty))
            },
            ContentStreamOp::ShowText(text) => write!(w, "({}) Tj", escape_text(text)),
        }
    }
}

/// Escape a string for a literal `( )` operand.
///
/// Backslash and parentheses get a backslash prefix. Anything outside printable ASCII,
/// except tab, LF and CR, cannot be shown by the standard fonts' WinAnsi encoding
/// without a font program, so it is dropped.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '(' | ')' | '\\' => {
                out.push('\\');
                out.push(ch);
            },
            ' '..='~' | '\t' | '\n' | '\r' => out.push(ch),
            _ => {},
        }
    }
    out
}
