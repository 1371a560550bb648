//! Text style register: font family, size and fill color.

use crate::error::{Error, Result};

/// The font families the exporter can paint with.
///
/// Each family maps to one of the standard 14 Type1 fonts, so nothing is embedded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    /// Helvetica, used for body text
    #[default]
    Regular,
    /// Helvetica-Bold, used for headings, labels and `**bold**` spans
    Bold,
    /// Courier, used for fenced code
    Mono,
}

impl FontFamily {
    /// All families, in the order their font objects are written.
    pub const ALL: [FontFamily; 3] = [FontFamily::Regular, FontFamily::Bold, FontFamily::Mono];

    /// The Base-14 font name (`/BaseFont`).
    pub fn base_font(&self) -> &'static str {
        match self {
            FontFamily::Regular => "Helvetica",
            FontFamily::Bold => "Helvetica-Bold",
            FontFamily::Mono => "Courier",
        }
    }

    /// The resource name used by `Tf` operators in content streams.
    pub fn resource_name(&self) -> &'static str {
        match self {
            FontFamily::Regular => "F1",
            FontFamily::Bold => "F2",
            FontFamily::Mono => "F3",
        }
    }
}

/// RGB color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel (0.0 - 1.0)
    pub r: f64,
    /// Green channel (0.0 - 1.0)
    pub g: f64,
    /// Blue channel (0.0 - 1.0)
    pub b: f64,
}

impl Color {
    /// Create a new color, clamping each channel into range.
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    /// Create a black color.
    pub fn black() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Create a color from 8-bit channels.
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    /// Parse a `#rrggbb` hex color.
    ///
    /// ```
    /// use convo_pdf::layout::Color;
    ///
    /// let green = Color::from_hex("#10a37f").unwrap();
    /// assert!((green.g - 163.0 / 255.0).abs() < 1e-9);
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.is_ascii())
            .ok_or_else(|| Error::InvalidColor(hex.to_string()))?;

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| Error::InvalidColor(hex.to_string()))
        };

        Ok(Self::rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// The active text style of a document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// Font family
    pub family: FontFamily,
    /// Font size in points
    pub size: f64,
    /// Fill color
    pub color: Color,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            family: FontFamily::Regular,
            size: 12.0,
            color: Color::black(),
        }
    }
}
