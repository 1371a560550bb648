//! Configuration for PDF export.

use crate::layout::{LayoutOptions, PageSize};
use crate::writer::PdfWriterConfig;

/// Export configuration.
///
/// Can be built in code with the `with_*` setters or deserialized from JSON; missing
/// fields take their defaults.
///
/// ```
/// use convo_pdf::config::ExportConfig;
///
/// let config: ExportConfig = serde_json::from_str(r#"{"product": "Claude"}"#).unwrap();
/// assert_eq!(config.product, "Claude");
/// assert_eq!(config.margin, 50.0);
/// ```
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Margin on all four sides, in points.
    pub margin: f64,

    /// Page size.
    pub page_size: PageSize,

    /// Extra space between lines, in points.
    pub line_gap: f64,

    /// Product name used in the title line and the file name.
    pub product: String,

    /// Label painted before assistant messages (without the colon).
    pub assistant_label: String,

    /// Compress content streams.
    pub compress: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            margin: 50.0,
            page_size: PageSize::A4,
            line_gap: 4.0,
            product: "ChatGPT".to_string(),
            assistant_label: "ChatGPT".to_string(),
            compress: false,
        }
    }

    /// Set the page margin.
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Set the page size.
    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the extra space between lines.
    pub fn with_line_gap(mut self, line_gap: f64) -> Self {
        self.line_gap = line_gap;
        self
    }

    /// Set the product name.
    pub fn with_product(mut self, product: impl Into<String>) -> Self {
        self.product = product.into();
        self
    }

    /// Set the assistant label.
    pub fn with_assistant_label(mut self, label: impl Into<String>) -> Self {
        self.assistant_label = label.into();
        self
    }

    /// Enable stream compression.
    pub fn with_compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Layout options for a new document.
    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            margin: self.margin,
            page_size: self.page_size,
            line_gap: self.line_gap,
        }
    }

    /// Writer configuration for encoding.
    pub fn writer_config(&self) -> PdfWriterConfig {
        PdfWriterConfig::default().with_compress(self.compress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExportConfig::default();
        assert_eq!(config.margin, 50.0);
        assert_eq!(config.page_size.dimensions(), (595.28, 841.89));
        assert_eq!(config.line_gap, 4.0);
        assert_eq!(config.product, "ChatGPT");
        assert_eq!(config.assistant_label, "ChatGPT");
        assert!(!config.compress);
    }

    #[test]
    fn test_builder() {
        let config = ExportConfig::new()
            .with_margin(36.0)
            .with_page_size(PageSize::Letter)
            .with_line_gap(2.0)
            .with_product("Claude")
            .with_assistant_label("Claude")
            .with_compress(true);

        let layout = config.layout_options();
        assert_eq!(layout.margin, 36.0);
        assert_eq!(layout.page_size, PageSize::Letter);
        assert_eq!(layout.line_gap, 2.0);
        assert!(config.writer_config().compress);
        assert_eq!(config.writer_config().version, "1.7");
    }

    #[test]
    fn test_deserialize_page_size() {
        let config: ExportConfig =
            serde_json::from_str(r#"{"page_size": {"Custom": [300.0, 400.0]}, "compress": true}"#)
                .unwrap();
        assert_eq!(config.page_size, PageSize::Custom(300.0, 400.0));
        assert!(config.compress);
        assert_eq!(config.product, "ChatGPT");

        let letter: ExportConfig = serde_json::from_str(r#"{"page_size": "Letter"}"#).unwrap();
        assert_eq!(letter.page_size, PageSize::Letter);
    }
}
