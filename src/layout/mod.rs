//! Text layout engine.
//!
//! Owns the page list, the cursor and the style register. Text is wrapped greedily at
//! word boundaries using approximate metrics and pages are appended as soon as the
//! cursor would pass the bottom margin.

mod document;
pub mod metrics;
mod style;

pub use document::{Cursor, Document, LayoutOptions, Page, PageSize, TextRun};
pub use metrics::TextMetrics;
pub use style::{Color, FontFamily, Style};
