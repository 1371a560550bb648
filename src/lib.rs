// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::should_implement_trait)]
#![allow(clippy::match_like_matches_macro)]

//! # convo_pdf
//!
//! Chat transcript to PDF exporter in Rust, with no font programs and no external tools.
//!
//! ## Core Features
//!
//! - **Tree to Markdown**: flattens a content tree (headings, paragraphs, emphasis,
//!   code blocks, lists, tables, links, images) into markdown
//! - **Markdown Rendering**: line-based renderer with fenced code, headings, quotes,
//!   list items and inline `**bold**`
//! - **Text Layout**: greedy word wrap with approximate metrics and automatic pagination
//! - **PDF Writing**: minimal PDF 1.7 with the standard Helvetica/Courier fonts, exact
//!   cross-reference table and optional Flate compression
//! - **Conversation Export**: speaker labels, export timestamp and file naming
//!
//! ## Architecture
//!
//! ```text
//! ContentNode ──[converters]──▶ markdown ──[markdown]──▶ draw calls
//!     ──[layout]──▶ pages of TextRuns ──[writer]──▶ PDF bytes
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use convo_pdf::api::{export_markdown, Export};
//! use convo_pdf::config::ExportConfig;
//!
//! # fn main() -> convo_pdf::Result<()> {
//! let Export { bytes, file_name } =
//!     export_markdown("# Notes\n\nSome **important** text.", &ExportConfig::default())?;
//! assert!(bytes.starts_with(b"%PDF-1.7"));
//! assert!(file_name.starts_with("ChatGPT-Conversation-"));
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// PDF object model
pub mod object;

// Layout
pub mod layout;

// Content tree conversion
pub mod converters;

// Markdown rendering
pub mod markdown;

// PDF writing
pub mod writer;

// High-level API
pub mod api;

// Configuration
pub mod config;

// Re-exports
pub use api::{export_conversation, export_markdown, export_tree, Conversation, Export, Message};
pub use config::ExportConfig;
pub use converters::ContentNode;
pub use error::{Error, Result};
pub use layout::{Document, LayoutOptions};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
