//! PDF writing module for generating PDF files.
//!
//! This module turns a laid-out [`Document`](crate::layout::Document) into PDF bytes.
//!
//! ## Architecture
//!
//! ```text
//! Document (pages of TextRuns)
//!     ↓
//! [ContentStreamBuilder] (runs → content stream bytes)
//!     ↓
//! [PdfWriter] (assembles complete PDF structure)
//!     ↓
//! [ObjectSerializer] (serializes PDF objects)
//!     ↓
//! PDF bytes
//! ```
//!
//! ## Example
//!
//! ```
//! use convo_pdf::layout::{Document, LayoutOptions};
//! use convo_pdf::writer::{PdfWriter, PdfWriterConfig};
//!
//! let mut doc = Document::new(LayoutOptions::default());
//! doc.text("Hello, World!");
//!
//! let writer = PdfWriter::with_config(PdfWriterConfig::default().with_compress(true));
//! let bytes = writer.encode(&doc).unwrap();
//! assert!(bytes.ends_with(b"%%EOF"));
//! ```

mod content_stream;
mod object_serializer;
mod pdf_writer;

pub use content_stream::{escape_text, ContentStreamBuilder, ContentStreamOp};
pub use object_serializer::{format_number, ObjectSerializer};
pub use pdf_writer::{encode, PdfWriter, PdfWriterConfig};
