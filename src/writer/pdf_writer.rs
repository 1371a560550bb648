//! PDF document writer.
//!
//! Assembles a laid-out [`Document`] into a complete PDF file:
//! header, body, xref table, and trailer.
//!
//! Objects are numbered in the order they are written: the three fonts, then a
//! page/content-stream pair per page, then the page tree, then the catalog.

use super::content_stream::ContentStreamBuilder;
use super::object_serializer::ObjectSerializer;
use crate::error::Result;
use crate::layout::{Document, FontFamily, Page};
use crate::object::{Dictionary, Object};
use std::io::Write;

/// Configuration for PDF generation.
#[derive(Debug, Clone)]
pub struct PdfWriterConfig {
    /// PDF version (e.g., "1.7")
    pub version: String,
    /// Whether to compress content streams
    pub compress: bool,
}

impl Default for PdfWriterConfig {
    fn default() -> Self {
        Self {
            version: "1.7".to_string(),
            compress: false,
        }
    }
}

impl PdfWriterConfig {
    /// Set the version written in the header.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Enable or disable stream compression.
    ///
    /// When enabled, content streams are compressed using FlateDecode
    /// (zlib/deflate). The object layout does not change.
    pub fn with_compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }
}

/// Compress data using Flate/Deflate compression.
///
/// Returns compressed bytes suitable for FlateDecode filter.
fn compress_data(data: &[u8]) -> std::io::Result<Vec<u8>> {
    use flate2::write::ZlibEncoder;
    use flate2::Compression;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

/// Encode a document with the default configuration.
pub fn encode(document: &Document) -> Result<Vec<u8>> {
    PdfWriter::new().encode(document)
}

/// PDF document writer.
#[derive(Debug, Clone, Default)]
pub struct PdfWriter {
    config: PdfWriterConfig,
}

/// Object numbers handed out for one encoding pass.
struct ObjectIds {
    next: u32,
}

impl ObjectIds {
    fn new() -> Self {
        Self { next: 1 }
    }

    fn alloc(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Number of objects allocated so far.
    fn count(&self) -> u32 {
        self.next - 1
    }
}

impl PdfWriter {
    /// Create a new PDF writer with default config.
    pub fn new() -> Self {
        Self::with_config(PdfWriterConfig::default())
    }

    /// Create a PDF writer with custom config.
    pub fn with_config(config: PdfWriterConfig) -> Self {
        Self { config }
    }

    /// Serialize `document`. The document is not modified.
    pub fn encode(&self, document: &Document) -> Result<Vec<u8>> {
        let serializer = ObjectSerializer::new();
        let mut output = Vec::new();
        let mut xref_offsets: Vec<usize> = Vec::new();

        // PDF Header
        writeln!(output, "%PDF-{}", self.config.version)?;
        // Binary marker (recommended for binary content)
        output.extend_from_slice(b"%\xE2\xE3\xCF\xD3\n");

        // Numbers are allocated in emission order, so the page tree's number is known
        // before the pages that point at it are written.
        let mut ids = ObjectIds::new();
        let font_ids: Vec<(FontFamily, u32)> =
            FontFamily::ALL.iter().map(|f| (*f, ids.alloc())).collect();
        let page_ids: Vec<(u32, u32)> = document
            .pages()
            .iter()
            .map(|_| (ids.alloc(), ids.alloc()))
            .collect();
        let pages_id = ids.alloc();
        let catalog_id = ids.alloc();

        let mut emit = |output: &mut Vec<u8>, id: u32, obj: &Object| {
            debug_assert_eq!(id as usize, xref_offsets.len() + 1);
            xref_offsets.push(output.len());
            output.extend_from_slice(&serializer.serialize_indirect(id, 0, obj));
        };

        // Fonts
        let mut font_resources = Dictionary::new();
        for (family, id) in &font_ids {
            let font_obj = ObjectSerializer::dict(vec![
                ("Type", ObjectSerializer::name("Font")),
                ("Subtype", ObjectSerializer::name("Type1")),
                ("BaseFont", ObjectSerializer::name(family.base_font())),
                ("Encoding", ObjectSerializer::name("WinAnsiEncoding")),
            ]);
            emit(&mut output, *id, &font_obj);
            font_resources.insert(
                family.resource_name().to_string(),
                ObjectSerializer::reference(*id, 0),
            );
        }

        // Page and content objects
        let media_box = ObjectSerializer::rect(
            0.0,
            0.0,
            document.page_width(),
            document.page_height(),
        );
        for (page, (page_id, content_id)) in document.pages().iter().zip(&page_ids) {
            let page_obj = ObjectSerializer::dict(vec![
                ("Type", ObjectSerializer::name("Page")),
                ("MediaBox", media_box.clone()),
                (
                    "Resources",
                    ObjectSerializer::dict(vec![(
                        "Font",
                        Object::Dictionary(font_resources.clone()),
                    )]),
                ),
                ("Contents", ObjectSerializer::reference(*content_id, 0)),
                ("Parent", ObjectSerializer::reference(pages_id, 0)),
            ]);
            emit(&mut output, *page_id, &page_obj);

            let content_obj = self.content_stream(page, document.page_height())?;
            emit(&mut output, *content_id, &content_obj);
        }

        // Pages object
        let kids = page_ids
            .iter()
            .map(|(page_id, _)| ObjectSerializer::reference(*page_id, 0))
            .collect();
        let pages_obj = ObjectSerializer::dict(vec![
            ("Type", ObjectSerializer::name("Pages")),
            ("Kids", ObjectSerializer::array(kids)),
            ("Count", ObjectSerializer::integer(document.pages().len() as i64)),
        ]);
        emit(&mut output, pages_id, &pages_obj);

        // Catalog object
        let catalog_obj = ObjectSerializer::dict(vec![
            ("Type", ObjectSerializer::name("Catalog")),
            ("Pages", ObjectSerializer::reference(pages_id, 0)),
        ]);
        emit(&mut output, catalog_id, &catalog_obj);

        // Write xref table
        let xref_start = output.len();
        let size = ids.count() + 1;
        writeln!(output, "xref")?;
        writeln!(output, "0 {}", size)?;

        // Object 0 is always free
        writeln!(output, "0000000000 65535 f ")?;
        for offset in &xref_offsets {
            writeln!(output, "{:010} 00000 n ", offset)?;
        }

        // Write trailer
        let trailer = ObjectSerializer::dict(vec![
            ("Size", ObjectSerializer::integer(size as i64)),
            ("Root", ObjectSerializer::reference(catalog_id, 0)),
        ]);

        writeln!(output, "trailer")?;
        output.extend_from_slice(&serializer.serialize(&trailer));
        writeln!(output)?;
        writeln!(output, "startxref")?;
        writeln!(output, "{}", xref_start)?;
        write!(output, "%%EOF")?;

        log::debug!(
            "Encoded {} pages as {} objects ({} bytes)",
            document.pages().len(),
            ids.count(),
            output.len()
        );

        Ok(output)
    }

    /// Build the content stream object for one page.
    fn content_stream(&self, page: &Page, page_height: f64) -> Result<Object> {
        let mut builder = ContentStreamBuilder::new();
        for run in page.runs() {
            builder.text_run(run, page_height);
        }
        let raw_content = builder.build()?;

        // Optionally compress the content stream
        let (content_bytes, is_compressed) = if self.config.compress {
            match compress_data(&raw_content) {
                Ok(compressed) => (compressed, true),
                Err(e) => {
                    log::warn!("Content stream compression failed, writing uncompressed: {}", e);
                    (raw_content, false)
                },
            }
        } else {
            (raw_content, false)
        };

        let mut dict = Dictionary::new();
        dict.insert("Length".to_string(), Object::Integer(content_bytes.len() as i64));
        if is_compressed {
            dict.insert("Filter".to_string(), Object::Name("FlateDecode".to_string()));
        }

        Ok(Object::Stream {
            dict,
            data: bytes::Bytes::from(content_bytes),
        })
    }
}
