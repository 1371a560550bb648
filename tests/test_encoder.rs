//! Integration tests for the PDF encoder: object order, xref offsets and trailer.

use convo_pdf::layout::{Document, FontFamily, LayoutOptions, PageSize};
use convo_pdf::writer::{encode, PdfWriter, PdfWriterConfig};

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn rfind(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).rposition(|w| w == needle)
}

/// Parsed xref section: (startxref value, entry offsets for objects 1..).
fn parse_xref(bytes: &[u8]) -> (usize, Vec<usize>) {
    let marker = rfind(bytes, b"startxref\n").expect("startxref");
    let tail = std::str::from_utf8(&bytes[marker..]).unwrap();
    let start: usize = tail.lines().nth(1).unwrap().trim().parse().unwrap();

    let section = std::str::from_utf8(&bytes[start..]).unwrap();
    let mut lines = section.lines();
    assert_eq!(lines.next(), Some("xref"));
    let header = lines.next().unwrap();
    let size: usize = header.strip_prefix("0 ").unwrap().parse().unwrap();
    assert_eq!(lines.next(), Some("0000000000 65535 f "));

    let offsets = (1..size)
        .map(|_| {
            let line = lines.next().unwrap();
            assert_eq!(line.len(), 19, "xref entry {:?}", line);
            assert!(line.ends_with(" 00000 n "));
            line[..10].parse().unwrap()
        })
        .collect();
    (start, offsets)
}

fn two_page_document() -> Document {
    let mut doc = Document::new(LayoutOptions::default());
    doc.text("first page");
    doc.add_page();
    doc.set_font(FontFamily::Bold).text("second page");
    doc
}

mod xref_tests {
    use super::*;

    #[test]
    fn test_two_pages_make_nine_objects() {
        let bytes = encode(&two_page_document()).unwrap();
        let (_, offsets) = parse_xref(&bytes);
        assert_eq!(offsets.len(), 9);

        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("trailer\n<< /Size 10 /Root 9 0 R >>"));
        assert!(text.contains("8 0 obj\n<< /Type /Pages /Kids [4 0 R 6 0 R] /Count 2 >>"));
        assert!(text.contains("9 0 obj\n<< /Type /Catalog /Pages 8 0 R >>"));
    }

    #[test]
    fn test_offsets_point_at_object_headers() {
        let bytes = encode(&two_page_document()).unwrap();
        let (_, offsets) = parse_xref(&bytes);

        for (index, offset) in offsets.iter().enumerate() {
            let header = format!("{} 0 obj\n", index + 1);
            assert!(
                bytes[*offset..].starts_with(header.as_bytes()),
                "object {} not at offset {}",
                index + 1,
                offset
            );
        }
    }

    #[test]
    fn test_startxref_points_at_xref_keyword() {
        let bytes = encode(&two_page_document()).unwrap();
        let (start, _) = parse_xref(&bytes);
        assert_eq!(find(&bytes, b"xref\n0 "), Some(start));
        assert!(bytes.ends_with(b"%%EOF"));
    }

    #[test]
    fn test_offsets_exact_when_compressed() {
        let writer = PdfWriter::with_config(PdfWriterConfig::default().with_compress(true));
        let bytes = writer.encode(&two_page_document()).unwrap();
        let (_, offsets) = parse_xref(&bytes);
        assert_eq!(offsets.len(), 9);
        for (index, offset) in offsets.iter().enumerate() {
            let header = format!("{} 0 obj\n", index + 1);
            assert!(bytes[*offset..].starts_with(header.as_bytes()));
        }
    }

    #[test]
    fn test_object_count_grows_by_two_per_page() {
        for pages in 1..6 {
            let mut doc = Document::new(LayoutOptions::default());
            for _ in 1..pages {
                doc.add_page();
            }
            let (_, offsets) = parse_xref(&encode(&doc).unwrap());
            assert_eq!(offsets.len(), 5 + 2 * pages);
        }
    }
}

mod content_tests {
    use super::*;

    #[test]
    fn test_header_has_binary_comment() {
        let bytes = encode(&Document::new(LayoutOptions::default())).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.7\n%"));
        assert!(bytes[10..14].iter().all(|b| *b >= 0x80));
    }

    #[test]
    fn test_page_objects_reference_their_streams() {
        let bytes = encode(&two_page_document()).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains(
            "4 0 obj\n<< /Type /Page /MediaBox [0 0 595.28 841.89] /Resources << /Font << /F1 1 0 R /F2 2 0 R /F3 3 0 R >> >> /Contents 5 0 R /Parent 8 0 R >>"
        ));
        assert!(text.contains("/Contents 7 0 R /Parent 8 0 R >>"));
    }

    #[test]
    fn test_runs_land_on_their_pages() {
        let bytes = encode(&two_page_document()).unwrap();
        let text = String::from_utf8_lossy(&bytes);

        let first = text.find("(first page) Tj").unwrap();
        let second = text.find("(second page) Tj").unwrap();
        let page_two = text.find("6 0 obj").unwrap();
        assert!(first < page_two);
        assert!(second > page_two);
        assert!(text.contains("BT\n/F2 12 Tf\n0 0 0 rg\n50 779.89 Td\n(second page) Tj\nET\n"));
    }

    #[test]
    fn test_custom_page_size_in_media_box() {
        let doc = Document::new(LayoutOptions {
            page_size: PageSize::Letter,
            ..LayoutOptions::default()
        });
        let text = String::from_utf8_lossy(&encode(&doc).unwrap()).to_string();
        assert!(text.contains("/MediaBox [0 0 612 792]"));
    }

    #[test]
    fn test_unencodable_characters_are_dropped() {
        let mut doc = Document::new(LayoutOptions::default());
        doc.text("• naïve “quotes”");
        let text = String::from_utf8_lossy(&encode(&doc).unwrap()).to_string();
        assert!(text.contains("( nave quotes) Tj"));
    }
}
