//! Integration tests for the export pipeline: tree, markdown and conversation exports.

use chrono::{TimeZone, Utc};
use convo_pdf::api::{
    export_conversation, export_conversation_at, export_markdown, export_tree, file_name_for,
    Conversation, Message, Role,
};
use convo_pdf::config::ExportConfig;
use convo_pdf::converters::ContentNode;
use convo_pdf::layout::{Document, FontFamily, LayoutOptions};
use convo_pdf::Error;
use tempfile::tempdir;

fn pdf_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).to_string()
}

mod export_tests {
    use super::*;

    #[test]
    fn test_tree_export() {
        let tree = ContentNode::element(
            "div",
            vec![
                ContentNode::element("h1", vec![ContentNode::text("Report")]),
                ContentNode::element("p", vec![ContentNode::text("All good.")]),
            ],
        );
        let export = export_tree(&tree, &ExportConfig::default()).unwrap();
        let text = pdf_text(&export.bytes);

        // h1 is bold at 16pt, the paragraph regular at 11pt
        assert!(text.contains("/F2 16 Tf\n0 0 0 rg\n50 775.89 Td\n(Report) Tj"));
        assert!(text.contains("/F1 11 Tf"));
        assert!(text.contains("(All good.) Tj"));
    }

    #[test]
    fn test_code_block_uses_courier() {
        let export =
            export_markdown("```rust\nfn main() {}\n```", &ExportConfig::default()).unwrap();
        let text = pdf_text(&export.bytes);
        assert!(text.contains("/F3 10 Tf\n0.2 0.2 0.2 rg\n"));
        assert!(text.contains("(fn main\\(\\) {}) Tj"));
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let config = ExportConfig::default();
        assert!(matches!(export_markdown("", &config), Err(Error::EmptyInput)));
        assert!(matches!(
            export_tree(
                &ContentNode::element("script", vec![ContentNode::text("x()")]),
                &config
            ),
            Err(Error::EmptyInput)
        ));
        assert!(matches!(
            export_conversation(&Conversation::default(), &config),
            Err(Error::EmptyInput)
        ));
    }

    #[test]
    fn test_invalid_page_size_from_json_exports_on_a4() {
        let config: ExportConfig =
            serde_json::from_str(r#"{"page_size": {"Custom": [-100.0, 800.0]}}"#).unwrap();
        let export = export_markdown("hello", &config).unwrap();
        let text = pdf_text(&export.bytes);
        assert!(text.contains("/MediaBox [0 0 595.28 841.89]"));
        assert!(text.contains("(hello) Tj"));
    }

    #[test]
    fn test_long_markdown_paginates() {
        let markdown: Vec<String> = (0..150).map(|i| format!("Paragraph number {}", i)).collect();
        let export = export_markdown(&markdown.join("\n"), &ExportConfig::default()).unwrap();
        let text = pdf_text(&export.bytes);
        assert!(!text.contains("/Count 1 >>"));
        assert!(text.contains("(Paragraph number 149) Tj"));
    }
}

mod conversation_tests {
    use super::*;

    fn sample() -> Conversation {
        Conversation::new(vec![
            Message::user("What does `?` do?"),
            Message::from_tree(
                None,
                ContentNode::element(
                    "div",
                    vec![
                        ContentNode::element(
                            "p",
                            vec![
                                ContentNode::text("It "),
                                ContentNode::element("b", vec![ContentNode::text("propagates")]),
                                ContentNode::text(" errors."),
                            ],
                        ),
                        ContentNode::element(
                            "ul",
                            vec![ContentNode::element(
                                "li",
                                vec![ContentNode::text("Works on Result")],
                            )],
                        ),
                    ],
                ),
            ),
        ])
    }

    #[test]
    fn test_conversation_layout() {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let export = export_conversation_at(&sample(), &ExportConfig::default(), at).unwrap();
        let text = pdf_text(&export.bytes);

        assert!(text.contains("/F1 14 Tf\n0 0 0 rg\n50 777.89 Td\n(Conversation exported using ChatGPT) Tj"));
        assert!(text.contains("(You:) Tj"));
        assert!(text.contains("(What does `?` do?) Tj"));
        // The second message has no role and alternates to the assistant
        assert!(text.contains("(ChatGPT:) Tj"));
        assert!(text.contains("(propagates) Tj"));
        assert!(text.contains("( Works on Result) Tj"));
        assert_eq!(export.file_name, "ChatGPT-Conversation-2024-06-01T12-00-00-000Z.pdf");

        let you = text.find("(You:) Tj").unwrap();
        let assistant = text.find("(ChatGPT:) Tj").unwrap();
        assert!(you < assistant);
    }

    #[test]
    fn test_conversation_from_json() {
        let json = r#"{"messages": [
            {"role": "assistant", "body": "Hello!"},
            {"role": "assistant", "body": "Anything else?"}
        ]}"#;
        let conversation: Conversation = serde_json::from_str(json).unwrap();
        assert_eq!(conversation.messages[0].role_at(0), Role::Assistant);

        let export = export_conversation(&conversation, &ExportConfig::default()).unwrap();
        let text = pdf_text(&export.bytes);
        assert_eq!(text.matches("(ChatGPT:) Tj").count(), 2);
        assert!(!text.contains("(You:) Tj"));
    }

    #[test]
    fn test_blocks_inside_fences_stay_together() {
        let conversation = Conversation::new(vec![Message::assistant(
            "Code:\n\n```\nline one\n\nline three\n```",
        )]);
        let export = export_conversation(&conversation, &ExportConfig::default()).unwrap();
        let text = pdf_text(&export.bytes);
        // Both code lines are painted in Courier
        assert!(text.contains("/F3 10 Tf\n0.2 0.2 0.2 rg\n50"));
        let courier_runs = text.matches("/F3 10 Tf").count();
        assert_eq!(courier_runs, 2);
    }
}

mod file_tests {
    use super::*;

    #[test]
    fn test_file_name_format() {
        let at = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(
            file_name_for("SnapGPT", at),
            "SnapGPT-Conversation-2023-12-31T23-59-59-000Z.pdf"
        );
    }

    #[test]
    fn test_save_creates_pdf_file() {
        let dir = tempdir().unwrap();
        let config = ExportConfig::default().with_compress(true);
        let export = export_markdown("Saved to **disk**", &config).unwrap();

        let path = export.save_to(dir.path()).unwrap();
        assert!(path.exists());
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.7"));
        assert!(pdf_text(&bytes).contains("/Filter /FlateDecode"));
    }

    #[test]
    fn test_document_finalize_matches_export() {
        let mut doc = Document::new(LayoutOptions::default());
        doc.set_font(FontFamily::Regular).set_font_size(11.0);
        doc.render_markdown_block("Same **content**");
        let direct = doc.finalize().unwrap();

        let export = export_markdown("Same **content**", &ExportConfig::default()).unwrap();
        assert_eq!(direct, export.bytes);
    }
}
