//! Export entry points: content tree, markdown or conversation in, PDF bytes out.

use super::conversation::{Conversation, Role};
use crate::config::ExportConfig;
use crate::converters::{transform, ContentNode};
use crate::error::{Error, Result};
use crate::layout::{Color, Document, FontFamily, Page};
use crate::markdown::{split_blocks, BODY_SIZE};
use chrono::{DateTime, Local, SecondsFormat, Utc};
use std::path::{Path, PathBuf};

/// An encoded PDF and the file name it should be saved under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    /// The PDF file contents
    pub bytes: Vec<u8>,
    /// Suggested file name, `<product>-Conversation-<timestamp>.pdf`
    pub file_name: String,
}

impl Export {
    /// Write the PDF into `dir` under [`Export::file_name`] and return the full path.
    pub fn save_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let path = dir.as_ref().join(&self.file_name);
        std::fs::write(&path, &self.bytes)?;
        log::info!("Wrote {} ({} bytes)", path.display(), self.bytes.len());
        Ok(path)
    }
}

/// File name for an export made at `at`.
///
/// The timestamp is the UTC time with millisecond precision, with `:` and `.`
/// replaced by `-` so it is safe on every file system.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use convo_pdf::api::file_name_for;
///
/// let at = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
/// assert_eq!(
///     file_name_for("ChatGPT", at),
///     "ChatGPT-Conversation-2024-03-09T14-05-07-000Z.pdf"
/// );
/// ```
pub fn file_name_for(product: &str, at: DateTime<Utc>) -> String {
    let stamp = at
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    format!("{}-Conversation-{}.pdf", product, stamp)
}

/// Export a content tree.
pub fn export_tree(node: &ContentNode, config: &ExportConfig) -> Result<Export> {
    export_tree_at(node, config, Utc::now())
}

/// Export a content tree as of `at`.
pub fn export_tree_at(
    node: &ContentNode,
    config: &ExportConfig,
    at: DateTime<Utc>,
) -> Result<Export> {
    let markdown = transform(node);
    log::debug!("Content tree converted to {} bytes of markdown", markdown.len());
    export_markdown_at(&markdown, config, at)
}

/// Export a markdown string.
pub fn export_markdown(markdown: &str, config: &ExportConfig) -> Result<Export> {
    export_markdown_at(markdown, config, Utc::now())
}

/// Export a markdown string as of `at`.
pub fn export_markdown_at(
    markdown: &str,
    config: &ExportConfig,
    at: DateTime<Utc>,
) -> Result<Export> {
    if markdown.trim().is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut doc = Document::new(config.layout_options());
    doc.render_markdown_block(markdown);
    finish(doc, config, at)
}

/// Export a conversation.
pub fn export_conversation(conversation: &Conversation, config: &ExportConfig) -> Result<Export> {
    export_conversation_at(conversation, config, Utc::now())
}

/// Export a conversation as of `at`.
///
/// The document opens with a title line and an "Exported on" line in local time. Each
/// message gets a colored speaker label, then its body rendered block by block.
/// Messages with an empty body are skipped; if none remain the export fails with
/// [`Error::EmptyInput`].
pub fn export_conversation_at(
    conversation: &Conversation,
    config: &ExportConfig,
    at: DateTime<Utc>,
) -> Result<Export> {
    let mut doc = Document::new(config.layout_options());
    let exported_on = at.with_timezone(&Local).format("%-m/%-d/%Y, %-I:%M:%S %p");

    doc.set_font(FontFamily::Regular)
        .set_font_size(14.0)
        .text(&format!("Conversation exported using {}", config.product))
        .move_down(1.0);
    doc.set_font_size(10.0)
        .text(&format!("Exported on: {}", exported_on))
        .move_down(1.0);

    let mut rendered = 0;
    for (index, message) in conversation.messages.iter().enumerate() {
        let blocks = split_blocks(&message.body.to_markdown());
        if blocks.is_empty() {
            log::debug!("Skipping message {}: empty body", index + 1);
            continue;
        }

        let role = message.role_at(index);
        let (label, color) = match role {
            Role::User => ("You:".to_string(), Color::rgb8(0x44, 0x44, 0x44)),
            Role::Assistant => (
                format!("{}:", config.assistant_label),
                Color::rgb8(0x10, 0xa3, 0x7f),
            ),
        };
        log::trace!("Message {} ({:?}): {} blocks", index + 1, role, blocks.len());

        doc.set_font(FontFamily::Bold)
            .set_font_size(12.0)
            .set_fill_color(color)
            .text(&label)
            .move_down(0.5);
        doc.set_font(FontFamily::Regular)
            .set_font_size(BODY_SIZE)
            .set_fill_color(Color::black());

        for (i, block) in blocks.iter().enumerate() {
            if i > 0 {
                doc.move_down(0.5);
            }
            doc.render_markdown_block(block);
        }
        doc.move_down(1.5);
        rendered += 1;
    }

    if rendered == 0 {
        return Err(Error::EmptyInput);
    }
    log::debug!("Rendered {} of {} messages", rendered, conversation.messages.len());

    finish(doc, config, at)
}

fn finish(doc: Document, config: &ExportConfig, at: DateTime<Utc>) -> Result<Export> {
    if doc.pages().iter().all(Page::is_empty) {
        return Err(Error::EmptyInput);
    }

    let page_count = doc.pages().len();
    let bytes = doc.finalize_with(&config.writer_config())?;
    let file_name = file_name_for(&config.product, at);
    log::debug!("Exported {} pages as {}", page_count, file_name);

    Ok(Export { bytes, file_name })
}
