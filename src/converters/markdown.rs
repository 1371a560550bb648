//! Content tree to markdown.
//!
//! Walks a [`ContentNode`] depth-first and emits markdown for the element kinds a chat
//! message is made of. Tags are matched case-insensitively and accept both HTML names
//! (`strong`, `pre`) and descriptive names (`bold`, `code-block`). Unknown tags are
//! transparent: their children are emitted without a wrapper.

use super::node::ContentNode;
use super::table::format_table;
use super::whitespace::{cleanup_markdown, normalize_text};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for a `language-xxx` class token on code elements
    static ref RE_LANGUAGE_CLASS: Regex = Regex::new(r"language-(\w+)").unwrap();
}

const CODE_TAGS: &[&str] = &["code", "inline-code"];
const LIST_ITEM_TAGS: &[&str] = &["li", "list-item"];

/// What an element turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ElementKind {
    Paragraph,
    InlineCode,
    CodeBlock,
    Bold,
    Italic,
    OrderedList,
    UnorderedList,
    Blockquote,
    Link,
    Image,
    Rule,
    LineBreak,
    Heading(usize),
    Table,
    /// Non-content elements such as scripts
    Hidden,
    Unknown,
}

fn element_kind(node: &ContentNode, tag: &str) -> ElementKind {
    match tag {
        "p" | "paragraph" => ElementKind::Paragraph,
        "code" | "inline-code" => ElementKind::InlineCode,
        "pre" | "code-block" => ElementKind::CodeBlock,
        "b" | "strong" | "bold" => ElementKind::Bold,
        "i" | "em" | "italic" | "emphasis" => ElementKind::Italic,
        "ol" | "ordered-list" => ElementKind::OrderedList,
        "ul" | "unordered-list" => ElementKind::UnorderedList,
        "blockquote" => ElementKind::Blockquote,
        "a" | "link" => ElementKind::Link,
        "img" | "image" => ElementKind::Image,
        "hr" | "horizontal-rule" => ElementKind::Rule,
        "br" | "line-break" => ElementKind::LineBreak,
        "h1" => ElementKind::Heading(1),
        "h2" => ElementKind::Heading(2),
        "h3" => ElementKind::Heading(3),
        "h4" => ElementKind::Heading(4),
        "h5" => ElementKind::Heading(5),
        "h6" => ElementKind::Heading(6),
        "heading" => {
            let level = node
                .attribute("level")
                .and_then(|l| l.trim().parse::<usize>().ok())
                .unwrap_or(1)
                .clamp(1, 6);
            ElementKind::Heading(level)
        },
        "table" => ElementKind::Table,
        "script" | "style" | "noscript" | "template" => ElementKind::Hidden,
        _ => ElementKind::Unknown,
    }
}

/// Convert a content tree to markdown.
///
/// The root is converted like any other node, then the result is trimmed and runs of
/// blank lines are capped at one.
///
/// # Examples
///
/// ```
/// use convo_pdf::converters::{transform, ContentNode};
///
/// let tree = ContentNode::element(
///     "div",
///     vec![
///         ContentNode::element("h1", vec![ContentNode::text("Title")]),
///         ContentNode::element("p", vec![ContentNode::text("Body text")]),
///     ],
/// );
/// assert_eq!(transform(&tree), "# Title\n\nBody text");
/// ```
pub fn transform(node: &ContentNode) -> String {
    cleanup_markdown(&convert_node(node))
}

fn convert_node(node: &ContentNode) -> String {
    match node {
        ContentNode::Text { value } => normalize_text(value),
        ContentNode::Element { tag, .. } => convert_element(node, &tag.to_ascii_lowercase()),
    }
}

/// Converted children of `node`, cleaned up as a unit.
fn convert_children(node: &ContentNode) -> String {
    let mut out = String::new();
    for child in node.children() {
        out.push_str(&convert_node(child));
    }
    cleanup_markdown(&out)
}

fn convert_element(node: &ContentNode, tag: &str) -> String {
    match element_kind(node, tag) {
        ElementKind::Hidden => String::new(),
        ElementKind::CodeBlock => format_code_block(node),
        ElementKind::Image => format!(
            "![{}]({})",
            node.attribute("alt").unwrap_or(""),
            node.attribute("src").unwrap_or("")
        ),
        ElementKind::Rule => "\n---\n\n".to_string(),
        ElementKind::LineBreak => "  \n".to_string(),
        ElementKind::OrderedList => format_list(node, |n| format!("{}. ", n)),
        ElementKind::UnorderedList => format_list(node, |_| "* ".to_string()),
        ElementKind::Table => format_table(node, convert_children) + "\n\n",
        ElementKind::Paragraph => convert_children(node) + "\n\n",
        ElementKind::InlineCode => format!("`{}`", convert_children(node)),
        ElementKind::Bold => format!("**{}**", convert_children(node)),
        ElementKind::Italic => format!("*{}*", convert_children(node)),
        ElementKind::Link => format!(
            "[{}]({})",
            convert_children(node),
            node.attribute("href").unwrap_or("")
        ),
        ElementKind::Heading(level) => {
            format!("{} {}\n\n", "#".repeat(level), convert_children(node))
        },
        ElementKind::Blockquote => {
            let content = convert_children(node);
            let lines: Vec<&str> = content
                .split('\n')
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .collect();
            format!("> {}\n\n", lines.join("\n> "))
        },
        ElementKind::Unknown => {
            log::trace!("Unsupported tag <{}>, emitting children", tag);
            convert_children(node)
        },
    }
}

/// Fenced code block from the verbatim text of the block.
///
/// The text comes from the first code descendant when there is one, so markup inside
/// the block never reaches the output.
fn format_code_block(node: &ContentNode) -> String {
    let code = node.find_descendant(CODE_TAGS);
    let language = code
        .and_then(language_of)
        .or_else(|| language_of(node))
        .or_else(|| node.attribute("language").or_else(|| node.attribute("lang")))
        .unwrap_or("");
    let text = code.unwrap_or(node).text_content();

    format!("\n```{}\n{}\n```\n\n", language, text.trim())
}

fn language_of(node: &ContentNode) -> Option<&str> {
    let class = node.attribute("class")?;
    RE_LANGUAGE_CLASS
        .captures(class)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// List items prefixed by `marker(n)`, where `n` is the 1-based position among the
/// list's element children. Children that are not list items are skipped.
fn format_list<F>(node: &ContentNode, marker: F) -> String
where
    F: Fn(usize) -> String,
{
    let mut out = String::from("\n");
    let elements = node
        .children()
        .iter()
        .filter(|c| matches!(c, ContentNode::Element { .. }));
    for (index, item) in elements.enumerate() {
        if item.is_one_of(LIST_ITEM_TAGS) {
            out.push_str(&marker(index + 1));
            out.push_str(convert_children(item).trim());
            out.push('\n');
        }
    }
    out.push('\n');
    out
}
