//! The content tree fed to the transformer.

use std::collections::HashMap;

/// A node of a hierarchical content tree.
///
/// Deserializes from JSON as either `{"text": "..."}` or
/// `{"tag": "p", "attributes": {...}, "children": [...]}`; `attributes` and
/// `children` may be omitted.
///
/// ```
/// use convo_pdf::converters::ContentNode;
///
/// let node: ContentNode =
///     serde_json::from_str(r#"{"tag": "p", "children": [{"text": "hi"}]}"#).unwrap();
/// assert_eq!(node, ContentNode::element("p", vec![ContentNode::text("hi")]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum ContentNode {
    /// An element with a tag name, attributes and ordered children
    Element {
        /// Tag name, matched case-insensitively
        tag: String,
        /// Attributes such as `href`, `src`, `class`
        #[serde(default)]
        attributes: HashMap<String, String>,
        /// Children in document order
        #[serde(default)]
        children: Vec<ContentNode>,
    },
    /// A text leaf
    Text {
        /// The text content
        #[serde(rename = "text")]
        value: String,
    },
}

impl ContentNode {
    /// Create a text node.
    pub fn text(value: impl Into<String>) -> Self {
        ContentNode::Text {
            value: value.into(),
        }
    }

    /// Create an element without attributes.
    pub fn element(tag: impl Into<String>, children: Vec<ContentNode>) -> Self {
        ContentNode::Element {
            tag: tag.into(),
            attributes: HashMap::new(),
            children,
        }
    }

    /// Add an attribute. Has no effect on text nodes.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let ContentNode::Element { attributes, .. } = &mut self {
            attributes.insert(name.into(), value.into());
        }
        self
    }

    /// Lowercased tag name, or `None` for text nodes.
    pub fn tag(&self) -> Option<String> {
        match self {
            ContentNode::Element { tag, .. } => Some(tag.to_ascii_lowercase()),
            ContentNode::Text { .. } => None,
        }
    }

    /// Attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        match self {
            ContentNode::Element { attributes, .. } => attributes.get(name).map(String::as_str),
            ContentNode::Text { .. } => None,
        }
    }

    /// Children in document order (empty for text nodes).
    pub fn children(&self) -> &[ContentNode] {
        match self {
            ContentNode::Element { children, .. } => children,
            ContentNode::Text { .. } => &[],
        }
    }

    /// True if this is an element whose tag is one of `tags`.
    pub fn is_one_of(&self, tags: &[&str]) -> bool {
        match self {
            ContentNode::Element { tag, .. } => tags.iter().any(|t| tag.eq_ignore_ascii_case(t)),
            ContentNode::Text { .. } => false,
        }
    }

    /// Concatenated raw text of this node and all descendants, unnormalized.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            ContentNode::Text { value } => out.push_str(value),
            ContentNode::Element { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            },
        }
    }

    /// First descendant (depth-first, excluding self) whose tag is one of `tags`.
    pub fn find_descendant(&self, tags: &[&str]) -> Option<&ContentNode> {
        self.children().iter().find_map(|child| {
            if child.is_one_of(tags) {
                Some(child)
            } else {
                child.find_descendant(tags)
            }
        })
    }
}
