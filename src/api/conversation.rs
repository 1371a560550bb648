//! Conversation input model.

use crate::converters::{transform, ContentNode};

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The person asking
    User,
    /// The model answering
    Assistant,
}

impl Role {
    /// Role guessed from position: even indices are the user, odd the assistant.
    ///
    /// For transcripts that carry no role metadata and strictly alternate, starting
    /// with the user.
    pub fn alternating(index: usize) -> Self {
        if index % 2 == 0 {
            Role::User
        } else {
            Role::Assistant
        }
    }
}

/// A message body, either as a content tree or as ready markdown.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum MessageBody {
    /// Markdown text, rendered as is
    Markdown(String),
    /// Content tree, converted to markdown first
    Tree(ContentNode),
}

impl MessageBody {
    /// The body as markdown.
    pub fn to_markdown(&self) -> String {
        match self {
            MessageBody::Markdown(text) => text.clone(),
            MessageBody::Tree(node) => transform(node),
        }
    }
}

/// One turn of a conversation.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Message {
    /// Author, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// Content
    pub body: MessageBody,
}

impl Message {
    /// A user message with a markdown body.
    pub fn user(markdown: impl Into<String>) -> Self {
        Self {
            role: Some(Role::User),
            body: MessageBody::Markdown(markdown.into()),
        }
    }

    /// An assistant message with a markdown body.
    pub fn assistant(markdown: impl Into<String>) -> Self {
        Self {
            role: Some(Role::Assistant),
            body: MessageBody::Markdown(markdown.into()),
        }
    }

    /// A message whose body is a content tree.
    pub fn from_tree(role: Option<Role>, tree: ContentNode) -> Self {
        Self {
            role,
            body: MessageBody::Tree(tree),
        }
    }

    /// The explicit role, falling back to [`Role::alternating`] at `index`.
    pub fn role_at(&self, index: usize) -> Role {
        self.role.unwrap_or_else(|| Role::alternating(index))
    }
}

/// An ordered list of messages.
///
/// ```
/// use convo_pdf::api::{Conversation, Role};
///
/// let json = r#"{"messages": [
///     {"role": "user", "body": "What is **Rust**?"},
///     {"body": {"tag": "p", "children": [{"text": "A language."}]}}
/// ]}"#;
/// let conversation: Conversation = serde_json::from_str(json).unwrap();
/// assert_eq!(conversation.messages[1].role_at(1), Role::Assistant);
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Conversation {
    /// Messages in order
    pub messages: Vec<Message>,
}

impl Conversation {
    /// Create a conversation from messages.
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }
}
