//! High-level export API.
//!
//! Turns a content tree, a markdown string or a whole conversation into a PDF and a
//! file name to save it under.
//!
//! ## Quick Start
//!
//! ```
//! use convo_pdf::api::{export_conversation, Conversation, Message};
//! use convo_pdf::config::ExportConfig;
//!
//! let conversation = Conversation::new(vec![
//!     Message::user("How do I reverse a `Vec`?"),
//!     Message::assistant("Call `reverse`:\n\n```rust\nv.reverse();\n```"),
//! ]);
//!
//! let export = export_conversation(&conversation, &ExportConfig::default()).unwrap();
//! assert!(export.bytes.starts_with(b"%PDF-"));
//! assert!(export.file_name.ends_with(".pdf"));
//! ```

mod conversation;
mod exporter;

pub use conversation::{Conversation, Message, MessageBody, Role};
pub use exporter::{
    export_conversation, export_conversation_at, export_markdown, export_markdown_at,
    export_tree, export_tree_at, file_name_for, Export,
};
