//! Content tree to markdown conversion.
//!
//! A message body arrives as a [`ContentNode`] tree (usually scraped from rendered
//! HTML). [`transform`] flattens it into the markdown dialect the line renderer in
//! [`crate::markdown`] understands.
//!
//! # Examples
//!
//! ```
//! use convo_pdf::converters::{transform, ContentNode};
//!
//! let tree = ContentNode::element(
//!     "ul",
//!     vec![
//!         ContentNode::element("li", vec![ContentNode::text("first")]),
//!         ContentNode::element("li", vec![ContentNode::text("second")]),
//!     ],
//! );
//! assert_eq!(transform(&tree), "* first\n* second");
//! ```

pub mod markdown;
mod node;
mod table;
pub mod whitespace;

pub use markdown::transform;
pub use node::ContentNode;
pub use whitespace::{cleanup_markdown, normalize_text};
