//! Error types for the export pipeline.
//!
//! Only structural problems with the input surface as errors. Unknown content-tree
//! nodes and characters the output encoding cannot carry are absorbed where they occur.

/// Result type alias for export operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while exporting a document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The content tree or markdown contains no paintable text.
    #[error("Nothing to export: input contains no paintable text")]
    EmptyInput,

    /// A color string that is not `#rrggbb`.
    #[error("Invalid color: expected '#rrggbb', found '{0}'")]
    InvalidColor(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON input (content tree, conversation or config)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
