//! Error types for document assembly and walking.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for TreeTalk operations.
pub type TalkResult<T> = Result<T, TalkError>;

/// Errors that can occur while loading or walking a dialogue tree.
///
/// Every variant is fatal: the walker never retries or repairs state.
#[derive(Debug, Error)]
pub enum TalkError {
    /// Reading or decoding a document failed.
    #[error("failed to load document: {0}")]
    DocumentLoad(String),

    /// An include names a file that does not exist.
    #[error("cannot find included document: {}", .0.display())]
    IncludeNotFound(PathBuf),

    /// An include chain leads back to a document still being resolved.
    #[error("include cycle through {}", .0.display())]
    IncludeCycle(PathBuf),

    /// The cursor names a node that is not in the document.
    #[error("failed to find node: {0}")]
    UnknownNode(String),

    /// A node is missing required fields or has an unknown type.
    #[error("malformed node {id}: {reason}")]
    MalformedNode {
        /// Identifier of the offending node.
        id: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A directive string contains no tokens at all.
    #[error("directive without arguments: {0:?}")]
    EmptyDirective(String),

    /// Reading a directory or writing to the output stream failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl TalkError {
    pub(crate) fn malformed(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedNode {
            id: id.into(),
            reason: reason.into(),
        }
    }
}
