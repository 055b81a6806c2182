//! Document assembly and graph-walking interpreter for TreeTalk.
//!
//! A TreeTalk document maps node identifiers to nodes. Dialogue nodes show
//! lines of text, message nodes prompt for a choice, and directive nodes move
//! the cursor (`::GOTO <id>`) or end the walk (`::QUIT`). Documents can pull in
//! other documents through an `::INCLUDE` list, which is flattened into one
//! node table before walking starts.

/// Interpreter configuration.
pub mod config;
/// Directive parsing and dispatch.
pub mod directive;
/// The flattened node table.
pub mod document;
/// Error types.
pub mod error;
/// Include resolution.
pub mod include;
/// Document loading.
pub mod loader;
/// Node classification.
pub mod node;
/// Reserved vocabulary.
pub mod sentinel;
/// The user-facing stream boundary.
pub mod stream;
/// The step loop.
pub mod walker;

pub use config::TalkConfig;
pub use directive::{Directive, Flow};
pub use document::Document;
pub use error::{TalkError, TalkResult};
pub use include::IncludeResolver;
pub use loader::{DocumentSource, RawDocument, load};
pub use node::{Entry, Node, is_directive};
pub use stream::{ConsoleStream, RepeatFilter, ScriptedStream, Stream};
pub use walker::{WalkState, Walker};
