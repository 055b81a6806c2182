//! The step loop that walks a dialogue document.

use std::collections::BTreeMap;

use tracing::debug;

use crate::config::TalkConfig;
use crate::directive::{self, Flow};
use crate::document::Document;
use crate::error::TalkResult;
use crate::loader::DocumentSource;
use crate::node::{Entry, Node};
use crate::sentinel::{NONE, QUIT};
use crate::stream::Stream;

/// Whether a walk can still make progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkState {
    /// The cursor points at the next node to visit.
    Running,
    /// A `::QUIT` was resolved.
    Terminated,
}

/// Walks a [`Document`], one node per step, through a [`Stream`].
pub struct Walker<S> {
    document: Document,
    current: String,
    state: WalkState,
    stream: S,
}

impl<S: Stream> Walker<S> {
    /// Create a walker starting at `::START`.
    pub fn new(document: Document, stream: S) -> Self {
        Self::with_start(document, stream, crate::sentinel::START)
    }

    /// Create a walker starting at `start`.
    pub fn with_start(document: Document, stream: S, start: impl Into<String>) -> Self {
        Self {
            document,
            current: start.into(),
            state: WalkState::Running,
            stream,
        }
    }

    /// Load a document, resolve its includes and build a walker for it.
    pub fn from_source(
        source: impl Into<DocumentSource>,
        stream: S,
        config: &TalkConfig,
    ) -> TalkResult<Self> {
        let document = Document::load(source, config)?;
        Ok(Self::with_start(document, stream, config.start.clone()))
    }

    /// The cursor.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// The walk state.
    pub fn state(&self) -> WalkState {
        self.state
    }

    /// The document being walked.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The stream.
    pub fn stream(&self) -> &S {
        &self.stream
    }

    /// Consume the walker and return its stream.
    pub fn into_stream(self) -> S {
        self.stream
    }

    /// Visit the node under the cursor.
    ///
    /// Does nothing once the walk has terminated.
    pub fn step(&mut self) -> TalkResult<WalkState> {
        if self.state == WalkState::Terminated {
            return Ok(self.state);
        }

        let node = self.document.node(&self.current)?;
        debug!(node = %self.current, "visiting");

        let flow = match node {
            Node::Directive { directive } => directive::resolve(&directive, &mut self.current)?,
            Node::Dialogue { lines } => self.visit_dialogue(lines)?,
            Node::Msg { text, options } => self.visit_msg(&text, &options)?,
        };

        if flow.is_terminate() {
            debug!(node = %self.current, "walk terminated");
            self.state = WalkState::Terminated;
        }
        Ok(self.state)
    }

    /// Step until the walk terminates.
    pub fn walk(&mut self) -> TalkResult<()> {
        while self.step()? == WalkState::Running {}
        Ok(())
    }

    fn visit_dialogue(&mut self, lines: Vec<Entry>) -> TalkResult<Flow> {
        for entry in lines {
            match entry {
                Entry::Text(text) => self.stream.write(&text)?,
                Entry::Directive(raw) => return directive::resolve(&raw, &mut self.current),
            }
        }
        Ok(Flow::Continue)
    }

    fn visit_msg(&mut self, text: &str, options: &BTreeMap<String, String>) -> TalkResult<Flow> {
        self.stream.write(text)?;
        let choice = self.stream.read();

        // The quit and no-op tokens are always available and take precedence
        // over authored options.
        let raw = match choice.as_str() {
            QUIT => QUIT,
            NONE => NONE,
            other => options.get(other).map_or(NONE, String::as_str),
        };
        debug!(input = %choice, directive = %raw, "option selected");
        directive::resolve(raw, &mut self.current)
    }
}
