//! The flattened, read-only node table.

use serde_json::Value;

use crate::config::TalkConfig;
use crate::error::{TalkError, TalkResult};
use crate::include::IncludeResolver;
use crate::loader::{DocumentSource, RawDocument};
use crate::node::Node;

/// A fully merged document: node identifier to raw node entry.
///
/// Nodes are classified lazily on lookup, so a malformed node only fails
/// when it is visited.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    nodes: RawDocument,
}

impl Document {
    /// Wrap an already resolved node table.
    pub fn new(nodes: RawDocument) -> Self {
        Self { nodes }
    }

    /// Load a document and resolve its includes.
    pub fn load(source: impl Into<DocumentSource>, config: &TalkConfig) -> TalkResult<Self> {
        let resolver = IncludeResolver::from_config(config);
        let source = source.into();
        let origin = match &source {
            DocumentSource::Path(path) => Some(path.clone()),
            _ => None,
        };

        let raw = source.load()?;
        let nodes = match origin {
            Some(origin) => resolver.resolve_from(raw, &origin)?,
            None => resolver.resolve(raw)?,
        };
        Ok(Self { nodes })
    }

    /// Whether a node with this identifier exists.
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Raw entry for a node.
    pub fn raw(&self, id: &str) -> Option<&Value> {
        self.nodes.get(id)
    }

    /// Look up and classify a node.
    pub fn node(&self, id: &str) -> TalkResult<Node> {
        let raw = self
            .nodes
            .get(id)
            .ok_or_else(|| TalkError::UnknownNode(id.to_string()))?;
        Node::classify(id, raw)
    }

    /// All identifiers, including reserved keys.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the document has no entries.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
