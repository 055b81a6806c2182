//! Interpreter configuration.

use std::path::PathBuf;

use crate::sentinel;

/// Configuration for building a [`Walker`](crate::Walker).
#[derive(Debug, Clone)]
pub struct TalkConfig {
    /// Node identifier the cursor starts on.
    pub start: String,
    /// File extension (without the dot) of document files.
    pub extension: String,
    /// Directory that relative include paths are resolved against.
    pub include_root: PathBuf,
}

impl Default for TalkConfig {
    fn default() -> Self {
        Self {
            start: sentinel::START.to_string(),
            extension: sentinel::EXTENSION.to_string(),
            include_root: PathBuf::from("."),
        }
    }
}

impl TalkConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the start node.
    pub fn with_start(mut self, start: impl Into<String>) -> Self {
        self.start = start.into();
        self
    }

    /// Set the document file extension.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Set the directory relative includes are resolved against.
    pub fn with_include_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.include_root = root.into();
        self
    }
}
