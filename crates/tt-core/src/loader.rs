//! Turning a path, literal text or open handle into a raw document tree.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{TalkError, TalkResult};

/// A decoded but unresolved document: node identifier to raw entry.
pub type RawDocument = Map<String, Value>;

/// Where a document comes from.
pub enum DocumentSource {
    /// A file on disk.
    Path(PathBuf),
    /// Literal document text.
    Text(String),
    /// An already open, readable handle.
    Reader(Box<dyn Read>),
}

impl DocumentSource {
    /// Wrap an open handle.
    pub fn reader(reader: impl Read + 'static) -> Self {
        Self::Reader(Box::new(reader))
    }

    /// Read and decode the source.
    ///
    /// Any read or decode failure is reported as [`TalkError::DocumentLoad`].
    pub fn load(self) -> TalkResult<RawDocument> {
        let value = match self {
            Self::Path(path) => {
                let file = File::open(&path).map_err(|e| {
                    TalkError::DocumentLoad(format!("{}: {e}", path.display()))
                })?;
                serde_json::from_reader(BufReader::new(file)).map_err(|e| {
                    TalkError::DocumentLoad(format!("{}: {e}", path.display()))
                })?
            }
            Self::Text(text) => {
                serde_json::from_str(&text).map_err(|e| TalkError::DocumentLoad(e.to_string()))?
            }
            Self::Reader(reader) => serde_json::from_reader(BufReader::new(reader))
                .map_err(|e| TalkError::DocumentLoad(e.to_string()))?,
        };

        match value {
            Value::Object(map) => Ok(map),
            other => Err(TalkError::DocumentLoad(format!(
                "document root must be an object, found {}",
                kind_name(&other)
            ))),
        }
    }
}

/// A string is taken as a path when it names an existing file, and as
/// literal document text otherwise.
impl From<&str> for DocumentSource {
    fn from(something: &str) -> Self {
        if Path::new(something).is_file() {
            Self::Path(PathBuf::from(something))
        } else {
            Self::Text(something.to_string())
        }
    }
}

impl From<String> for DocumentSource {
    fn from(something: String) -> Self {
        if Path::new(&something).is_file() {
            Self::Path(PathBuf::from(something))
        } else {
            Self::Text(something)
        }
    }
}

impl From<&Path> for DocumentSource {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl From<PathBuf> for DocumentSource {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

/// Load a document from anything convertible into a [`DocumentSource`].
pub fn load(source: impl Into<DocumentSource>) -> TalkResult<RawDocument> {
    source.into().load()
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
