//! Recursive merging of included documents into one flat node table.
//!
//! A document may carry an `::INCLUDE` key listing further documents. Each
//! entry names either a single file (the extension is appended when missing)
//! or a directory, in which case every file with the document extension is
//! included. Included documents are resolved depth-first before being merged,
//! and keys from a later merge replace keys already present.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::config::TalkConfig;
use crate::error::{TalkError, TalkResult};
use crate::loader::{DocumentSource, RawDocument};
use crate::sentinel::INCLUDE;

/// Resolves `::INCLUDE` lists against the filesystem.
#[derive(Debug, Clone)]
pub struct IncludeResolver {
    root: PathBuf,
    extension: String,
}

impl IncludeResolver {
    /// Create a resolver for relative paths under `root` and files ending in
    /// `.<extension>`.
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
        }
    }

    /// Create a resolver from interpreter configuration.
    pub fn from_config(config: &TalkConfig) -> Self {
        Self::new(&config.include_root, &config.extension)
    }

    /// Merge every included document into `doc`.
    ///
    /// A document without an `::INCLUDE` key is returned unchanged. The
    /// `::INCLUDE` key itself stays in the result.
    pub fn resolve(&self, doc: RawDocument) -> TalkResult<RawDocument> {
        self.resolve_chain(doc, &mut Vec::new())
    }

    /// Like [`resolve`](Self::resolve), for a document that was loaded from
    /// `origin`, so that an include leading back to it counts as a cycle.
    pub fn resolve_from(&self, doc: RawDocument, origin: &Path) -> TalkResult<RawDocument> {
        let mut chain = Vec::new();
        if let Ok(origin) = fs::canonicalize(origin) {
            chain.push(origin);
        }
        self.resolve_chain(doc, &mut chain)
    }

    fn resolve_chain(&self, doc: RawDocument, chain: &mut Vec<PathBuf>) -> TalkResult<RawDocument> {
        let Some(includes) = doc.get(INCLUDE) else {
            return Ok(doc);
        };
        let includes = include_list(includes)?;

        includes
            .iter()
            .try_fold(doc, |acc, inclusion| self.include_entry(acc, inclusion, chain))
    }

    fn include_entry(
        &self,
        acc: RawDocument,
        inclusion: &str,
        chain: &mut Vec<PathBuf>,
    ) -> TalkResult<RawDocument> {
        let path = self.root.join(inclusion);

        if path.is_dir() {
            let mut files = Vec::new();
            for entry in fs::read_dir(&path)? {
                let entry = entry?;
                if self.has_extension(&entry.file_name().to_string_lossy()) {
                    files.push(entry.path());
                }
            }
            // Sort for deterministic ordering
            files.sort();

            return files
                .iter()
                .try_fold(acc, |acc, file| self.include_file(acc, file, chain));
        }

        let path = if self.has_extension(inclusion) {
            path
        } else {
            self.root.join(format!("{inclusion}.{}", self.extension))
        };
        self.include_file(acc, &path, chain)
    }

    fn include_file(
        &self,
        acc: RawDocument,
        path: &Path,
        chain: &mut Vec<PathBuf>,
    ) -> TalkResult<RawDocument> {
        if !path.is_file() {
            return Err(TalkError::IncludeNotFound(path.to_path_buf()));
        }

        let canonical = fs::canonicalize(path)?;
        if chain.contains(&canonical) {
            return Err(TalkError::IncludeCycle(path.to_path_buf()));
        }

        debug!(path = %path.display(), "including document");
        let included = DocumentSource::Path(path.to_path_buf()).load()?;

        chain.push(canonical);
        let included = self.resolve_chain(included, chain);
        chain.pop();

        Ok(merge(acc, included?))
    }

    fn has_extension(&self, name: &str) -> bool {
        name.strip_suffix(self.extension.as_str())
            .is_some_and(|stem| stem.ends_with('.'))
    }
}

impl Default for IncludeResolver {
    fn default() -> Self {
        Self::from_config(&TalkConfig::default())
    }
}

/// Merge `later` over `acc`; keys from `later` win.
fn merge(mut acc: RawDocument, later: RawDocument) -> RawDocument {
    acc.extend(later);
    acc
}

fn include_list(value: &Value) -> TalkResult<Vec<String>> {
    let Value::Array(items) = value else {
        return Err(TalkError::malformed(INCLUDE, "expected a list of paths"));
    };

    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| TalkError::malformed(INCLUDE, format!("not a path: {item}")))
        })
        .collect()
}
