//! Blob storage used by blob bindings.
//!
//! Paths have the form `<container>/<blob>`. [`FsBlobStore`] maps each
//! container to a directory under a root, which is enough to run the
//! blob samples locally.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

use crate::error::FunctionError;

/// Blob storage.
pub trait BlobStore: Send + Sync {
    /// Read a blob as text. `Ok(None)` when it does not exist.
    fn read(&self, path: &str) -> Result<Option<String>, FunctionError>;

    /// Create or replace a blob.
    fn write(&self, path: &str, contents: &str) -> Result<(), FunctionError>;
}

/// Split and validate a blob path.
///
/// # Errors
///
/// Returns `FunctionError::InvalidBlobPath` unless the path has a container
/// and a blob name made of plain, non-empty segments.
pub fn split_path(path: &str) -> Result<(&str, &str), FunctionError> {
    let invalid = || FunctionError::InvalidBlobPath(path.to_string());

    let (container, name) = path.split_once('/').ok_or_else(invalid)?;
    if container.is_empty() || name.is_empty() {
        return Err(invalid());
    }

    let plain = path
        .split('/')
        .all(|segment| !segment.is_empty() && segment != "." && segment != "..");
    if !plain || path.contains('\\') {
        return Err(invalid());
    }

    Ok((container, name))
}

/// Blobs as files under a root directory.
#[derive(Debug, Clone)]
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn locate(&self, path: &str) -> Result<PathBuf, FunctionError> {
        let (container, name) = split_path(path)?;
        Ok(self.root.join(container).join(name))
    }
}

impl BlobStore for FsBlobStore {
    fn read(&self, path: &str) -> Result<Option<String>, FunctionError> {
        let file = self.locate(path)?;
        debug!(blob = path, file = %file.display(), "reading blob");

        match std::fs::read_to_string(&file) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, path: &str, contents: &str) -> Result<(), FunctionError> {
        let file = self.locate(path)?;
        debug!(blob = path, bytes = contents.len(), "writing blob");

        if let Some(parent) = file.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&file, contents)?;
        Ok(())
    }
}

/// Blobs held in memory.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: Mutex<BTreeMap<String, String>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(self, path: impl Into<String>, contents: impl Into<String>) -> Self {
        if let Ok(mut blobs) = self.blobs.lock() {
            blobs.insert(path.into(), contents.into());
        }
        self
    }

    /// Current contents of a blob.
    pub fn get(&self, path: &str) -> Option<String> {
        self.blobs.lock().ok().and_then(|b| b.get(path).cloned())
    }
}

impl BlobStore for MemoryBlobStore {
    fn read(&self, path: &str) -> Result<Option<String>, FunctionError> {
        split_path(path)?;
        Ok(self.get(path))
    }

    fn write(&self, path: &str, contents: &str) -> Result<(), FunctionError> {
        split_path(path)?;
        let mut blobs = self
            .blobs
            .lock()
            .map_err(|_| std::io::Error::new(std::io::ErrorKind::Other, "blob store lock poisoned"))?;
        blobs.insert(path.to_string(), contents.to_string());
        Ok(())
    }
}
