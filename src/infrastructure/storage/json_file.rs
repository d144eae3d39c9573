//! Whole-collection JSON file persistence.
//!
//! Each collection is mirrored to a single flat JSON array file, rewritten
//! wholesale after every mutation. The in-memory map stays authoritative;
//! this is a best-effort mirror, not a transactional store.

use std::path::{Path, PathBuf};

use serde::{Serialize, de::DeserializeOwned};
use tokio::fs;

use crate::domain::RepositoryError;

/// A JSON array file holding one whole collection
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the whole collection from disk.
    ///
    /// A missing file is treated as an empty collection.
    pub async fn load<T: DeserializeOwned>(&self) -> Result<Vec<T>, RepositoryError> {
        if !fs::try_exists(&self.path).await? {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path).await?;
        let items = serde_json::from_str(&contents)?;
        Ok(items)
    }

    /// Rewrite the whole collection to disk, creating the parent directory
    /// on demand.
    pub async fn save<T: Serialize>(&self, items: &[T]) -> Result<(), RepositoryError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).await?;
        }
        let contents = serde_json::to_string_pretty(items)?;
        fs::write(&self.path, contents).await?;
        Ok(())
    }
}
