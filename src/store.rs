//! Flat-file JSON document store for experiment artifacts.
//!
//! Stores serializable documents (corpora, configurations, fitted
//! vocabularies) as one JSON file per document under
//! `<root>/<kind>/<name>.json`. Lookups are by kind and name; listing a
//! kind walks its directory. There is no indexing beyond the filesystem.

use crate::error::{PerfilarError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// One-directory-per-kind JSON document store.
///
/// # Examples
///
/// ```no_run
/// use perfilar::store::DocumentStore;
/// use perfilar::features::FeaturizerConfig;
///
/// let store = DocumentStore::open("run_artifacts").unwrap();
/// let config = FeaturizerConfig::with_features(&["simple_stats"]);
/// store.save("config", "baseline", &config).unwrap();
/// let loaded: FeaturizerConfig = store.fetch("config", "baseline").unwrap();
/// assert_eq!(loaded.features, config.features);
/// ```
#[derive(Debug, Clone)]
pub struct DocumentStore {
    root: PathBuf,
}

impl DocumentStore {
    /// Opens a store rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the root cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Root directory of the store.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, kind: &str, name: &str) -> PathBuf {
        self.root.join(kind).join(format!("{name}.json"))
    }

    /// Saves a document, overwriting any previous one of the same kind and
    /// name. Returns the written path.
    ///
    /// # Errors
    ///
    /// Returns an error on serialization or I/O failure.
    pub fn save<T: Serialize>(&self, kind: &str, name: &str, document: &T) -> Result<PathBuf> {
        let path = self.path_for(kind, name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(document)
            .map_err(|e| PerfilarError::Other(format!("serialize {kind}/{name}: {e}")))?;
        fs::write(&path, json)?;
        Ok(path)
    }

    /// Fetches the document of the given kind and name.
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not exist or fails to parse.
    pub fn fetch<T: DeserializeOwned>(&self, kind: &str, name: &str) -> Result<T> {
        let path = self.path_for(kind, name);
        if !path.exists() {
            return Err(PerfilarError::Other(format!(
                "document {kind}/{name} does not exist"
            )));
        }
        let json = fs::read_to_string(&path)?;
        serde_json::from_str(&json)
            .map_err(|e| PerfilarError::Other(format!("parse {kind}/{name}: {e}")))
    }

    /// Names of every stored document of the given kind, sorted.
    ///
    /// An unknown kind is an empty listing, not an error.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the kind directory cannot be read.
    pub fn list_all(&self, kind: &str) -> Result<Vec<String>> {
        let dir = self.root.join(kind);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    /// Removes a document. Removing a missing document is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if removal fails.
    pub fn remove(&self, kind: &str, name: &str) -> Result<()> {
        let path = self.path_for(kind, name);
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }
}
