//! File-backed key-value store.
//!
//! Each key is a file named `<key>.json` inside the store directory. Writes
//! go through [`crate::fs::write_atomic`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{BulletinError, Result};
use crate::storage::traits::KeyValueStore;

const VALUE_EXTENSION: &str = "json";

/// A directory of JSON files, one per key.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `BulletinError::Storage` if `root` exists but is not a
    /// directory, or cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if root.exists() && !root.is_dir() {
            return Err(BulletinError::Storage(format!(
                "Store path is not a directory: {}",
                root.display()
            )));
        }
        fs::create_dir_all(&root).map_err(|e| {
            BulletinError::Storage(format!(
                "Failed to create store directory {}: {}",
                root.display(),
                e
            ))
        })?;
        Ok(Self { root })
    }

    /// Directory holding the value files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.{}", key, VALUE_EXTENSION)))
    }
}

fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(BulletinError::InvalidInput(format!(
            "Invalid store key: {:?}",
            key
        )))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(BulletinError::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                err
            ))),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        crate::fs::write_atomic(&path, value.as_bytes()).map_err(|e| {
            BulletinError::Storage(format!("Failed to write {}: {}", path.display(), e))
        })
    }
}
