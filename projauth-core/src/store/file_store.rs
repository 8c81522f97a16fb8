//! JSON file store implementation
//!
//! Persists the whole map as one JSON object. Every operation reads the file
//! fresh so separate CLI invocations see each other's writes.

use crate::config::toml_config::get_config_dir;
use crate::error::{ProjauthError, StoreError};
use crate::store::KeyValueStore;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// Default store file name inside the config directory
const STORE_FILE_NAME: &str = "session.json";

/// Key-value store backed by a JSON file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store at an explicit path
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Open the store in the default config directory
    pub fn open_default() -> Result<Self, ProjauthError> {
        Ok(Self::new(get_config_dir()?.join(STORE_FILE_NAME)))
    }

    fn load(&self) -> Result<BTreeMap<String, String>, ProjauthError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Store file missing, treating as empty");
                return Ok(BTreeMap::new());
            }
            Err(e) => {
                error!(path = %self.path.display(), "Failed to read store: {}", e);
                return Err(StoreError::ReadFailed {
                    path: self.path.to_string_lossy().to_string(),
                }
                .into());
            }
        };

        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&contents).map_err(|e| {
            ProjauthError::from(StoreError::Corrupt {
                message: e.to_string(),
            })
        })
    }

    fn save(&self, items: &BTreeMap<String, String>) -> Result<(), ProjauthError> {
        let write_failed = || StoreError::WriteFailed {
            path: self.path.to_string_lossy().to_string(),
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|_| write_failed())?;
        }

        let contents = serde_json::to_string_pretty(items).map_err(|e| StoreError::Corrupt {
            message: e.to_string(),
        })?;

        std::fs::write(&self.path, contents).map_err(|e| {
            error!(path = %self.path.display(), "Failed to write store: {}", e);
            write_failed()
        })?;

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, ProjauthError> {
        Ok(self.load()?.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), ProjauthError> {
        let mut items = self.load()?;
        items.insert(key.to_string(), value.to_string());
        self.save(&items)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), ProjauthError> {
        let mut items = self.load()?;
        if items.remove(key).is_some() {
            self.save(&items)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_empty() {
        let temp_dir = tempdir().unwrap();
        let store = FileStore::new(temp_dir.path().join("session.json"));
        assert_eq!(store.get_item("token").unwrap(), None);
    }

    #[test]
    fn test_persists_across_instances() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("session.json");

        let mut writer = FileStore::new(&path);
        writer.set_item("token", "mock_jwt_token_1").unwrap();

        let reader = FileStore::new(&path);
        assert_eq!(
            reader.get_item("token").unwrap(),
            Some("mock_jwt_token_1".to_string())
        );
    }

    #[test]
    fn test_corrupt_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(
            store.get_item("token"),
            Err(ProjauthError::Store(StoreError::Corrupt { .. }))
        ));
    }
}
