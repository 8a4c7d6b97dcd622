//! JSON-file backed store
//!
//! The whole map is rewritten on every mutation: temp file, fsync, rename,
//! all under an exclusive lock on a sibling `.lock` file.

use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use super::{KeyValueStore, StorageError};

/// Key-value store persisted as one JSON object on disk
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        tracing::debug!("Opened store {:?} with {} keys", path, entries.len());
        Ok(Self { path, entries })
    }

    /// Open the store at `path`, starting empty when the file cannot be
    /// parsed. The unreadable file is replaced on the next write.
    pub fn open_or_empty(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        match Self::open(&path) {
            Err(StorageError::Format(e)) => {
                tracing::warn!("Store {:?} is not valid JSON, starting empty: {}", path, e);
                Ok(Self {
                    path,
                    entries: BTreeMap::new(),
                })
            }
            other => other,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(&self.entries)?;

        let lock_path = self.path.with_extension("json.lock");
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)?;
        lock_file.lock_exclusive()?;

        let temp_path = self.path.with_extension("json.tmp");
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.sync_all()?;

        std::fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("none.json")).unwrap();
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("storage.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("portfolio_sound", "true").unwrap();
        store.set("state", r#"{"xp":10}"#).unwrap();
        store.remove("portfolio_sound").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("portfolio_sound").unwrap(), None);
        assert_eq!(reopened.get("state").unwrap().as_deref(), Some(r#"{"xp":10}"#));
    }

    #[test]
    fn test_garbage_file_is_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(FileStore::open(&path), Err(StorageError::Format(_))));
    }

    #[test]
    fn test_garbage_file_can_start_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "not json").unwrap();

        let mut store = FileStore::open_or_empty(&path).unwrap();
        assert_eq!(store.get("pixelfolio_state").unwrap(), None);

        store.set("portfolio_sound", "true").unwrap();
        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("portfolio_sound").unwrap().as_deref(), Some("true"));
    }
}
