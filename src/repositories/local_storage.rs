use crate::error::StorageError;
use log::debug;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub trait Storage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_all(&self, items: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let raw = serde_json::to_string_pretty(items)?;
        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, raw)?;
        fs::rename(&tmp_path, &self.path)?;
        debug!("Wrote {} storage keys to {}", items.len(), self.path.display());
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.read_all()?;
        items.insert(key.to_string(), value.to_string());
        self.write_all(&items)
    }
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
    quota_exceeded: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A storage that rejects every write, like a full browser quota.
    pub fn full() -> Self {
        Self {
            items: Mutex::default(),
            quota_exceeded: true,
        }
    }

    pub fn with_item(self, key: &str, value: &str) -> Self {
        self.items
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key.to_string(), value.to_string());
        self
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self
            .items
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.quota_exceeded {
            return Err(StorageError::QuotaExceeded {
                key: key.to_string(),
            });
        }
        self.items
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_storage_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("storage.json"));
        assert_eq!(storage.get_item("anything").unwrap(), None);
    }

    #[test]
    fn file_storage_keeps_other_keys_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("storage.json"));
        storage.set_item("a", "1").unwrap();
        storage.set_item("b", "2").unwrap();
        storage.set_item("a", "3").unwrap();

        let reopened = FileStorage::new(storage.path());
        assert_eq!(reopened.get_item("a").unwrap().as_deref(), Some("3"));
        assert_eq!(reopened.get_item("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn file_storage_reports_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json").unwrap();
        let storage = FileStorage::new(path);
        assert!(matches!(
            storage.get_item("a"),
            Err(StorageError::Json(_))
        ));
    }

    #[test]
    fn full_memory_storage_rejects_writes() {
        let storage = MemoryStorage::full();
        assert!(matches!(
            storage.set_item("k", "v"),
            Err(StorageError::QuotaExceeded { .. })
        ));
        assert_eq!(storage.get_item("k").unwrap(), None);
    }
}
