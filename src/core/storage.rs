//! Durable string-keyed storage for document slices
//!
//! Values are JSON strings. [`FileStorage`] keeps one `<key>.json` file per
//! key inside a data directory; [`MemoryStorage`] keeps them in process.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Key of one independently persisted slice
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SliceKey {
    Company,
    InvoiceDetails,
    Logistics,
    BillTo,
    ShipTo,
    Items,
}

impl SliceKey {
    pub const ALL: [SliceKey; 6] = [
        SliceKey::Company,
        SliceKey::InvoiceDetails,
        SliceKey::Logistics,
        SliceKey::BillTo,
        SliceKey::ShipTo,
        SliceKey::Items,
    ];

    /// Slices emptied by "clear form"
    pub const FORM: [SliceKey; 4] = [
        SliceKey::BillTo,
        SliceKey::ShipTo,
        SliceKey::Logistics,
        SliceKey::Items,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SliceKey::Company => "octa_company",
            SliceKey::InvoiceDetails => "octa_inv_details",
            SliceKey::Logistics => "octa_logistics",
            SliceKey::BillTo => "octa_billto",
            SliceKey::ShipTo => "octa_shipto",
            SliceKey::Items => "octa_items",
        }
    }
}

/// Storage failures
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O failed for '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },

    #[error("Could not serialize '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// A durable string-keyed store
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
    /// Remove every document slice
    fn clear(&mut self) -> Result<()>;
}

/// Read a slice, returning `fallback` when it is missing or unreadable
pub fn load<T: DeserializeOwned>(storage: &dyn Storage, key: SliceKey, fallback: T) -> T {
    let raw = match storage.get(key.as_str()) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!("No saved value for {}, using defaults", key.as_str());
            return fallback;
        }
        Err(e) => {
            tracing::warn!("{}", e);
            return fallback;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Ignoring corrupt value for {}: {}", key.as_str(), e);
            fallback
        }
    }
}

/// One JSON file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open (and create if needed) a storage directory
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StorageError::Io {
            key: dir.display().to_string(),
            source,
        })?;
        tracing::info!("Using storage directory: {}", dir.display());
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        // Write beside the target first so a failed write never truncates it
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)
            .and_then(|_| fs::rename(&tmp, &path))
            .map_err(|source| StorageError::Io {
                key: key.to_string(),
                source,
            })
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn clear(&mut self) -> Result<()> {
        // Only this app's slices; the directory may hold other files
        for key in SliceKey::ALL {
            self.remove(key.as_str())?;
            let tmp = self.path_for(key.as_str()).with_extension("json.tmp");
            match fs::remove_file(&tmp) {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(source) => {
                    return Err(StorageError::Io {
                        key: key.as_str().to_string(),
                        source,
                    })
                }
            }
        }
        Ok(())
    }
}

/// In-process storage, lost on exit
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{CompanyInfo, LineItem, PartyAddress};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_load_missing_key_returns_fallback() {
        let storage = MemoryStorage::new();
        let company = load(&storage, SliceKey::Company, CompanyInfo::default());
        assert_eq!(company, CompanyInfo::default());
    }

    #[test]
    fn test_load_corrupt_value_returns_fallback() {
        let mut storage = MemoryStorage::new();
        storage.set(SliceKey::Items.as_str(), "[{not json").unwrap();
        let items: Vec<LineItem> = load(&storage, SliceKey::Items, Vec::new());
        assert!(items.is_empty());

        storage.set(SliceKey::BillTo.as_str(), "42").unwrap();
        let bill_to = load(&storage, SliceKey::BillTo, PartyAddress::default());
        assert_eq!(bill_to, PartyAddress::default());
    }

    #[test]
    fn test_file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::open(dir.path().join("data")).unwrap();

        assert_eq!(storage.get("octa_company").unwrap(), None);
        storage.set("octa_company", r#"{"name":"Acme"}"#).unwrap();
        assert_eq!(
            storage.get("octa_company").unwrap().as_deref(),
            Some(r#"{"name":"Acme"}"#)
        );

        storage.remove("octa_company").unwrap();
        assert_eq!(storage.get("octa_company").unwrap(), None);
        // Removing twice is fine
        storage.remove("octa_company").unwrap();
    }

    #[test]
    fn test_file_storage_clear_removes_all_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::open(dir.path()).unwrap();
        for key in SliceKey::ALL {
            storage.set(key.as_str(), "{}").unwrap();
        }
        storage.clear().unwrap();
        for key in SliceKey::ALL {
            assert_eq!(storage.get(key.as_str()).unwrap(), None);
        }
    }

    #[test]
    fn test_file_storage_clear_keeps_foreign_files() {
        let dir = tempfile::tempdir().unwrap();
        let foreign = dir.path().join("config.json");
        std::fs::write(&foreign, r#"{"theme":"dark"}"#).unwrap();
        std::fs::write(dir.path().join("octa_items.json.tmp"), "[]").unwrap();

        let mut storage = FileStorage::open(dir.path()).unwrap();
        storage.set(SliceKey::Company.as_str(), "{}").unwrap();
        storage.clear().unwrap();

        assert_eq!(storage.get(SliceKey::Company.as_str()).unwrap(), None);
        assert!(!dir.path().join("octa_items.json.tmp").exists());
        assert_eq!(
            std::fs::read_to_string(&foreign).unwrap(),
            r#"{"theme":"dark"}"#
        );
    }

    #[test]
    fn test_slice_keys_are_distinct() {
        let mut keys: Vec<_> = SliceKey::ALL.iter().map(|k| k.as_str()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 6);
    }
}
