//! Persisted preference store.
//!
//! A single string-keyed slot (`"locale"`) read once at startup and rewritten
//! on explicit locale change. The store is treated as a scoped, synchronous
//! key-value access with no partial-write states: a `set` either succeeds and
//! observably changes subsequent reads, or fails and leaves the prior state
//! untouched.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Key of the persisted locale preference slot.
pub const LOCALE_KEY: &str = "locale";

/// Preference store failures.
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("preference store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("preference store is not a JSON object: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Synchronous key-value access for persisted preferences.
///
/// The trait seam keeps the locale resolver testable without touching disk.
pub trait PreferenceStore {
    /// Read a preference value, `None` when the slot was never written.
    fn get(&self, key: &str) -> Option<String>;

    /// Write-through a preference value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError>;
}

/// JSON-file-backed preference store.
///
/// The whole file is loaded at open; every `set` rewrites it through a
/// temp-file + rename so a failed write leaves the previous file intact.
pub struct FilePreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferenceStore {
    /// Open (or initialize) the store at `path`.
    ///
    /// A missing file is an empty store, not an error. A file that exists
    /// but does not parse as a JSON object is an error: silently discarding
    /// it would lose the user's preference.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PrefsError> {
        let path = path.as_ref().to_path_buf();

        let values = match fs::read_to_string(&path) {
            Ok(contents) => {
                let object: Map<String, Value> = serde_json::from_str(&contents)?;
                object
                    .into_iter()
                    .filter_map(|(key, value)| match value {
                        Value::String(s) => Some((key, s)),
                        _ => None,
                    })
                    .collect()
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No preference file yet, starting empty");
                BTreeMap::new()
            }
            Err(err) => return Err(err.into()),
        };

        Ok(Self { path, values })
    }

    fn persist(&self) -> Result<(), PrefsError> {
        let object: Map<String, Value> = self
            .values
            .iter()
            .map(|(key, value)| (key.clone(), Value::String(value.clone())))
            .collect();
        let contents = serde_json::to_string_pretty(&Value::Object(object))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Write to a sibling temp file, then rename over the target, so an
        // interrupted write never truncates the previous state.
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        let previous = self.values.insert(key.to_string(), value.to_string());

        if let Err(err) = self.persist() {
            // Roll the in-memory map back so a failed write leaves prior
            // state observable through `get`.
            match previous {
                Some(old) => {
                    self.values.insert(key.to_string(), old);
                }
                None => {
                    self.values.remove(key);
                }
            }
            return Err(err);
        }
        Ok(())
    }
}

/// In-memory preference store for tests and ephemeral runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a slot, mimicking a preference persisted in a prior session.
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ==================== File Store Tests ====================

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::open(dir.path().join("prefs.json")).unwrap();
        assert!(store.get(LOCALE_KEY).is_none());
    }

    #[test]
    fn test_set_then_get() {
        let dir = TempDir::new().unwrap();
        let mut store = FilePreferenceStore::open(dir.path().join("prefs.json")).unwrap();

        store.set(LOCALE_KEY, "es").unwrap();
        assert_eq!(store.get(LOCALE_KEY).as_deref(), Some("es"));
    }

    #[test]
    fn test_set_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");

        let mut store = FilePreferenceStore::open(&path).unwrap();
        store.set(LOCALE_KEY, "es").unwrap();
        drop(store);

        let reopened = FilePreferenceStore::open(&path).unwrap();
        assert_eq!(reopened.get(LOCALE_KEY).as_deref(), Some("es"));
    }

    #[test]
    fn test_set_overwrites_previous_value() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");

        let mut store = FilePreferenceStore::open(&path).unwrap();
        store.set(LOCALE_KEY, "es").unwrap();
        store.set(LOCALE_KEY, "en").unwrap();

        let reopened = FilePreferenceStore::open(&path).unwrap();
        assert_eq!(reopened.get(LOCALE_KEY).as_deref(), Some("en"));
    }

    #[test]
    fn test_open_creates_missing_parent_on_first_set() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/dir/prefs.json");

        let mut store = FilePreferenceStore::open(&path).unwrap();
        store.set(LOCALE_KEY, "es").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_open_rejects_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not json at all").unwrap();

        assert!(FilePreferenceStore::open(&path).is_err());
    }

    #[test]
    fn test_non_string_values_are_ignored_on_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, r#"{"locale": "es", "count": 3}"#).unwrap();

        let store = FilePreferenceStore::open(&path).unwrap();
        assert_eq!(store.get(LOCALE_KEY).as_deref(), Some("es"));
        assert!(store.get("count").is_none());
    }

    // ==================== Memory Store Tests ====================

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryPreferenceStore::new();
        assert!(store.get(LOCALE_KEY).is_none());

        store.set(LOCALE_KEY, "es").unwrap();
        assert_eq!(store.get(LOCALE_KEY).as_deref(), Some("es"));
    }

    #[test]
    fn test_memory_store_with_value() {
        let store = MemoryPreferenceStore::with_value(LOCALE_KEY, "es");
        assert_eq!(store.get(LOCALE_KEY).as_deref(), Some("es"));
    }
}
