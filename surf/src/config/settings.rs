//! Settings store contract and an in-memory implementation.

use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::Arc;

use crate::errors::{SettingsError, SurfResult};

/// Read access to persisted string settings.
///
/// Values may change between any two calls, so callers must not cache them.
pub trait SettingsStore: Send + Sync {
    /// Returns the string stored under `key`, if any.
    fn get_string(&self, key: &str) -> Option<String>;
}

impl<T: SettingsStore + ?Sized> SettingsStore for Arc<T> {
    fn get_string(&self, key: &str) -> Option<String> {
        (**self).get_string(key)
    }
}

impl SettingsStore for HashMap<String, String> {
    fn get_string(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// A thread-safe in-memory settings store.
///
/// Snapshots are flat JSON objects whose values are all strings, e.g.
/// `{"triggers": "?", "search-url": "https://duckduckgo.com/?q="}`.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemorySettingsStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn set_string(&self, key: impl Into<String>, value: impl Into<String>) {
        self.values.write().insert(key.into(), value.into());
    }

    /// Removes `key`, returning its previous value.
    pub fn remove(&self, key: &str) -> Option<String> {
        self.values.write().remove(key)
    }

    /// Parses a JSON snapshot.
    pub fn from_json(json: &str) -> SurfResult<Self> {
        let parsed: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
        let mut values = HashMap::with_capacity(parsed.len());

        for (key, value) in parsed {
            match value {
                serde_json::Value::String(s) => {
                    values.insert(key, s);
                }
                other => {
                    return Err(SettingsError::new(
                        key,
                        format!("expected a string, found {other}"),
                    )
                    .into());
                }
            }
        }

        Ok(Self {
            values: RwLock::new(values),
        })
    }

    /// Serializes the current values as a JSON snapshot with sorted keys.
    pub fn to_json(&self) -> SurfResult<String> {
        let sorted: BTreeMap<String, String> = self
            .values
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Ok(serde_json::to_string_pretty(&sorted)?)
    }

    /// Loads a JSON snapshot from a file.
    pub fn load(path: impl AsRef<Path>) -> SurfResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Writes the current values to a file as a JSON snapshot.
    pub fn save(&self, path: impl AsRef<Path>) -> SurfResult<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SurfError;

    #[test]
    fn test_set_and_get() {
        let store = MemorySettingsStore::new();
        assert_eq!(store.get_string("triggers"), None);

        store.set_string("triggers", "?");
        assert_eq!(store.get_string("triggers"), Some("?".to_string()));

        store.set_string("triggers", "!");
        assert_eq!(store.get_string("triggers"), Some("!".to_string()));

        assert_eq!(store.remove("triggers"), Some("!".to_string()));
        assert_eq!(store.get_string("triggers"), None);
    }

    #[test]
    fn test_from_json() {
        let store =
            MemorySettingsStore::from_json(r#"{"triggers": "?, g", "search-url": ""}"#).unwrap();
        assert_eq!(store.get_string("triggers"), Some("?, g".to_string()));
        assert_eq!(store.get_string("search-url"), Some(String::new()));
    }

    #[test]
    fn test_from_json_rejects_non_string() {
        let err = MemorySettingsStore::from_json(r#"{"triggers": 3}"#).unwrap_err();
        match err {
            SurfError::Settings(e) => assert_eq!(e.key, "triggers"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let err = MemorySettingsStore::from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, SurfError::Serialization(_)));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("surf.json");

        let store = MemorySettingsStore::new();
        store.set_string("triggers", "?");
        store.set_string("search-url", "https://duckduckgo.com/?q=");
        store.save(&path).unwrap();

        let loaded = MemorySettingsStore::load(&path).unwrap();
        assert_eq!(loaded.get_string("triggers"), Some("?".to_string()));
        assert_eq!(
            loaded.get_string("search-url"),
            Some("https://duckduckgo.com/?q=".to_string())
        );
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = MemorySettingsStore::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, SurfError::Io(_)));
    }

    #[test]
    fn test_arc_store() {
        let store: Arc<dyn SettingsStore> = Arc::new(HashMap::from([(
            "triggers".to_string(),
            "?".to_string(),
        )]));
        assert_eq!(store.get_string("triggers"), Some("?".to_string()));
    }
}
