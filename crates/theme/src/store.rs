use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use serde_json::Value;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O: {0}")]
    Io(#[from] io::Error),
    #[error("store JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// String key-value persistence for the selected theme.
///
/// Reads never fail: a store that cannot produce a value simply has none.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store, lost when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a JSON object file.
///
/// The file is read once on open. Every `set` rewrites the whole file, keeping
/// only the string values that were readable.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing, empty or unreadable JSON file is
    /// an empty store, and non-string values are dropped. Only I/O failures
    /// other than a missing file are errors.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => BTreeMap::new(),
            Ok(text) => parse_values(&path, &text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "state file not found, starting empty");
                BTreeMap::new()
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn parse_values(path: &Path, text: &str) -> BTreeMap<String, String> {
    let object = match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(object)) => object,
        Ok(other) => {
            warn!(path = %path.display(), "state file is not a JSON object, ignoring: {other}");
            return BTreeMap::new();
        }
        Err(e) => {
            warn!(path = %path.display(), "state file is not valid JSON, ignoring: {e}");
            return BTreeMap::new();
        }
    };
    object
        .into_iter()
        .filter_map(|(key, value)| match value {
            Value::String(s) => Some((key, s)),
            other => {
                warn!(path = %path.display(), key = %key, "ignoring non-string state value {other}");
                None
            }
        })
        .collect()
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let mut json = serde_json::to_string_pretty(&self.values)?;
        json.push('\n');
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("theme"), None);
        store.set("theme", "web").unwrap();
        store.set("theme", "docket").unwrap();
        assert_eq!(store.get("theme").as_deref(), Some("docket"));
    }

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("state.json")).unwrap();
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn empty_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "  \n").unwrap();
        assert_eq!(FileStore::open(&path).unwrap().get("theme"), None);
    }

    #[test]
    fn writes_persist_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("theme", "shadcn-dark").unwrap();
        store.set("other", "kept").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("theme").as_deref(), Some("shadcn-dark"));
        assert_eq!(reopened.get("other").as_deref(), Some("kept"));
        assert_eq!(reopened.path(), path);
    }

    #[traced_test]
    #[test]
    fn non_string_values_are_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, r#"{"theme": null, "other": "kept", "count": 3}"#).unwrap();

        let mut store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("theme"), None);
        assert_eq!(store.get("other").as_deref(), Some("kept"));
        assert_eq!(store.get("count"), None);
        assert!(logs_contain("ignoring non-string state value null"));

        store.set("theme", "web").unwrap();
        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("theme").as_deref(), Some("web"));
        assert_eq!(reopened.get("other").as_deref(), Some("kept"));
    }

    #[traced_test]
    #[test]
    fn unparseable_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        for (name, text) in [("array.json", "[1, 2]"), ("broken.json", "{\"theme\": ")] {
            let path = dir.path().join(name);
            fs::write(&path, text).unwrap();
            assert_eq!(FileStore::open(&path).unwrap().get("theme"), None);
        }
        assert!(logs_contain("state file is not a JSON object"));
        assert!(logs_contain("state file is not valid JSON"));
    }
}
