use super::SettingsStore;
use crate::error::StoreError;
use async_trait::async_trait;
use directories::ProjectDirs;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings storage backed by a single JSON object file.
///
/// Reads and writes are whole-file: `set` merges the given entries into the
/// current contents and rewrites the file. Missing file means empty store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// The platform config location, e.g. `~/.config/clipvault/settings.json`
    /// on Linux.
    pub fn default_location() -> Result<PathBuf, StoreError> {
        ProjectDirs::from("com", "clipvault", "clipvault")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .ok_or_else(|| StoreError("could not determine a config directory".to_string()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<HashMap<String, Value>, StoreError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(&self.path)
            .map_err(|e| StoreError(format!("{}: {}", self.path.display(), e)))?;
        serde_json::from_str(&content)
            .map_err(|e| StoreError(format!("{}: {}", self.path.display(), e)))
    }

    fn write_all(&self, values: &HashMap<String, Value>) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| StoreError(format!("{}: {}", dir.display(), e)))?;
        }
        let content = serde_json::to_string_pretty(values)
            .map_err(|e| StoreError(e.to_string()))?;
        fs::write(&self.path, content)
            .map_err(|e| StoreError(format!("{}: {}", self.path.display(), e)))
    }
}

#[async_trait]
impl SettingsStore for FileStore {
    async fn get(&self, keys: &[&str]) -> Result<HashMap<String, Value>, StoreError> {
        let mut values = self.read_all()?;
        Ok(keys
            .iter()
            .filter_map(|key| values.remove(*key).map(|value| (key.to_string(), value)))
            .collect())
    }

    async fn set(&mut self, entries: HashMap<String, Value>) -> Result<(), StoreError> {
        let mut values = self.read_all()?;
        values.extend(entries);
        self.write_all(&values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("settings.json"));
        assert!(store.get(&["obsidianVault"]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("settings.json"));

        store
            .set(HashMap::from([
                ("obsidianVault".to_string(), Value::from("Personal")),
                ("showAdvancedFeatures".to_string(), Value::from(true)),
            ]))
            .await
            .unwrap();

        let result = store
            .get(&["obsidianVault", "showAdvancedFeatures"])
            .await
            .unwrap();
        assert_eq!(
            result.get("obsidianVault").and_then(Value::as_str),
            Some("Personal")
        );
        assert_eq!(
            result.get("showAdvancedFeatures").and_then(Value::as_bool),
            Some(true)
        );
    }

    #[tokio::test]
    async fn set_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested/deeper/settings.json"));

        store
            .set(HashMap::from([("k".to_string(), Value::from("v"))]))
            .await
            .unwrap();
        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn corrupt_file_is_a_store_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();

        let store = FileStore::new(&path);
        assert!(store.get(&["k"]).await.is_err());
    }
}
