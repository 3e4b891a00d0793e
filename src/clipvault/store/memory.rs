use super::SettingsStore;
use crate::error::StoreError;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;

/// In-memory settings storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    values: HashMap<String, Value>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds one entry, builder-style.
    pub fn with_entry(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.values.insert(key.to_string(), value.into());
        self
    }
}

#[async_trait]
impl SettingsStore for InMemoryStore {
    async fn get(&self, keys: &[&str]) -> Result<HashMap<String, Value>, StoreError> {
        Ok(keys
            .iter()
            .filter_map(|key| {
                self.values
                    .get(*key)
                    .map(|value| (key.to_string(), value.clone()))
            })
            .collect())
    }

    async fn set(&mut self, entries: HashMap<String, Value>) -> Result<(), StoreError> {
        self.values.extend(entries);
        Ok(())
    }
}
