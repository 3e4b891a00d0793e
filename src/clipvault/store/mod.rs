use crate::error::StoreError;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;

pub mod fs;
pub mod memory;

/// Key-value settings storage capability.
///
/// The asynchronous store boundary is the only one in the system; the engine
/// itself never talks to the store. Callers load a [`crate::settings::Settings`]
/// value through it and pass that value in. Designed to be agnostic of the
/// backing medium (browser sync storage, a JSON file, memory).
#[async_trait]
pub trait SettingsStore {
    /// Fetches the values for `keys`. Absent keys are omitted from the
    /// returned mapping.
    async fn get(&self, keys: &[&str]) -> Result<HashMap<String, Value>, StoreError>;

    /// Persists `entries`, overwriting any existing values. Keys not named in
    /// `entries` are left untouched.
    async fn set(&mut self, entries: HashMap<String, Value>) -> Result<(), StoreError>;
}
