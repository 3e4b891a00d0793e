//! # API Facade
//!
//! The single entry point for all clipvault operations, regardless of the UI
//! in front of it. Generic over [`SettingsStore`] so that the CLI runs
//! against [`crate::store::fs::FileStore`] while tests run against
//! [`crate::store::memory::InMemoryStore`].
//!
//! The facade owns the store boundary: it loads [`Settings`] as a plain
//! value, hands it to the pure engine, and returns structured results. No
//! printing, no process exits.

use crate::error::Result;
use crate::model::{ClipContext, ClipRequest};
use crate::request;
use crate::settings::Settings;
use crate::store::SettingsStore;

pub struct ClipperApi<S: SettingsStore> {
    store: S,
}

impl<S: SettingsStore> ClipperApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current settings, with built-in defaults for anything unset.
    pub async fn load_settings(&self) -> Result<Settings> {
        Settings::load(&self.store).await
    }

    /// Validates and persists `settings`.
    pub async fn save_settings(&mut self, settings: &Settings) -> Result<()> {
        settings.save(&mut self.store).await
    }

    /// Builds the note-creation request for one clip against the stored
    /// settings.
    pub async fn clip(&self, ctx: &ClipContext) -> Result<ClipRequest> {
        let settings = self.load_settings().await?;
        Ok(request::build(&settings, ctx)?)
    }

    /// The "test settings" action: builds a request for the fixed sample
    /// clip.
    pub async fn test_clip(&self) -> Result<ClipRequest> {
        self.clip(&ClipContext::sample()).await
    }
}
