//! The persisted clipper settings and their store representation.

use crate::error::{Result, ValidationError};
use crate::grammar;
use crate::policy;
use crate::store::SettingsStore;
use crate::template::DEFAULT_CONTENT_TEMPLATE;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Store keys, named after the browser extension's sync-storage schema.
pub mod keys {
    pub const VAULT: &str = "obsidianVault";
    pub const FOLDER: &str = "folderPath";
    pub const ADVANCED: &str = "showAdvancedFeatures";
    pub const CONTENT: &str = "noteContentFormat";
}

pub const ALL_KEYS: &[&str] = &[keys::VAULT, keys::FOLDER, keys::ADVANCED, keys::CONTENT];

/// User-facing clipper configuration.
///
/// Read once from the store at initialization, mutated only by explicit save
/// actions. The engine takes this by value/reference and never touches the
/// store itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Name of the vault notes are filed into.
    pub vault_name: String,

    /// Folder template ending in `{title}`, e.g. "Browser Clippings/{title}".
    pub folder_template: String,

    /// Whether the custom content template is in effect.
    pub advanced_formatting: bool,

    /// Note body template. Canonical default whenever advanced formatting is
    /// off.
    pub content_template: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            vault_name: String::new(),
            folder_template: String::new(),
            advanced_formatting: false,
            content_template: DEFAULT_CONTENT_TEMPLATE.to_string(),
        }
    }
}

impl Settings {
    /// Flips the advanced-formatting toggle. Turning it off reverts the
    /// content template to the canonical default, discarding any custom
    /// value.
    pub fn set_advanced_formatting(&mut self, enabled: bool) {
        self.advanced_formatting = enabled;
        if !enabled {
            self.content_template = DEFAULT_CONTENT_TEMPLATE.to_string();
        }
    }

    /// Runs the full validation gate, short-circuiting on the first failure:
    /// required fields → character policy → folder grammar → advanced
    /// template emptiness.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.vault_name.trim().is_empty() || self.folder_template.trim().is_empty() {
            return Err(ValidationError::EmptyRequiredField);
        }
        policy::validate(&self.vault_name)?;
        policy::validate(&self.folder_template)?;
        grammar::validate(&self.folder_template)?;
        // An explicit empty template under an enabled toggle signals user
        // error, not intent to use the default.
        if self.advanced_formatting && self.content_template.is_empty() {
            return Err(ValidationError::EmptyAdvancedTemplate);
        }
        Ok(())
    }

    /// Builds settings from raw store entries. Absent keys fall back to the
    /// built-in defaults; an empty stored content template counts as absent.
    pub fn from_entries(entries: &HashMap<String, Value>) -> Self {
        let get_str =
            |key: &str| entries.get(key).and_then(Value::as_str).map(str::to_string);

        Self {
            vault_name: get_str(keys::VAULT).unwrap_or_default(),
            folder_template: get_str(keys::FOLDER).unwrap_or_default(),
            advanced_formatting: entries
                .get(keys::ADVANCED)
                .and_then(Value::as_bool)
                .unwrap_or(false),
            content_template: get_str(keys::CONTENT)
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_CONTENT_TEMPLATE.to_string()),
        }
    }

    /// Store representation. The persisted content template is the canonical
    /// default whenever advanced formatting is off, regardless of the
    /// in-memory value.
    pub fn to_entries(&self) -> HashMap<String, Value> {
        let content = if self.advanced_formatting {
            self.content_template.as_str()
        } else {
            DEFAULT_CONTENT_TEMPLATE
        };
        HashMap::from([
            (keys::VAULT.to_string(), Value::from(self.vault_name.as_str())),
            (keys::FOLDER.to_string(), Value::from(self.folder_template.as_str())),
            (keys::ADVANCED.to_string(), Value::from(self.advanced_formatting)),
            (keys::CONTENT.to_string(), Value::from(content)),
        ])
    }

    /// Loads settings from the store, applying defaults for absent keys.
    pub async fn load<S: SettingsStore + ?Sized>(store: &S) -> Result<Self> {
        let entries = store.get(ALL_KEYS).await?;
        Ok(Self::from_entries(&entries))
    }

    /// Validates and persists these settings.
    pub async fn save<S: SettingsStore + ?Sized>(&self, store: &mut S) -> Result<()> {
        self.validate()?;
        store.set(self.to_entries()).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn valid_settings() -> Settings {
        Settings {
            vault_name: "Personal".to_string(),
            folder_template: "Clips/{title}".to_string(),
            ..Settings::default()
        }
    }

    #[test]
    fn default_uses_canonical_content_template() {
        let settings = Settings::default();
        assert!(!settings.advanced_formatting);
        assert_eq!(settings.content_template, "{url}\n\n{content}");
    }

    #[test]
    fn disabling_advanced_formatting_resets_template() {
        let mut settings = valid_settings();
        settings.set_advanced_formatting(true);
        settings.content_template = "# {title}\n{content}".to_string();

        settings.set_advanced_formatting(false);
        assert_eq!(settings.content_template, DEFAULT_CONTENT_TEMPLATE);
    }

    #[test]
    fn validate_requires_both_fields() {
        let mut settings = valid_settings();
        settings.vault_name = "   ".to_string();
        assert_eq!(settings.validate(), Err(ValidationError::EmptyRequiredField));

        let mut settings = valid_settings();
        settings.folder_template = String::new();
        assert_eq!(settings.validate(), Err(ValidationError::EmptyRequiredField));
    }

    #[test]
    fn validate_applies_character_policy_to_both_fields() {
        let mut settings = valid_settings();
        settings.vault_name = "My|Vault".to_string();
        assert_eq!(
            settings.validate(),
            Err(ValidationError::InvalidCharacter('|'))
        );

        let mut settings = valid_settings();
        settings.folder_template = "Clips?/{title}".to_string();
        assert_eq!(
            settings.validate(),
            Err(ValidationError::InvalidCharacter('?'))
        );
    }

    #[test]
    fn validate_checks_folder_grammar() {
        let mut settings = valid_settings();
        settings.folder_template = "Clips".to_string();
        assert_eq!(settings.validate(), Err(ValidationError::InvalidFolderFormat));
    }

    #[test]
    fn validate_rejects_empty_advanced_template() {
        let mut settings = valid_settings();
        settings.advanced_formatting = true;
        settings.content_template = String::new();
        assert_eq!(
            settings.validate(),
            Err(ValidationError::EmptyAdvancedTemplate)
        );
    }

    #[test]
    fn from_entries_defaults_absent_keys() {
        let settings = Settings::from_entries(&HashMap::new());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn from_entries_treats_empty_content_template_as_absent() {
        let entries = HashMap::from([(keys::CONTENT.to_string(), Value::from(""))]);
        let settings = Settings::from_entries(&entries);
        assert_eq!(settings.content_template, DEFAULT_CONTENT_TEMPLATE);
    }

    #[test]
    fn to_entries_persists_default_template_when_toggle_is_off() {
        let mut settings = valid_settings();
        settings.content_template = "custom {content}".to_string();

        let entries = settings.to_entries();
        assert_eq!(
            entries.get(keys::CONTENT).and_then(Value::as_str),
            Some(DEFAULT_CONTENT_TEMPLATE)
        );
    }

    #[tokio::test]
    async fn save_and_load_round_trip() {
        let mut store = InMemoryStore::new();
        let mut settings = valid_settings();
        settings.set_advanced_formatting(true);
        settings.content_template = "{date}: {content}".to_string();

        settings.save(&mut store).await.unwrap();
        let loaded = Settings::load(&store).await.unwrap();
        assert_eq!(loaded, settings);
    }

    #[tokio::test]
    async fn save_refuses_invalid_settings() {
        let mut store = InMemoryStore::new();
        let settings = Settings::default();

        assert!(settings.save(&mut store).await.is_err());
        // Nothing was written.
        let entries = store.get(ALL_KEYS).await.unwrap();
        assert!(entries.is_empty());
    }
}
