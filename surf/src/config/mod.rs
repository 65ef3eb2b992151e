//! Configuration for the query resolver.
//!
//! This module provides:
//! - The per-query [`SurfConfig`] value (trigger set and search template)
//! - Trigger-list parsing
//! - The [`SettingsStore`] contract and an in-memory implementation

mod settings;
mod triggers;

pub use settings::{MemorySettingsStore, SettingsStore};
pub use triggers::TriggerSet;

use serde::{Deserialize, Serialize};

/// Schema id under which the settings are persisted by the host.
pub const SETTINGS_SCHEMA_ID: &str = "org.gnome.shell.extensions.surf";

/// Settings key holding the comma-separated trigger list.
pub const TRIGGERS_KEY: &str = "triggers";

/// Settings key holding the search-engine URL template.
pub const SEARCH_URL_KEY: &str = "search-url";

/// Trigger list used when nothing is configured.
pub const DEFAULT_TRIGGERS: &str = "?";

/// Search template used when nothing is configured.
pub const DEFAULT_SEARCH_URL: &str = "https://duckduckgo.com/?q=";

/// Immutable configuration for a single query.
///
/// Read fresh from a [`SettingsStore`] on every query so that edits made
/// elsewhere take effect immediately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SurfConfig {
    /// Configured trigger strings.
    #[serde(default = "default_triggers")]
    pub triggers: TriggerSet,
    /// Template the encoded search terms are appended to.
    #[serde(default = "default_search_url")]
    pub search_url: String,
}

fn default_triggers() -> TriggerSet {
    TriggerSet::parse(DEFAULT_TRIGGERS)
}

fn default_search_url() -> String {
    DEFAULT_SEARCH_URL.to_string()
}

impl Default for SurfConfig {
    fn default() -> Self {
        Self {
            triggers: default_triggers(),
            search_url: default_search_url(),
        }
    }
}

impl SurfConfig {
    /// Creates a new configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads both settings keys from the store.
    ///
    /// Missing keys fall back to their defaults.
    #[must_use]
    pub fn from_store(store: &(impl SettingsStore + ?Sized)) -> Self {
        let triggers = store
            .get_string(TRIGGERS_KEY)
            .map_or_else(default_triggers, |raw| TriggerSet::parse(&raw));
        let search_url = store
            .get_string(SEARCH_URL_KEY)
            .unwrap_or_else(default_search_url);

        Self {
            triggers,
            search_url,
        }
    }

    /// Sets the triggers from a comma-separated source string.
    #[must_use]
    pub fn with_triggers(mut self, source: &str) -> Self {
        self.triggers = TriggerSet::parse(source);
        self
    }

    /// Sets the search URL template.
    #[must_use]
    pub fn with_search_url(mut self, template: impl Into<String>) -> Self {
        self.search_url = template.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_config_defaults() {
        let config = SurfConfig::default();
        assert!(config.triggers.contains("?"));
        assert_eq!(config.search_url, "https://duckduckgo.com/?q=");
    }

    #[test]
    fn test_config_builder() {
        let config = SurfConfig::new()
            .with_triggers("g, go")
            .with_search_url("https://www.google.com/search?q=");

        assert!(config.triggers.contains("g"));
        assert!(config.triggers.contains("go"));
        assert!(!config.triggers.contains("?"));
        assert_eq!(config.search_url, "https://www.google.com/search?q=");
    }

    #[test]
    fn test_config_from_store() {
        let store = MemorySettingsStore::new();
        store.set_string(TRIGGERS_KEY, " !, web ");
        store.set_string(SEARCH_URL_KEY, "https://example.org/s?q=");

        let config = SurfConfig::from_store(&store);
        assert_eq!(config.triggers.iter().collect::<Vec<_>>(), vec!["!", "web"]);
        assert_eq!(config.search_url, "https://example.org/s?q=");
    }

    #[test]
    fn test_config_from_empty_store_uses_defaults() {
        let store = MemorySettingsStore::new();
        assert_eq!(SurfConfig::from_store(&store), SurfConfig::default());
    }

    #[test]
    fn test_config_reads_fresh_values() {
        let store = MemorySettingsStore::new();
        store.set_string(TRIGGERS_KEY, "?");
        assert!(SurfConfig::from_store(&store).triggers.contains("?"));

        store.set_string(TRIGGERS_KEY, "!");
        let config = SurfConfig::from_store(&store);
        assert!(config.triggers.contains("!"));
        assert!(!config.triggers.contains("?"));
    }

    #[test]
    fn test_config_serde_uses_persisted_key_names() {
        let config: SurfConfig =
            serde_json::from_str(r#"{"triggers": "?,b", "search-url": "https://s.example/?q="}"#)
                .unwrap();
        assert!(config.triggers.contains("b"));
        assert_eq!(config.search_url, "https://s.example/?q=");

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["triggers"], "?,b");
        assert_eq!(json["search-url"], "https://s.example/?q=");
    }

    #[test]
    fn test_config_serde_missing_fields() {
        let config: SurfConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SurfConfig::default());
    }
}
