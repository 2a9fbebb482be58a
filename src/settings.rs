//! Per-map capture settings keyed by map name.
//!
//! The store is generic over the record type so the orchestration never looks
//! inside a record; the ezQuake controller owns [`MapSettings`] and the file
//! format that goes with it.

use crate::error::SettingsError;
use crate::ezquake::MapSettings;
use jsonschema::JSONSchema;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// JSON Schema for `map_settings.json`, bundled at build time.
pub const MAP_SETTINGS_SCHEMA: &str = include_str!("../schema/map_settings.schema.json");

#[derive(Clone, Debug, PartialEq)]
/// Immutable mapping from map name to settings record.
pub struct SettingsStore<S> {
    by_name: BTreeMap<String, S>,
}

impl<S> SettingsStore<S> {
    /// Build a store from in-memory entries. Later duplicates win.
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, S)>,
        K: Into<String>,
    {
        Self {
            by_name: entries
                .into_iter()
                .map(|(name, record)| (name.into(), record))
                .collect(),
        }
    }

    /// True iff `name` has a settings entry. Case-sensitive.
    pub fn has_map(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&S> {
        self.by_name.get(name)
    }

    /// Every configured map name in lexicographic order.
    pub fn all_map_names(&self) -> Vec<String> {
        self.by_name.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl SettingsStore<MapSettings> {
    /// Load and validate a settings file from disk.
    ///
    /// The document is checked against [`MAP_SETTINGS_SCHEMA`] before it is
    /// deserialized so every violation is reported at once instead of the
    /// first serde error.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let data = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let document: Value = serde_json::from_str(&data).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        validate_document(&document).map_err(|details| SettingsError::Schema {
            path: path.to_path_buf(),
            details,
        })?;

        let by_name: BTreeMap<String, MapSettings> =
            serde_json::from_value(document).map_err(|source| SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::info!(maps = by_name.len(), path = %path.display(), "loaded map settings");
        Ok(Self { by_name })
    }
}

/// Check a parsed settings document against the bundled schema.
///
/// Returns the newline-joined list of violations on failure.
pub fn validate_document(document: &Value) -> Result<(), String> {
    let raw: Value = serde_json::from_str(MAP_SETTINGS_SCHEMA)
        .map_err(|err| format!("parsing bundled settings schema: {err}"))?;
    let compiled = JSONSchema::compile(&raw)
        .map_err(|err| format!("compiling bundled settings schema: {err}"))?;
    if let Err(errors) = compiled.validate(document) {
        let details = errors
            .map(|err| {
                let pointer = err.instance_path.to_string();
                if pointer.is_empty() {
                    err.to_string()
                } else {
                    format!("{pointer}: {err}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n");
        return Err(details);
    }
    Ok(())
}
