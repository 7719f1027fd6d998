//! Scoped wallpaper resolution.
//!
//! A wallpaper chosen under one theme is not necessarily legal under
//! another, so the durable channel stores a map from theme id to a
//! per-theme record and resolution picks the entry for the active
//! theme, falling back to the theme default when the stored value is
//! incompatible. Resolution is a pure function of its inputs.

#[cfg(test)]
#[path = "resolve_test.rs"]
mod resolve_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::registry::ThemeRegistry;

/// Effective preference for the active scope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolved {
    pub value: String,
    pub enabled: bool,
}

/// Stored per-theme wallpaper record, current shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopedEntry {
    pub value: String,
    pub enabled: bool,
}

/// Durable payload for a scoped key: theme id to record.
pub type ScopedMap = BTreeMap<String, ScopedEntry>;

/// On-disk entry shapes. Early builds stored a bare wallpaper id;
/// reads accept both, writes emit only the record shape.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredEntry {
    Record { value: String, enabled: bool },
    Legacy(String),
}

impl StoredEntry {
    fn normalize(self) -> ScopedEntry {
        match self {
            Self::Record { value, enabled } => ScopedEntry { value, enabled },
            // A legacy bare value predates the on/off flag, which
            // defaulted to on.
            Self::Legacy(value) => ScopedEntry { value, enabled: true },
        }
    }
}

/// Parse a raw durable-channel payload into a normalized map.
/// Absent or malformed payloads read as empty.
#[must_use]
pub fn parse_map(raw: Option<&str>) -> ScopedMap {
    let Some(raw) = raw else {
        return ScopedMap::new();
    };
    let Ok(entries) = serde_json::from_str::<BTreeMap<String, StoredEntry>>(raw) else {
        return ScopedMap::new();
    };
    entries
        .into_iter()
        .map(|(scope, entry)| (scope, entry.normalize()))
        .collect()
}

/// Serialize a map back to the durable payload shape.
#[must_use]
pub fn serialize_map(map: &ScopedMap) -> Option<String> {
    serde_json::to_string(map).ok()
}

/// Resolve the effective wallpaper for `scope`.
///
/// Absent entry: the theme default, enabled. Compatible entry: as
/// stored. Incompatible entry: the theme default, with the stored
/// `enabled` flag preserved; a compatibility failure must never
/// silently flip the user's explicit on/off choice.
#[must_use]
pub fn resolve(registry: &impl ThemeRegistry, scope: &str, map: &ScopedMap) -> Resolved {
    let Some(entry) = map.get(scope) else {
        return Resolved {
            value: registry.default_wallpaper(scope).to_owned(),
            enabled: true,
        };
    };
    if registry.is_compatible(scope, &entry.value) {
        Resolved {
            value: entry.value.clone(),
            enabled: entry.enabled,
        }
    } else {
        Resolved {
            value: registry.default_wallpaper(scope).to_owned(),
            enabled: entry.enabled,
        }
    }
}

/// The value the server-visible channel should carry for a resolution:
/// the rendered wallpaper, which is the universal one while disabled.
#[must_use]
pub fn effective_value(resolved: &Resolved) -> &str {
    if resolved.enabled {
        &resolved.value
    } else {
        crate::registry::UNIVERSAL_WALLPAPER
    }
}
