use serde::{Deserialize, Serialize};

use super::registry::FieldRegistry;

/// Display strings keyed by field, one entry per registry key.
///
/// The key set is fixed at construction: writes to unknown keys are ignored
/// and clearing a key resets it to the empty string instead of removing it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldStore {
    entries: Vec<(String, String)>,
}

impl FieldStore {
    pub fn for_registry(registry: &FieldRegistry) -> Self {
        Self {
            entries: registry
                .keys()
                .map(|key| (key.to_string(), String::new()))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, value)| value.as_str())
    }

    /// Writes a display string. Returns `false` when `key` is not part of the
    /// store.
    pub fn set(&mut self, key: &str, display: impl Into<String>) -> bool {
        match self.entries.iter_mut().find(|(candidate, _)| candidate == key) {
            Some((_, value)) => {
                *value = display.into();
                true
            }
            None => {
                tracing::warn!(key, "ignoring write to unknown field");
                false
            }
        }
    }

    pub fn clear(&mut self, key: &str) -> bool {
        self.set(key, String::new())
    }

    /// True when the display string is non-empty after trimming.
    pub fn is_filled(&self, key: &str) -> bool {
        self.get(key).is_some_and(|value| !value.trim().is_empty())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when the key set matches the registry exactly, in order.
    pub fn matches_registry(&self, registry: &FieldRegistry) -> bool {
        self.keys().eq(registry.keys())
    }

    /// Rebuilds the store over `registry`, keeping values for shared keys.
    pub fn conform_to(&self, registry: &FieldRegistry) -> Self {
        let mut conformed = Self::for_registry(registry);
        for (key, value) in self.iter() {
            if registry.contains(key) {
                conformed.set(key, value);
            }
        }
        conformed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::registry::{condominium_fields, CHARGES};

    #[test]
    fn every_registry_key_starts_empty() {
        let registry = condominium_fields();
        let store = FieldStore::for_registry(registry);
        assert!(store.matches_registry(registry));
        assert!(store.iter().all(|(_, value)| value.is_empty()));
    }

    #[test]
    fn unknown_keys_are_ignored_and_clear_keeps_entry() {
        let registry = condominium_fields();
        let mut store = FieldStore::for_registry(registry);
        assert!(!store.set("swimmingPool", "Olympic"));
        assert!(!store.contains("swimmingPool"));

        assert!(store.set(CHARGES, "App: $0, Admin: $0"));
        assert!(store.clear(CHARGES));
        assert_eq!(store.get(CHARGES), Some(""));
        assert!(store.matches_registry(registry));
    }

    #[test]
    fn whitespace_is_not_filled() {
        let mut store = FieldStore::for_registry(condominium_fields());
        store.set(CHARGES, "   ");
        assert!(!store.is_filled(CHARGES));
        store.set(CHARGES, " x ");
        assert!(store.is_filled(CHARGES));
    }

    #[test]
    fn conform_restores_missing_keys() {
        let registry = condominium_fields();
        let mut partial = FieldStore::default();
        partial.entries.push((CHARGES.to_string(), "App: $1, Admin: $2".into()));
        partial.entries.push(("stray".to_string(), "x".into()));

        let conformed = partial.conform_to(registry);
        assert!(conformed.matches_registry(registry));
        assert_eq!(conformed.get(CHARGES), Some("App: $1, Admin: $2"));
        assert!(!conformed.contains("stray"));
    }
}
