use std::collections::BTreeMap;

use super::Screen;
use crate::fields::{condominium_fields, FieldDescriptor, FieldRegistry, FieldStore, FieldValue};
use crate::navigation::{
    CondominiumSnapshot, Handoff, HandoffPayload, Route, SelectionContext,
};

/// Read-only review of the condominium fields. Deleting a row only hides it
/// from this screen.
#[derive(Debug, Clone)]
pub struct Summary {
    registry: &'static FieldRegistry,
    store: FieldStore,
    values: BTreeMap<String, FieldValue>,
    selection: Option<SelectionContext>,
    hidden: Vec<&'static str>,
}

impl Default for Summary {
    fn default() -> Self {
        let registry = condominium_fields();
        Self {
            registry,
            store: FieldStore::for_registry(registry),
            values: BTreeMap::new(),
            selection: None,
            hidden: Vec::new(),
        }
    }
}

impl Summary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the screen from a handoff. Anything other than a condominium
    /// snapshot leaves every row empty.
    pub fn from_handoff(payload: Option<HandoffPayload>) -> Self {
        let mut summary = Self::default();
        match payload {
            Some(HandoffPayload::Condominium(snapshot)) => {
                summary.store = snapshot.store.conform_to(summary.registry);
                summary.values = snapshot.values;
                summary.selection = snapshot.selection;
            }
            Some(other) => {
                tracing::debug!(payload = ?other, "summary ignoring unrelated payload");
            }
            None => {}
        }
        summary
    }

    pub fn store(&self) -> &FieldStore {
        &self.store
    }

    pub fn selection(&self) -> Option<SelectionContext> {
        self.selection
    }

    pub fn visible_fields(&self) -> impl Iterator<Item = &FieldDescriptor> + '_ {
        self.registry
            .fields()
            .iter()
            .filter(|descriptor| !self.hidden.contains(&descriptor.key))
    }

    pub fn is_visible(&self, key: &str) -> bool {
        self.registry.contains(key) && !self.hidden.iter().any(|hidden| *hidden == key)
    }

    /// Hides a row that has data. Empty rows have nothing to delete.
    pub fn delete(&mut self, key: &str) -> bool {
        let Some(descriptor) = self.registry.get(key) else {
            return false;
        };
        if !self.store.is_filled(key) || !self.is_visible(key) {
            return false;
        }
        self.hidden.push(descriptor.key);
        tracing::debug!(key, "summary row hidden");
        true
    }

    /// Visible rows with their display strings, `""` when unset.
    pub fn entries(&self) -> Vec<(&FieldDescriptor, &str)> {
        self.visible_fields()
            .map(|descriptor| {
                let display = self.store.get(descriptor.key).unwrap_or_default();
                (descriptor, display)
            })
            .collect()
    }

    /// Visible rows split into two columns by registry position.
    pub fn columns(&self) -> (Vec<&FieldDescriptor>, Vec<&FieldDescriptor>) {
        let (left, right): (Vec<_>, Vec<_>) = self
            .registry
            .fields()
            .iter()
            .enumerate()
            .filter(|(_, descriptor)| !self.hidden.contains(&descriptor.key))
            .partition(|(index, _)| index % 2 == 0);
        (
            left.into_iter().map(|(_, d)| d).collect(),
            right.into_iter().map(|(_, d)| d).collect(),
        )
    }

    pub fn back(&self) -> Route {
        Route::CondominiumInfo
    }

    /// Snapshot of the reviewed state, for returning to the editor screen.
    pub fn snapshot(&self) -> CondominiumSnapshot {
        CondominiumSnapshot {
            store: self.store.clone(),
            values: self.values.clone(),
            selection: self.selection,
        }
    }
}

impl Screen for Summary {
    const ROUTE: Route = Route::CondominiumSummary;

    fn is_valid(&self) -> bool {
        true
    }

    fn next(&self) -> Option<Handoff> {
        Some(Handoff::new(Route::PlanSelection, HandoffPayload::Empty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::registry::{CHARGES, PARKING, PET_FEES, PROPERTY_ADDRESS};

    fn snapshot() -> HandoffPayload {
        let mut store = FieldStore::for_registry(condominium_fields());
        store.set(PROPERTY_ADDRESS, "Maple Court");
        store.set(CHARGES, "App: $0, Admin: $50");
        HandoffPayload::Condominium(CondominiumSnapshot {
            store,
            values: BTreeMap::new(),
            selection: None,
        })
    }

    #[test]
    fn without_payload_every_row_is_empty() {
        let summary = Summary::from_handoff(None);
        assert_eq!(summary.entries().len(), condominium_fields().len());
        assert!(summary.entries().iter().all(|(_, display)| display.is_empty()));
    }

    #[test]
    fn delete_hides_filled_rows_only() {
        let mut summary = Summary::from_handoff(Some(snapshot()));
        assert!(!summary.delete(PARKING));
        assert!(!summary.delete("unknown"));
        assert!(summary.delete(CHARGES));
        assert!(!summary.delete(CHARGES));
        assert!(!summary.is_visible(CHARGES));
        assert_eq!(summary.entries().len(), condominium_fields().len() - 1);
        assert_eq!(summary.store().get(CHARGES), Some("App: $0, Admin: $50"));
    }

    #[test]
    fn columns_alternate_by_registry_position() {
        let mut summary = Summary::from_handoff(Some(snapshot()));
        let (left, right) = summary.columns();
        assert_eq!(left[0].key, PROPERTY_ADDRESS);
        assert_eq!(right[0].key, PET_FEES);
        summary.delete(PROPERTY_ADDRESS);
        let (left, _) = summary.columns();
        assert_ne!(left[0].key, PROPERTY_ADDRESS);
    }

    #[test]
    fn next_is_unconditional_and_back_returns_to_editor() {
        let summary = Summary::new();
        assert_eq!(summary.next().map(|h| h.target()), Some(Route::PlanSelection));
        assert_eq!(summary.back(), Route::CondominiumInfo);
    }
}
