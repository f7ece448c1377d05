//! Required-field gate controlling forward navigation.
//!
//! The gate is a plain predicate. It carries no error payload; callers that
//! want to highlight what is missing ask [`missing`] for the labels.

use crate::fields::{FieldDescriptor, FieldRegistry, FieldStore};

/// A requirement that lives outside the field store, such as an attached
/// cover photo or an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredResource {
    pub label: &'static str,
    pub present: bool,
}

impl RequiredResource {
    pub fn new(label: &'static str, present: bool) -> Self {
        Self { label, present }
    }
}

/// True when a required descriptor has no usable display string.
pub fn is_missing(store: &FieldStore, descriptor: &FieldDescriptor) -> bool {
    descriptor.required && !store.is_filled(descriptor.key)
}

pub fn is_valid(
    store: &FieldStore,
    registry: &FieldRegistry,
    extras: &[RequiredResource],
) -> bool {
    let fields_ok = registry
        .required()
        .all(|descriptor| store.is_filled(descriptor.key));
    let extras_ok = extras.iter().all(|resource| resource.present);
    fields_ok && extras_ok
}

/// Labels of missing requirements: registry order first, then extras.
pub fn missing(
    store: &FieldStore,
    registry: &FieldRegistry,
    extras: &[RequiredResource],
) -> Vec<&'static str> {
    registry
        .fields()
        .iter()
        .filter(|descriptor| is_missing(store, descriptor))
        .map(|descriptor| descriptor.label)
        .chain(
            extras
                .iter()
                .filter(|resource| !resource.present)
                .map(|resource| resource.label),
        )
        .collect()
}
