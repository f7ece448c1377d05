//! Route table and the one-shot state transfer between screens.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::OnboardingError;
use crate::fields::{FieldStore, FieldValue};
use crate::screens::selection::{PropertyType, Role};

/// Most routes kept for `back`; older entries are dropped first.
pub const HISTORY_LIMIT: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    PropertySelection,
    ProofOfOwnership,
    CondominiumInfo,
    CondominiumSummary,
    PlanSelection,
}

impl Route {
    /// Every route, in intended traversal order.
    pub const ALL: [Route; 5] = [
        Route::PropertySelection,
        Route::ProofOfOwnership,
        Route::CondominiumInfo,
        Route::CondominiumSummary,
        Route::PlanSelection,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::PropertySelection => "/",
            Route::ProofOfOwnership => "/proof-of-ownership",
            Route::CondominiumInfo => "/condominium-info",
            Route::CondominiumSummary => "/condominium-summary",
            Route::PlanSelection => "/plan-selection",
        }
    }

    pub fn from_path(path: &str) -> Result<Self, OnboardingError> {
        Route::ALL
            .into_iter()
            .find(|route| route.path() == path)
            .ok_or_else(|| OnboardingError::UnknownRoute(path.to_string()))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// What the property selection screen hands forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionContext {
    pub property_type: PropertyType,
    pub role: Role,
}

/// Condominium field state handed to the summary screen: display strings
/// plus the structured values needed to edit them again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CondominiumSnapshot {
    pub store: FieldStore,
    pub values: BTreeMap<String, FieldValue>,
    pub selection: Option<SelectionContext>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandoffPayload {
    Selection(SelectionContext),
    Condominium(CondominiumSnapshot),
    Empty,
}

/// Immutable state package addressed to one screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Handoff {
    target: Route,
    payload: HandoffPayload,
    issued_at: DateTime<Utc>,
}

impl Handoff {
    pub fn new(target: Route, payload: HandoffPayload) -> Self {
        Self {
            target,
            payload,
            issued_at: Utc::now(),
        }
    }

    pub fn target(&self) -> Route {
        self.target
    }

    pub fn payload(&self) -> &HandoffPayload {
        &self.payload
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    pub fn into_payload(self) -> HandoffPayload {
        self.payload
    }
}

/// Tracks the current route and the pending handoff for it. A payload is
/// delivered at most once and only to the route it was addressed to; any
/// other way of reaching a screen starts it empty.
#[derive(Debug)]
pub struct Navigator {
    current: Route,
    pending: Option<Handoff>,
    history: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self::starting_at(Route::PropertySelection)
    }

    pub fn starting_at(route: Route) -> Self {
        Self {
            current: route,
            pending: None,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    pub fn history(&self) -> &[Route] {
        &self.history
    }

    pub fn follow(&mut self, handoff: Handoff) -> Route {
        tracing::info!(from = %self.current, to = %handoff.target, "navigation handoff");
        self.remember_current();
        self.current = handoff.target;
        self.pending = Some(handoff);
        self.current
    }

    /// Direct navigation, as by typing a path. Drops any pending payload.
    pub fn visit(&mut self, route: Route) -> Route {
        tracing::info!(from = %self.current, to = %route, "direct navigation");
        self.remember_current();
        self.current = route;
        self.pending = None;
        self.current
    }

    fn remember_current(&mut self) {
        if self.history.len() >= HISTORY_LIMIT {
            self.history.remove(0);
        }
        self.history.push(self.current);
    }

    pub fn back(&mut self) -> Option<Route> {
        let previous = self.history.pop()?;
        tracing::info!(from = %self.current, to = %previous, "navigating back");
        self.current = previous;
        self.pending = None;
        Some(previous)
    }

    pub fn take_payload(&mut self) -> Option<HandoffPayload> {
        match self.pending.take() {
            Some(handoff) if handoff.target == self.current => Some(handoff.into_payload()),
            Some(stale) => {
                tracing::debug!(
                    addressed = %stale.target,
                    current = %self.current,
                    "dropping stale handoff"
                );
                None
            }
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection_handoff() -> Handoff {
        Handoff::new(
            Route::CondominiumInfo,
            HandoffPayload::Selection(SelectionContext {
                property_type: PropertyType::Condominiums,
                role: Role::Landlord,
            }),
        )
    }

    #[test]
    fn paths_round_trip_through_route_table() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()).ok(), Some(route));
        }
        assert!(matches!(
            Route::from_path("/admin"),
            Err(OnboardingError::UnknownRoute(path)) if path == "/admin"
        ));
    }

    #[test]
    fn payload_is_delivered_once() {
        let mut navigator = Navigator::new();
        navigator.follow(selection_handoff());
        assert_eq!(navigator.current(), Route::CondominiumInfo);
        assert!(matches!(
            navigator.take_payload(),
            Some(HandoffPayload::Selection(_))
        ));
        assert!(navigator.take_payload().is_none());
    }

    #[test]
    fn direct_visit_drops_pending_payload() {
        let mut navigator = Navigator::new();
        navigator.follow(selection_handoff());
        navigator.visit(Route::CondominiumInfo);
        assert!(navigator.take_payload().is_none());
    }

    #[test]
    fn back_then_forward_starts_empty() {
        let mut navigator = Navigator::new();
        navigator.follow(selection_handoff());
        assert_eq!(navigator.back(), Some(Route::PropertySelection));
        navigator.visit(Route::CondominiumInfo);
        assert!(navigator.take_payload().is_none());
        assert_eq!(navigator.history(), &[Route::PropertySelection][..]);
    }

    #[test]
    fn back_on_empty_history_stays_put() {
        let mut navigator = Navigator::new();
        assert_eq!(navigator.back(), None);
        assert_eq!(navigator.current(), Route::PropertySelection);
    }

    #[test]
    fn history_keeps_only_the_latest_routes() {
        let mut navigator = Navigator::new();
        for step in 0..HISTORY_LIMIT * 3 {
            navigator.visit(Route::ALL[step % Route::ALL.len()]);
        }
        assert_eq!(navigator.history().len(), HISTORY_LIMIT);

        let mut steps_back = 0;
        while navigator.back().is_some() {
            steps_back += 1;
        }
        assert_eq!(steps_back, HISTORY_LIMIT);
    }

    #[test]
    fn handoff_serializes_as_json() {
        let handoff = selection_handoff();
        let json = serde_json::to_string(&handoff).expect("serialize");
        let restored: Handoff = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, handoff);
    }
}
