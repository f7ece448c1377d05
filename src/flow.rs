//! Drives the screens through the [`Navigator`]: each forward step runs the
//! current screen's gate, follows its handoff and mounts the next screen
//! from the delivered payload.

use crate::config::Config;
use crate::navigation::{Handoff, HandoffPayload, Navigator, Route};
use crate::pricing::{ConfiguredPricing, Quote};
use crate::screens::{
    CondominiumInfo, PlanSelection, PropertySelection, ProofOfOwnership, Screen, Summary,
};

#[derive(Debug)]
pub enum ScreenState {
    PropertySelection(PropertySelection),
    ProofOfOwnership(ProofOfOwnership),
    CondominiumInfo(CondominiumInfo),
    Summary(Summary),
    PlanSelection(PlanSelection),
}

impl ScreenState {
    pub fn route(&self) -> Route {
        match self {
            ScreenState::PropertySelection(_) => PropertySelection::ROUTE,
            ScreenState::ProofOfOwnership(_) => ProofOfOwnership::ROUTE,
            ScreenState::CondominiumInfo(_) => CondominiumInfo::ROUTE,
            ScreenState::Summary(_) => Summary::ROUTE,
            ScreenState::PlanSelection(_) => PlanSelection::ROUTE,
        }
    }

    pub fn is_valid(&self) -> bool {
        match self {
            ScreenState::PropertySelection(screen) => screen.is_valid(),
            ScreenState::ProofOfOwnership(screen) => screen.is_valid(),
            ScreenState::CondominiumInfo(screen) => screen.is_valid(),
            ScreenState::Summary(screen) => screen.is_valid(),
            ScreenState::PlanSelection(screen) => screen.is_valid(),
        }
    }

    fn next(&self) -> Option<Handoff> {
        match self {
            ScreenState::PropertySelection(screen) => screen.next(),
            ScreenState::ProofOfOwnership(screen) => screen.next(),
            ScreenState::CondominiumInfo(screen) => screen.next(),
            ScreenState::Summary(screen) => screen.next(),
            ScreenState::PlanSelection(screen) => screen.next(),
        }
    }

    pub fn as_selection_mut(&mut self) -> Option<&mut PropertySelection> {
        match self {
            ScreenState::PropertySelection(screen) => Some(screen),
            _ => None,
        }
    }

    pub fn as_ownership_mut(&mut self) -> Option<&mut ProofOfOwnership> {
        match self {
            ScreenState::ProofOfOwnership(screen) => Some(screen),
            _ => None,
        }
    }

    pub fn as_condominium(&self) -> Option<&CondominiumInfo> {
        match self {
            ScreenState::CondominiumInfo(screen) => Some(screen),
            _ => None,
        }
    }

    pub fn as_condominium_mut(&mut self) -> Option<&mut CondominiumInfo> {
        match self {
            ScreenState::CondominiumInfo(screen) => Some(screen),
            _ => None,
        }
    }

    pub fn as_summary(&self) -> Option<&Summary> {
        match self {
            ScreenState::Summary(screen) => Some(screen),
            _ => None,
        }
    }

    pub fn as_summary_mut(&mut self) -> Option<&mut Summary> {
        match self {
            ScreenState::Summary(screen) => Some(screen),
            _ => None,
        }
    }

    pub fn as_plan_mut(&mut self) -> Option<&mut PlanSelection> {
        match self {
            ScreenState::PlanSelection(screen) => Some(screen),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct OnboardingFlow {
    config: Config,
    navigator: Navigator,
    pricing: ConfiguredPricing,
    screen: ScreenState,
}

impl Default for OnboardingFlow {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl OnboardingFlow {
    pub fn new(config: Config) -> Self {
        let pricing = ConfiguredPricing::new(config.pricing.clone());
        let screen = mount(&config, Route::PropertySelection, None);
        Self {
            config,
            navigator: Navigator::new(),
            pricing,
            screen,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn route(&self) -> Route {
        self.navigator.current()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn screen(&self) -> &ScreenState {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut ScreenState {
        &mut self.screen
    }

    /// Moves forward when the current screen's gate is open. Returns the
    /// new route, or `None` if the screen stays put.
    pub fn advance(&mut self) -> Option<Route> {
        let Some(handoff) = self.screen.next() else {
            tracing::debug!(route = %self.route(), "gate closed, staying on screen");
            return None;
        };
        let route = self.navigator.follow(handoff);
        self.remount();
        Some(route)
    }

    /// Direct navigation. The mounted screen starts empty.
    pub fn visit(&mut self, route: Route) -> Route {
        self.navigator.visit(route);
        self.remount();
        route
    }

    pub fn back(&mut self) -> Option<Route> {
        let route = self.navigator.back()?;
        self.remount();
        Some(route)
    }

    /// Quote for the plan screen's current selection.
    pub fn quote(&self) -> Option<Quote> {
        match &self.screen {
            ScreenState::PlanSelection(screen) => screen.quote(&self.pricing),
            _ => None,
        }
    }

    fn remount(&mut self) {
        let payload = self.navigator.take_payload();
        self.screen = mount(&self.config, self.navigator.current(), payload);
    }
}

fn mount(config: &Config, route: Route, payload: Option<HandoffPayload>) -> ScreenState {
    tracing::debug!(%route, with_payload = payload.is_some(), "mounting screen");
    match route {
        Route::PropertySelection => ScreenState::PropertySelection(
            PropertySelection::with_document_filter(config.media.role_documents.clone()),
        ),
        Route::ProofOfOwnership => ScreenState::ProofOfOwnership(ProofOfOwnership::new(
            config.media.ownership_documents.clone(),
        )),
        Route::CondominiumInfo => {
            ScreenState::CondominiumInfo(CondominiumInfo::with_config(config).receiving(payload))
        }
        Route::CondominiumSummary => ScreenState::Summary(Summary::from_handoff(payload)),
        Route::PlanSelection => ScreenState::PlanSelection(PlanSelection::new(
            config.plans.clone(),
            config.payment_methods.clone(),
        )),
    }
}
