//! Final screen: plan, billing cycle and stored payment method.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Screen;
use crate::navigation::{Handoff, Route};
use crate::pricing::{PricingProvider, Quote};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub price_cents: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub was_price_cents: Option<u64>,
    pub label: String,
    #[serde(default)]
    pub auto_pay: bool,
}

impl Plan {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price_cents: u64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price_cents,
            was_price_cents: None,
            label: "Price for 1-50 unit".into(),
            auto_pay: false,
        }
    }

    pub fn with_was_price(mut self, cents: u64) -> Self {
        self.was_price_cents = Some(cents);
        self
    }

    pub fn with_auto_pay(mut self) -> Self {
        self.auto_pay = true;
        self
    }

    pub fn defaults() -> Vec<Plan> {
        vec![
            Plan::new("regular", "Regular", 9_999).with_auto_pay(),
            Plan::new("platinum", "Platinum", 12_999).with_was_price(19_999),
            Plan::new("enterprise", "Enterprize", 19_999),
        ]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Annually,
}

/// A stored card. Only the masked number is ever held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: Uuid,
    pub holder: String,
    pub masked_number: String,
}

impl PaymentMethod {
    pub fn new(holder: impl Into<String>, masked_number: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            holder: holder.into(),
            masked_number: masked_number.into(),
        }
    }
}

/// Simulated order; nothing is charged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanOrder {
    pub plan: Plan,
    pub cycle: BillingCycle,
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Clone)]
pub struct PlanSelection {
    plans: Vec<Plan>,
    payment_methods: Vec<PaymentMethod>,
    selected_plan: Option<usize>,
    selected_payment: Option<usize>,
    cycle: BillingCycle,
}

impl Default for PlanSelection {
    fn default() -> Self {
        Self::new(Plan::defaults(), Vec::new())
    }
}

impl PlanSelection {
    /// Starts with the first plan and first payment method selected.
    pub fn new(plans: Vec<Plan>, payment_methods: Vec<PaymentMethod>) -> Self {
        let selected_plan = (!plans.is_empty()).then_some(0);
        let selected_payment = (!payment_methods.is_empty()).then_some(0);
        Self {
            plans,
            payment_methods,
            selected_plan,
            selected_payment,
            cycle: BillingCycle::default(),
        }
    }

    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    pub fn payment_methods(&self) -> &[PaymentMethod] {
        &self.payment_methods
    }

    pub fn cycle(&self) -> BillingCycle {
        self.cycle
    }

    pub fn selected_plan(&self) -> Option<&Plan> {
        self.plans.get(self.selected_plan?)
    }

    pub fn selected_payment(&self) -> Option<&PaymentMethod> {
        self.payment_methods.get(self.selected_payment?)
    }

    pub fn select_plan(&mut self, id: &str) -> bool {
        match self.plans.iter().position(|plan| plan.id == id) {
            Some(index) => {
                self.selected_plan = Some(index);
                true
            }
            None => false,
        }
    }

    pub fn select_cycle(&mut self, cycle: BillingCycle) {
        self.cycle = cycle;
    }

    pub fn select_payment(&mut self, id: Uuid) -> bool {
        match self.payment_methods.iter().position(|method| method.id == id) {
            Some(index) => {
                self.selected_payment = Some(index);
                true
            }
            None => false,
        }
    }

    /// Stores a new card and selects it.
    pub fn add_payment_method(&mut self, method: PaymentMethod) -> Uuid {
        let id = method.id;
        self.payment_methods.push(method);
        self.selected_payment = Some(self.payment_methods.len() - 1);
        id
    }

    pub fn quote(&self, pricing: &dyn PricingProvider) -> Option<Quote> {
        pricing.quote(self.selected_plan()?, self.cycle)
    }

    pub fn submit(&self) -> Option<PlanOrder> {
        let order = PlanOrder {
            plan: self.selected_plan()?.clone(),
            cycle: self.cycle,
            payment_method: self.selected_payment()?.clone(),
        };
        tracing::info!(plan = %order.plan.id, cycle = ?order.cycle, "plan order submitted");
        Some(order)
    }
}

impl Screen for PlanSelection {
    const ROUTE: Route = Route::PlanSelection;

    fn is_valid(&self) -> bool {
        self.selected_plan().is_some() && self.selected_payment().is_some()
    }

    /// Last screen of the wizard.
    fn next(&self) -> Option<Handoff> {
        None
    }
}
