//! Plan pricing. Totals always come from a [`PricingProvider`]; the plan
//! screen never computes or hardcodes them.

use serde::{Deserialize, Serialize};

use crate::screens::plan::{BillingCycle, Plan};

pub trait PricingProvider {
    fn quote(&self, plan: &Plan, cycle: BillingCycle) -> Option<Quote>;
}

/// Price breakdown in cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub plan: String,
    pub cycle: BillingCycle,
    pub base_cents: u64,
    pub discount_cents: u64,
    pub card_charge_cents: u64,
    pub total_cents: u64,
}

impl Quote {
    pub fn subtotal_cents(&self) -> u64 {
        self.base_cents.saturating_sub(self.discount_cents)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub annual_months: u32,
    pub annual_discount_percent: f64,
    pub card_charge_percent: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            annual_months: 12,
            annual_discount_percent: 57.0,
            card_charge_percent: 3.0,
        }
    }
}

/// Pricing driven entirely by [`PricingConfig`].
#[derive(Debug, Clone, Default)]
pub struct ConfiguredPricing {
    config: PricingConfig,
}

impl ConfiguredPricing {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }
}

/// Share of `amount`, never more than `amount` itself. Float rounding on
/// large amounts can otherwise land above it.
fn percent_of(amount: u64, percent: f64) -> u64 {
    let share = (amount as f64 * percent.clamp(0.0, 100.0) / 100.0).round() as u64;
    share.min(amount)
}

impl PricingProvider for ConfiguredPricing {
    fn quote(&self, plan: &Plan, cycle: BillingCycle) -> Option<Quote> {
        let (months, discount_percent) = match cycle {
            BillingCycle::Monthly => (1, 0.0),
            BillingCycle::Annually => (
                self.config.annual_months,
                self.config.annual_discount_percent,
            ),
        };
        if months == 0 {
            tracing::warn!(plan = %plan.id, "annual billing configured with zero months");
            return None;
        }
        let base_cents = plan.price_cents.checked_mul(u64::from(months))?;
        let discount_cents = percent_of(base_cents, discount_percent);
        let subtotal = base_cents.checked_sub(discount_cents)?;
        let card_charge_cents = percent_of(subtotal, self.config.card_charge_percent);
        let Some(total_cents) = subtotal.checked_add(card_charge_cents) else {
            tracing::warn!(plan = %plan.id, "quote total overflows");
            return None;
        };
        Some(Quote {
            plan: plan.id.clone(),
            cycle,
            base_cents,
            discount_cents,
            card_charge_cents,
            total_cents,
        })
    }
}

/// Formats cents as a dollar amount, e.g. `$1,234.50`.
pub fn format_cents(cents: u64) -> String {
    let dollars = (cents / 100).to_string();
    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (index, digit) in dollars.chars().enumerate() {
        if index > 0 && (dollars.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("${}.{:02}", grouped, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regular() -> Plan {
        Plan::new("regular", "Regular", 9_999)
    }

    #[test]
    fn monthly_quote_adds_card_charge() {
        let quote = ConfiguredPricing::default()
            .quote(&regular(), BillingCycle::Monthly)
            .expect("quote");
        assert_eq!(quote.base_cents, 9_999);
        assert_eq!(quote.discount_cents, 0);
        assert_eq!(quote.card_charge_cents, 300);
        assert_eq!(quote.total_cents, 10_299);
    }

    #[test]
    fn annual_quote_applies_discount_before_card_charge() {
        let pricing = ConfiguredPricing::new(PricingConfig {
            annual_months: 12,
            annual_discount_percent: 50.0,
            card_charge_percent: 0.0,
        });
        let quote = pricing
            .quote(&regular(), BillingCycle::Annually)
            .expect("quote");
        assert_eq!(quote.base_cents, 119_988);
        assert_eq!(quote.subtotal_cents(), 59_994);
        assert_eq!(quote.total_cents, 59_994);
    }

    #[test]
    fn zero_annual_months_yields_no_quote() {
        let pricing = ConfiguredPricing::new(PricingConfig {
            annual_months: 0,
            ..PricingConfig::default()
        });
        assert!(pricing.quote(&regular(), BillingCycle::Annually).is_none());
        assert!(pricing.quote(&regular(), BillingCycle::Monthly).is_some());
    }

    #[test]
    fn oversized_prices_yield_no_quote_instead_of_overflowing() {
        let huge = Plan::new("huge", "Huge", u64::MAX);
        let pricing = ConfiguredPricing::default();
        assert!(pricing.quote(&huge, BillingCycle::Monthly).is_none());
        assert!(pricing.quote(&huge, BillingCycle::Annually).is_none());
    }

    #[test]
    fn full_discount_on_large_price_stays_in_range() {
        let pricing = ConfiguredPricing::new(PricingConfig {
            annual_months: 12,
            annual_discount_percent: 100.0,
            card_charge_percent: 0.0,
        });
        let plan = Plan::new("large", "Large", (1 << 60) + 255);
        let quote = pricing
            .quote(&plan, BillingCycle::Annually)
            .expect("quote");
        assert!(quote.discount_cents <= quote.base_cents);
        assert_eq!(quote.total_cents, quote.subtotal_cents());
    }

    #[test]
    fn formats_cents_with_grouping() {
        assert_eq!(format_cents(0), "$0.00");
        assert_eq!(format_cents(9_999), "$99.99");
        assert_eq!(format_cents(97_000), "$970.00");
        assert_eq!(format_cents(123_456_789), "$1,234,567.89");
    }
}
