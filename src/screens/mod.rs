//! The wizard screens. Each one owns its state and decides on its own
//! whether forward navigation is allowed.

pub mod condominium;
pub mod ownership;
pub mod plan;
pub mod selection;
pub mod summary;

pub use condominium::CondominiumInfo;
pub use ownership::ProofOfOwnership;
pub use plan::{BillingCycle, PaymentMethod, Plan, PlanOrder, PlanSelection};
pub use selection::{PropertySelection, PropertyType, Role, RoleField};
pub use summary::Summary;

use crate::navigation::{Handoff, Route};

pub trait Screen {
    const ROUTE: Route;

    fn is_valid(&self) -> bool;

    /// Handoff for the next screen, or `None` while the gate is closed.
    fn next(&self) -> Option<Handoff>;
}
