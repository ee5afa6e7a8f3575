//! Value ordering: in which order to try the candidate days of the selected
//! subject.
//!
//! The ordering affects the shape of the produced timetable and the speed of
//! the search, never whether a solution exists.

mod in_domain_order;
mod least_constraining;

pub use in_domain_order::InDomainOrder;
pub use least_constraining::LeastConstraining;

use crate::branching::HeuristicConfig;
use crate::branching::SelectionContext;
use crate::problem::Day;
use crate::problem::Subject;

/// A trait containing the interface for value selectors: the strategies which
/// order the candidate days of the subject which is branched on.
pub trait ValueSelector {
    /// Orders the days currently in `subject`'s domain; every returned day is
    /// a member of the domain, and every member occurs exactly once.
    fn order_values(&mut self, context: &SelectionContext, subject: Subject) -> Vec<Day>;
}

/// Creates the [`ValueSelector`] realising the LCV toggle of `config`.
pub fn create_value_selector(config: HeuristicConfig) -> Box<dyn ValueSelector> {
    if config.use_lcv {
        Box::new(LeastConstraining)
    } else {
        Box::new(InDomainOrder)
    }
}
