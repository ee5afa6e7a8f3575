use crate::branching::value_selection::ValueSelector;
use crate::branching::SelectionContext;
use crate::problem::Day;
use crate::problem::Subject;

/// A [`ValueSelector`] which tries the candidate days in their natural order.
#[derive(Debug, Default, Clone, Copy)]
pub struct InDomainOrder;

impl ValueSelector for InDomainOrder {
    fn order_values(&mut self, context: &SelectionContext, subject: Subject) -> Vec<Day> {
        context.iter_domain(subject).collect()
    }
}
