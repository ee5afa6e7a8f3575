use itertools::Itertools;

use crate::branching::value_selection::ValueSelector;
use crate::branching::SelectionContext;
use crate::problem::Day;
use crate::problem::Subject;

/// A [`ValueSelector`] implementing Least Constraining Value: the candidate
/// days are ordered by how many options they would eliminate from the domains
/// of conflicting, still-unassigned subjects, fewest eliminations first.
///
/// Ties are broken by the natural day order, keeping the ordering
/// deterministic.
#[derive(Debug, Default, Clone, Copy)]
pub struct LeastConstraining;

impl ValueSelector for LeastConstraining {
    fn order_values(&mut self, context: &SelectionContext, subject: Subject) -> Vec<Day> {
        context
            .iter_domain(subject)
            .map(|day| {
                let eliminated = context
                    .neighbours(subject)
                    .iter()
                    .filter(|&&neighbour| {
                        !context.is_assigned(neighbour) && context.domain_contains(neighbour, day)
                    })
                    .count();
                (eliminated, day)
            })
            .sorted_by_key(|&(eliminated, day)| (eliminated, day))
            .map(|(_, day)| day)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::variable_selection::tests::context_for_testing;

    #[test]
    fn days_eliminating_fewer_neighbour_options_come_first() {
        let (assignment, mut domains, conflicts) = context_for_testing(3, 3, &[&[0, 1], &[0, 2]]);
        // Day 0 is still available to both neighbours; day 2 only to one.
        domains.new_frame();
        let _ = domains.remove(Subject::new(1), Day::new(2));

        let context = SelectionContext::new(&assignment, &domains, &conflicts);
        let ordered = LeastConstraining.order_values(&context, Subject::new(0));

        assert_eq!(ordered, vec![Day::new(2), Day::new(0), Day::new(1)]);
    }

    #[test]
    fn equal_elimination_counts_fall_back_to_natural_order() {
        let (assignment, domains, conflicts) = context_for_testing(2, 3, &[&[0, 1]]);

        let context = SelectionContext::new(&assignment, &domains, &conflicts);
        let ordered = LeastConstraining.order_values(&context, Subject::new(0));

        assert_eq!(ordered, vec![Day::new(0), Day::new(1), Day::new(2)]);
    }

    #[test]
    fn assigned_neighbours_do_not_contribute_eliminations() {
        let (mut assignment, domains, conflicts) = context_for_testing(2, 2, &[&[0, 1]]);
        assignment.assign(Subject::new(1), Day::new(0));

        let context = SelectionContext::new(&assignment, &domains, &conflicts);
        let ordered = LeastConstraining.order_values(&context, Subject::new(0));

        assert_eq!(ordered, vec![Day::new(0), Day::new(1)]);
    }
}
