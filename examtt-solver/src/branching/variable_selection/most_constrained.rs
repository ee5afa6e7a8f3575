use log::warn;

use crate::branching::tie_breaking::Direction;
use crate::branching::tie_breaking::InOrderTieBreaker;
use crate::branching::tie_breaking::TieBreaker;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::problem::Subject;

/// A [`VariableSelector`] which selects the subject with the highest number of
/// conflicts to still-unassigned subjects (the degree heuristic on its own).
///
/// The degree is dynamic: conflicts with already assigned subjects do not
/// count. Ties are broken towards the smallest input-defined subject index.
#[derive(Debug)]
pub struct MostConstrained {
    subjects: Vec<Subject>,
    tie_breaker: InOrderTieBreaker<Subject, usize>,
}

impl MostConstrained {
    pub fn new(subjects: &[Subject]) -> Self {
        if subjects.is_empty() {
            warn!("The MostConstrained variable selector was not provided with any subjects");
        }
        MostConstrained {
            subjects: subjects.to_vec(),
            tie_breaker: InOrderTieBreaker::new(Direction::Maximum),
        }
    }
}

impl VariableSelector for MostConstrained {
    fn select_variable(&mut self, context: &SelectionContext) -> Option<Subject> {
        self.subjects
            .iter()
            .filter(|&&subject| !context.is_assigned(subject))
            .for_each(|&subject| {
                self.tie_breaker
                    .consider(subject, context.unassigned_degree(subject));
            });
        self.tie_breaker.select()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::variable_selection::tests::context_for_testing;
    use crate::problem::Day;

    #[test]
    fn the_subject_with_the_most_unassigned_conflicts_is_selected() {
        let (assignment, domains, conflicts) = context_for_testing(3, 3, &[&[0, 2], &[1, 2]]);

        let subjects: Vec<_> = (0..3).map(Subject::new).collect();
        let mut strategy = MostConstrained::new(&subjects);

        let context = SelectionContext::new(&assignment, &domains, &conflicts);
        assert_eq!(strategy.select_variable(&context), Some(Subject::new(2)));
    }

    #[test]
    fn assigned_neighbours_no_longer_count_towards_the_degree() {
        let (mut assignment, domains, conflicts) =
            context_for_testing(3, 3, &[&[0, 2], &[1, 2], &[0, 1]]);
        // Once subject 2's neighbours are considered, only unassigned ones
        // count; assigning subject 1 drops the degrees of both 0 and 2 to 1,
        // so input order decides.
        assignment.assign(Subject::new(1), Day::new(0));

        let subjects: Vec<_> = (0..3).map(Subject::new).collect();
        let mut strategy = MostConstrained::new(&subjects);

        let context = SelectionContext::new(&assignment, &domains, &conflicts);
        assert_eq!(strategy.select_variable(&context), Some(Subject::new(0)));
    }
}
