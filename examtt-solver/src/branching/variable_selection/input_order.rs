use log::warn;

use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::problem::Subject;

/// A [`VariableSelector`] which selects the first subject which is not
/// assigned, given the order in the provided list.
#[derive(Debug)]
pub struct InputOrder {
    subjects: Vec<Subject>,
}

impl InputOrder {
    pub fn new(subjects: &[Subject]) -> Self {
        if subjects.is_empty() {
            warn!("The InputOrder variable selector was not provided with any subjects");
        }
        InputOrder {
            subjects: subjects.to_vec(),
        }
    }
}

impl VariableSelector for InputOrder {
    fn select_variable(&mut self, context: &SelectionContext) -> Option<Subject> {
        self.subjects
            .iter()
            .find(|&&subject| !context.is_assigned(subject))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::variable_selection::tests::context_for_testing;

    #[test]
    fn the_first_unassigned_subject_is_selected() {
        let (assignment, domains, conflicts) = context_for_testing(3, 2, &[]);
        let subjects: Vec<_> = (0..3).map(Subject::new).collect();
        let mut strategy = InputOrder::new(&subjects);

        let context = SelectionContext::new(&assignment, &domains, &conflicts);
        assert_eq!(strategy.select_variable(&context), Some(Subject::new(0)));
    }

    #[test]
    fn assigned_subjects_are_skipped() {
        let (mut assignment, domains, conflicts) = context_for_testing(2, 2, &[]);
        assignment.assign(Subject::new(0), crate::problem::Day::new(0));

        let subjects: Vec<_> = (0..2).map(Subject::new).collect();
        let mut strategy = InputOrder::new(&subjects);

        let context = SelectionContext::new(&assignment, &domains, &conflicts);
        assert_eq!(strategy.select_variable(&context), Some(Subject::new(1)));
    }
}
