//! Variable selection: which unassigned subject to schedule next.
//!
//! Three strategies are provided, covering every combination of the MRV and
//! degree toggles of [`HeuristicConfig`]:
//! - [`InputOrder`] — stable input order, no heuristics;
//! - [`Smallest`] — Minimum Remaining Values, with optional degree
//!   tie-breaking;
//! - [`MostConstrained`] — the degree heuristic on its own.
//!
//! All remaining ties fall through to the smallest input-defined subject
//! index, which makes selection deterministic for identical inputs and
//! configuration.

mod input_order;
mod most_constrained;
mod smallest;

pub use input_order::InputOrder;
pub use most_constrained::MostConstrained;
pub use smallest::Smallest;

use crate::branching::HeuristicConfig;
use crate::branching::SelectionContext;
use crate::problem::Subject;

/// A trait containing the interface for variable selectors: the strategies
/// which decide the next subject to branch on.
pub trait VariableSelector {
    /// Determines which subject to select next if there are any left to
    /// branch on. Should only return [`None`] when all subjects passed to the
    /// selector have been assigned.
    fn select_variable(&mut self, context: &SelectionContext) -> Option<Subject>;
}

/// Creates the [`VariableSelector`] realising the MRV/degree combination of
/// `config` over `subjects`.
pub fn create_variable_selector(
    config: HeuristicConfig,
    subjects: &[Subject],
) -> Box<dyn VariableSelector> {
    match (config.use_mrv, config.use_degree) {
        (false, false) => Box::new(InputOrder::new(subjects)),
        (true, false) => Box::new(Smallest::new(subjects)),
        (true, true) => Box::new(Smallest::with_degree_tie_breaking(subjects)),
        (false, true) => Box::new(MostConstrained::new(subjects)),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use crate::basic_types::Assignment;
    use crate::conflicts::ConflictGraph;
    use crate::engine::domains::DomainStore;
    use crate::problem::ExamProblem;

    /// Builds the search state components for a fresh instance with the given
    /// registrations; the domains are full and nothing is assigned.
    pub(crate) fn context_for_testing(
        num_subjects: usize,
        num_days: usize,
        registrations: &[&[usize]],
    ) -> (Assignment, DomainStore, ConflictGraph) {
        let mut problem = ExamProblem::new(num_subjects, num_days).unwrap();
        for registration in registrations {
            problem
                .add_registration(registration.iter().copied())
                .unwrap();
        }

        (
            Assignment::new(num_subjects),
            DomainStore::new(num_subjects, num_days),
            ConflictGraph::from_problem(&problem),
        )
    }
}
