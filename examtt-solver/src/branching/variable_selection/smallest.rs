use std::cmp::Reverse;

use log::warn;

use crate::branching::tie_breaking::Direction;
use crate::branching::tie_breaking::InOrderTieBreaker;
use crate::branching::tie_breaking::TieBreaker;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::problem::Subject;

/// The selection key of [`Smallest`]: the remaining domain size, then the
/// negated dynamic degree. Minimising the key lexicographically realises MRV
/// with most-constrained-first tie-breaking.
type SelectionKey = (usize, Reverse<usize>);

/// A [`VariableSelector`] which selects the subject with the smallest number
/// of remaining candidate days (Minimum Remaining Values).
///
/// With [`Smallest::with_degree_tie_breaking`], subjects with equally small
/// domains are distinguished by their number of conflicts with unassigned
/// subjects, most-constrained-first. Any remaining tie is broken towards the
/// smallest input-defined subject index by the [`InOrderTieBreaker`].
#[derive(Debug)]
pub struct Smallest {
    subjects: Vec<Subject>,
    tie_breaker: InOrderTieBreaker<Subject, SelectionKey>,
    break_ties_by_degree: bool,
}

impl Smallest {
    pub fn new(subjects: &[Subject]) -> Self {
        Self::create(subjects, false)
    }

    pub fn with_degree_tie_breaking(subjects: &[Subject]) -> Self {
        Self::create(subjects, true)
    }

    fn create(subjects: &[Subject], break_ties_by_degree: bool) -> Self {
        if subjects.is_empty() {
            warn!("The Smallest variable selector was not provided with any subjects");
        }
        Smallest {
            subjects: subjects.to_vec(),
            tie_breaker: InOrderTieBreaker::new(Direction::Minimum),
            break_ties_by_degree,
        }
    }
}

impl VariableSelector for Smallest {
    fn select_variable(&mut self, context: &SelectionContext) -> Option<Subject> {
        self.subjects
            .iter()
            .filter(|&&subject| !context.is_assigned(subject))
            .for_each(|&subject| {
                let degree = if self.break_ties_by_degree {
                    context.unassigned_degree(subject)
                } else {
                    0
                };
                self.tie_breaker
                    .consider(subject, (context.remaining(subject), Reverse(degree)));
            });
        self.tie_breaker.select()
    }
}
