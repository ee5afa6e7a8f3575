//! The conflict index derived from the student registrations.
//!
//! Two subjects conflict iff at least one student is registered for both; the
//! relation is symmetric and irreflexive, and it is built exactly once before
//! search starts.

use fnv::FnvHashSet;
use itertools::Itertools;

use crate::containers::KeyedVec;
use crate::problem::ExamProblem;
use crate::problem::Subject;

/// A symmetric relation over subject pairs together with, for every subject,
/// the list of subjects it conflicts with.
///
/// The neighbour lists are sorted by subject index, which keeps the search
/// deterministic for identical inputs.
#[derive(Debug, Clone)]
pub struct ConflictGraph {
    edges: FnvHashSet<(Subject, Subject)>,
    neighbours: KeyedVec<Subject, Vec<Subject>>,
}

impl ConflictGraph {
    /// Builds the conflict index by enumerating the subject pairs of every
    /// registration.
    pub fn from_problem(problem: &ExamProblem) -> Self {
        let mut edges = FnvHashSet::default();

        for registration in problem.registrations() {
            // Registrations are deduplicated on input, so every generated pair
            // has two distinct subjects.
            for (&a, &b) in registration.iter().tuple_combinations() {
                let _ = edges.insert((a, b));
                let _ = edges.insert((b, a));
            }
        }

        let neighbours = problem
            .subjects()
            .map(|subject| {
                problem
                    .subjects()
                    .filter(|&other| edges.contains(&(subject, other)))
                    .collect()
            })
            .collect();

        ConflictGraph { edges, neighbours }
    }

    /// Returns whether some student is registered for both `a` and `b`.
    pub fn conflict(&self, a: Subject, b: Subject) -> bool {
        self.edges.contains(&(a, b))
    }

    /// The subjects which conflict with `subject`, sorted by subject index.
    pub fn neighbours(&self, subject: Subject) -> &[Subject] {
        &self.neighbours[subject]
    }

    /// The number of subjects which conflict with `subject`.
    pub fn degree(&self, subject: Subject) -> usize {
        self.neighbours[subject].len()
    }

    pub fn num_subjects(&self) -> usize {
        self.neighbours.len()
    }

    /// Iterates over all subjects of the underlying instance in input order.
    pub(crate) fn subjects(&self) -> impl Iterator<Item = Subject> {
        self.neighbours.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem_with_registrations(
        num_subjects: usize,
        registrations: &[&[usize]],
    ) -> ExamProblem {
        let mut problem = ExamProblem::new(num_subjects, 3).unwrap();
        for registration in registrations {
            problem.add_registration(registration.iter().copied()).unwrap();
        }
        problem
    }

    #[test]
    fn conflicts_are_symmetric() {
        let problem = problem_with_registrations(4, &[&[0, 2]]);
        let graph = ConflictGraph::from_problem(&problem);

        assert!(graph.conflict(Subject::new(0), Subject::new(2)));
        assert!(graph.conflict(Subject::new(2), Subject::new(0)));
        assert!(!graph.conflict(Subject::new(0), Subject::new(1)));
    }

    #[test]
    fn subjects_never_conflict_with_themselves() {
        let problem = problem_with_registrations(3, &[&[0, 1, 2]]);
        let graph = ConflictGraph::from_problem(&problem);

        for subject in problem.subjects() {
            assert!(!graph.conflict(subject, subject));
        }
    }

    #[test]
    fn neighbour_lists_are_sorted_and_deduplicated() {
        // Subjects 1 and 3 are taken together by two students.
        let problem = problem_with_registrations(4, &[&[3, 1], &[1, 3], &[1, 0]]);
        let graph = ConflictGraph::from_problem(&problem);

        assert_eq!(
            graph.neighbours(Subject::new(1)),
            &[Subject::new(0), Subject::new(3)]
        );
        assert_eq!(graph.degree(Subject::new(1)), 2);
    }

    #[test]
    fn singleton_registrations_introduce_no_conflicts() {
        let problem = problem_with_registrations(3, &[&[1], &[]]);
        let graph = ConflictGraph::from_problem(&problem);

        for subject in problem.subjects() {
            assert_eq!(graph.degree(subject), 0);
        }
    }
}
