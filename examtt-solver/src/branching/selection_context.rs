use crate::basic_types::Assignment;
use crate::conflicts::ConflictGraph;
use crate::engine::domains::DomainStore;
use crate::problem::Day;
use crate::problem::Subject;

/// A read-only view of the current search state which is handed to the
/// variable and value selectors.
#[derive(Debug, Clone, Copy)]
pub struct SelectionContext<'a> {
    assignment: &'a Assignment,
    domains: &'a DomainStore,
    conflicts: &'a ConflictGraph,
}

impl<'a> SelectionContext<'a> {
    pub(crate) fn new(
        assignment: &'a Assignment,
        domains: &'a DomainStore,
        conflicts: &'a ConflictGraph,
    ) -> Self {
        SelectionContext {
            assignment,
            domains,
            conflicts,
        }
    }

    /// Returns whether `subject` currently has a day in the assignment.
    pub fn is_assigned(&self, subject: Subject) -> bool {
        self.assignment.is_assigned(subject)
    }

    /// The number of candidate days left in `subject`'s domain.
    pub fn remaining(&self, subject: Subject) -> usize {
        self.domains.remaining(subject)
    }

    /// Returns whether `day` is currently in `subject`'s domain.
    pub fn domain_contains(&self, subject: Subject, day: Day) -> bool {
        self.domains.contains(subject, day)
    }

    /// Iterates over `subject`'s current domain in natural day order.
    pub fn iter_domain(&self, subject: Subject) -> impl Iterator<Item = Day> + '_ {
        self.domains.iter_days(subject)
    }

    /// The subjects conflicting with `subject`, sorted by subject index.
    pub fn neighbours(&self, subject: Subject) -> &[Subject] {
        self.conflicts.neighbours(subject)
    }

    /// The number of conflicting subjects which are still unassigned; this is
    /// the dynamic degree used by the degree heuristic.
    pub fn unassigned_degree(&self, subject: Subject) -> usize {
        self.conflicts
            .neighbours(subject)
            .iter()
            .filter(|&&neighbour| !self.assignment.is_assigned(neighbour))
            .count()
    }

    /// Iterates over all subjects of the instance in input order.
    pub fn subjects(&self) -> impl Iterator<Item = Subject> {
        self.assignment.subjects()
    }

    pub fn num_days(&self) -> usize {
        self.domains.num_days()
    }
}
