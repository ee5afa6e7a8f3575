//! One-level forward checking: after a tentative assignment, the assigned day
//! is removed from the domains of all conflicting, still-unassigned subjects.
//! There is no recursive arc-consistency pass.

use crate::basic_types::Assignment;
use crate::conflicts::ConflictGraph;
use crate::engine::domains::DomainStore;
use crate::problem::Day;
use crate::problem::Subject;

/// Reported when a propagation wiped out the domain of an unassigned subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EmptyDomain;

/// Propagates the tentative assignment `subject := day`.
///
/// Opens a new prune frame and removes `day` from every unassigned
/// neighbour's domain. On failure the partial removals are left on the open
/// frame; undoing that frame is the caller's responsibility.
pub(crate) fn forward_check(
    subject: Subject,
    day: Day,
    conflicts: &ConflictGraph,
    assignment: &Assignment,
    domains: &mut DomainStore,
) -> Result<(), EmptyDomain> {
    domains.new_frame();

    for &neighbour in conflicts.neighbours(subject) {
        if assignment.is_assigned(neighbour) {
            continue;
        }

        if domains.remove(neighbour, day) {
            return Err(EmptyDomain);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::ExamProblem;

    fn triangle() -> (ConflictGraph, Assignment, DomainStore) {
        // Three mutually conflicting subjects over two days.
        let mut problem = ExamProblem::new(3, 2).unwrap();
        problem.add_registration([0, 1, 2]).unwrap();

        let conflicts = ConflictGraph::from_problem(&problem);
        let assignment = Assignment::new(3);
        let domains = DomainStore::new(3, 2);
        (conflicts, assignment, domains)
    }

    #[test]
    fn assigned_day_is_removed_from_unassigned_neighbours() {
        let (conflicts, mut assignment, mut domains) = triangle();

        let subject = Subject::new(0);
        let day = Day::new(0);
        assignment.assign(subject, day);
        let result = forward_check(subject, day, &conflicts, &assignment, &mut domains);

        assert_eq!(result, Ok(()));
        assert!(!domains.contains(Subject::new(1), day));
        assert!(!domains.contains(Subject::new(2), day));
        // The assigning subject's own domain is untouched.
        assert!(domains.contains(subject, day));
    }

    #[test]
    fn a_wiped_out_neighbour_reports_failure() {
        let (conflicts, mut assignment, mut domains) = triangle();

        assignment.assign(Subject::new(0), Day::new(0));
        forward_check(
            Subject::new(0),
            Day::new(0),
            &conflicts,
            &assignment,
            &mut domains,
        )
        .unwrap();

        assignment.assign(Subject::new(1), Day::new(1));
        let result = forward_check(
            Subject::new(1),
            Day::new(1),
            &conflicts,
            &assignment,
            &mut domains,
        );

        // Subject 2 has lost both days.
        assert_eq!(result, Err(EmptyDomain));
        assert_eq!(domains.remaining(Subject::new(2)), 0);

        // Undoing the failed frame restores subject 2's last day.
        domains.undo_frame();
        assert_eq!(domains.remaining(Subject::new(2)), 1);
    }

    #[test]
    fn assigned_neighbours_are_left_alone() {
        let (conflicts, mut assignment, mut domains) = triangle();

        assignment.assign(Subject::new(1), Day::new(1));
        assignment.assign(Subject::new(0), Day::new(0));
        forward_check(
            Subject::new(0),
            Day::new(0),
            &conflicts,
            &assignment,
            &mut domains,
        )
        .unwrap();

        // Subject 1 is already assigned, so its domain is not pruned.
        assert!(domains.contains(Subject::new(1), Day::new(0)));
    }
}
