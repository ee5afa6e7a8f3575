use crate::basic_types::Schedule;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::examtt_assert_simple;
use crate::problem::Day;
use crate::problem::Subject;

/// The partial subject-to-day mapping built up during search.
///
/// A subject enters the assignment when a tentative value survives
/// propagation and leaves it again only when the engine backtracks past it.
#[derive(Debug, Clone)]
pub(crate) struct Assignment {
    days: KeyedVec<Subject, Option<Day>>,
    num_assigned: usize,
}

impl Assignment {
    pub(crate) fn new(num_subjects: usize) -> Self {
        Assignment {
            days: (0..num_subjects).map(|_| None).collect(),
            num_assigned: 0,
        }
    }

    pub(crate) fn assign(&mut self, subject: Subject, day: Day) {
        examtt_assert_simple!(self.days[subject].is_none());

        self.days[subject] = Some(day);
        self.num_assigned += 1;
    }

    pub(crate) fn unassign(&mut self, subject: Subject) {
        examtt_assert_simple!(self.days[subject].is_some());

        self.days[subject] = None;
        self.num_assigned -= 1;
    }

    pub(crate) fn is_assigned(&self, subject: Subject) -> bool {
        self.days[subject].is_some()
    }

    pub(crate) fn is_complete(&self) -> bool {
        self.num_assigned == self.days.len()
    }

    /// Freezes the assignment into an owned total [`Schedule`]; only valid
    /// once every subject has a day.
    pub(crate) fn as_schedule(&self) -> Schedule {
        examtt_assert_simple!(self.is_complete());

        Schedule::new(
            self.days
                .iter()
                .map(|day| day.expect("a complete assignment maps every subject"))
                .collect(),
        )
    }

    pub(crate) fn subjects(&self) -> impl Iterator<Item = Subject> {
        (0..self.days.len()).map(Subject::create_from_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigning_and_unassigning_is_symmetric() {
        let mut assignment = Assignment::new(2);
        let subject = Subject::new(1);

        assignment.assign(subject, Day::new(0));
        assert!(assignment.is_assigned(subject));

        assignment.unassign(subject);
        assert!(!assignment.is_assigned(subject));
        assert!(!assignment.is_complete());
    }

    #[test]
    fn a_total_assignment_freezes_into_a_schedule() {
        let mut assignment = Assignment::new(2);
        assignment.assign(Subject::new(0), Day::new(1));
        assignment.assign(Subject::new(1), Day::new(0));

        assert!(assignment.is_complete());

        let schedule = assignment.as_schedule();
        assert_eq!(schedule.day_of(Subject::new(0)), Day::new(1));
        assert_eq!(schedule.day_of(Subject::new(1)), Day::new(0));
    }
}
