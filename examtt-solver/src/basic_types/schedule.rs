use crate::containers::KeyedVec;
use crate::problem::Day;
use crate::problem::Subject;

/// A complete timetable: a total mapping from every subject of the instance to
/// one day.
///
/// A [`Schedule`] takes ownership of its mapping; it remains valid after the
/// scheduler which produced it has been dropped or reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    days: KeyedVec<Subject, Day>,
}

impl Schedule {
    pub(crate) fn new(days: KeyedVec<Subject, Day>) -> Self {
        Schedule { days }
    }

    /// The day on which `subject` is examined.
    pub fn day_of(&self, subject: Subject) -> Day {
        self.days[subject]
    }

    pub fn num_subjects(&self) -> usize {
        self.days.len()
    }

    /// Iterates over the `(subject, day)` pairs in subject input order.
    pub fn iter(&self) -> impl Iterator<Item = (Subject, Day)> + '_ {
        self.days.keys().zip(self.days.iter().copied())
    }
}
