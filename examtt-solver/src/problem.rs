//! The definition of an exam timetabling instance: a fixed set of subjects, a
//! fixed set of days, and the registrations of the students.
//!
//! A [`Registration`] is the set of subjects taken by one student; two subjects
//! which occur together in at least one registration can never be examined on
//! the same day.

use fnv::FnvHashSet;
use thiserror::Error;

use crate::containers::StorageKey;

/// An opaque identifier for one exam subject.
///
/// Subjects are identified by their index in the problem definition; the index
/// also defines the stable fallback order used during search.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Subject {
    id: u32,
}

impl Subject {
    pub fn new(id: u32) -> Self {
        Subject { id }
    }

    pub fn id(&self) -> u32 {
        self.id
    }
}

impl StorageKey for Subject {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        Subject { id: index as u32 }
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "subject {}", self.id)
    }
}

impl std::fmt::Debug for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "s{}", self.id)
    }
}

/// One of the totally ordered calendar slots to which the subjects are
/// assigned.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Day {
    id: u32,
}

impl Day {
    pub fn new(id: u32) -> Self {
        Day { id }
    }

    pub fn id(&self) -> u32 {
        self.id
    }
}

impl StorageKey for Day {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        Day { id: index as u32 }
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "day {}", self.id)
    }
}

impl std::fmt::Debug for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.id)
    }
}

/// The set of subjects taken by one student; stored deduplicated and sorted.
pub type Registration = Vec<Subject>;

/// The error which is reported when a malformed instance is defined; the
/// solver never starts searching on a malformed instance.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidProblemError {
    #[error("an exam timetabling instance requires at least one subject")]
    NoSubjects,
    #[error("an exam timetabling instance requires at least one day")]
    NoDays,
    #[error("registration references subject index {index} but the instance only has {num_subjects} subjects")]
    SubjectOutOfRange { index: usize, num_subjects: usize },
}

/// An exam timetabling instance.
///
/// The instance is immutable once handed to the [`Scheduler`]; registrations
/// are added one student at a time and validated on addition.
///
/// [`Scheduler`]: crate::Scheduler
#[derive(Debug, Clone)]
pub struct ExamProblem {
    num_subjects: usize,
    num_days: usize,
    registrations: Vec<Registration>,
}

impl ExamProblem {
    /// Creates an instance with `num_subjects` subjects and `num_days` days
    /// and no registrations yet.
    pub fn new(num_subjects: usize, num_days: usize) -> Result<Self, InvalidProblemError> {
        if num_subjects < 1 {
            return Err(InvalidProblemError::NoSubjects);
        }
        if num_days < 1 {
            return Err(InvalidProblemError::NoDays);
        }

        Ok(ExamProblem {
            num_subjects,
            num_days,
            registrations: Vec::new(),
        })
    }

    /// Adds the registration of one student, given as subject indices.
    ///
    /// Duplicate indices within one registration are collapsed; a registration
    /// with fewer than two distinct subjects is accepted and simply introduces
    /// no conflicts.
    pub fn add_registration(
        &mut self,
        subjects: impl IntoIterator<Item = usize>,
    ) -> Result<(), InvalidProblemError> {
        let mut distinct = FnvHashSet::default();

        for index in subjects {
            if index >= self.num_subjects {
                return Err(InvalidProblemError::SubjectOutOfRange {
                    index,
                    num_subjects: self.num_subjects,
                });
            }
            let _ = distinct.insert(Subject::create_from_index(index));
        }

        let mut registration: Registration = distinct.into_iter().collect();
        registration.sort();
        self.registrations.push(registration);

        Ok(())
    }

    pub fn num_subjects(&self) -> usize {
        self.num_subjects
    }

    pub fn num_days(&self) -> usize {
        self.num_days
    }

    pub fn registrations(&self) -> &[Registration] {
        &self.registrations
    }

    /// Iterates over all subjects of the instance in input order.
    pub fn subjects(&self) -> impl Iterator<Item = Subject> {
        (0..self.num_subjects).map(Subject::create_from_index)
    }

    /// Iterates over all days of the instance in their natural order.
    pub fn days(&self) -> impl Iterator<Item = Day> {
        (0..self.num_days).map(Day::create_from_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instances_without_subjects_or_days_are_rejected() {
        assert_eq!(
            ExamProblem::new(0, 3).unwrap_err(),
            InvalidProblemError::NoSubjects
        );
        assert_eq!(
            ExamProblem::new(3, 0).unwrap_err(),
            InvalidProblemError::NoDays
        );
    }

    #[test]
    fn out_of_range_subject_indices_are_rejected() {
        let mut problem = ExamProblem::new(3, 2).unwrap();

        assert_eq!(
            problem.add_registration([0, 3]).unwrap_err(),
            InvalidProblemError::SubjectOutOfRange {
                index: 3,
                num_subjects: 3
            }
        );
    }

    #[test]
    fn duplicate_subjects_within_a_registration_are_collapsed() {
        let mut problem = ExamProblem::new(3, 2).unwrap();
        problem.add_registration([1, 1, 2]).unwrap();

        assert_eq!(
            problem.registrations(),
            &[vec![Subject::new(1), Subject::new(2)]]
        );
    }
}
