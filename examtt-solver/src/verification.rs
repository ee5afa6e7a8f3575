//! Independent re-checking of produced timetables; used as a correctness
//! oracle in tests and debug checks, never as part of the search itself.

use itertools::Itertools;

use crate::basic_types::Schedule;
use crate::conflicts::ConflictGraph;
use crate::problem::ExamProblem;

/// Confirms that `schedule` maps every subject of the conflict index and that
/// every conflicting pair is mapped to two different days.
pub fn verify_schedule(schedule: &Schedule, conflicts: &ConflictGraph) -> bool {
    if schedule.num_subjects() != conflicts.num_subjects() {
        return false;
    }

    conflicts.subjects().all(|subject| {
        conflicts
            .neighbours(subject)
            .iter()
            .all(|&neighbour| schedule.day_of(subject) != schedule.day_of(neighbour))
    })
}

/// Confirms, per registration, that no student has two exams on one day.
///
/// This is a second oracle working directly on the input registrations rather
/// than on the derived conflict index.
pub fn verify_registrations(schedule: &Schedule, problem: &ExamProblem) -> bool {
    if schedule.num_subjects() != problem.num_subjects() {
        return false;
    }

    problem.registrations().iter().all(|registration| {
        registration
            .iter()
            .map(|&subject| schedule.day_of(subject))
            .all_unique()
    })
}
