use crate::basic_types::Schedule;
#[cfg(doc)]
use crate::engine::termination::TerminationCondition;

/// The result of a call to [`Scheduler::solve`].
///
/// [`Scheduler::solve`]: crate::Scheduler::solve
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SatisfactionResult {
    /// A conflict-free timetable was found; it contains a day for every
    /// subject of the instance.
    Satisfiable(Schedule),
    /// The search exhausted the root without finding a timetable; no
    /// conflict-free timetable exists for this instance.
    Unsatisfiable,
    /// It is not known whether a timetable exists; a [`TerminationCondition`]
    /// triggered before the search could reach a conclusion.
    Unknown,
}

impl SatisfactionResult {
    /// Returns the found timetable, if there is one.
    pub fn schedule(&self) -> Option<&Schedule> {
        match self {
            SatisfactionResult::Satisfiable(schedule) => Some(schedule),
            SatisfactionResult::Unsatisfiable | SatisfactionResult::Unknown => None,
        }
    }
}
