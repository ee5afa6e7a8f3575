//! A [`TerminationCondition`] is a condition which is polled by the scheduler
//! during the search process. It indicates when the search should stop, even
//! if no definitive conclusion has been reached yet; the scheduler then
//! unwinds all open frames and reports [`SatisfactionResult::Unknown`] rather
//! than unsatisfiability.
//!
//! [`SatisfactionResult::Unknown`]: crate::results::SatisfactionResult::Unknown

mod decision_budget;
mod time_budget;

pub use decision_budget::DecisionBudget;
pub use time_budget::TimeBudget;

/// The central trait that defines a termination condition. A termination
/// condition determines when the scheduler should give up searching.
pub trait TerminationCondition {
    /// Returns `true` when the scheduler should stop, `false` otherwise.
    fn should_stop(&mut self) -> bool;

    /// Notifies the condition that the scheduler has tried one more tentative
    /// assignment.
    fn decision_has_been_made(&mut self) {}
}

impl<T: TerminationCondition> TerminationCondition for Option<T> {
    fn should_stop(&mut self) -> bool {
        match self {
            Some(t) => t.should_stop(),
            None => false,
        }
    }

    fn decision_has_been_made(&mut self) {
        if let Some(t) = self {
            t.decision_has_been_made()
        }
    }
}

/// A [`TerminationCondition`] which never triggers; the search runs until it
/// succeeds or exhausts the root.
#[derive(Clone, Copy, Debug, Default)]
pub struct Indefinite;

impl TerminationCondition for Indefinite {
    fn should_stop(&mut self) -> bool {
        false
    }
}

/// A [`TerminationCondition`] which triggers when one of two given
/// [`TerminationCondition`]s triggers.
#[derive(Clone, Copy, Debug)]
pub struct Combinator<T1, T2> {
    t1: T1,
    t2: T2,
}

impl<T1, T2> Combinator<T1, T2> {
    /// Combine two [`TerminationCondition`]s into one.
    pub fn new(t1: T1, t2: T2) -> Self {
        Combinator { t1, t2 }
    }
}

impl<T1: TerminationCondition, T2: TerminationCondition> TerminationCondition
    for Combinator<T1, T2>
{
    fn should_stop(&mut self) -> bool {
        self.t1.should_stop() || self.t2.should_stop()
    }

    fn decision_has_been_made(&mut self) {
        self.t1.decision_has_been_made();
        self.t2.decision_has_been_made();
    }
}
