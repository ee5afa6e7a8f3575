//! Contains structures for tie-breaking; these structures provide an
//! interface for deciding between candidates which score equally under a
//! selection heuristic.
//!
//! Candidates are fed to a [`TieBreaker`] one at a time together with their
//! value; depending on the [`Direction`] the tie-breaker keeps track of the
//! candidate with the minimum or maximum value and decides which of several
//! equally valued candidates survives.

mod in_order_tie_breaker;

pub use in_order_tie_breaker::InOrderTieBreaker;

/// The interface for a tie-breaker which considers candidates with values;
/// depending on the [`Direction`] it should only consider candidates with the
/// "best" value for selection.
pub trait TieBreaker<Var, Value> {
    /// Consider the next candidate with its corresponding value.
    fn consider(&mut self, variable: Var, value: Value);

    /// Get the final candidate which was selected. After this method is
    /// called the stored state is reset such that the tie-breaker can be used
    /// again.
    fn select(&mut self) -> Option<Var>;

    /// Returns whether the tie-breaker is attempting to find the minimum
    /// ([`Direction::Minimum`]) or maximum ([`Direction::Maximum`]) element.
    fn get_direction(&self) -> Direction;
}

/// Whether the value comparison should find the [`Direction::Maximum`]
/// candidate or the [`Direction::Minimum`] candidate.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Maximum,
    Minimum,
}
