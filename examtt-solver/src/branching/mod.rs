//! Contains the structures which decide, at every node of the search, which
//! subject to schedule next and in which order to try its candidate days.
//!
//! The individual heuristics can be toggled independently through
//! [`HeuristicConfig`]; any combination is legal, including all heuristics
//! disabled, which yields plain backtracking in stable input order. The
//! toggles influence the shape of the search and how fast a conclusion is
//! reached, never whether a solution exists.

mod selection_context;
pub mod tie_breaking;
pub mod value_selection;
pub mod variable_selection;

pub use selection_context::SelectionContext;

/// The immutable configuration of the search heuristics.
///
/// Variable selection applies, in order of precedence, Minimum Remaining
/// Values ([`use_mrv`]), the degree heuristic ([`use_degree`]), and the stable
/// input-order fallback; value ordering applies Least Constraining Value
/// ([`use_lcv`]) or natural day order.
///
/// [`use_mrv`]: HeuristicConfig::use_mrv
/// [`use_degree`]: HeuristicConfig::use_degree
/// [`use_lcv`]: HeuristicConfig::use_lcv
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeuristicConfig {
    /// Prefer the subject with the fewest remaining candidate days.
    pub use_mrv: bool,
    /// Prefer the subject with the most conflicts to unassigned subjects.
    pub use_degree: bool,
    /// Try the days which eliminate the fewest options of conflicting
    /// subjects first.
    pub use_lcv: bool,
}
