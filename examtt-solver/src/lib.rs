//! A solver which assigns exam subjects to days such that no student who is
//! registered for two subjects has both scheduled on the same day.
//!
//! The search is chronological backtracking with one-level forward checking;
//! the Minimum Remaining Values, degree, and Least Constraining Value
//! heuristics can be toggled independently through [`HeuristicConfig`] and
//! change the order of exploration, never the solvability outcome.
//!
//! # Example
//! ```
//! use examtt_solver::termination::Indefinite;
//! use examtt_solver::ExamProblem;
//! use examtt_solver::HeuristicConfig;
//! use examtt_solver::SatisfactionResult;
//! use examtt_solver::Scheduler;
//!
//! // Four subjects over two days; students take subjects {0, 1} and {2, 3}.
//! let mut problem = ExamProblem::new(4, 2).unwrap();
//! problem.add_registration([0, 1]).unwrap();
//! problem.add_registration([2, 3]).unwrap();
//!
//! let mut scheduler = Scheduler::new(problem);
//! let config = HeuristicConfig {
//!     use_mrv: true,
//!     use_degree: true,
//!     use_lcv: true,
//! };
//!
//! match scheduler.solve(config, &mut Indefinite) {
//!     SatisfactionResult::Satisfiable(schedule) => {
//!         for (subject, day) in schedule.iter() {
//!             println!("{subject} is examined on {day}");
//!         }
//!     }
//!     SatisfactionResult::Unsatisfiable => println!("no conflict-free timetable exists"),
//!     SatisfactionResult::Unknown => println!("the search budget ran out"),
//! }
//! ```

pub(crate) mod basic_types;
pub mod containers;
pub(crate) mod engine;

#[doc(hidden)]
pub mod asserts;

pub use convert_case;

pub mod branching;
pub mod conflicts;
pub mod problem;
pub mod results;
pub mod statistics;
pub mod verification;

pub use crate::basic_types::Schedule;
pub use crate::branching::HeuristicConfig;
pub use crate::engine::termination;
pub use crate::engine::Scheduler;
pub use crate::engine::SchedulerStatistics;
pub use crate::problem::Day;
pub use crate::problem::ExamProblem;
pub use crate::problem::InvalidProblemError;
pub use crate::problem::Subject;
pub use crate::results::SatisfactionResult;
