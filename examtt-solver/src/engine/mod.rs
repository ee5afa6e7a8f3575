pub(crate) mod domains;
pub(crate) mod propagation;
pub(crate) mod solver;
pub mod termination;

pub use solver::Scheduler;
pub use solver::SchedulerStatistics;
