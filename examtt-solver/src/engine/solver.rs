//! The backtracking search engine.
//!
//! The engine performs chronological depth-first backtracking over an explicit
//! frame stack rather than native recursion; every frame owns exactly one
//! prune frame of the domain store while its tentative assignment is active,
//! which keeps the undo discipline local to the frame that caused the prunes.

use log::debug;

use crate::basic_types::Assignment;
use crate::branching::value_selection::create_value_selector;
use crate::branching::value_selection::ValueSelector;
use crate::branching::variable_selection::create_variable_selector;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::HeuristicConfig;
use crate::branching::SelectionContext;
use crate::conflicts::ConflictGraph;
use crate::create_statistics_struct;
use crate::engine::domains::DomainStore;
use crate::engine::propagation::forward_check;
use crate::engine::propagation::EmptyDomain;
use crate::engine::termination::TerminationCondition;
use crate::examtt_assert_eq_simple;
use crate::examtt_assert_extreme;
use crate::problem::Day;
use crate::problem::ExamProblem;
use crate::problem::Subject;
use crate::results::SatisfactionResult;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;
use crate::verification::verify_registrations;
use crate::verification::verify_schedule;

create_statistics_struct!(
    /// The search statistics of the [`Scheduler`]; available through
    /// [`Scheduler::statistics`] after a solve and loggable through
    /// [`Scheduler::log_statistics`].
    SchedulerStatistics {
        /// The number of tentative assignments which were tried.
        num_decisions: u64,
        /// The number of times a frame exhausted its candidate days and the
        /// engine backtracked past it.
        num_backtracks: u64,
        /// The number of propagations which wiped out a domain.
        num_conflicts: u64,
    }
);

/// One decision point of the search: the selected subject together with its
/// ordered candidate days and a cursor into them.
#[derive(Debug)]
struct Frame {
    subject: Subject,
    candidates: Vec<Day>,
    next: usize,
}

/// The exam timetabling solver.
///
/// A [`Scheduler`] is created once per instance; [`Scheduler::solve`] runs the
/// backtracking search to completion, exhaustion, or until a
/// [`TerminationCondition`] triggers, and always returns with the search state
/// restored to the root, so the scheduler can be solved again (e.g. with a
/// different heuristic configuration).
#[derive(Debug)]
pub struct Scheduler {
    problem: ExamProblem,
    conflicts: ConflictGraph,
    assignment: Assignment,
    domains: DomainStore,
    statistics: SchedulerStatistics,
}

impl Scheduler {
    /// Creates a scheduler for `problem`; the conflict index is built here,
    /// once, and every subject's domain starts as the full set of days.
    pub fn new(problem: ExamProblem) -> Self {
        let conflicts = ConflictGraph::from_problem(&problem);
        let assignment = Assignment::new(problem.num_subjects());
        let domains = DomainStore::new(problem.num_subjects(), problem.num_days());

        Scheduler {
            problem,
            conflicts,
            assignment,
            domains,
            statistics: SchedulerStatistics::default(),
        }
    }

    pub fn problem(&self) -> &ExamProblem {
        &self.problem
    }

    pub fn conflicts(&self) -> &ConflictGraph {
        &self.conflicts
    }

    /// The accumulated search statistics over all calls to
    /// [`Scheduler::solve`] on this scheduler.
    pub fn statistics(&self) -> &SchedulerStatistics {
        &self.statistics
    }

    /// Logs the search statistics through the statistic logging configured
    /// with [`configure_statistic_logging`].
    ///
    /// [`configure_statistic_logging`]: crate::statistics::configure_statistic_logging
    pub fn log_statistics(&self) {
        self.statistics.log(StatisticLogger::default());
    }

    /// Searches for a conflict-free timetable using the heuristics enabled in
    /// `config`.
    pub fn solve<T: TerminationCondition>(
        &mut self,
        config: HeuristicConfig,
        termination: &mut T,
    ) -> SatisfactionResult {
        let subjects: Vec<Subject> = self.problem.subjects().collect();
        let mut variable_selector = create_variable_selector(config, &subjects);
        let mut value_selector = create_value_selector(config);

        self.solve_with(
            variable_selector.as_mut(),
            value_selector.as_mut(),
            termination,
        )
    }

    /// Searches for a conflict-free timetable using the provided selector
    /// implementations.
    ///
    /// The variable selector must keep selecting subjects until all subjects
    /// of the instance are assigned.
    pub fn solve_with<T: TerminationCondition>(
        &mut self,
        variable_selector: &mut dyn VariableSelector,
        value_selector: &mut dyn ValueSelector,
        termination: &mut T,
    ) -> SatisfactionResult {
        examtt_assert_eq_simple!(self.domains.depth(), 0);

        let mut stack: Vec<Frame> = Vec::new();

        // Invariant at the top of this loop: every frame on the stack has an
        // active tentative assignment and owns exactly one prune frame.
        loop {
            if self.assignment.is_complete() {
                let schedule = self.assignment.as_schedule();
                examtt_assert_extreme!(verify_schedule(&schedule, &self.conflicts));
                examtt_assert_extreme!(verify_registrations(&schedule, &self.problem));

                debug!(
                    "found a conflict-free timetable after {} decisions",
                    self.statistics.num_decisions
                );
                self.unwind(&mut stack);
                return SatisfactionResult::Satisfiable(schedule);
            }

            if termination.should_stop() {
                debug!(
                    "search budget exceeded after {} decisions",
                    self.statistics.num_decisions
                );
                self.unwind(&mut stack);
                return SatisfactionResult::Unknown;
            }

            let context = SelectionContext::new(&self.assignment, &self.domains, &self.conflicts);
            let subject = variable_selector
                .select_variable(&context)
                .expect("an incomplete assignment leaves a subject to select");
            let candidates = value_selector.order_values(&context, subject);

            stack.push(Frame {
                subject,
                candidates,
                next: 0,
            });

            // Try candidate days until one survives propagation, backtracking
            // over exhausted frames.
            'descend: loop {
                let exhausted = match stack.last() {
                    Some(frame) => frame.next == frame.candidates.len(),
                    None => {
                        debug!("search exhausted the root; the instance has no timetable");
                        examtt_assert_eq_simple!(self.domains.depth(), 0);
                        return SatisfactionResult::Unsatisfiable;
                    }
                };

                if exhausted {
                    let _ = stack.pop();
                    self.statistics.num_backtracks += 1;

                    if let Some(parent) = stack.last() {
                        // The parent's active value led to this dead end; undo
                        // its propagation and move on to its next candidate.
                        self.domains.undo_frame();
                        self.assignment.unassign(parent.subject);
                    }
                    continue 'descend;
                }

                let frame = stack
                    .last_mut()
                    .expect("an unexhausted frame remains on the stack");
                let day = frame.candidates[frame.next];
                frame.next += 1;
                let subject = frame.subject;

                self.statistics.num_decisions += 1;
                termination.decision_has_been_made();

                self.assignment.assign(subject, day);
                match forward_check(
                    subject,
                    day,
                    &self.conflicts,
                    &self.assignment,
                    &mut self.domains,
                ) {
                    // The tentative assignment survived; descend one level.
                    Ok(()) => break 'descend,
                    Err(EmptyDomain) => {
                        self.statistics.num_conflicts += 1;
                        self.domains.undo_frame();
                        self.assignment.unassign(subject);
                    }
                }
            }
        }
    }

    /// Undoes every open frame, restoring the search state to the root.
    fn unwind(&mut self, stack: &mut Vec<Frame>) {
        while let Some(frame) = stack.pop() {
            self.domains.undo_frame();
            self.assignment.unassign(frame.subject);
        }
        examtt_assert_eq_simple!(self.domains.depth(), 0);
    }
}
