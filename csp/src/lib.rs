//! Waypoint CSP: constraint-satisfaction solvers over a generic model.
//!
//! A [`model::Csp`] holds ordered variables, a domain per variable and a set
//! of constraints. Two solvers run against it:
//!
//! - [`backtracking::solve_backtracking`]: complete depth-first assignment
//!   with configurable variable/value ordering and inference (forward
//!   checking or AC-3).
//! - [`min_conflicts::solve_min_conflicts`]: seeded stochastic repair over
//!   complete assignments.
//!
//! Both return a [`CspResult`] carrying a [`CspOutcome`] and [`metrics::CspMetrics`].
//! All solver state (domains, trail, assignment, RNG) is owned by the call.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod assignment;
pub mod backtracking;
pub mod error;
pub mod metrics;
pub mod min_conflicts;
pub mod model;
pub mod report;

pub use assignment::Assignment;
pub use backtracking::{
    solve_backtracking, BacktrackingOptions, Inference, ValueOrder, VariableOrder,
};
pub use error::CspError;
pub use metrics::CspMetrics;
pub use min_conflicts::{solve_min_conflicts, MinConflictsSolver};
pub use model::{AllDifferent, Constraint, Csp, NotEqual, Predicate};
pub use report::CspReport;

/// Terminal result of a solver run.
#[derive(Debug, Clone, PartialEq)]
pub enum CspOutcome<V, D> {
    /// Complete assignment violating no constraint.
    Solved(Assignment<V, D>),
    /// Backtracking exhausted every combination, or min-conflicts ran out of
    /// steps. Only the former proves the problem unsatisfiable.
    Failure,
}

impl<V, D> CspOutcome<V, D> {
    /// Stable outcome tag used in reports.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Solved(_) => "solved",
            Self::Failure => "failure",
        }
    }
}

/// Outcome plus the counters gathered while producing it.
#[derive(Debug, Clone)]
pub struct CspResult<V, D> {
    pub outcome: CspOutcome<V, D>,
    pub metrics: CspMetrics,
}

impl<V, D> CspResult<V, D> {
    /// The solution, if one was found.
    #[must_use]
    pub fn solution(&self) -> Option<&Assignment<V, D>> {
        match &self.outcome {
            CspOutcome::Solved(assignment) => Some(assignment),
            CspOutcome::Failure => None,
        }
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self.outcome, CspOutcome::Solved(_))
    }
}
