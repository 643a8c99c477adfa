//! Evaluation functions for priority frontiers.
//!
//! | Strategy     | `f(n)`        |
//! |--------------|---------------|
//! | uniform-cost | `g(n)`        |
//! | greedy       | `h(n)`        |
//! | A*           | `g(n) + h(n)` |
//!
//! Lower `f` is expanded first.

use waypoint_kernel::problem::HeuristicFunction;

/// Pluggable node scoring for [`crate::frontier::FrontierDiscipline::Priority`].
pub enum Evaluation<'h, S> {
    /// `f(n) = g(n)`.
    PathCost,
    /// `f(n) = h(n)`.
    Heuristic(&'h dyn HeuristicFunction<S>),
    /// `f(n) = g(n) + h(n)`.
    PathCostPlusHeuristic(&'h dyn HeuristicFunction<S>),
}

impl<'h, S> Evaluation<'h, S> {
    /// The heuristic consulted by this evaluation, if any.
    #[must_use]
    pub fn heuristic(&self) -> Option<&'h dyn HeuristicFunction<S>> {
        match self {
            Self::PathCost => None,
            Self::Heuristic(h) | Self::PathCostPlusHeuristic(h) => Some(*h),
        }
    }

    /// Score a node from its path cost and heuristic estimate.
    #[must_use]
    pub fn score(&self, path_cost: f64, h_cost: f64) -> f64 {
        match self {
            Self::PathCost => path_cost,
            Self::Heuristic(_) => h_cost,
            Self::PathCostPlusHeuristic(_) => path_cost + h_cost,
        }
    }

    /// Stable name used in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::PathCost => "g",
            Self::Heuristic(_) => "h",
            Self::PathCostPlusHeuristic(_) => "g+h",
        }
    }
}

impl<S> Clone for Evaluation<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Evaluation<'_, S> {}

impl<S> std::fmt::Debug for Evaluation<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Evaluation({})", self.name())
    }
}
