//! Domain contracts consumed by the search engine.
//!
//! A domain describes itself once through [`Problem`]; every strategy in
//! `waypoint_search` (breadth-first, depth-first, uniform-cost, greedy, A*,
//! iterative deepening) runs against the same implementation.

use std::fmt::Debug;
use std::hash::Hash;

/// Default cost of a single transition.
pub const UNIT_STEP_COST: f64 = 1.0;

/// A state-space search problem.
///
/// # Contract
///
/// - `actions` must be deterministic: same state → same actions in the same
///   order. Frontier tie-breaking relies on it for reproducible runs.
/// - `result` must be a pure function of `(state, action)`.
/// - `step_cost` must be non-negative for any optimality claim made by
///   uniform-cost or A* search. Negative costs are accepted but void those
///   guarantees.
/// - States must implement `Hash + Eq` so graph search can deduplicate them.
pub trait Problem {
    /// Opaque domain state. Never mutated by the engine.
    type State: Clone + Eq + Hash + Debug;
    /// Opaque domain action returned by the transition model.
    type Action: Clone + Debug;

    /// Identifier used in logs and run reports.
    fn problem_id(&self) -> &str {
        "anonymous"
    }

    /// The state the search starts from.
    fn initial_state(&self) -> Self::State;

    /// Enumerate the actions applicable in `state`.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The state reached by applying `action` in `state`.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Cost of the transition `from --action--> to`.
    fn step_cost(&self, from: &Self::State, action: &Self::Action, to: &Self::State) -> f64 {
        let _ = (from, action, to);
        UNIT_STEP_COST
    }

    /// Goal test.
    fn is_goal(&self, state: &Self::State) -> bool;
}

/// Estimate of the remaining cost from a state to the nearest goal.
///
/// # Caller obligation
///
/// The engine never verifies heuristic quality. A* graph search returns a
/// minimum-cost solution only when the heuristic is
///
/// - **admissible**: `estimate(s)` never exceeds the true remaining cost, and
/// - **consistent**: `estimate(n) <= step_cost(n, a, n') + estimate(n')` for
///   every edge.
///
/// Violating either silently degrades A* to a complete but non-optimal search.
/// Estimates should be finite and non-negative; the engine logs a warning
/// otherwise but still uses the value.
pub trait HeuristicFunction<S> {
    /// Estimated remaining cost from `state`.
    fn estimate(&self, state: &S) -> f64;
}

impl<S, F> HeuristicFunction<S> for F
where
    F: Fn(&S) -> f64,
{
    fn estimate(&self, state: &S) -> f64 {
        self(state)
    }
}

/// Heuristic that always returns zero. A* with this heuristic is uniform-cost.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl<S> HeuristicFunction<S> for ZeroHeuristic {
    fn estimate(&self, _state: &S) -> f64 {
        0.0
    }
}
