//! Search entry point and expansion loop.
//!
//! One engine serves every strategy: a [`Search`] is a state machine over
//! [`SearchStatus`] that pops from a [`Frontier`], goal-tests the popped
//! node, and otherwise expands it. Tree/graph behavior and the frontier
//! discipline are configuration, not code paths of their own.

use log::{debug, trace, warn};
use waypoint_kernel::problem::{HeuristicFunction, Problem};

use crate::error::SearchError;
use crate::explored::ExploredSet;
use crate::frontier::{Frontier, FrontierDiscipline};
use crate::metrics::SearchMetrics;
use crate::node::{NodeArena, NodeId};
use crate::policy::{SearchConfig, SearchPolicy, SearchVariant};

/// Lifecycle of a run. `Running` is initial; the other three are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Running,
    Succeeded,
    Failed,
    CutOff,
}

/// Why a run stopped without a conclusive answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutOffReason {
    /// Some node sat at the depth cap; a solution may exist deeper.
    DepthLimit,
    /// The expansion cap was reached.
    ExpansionBudget,
}

/// A goal reached by the search.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<A> {
    /// Actions from the initial state to the goal, in order.
    pub actions: Vec<A>,
    /// Sum of step costs along `actions`.
    pub path_cost: f64,
    /// Number of actions.
    pub depth: u32,
}

/// Result kind of a finished run.
///
/// `Failure` and `CutOff` are ordinary values: `Failure` means no solution
/// exists under the model, `CutOff` means a cap stopped the run first.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<A> {
    Solution(Solution<A>),
    Failure,
    CutOff(CutOffReason),
}

impl<A> SearchOutcome<A> {
    /// Stable lowercase name used in logs and reports.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Solution(_) => "solution",
            Self::Failure => "failure",
            Self::CutOff(CutOffReason::DepthLimit) => "cutoff_depth",
            Self::CutOff(CutOffReason::ExpansionBudget) => "cutoff_expansions",
        }
    }
}

/// Outcome plus the counters of the run that produced it.
#[derive(Debug, Clone)]
pub struct SearchResult<A> {
    pub outcome: SearchOutcome<A>,
    pub metrics: SearchMetrics,
}

impl<A> SearchResult<A> {
    /// The solution, if the run found one.
    #[must_use]
    pub fn solution(&self) -> Option<&Solution<A>> {
        match &self.outcome {
            SearchOutcome::Solution(solution) => Some(solution),
            _ => None,
        }
    }

    /// Returns `true` if the run reached a goal.
    #[must_use]
    pub fn is_solution(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Solution(_))
    }

    /// Terminal status corresponding to the outcome.
    #[must_use]
    pub fn status(&self) -> SearchStatus {
        match self.outcome {
            SearchOutcome::Solution(_) => SearchStatus::Succeeded,
            SearchOutcome::Failure => SearchStatus::Failed,
            SearchOutcome::CutOff(_) => SearchStatus::CutOff,
        }
    }
}

/// Run a search to completion.
///
/// # Errors
///
/// Returns a [`SearchError`] only for pre-flight configuration failures
/// (e.g. A* without a heuristic). No node is expanded in that case.
pub fn search<P: Problem>(
    problem: &P,
    policy: &SearchPolicy,
    heuristic: Option<&dyn HeuristicFunction<P::State>>,
) -> Result<SearchResult<P::Action>, SearchError> {
    let config = policy.resolve(heuristic)?;
    debug!(
        "search start: problem={} strategy={} variant={}",
        problem.problem_id(),
        policy.strategy,
        policy.variant.as_str()
    );
    Ok(Search::new(problem, config)?.run())
}

/// Run a search from an engine-level configuration.
///
/// # Errors
///
/// Returns a [`SearchError`] if the configuration is inconsistent.
pub fn search_with<P: Problem>(
    problem: &P,
    config: SearchConfig<'_, P::State>,
) -> Result<SearchResult<P::Action>, SearchError> {
    Ok(Search::new(problem, config)?.run())
}

/// A single search run, driven one pop at a time by [`Search::step`].
///
/// All mutable structures (arena, frontier, explored set, metrics) belong to
/// this value and are discarded with it.
pub struct Search<'p, 'h, P: Problem> {
    problem: &'p P,
    config: SearchConfig<'h, P::State>,
    arena: NodeArena<P::State, P::Action>,
    frontier: Frontier<P::State>,
    explored: ExploredSet<P::State>,
    metrics: SearchMetrics,
    status: SearchStatus,
    goal: Option<NodeId>,
    cutoff: Option<CutOffReason>,
    withheld_by_depth: bool,
}

impl<'p, 'h, P: Problem> Search<'p, 'h, P> {
    /// Validate `config` and seed the frontier with the initial state.
    ///
    /// # Errors
    ///
    /// Returns the first [`SearchConfig::validate`] failure.
    pub fn new(problem: &'p P, config: SearchConfig<'h, P::State>) -> Result<Self, SearchError> {
        config.validate()?;

        let mut search = Self {
            problem,
            config,
            arena: NodeArena::new(),
            frontier: Frontier::new(config.discipline),
            explored: ExploredSet::new(),
            metrics: SearchMetrics {
                iterations: 1,
                ..SearchMetrics::default()
            },
            status: SearchStatus::Running,
            goal: None,
            cutoff: None,
            withheld_by_depth: false,
        };

        let root_state = problem.initial_state();
        let h_cost = search.estimate(&root_state);
        let root = search.arena.push_root(root_state.clone(), h_cost);
        let priority = search.priority(0.0, h_cost);
        search.frontier.insert(root, root_state, priority);
        search.metrics.observe_frontier(search.frontier.len());
        Ok(search)
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Counters so far.
    #[must_use]
    pub fn metrics(&self) -> &SearchMetrics {
        &self.metrics
    }

    /// Number of distinct states expanded so far (graph search only).
    #[must_use]
    pub fn explored_len(&self) -> usize {
        self.explored.len()
    }

    /// Pop one node and either finish or expand it.
    ///
    /// Calling `step` after a terminal status is a no-op.
    pub fn step(&mut self) -> SearchStatus {
        if self.status != SearchStatus::Running {
            return self.status;
        }

        let Some(node_id) = self.frontier.pop() else {
            if self.withheld_by_depth {
                return self.terminate_cutoff(CutOffReason::DepthLimit);
            }
            self.status = SearchStatus::Failed;
            return self.status;
        };

        let Some(node) = self.arena.get(node_id) else {
            // Frontier only holds ids minted by this arena.
            self.status = SearchStatus::Failed;
            return self.status;
        };
        let state = node.state.clone();
        let depth = node.depth;
        let path_cost = node.path_cost;

        let graph = self.config.variant == SearchVariant::Graph;
        if graph && self.explored.contains(&state) {
            return self.status;
        }

        if self.problem.is_goal(&state) {
            self.goal = Some(node_id);
            self.metrics.path_cost = path_cost;
            self.metrics.solution_depth = depth;
            self.status = SearchStatus::Succeeded;
            return self.status;
        }

        if self.config.max_depth.is_some_and(|cap| depth >= cap) {
            self.withheld_by_depth = true;
            self.metrics.depth_cutoffs += 1;
            return self.status;
        }

        if let Some(cap) = self.config.max_expansions {
            if self.metrics.nodes_expanded >= cap {
                return self.terminate_cutoff(CutOffReason::ExpansionBudget);
            }
        }

        self.expand(node_id, &state, path_cost);
        self.status
    }

    fn expand(&mut self, node_id: NodeId, state: &P::State, path_cost: f64) {
        let graph = self.config.variant == SearchVariant::Graph;
        if graph {
            self.explored.insert(state.clone());
        }
        self.metrics.nodes_expanded += 1;
        trace!(
            "expand #{} node={node_id} g={path_cost} frontier={}",
            self.metrics.nodes_expanded,
            self.frontier.len()
        );

        for action in self.problem.actions(state) {
            let child_state = self.problem.result(state, &action);
            let step_cost = self.problem.step_cost(state, &action, &child_state);
            let child_cost = path_cost + step_cost;

            let mut superseded = None;
            if graph {
                if self.explored.contains(&child_state) {
                    self.metrics.duplicates_suppressed += 1;
                    continue;
                }
                if let Some((queued, key)) = self.frontier.lookup(&child_state) {
                    let improves = self.config.discipline == FrontierDiscipline::Priority
                        && self.priority(child_cost, self.h_of(queued)) < key.priority;
                    if !improves {
                        self.metrics.duplicates_suppressed += 1;
                        continue;
                    }
                    superseded = Some(queued);
                }
            }

            let h_cost = match superseded {
                Some(queued) => self.h_of(queued),
                None => self.estimate(&child_state),
            };
            let priority = self.priority(child_cost, h_cost);
            let child = self
                .arena
                .push_child(node_id, child_state.clone(), action, step_cost, h_cost);
            let replaced = superseded.is_some_and(|queued| {
                self.frontier
                    .replace(queued, child, child_state.clone(), priority)
                    .is_some()
            });
            if replaced {
                self.metrics.frontier_replacements += 1;
            } else {
                self.frontier.insert(child, child_state, priority);
                self.metrics.nodes_generated += 1;
            }
        }

        self.metrics.observe_frontier(self.frontier.len());
    }

    /// Drive the machine to a terminal status and return the result.
    #[must_use]
    pub fn run(mut self) -> SearchResult<P::Action> {
        while self.step() == SearchStatus::Running {}
        self.finish()
    }

    /// Convert a terminal run into its result.
    ///
    /// A run that is still `Running` is reported as cut off by budget.
    #[must_use]
    pub fn finish(mut self) -> SearchResult<P::Action> {
        self.metrics.explored_size = self.explored.len() as u64;
        let outcome = match (self.status, self.goal) {
            (SearchStatus::Succeeded, Some(goal)) => {
                let actions = self.arena.actions_to(goal);
                SearchOutcome::Solution(Solution {
                    actions,
                    path_cost: self.metrics.path_cost,
                    depth: self.metrics.solution_depth,
                })
            }
            (SearchStatus::Failed, _) => SearchOutcome::Failure,
            _ => SearchOutcome::CutOff(self.cutoff.unwrap_or(CutOffReason::ExpansionBudget)),
        };
        debug!(
            "search done: problem={} outcome={} expanded={} generated={} max_frontier={}",
            self.problem.problem_id(),
            outcome.kind(),
            self.metrics.nodes_expanded,
            self.metrics.nodes_generated,
            self.metrics.max_frontier_size
        );
        SearchResult {
            outcome,
            metrics: self.metrics,
        }
    }

    fn terminate_cutoff(&mut self, reason: CutOffReason) -> SearchStatus {
        self.cutoff = Some(reason);
        self.status = SearchStatus::CutOff;
        self.status
    }

    fn estimate(&self, state: &P::State) -> f64 {
        let Some(heuristic) = self.config.evaluation.and_then(|e| e.heuristic()) else {
            return 0.0;
        };
        let h = heuristic.estimate(state);
        if h.is_nan() || h < 0.0 {
            warn!("heuristic returned {h} for {state:?}; estimates must be finite and non-negative");
        }
        h
    }

    fn h_of(&self, node_id: NodeId) -> f64 {
        self.arena.get(node_id).map_or(0.0, |n| n.h_cost)
    }

    fn priority(&self, path_cost: f64, h_cost: f64) -> f64 {
        self.config
            .evaluation
            .map_or(0.0, |e| e.score(path_cost, h_cost))
    }
}
