//! Iterative deepening: depth-limited depth-first runs with growing caps.

use log::debug;
use waypoint_kernel::problem::Problem;

use crate::error::SearchError;
use crate::frontier::FrontierDiscipline;
use crate::metrics::SearchMetrics;
use crate::policy::{SearchConfig, SearchVariant};
use crate::search::{CutOffReason, Search, SearchOutcome, SearchResult};

/// Iterative-deepening configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterativeDeepening {
    /// Largest depth cap tried before reporting failure.
    pub max_depth: u32,
    /// Tree search (the classic form) or graph search per iteration.
    ///
    /// Graph search with a depth cap can miss goals reachable only through a
    /// state first seen on a longer path; tree search cannot.
    pub variant: SearchVariant,
}

impl IterativeDeepening {
    /// Tree-search iterative deepening up to `max_depth`.
    #[must_use]
    pub fn new(max_depth: u32) -> Self {
        Self {
            max_depth,
            variant: SearchVariant::Tree,
        }
    }

    /// Run depth-limited searches with caps `0, 1, ..., max_depth`.
    ///
    /// Stops at the first solution. A depth-limited run that fails without
    /// touching its cap proves no deeper solution exists, so the whole search
    /// fails early. Reaching `max_depth` without a solution is also reported
    /// as [`SearchOutcome::Failure`]. Metrics accumulate across iterations.
    ///
    /// # Errors
    ///
    /// Propagates configuration errors from the engine.
    pub fn run<P: Problem>(&self, problem: &P) -> Result<SearchResult<P::Action>, SearchError> {
        let mut totals = SearchMetrics::default();
        for cap in 0..=self.max_depth {
            let config: SearchConfig<'_, P::State> = SearchConfig {
                discipline: FrontierDiscipline::Lifo,
                evaluation: None,
                variant: self.variant,
                max_depth: Some(cap),
                max_expansions: None,
            };
            let result = Search::new(problem, config)?.run();
            totals.absorb(&result.metrics);
            debug!(
                "iterative deepening: problem={} cap={cap} outcome={}",
                problem.problem_id(),
                result.outcome.kind()
            );

            match result.outcome {
                SearchOutcome::CutOff(CutOffReason::DepthLimit) => continue,
                outcome => {
                    return Ok(SearchResult {
                        outcome,
                        metrics: totals,
                    })
                }
            }
        }
        Ok(SearchResult {
            outcome: SearchOutcome::Failure,
            metrics: totals,
        })
    }
}

/// Tree-search iterative deepening up to `max_depth`.
///
/// # Errors
///
/// Propagates configuration errors from the engine.
pub fn iterative_deepening<P: Problem>(
    problem: &P,
    max_depth: u32,
) -> Result<SearchResult<P::Action>, SearchError> {
    IterativeDeepening::new(max_depth).run(problem)
}
