//! Search policy: strategy selection, tree/graph variant, and caps.
//!
//! A [`SearchPolicy`] is plain data (serde-enabled, so it can be loaded from
//! JSON). [`SearchPolicy::resolve`] binds it to a heuristic and produces the
//! engine-level [`SearchConfig`]: a frontier discipline plus an optional
//! evaluation function.

use serde::{Deserialize, Serialize};
use waypoint_kernel::problem::HeuristicFunction;
use waypoint_kernel::proof::canon::canonical_json_bytes;
use waypoint_kernel::proof::hash::{canonical_hash, ContentHash};
use waypoint_kernel::proof::hash_domain::HashDomain;

use crate::error::SearchError;
use crate::evaluation::Evaluation;
use crate::frontier::FrontierDiscipline;

/// Named search strategies.
///
/// Each is "frontier discipline + optional evaluation function"; the engine
/// itself has no per-strategy code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// FIFO frontier. Shortest by action count.
    BreadthFirst,
    /// LIFO frontier. Complete on finite spaces with graph search.
    DepthFirst,
    /// Priority frontier on `g(n)`. Minimum cost for non-negative step costs.
    UniformCost,
    /// Priority frontier on `h(n)`. Complete with graph search, not optimal.
    Greedy,
    /// Priority frontier on `g(n) + h(n)`.
    ///
    /// Optimal with graph search only if the heuristic is admissible and
    /// consistent. That is a caller obligation; the engine does not check it.
    AStar,
}

impl SearchStrategy {
    /// Frontier discipline implementing this strategy.
    #[must_use]
    pub fn discipline(self) -> FrontierDiscipline {
        match self {
            Self::BreadthFirst => FrontierDiscipline::Fifo,
            Self::DepthFirst => FrontierDiscipline::Lifo,
            Self::UniformCost | Self::Greedy | Self::AStar => FrontierDiscipline::Priority,
        }
    }

    /// Whether this strategy needs a heuristic function.
    #[must_use]
    pub fn requires_heuristic(self) -> bool {
        matches!(self, Self::Greedy | Self::AStar)
    }

    /// Stable snake-case name used in logs and reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BreadthFirst => "breadth_first",
            Self::DepthFirst => "depth_first",
            Self::UniformCost => "uniform_cost",
            Self::Greedy => "greedy",
            Self::AStar => "a_star",
        }
    }
}

impl std::fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tree search may revisit states; graph search keeps an explored set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchVariant {
    /// No explored set; every successor is inserted.
    Tree,
    /// Explored set plus frontier membership check.
    #[default]
    Graph,
}

impl SearchVariant {
    /// Stable lowercase name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tree => "tree",
            Self::Graph => "graph",
        }
    }
}

/// Search budget and strategy configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchPolicy {
    /// Strategy preset.
    pub strategy: SearchStrategy,
    /// Tree or graph search.
    #[serde(default)]
    pub variant: SearchVariant,
    /// Depth cutoff. Nodes at this depth are goal-tested but not expanded.
    #[serde(default)]
    pub max_depth: Option<u32>,
    /// Hard cap on node expansions.
    #[serde(default)]
    pub max_expansions: Option<u64>,
}

impl SearchPolicy {
    /// Graph search with the given strategy and no caps.
    #[must_use]
    pub fn new(strategy: SearchStrategy) -> Self {
        Self {
            strategy,
            variant: SearchVariant::Graph,
            max_depth: None,
            max_expansions: None,
        }
    }

    /// Replace the tree/graph variant.
    #[must_use]
    pub fn with_variant(mut self, variant: SearchVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set a depth cap.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Set an expansion cap.
    #[must_use]
    pub fn with_max_expansions(mut self, max_expansions: u64) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    /// Parse a policy from a JSON document and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::PolicyParse`] for malformed JSON or unknown
    /// fields, and whatever [`SearchPolicy::validate`] reports.
    pub fn from_json(json: &str) -> Result<Self, SearchError> {
        let policy: Self = serde_json::from_str(json)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Validate caps.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidConfiguration`] if `max_expansions` is
    /// zero (the run could never take a step).
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidConfiguration {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Bind the policy to a heuristic, producing the engine configuration.
    ///
    /// A heuristic supplied to an uninformed strategy is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::MissingHeuristic`] if the strategy is greedy or
    /// A* and `heuristic` is `None`, plus any validation failure.
    pub fn resolve<'h, S>(
        &self,
        heuristic: Option<&'h dyn HeuristicFunction<S>>,
    ) -> Result<SearchConfig<'h, S>, SearchError> {
        self.validate()?;
        let evaluation = match (self.strategy, heuristic) {
            (SearchStrategy::BreadthFirst | SearchStrategy::DepthFirst, _) => None,
            (SearchStrategy::UniformCost, _) => Some(Evaluation::PathCost),
            (SearchStrategy::Greedy, Some(h)) => Some(Evaluation::Heuristic(h)),
            (SearchStrategy::AStar, Some(h)) => Some(Evaluation::PathCostPlusHeuristic(h)),
            (strategy @ (SearchStrategy::Greedy | SearchStrategy::AStar), None) => {
                return Err(SearchError::MissingHeuristic { strategy });
            }
        };
        Ok(SearchConfig {
            discipline: self.strategy.discipline(),
            evaluation,
            variant: self.variant,
            max_depth: self.max_depth,
            max_expansions: self.max_expansions,
        })
    }

    /// JSON form of the policy (field names match the serde representation).
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "max_depth": self.max_depth,
            "max_expansions": self.max_expansions,
            "strategy": self.strategy.as_str(),
            "variant": self.variant.as_str(),
        })
    }

    /// Content digest of the canonical policy JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Canon`] if canonicalization fails.
    pub fn digest(&self) -> Result<ContentHash, SearchError> {
        let bytes = canonical_json_bytes(&self.to_json_value())?;
        Ok(canonical_hash(HashDomain::SearchPolicy, &bytes))
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self::new(SearchStrategy::BreadthFirst)
    }
}

/// Engine-level configuration: discipline, evaluation, variant, caps.
///
/// Built by [`SearchPolicy::resolve`], or directly by callers that want a
/// combination no [`SearchStrategy`] names.
#[derive(Debug)]
pub struct SearchConfig<'h, S> {
    pub discipline: FrontierDiscipline,
    pub evaluation: Option<Evaluation<'h, S>>,
    pub variant: SearchVariant,
    pub max_depth: Option<u32>,
    pub max_expansions: Option<u64>,
}

impl<S> Clone for SearchConfig<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for SearchConfig<'_, S> {}

impl<S> SearchConfig<'_, S> {
    /// Check that discipline and evaluation agree.
    ///
    /// # Errors
    ///
    /// - [`SearchError::MissingEvaluation`] for a priority frontier without an
    ///   evaluation function.
    /// - [`SearchError::InvalidConfiguration`] for an evaluation function on a
    ///   FIFO/LIFO frontier (it would be silently ignored), or a zero
    ///   expansion cap.
    pub fn validate(&self) -> Result<(), SearchError> {
        match (self.discipline, &self.evaluation) {
            (FrontierDiscipline::Priority, None) => Err(SearchError::MissingEvaluation {
                discipline: self.discipline,
            }),
            (FrontierDiscipline::Fifo | FrontierDiscipline::Lifo, Some(evaluation)) => {
                Err(SearchError::InvalidConfiguration {
                    detail: format!(
                        "{} frontier ignores evaluation function {}",
                        self.discipline,
                        evaluation.name()
                    ),
                })
            }
            _ if self.max_expansions == Some(0) => Err(SearchError::InvalidConfiguration {
                detail: "max_expansions must be at least 1".into(),
            }),
            _ => Ok(()),
        }
    }
}
