//! `SearchReport`: canonical, hashable summary of one run.
//!
//! Two runs of the same problem under the same policy must produce
//! byte-identical reports. Actions are recorded by their `Debug` rendering so
//! the report stays independent of the domain's types.

use std::fmt::Debug;

use waypoint_kernel::proof::canon::canonical_json_bytes;
use waypoint_kernel::proof::hash::{canonical_hash, ContentHash};
use waypoint_kernel::proof::hash_domain::HashDomain;

use crate::error::SearchError;
use crate::metrics::SearchMetrics;
use crate::policy::SearchPolicy;
use crate::search::{SearchOutcome, SearchResult};

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    pub problem_id: String,
    pub policy: SearchPolicy,
    pub outcome: &'static str,
    pub actions: Vec<String>,
    pub path_cost: Option<f64>,
    pub metrics: SearchMetrics,
}

impl SearchReport {
    /// Build a report from a result.
    #[must_use]
    pub fn new<A: Debug>(problem_id: &str, policy: &SearchPolicy, result: &SearchResult<A>) -> Self {
        let (actions, path_cost) = match &result.outcome {
            SearchOutcome::Solution(solution) => (
                solution.actions.iter().map(|a| format!("{a:?}")).collect(),
                Some(solution.path_cost),
            ),
            SearchOutcome::Failure | SearchOutcome::CutOff(_) => (Vec::new(), None),
        };
        Self {
            problem_id: problem_id.to_string(),
            policy: policy.clone(),
            outcome: result.outcome.kind(),
            actions,
            path_cost,
            metrics: result.metrics.clone(),
        }
    }

    /// JSON form of the report.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "actions": self.actions,
            "metrics": self.metrics.to_json_value(),
            "outcome": self.outcome,
            "path_cost": self.path_cost,
            "policy": self.policy.to_json_value(),
            "problem_id": self.problem_id,
        })
    }

    /// Serialize to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Canon`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, SearchError> {
        Ok(canonical_json_bytes(&self.to_json_value())?)
    }

    /// Content digest of the canonical bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Canon`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, SearchError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::SearchReport, &bytes))
    }
}
