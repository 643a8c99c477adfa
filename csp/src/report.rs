//! `CspReport`: canonical, hashable summary of one solver run.

use std::fmt::Debug;

use waypoint_kernel::proof::canon::{canonical_json_bytes, CanonError};
use waypoint_kernel::proof::hash::{canonical_hash, ContentHash};
use waypoint_kernel::proof::hash_domain::HashDomain;

use crate::metrics::CspMetrics;
use crate::CspResult;

/// Summary of a finished solver run. Variables and values are recorded by
/// their `Debug` rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct CspReport {
    pub solver: &'static str,
    pub settings: serde_json::Value,
    pub outcome: &'static str,
    pub assignment: Vec<(String, String)>,
    pub metrics: CspMetrics,
}

impl CspReport {
    /// `solver` names the algorithm; `settings` is its configuration as JSON.
    #[must_use]
    pub fn new<V: Ord + Debug, D: Debug>(
        solver: &'static str,
        settings: serde_json::Value,
        result: &CspResult<V, D>,
    ) -> Self {
        let assignment = result
            .solution()
            .map(|solution| {
                solution
                    .iter()
                    .map(|(var, value)| (format!("{var:?}"), format!("{value:?}")))
                    .collect()
            })
            .unwrap_or_default();
        Self {
            solver,
            settings,
            outcome: result.outcome.kind(),
            assignment,
            metrics: result.metrics,
        }
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let assignment: serde_json::Map<String, serde_json::Value> = self
            .assignment
            .iter()
            .map(|(var, value)| (var.clone(), serde_json::Value::String(value.clone())))
            .collect();
        serde_json::json!({
            "assignment": assignment,
            "metrics": self.metrics.to_json_value(),
            "outcome": self.outcome,
            "settings": self.settings,
            "solver": self.solver,
        })
    }

    /// Serialize to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content digest of the canonical bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::CspReport, &bytes))
    }
}
