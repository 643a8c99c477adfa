//! Per-run CSP solver counters.

use std::collections::BTreeMap;

/// Counters attached to every solver run. Zeroed at the start of each call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CspMetrics {
    /// Values bound to a variable (including min-conflicts repairs).
    pub assignments: u64,
    /// Variables whose every remaining value failed.
    pub backtracks: u64,
    /// Calls to `Constraint::is_satisfied`.
    pub constraint_checks: u64,
    /// Domain values removed by forward checking or arc consistency.
    pub values_pruned: u64,
    /// Min-conflicts repair steps taken.
    pub steps: u64,
}

impl CspMetrics {
    /// Counter names in report order.
    pub const NAMES: &'static [&'static str] = &[
        "assignments",
        "backtracks",
        "constraint_checks",
        "steps",
        "values_pruned",
    ];

    /// Look up a counter by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<u64> {
        match name {
            "assignments" => Some(self.assignments),
            "backtracks" => Some(self.backtracks),
            "constraint_checks" => Some(self.constraint_checks),
            "values_pruned" => Some(self.values_pruned),
            "steps" => Some(self.steps),
            _ => None,
        }
    }

    /// Every counter keyed by name.
    #[must_use]
    pub fn counters(&self) -> BTreeMap<&'static str, u64> {
        Self::NAMES
            .iter()
            .filter_map(|name| self.get(name).map(|v| (*name, v)))
            .collect()
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!(self.counters())
    }
}
