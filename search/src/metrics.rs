//! Per-run search counters.

use std::collections::BTreeMap;

/// A single counter value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Count(u64),
    Real(f64),
}

/// Counters attached to every search run.
///
/// Created zeroed at the start of each invocation and mutated only by the
/// engine during that invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchMetrics {
    /// Nodes whose successors were generated.
    pub nodes_expanded: u64,
    /// Child nodes created and inserted into the frontier.
    pub nodes_generated: u64,
    /// Largest frontier size observed.
    pub max_frontier_size: u64,
    /// Successors dropped because their state was explored or already queued.
    pub duplicates_suppressed: u64,
    /// Queued nodes superseded by a cheaper path to the same state.
    pub frontier_replacements: u64,
    /// Distinct states in the explored set at the end of the run.
    pub explored_size: u64,
    /// Nodes popped at the depth cap and therefore not expanded.
    pub depth_cutoffs: u64,
    /// Depth-limited runs performed (1 for a plain search).
    pub iterations: u64,
    /// Path cost of the returned solution (0 when there is none).
    pub path_cost: f64,
    /// Depth of the returned solution (0 when there is none).
    pub solution_depth: u32,
}

impl SearchMetrics {
    /// Counter names in report order.
    pub const NAMES: &'static [&'static str] = &[
        "depth_cutoffs",
        "duplicates_suppressed",
        "explored_size",
        "frontier_replacements",
        "iterations",
        "max_frontier_size",
        "nodes_expanded",
        "nodes_generated",
        "path_cost",
        "solution_depth",
    ];

    /// Look up a counter by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<MetricValue> {
        let value = match name {
            "nodes_expanded" => MetricValue::Count(self.nodes_expanded),
            "nodes_generated" => MetricValue::Count(self.nodes_generated),
            "max_frontier_size" => MetricValue::Count(self.max_frontier_size),
            "duplicates_suppressed" => MetricValue::Count(self.duplicates_suppressed),
            "frontier_replacements" => MetricValue::Count(self.frontier_replacements),
            "explored_size" => MetricValue::Count(self.explored_size),
            "depth_cutoffs" => MetricValue::Count(self.depth_cutoffs),
            "iterations" => MetricValue::Count(self.iterations),
            "path_cost" => MetricValue::Real(self.path_cost),
            "solution_depth" => MetricValue::Count(u64::from(self.solution_depth)),
            _ => return None,
        };
        Some(value)
    }

    /// Every counter keyed by name.
    #[must_use]
    pub fn counters(&self) -> BTreeMap<&'static str, MetricValue> {
        Self::NAMES
            .iter()
            .filter_map(|name| self.get(name).map(|v| (*name, v)))
            .collect()
    }

    /// Record a frontier-size observation.
    pub fn observe_frontier(&mut self, size: usize) {
        self.max_frontier_size = self.max_frontier_size.max(size as u64);
    }

    /// Fold the counters of a finished depth-limited iteration into a running
    /// total. Sizes take the maximum; work counters add up.
    pub fn absorb(&mut self, other: &Self) {
        self.nodes_expanded += other.nodes_expanded;
        self.nodes_generated += other.nodes_generated;
        self.duplicates_suppressed += other.duplicates_suppressed;
        self.frontier_replacements += other.frontier_replacements;
        self.depth_cutoffs += other.depth_cutoffs;
        self.iterations += other.iterations;
        self.max_frontier_size = self.max_frontier_size.max(other.max_frontier_size);
        self.explored_size = self.explored_size.max(other.explored_size);
        self.path_cost = other.path_cost;
        self.solution_depth = other.solution_depth;
    }

    /// JSON object with one key per counter.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let map: serde_json::Map<String, serde_json::Value> = self
            .counters()
            .into_iter()
            .map(|(name, value)| {
                let json = match value {
                    MetricValue::Count(n) => serde_json::json!(n),
                    MetricValue::Real(x) => serde_json::json!(x),
                };
                (name.to_string(), json)
            })
            .collect();
        serde_json::Value::Object(map)
    }
}
