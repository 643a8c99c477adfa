//! Min-conflicts local search.
//!
//! Works on complete assignments: start from a greedy one, then repeatedly
//! move a randomly chosen conflicted variable to the value that violates the
//! fewest constraints. Incomplete by nature: running out of steps reports
//! [`CspOutcome::Failure`] without proving anything about satisfiability.

use std::fmt::Debug;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::assignment::Assignment;
use crate::error::CspError;
use crate::metrics::CspMetrics;
use crate::model::Csp;
use crate::{CspOutcome, CspResult};

/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 0x5EED_CAFE;

/// Step budget used by [`MinConflictsSolver::default`].
pub const DEFAULT_MAX_STEPS: u64 = 10_000;

/// Min-conflicts settings. `max_steps == u64::MAX` means no budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MinConflictsSolver {
    pub max_steps: u64,
    pub seed: u64,
}

impl Default for MinConflictsSolver {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            seed: DEFAULT_SEED,
        }
    }
}

impl MinConflictsSolver {
    #[must_use]
    pub fn new(max_steps: u64) -> Self {
        Self {
            max_steps,
            ..Self::default()
        }
    }

    /// Same settings, different random stream.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Run min-conflicts on `csp`.
    ///
    /// # Errors
    ///
    /// [`CspError::MissingDomain`] if a variable has no domain.
    pub fn solve<V, D>(&self, csp: &Csp<V, D>) -> Result<CspResult<V, D>, CspError>
    where
        V: Ord + Clone + Debug,
        D: Clone + PartialEq + Debug,
    {
        csp.validate()?;
        debug!(
            "min-conflicts start: variables={} constraints={} max_steps={} seed={}",
            csp.variables().len(),
            csp.constraint_count(),
            self.max_steps,
            self.seed
        );

        let mut repair = Repair {
            csp,
            rng: StdRng::seed_from_u64(self.seed),
            assignment: Assignment::new(),
            metrics: CspMetrics::default(),
        };
        let solved = repair.initialize() && repair.run(self.max_steps);
        let outcome = if solved {
            CspOutcome::Solved(repair.assignment)
        } else {
            CspOutcome::Failure
        };
        debug!(
            "min-conflicts done: outcome={} steps={} checks={}",
            outcome.kind(),
            repair.metrics.steps,
            repair.metrics.constraint_checks
        );
        Ok(CspResult {
            outcome,
            metrics: repair.metrics,
        })
    }
}

/// Run min-conflicts with the default seed.
///
/// # Errors
///
/// [`CspError::MissingDomain`] if a variable has no domain.
pub fn solve_min_conflicts<V, D>(
    csp: &Csp<V, D>,
    max_steps: u64,
) -> Result<CspResult<V, D>, CspError>
where
    V: Ord + Clone + Debug,
    D: Clone + PartialEq + Debug,
{
    MinConflictsSolver::new(max_steps).solve(csp)
}

struct Repair<'c, V, D> {
    csp: &'c Csp<V, D>,
    rng: StdRng,
    assignment: Assignment<V, D>,
    metrics: CspMetrics,
}

impl<V, D> Repair<'_, V, D>
where
    V: Ord + Clone + Debug,
    D: Clone + PartialEq + Debug,
{
    /// Greedy complete assignment in declaration order. `false` if some
    /// domain is empty.
    fn initialize(&mut self) -> bool {
        for var in 0..self.csp.len() {
            let Some(value) = self.min_conflict_value(var) else {
                return false;
            };
            self.set(var, value);
        }
        true
    }

    fn run(&mut self, max_steps: u64) -> bool {
        loop {
            let conflicted = self.conflicted_variables();
            if conflicted.is_empty() {
                return true;
            }
            if max_steps != u64::MAX && self.metrics.steps >= max_steps {
                return false;
            }
            let var = conflicted[self.rng.random_range(0..conflicted.len())];
            let Some(value) = self.min_conflict_value(var) else {
                return false;
            };
            self.set(var, value);
            self.metrics.steps += 1;
            trace!(
                "step {}: {:?} = {:?} ({} conflicted)",
                self.metrics.steps,
                self.csp.variable_at(var),
                self.csp.domain_at(var)[value],
                conflicted.len()
            );
        }
    }

    /// Value of `var` violating the fewest constraints whose scope is bound,
    /// ties broken at random. Leaves `var` bound to its previous value.
    fn min_conflict_value(&mut self, var: usize) -> Option<usize> {
        let csp = self.csp;
        let previous = self.assignment.get(csp.variable_at(var)).cloned();

        let mut best = Vec::new();
        let mut fewest = usize::MAX;
        for value in 0..csp.domain_at(var).len() {
            self.assignment
                .assign(csp.variable_at(var).clone(), csp.domain_at(var)[value].clone());
            let conflicts = self.conflicts(var);
            if conflicts < fewest {
                fewest = conflicts;
                best.clear();
            }
            if conflicts == fewest {
                best.push(value);
            }
        }

        match previous {
            Some(previous) => {
                self.assignment.assign(csp.variable_at(var).clone(), previous);
            }
            None => {
                self.assignment.unassign(csp.variable_at(var));
            }
        }
        if best.is_empty() {
            return None;
        }
        Some(best[self.rng.random_range(0..best.len())])
    }

    /// Violated constraints on `var` with a fully bound scope.
    fn conflicts(&mut self, var: usize) -> usize {
        let csp = self.csp;
        let mut violated = 0;
        for &c in csp.constraints_on(var) {
            if !csp.scope_assigned(c, &self.assignment) {
                continue;
            }
            self.metrics.constraint_checks += 1;
            if !csp.constraint_at(c).is_satisfied(&self.assignment) {
                violated += 1;
            }
        }
        violated
    }

    /// Variables in at least one violated constraint, in declaration order.
    fn conflicted_variables(&mut self) -> Vec<usize> {
        let csp = self.csp;
        let mut flagged = vec![false; csp.len()];
        for c in 0..csp.constraint_count() {
            self.metrics.constraint_checks += 1;
            if !csp.constraint_at(c).is_satisfied(&self.assignment) {
                for &var in csp.scope_at(c) {
                    flagged[var] = true;
                }
            }
        }
        (0..csp.len()).filter(|&var| flagged[var]).collect()
    }

    fn set(&mut self, var: usize, value: usize) {
        self.assignment.assign(
            self.csp.variable_at(var).clone(),
            self.csp.domain_at(var)[value].clone(),
        );
        self.metrics.assignments += 1;
    }
}
