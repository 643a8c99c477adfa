//! Backtracking search with ordering heuristics and inference.
//!
//! Depth-first over partial assignments. After each binding every constraint
//! on the bound variable whose scope is now complete is checked; a violation
//! undoes the binding and moves to the next value. Inference prunes domain
//! values of unbound variables and records each removal on a trail so a
//! backtrack restores exactly what its binding removed.
//!
//! Pruning never removes a value that appears in a solution consistent with
//! the current bindings, so every inference mode reports the same
//! satisfiability; they differ only in how much of the tree is visited.

use std::cmp::Reverse;
use std::collections::VecDeque;
use std::fmt::Debug;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::assignment::Assignment;
use crate::error::CspError;
use crate::metrics::CspMetrics;
use crate::model::Csp;
use crate::{CspOutcome, CspResult};

/// Which unbound variable to branch on next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableOrder {
    /// Declaration order.
    #[default]
    Static,
    /// Fewest remaining live values; ties in declaration order.
    MinimumRemainingValues,
    /// Fewest remaining values, then most constraints with other unbound
    /// variables, then declaration order.
    MrvThenDegree,
}

impl VariableOrder {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::MinimumRemainingValues => "minimum_remaining_values",
            Self::MrvThenDegree => "mrv_then_degree",
        }
    }
}

/// Order in which a variable's live values are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueOrder {
    /// Domain order.
    #[default]
    Domain,
    /// Values that rule out the fewest neighbor values first; ties in domain
    /// order.
    LeastConstrainingValue,
}

impl ValueOrder {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::LeastConstrainingValue => "least_constraining_value",
        }
    }
}

/// Pruning applied after each successful binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Inference {
    /// Consistency checks only.
    #[default]
    None,
    /// Remove values of unbound variables that would violate a constraint in
    /// which they are the last unbound variable.
    ForwardChecking,
    /// Forward checking followed by AC-3 over binary constraints. The whole
    /// problem is made arc consistent once before the first binding.
    ArcConsistency,
}

impl Inference {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::ForwardChecking => "forward_checking",
            Self::ArcConsistency => "arc_consistency",
        }
    }
}

/// Backtracking configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BacktrackingOptions {
    pub variable_order: VariableOrder,
    pub value_order: ValueOrder,
    pub inference: Inference,
}

impl BacktrackingOptions {
    /// Static order, domain order, no inference.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_variable_order(mut self, order: VariableOrder) -> Self {
        self.variable_order = order;
        self
    }

    #[must_use]
    pub fn with_value_order(mut self, order: ValueOrder) -> Self {
        self.value_order = order;
        self
    }

    #[must_use]
    pub fn with_inference(mut self, inference: Inference) -> Self {
        self.inference = inference;
        self
    }

    /// Shorthand for enabling or disabling forward checking.
    #[must_use]
    pub fn forward_checking(self, enabled: bool) -> Self {
        self.with_inference(if enabled {
            Inference::ForwardChecking
        } else {
            Inference::None
        })
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "inference": self.inference.as_str(),
            "value_order": self.value_order.as_str(),
            "variable_order": self.variable_order.as_str(),
        })
    }
}

/// Solve `csp` by backtracking.
///
/// Returns [`CspOutcome::Solved`] with a complete assignment violating no
/// constraint, or [`CspOutcome::Failure`] once every combination has been
/// ruled out.
///
/// # Errors
///
/// [`CspError::MissingDomain`] if a variable has no domain. Checked before
/// any binding is made.
pub fn solve_backtracking<V, D>(
    csp: &Csp<V, D>,
    options: &BacktrackingOptions,
) -> Result<CspResult<V, D>, CspError>
where
    V: Ord + Clone + Debug,
    D: Clone + PartialEq + Debug,
{
    csp.validate()?;
    debug!(
        "backtracking start: variables={} constraints={} order={} values={} inference={}",
        csp.variables().len(),
        csp.constraint_count(),
        options.variable_order.as_str(),
        options.value_order.as_str(),
        options.inference.as_str()
    );

    let mut solver = Backtracker::new(csp, *options);
    let solved = solver.prepare() && solver.backtrack();
    let outcome = if solved {
        CspOutcome::Solved(solver.assignment)
    } else {
        CspOutcome::Failure
    };
    debug!(
        "backtracking done: outcome={} assignments={} backtracks={} checks={} pruned={}",
        outcome.kind(),
        solver.metrics.assignments,
        solver.metrics.backtracks,
        solver.metrics.constraint_checks,
        solver.metrics.values_pruned
    );
    Ok(CspResult {
        outcome,
        metrics: solver.metrics,
    })
}

/// Per-call solver state. Variables and values are addressed by index.
struct Backtracker<'c, V, D> {
    csp: &'c Csp<V, D>,
    options: BacktrackingOptions,
    /// `live[var][value]`: value still in the current domain.
    live: Vec<Vec<bool>>,
    live_count: Vec<usize>,
    /// Pruned `(var, value)` pairs, newest last.
    trail: Vec<(usize, usize)>,
    assignment: Assignment<V, D>,
    metrics: CspMetrics,
}

impl<'c, V, D> Backtracker<'c, V, D>
where
    V: Ord + Clone + Debug,
    D: Clone + PartialEq + Debug,
{
    fn new(csp: &'c Csp<V, D>, options: BacktrackingOptions) -> Self {
        let live: Vec<Vec<bool>> = (0..csp.len())
            .map(|i| vec![true; csp.domain_at(i).len()])
            .collect();
        let live_count = live.iter().map(Vec::len).collect();
        Self {
            csp,
            options,
            live,
            live_count,
            trail: Vec::new(),
            assignment: Assignment::new(),
            metrics: CspMetrics::default(),
        }
    }

    /// Root checks before the first binding. `false` means no solution.
    fn prepare(&mut self) -> bool {
        if self.live_count.contains(&0) {
            return false;
        }
        if self.options.inference != Inference::ArcConsistency {
            return true;
        }
        let csp = self.csp;
        let mut arcs = VecDeque::new();
        for c in 0..csp.constraint_count() {
            if let [x, y] = *csp.scope_at(c) {
                arcs.push_back((x, c));
                arcs.push_back((y, c));
            }
        }
        self.ac3(arcs)
    }

    fn backtrack(&mut self) -> bool {
        let Some(var) = self.select_variable() else {
            return true;
        };
        for value in self.order_values(var) {
            self.bind(var, value);
            self.metrics.assignments += 1;
            trace!(
                "assign {:?} = {:?}",
                self.csp.variable_at(var),
                self.csp.domain_at(var)[value]
            );
            if self.consistent(var) {
                let mark = self.trail.len();
                if self.infer(var) && self.backtrack() {
                    return true;
                }
                self.restore(mark);
            }
            self.unbind(var);
        }
        self.metrics.backtracks += 1;
        false
    }

    fn select_variable(&self) -> Option<usize> {
        let mut unbound = (0..self.csp.len()).filter(|&i| !self.is_bound(i));
        match self.options.variable_order {
            VariableOrder::Static => unbound.next(),
            VariableOrder::MinimumRemainingValues => unbound.min_by_key(|&i| self.live_count[i]),
            VariableOrder::MrvThenDegree => {
                unbound.min_by_key(|&i| (self.live_count[i], Reverse(self.degree(i))))
            }
        }
    }

    /// Constraints on `var` that involve another unbound variable.
    fn degree(&self, var: usize) -> usize {
        self.csp
            .constraints_on(var)
            .iter()
            .filter(|&&c| {
                self.csp
                    .scope_at(c)
                    .iter()
                    .any(|&j| j != var && !self.is_bound(j))
            })
            .count()
    }

    fn order_values(&mut self, var: usize) -> Vec<usize> {
        let values = self.live_values(var);
        if self.options.value_order == ValueOrder::Domain {
            return values;
        }
        let csp = self.csp;
        let mut scored = Vec::with_capacity(values.len());
        for value in values {
            self.bind(var, value);
            let mut ruled_out = 0_usize;
            for &c in csp.constraints_on(var) {
                let Some(other) = self.sole_unbound(c) else {
                    continue;
                };
                for candidate in self.live_values(other) {
                    self.bind(other, candidate);
                    if !self.check(c) {
                        ruled_out += 1;
                    }
                    self.unbind(other);
                }
            }
            self.unbind(var);
            scored.push((ruled_out, value));
        }
        scored.sort_by_key(|&(ruled_out, _)| ruled_out);
        scored.into_iter().map(|(_, value)| value).collect()
    }

    /// Every complete-scope constraint on `var` holds.
    fn consistent(&mut self, var: usize) -> bool {
        let csp = self.csp;
        for &c in csp.constraints_on(var) {
            if csp.scope_assigned(c, &self.assignment) && !self.check(c) {
                return false;
            }
        }
        true
    }

    fn infer(&mut self, var: usize) -> bool {
        match self.options.inference {
            Inference::None => true,
            Inference::ForwardChecking => self.forward_check(var),
            Inference::ArcConsistency => {
                let mark = self.trail.len();
                if !self.forward_check(var) {
                    return false;
                }
                let arcs = self.arcs_into_pruned(mark);
                self.ac3(arcs)
            }
        }
    }

    fn forward_check(&mut self, var: usize) -> bool {
        let csp = self.csp;
        for &c in csp.constraints_on(var) {
            let Some(other) = self.sole_unbound(c) else {
                continue;
            };
            for value in self.live_values(other) {
                self.bind(other, value);
                let ok = self.check(c);
                self.unbind(other);
                if !ok {
                    self.prune(other, value);
                }
            }
            if self.live_count[other] == 0 {
                return false;
            }
        }
        true
    }

    /// Arcs `(z, c)` for binary `c` linking unbound `z` to a variable pruned
    /// since `mark`.
    fn arcs_into_pruned(&self, mark: usize) -> VecDeque<(usize, usize)> {
        let mut changed: Vec<usize> = self.trail[mark..].iter().map(|&(var, _)| var).collect();
        changed.sort_unstable();
        changed.dedup();

        let mut arcs = VecDeque::new();
        for y in changed {
            for &c in self.csp.constraints_on(y) {
                if let Some(z) = self.other_end(c, y) {
                    if !self.is_bound(z) {
                        arcs.push_back((z, c));
                    }
                }
            }
        }
        arcs
    }

    fn ac3(&mut self, mut arcs: VecDeque<(usize, usize)>) -> bool {
        let csp = self.csp;
        while let Some((x, c)) = arcs.pop_front() {
            if !self.revise(x, c) {
                continue;
            }
            if self.live_count[x] == 0 {
                return false;
            }
            for &next in csp.constraints_on(x) {
                if next == c {
                    continue;
                }
                if let Some(z) = self.other_end(next, x) {
                    if !self.is_bound(z) {
                        arcs.push_back((z, next));
                    }
                }
            }
        }
        true
    }

    /// Drop values of `x` with no support across binary constraint `c`.
    fn revise(&mut self, x: usize, c: usize) -> bool {
        let Some(y) = self.other_end(c, x) else {
            return false;
        };
        let y_bound = self.is_bound(y);
        let mut revised = false;
        for a in self.live_values(x) {
            self.bind(x, a);
            let supported = if y_bound {
                self.check(c)
            } else {
                let mut found = false;
                for b in self.live_values(y) {
                    self.bind(y, b);
                    found = self.check(c);
                    self.unbind(y);
                    if found {
                        break;
                    }
                }
                found
            };
            self.unbind(x);
            if !supported {
                self.prune(x, a);
                revised = true;
            }
        }
        revised
    }

    /// The other variable of a binary constraint containing `var`.
    fn other_end(&self, c: usize, var: usize) -> Option<usize> {
        match *self.csp.scope_at(c) {
            [a, b] if a == var => Some(b),
            [a, b] if b == var => Some(a),
            _ => None,
        }
    }

    /// The only unbound variable in the scope of `c`, if exactly one.
    fn sole_unbound(&self, c: usize) -> Option<usize> {
        let mut unbound = self
            .csp
            .scope_at(c)
            .iter()
            .copied()
            .filter(|&j| !self.is_bound(j));
        let first = unbound.next()?;
        unbound.next().is_none().then_some(first)
    }

    fn live_values(&self, var: usize) -> Vec<usize> {
        self.live[var]
            .iter()
            .enumerate()
            .filter_map(|(value, &alive)| alive.then_some(value))
            .collect()
    }

    fn check(&mut self, c: usize) -> bool {
        self.metrics.constraint_checks += 1;
        self.csp.constraint_at(c).is_satisfied(&self.assignment)
    }

    fn is_bound(&self, var: usize) -> bool {
        self.assignment.contains(self.csp.variable_at(var))
    }

    fn bind(&mut self, var: usize, value: usize) {
        self.assignment.assign(
            self.csp.variable_at(var).clone(),
            self.csp.domain_at(var)[value].clone(),
        );
    }

    fn unbind(&mut self, var: usize) {
        self.assignment.unassign(self.csp.variable_at(var));
    }

    fn prune(&mut self, var: usize, value: usize) {
        self.live[var][value] = false;
        self.live_count[var] -= 1;
        self.trail.push((var, value));
        self.metrics.values_pruned += 1;
    }

    fn restore(&mut self, mark: usize) {
        while self.trail.len() > mark {
            if let Some((var, value)) = self.trail.pop() {
                self.live[var][value] = true;
                self.live_count[var] += 1;
            }
        }
    }
}
