//! CSP model: variables, domains and constraints.
//!
//! Variables are kept in declaration order, which is the static selection
//! order used by the solvers. Internally everything is indexed by position so
//! solvers can keep per-variable state in plain vectors.

use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Debug;

use crate::assignment::Assignment;
use crate::error::CspError;

/// A restriction on the joint values of its scope variables.
///
/// `is_satisfied` is only called once every variable in `scope` is assigned;
/// implementations may treat missing bindings as satisfied.
pub trait Constraint<V, D> {
    /// Variables restricted by this constraint.
    fn scope(&self) -> &[V];

    /// Whether the bindings of the scope variables satisfy the constraint.
    fn is_satisfied(&self, assignment: &Assignment<V, D>) -> bool;

    /// Label used in errors and logs.
    fn name(&self) -> &str {
        "constraint"
    }
}

/// Two variables must take different values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotEqual<V> {
    scope: [V; 2],
}

impl<V> NotEqual<V> {
    #[must_use]
    pub fn new(a: V, b: V) -> Self {
        Self { scope: [a, b] }
    }
}

impl<V: Ord, D: PartialEq> Constraint<V, D> for NotEqual<V> {
    fn scope(&self) -> &[V] {
        &self.scope
    }

    fn is_satisfied(&self, assignment: &Assignment<V, D>) -> bool {
        let [a, b] = &self.scope;
        match (assignment.get(a), assignment.get(b)) {
            (Some(x), Some(y)) => x != y,
            _ => true,
        }
    }

    fn name(&self) -> &str {
        "not_equal"
    }
}

/// Every variable in the scope takes a distinct value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllDifferent<V> {
    scope: Vec<V>,
}

impl<V> AllDifferent<V> {
    #[must_use]
    pub fn new(scope: Vec<V>) -> Self {
        Self { scope }
    }
}

impl<V: Ord, D: PartialEq> Constraint<V, D> for AllDifferent<V> {
    fn scope(&self) -> &[V] {
        &self.scope
    }

    fn is_satisfied(&self, assignment: &Assignment<V, D>) -> bool {
        let values: Vec<&D> = self.scope.iter().filter_map(|v| assignment.get(v)).collect();
        values
            .iter()
            .enumerate()
            .all(|(i, x)| values[i + 1..].iter().all(|y| x != y))
    }

    fn name(&self) -> &str {
        "all_different"
    }
}

/// Arbitrary relation over the scope, given the values in scope order.
pub struct Predicate<V, F> {
    name: String,
    scope: Vec<V>,
    relation: F,
}

impl<V, F> Predicate<V, F> {
    pub fn new(name: impl Into<String>, scope: Vec<V>, relation: F) -> Self {
        Self {
            name: name.into(),
            scope,
            relation,
        }
    }
}

impl<V: Ord, D, F> Constraint<V, D> for Predicate<V, F>
where
    F: Fn(&[&D]) -> bool,
{
    fn scope(&self) -> &[V] {
        &self.scope
    }

    fn is_satisfied(&self, assignment: &Assignment<V, D>) -> bool {
        let values: Option<Vec<&D>> = self.scope.iter().map(|v| assignment.get(v)).collect();
        match values {
            Some(values) => (self.relation)(&values),
            None => true,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<V: Debug, F> Debug for Predicate<V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("name", &self.name)
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

/// A constraint-satisfaction problem.
pub struct Csp<V, D> {
    variables: Vec<V>,
    index: BTreeMap<V, usize>,
    domains: Vec<Option<Vec<D>>>,
    constraints: Vec<Box<dyn Constraint<V, D>>>,
    /// Variable indices per constraint, deduplicated.
    scopes: Vec<Vec<usize>>,
    /// Constraint indices per variable.
    by_variable: Vec<Vec<usize>>,
}

impl<V: Ord + Clone + Debug, D: Clone + PartialEq> Csp<V, D> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            variables: Vec::new(),
            index: BTreeMap::new(),
            domains: Vec::new(),
            constraints: Vec::new(),
            scopes: Vec::new(),
            by_variable: Vec::new(),
        }
    }

    /// Declare a variable without a domain. A domain must be set with
    /// [`Csp::set_domain`] before solving.
    ///
    /// # Errors
    ///
    /// [`CspError::DuplicateVariable`] if `var` is already declared.
    pub fn declare(&mut self, var: V) -> Result<(), CspError> {
        if self.index.contains_key(&var) {
            return Err(CspError::DuplicateVariable {
                variable: format!("{var:?}"),
            });
        }
        self.index.insert(var.clone(), self.variables.len());
        self.variables.push(var);
        self.domains.push(None);
        self.by_variable.push(Vec::new());
        Ok(())
    }

    /// Declare a variable with its ordered domain.
    ///
    /// # Errors
    ///
    /// [`CspError::DuplicateVariable`] if `var` is already declared.
    pub fn add_variable(&mut self, var: V, domain: Vec<D>) -> Result<(), CspError> {
        self.declare(var)?;
        if let Some(slot) = self.domains.last_mut() {
            *slot = Some(domain);
        }
        Ok(())
    }

    /// Replace the domain of a declared variable.
    ///
    /// # Errors
    ///
    /// [`CspError::UndeclaredVariable`] if `var` is unknown.
    pub fn set_domain(&mut self, var: &V, domain: Vec<D>) -> Result<(), CspError> {
        let i = self.require(var)?;
        self.domains[i] = Some(domain);
        Ok(())
    }

    /// Add a constraint over declared variables.
    ///
    /// # Errors
    ///
    /// [`CspError::EmptyScope`] for a constraint without variables,
    /// [`CspError::UndeclaredVariable`] when the scope names an unknown
    /// variable.
    pub fn add_constraint<C>(&mut self, constraint: C) -> Result<(), CspError>
    where
        C: Constraint<V, D> + 'static,
    {
        if constraint.scope().is_empty() {
            return Err(CspError::EmptyScope {
                constraint: constraint.name().to_string(),
            });
        }
        let mut scope = Vec::with_capacity(constraint.scope().len());
        for var in constraint.scope() {
            let i = self.require(var)?;
            if !scope.contains(&i) {
                scope.push(i);
            }
        }
        let id = self.constraints.len();
        for &i in &scope {
            self.by_variable[i].push(id);
        }
        self.scopes.push(scope);
        self.constraints.push(Box::new(constraint));
        Ok(())
    }

    /// Check that every variable has a domain.
    ///
    /// # Errors
    ///
    /// [`CspError::MissingDomain`] for the first variable without one.
    pub fn validate(&self) -> Result<(), CspError> {
        for (var, domain) in self.variables.iter().zip(&self.domains) {
            if domain.is_none() {
                return Err(CspError::MissingDomain {
                    variable: format!("{var:?}"),
                });
            }
        }
        Ok(())
    }

    /// Variables in declaration order.
    #[must_use]
    pub fn variables(&self) -> &[V] {
        &self.variables
    }

    /// Domain of `var`, if declared and set.
    #[must_use]
    pub fn domain(&self, var: &V) -> Option<&[D]> {
        let i = *self.index.get(var)?;
        self.domains[i].as_deref()
    }

    #[must_use]
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Whether every constraint with a fully assigned scope is satisfied.
    #[must_use]
    pub fn is_consistent(&self, assignment: &Assignment<V, D>) -> bool {
        self.violated_constraints(assignment) == 0
    }

    /// Number of constraints with a fully assigned scope that are violated.
    #[must_use]
    pub fn violated_constraints(&self, assignment: &Assignment<V, D>) -> usize {
        (0..self.constraints.len())
            .filter(|&c| self.scope_assigned(c, assignment) && !self.constraints[c].is_satisfied(assignment))
            .count()
    }

    /// Complete, in-domain and consistent.
    #[must_use]
    pub fn is_solution(&self, assignment: &Assignment<V, D>) -> bool {
        let complete = self.variables.iter().enumerate().all(|(i, var)| {
            assignment
                .get(var)
                .is_some_and(|value| self.domain_at(i).contains(value))
        });
        complete && assignment.len() == self.variables.len() && self.is_consistent(assignment)
    }

    fn require(&self, var: &V) -> Result<usize, CspError> {
        self.index
            .get(var)
            .copied()
            .ok_or_else(|| CspError::UndeclaredVariable {
                variable: format!("{var:?}"),
            })
    }

    pub(crate) fn len(&self) -> usize {
        self.variables.len()
    }

    pub(crate) fn variable_at(&self, i: usize) -> &V {
        &self.variables[i]
    }

    pub(crate) fn domain_at(&self, i: usize) -> &[D] {
        self.domains[i].as_deref().unwrap_or(&[])
    }

    pub(crate) fn constraint_at(&self, c: usize) -> &dyn Constraint<V, D> {
        self.constraints[c].as_ref()
    }

    pub(crate) fn scope_at(&self, c: usize) -> &[usize] {
        &self.scopes[c]
    }

    pub(crate) fn constraints_on(&self, i: usize) -> &[usize] {
        &self.by_variable[i]
    }

    pub(crate) fn scope_assigned(&self, c: usize, assignment: &Assignment<V, D>) -> bool {
        self.scopes[c]
            .iter()
            .all(|&i| assignment.contains(&self.variables[i]))
    }
}

impl<V: Ord + Clone + Debug, D: Clone + PartialEq> Default for Csp<V, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Debug, D: Debug> Debug for Csp<V, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Csp")
            .field("variables", &self.variables)
            .field("domains", &self.domains)
            .field("constraints", &self.constraints.len())
            .finish()
    }
}
