//! Explored set: states already expanded by a graph-search run.

use std::collections::HashSet;
use std::hash::Hash;

/// Deduplication record of expanded states.
///
/// Invariant: a state that enters the set is never expanded again by the
/// same run. Tree-search runs never populate it.
#[derive(Debug)]
pub struct ExploredSet<S> {
    states: HashSet<S>,
}

impl<S: Eq + Hash> ExploredSet<S> {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            states: HashSet::new(),
        }
    }

    /// Record `state` as expanded. Returns `false` if it already was.
    pub fn insert(&mut self, state: S) -> bool {
        self.states.insert(state)
    }

    /// Whether `state` has been expanded.
    #[must_use]
    pub fn contains(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    /// Number of distinct expanded states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether nothing has been expanded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<S: Eq + Hash> Default for ExploredSet<S> {
    fn default() -> Self {
        Self::new()
    }
}
