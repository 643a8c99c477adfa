//! Partial variable → value mapping.

use std::collections::BTreeMap;

/// Partial assignment with deterministic (variable-ordered) iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment<V, D> {
    values: BTreeMap<V, D>,
}

impl<V: Ord, D> Assignment<V, D> {
    /// Empty assignment.
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Value currently bound to `var`.
    #[must_use]
    pub fn get(&self, var: &V) -> Option<&D> {
        self.values.get(var)
    }

    #[must_use]
    pub fn contains(&self, var: &V) -> bool {
        self.values.contains_key(var)
    }

    /// Bind `var`, returning its previous value.
    pub fn assign(&mut self, var: V, value: D) -> Option<D> {
        self.values.insert(var, value)
    }

    /// Remove the binding for `var`.
    pub fn unassign(&mut self, var: &V) -> Option<D> {
        self.values.remove(var)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Bindings in variable order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, &D)> {
        self.values.iter()
    }

    #[must_use]
    pub fn into_map(self) -> BTreeMap<V, D> {
        self.values
    }
}

impl<V: Ord, D> Default for Assignment<V, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Ord, D> FromIterator<(V, D)> for Assignment<V, D> {
    fn from_iter<I: IntoIterator<Item = (V, D)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
