//! Frontier: the discovered-but-not-yet-expanded nodes of a run.
//!
//! One container serves every strategy. The [`FrontierDiscipline`] picks the
//! extraction order:
//!
//! - `Fifo`: oldest insertion first (breadth-first)
//! - `Lifo`: newest insertion first (depth-first)
//! - `Priority`: lowest evaluation value first, ties by oldest insertion
//!
//! Replacement of a worse-cost duplicate uses lazy deletion: the superseded
//! entry stays in the container and is skipped when it surfaces.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::node::{FrontierKey, NodeId};

/// Extraction order of a [`Frontier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrontierDiscipline {
    /// First in, first out.
    Fifo,
    /// Last in, first out.
    Lifo,
    /// Lowest evaluation value first, FIFO among equal values.
    Priority,
}

impl FrontierDiscipline {
    /// Stable lowercase name used in logs and reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fifo => "fifo",
            Self::Lifo => "lifo",
            Self::Priority => "priority",
        }
    }
}

impl std::fmt::Display for FrontierDiscipline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A frontier entry wrapping a node id with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior.
#[derive(Debug)]
struct FrontierEntry<S> {
    key: Reverse<FrontierKey>,
    node_id: NodeId,
    state: S,
}

impl<S> PartialEq for FrontierEntry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<S> Eq for FrontierEntry<S> {}

impl<S> PartialOrd for FrontierEntry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for FrontierEntry<S> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Frontier manager.
///
/// Maintains:
/// - A `VecDeque` for FIFO/LIFO disciplines, or a `BinaryHeap` for `Priority`
/// - A `HashMap` from state to its live entries, for `contains` and `lookup`
/// - A `HashSet` of live node ids; container entries outside it are
///   superseded and skipped when they surface
#[derive(Debug)]
pub struct Frontier<S> {
    discipline: FrontierDiscipline,
    queue: VecDeque<FrontierEntry<S>>,
    heap: BinaryHeap<FrontierEntry<S>>,
    members: HashMap<S, Vec<(NodeId, FrontierKey)>>,
    live: HashSet<NodeId>,
    next_insertion: u64,
    high_water: usize,
}

impl<S: Clone + Eq + Hash> Frontier<S> {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new(discipline: FrontierDiscipline) -> Self {
        Self {
            discipline,
            queue: VecDeque::new(),
            heap: BinaryHeap::new(),
            members: HashMap::new(),
            live: HashSet::new(),
            next_insertion: 0,
            high_water: 0,
        }
    }

    /// The extraction order of this frontier.
    #[must_use]
    pub fn discipline(&self) -> FrontierDiscipline {
        self.discipline
    }

    /// Insert a node. `priority` is ignored by FIFO and LIFO disciplines.
    ///
    /// Returns the key the node was filed under.
    pub fn insert(&mut self, node_id: NodeId, state: S, priority: f64) -> FrontierKey {
        let key = FrontierKey {
            priority,
            insertion: self.next_insertion,
        };
        self.next_insertion += 1;

        self.members
            .entry(state.clone())
            .or_default()
            .push((node_id, key));
        self.live.insert(node_id);

        let entry = FrontierEntry {
            key: Reverse(key),
            node_id,
            state,
        };
        match self.discipline {
            FrontierDiscipline::Fifo | FrontierDiscipline::Lifo => self.queue.push_back(entry),
            FrontierDiscipline::Priority => self.heap.push(entry),
        }

        self.high_water = self.high_water.max(self.live.len());
        key
    }

    /// Remove and return the next node id per the discipline.
    pub fn pop(&mut self) -> Option<NodeId> {
        loop {
            let entry = match self.discipline {
                FrontierDiscipline::Fifo => self.queue.pop_front(),
                FrontierDiscipline::Lifo => self.queue.pop_back(),
                FrontierDiscipline::Priority => self.heap.pop(),
            }?;
            if !self.live.remove(&entry.node_id) {
                continue;
            }
            self.release(&entry.state, entry.node_id);
            return Some(entry.node_id);
        }
    }

    /// Supersede the live entry `old` for `state` with a new node.
    ///
    /// The old entry is skipped when it reaches the head of the container.
    /// Returns `None` and leaves the frontier untouched if `old` is not a
    /// live entry for `state`.
    pub fn replace(
        &mut self,
        old: NodeId,
        node_id: NodeId,
        state: S,
        priority: f64,
    ) -> Option<FrontierKey> {
        let filed_under_state = self
            .members
            .get(&state)
            .is_some_and(|entries| entries.iter().any(|&(id, _)| id == old));
        if !filed_under_state || !self.live.remove(&old) {
            return None;
        }
        self.release(&state, old);
        Some(self.insert(node_id, state, priority))
    }

    fn release(&mut self, state: &S, node_id: NodeId) {
        if let Some(entries) = self.members.get_mut(state) {
            entries.retain(|&(id, _)| id != node_id);
            if entries.is_empty() {
                self.members.remove(state);
            }
        }
    }

    /// Whether a live entry exists for `state`.
    #[must_use]
    pub fn contains(&self, state: &S) -> bool {
        self.members.contains_key(state)
    }

    /// The lowest-keyed live entry for `state`, if any.
    #[must_use]
    pub fn lookup(&self, state: &S) -> Option<(NodeId, FrontierKey)> {
        self.members
            .get(state)?
            .iter()
            .copied()
            .min_by(|a, b| a.1.cmp(&b.1))
    }

    /// Number of live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Whether the frontier has no live entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// High-water mark of live entries.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}
