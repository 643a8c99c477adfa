//! Search nodes, the per-run node arena, and the frontier ordering key.

use std::cmp::Ordering;

/// Index of a node inside its run's [`NodeArena`].
pub type NodeId = usize;

/// An immutable point in the search tree.
///
/// Nodes refer to their parent by arena index, never by pointer. The tree is
/// owned by the [`NodeArena`] of a single search run.
#[derive(Debug, Clone)]
pub struct SearchNode<S, A> {
    /// Arena index of this node.
    pub node_id: NodeId,
    /// Parent node (`None` for the root).
    pub parent_id: Option<NodeId>,
    /// Full immutable state at this node.
    pub state: S,
    /// The action that produced this node from its parent.
    pub action: Option<A>,
    /// Cumulative path cost `g(n)`.
    pub path_cost: f64,
    /// Heuristic estimate `h(n)` (0 when the run is uninformed).
    pub h_cost: f64,
    /// Tree depth (root = 0).
    pub depth: u32,
    /// Global counter for deterministic tie-breaking.
    pub creation_order: u64,
}

/// Owner of every node created during one search run.
///
/// Node ids are dense and assigned in creation order, so `node_id` doubles as
/// `creation_order` within a single run. Iterative deepening builds a fresh
/// arena per iteration.
#[derive(Debug)]
pub struct NodeArena<S, A> {
    nodes: Vec<SearchNode<S, A>>,
}

impl<S, A> NodeArena<S, A> {
    /// Create an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Create the root node.
    pub fn push_root(&mut self, state: S, h_cost: f64) -> NodeId {
        self.push(None, state, None, 0.0, h_cost, 0)
    }

    /// Create a child of `parent` and return its id.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not an id previously returned by this arena.
    pub fn push_child(
        &mut self,
        parent: NodeId,
        state: S,
        action: A,
        step_cost: f64,
        h_cost: f64,
    ) -> NodeId {
        let (path_cost, depth) = {
            let p = &self.nodes[parent];
            (p.path_cost + step_cost, p.depth + 1)
        };
        self.push(Some(parent), state, Some(action), path_cost, h_cost, depth)
    }

    fn push(
        &mut self,
        parent_id: Option<NodeId>,
        state: S,
        action: Option<A>,
        path_cost: f64,
        h_cost: f64,
        depth: u32,
    ) -> NodeId {
        let node_id = self.nodes.len();
        self.nodes.push(SearchNode {
            node_id,
            parent_id,
            state,
            action,
            path_cost,
            h_cost,
            depth,
            creation_order: node_id as u64,
        });
        node_id
    }

    /// Look up a node.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&SearchNode<S, A>> {
        self.nodes.get(id)
    }

    /// Number of nodes created so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no node has been created yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node ids from the root to `id`, inclusive.
    #[must_use]
    pub fn path_ids(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            path.push(node_id);
            current = self.nodes.get(node_id).and_then(|n| n.parent_id);
        }
        path.reverse();
        path
    }
}

impl<S, A: Clone> NodeArena<S, A> {
    /// The action sequence leading from the root to `id`.
    #[must_use]
    pub fn actions_to(&self, id: NodeId) -> Vec<A> {
        self.path_ids(id)
            .into_iter()
            .filter_map(|node_id| self.nodes[node_id].action.clone())
            .collect()
    }
}

impl<S, A> Default for NodeArena<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

/// The frontier ordering key: `(priority, insertion)`.
///
/// Lower `priority` first, ties broken by older `insertion`. FIFO and LIFO
/// disciplines ignore `priority`.
#[derive(Debug, Clone, Copy)]
pub struct FrontierKey {
    pub priority: f64,
    pub insertion: u64,
}

impl PartialEq for FrontierKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierKey {}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then(self.insertion.cmp(&other.insertion))
    }
}
