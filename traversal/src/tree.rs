use std::collections::HashMap;

use crate::node::Node;

/// Handle to a record in a [`SearchTree`].
///
/// Handles are only meaningful for the tree that issued them and are
/// invalidated when the owning traversal is restarted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct Record<T, C> {
    node: T,
    parent: Option<NodeId>,
    cost: C,
}

/// Predecessor forest built up by a traversal.
///
/// Every discovered node owns one record holding its parent handle and a cost
/// payload (hop count for breadth-first search, cost-so-far for the weighted
/// strategies). Start nodes are roots. Parents are only ever set to nodes that
/// were already expanded, so the records always form a forest and the walk
/// from any node back to its root is finite.
#[derive(Debug, Clone)]
pub struct SearchTree<T, C> {
    records: Vec<Record<T, C>>,
    index: HashMap<T, NodeId>,
}

impl<T: Node, C: Copy> SearchTree<T, C> {
    pub(crate) fn new() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.records.clear();
        self.index.clear();
    }

    /// Adds a root. Returns `None` if the node is already present.
    pub fn seed(&mut self, node: T, cost: C) -> Option<NodeId> {
        if self.index.contains_key(&node) {
            return None;
        }

        Some(self.push(node, None, cost))
    }

    /// Records `node` as discovered from `parent`. The node must be new.
    pub fn discover(&mut self, node: T, parent: NodeId, cost: C) -> NodeId {
        debug_assert!(!self.index.contains_key(&node), "node discovered twice");
        self.push(node, Some(parent), cost)
    }

    /// Moves an existing node under a new parent with an improved cost.
    pub fn relink(&mut self, id: NodeId, parent: NodeId, cost: C) {
        let record = &mut self.records[id.0];
        record.parent = Some(parent);
        record.cost = cost;
    }

    fn push(&mut self, node: T, parent: Option<NodeId>, cost: C) -> NodeId {
        let id = NodeId(self.records.len());
        self.index.insert(node.clone(), id);
        self.records.push(Record { node, parent, cost });
        id
    }

    pub fn id_of(&self, node: &T) -> Option<NodeId> {
        self.index.get(node).copied()
    }

    pub fn node(&self, id: NodeId) -> &T {
        &self.records[id.0].node
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.records[id.0].parent
    }

    pub fn cost(&self, id: NodeId) -> C {
        self.records[id.0].cost
    }

    pub fn contains(&self, node: &T) -> bool {
        self.index.contains_key(node)
    }

    pub fn cost_of(&self, node: &T) -> Option<C> {
        self.id_of(node).map(|id| self.cost(id))
    }

    pub fn predecessor_of(&self, node: &T) -> Option<&T> {
        self.id_of(node)
            .and_then(|id| self.parent(id))
            .map(|parent| self.node(parent))
    }

    /// Number of edges between the node and the root of its tree.
    pub fn depth_of(&self, node: &T) -> Option<usize> {
        self.id_of(node).map(|id| self.ancestors(id).count() - 1)
    }

    /// Nodes from the root of its tree down to `node`, both included.
    pub fn path_to(&self, node: &T) -> Option<Vec<T>> {
        let id = self.id_of(node)?;
        let mut path: Vec<T> = self.ancestors(id).map(|id| self.node(id).clone()).collect();
        path.reverse();
        Some(path)
    }

    /// Walks from `id` up to its root, yielding `id` first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(id), move |&current| self.parent(current))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Discovered nodes in discovery order.
    pub fn nodes(&self) -> impl Iterator<Item = &T> + '_ {
        self.records.iter().map(|record| &record.node)
    }

    /// `(node, predecessor, cost)` for every discovered node.
    pub fn iter(&self) -> impl Iterator<Item = (&T, Option<&T>, C)> + '_ {
        self.records.iter().map(|record| {
            let parent = record.parent.map(|parent| self.node(parent));
            (&record.node, parent, record.cost)
        })
    }
}
