use std::iter::FusedIterator;

use log::{debug, trace};

use crate::{
    error::{Result, TraversalError},
    node::Node,
    tree::{NodeId, SearchTree},
};

/// Frontier management and relaxation for one search algorithm.
///
/// The engine owns the [`SearchTree`] and drives the strategy through it. A
/// strategy only decides which node is expanded next and how the neighbors of
/// an expanded node update the tree.
pub trait Strategy<T: Node> {
    /// Per-node payload stored in the tree.
    type Cost: Copy;

    /// Seeds the frontier and the (already cleared) tree with the start nodes.
    fn init(&mut self, tree: &mut SearchTree<T, Self::Cost>, starts: &[T]);

    /// Removes and returns the next node to expand.
    fn pop_next(&mut self, tree: &SearchTree<T, Self::Cost>) -> Option<NodeId>;

    /// Expands `current`, discovering or improving its neighbors.
    fn relax(&mut self, tree: &mut SearchTree<T, Self::Cost>, current: NodeId);

    /// Whether a later `pop_next` would return a node.
    fn has_pending(&mut self, tree: &SearchTree<T, Self::Cost>) -> bool;

    fn name(&self) -> &'static str;
}

/// Strategies whose tree payload is an accumulated path cost.
pub trait Weighted<T: Node>: Strategy<T> {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Ready,
    Completed,
}

/// Incremental search over a graph defined by a [`Strategy`].
///
/// A traversal is reusable: every [`start_from`](Self::start_from) discards the
/// previous bookkeeping. In between, [`go_to`](Self::go_to) runs the search to
/// completion and [`advance`](Self::advance) runs it one expansion at a time.
pub struct Traversal<T: Node, S: Strategy<T>> {
    strategy: S,
    tree: SearchTree<T, S::Cost>,
    starts: Vec<T>,
    cursor: Option<T>,
    phase: Phase,
}

impl<T: Node, S: Strategy<T>> Traversal<T, S> {
    pub fn new(strategy: S) -> Self {
        Self {
            strategy,
            tree: SearchTree::new(),
            starts: Vec::new(),
            cursor: None,
            phase: Phase::Uninitialized,
        }
    }

    /// Resets all bookkeeping and seeds the search with `starts`.
    pub fn start_from<I>(&mut self, starts: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = T>,
    {
        let starts: Vec<T> = starts.into_iter().collect();
        if starts.is_empty() {
            return Err(TraversalError::InvalidState(
                "start_from requires at least one start node",
            ));
        }

        self.tree.clear();
        self.strategy.init(&mut self.tree, &starts);
        self.starts = starts;
        self.cursor = None;
        self.phase = Phase::Ready;

        debug!(
            "{}: starting from {} node(s)",
            self.strategy.name(),
            self.tree.len()
        );

        Ok(self)
    }

    /// Expands nodes until `end` is popped from the frontier or the frontier
    /// runs dry. An unreachable `end` is not an error; it simply stays
    /// unvisited and later path queries report it.
    pub fn go_to(&mut self, end: T) -> Result<&mut Self> {
        self.ensure_ready()?;

        let mut expanded = 0usize;
        let mut reached = false;

        while let Some(current) = self.strategy.pop_next(&self.tree) {
            if *self.tree.node(current) == end {
                reached = true;
                break;
            }

            self.strategy.relax(&mut self.tree, current);
            expanded += 1;
        }

        if reached {
            debug!(
                "{}: reached goal after expanding {} node(s)",
                self.strategy.name(),
                expanded
            );
        } else {
            debug!(
                "{}: frontier exhausted after expanding {} node(s), goal not reached",
                self.strategy.name(),
                expanded
            );
        }

        self.cursor = Some(end);
        self.phase = Phase::Completed;
        Ok(self)
    }

    /// Pops and expands exactly one node, moving the cursor to it. The
    /// traversal completes once nothing is left to expand.
    pub fn advance(&mut self) -> Result<T> {
        self.ensure_ready()?;

        let Some(current) = self.strategy.pop_next(&self.tree) else {
            self.phase = Phase::Completed;
            return Err(TraversalError::InvalidState("frontier is empty"));
        };

        self.strategy.relax(&mut self.tree, current);

        let node = self.tree.node(current).clone();
        self.cursor = Some(node.clone());

        if !self.strategy.has_pending(&self.tree) {
            self.phase = Phase::Completed;
        }

        trace!(
            "{}: expanded node #{}, {} discovered",
            self.strategy.name(),
            current.index(),
            self.tree.len()
        );

        Ok(node)
    }

    /// Lazily advances the traversal, yielding each expanded node.
    pub fn steps(&mut self) -> Steps<'_, T, S> {
        Steps { traversal: self }
    }

    fn ensure_ready(&self) -> Result<()> {
        match self.phase {
            Phase::Ready => Ok(()),
            Phase::Uninitialized => Err(TraversalError::InvalidState(
                "traversal has not been started, call start_from first",
            )),
            Phase::Completed => Err(TraversalError::InvalidState(
                "traversal is finished, call start_from to search again",
            )),
        }
    }

    fn target(&self) -> Result<&T> {
        if self.phase == Phase::Uninitialized {
            return Err(TraversalError::InvalidState(
                "traversal has not been started, call start_from first",
            ));
        }

        self.cursor.as_ref().ok_or(TraversalError::InvalidState(
            "no node has been reached yet, call go_to or advance first",
        ))
    }

    /// Path from the nearest start to the cursor, both included.
    pub fn path(&self) -> Result<Vec<T>> {
        let target = self.target()?;
        self.path_to(target)
    }

    /// Path from the start that discovered `node` down to `node`.
    pub fn path_to(&self, node: &T) -> Result<Vec<T>> {
        self.tree.path_to(node).ok_or(TraversalError::NodeNotVisited)
    }

    /// Path from `from` to the cursor. `from` must be a start or an ancestor
    /// of the cursor in the search tree.
    pub fn path_from(&self, from: &T) -> Result<Vec<T>> {
        let target = self.target()?;
        let target = self
            .tree
            .id_of(target)
            .ok_or(TraversalError::NodeNotVisited)?;
        let from = self.tree.id_of(from).ok_or(TraversalError::NodeNotVisited)?;

        let mut path = Vec::new();
        for id in self.tree.ancestors(target) {
            path.push(self.tree.node(id).clone());
            if id == from {
                path.reverse();
                return Ok(path);
            }
        }

        Err(TraversalError::NotOnPath)
    }

    /// Edge count from the nearest start to the cursor.
    pub fn depth(&self) -> Result<usize> {
        let target = self.target()?;
        self.depth_of(target)
    }

    pub fn depth_of(&self, node: &T) -> Result<usize> {
        self.tree.depth_of(node).ok_or(TraversalError::NodeNotVisited)
    }

    /// Every node discovered so far, expanded or not.
    pub fn visited(&self) -> impl Iterator<Item = &T> + '_ {
        self.tree.nodes()
    }

    pub fn is_visited(&self, node: &T) -> bool {
        self.tree.contains(node)
    }

    pub fn visited_count(&self) -> usize {
        self.tree.len()
    }

    pub fn tree(&self) -> &SearchTree<T, S::Cost> {
        &self.tree
    }

    pub fn cursor(&self) -> Option<&T> {
        self.cursor.as_ref()
    }

    pub fn starts(&self) -> &[T] {
        &self.starts
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Completed
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }
}

impl<T: Node, S: Weighted<T>> Traversal<T, S> {
    /// Best known cost from the start set to the cursor.
    pub fn distance(&self) -> Result<S::Cost> {
        let target = self.target()?;
        self.distance_to(target)
    }

    pub fn distance_to(&self, node: &T) -> Result<S::Cost> {
        self.tree.cost_of(node).ok_or(TraversalError::NodeNotVisited)
    }
}

/// Iterator returned by [`Traversal::steps`].
///
/// Dropping it early leaves the traversal in a consistent, resumable state.
pub struct Steps<'a, T: Node, S: Strategy<T>> {
    traversal: &'a mut Traversal<T, S>,
}

impl<T: Node, S: Strategy<T>> Iterator for Steps<'_, T, S> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.traversal.phase != Phase::Ready {
            return None;
        }

        self.traversal.advance().ok()
    }
}

impl<T: Node, S: Strategy<T>> FusedIterator for Steps<'_, T, S> {}
