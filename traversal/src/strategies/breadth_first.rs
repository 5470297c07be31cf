use std::collections::VecDeque;

use crate::{
    engine::{Strategy, Traversal},
    node::Node,
    tree::{NodeId, SearchTree},
};

/// Breadth-first search over unweighted edges.
///
/// The first discovery of a node is always along a minimum-hop path, so nodes
/// are never re-parented. The tree payload is the hop count from the nearest
/// start.
pub struct BreadthFirst<F> {
    expand: F,
    queue: VecDeque<NodeId>,
}

impl<F> BreadthFirst<F> {
    pub fn new(expand: F) -> Self {
        Self {
            expand,
            queue: VecDeque::new(),
        }
    }
}

impl<T, F, I> Strategy<T> for BreadthFirst<F>
where
    T: Node,
    F: FnMut(&T, &SearchTree<T, usize>) -> I,
    I: IntoIterator<Item = T>,
{
    type Cost = usize;

    fn init(&mut self, tree: &mut SearchTree<T, usize>, starts: &[T]) {
        self.queue.clear();

        for start in starts {
            if let Some(id) = tree.seed(start.clone(), 0) {
                self.queue.push_back(id);
            }
        }
    }

    fn pop_next(&mut self, _tree: &SearchTree<T, usize>) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn relax(&mut self, tree: &mut SearchTree<T, usize>, current: NodeId) {
        let node = tree.node(current).clone();
        let depth = tree.cost(current) + 1;

        for next in (self.expand)(&node, &*tree) {
            if !tree.contains(&next) {
                let id = tree.discover(next, current, depth);
                self.queue.push_back(id);
            }
        }
    }

    fn has_pending(&mut self, _tree: &SearchTree<T, usize>) -> bool {
        !self.queue.is_empty()
    }

    fn name(&self) -> &'static str {
        "BFS"
    }
}

impl<T, F, I> Traversal<T, BreadthFirst<F>>
where
    T: Node,
    F: FnMut(&T, &SearchTree<T, usize>) -> I,
    I: IntoIterator<Item = T>,
{
    /// Breadth-first traversal over the neighbors returned by `expand`.
    pub fn breadth_first(expand: F) -> Self {
        Self::new(BreadthFirst::new(expand))
    }
}
