use crate::{
    engine::{Strategy, Traversal, Weighted},
    node::{Cost, Node},
    tree::{NodeId, SearchTree},
};

use super::frontier::Frontier;

/// Dijkstra's algorithm over non-negative edge weights.
///
/// `expand` returns `(neighbor, weight)` pairs. A neighbor is re-parented only
/// when the new cost is strictly lower than the stored one. Once the goal has
/// been popped its cost is optimal.
pub struct ShortestPaths<F, W> {
    expand: F,
    frontier: Frontier<W>,
}

impl<F, W: Cost> ShortestPaths<F, W> {
    pub fn new(expand: F) -> Self {
        Self {
            expand,
            frontier: Frontier::new(),
        }
    }
}

impl<T, W, F, I> Strategy<T> for ShortestPaths<F, W>
where
    T: Node,
    W: Cost,
    F: FnMut(&T, &SearchTree<T, W>) -> I,
    I: IntoIterator<Item = (T, W)>,
{
    type Cost = W;

    fn init(&mut self, tree: &mut SearchTree<T, W>, starts: &[T]) {
        self.frontier.clear();

        for start in starts {
            if let Some(id) = tree.seed(start.clone(), W::ZERO) {
                self.frontier.push(id, W::ZERO, W::ZERO);
            }
        }
    }

    fn pop_next(&mut self, tree: &SearchTree<T, W>) -> Option<NodeId> {
        self.frontier.pop(tree)
    }

    fn relax(&mut self, tree: &mut SearchTree<T, W>, current: NodeId) {
        let node = tree.node(current).clone();
        let cost = tree.cost(current);

        for (next, weight) in (self.expand)(&node, &*tree) {
            let candidate = cost + weight;

            match tree.id_of(&next) {
                None => {
                    let id = tree.discover(next, current, candidate);
                    self.frontier.push(id, candidate, candidate);
                }
                Some(id) if candidate < tree.cost(id) => {
                    tree.relink(id, current, candidate);
                    self.frontier.push(id, candidate, candidate);
                }
                Some(_) => {}
            }
        }
    }

    fn has_pending(&mut self, tree: &SearchTree<T, W>) -> bool {
        self.frontier.has_live(tree)
    }

    fn name(&self) -> &'static str {
        "Dijkstra"
    }
}

impl<T, W, F, I> Weighted<T> for ShortestPaths<F, W>
where
    T: Node,
    W: Cost,
    F: FnMut(&T, &SearchTree<T, W>) -> I,
    I: IntoIterator<Item = (T, W)>,
{
}

impl<T, W, F, I> Traversal<T, ShortestPaths<F, W>>
where
    T: Node,
    W: Cost,
    F: FnMut(&T, &SearchTree<T, W>) -> I,
    I: IntoIterator<Item = (T, W)>,
{
    /// Dijkstra traversal over the weighted edges returned by `expand`.
    pub fn shortest_paths(expand: F) -> Self {
        Self::new(ShortestPaths::new(expand))
    }
}
