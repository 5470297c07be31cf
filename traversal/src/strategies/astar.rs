use crate::{
    engine::{Strategy, Traversal, Weighted},
    node::{Cost, Node},
    tree::{NodeId, SearchTree},
};

use super::frontier::Frontier;

/// A* search: Dijkstra ordered by cost-so-far plus a heuristic estimate.
///
/// The heuristic must never overestimate the remaining cost to the goal for
/// the returned path to be optimal. Inconsistent but admissible heuristics may
/// cause nodes to be reopened, which is handled like any other improvement.
pub struct AStar<F, H, W> {
    expand: F,
    heuristic: H,
    frontier: Frontier<W>,
}

impl<F, H, W: Cost> AStar<F, H, W> {
    pub fn new(expand: F, heuristic: H) -> Self {
        Self {
            expand,
            heuristic,
            frontier: Frontier::new(),
        }
    }
}

impl<T, W, F, H, I> Strategy<T> for AStar<F, H, W>
where
    T: Node,
    W: Cost,
    F: FnMut(&T, &SearchTree<T, W>) -> I,
    H: FnMut(&T) -> W,
    I: IntoIterator<Item = (T, W)>,
{
    type Cost = W;

    fn init(&mut self, tree: &mut SearchTree<T, W>, starts: &[T]) {
        self.frontier.clear();

        for start in starts {
            if let Some(id) = tree.seed(start.clone(), W::ZERO) {
                let estimate = (self.heuristic)(start);
                self.frontier.push(id, W::ZERO, estimate);
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

            let id = match tree.id_of(&next) {
                None => tree.discover(next, current, candidate),
                Some(id) if candidate < tree.cost(id) => {
                    tree.relink(id, current, candidate);
                    id
                }
                Some(_) => continue,
            };

            let estimate = (self.heuristic)(tree.node(id));
            self.frontier.push(id, candidate, candidate + estimate);
        }
    }

    fn has_pending(&mut self, tree: &SearchTree<T, W>) -> bool {
        self.frontier.has_live(tree)
    }

    fn name(&self) -> &'static str {
        "A*"
    }
}

impl<T, W, F, H, I> Weighted<T> for AStar<F, H, W>
where
    T: Node,
    W: Cost,
    F: FnMut(&T, &SearchTree<T, W>) -> I,
    H: FnMut(&T) -> W,
    I: IntoIterator<Item = (T, W)>,
{
}

impl<T, W, F, H, I> Traversal<T, AStar<F, H, W>>
where
    T: Node,
    W: Cost,
    F: FnMut(&T, &SearchTree<T, W>) -> I,
    H: FnMut(&T) -> W,
    I: IntoIterator<Item = (T, W)>,
{
    /// A* traversal over the weighted edges returned by `expand`, guided by
    /// `heuristic`.
    pub fn astar(expand: F, heuristic: H) -> Self {
        Self::new(AStar::new(expand, heuristic))
    }
}
