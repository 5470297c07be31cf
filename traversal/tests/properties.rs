//! Randomized cross-checks against brute-force references.

use std::collections::{HashMap, VecDeque};

use rand::{Rng, SeedableRng, rngs::StdRng};
use traversal::{SearchTree, Traversal, TraversalError};

const CASES: u64 = 200;

struct Graph {
    adjacency: Vec<Vec<(usize, u32)>>,
}

impl Graph {
    fn random(rng: &mut StdRng) -> Self {
        let size = rng.gen_range(1..=12);
        let density = rng.gen_range(0.05..0.5);

        let mut adjacency = vec![Vec::new(); size];
        for (from, edges) in adjacency.iter_mut().enumerate() {
            for to in 0..size {
                if to != from && rng.gen_bool(density) {
                    edges.push((to, rng.gen_range(0..10)));
                }
            }
        }

        Self { adjacency }
    }

    fn len(&self) -> usize {
        self.adjacency.len()
    }

    fn edges(&self, node: usize) -> Vec<(usize, u32)> {
        self.adjacency[node].clone()
    }

    fn neighbors(&self, node: usize) -> Vec<usize> {
        self.adjacency[node].iter().map(|&(to, _)| to).collect()
    }

    fn weight(&self, from: usize, to: usize) -> Option<u32> {
        self.adjacency[from]
            .iter()
            .find(|&&(next, _)| next == to)
            .map(|&(_, weight)| weight)
    }

    fn hops_from(&self, starts: &[usize]) -> Vec<Option<usize>> {
        let mut hops = vec![None; self.len()];
        let mut queue = VecDeque::new();
        for &start in starts {
            hops[start] = Some(0);
            queue.push_back(start);
        }

        while let Some(node) = queue.pop_front() {
            let depth = hops[node].unwrap_or(0);
            for next in self.neighbors(node) {
                if hops[next].is_none() {
                    hops[next] = Some(depth + 1);
                    queue.push_back(next);
                }
            }
        }

        hops
    }

    fn bellman_ford(&self, starts: &[usize]) -> Vec<Option<u32>> {
        let mut dist = vec![None; self.len()];
        for &start in starts {
            dist[start] = Some(0);
        }

        for _ in 0..self.len() {
            for from in 0..self.len() {
                let Some(base) = dist[from] else { continue };
                for &(to, weight) in &self.adjacency[from] {
                    if dist[to].is_none_or(|current| base + weight < current) {
                        dist[to] = Some(base + weight);
                    }
                }
            }
        }

        dist
    }

    /// Exact remaining cost from every node to `goal`.
    fn cost_to(&self, goal: usize) -> Vec<Option<u32>> {
        let mut reversed = Graph {
            adjacency: vec![Vec::new(); self.len()],
        };
        for (from, edges) in self.adjacency.iter().enumerate() {
            for &(to, weight) in edges {
                reversed.adjacency[to].push((from, weight));
            }
        }

        reversed.bellman_ford(&[goal])
    }
}

fn random_starts(rng: &mut StdRng, graph: &Graph) -> Vec<usize> {
    let count = rng.gen_range(1..=graph.len().min(3));
    (0..count).map(|_| rng.gen_range(0..graph.len())).collect()
}

fn snapshot<C: Copy>(tree: &SearchTree<usize, C>) -> HashMap<usize, (Option<usize>, C)> {
    tree.iter()
        .map(|(node, parent, cost)| (*node, (parent.copied(), cost)))
        .collect()
}

#[test]
fn breadth_first_depth_is_minimum_hop_count() {
    for seed in 0..CASES {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = Graph::random(&mut rng);
        let starts = random_starts(&mut rng, &graph);
        let expected = graph.hops_from(&starts);

        let mut bfs = Traversal::breadth_first(|node: &usize, _| graph.neighbors(*node));
        bfs.start_from(starts.clone()).unwrap().go_to(usize::MAX).unwrap();

        for node in 0..graph.len() {
            match expected[node] {
                Some(hops) => assert_eq!(bfs.depth_of(&node), Ok(hops), "seed {seed}"),
                None => assert_eq!(
                    bfs.depth_of(&node),
                    Err(TraversalError::NodeNotVisited),
                    "seed {seed}"
                ),
            }
        }
    }
}

#[test]
fn shortest_paths_match_bellman_ford() {
    for seed in 0..CASES {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = Graph::random(&mut rng);
        let starts = random_starts(&mut rng, &graph);
        let expected = graph.bellman_ford(&starts);

        let mut dijkstra = Traversal::shortest_paths(|node: &usize, _| graph.edges(*node));
        dijkstra.start_from(starts.clone()).unwrap().go_to(usize::MAX).unwrap();

        for node in 0..graph.len() {
            assert_eq!(
                dijkstra.distance_to(&node).ok(),
                expected[node],
                "seed {seed}, node {node}"
            );
        }
    }
}

#[test]
fn reconstructed_paths_are_valid_and_tight() {
    for seed in 0..CASES {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = Graph::random(&mut rng);
        let starts = random_starts(&mut rng, &graph);

        let mut dijkstra = Traversal::shortest_paths(|node: &usize, _| graph.edges(*node));
        dijkstra.start_from(starts.clone()).unwrap();
        dijkstra.steps().for_each(drop);

        for &node in dijkstra.visited() {
            let path = dijkstra.path_to(&node).unwrap();
            assert!(starts.contains(&path[0]), "seed {seed}");
            assert_eq!(path.last(), Some(&node));

            let cost: u32 = path
                .windows(2)
                .map(|pair| graph.weight(pair[0], pair[1]).expect("path follows edges"))
                .sum();
            assert_eq!(Ok(cost), dijkstra.distance_to(&node), "seed {seed}");
        }
    }
}

#[test]
fn astar_matches_dijkstra_with_admissible_heuristics() {
    for seed in 0..CASES {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = Graph::random(&mut rng);
        let starts = random_starts(&mut rng, &graph);
        let goal = rng.gen_range(0..graph.len());
        let exact = graph.cost_to(goal);

        let mut dijkstra = Traversal::shortest_paths(|node: &usize, _| graph.edges(*node));
        dijkstra.start_from(starts.clone()).unwrap().go_to(goal).unwrap();
        let expected = dijkstra.distance();

        let heuristics: [&dyn Fn(&usize) -> u32; 3] = [
            &|_| 0,
            &|node| exact[*node].unwrap_or(0) / 2,
            &|node| exact[*node].unwrap_or(0),
        ];

        for heuristic in heuristics {
            let mut astar = Traversal::astar(|node: &usize, _| graph.edges(*node), heuristic);
            astar.start_from(starts.clone()).unwrap().go_to(goal).unwrap();

            assert_eq!(astar.distance(), expected, "seed {seed}");
            if let Ok(path) = astar.path() {
                assert_eq!(path.last(), Some(&goal));
            }
        }
    }
}

#[test]
fn multi_source_equals_best_single_source() {
    for seed in 0..CASES {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = Graph::random(&mut rng);
        let starts = random_starts(&mut rng, &graph);

        let mut bfs = Traversal::breadth_first(|node: &usize, _| graph.neighbors(*node));
        let mut dijkstra = Traversal::shortest_paths(|node: &usize, _| graph.edges(*node));

        bfs.start_from(starts.clone()).unwrap().go_to(usize::MAX).unwrap();
        dijkstra.start_from(starts.clone()).unwrap().go_to(usize::MAX).unwrap();
        let combined_hops: Vec<_> = (0..graph.len()).map(|n| bfs.depth_of(&n).ok()).collect();
        let combined_cost: Vec<_> = (0..graph.len())
            .map(|n| dijkstra.distance_to(&n).ok())
            .collect();

        let mut best_hops = vec![None; graph.len()];
        let mut best_cost = vec![None; graph.len()];
        for &start in &starts {
            bfs.start_from([start]).unwrap().go_to(usize::MAX).unwrap();
            dijkstra.start_from([start]).unwrap().go_to(usize::MAX).unwrap();

            for node in 0..graph.len() {
                if let Ok(hops) = bfs.depth_of(&node) {
                    best_hops[node] = Some(best_hops[node].map_or(hops, |best: usize| best.min(hops)));
                }
                if let Ok(cost) = dijkstra.distance_to(&node) {
                    best_cost[node] = Some(best_cost[node].map_or(cost, |best: u32| best.min(cost)));
                }
            }
        }

        assert_eq!(combined_hops, best_hops, "seed {seed}");
        assert_eq!(combined_cost, best_cost, "seed {seed}");
    }
}

#[test]
fn restarting_matches_a_fresh_instance() {
    for seed in 0..CASES {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = Graph::random(&mut rng);
        let starts = random_starts(&mut rng, &graph);
        let goal = rng.gen_range(0..graph.len());

        let mut reused = Traversal::shortest_paths(|node: &usize, _| graph.edges(*node));
        reused.start_from(starts.clone()).unwrap().go_to(goal).unwrap();
        reused.start_from([0]).unwrap().steps().for_each(drop);
        reused.start_from(starts.clone()).unwrap().go_to(goal).unwrap();

        let mut fresh = Traversal::shortest_paths(|node: &usize, _| graph.edges(*node));
        fresh.start_from(starts.clone()).unwrap().go_to(goal).unwrap();

        assert_eq!(snapshot(reused.tree()), snapshot(fresh.tree()), "seed {seed}");
        assert_eq!(reused.path(), fresh.path(), "seed {seed}");
    }
}

#[test]
fn advancing_to_exhaustion_equals_unreachable_goal() {
    for seed in 0..CASES {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = Graph::random(&mut rng);
        let starts = random_starts(&mut rng, &graph);

        let mut stepped = Traversal::breadth_first(|node: &usize, _| graph.neighbors(*node));
        stepped.start_from(starts.clone()).unwrap().steps().for_each(drop);
        let mut ran = Traversal::breadth_first(|node: &usize, _| graph.neighbors(*node));
        ran.start_from(starts.clone()).unwrap().go_to(usize::MAX).unwrap();
        assert_eq!(snapshot(stepped.tree()), snapshot(ran.tree()), "seed {seed}");

        let mut stepped = Traversal::shortest_paths(|node: &usize, _| graph.edges(*node));
        stepped.start_from(starts.clone()).unwrap().steps().for_each(drop);
        let mut ran = Traversal::shortest_paths(|node: &usize, _| graph.edges(*node));
        ran.start_from(starts.clone()).unwrap().go_to(usize::MAX).unwrap();
        assert_eq!(snapshot(stepped.tree()), snapshot(ran.tree()), "seed {seed}");

        let heuristic = |node: &usize| (*node as u32) % 3;
        let mut stepped = Traversal::astar(|node: &usize, _| graph.edges(*node), heuristic);
        stepped.start_from(starts.clone()).unwrap().steps().for_each(drop);
        let mut ran = Traversal::astar(|node: &usize, _| graph.edges(*node), heuristic);
        ran.start_from(starts.clone()).unwrap().go_to(usize::MAX).unwrap();
        assert_eq!(snapshot(stepped.tree()), snapshot(ran.tree()), "seed {seed}");
    }
}
