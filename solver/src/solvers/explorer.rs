use std::time::{Duration, Instant};

use traversal::Traversal;

use crate::maze::{Maze, Position};

#[derive(Debug, Clone)]
pub struct ExplorationReport {
    pub order: Vec<Position>,
    pub farthest: Position,
    pub depth: usize,
    /// zero-based expansion index at which the target was reached
    pub target_step: Option<usize>,
    pub reachable: usize,
    pub elapsed: Duration,
}

impl ExplorationReport {
    pub fn expanded(&self) -> usize {
        self.order.len()
    }
}

/// Flood-fills the maze from every start, one expansion at a time.
pub struct Explorer {
    limit: Option<usize>,
}

impl Explorer {
    pub fn new(limit: Option<usize>) -> Self {
        Self { limit }
    }

    pub fn explore(&self, maze: &Maze) -> eyre::Result<ExplorationReport> {
        let starts = maze.starts();
        let target = maze.target();

        let mut search = Traversal::breadth_first(|&position: &Position, _| {
            maze.neighbors(position)
                .into_iter()
                .map(|(neighbor, _)| neighbor)
                .collect::<Vec<_>>()
        });
        search.start_from(starts.iter().copied())?;

        let started = Instant::now();
        let steps = search.steps();
        let order: Vec<Position> = match self.limit {
            Some(limit) => steps.take(limit).collect(),
            None => steps.collect(),
        };
        let elapsed = started.elapsed();

        if !search.is_finished() {
            log::warn!("stopped after {} expansions", order.len());
        }

        let target_step = target.and_then(|target| order.iter().position(|&p| p == target));
        if let Some(step) = target_step {
            log::debug!("target expanded at step {}", step + 1);
        }

        // breadth-first expands in non-decreasing depth, so the last one is farthest
        let farthest = order
            .last()
            .copied()
            .ok_or_else(|| eyre::eyre!("nothing was expanded"))?;
        let depth = search.depth_of(&farthest)?;

        Ok(ExplorationReport {
            reachable: search.visited_count(),
            order,
            farthest,
            depth,
            target_step,
            elapsed,
        })
    }
}
