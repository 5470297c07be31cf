use std::time::Instant;

use crate::algorithms::pathfinding::{PathResult, PathfindingAlgorithm};
use crate::maze::Maze;

pub struct Planner<A: PathfindingAlgorithm> {
    algorithm: A,
}

impl<A: PathfindingAlgorithm> Planner<A> {
    pub fn new(algorithm: A) -> Self {
        Self { algorithm }
    }

    pub fn solve(&self, maze: &Maze) -> eyre::Result<PathResult> {
        let starts = maze.starts();
        let target = maze
            .target()
            .ok_or_else(|| eyre::eyre!("target not found in maze"))?;

        log::debug!(
            "{}x{} maze: {} start(s) → ({}, {})",
            maze.height(),
            maze.width(),
            starts.len(),
            target.row,
            target.col
        );

        let planning_start = Instant::now();
        let plan = self
            .algorithm
            .find_path(maze, &starts, target)?
            .ok_or_else(|| eyre::eyre!("no path found"))?;
        let planning_time = planning_start.elapsed();

        log::info!(
            "{} planned {} steps (cost {}) in {:?}",
            self.algorithm.name(),
            plan.steps(),
            plan.cost,
            planning_time
        );

        for (step, pair) in plan.path.windows(2).enumerate() {
            if let Some(direction) = pair[0].direction_to(pair[1]) {
                log::trace!("step {}/{}: {}", step + 1, plan.steps(), direction.as_str());
            }
        }

        Ok(PathResult::new(plan, planning_time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::pathfinding::{AStar, BreadthFirstSearch};

    #[test]
    fn solves_a_corridor() {
        let maze = Maze::from_text("S.3.E\n").unwrap();
        let result = Planner::new(AStar).solve(&maze).unwrap();

        assert_eq!(result.steps, 4);
        assert_eq!(result.cost, 6);
        assert_eq!(result.path.len(), 5);
    }

    #[test]
    fn blocked_target_is_an_error() {
        let maze = Maze::from_text("S#E\n").unwrap();
        let err = Planner::new(BreadthFirstSearch).solve(&maze).unwrap_err();
        assert_eq!(err.to_string(), "no path found");
    }
}
