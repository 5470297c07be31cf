use std::time::Duration;

use traversal::TraversalError;

use crate::maze::{Maze, Position};

pub trait PathfindingAlgorithm {
    /// Plans a route from the nearest of `starts` to `target`.
    /// Returns `Ok(None)` when the target cannot be reached.
    fn find_path(
        &self,
        maze: &Maze,
        starts: &[Position],
        target: Position,
    ) -> eyre::Result<Option<Plan>>;

    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub path: Vec<Position>,
    pub cost: u32,
    pub visited: usize,
}

impl Plan {
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Turns a path query into a plan, mapping an unvisited target to `None`.
    pub(super) fn from_query(
        path: traversal::Result<Vec<Position>>,
        cost: impl FnOnce(&[Position]) -> traversal::Result<u32>,
        visited: usize,
    ) -> eyre::Result<Option<Self>> {
        let path = match path {
            Ok(path) => path,
            Err(TraversalError::NodeNotVisited) => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        Ok(Some(Self {
            cost: cost(&path)?,
            path,
            visited,
        }))
    }
}

#[derive(Debug)]
pub struct PathResult {
    pub path: Vec<Position>,
    pub steps: usize,
    pub cost: u32,
    pub visited: usize,
    pub planning_time: Duration,
}

impl PathResult {
    pub fn new(plan: Plan, planning_time: Duration) -> Self {
        Self {
            steps: plan.steps(),
            cost: plan.cost,
            visited: plan.visited,
            path: plan.path,
            planning_time,
        }
    }
}
