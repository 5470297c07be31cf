use traversal::Traversal;

use crate::maze::{Maze, Position};

use super::traits::{PathfindingAlgorithm, Plan};

/// Dijkstra guided by the Manhattan distance to the target. Every cell costs
/// at least 1 to enter, so the estimate never exceeds the real cost.
pub struct AStar;

impl PathfindingAlgorithm for AStar {
    fn find_path(
        &self,
        maze: &Maze,
        starts: &[Position],
        target: Position,
    ) -> eyre::Result<Option<Plan>> {
        let mut search = Traversal::astar(
            |&position: &Position, _| maze.weighted_neighbors(position),
            |&position: &Position| position.manhattan_distance(target) as u32,
        );
        search.start_from(starts.iter().copied())?.go_to(target)?;

        Plan::from_query(
            search.path(),
            |_| search.distance(),
            search.visited_count(),
        )
    }

    fn name(&self) -> &'static str {
        "A*"
    }
}
