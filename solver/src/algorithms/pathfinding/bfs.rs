use traversal::Traversal;

use crate::maze::{Maze, Position};

use super::traits::{PathfindingAlgorithm, Plan};

/// Fewest moves, ignoring cell costs.
pub struct BreadthFirstSearch;

impl PathfindingAlgorithm for BreadthFirstSearch {
    fn find_path(
        &self,
        maze: &Maze,
        starts: &[Position],
        target: Position,
    ) -> eyre::Result<Option<Plan>> {
        let mut search = Traversal::breadth_first(|&position: &Position, _| {
            maze.neighbors(position)
                .into_iter()
                .map(|(neighbor, _)| neighbor)
                .collect::<Vec<_>>()
        });
        search.start_from(starts.iter().copied())?.go_to(target)?;

        Plan::from_query(
            search.path(),
            |path| Ok(maze.path_cost(path)),
            search.visited_count(),
        )
    }

    fn name(&self) -> &'static str {
        "BFS"
    }
}
