use traversal::Traversal;

use crate::maze::{Maze, Position};

use super::traits::{PathfindingAlgorithm, Plan};

pub struct Dijkstra;

impl PathfindingAlgorithm for Dijkstra {
    fn find_path(
        &self,
        maze: &Maze,
        starts: &[Position],
        target: Position,
    ) -> eyre::Result<Option<Plan>> {
        let mut search =
            Traversal::shortest_paths(|&position: &Position, _| maze.weighted_neighbors(position));
        search.start_from(starts.iter().copied())?.go_to(target)?;

        Plan::from_query(
            search.path(),
            |_| search.distance(),
            search.visited_count(),
        )
    }

    fn name(&self) -> &'static str {
        "Dijkstra"
    }
}
