mod astar;
mod bfs;
mod dijkstra;
pub mod traits;

pub use astar::AStar;
pub use bfs::BreadthFirstSearch;
pub use dijkstra::Dijkstra;
pub use traits::{PathResult, PathfindingAlgorithm};
