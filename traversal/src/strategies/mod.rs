mod astar;
mod breadth_first;
mod frontier;
mod shortest_paths;

pub use astar::AStar;
pub use breadth_first::BreadthFirst;
pub use shortest_paths::ShortestPaths;
