use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "solver")]
#[command(about = "Grid maze solver built on the traversal strategies")]
pub struct Args {
    /// Sets the logger's verbosity level
    #[arg(short, long, value_name = "VERBOSITY", default_value_t = LevelFilter::Info)]
    pub verbosity: LevelFilter,

    /// Maze file to load ('#' wall, '.' or 1-9 open, 'S' start, 'E' target)
    #[arg(short, long, value_name = "FILE")]
    pub maze: PathBuf,

    /// Disable colored maze rendering
    #[arg(long)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Plan a route to the target with a single algorithm
    Solve {
        /// Pathfinding algorithm to use
        #[arg(value_enum)]
        algorithm: PathfindingAlgorithm,
    },

    /// Flood-fill the maze breadth-first, one expansion at a time
    Explore {
        /// Stop after this many expansions
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Run every algorithm and compare them
    Benchmark,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PathfindingAlgorithm {
    /// Breadth-first search (fewest moves, ignores cell costs)
    #[value(name = "bfs")]
    #[allow(clippy::upper_case_acronyms)]
    BFS,

    /// Dijkstra's shortest path algorithm
    Dijkstra,

    /// A* algorithm with Manhattan distance heuristic
    #[value(name = "astar", alias = "a-star")]
    AStar,
}

impl PathfindingAlgorithm {
    pub fn all() -> impl Iterator<Item = Self> {
        [Self::BFS, Self::Dijkstra, Self::AStar].into_iter()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::BFS => "BFS",
            Self::Dijkstra => "Dijkstra",
            Self::AStar => "A*",
        }
    }
}
