mod algorithms;
mod cli;
mod logging;
mod maze;
mod solvers;

use clap::Parser;
use eyre::{Result, WrapErr};
use log::{debug, info};

use algorithms::pathfinding;
use cli::{Args, Command, PathfindingAlgorithm};
use logging::Logger;
use maze::Maze;
use solvers::{Explorer, Planner};

fn main() -> Result<()> {
    let args = Args::parse();
    Logger::init(args.verbosity);

    if args.no_color {
        colored::control::set_override(false);
    }

    info!("loading maze: {}", args.maze.display());
    let text = std::fs::read_to_string(&args.maze)
        .wrap_err_with(|| format!("failed to read {}", args.maze.display()))?;
    let maze = Maze::from_text(&text)?;
    debug!(
        "{}x{} maze with {} start(s)",
        maze.height(),
        maze.width(),
        maze.starts().len()
    );

    match args.command {
        Command::Solve { algorithm } => run_solver(&maze, algorithm)?,
        Command::Explore { limit } => run_explorer(&maze, limit)?,
        Command::Benchmark => run_benchmark(&maze),
    }

    Ok(())
}

fn solve(maze: &Maze, algorithm: PathfindingAlgorithm) -> Result<pathfinding::PathResult> {
    match algorithm {
        PathfindingAlgorithm::BFS => Planner::new(pathfinding::BreadthFirstSearch).solve(maze),
        PathfindingAlgorithm::Dijkstra => Planner::new(pathfinding::Dijkstra).solve(maze),
        PathfindingAlgorithm::AStar => Planner::new(pathfinding::AStar).solve(maze),
    }
}

fn run_solver(maze: &Maze, algorithm: PathfindingAlgorithm) -> Result<()> {
    info!("solving with {}", algorithm.name());

    let result = solve(maze, algorithm)?;
    print_result(&result, algorithm.name());
    println!("{}", maze::render(maze, &result.path, &[]));
    Ok(())
}

fn run_explorer(maze: &Maze, limit: Option<usize>) -> Result<()> {
    info!("exploring breadth-first");
    if let Some(limit) = limit {
        debug!("limit: {} expansions", limit);
    }

    let report = Explorer::new(limit).explore(maze)?;
    info!(
        "expanded {} of {} discovered cells ({:?})",
        report.expanded(),
        report.reachable,
        report.elapsed
    );
    info!(
        "farthest cell: ({}, {}) at depth {}",
        report.farthest.row, report.farthest.col, report.depth
    );
    match report.target_step {
        Some(step) => info!("target expanded at step {}", step + 1),
        None => info!("target not reached"),
    }

    println!("{}", maze::render(maze, &[], &report.order));
    Ok(())
}

fn run_benchmark(maze: &Maze) {
    info!("benchmarking pathfinding algorithms");

    let mut completed_results = Vec::new();

    for algorithm in PathfindingAlgorithm::all() {
        info!("testing {}", algorithm.name());

        match solve(maze, algorithm) {
            Ok(result) => {
                print_result(&result, algorithm.name());
                completed_results.push((algorithm.name(), result));
            }
            Err(e) => {
                log::error!("{} failed: {}", algorithm.name(), e);
            }
        }
    }

    print_benchmark_summary(&completed_results);
}

// ========== Utilities ==========

fn print_result(result: &pathfinding::PathResult, algorithm_name: &str) {
    info!(
        "{}: {} steps, cost {} ({:?})",
        algorithm_name, result.steps, result.cost, result.planning_time
    );
    debug!("visited: {} cells", result.visited);
}

fn print_benchmark_summary(results: &[(&str, pathfinding::PathResult)]) {
    info!("\nbenchmark results:");
    info!(
        "{:<12} {:>8}  {:>8}  {:>8}  {:>12}",
        "algorithm", "steps", "cost", "visited", "plan"
    );
    info!("{:-<56}", "");

    for (name, result) in results {
        info!(
            "{:<12} {:>8}  {:>8}  {:>8}  {:>12?}",
            name, result.steps, result.cost, result.visited, result.planning_time,
        );
    }

    if let Some((name, result)) = results.iter().min_by_key(|(_, r)| r.cost) {
        info!("\ncheapest: {} (cost {})", name, result.cost);
    }

    if let Some((name, result)) = results.iter().min_by_key(|(_, r)| r.visited) {
        info!("leanest: {} ({} cells visited)", name, result.visited);
    }

    if let Some((name, result)) = results.iter().min_by_key(|(_, r)| r.planning_time) {
        info!("fastest: {} ({:?})", name, result.planning_time);
    }
}
