use std::collections::HashSet;

use colored::{ColoredString, Colorize};

use super::{cell::Cell, grid::Maze, position::Position};

/// Draws the maze with `path` highlighted and `visited` cells shaded.
pub fn render(maze: &Maze, path: &[Position], visited: &[Position]) -> String {
    let on_path: HashSet<Position> = path.iter().copied().collect();
    let seen: HashSet<Position> = visited.iter().copied().collect();

    let mut buffer = String::new();
    for row in 0..maze.height() {
        for col in 0..maze.width() {
            let pos = Position::new(row, col);
            let Some(cell) = maze.get(pos) else { continue };
            buffer += &paint(cell, on_path.contains(&pos), seen.contains(&pos)).to_string();
        }
        buffer.push('\n');
    }

    buffer
}

fn paint(cell: Cell, on_path: bool, seen: bool) -> ColoredString {
    let symbol = cell.as_char().to_string();
    match cell {
        Cell::Start => symbol.blue().bold(),
        Cell::Target => symbol.green().bold(),
        Cell::Wall => symbol.bright_black(),
        Cell::Open(_) if on_path => "•".bright_green(),
        Cell::Open(_) if seen => symbol.yellow(),
        Cell::Open(_) => symbol.white(),
    }
}
