mod cell;
mod grid;
mod position;
mod render;

pub use grid::Maze;
pub use position::Position;
pub use render::render;
