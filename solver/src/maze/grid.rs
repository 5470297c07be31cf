use super::{
    cell::Cell,
    position::{Direction, Position},
};

#[derive(Debug, Clone)]
pub struct Maze {
    grid: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Maze {
    /// Parses a text grid. Short rows are padded with walls.
    pub fn from_text(text: &str) -> eyre::Result<Self> {
        let mut rows: Vec<&str> = text.lines().map(str::trim_end).collect();
        // blank rows inside the grid are rows of walls, trailing ones are not rows
        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }

        if rows.is_empty() {
            eyre::bail!("maze is empty");
        }

        let height = rows.len();
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        let mut grid = vec![Cell::Wall; width * height];

        for (row, line) in rows.iter().enumerate() {
            for (col, c) in line.chars().enumerate() {
                grid[row * width + col] = Cell::from_char(c).ok_or_else(|| {
                    eyre::eyre!("invalid cell {:?} at row {}, column {}", c, row + 1, col + 1)
                })?;
            }
        }

        let maze = Self {
            grid,
            width,
            height,
        };

        if maze.starts().is_empty() {
            eyre::bail!("maze has no start cell ('S')");
        }

        match maze.cells_of(Cell::Target).len() {
            1 => Ok(maze),
            0 => eyre::bail!("maze has no target cell ('E')"),
            n => eyre::bail!("maze has {} target cells, expected exactly one", n),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn bounds(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn get(&self, pos: Position) -> Option<Cell> {
        if pos.row < self.height && pos.col < self.width {
            Some(self.grid[pos.row * self.width + pos.col])
        } else {
            None
        }
    }

    pub fn is_walkable(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(|cell| cell.is_walkable())
    }

    fn cells_of(&self, kind: Cell) -> Vec<Position> {
        self.grid
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == kind)
            .map(|(idx, _)| Position::new(idx / self.width, idx % self.width))
            .collect()
    }

    pub fn starts(&self) -> Vec<Position> {
        self.cells_of(Cell::Start)
    }

    pub fn target(&self) -> Option<Position> {
        self.cells_of(Cell::Target).first().copied()
    }

    pub fn neighbors(&self, pos: Position) -> Vec<(Position, Direction)> {
        pos.neighbors(self.bounds())
            .into_iter()
            .filter(|(p, _)| self.is_walkable(*p))
            .collect()
    }

    /// walkable neighbors paired with the cost of stepping onto them
    pub fn weighted_neighbors(&self, pos: Position) -> Vec<(Position, u32)> {
        self.neighbors(pos)
            .into_iter()
            .filter_map(|(p, _)| self.get(p).map(|cell| (p, cell.cost())))
            .collect()
    }

    /// total entry cost of a path, the first cell is free
    pub fn path_cost(&self, path: &[Position]) -> u32 {
        path.iter()
            .skip(1)
            .filter_map(|&p| self.get(p))
            .map(Cell::cost)
            .sum()
    }
}
