#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Wall,
    /// walkable cell with the cost of stepping onto it
    Open(u8),
    Start,
    Target,
}

impl Cell {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(Self::Wall),
            '.' => Some(Self::Open(1)),
            '1'..='9' => c.to_digit(10).map(|cost| Self::Open(cost as u8)),
            'S' => Some(Self::Start),
            'E' => Some(Self::Target),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Open(1) => '.',
            Self::Open(cost) => char::from(b'0' + cost),
            Self::Start => 'S',
            Self::Target => 'E',
        }
    }

    pub fn is_walkable(self) -> bool {
        !matches!(self, Self::Wall)
    }

    /// cost of entering this cell, start and target count as plain floor
    pub fn cost(self) -> u32 {
        match self {
            Self::Open(cost) => u32::from(cost),
            _ => 1,
        }
    }
}
