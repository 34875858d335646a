use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    /// Column first, row second.
    pub fn new(x: i32, y: i32) -> Self {
        Self { y, x }
    }

    /// Orthogonal neighbours in N, E, S, W order.
    pub fn neighbors(self) -> [Pos; 4] {
        [
            Pos { y: self.y - 1, x: self.x },
            Pos { y: self.y, x: self.x + 1 },
            Pos { y: self.y + 1, x: self.x },
            Pos { y: self.y, x: self.x - 1 },
        ]
    }
}

pub fn manhattan(a: Pos, b: Pos) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Cell {
    Open,
    Wall,
}

impl Cell {
    pub const OPEN_GLYPH: char = ' ';
    pub const WALL_GLYPH: char = '#';

    pub fn glyph(self) -> char {
        match self {
            Cell::Open => Self::OPEN_GLYPH,
            Cell::Wall => Self::WALL_GLYPH,
        }
    }

    pub fn from_glyph(glyph: char) -> Self {
        if glyph == Self::WALL_GLYPH { Cell::Wall } else { Cell::Open }
    }
}
