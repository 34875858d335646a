//! Flat cell storage and tile-space primitives shared by every generation stage.

use std::fmt;

use xxhash_rust::xxh3::xxh3_64;

use crate::types::{Cell, Pos};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// All-wall grid of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, cells: vec![Cell::Wall; width * height] }
    }

    /// Parses rows of `'#'` (wall) and anything else (open). Short rows are
    /// padded with walls up to the longest row.
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        let mut grid = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, glyph) in row.chars().enumerate() {
                grid.cells[y * width + x] = Cell::from_glyph(glyph);
            }
        }
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    pub fn is_border(&self, pos: Pos) -> bool {
        self.in_bounds(pos)
            && (pos.x == 0
                || pos.y == 0
                || pos.x as usize == self.width - 1
                || pos.y as usize == self.height - 1)
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }

    /// Out-of-bounds positions read as walls.
    pub fn cell(&self, pos: Pos) -> Cell {
        if !self.in_bounds(pos) {
            return Cell::Wall;
        }
        self.cells[self.index(pos)]
    }

    pub fn is_open(&self, pos: Pos) -> bool {
        self.cell(pos) == Cell::Open
    }

    pub fn set(&mut self, pos: Pos, cell: Cell) {
        if !self.in_bounds(pos) {
            return;
        }
        let index = self.index(pos);
        self.cells[index] = cell;
    }

    /// Every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<> {
        let width = self.width as i32;
        let height = self.height as i32;
        (0..height).flat_map(move |y| (0..width).map(move |x| Pos { y, x }))
    }

    /// Non-border positions in row-major order.
    pub fn interior_positions(&self) -> impl Iterator<Item = Pos> + use<> {
        let width = self.width as i32;
        let height = self.height as i32;
        (1..height - 1).flat_map(move |y| (1..width - 1).map(move |x| Pos { y, x }))
    }

    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == Cell::Open).count()
    }

    pub fn interior_open_count(&self) -> usize {
        self.interior_positions().filter(|&pos| self.is_open(pos)).count()
    }

    pub fn interior_area(&self) -> usize {
        self.width.saturating_sub(2) * self.height.saturating_sub(2)
    }

    pub fn seal_border(&mut self) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        for x in 0..self.width {
            self.cells[x] = Cell::Wall;
            self.cells[(self.height - 1) * self.width + x] = Cell::Wall;
        }
        for y in 0..self.height {
            self.cells[y * self.width] = Cell::Wall;
            self.cells[y * self.width + (self.width - 1)] = Cell::Wall;
        }
    }

    /// Wall cells in the 3x3 block centred on `pos`, the centre included.
    /// Out-of-bounds neighbours are not counted.
    pub fn wall_count_around(&self, pos: Pos) -> usize {
        let mut walls = 0;
        for dy in -1..=1 {
            for dx in -1..=1 {
                let neighbor = Pos { y: pos.y + dy, x: pos.x + dx };
                if self.in_bounds(neighbor) && self.cell(neighbor) == Cell::Wall {
                    walls += 1;
                }
            }
        }
        walls
    }

    /// Rendering contract: `'#'` for walls, `' '` for open cells.
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width.max(1))
            .map(|row| row.iter().map(|cell| cell.glyph()).collect())
            .collect()
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + self.cells.len());
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        for cell in &self.cells {
            bytes.push(match cell {
                Cell::Wall => 0,
                Cell::Open => 1,
            });
        }
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rows().join("\n"))
    }
}
