//! Character grid and the circuit background builder.
//!
//! Coordinates are (x, y) with x running left to right over columns and y
//! top to bottom over rows. Storage is a flat row-major `Vec<char>`.

use crate::types::{
    BACKGROUND_CHAR, BORDER_BOTTOM_LEFT, BORDER_BOTTOM_RIGHT, BORDER_HORIZONTAL, BORDER_TOP_LEFT,
    BORDER_TOP_RIGHT, BORDER_VERTICAL, LANE_WIDTH,
};

/// 2D grid of characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Grid {
    pub fn new(width: usize, height: usize, fill: char) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    fn idx(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: usize, y: usize, ch: char) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = ch;
        }
    }

    pub fn row(&self, y: usize) -> Option<&[char]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        (0..self.height).filter_map(move |y| self.row(y))
    }

    pub fn row_string(&self, y: usize) -> Option<String> {
        self.row(y).map(|row| row.iter().collect())
    }

    /// Copy `chars` into row `y` starting at column `x`.
    ///
    /// Characters past the right edge are dropped. Returns how many were written.
    pub fn put_chars(&mut self, x: usize, y: usize, chars: &[char]) -> usize {
        let Some(start) = self.idx(x, y) else {
            return 0;
        };
        let n = chars.len().min(self.width - x);
        self.cells[start..start + n].copy_from_slice(&chars[..n]);
        n
    }

    /// Overwrite this grid with `src`, reusing the allocation.
    pub fn copy_from(&mut self, src: &Grid) {
        self.width = src.width;
        self.height = src.height;
        self.cells.clear();
        self.cells.extend_from_slice(&src.cells);
    }
}

/// Build the bordered background for a circuit.
///
/// The result has `lane_count * LANE_WIDTH + 2` rows and `length + 2`
/// columns, with `BACKGROUND_CHAR` everywhere inside the border.
pub fn build_track_grid(length: usize, lane_count: usize) -> Grid {
    let w = length + 2;
    let h = lane_count * LANE_WIDTH + 2;
    let mut grid = Grid::new(w, h, BACKGROUND_CHAR);

    grid.set(0, 0, BORDER_TOP_LEFT);
    grid.set(w - 1, 0, BORDER_TOP_RIGHT);
    grid.set(0, h - 1, BORDER_BOTTOM_LEFT);
    grid.set(w - 1, h - 1, BORDER_BOTTOM_RIGHT);

    for y in 1..h - 1 {
        grid.set(0, y, BORDER_VERTICAL);
        grid.set(w - 1, y, BORDER_VERTICAL);
    }
    for x in 1..w - 1 {
        grid.set(x, 0, BORDER_HORIZONTAL);
        grid.set(x, h - 1, BORDER_HORIZONTAL);
    }

    grid
}
