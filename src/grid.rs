use std::fmt;

use rand::Rng;
use tracing::debug;

use crate::cell::Cell;

pub const MIN_WIDTH: usize = 20;
pub const MAX_WIDTH: usize = 300;
pub const MIN_HEIGHT: usize = 15;
pub const MAX_HEIGHT: usize = 225;

/// Offsets of the Moore neighborhood, as `(drow, dcol)`
const NBHD: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A bounded rectangle of [`Cell`]s.
///
/// Cells are stored contiguously in row-major order, so `(row, col)` lives at `row * width + col`.
/// There is no wraparound: anything past an edge simply does not exist.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    /// Number of columns
    w: usize,

    /// Number of rows
    h: usize,

    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid of dead cells. Dimensions outside the supported range are clamped.
    pub fn new(width: usize, height: usize) -> Self {
        let (w, h) = Self::clamp_dims(width, height);

        Self {
            w,
            h,
            cells: vec![Cell::DEAD; w * h],
        }
    }

    fn clamp_dims(width: usize, height: usize) -> (usize, usize) {
        let w = width.clamp(MIN_WIDTH, MAX_WIDTH);
        let h = height.clamp(MIN_HEIGHT, MAX_HEIGHT);

        if (w, h) != (width, height) {
            debug!(width, height, w, h, "grid dimensions clamped");
        }

        (w, h)
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    /// Total number of cells, always `width * height`
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false, since a grid is never smaller than the minimum dimensions
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Reallocate the grid with new dimensions. Every cell ends up dead, nothing from the previous
    /// pattern survives.
    pub fn resize(&mut self, width: usize, height: usize) {
        let (w, h) = Self::clamp_dims(width, height);

        self.w = w;
        self.h = h;
        self.cells = vec![Cell::DEAD; w * h];
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.fill(Cell::DEAD);
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let i = self.index(row, col);

        self.cells[i] = cell;
    }

    /// Flip a coin for every cell. Survivors of the flip are newborn.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in self.cells.iter_mut() {
            *cell = if rng.random_bool(0.5) {
                Cell::born()
            } else {
                Cell::DEAD
            };
        }
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Count the live cells among the (up to) 8 cells surrounding `(row, col)`.
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        assert!(row < self.h, "row is out of bounds");
        assert!(col < self.w, "col is out of bounds");

        let mut n = 0;

        for (dr, dc) in NBHD {
            let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
            else {
                continue;
            };

            if r < self.h && c < self.w && self.cells[r * self.w + c].is_alive() {
                n += 1;
            }
        }

        n
    }

    /// Row-major view of every cell
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Iterate over `(row, col, cell)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let w = self.w;

        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (i / w, i % w, cell))
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(row < self.h, "row is out of bounds");
        assert!(col < self.w, "col is out of bounds");

        row * self.w + col
    }
}

/// One line per row, `O` for live cells and `.` for dead ones
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.w).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }

            for cell in row {
                let c = if cell.is_alive() { 'O' } else { '.' };
                write!(f, "{c}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.w, self.h)?;
        write!(f, "{self}")
    }
}
