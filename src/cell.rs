/// Oldest age a cell can reach. Ages run from `0` to `6`, so there are 7 age levels.
pub const MAX_CELL_AGE: u8 = 6;

/// A single cell of the [`Grid`](crate::grid::Grid).
///
/// The age counts how many consecutive generations the cell has stayed alive, capped at
/// [`MAX_CELL_AGE`]. A dead cell always has age `0`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    alive: bool,
    age: u8,
}

impl Cell {
    /// The canonical dead cell
    pub const DEAD: Cell = Cell {
        alive: false,
        age: 0,
    };

    /// Create a cell. The age is clamped to [`MAX_CELL_AGE`] and dropped entirely for dead cells.
    pub const fn new(alive: bool, age: u8) -> Self {
        let age = if !alive {
            0
        } else if age > MAX_CELL_AGE {
            MAX_CELL_AGE
        } else {
            age
        };

        Self { alive, age }
    }

    /// A freshly born cell
    pub const fn born() -> Self {
        Self { alive: true, age: 0 }
    }

    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    pub const fn age(&self) -> u8 {
        self.age
    }

    /// This cell, one generation older. Dead cells stay at age `0`.
    pub const fn aged(self) -> Self {
        if !self.alive || self.age >= MAX_CELL_AGE {
            return self;
        }

        Self {
            alive: true,
            age: self.age + 1,
        }
    }
}
