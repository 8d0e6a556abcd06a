use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;
use tracing::trace;

use crate::cell::Cell;
use crate::color::Color;
use crate::color::color_for;
use crate::config::SimulationConfig;
use crate::grid::Grid;
use crate::inject::inject_random_cells;
use crate::pattern::Pattern;

/// What happened during a single [`World::step`]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    /// Generation reached by the step
    pub generation: u64,

    /// Cells born by the rule
    pub births: usize,

    /// Cells killed by the rule
    pub deaths: usize,

    /// Cells brought to life by random injection
    pub injected: usize,

    /// Live cells after the step
    pub population: usize,
}

/// The simulation: a grid of aging cells, advanced one generation at a time.
///
/// The next generation is always computed from an untouched copy of the current one. Two grids are
/// kept around and swapped on every step, so nothing is reallocated while running.
#[derive(Debug)]
pub struct World {
    /// The current generation
    grid: Grid,

    /// Scratch space for the next generation. Same dimensions as `grid`, contents meaningless
    /// between steps.
    next: Grid,

    config: SimulationConfig,

    rng: StdRng,

    /// Steps taken since the grid was last reset
    generation: u64,
}

impl World {
    /// Create a randomly seeded world
    pub fn new(config: SimulationConfig) -> Self {
        let mut world = Self::with_rng(config, StdRng::from_os_rng());
        world.randomize();

        world
    }

    /// Like [`World::new`], but every random choice is derived from `seed`
    pub fn with_seed(config: SimulationConfig, seed: u64) -> Self {
        let mut world = Self::empty(config, seed);
        world.randomize();

        world
    }

    /// Create a world where every cell is dead. Random choices are derived from `seed`.
    pub fn empty(config: SimulationConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: SimulationConfig, rng: StdRng) -> Self {
        let config = config.clamped();
        let grid = Grid::new(config.width, config.height);

        Self {
            next: grid.clone(),
            grid,
            config,
            rng,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance the world by exactly one generation, then inject random cells.
    pub fn step(&mut self) -> StepReport {
        let (births, deaths) = next_generation(&self.grid, &mut self.next);

        // commit
        std::mem::swap(&mut self.grid, &mut self.next);

        let injected = inject_random_cells(
            &mut self.grid,
            self.config.random_cells_per_step,
            &mut self.rng,
        );

        self.generation += 1;

        let report = StepReport {
            generation: self.generation,
            births,
            deaths,
            injected,
            population: self.grid.population(),
        };

        trace!(?report, "step");

        report
    }

    /// Reallocate the world with new dimensions. Every cell ends up dead.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.grid.resize(width, height);
        self.next.resize(width, height);

        self.config.width = self.grid.width();
        self.config.height = self.grid.height();
        self.generation = 0;

        debug!(
            width = self.config.width,
            height = self.config.height,
            "world resized"
        );
    }

    /// Flip a coin for every cell
    pub fn randomize(&mut self) {
        self.grid.randomize(&mut self.rng);
        self.generation = 0;
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    /// Apply new settings. A change of dimensions throws the current pattern away and reseeds the
    /// grid.
    pub fn reconfigure(&mut self, config: SimulationConfig) {
        let config = config.clamped();
        let resized = (config.width, config.height) != (self.grid.width(), self.grid.height());

        self.config = config;

        if resized {
            self.resize(self.config.width, self.config.height);
            self.randomize();
        }

        debug!(resized, config = ?self.config, "world reconfigured");
    }

    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) {
        self.grid.set(row, col, cell);
    }

    /// Place `pattern` with its top left corner at `(row, col)`. See [`Pattern::stamp`].
    pub fn stamp(&mut self, pattern: &Pattern, row: usize, col: usize) -> usize {
        pattern.stamp(&mut self.grid, row, col)
    }

    /// Place `pattern` in the middle of the grid. See [`Pattern::stamp_centered`].
    pub fn stamp_centered(&mut self, pattern: &Pattern) -> usize {
        pattern.stamp_centered(&mut self.grid)
    }

    /// Display color of the cell at `(row, col)`, or `None` for a dead cell
    pub fn color_at(&self, row: usize, col: usize) -> Option<Color> {
        let cell = self.grid.get(row, col);

        cell.is_alive()
            .then(|| color_for(cell, self.config.cell_start_color, self.config.cell_end_color))
    }
}

/// Conway's rule: a live cell survives with 2 or 3 live neighbors, a dead cell is born with
/// exactly 3.
pub const fn lives(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2 | 3) | (false, 3))
}

/// Write the successor of `current` into `next`, returning `(births, deaths)`.
///
/// Only `current` is read, so every cell sees the same generation of neighbors.
pub fn next_generation(current: &Grid, next: &mut Grid) -> (usize, usize) {
    assert_eq!(
        (current.width(), current.height()),
        (next.width(), next.height()),
        "buffers must have the same dimensions"
    );

    let w = current.width();
    let (mut births, mut deaths) = (0, 0);

    for (i, (&cell, out)) in current
        .cells()
        .iter()
        .zip(next.cells_mut().iter_mut())
        .enumerate()
    {
        let n = current.live_neighbors(i / w, i % w);

        *out = match (cell.is_alive(), lives(cell.is_alive(), n)) {
            // survives
            (true, true) => cell.aged(),

            // dies
            (true, false) => {
                deaths += 1;
                Cell::DEAD
            }

            // born
            (false, true) => {
                births += 1;
                Cell::born()
            }

            (false, false) => Cell::DEAD,
        };
    }

    (births, deaths)
}
