use std::time::Duration;

use tracing::debug;

use crate::color::Color;
use crate::grid::MAX_HEIGHT;
use crate::grid::MAX_WIDTH;
use crate::grid::MIN_HEIGHT;
use crate::grid::MIN_WIDTH;

pub const MIN_GENS_PER_SEC: f32 = 0.1;
pub const MAX_GENS_PER_SEC: f32 = 60.0;

/// Everything the host lets the user tweak.
///
/// Only the dimensions, the injection budget and the two cell colors matter to the
/// engine. The rest rides along for whoever draws the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub width: usize,
    pub height: usize,

    /// How often the host should call [`World::step`](crate::world::World::step)
    pub gens_per_second: f32,

    /// Number of random cells forced alive after every step
    pub random_cells_per_step: usize,

    /// Color of a newborn cell
    pub cell_start_color: Color,

    /// Color of a cell that has been alive for [`MAX_CELL_AGE`](crate::cell::MAX_CELL_AGE)
    /// generations
    pub cell_end_color: Color,

    pub background_color: Color,
    pub grid_line_color: Color,
    pub draw_grid_lines: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 60,
            height: 45,
            gens_per_second: 10.0,
            random_cells_per_step: 2,
            cell_start_color: Color::rgb(40, 220, 90),
            cell_end_color: Color::rgb(30, 60, 200),
            background_color: Color::BLACK,
            grid_line_color: Color::rgb(60, 60, 60),
            draw_grid_lines: true,
        }
    }
}

impl SimulationConfig {
    /// Bring every setting back into its supported range. Nothing is ever rejected.
    pub fn clamped(self) -> Self {
        let res = Self {
            width: self.width.clamp(MIN_WIDTH, MAX_WIDTH),
            height: self.height.clamp(MIN_HEIGHT, MAX_HEIGHT),
            gens_per_second: clamp_gens_per_second(self.gens_per_second),
            ..self
        };

        if res != self {
            debug!(?res, "configuration clamped");
        }

        res
    }

    /// Time between two generations. The host timer fires at this interval.
    pub fn frame_interval(&self) -> Duration {
        let gps = clamp_gens_per_second(self.gens_per_second);

        Duration::from_secs_f64(1.0 / gps as f64)
    }
}

fn clamp_gens_per_second(gps: f32) -> f32 {
    if gps.is_finite() {
        gps.clamp(MIN_GENS_PER_SEC, MAX_GENS_PER_SEC)
    } else {
        SimulationConfig::default().gens_per_second
    }
}
