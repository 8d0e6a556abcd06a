use rand::Rng;

use crate::cell::Cell;
use crate::grid::Grid;

/// Force up to `count` random cells alive, keeping the simulation from settling down.
///
/// Positions are drawn uniformly and independently, so the same cell may come up twice. Cells that
/// are already alive are left alone: they keep their age instead of restarting at 0. Returns how
/// many cells actually went from dead to alive, which is never more than `count`.
pub fn inject_random_cells<R: Rng + ?Sized>(grid: &mut Grid, count: usize, rng: &mut R) -> usize {
    if count == 0 {
        return 0;
    }

    let n = grid.len();
    let cells = grid.cells_mut();
    let mut born = 0;

    for _ in 0..count {
        let cell = &mut cells[rng.random_range(0..n)];

        if !cell.is_alive() {
            *cell = Cell::born();
            born += 1;
        }
    }

    born
}
