//! Moore (8-connected) neighbourhood counting.

use crate::axis::resolve_axis;
use crate::edge::BoundaryMode;
use lifegrid_core::{Grid, GridError};
use smallvec::SmallVec;

/// All 8 `(dx, dy)` offsets: W, E, N, S, NW, NE, SW, SE.
pub const OFFSETS_8: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// Count the live Moore neighbours of `(x, y)` under `mode`.
///
/// Returns a value in `0..=8`. Fails with [`GridError::OutOfBounds`] if
/// `(x, y)` itself is not a cell of `grid`.
pub fn count_neighbours(
    grid: &Grid,
    x: i32,
    y: i32,
    mode: BoundaryMode,
) -> Result<u8, GridError> {
    if grid.index(x, y).is_none() {
        return Err(GridError::OutOfBounds {
            x,
            y,
            width: grid.width(),
            height: grid.height(),
        });
    }
    Ok(live_neighbours(grid, x, y, mode))
}

/// Bounds-unchecked variant of [`count_neighbours`] used by the stepper.
///
/// Every neighbour coordinate is resolved per axis before indexing. An
/// off-grid origin, including one at the edge of the `i32` range, counts
/// whatever resolved neighbours exist.
#[inline]
pub fn live_neighbours(grid: &Grid, x: i32, y: i32, mode: BoundaryMode) -> u8 {
    let (w, h) = grid.dimensions();
    let cells = grid.cells();
    let mut count = 0u8;
    for (dx, dy) in OFFSETS_8 {
        let nx = x.checked_add(dx).and_then(|v| resolve_axis(v, w, mode));
        let ny = y.checked_add(dy).and_then(|v| resolve_axis(v, h, mode));
        if let (Some(nx), Some(ny)) = (nx, ny) {
            if cells[ny as usize * w as usize + nx as usize] {
                count += 1;
            }
        }
    }
    count
}

/// Resolved neighbour coordinates of `(x, y)` on a `width x height` grid.
///
/// Under [`BoundaryMode::Finite`] edge cells have fewer than 8 entries.
/// Under [`BoundaryMode::Toroidal`] a cell on a grid narrower than 3 may
/// list the same neighbour (or itself) more than once, matching how
/// [`count_neighbours`] weighs it.
pub fn neighbours(
    width: i32,
    height: i32,
    x: i32,
    y: i32,
    mode: BoundaryMode,
) -> SmallVec<[(i32, i32); 8]> {
    let mut out = SmallVec::new();
    for (dx, dy) in OFFSETS_8 {
        let nx = x.checked_add(dx).and_then(|v| resolve_axis(v, width, mode));
        let ny = y.checked_add(dy).and_then(|v| resolve_axis(v, height, mode));
        if let (Some(nx), Some(ny)) = (nx, ny) {
            out.push((nx, ny));
        }
    }
    out
}

/// Live-neighbour count of every cell, row-major.
///
/// Feeds the neighbour-count overlay a renderer draws on top of the grid.
pub fn neighbour_counts(grid: &Grid, mode: BoundaryMode) -> Vec<u8> {
    let (w, h) = grid.dimensions();
    let mut out = Vec::with_capacity(grid.cell_count());
    for y in 0..h {
        for x in 0..w {
            out.push(live_neighbours(grid, x, y, mode));
        }
    }
    out
}
