//! Test utilities and pattern fixtures for lifegrid development.
//!
//! [`grid_from_rows`] builds a grid from a picture of it, and
//! [`patterns`] holds the classic still lifes, oscillators and
//! spaceships the engine tests lean on.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod patterns;

use lifegrid_core::Grid;

/// Build a grid from rows of text, `O` alive and anything else dead.
///
/// Width is the longest row; shorter rows are dead-padded.
///
/// ```
/// let g = lifegrid_test_utils::grid_from_rows(&[".O", "O"]);
/// assert_eq!(g.dimensions(), (2, 2));
/// assert_eq!(g.active_count(), 2);
/// ```
pub fn grid_from_rows(rows: &[&str]) -> Grid {
    let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
    let mut grid = Grid::new(width as i32, rows.len() as i32).expect("fixture fits in i32");
    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            grid.set(x as i32, y as i32, ch == 'O').expect("in bounds by construction");
        }
    }
    grid
}

/// Coordinates of every alive cell, row-major.
pub fn alive_cells(grid: &Grid) -> Vec<(i32, i32)> {
    let (w, h) = grid.dimensions();
    let mut out = Vec::new();
    for y in 0..h {
        for x in 0..w {
            if grid.get(x, y).expect("in bounds by construction") {
                out.push((x, y));
            }
        }
    }
    out
}

/// Place `pattern` onto a fresh `width x height` grid with its top-left
/// corner at `(ox, oy)`. Cells falling outside are dropped.
pub fn place(width: i32, height: i32, pattern: &Grid, ox: i32, oy: i32) -> Grid {
    let mut grid = Grid::new(width, height).expect("non-negative fixture size");
    for (x, y) in alive_cells(pattern) {
        let _ = grid.set(ox + x, oy + y, true);
    }
    grid
}
