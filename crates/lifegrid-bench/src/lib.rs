//! Benchmark profiles for the lifegrid engine.
//!
//! - [`reference_grid`]: 100x100 grid (10K cells) filled from a seed
//! - [`reference_config`]: matching [`LifeConfig`] for session benches

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use lifegrid_core::Grid;
use lifegrid_engine::{randomize, LifeConfig};
use lifegrid_space::BoundaryMode;

/// Side length of the reference grid.
pub const REFERENCE_SIDE: i32 = 100;

/// Build the reference benchmark grid: 100x100, roughly half alive.
///
/// The same `seed` always yields the same grid.
pub fn reference_grid(seed: u64) -> Grid {
    let mut grid = Grid::new(REFERENCE_SIDE, REFERENCE_SIDE).unwrap();
    randomize(&mut grid, seed, true);
    grid
}

/// Session config matching [`reference_grid`].
pub fn reference_config(boundary: BoundaryMode, seed: u64) -> LifeConfig {
    LifeConfig {
        width: REFERENCE_SIDE,
        height: REFERENCE_SIDE,
        boundary,
        seed,
        reproducible: true,
        ..Default::default()
    }
}
