//! Classic Life patterns, each padded with a dead border so they evolve
//! identically under both boundary modes for at least one generation.

use lifegrid_core::Grid;

use crate::grid_from_rows;

/// 2x2 block (still life) centred in a 4x4 grid.
pub fn block() -> Grid {
    grid_from_rows(&["....", ".OO.", ".OO.", "...."])
}

/// Beehive (still life) in a 6x5 grid.
pub fn beehive() -> Grid {
    grid_from_rows(&["......", "..OO..", ".O..O.", "..OO..", "......"])
}

/// Horizontal phase of the blinker (period-2 oscillator) in a 5x5 grid.
pub fn blinker_horizontal() -> Grid {
    grid_from_rows(&[".....", ".....", ".OOO.", ".....", "....."])
}

/// Vertical phase of the blinker in a 5x5 grid.
pub fn blinker_vertical() -> Grid {
    grid_from_rows(&[".....", "..O..", "..O..", "..O..", "....."])
}

/// South-east travelling glider in the top-left of an 8x8 grid.
pub fn glider() -> Grid {
    grid_from_rows(&[
        ".O......", "..O.....", "OOO.....", "........", "........", "........", "........",
        "........",
    ])
}
