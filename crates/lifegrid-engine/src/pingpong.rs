//! Double-buffered grid pair.
//!
//! [`PingPong`] holds two grids of identical shape. One is *current*
//! (readable); the other is scratch. [`PingPong::step`] writes the next
//! generation into the scratch grid and then swaps roles, so no
//! allocation happens per generation:
//!
//! ```text
//! front: Grid  ←─── current (read by the next step)
//! back:  Grid  ←─── scratch (overwritten by the next step)
//! ```

use std::mem;

use lifegrid_core::Grid;
use lifegrid_space::BoundaryMode;

use crate::step::{step_into, StepCounts};

/// Two same-shaped grids that alternate between current and scratch.
#[derive(Clone, Debug)]
pub struct PingPong {
    front: Grid,
    back: Grid,
}

impl PingPong {
    /// Wrap `grid` as the current buffer and allocate a matching scratch.
    pub fn new(grid: Grid) -> Self {
        let back = grid.clone();
        Self { front: grid, back }
    }

    /// The current generation.
    pub fn current(&self) -> &Grid {
        &self.front
    }

    /// Mutable access to the current generation (editing between steps).
    pub fn current_mut(&mut self) -> &mut Grid {
        &mut self.front
    }

    /// Compute the next generation into the scratch buffer, then swap.
    pub fn step(&mut self, mode: BoundaryMode) -> StepCounts {
        let counts = step_into(&self.front, &mut self.back, mode);
        mem::swap(&mut self.front, &mut self.back);
        counts
    }

    /// Replace the current grid, reshaping the scratch buffer to match.
    ///
    /// Returns the previous current grid.
    pub fn replace(&mut self, grid: Grid) -> Grid {
        if !self.back.same_shape(&grid) {
            self.back = grid.clone();
        }
        mem::replace(&mut self.front, grid)
    }

    /// Consume the pair, keeping only the current generation.
    pub fn into_current(self) -> Grid {
        self.front
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::step;
    use lifegrid_test_utils::{grid_from_rows, patterns};

    #[test]
    fn step_swaps_current() {
        let mut pp = PingPong::new(patterns::blinker_horizontal());
        pp.step(BoundaryMode::Finite);
        assert_eq!(pp.current(), &patterns::blinker_vertical());
        pp.step(BoundaryMode::Finite);
        assert_eq!(pp.current(), &patterns::blinker_horizontal());
    }

    #[test]
    fn matches_fresh_buffer_step() {
        let g = patterns::glider();
        let mut pp = PingPong::new(g.clone());
        let mut expected = g;
        for _ in 0..12 {
            pp.step(BoundaryMode::Toroidal);
            expected = step(&expected, BoundaryMode::Toroidal);
            assert_eq!(pp.current(), &expected);
        }
    }

    #[test]
    fn stale_scratch_never_leaks() {
        // The scratch buffer starts as a copy of a full grid; every cell
        // must still be overwritten by the step.
        let full = grid_from_rows(&["OOO", "OOO", "OOO"]);
        let mut pp = PingPong::new(full);
        pp.replace(Grid::new(3, 3).unwrap());
        pp.step(BoundaryMode::Finite);
        assert_eq!(pp.current().active_count(), 0);
    }

    #[test]
    fn replace_with_new_shape_reallocates_scratch() {
        let mut pp = PingPong::new(Grid::new(2, 2).unwrap());
        let old = pp.replace(patterns::blinker_horizontal());
        assert_eq!(old.dimensions(), (2, 2));
        let counts = pp.step(BoundaryMode::Finite);
        assert_eq!(counts.alive, 3);
        assert_eq!(pp.current().dimensions(), (5, 5));
    }

    #[test]
    fn current_mut_edits_are_stepped() {
        let mut pp = PingPong::new(Grid::new(5, 5).unwrap());
        for x in 1..4 {
            pp.current_mut().set(x, 2, true).unwrap();
        }
        pp.step(BoundaryMode::Finite);
        assert_eq!(pp.into_current(), patterns::blinker_vertical());
    }
}
