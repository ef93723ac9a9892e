//! Double-buffered generation stepping.
//!
//! Every transition reads only from the source grid and writes only into
//! a separate destination buffer, so a cell's fate always depends on its
//! pre-step neighbourhood regardless of scan order.

use lifegrid_core::Grid;
use lifegrid_space::{moore::live_neighbours, BoundaryMode};

use crate::pingpong::PingPong;
use crate::rule::next_state;

/// Population changes produced by one generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepCounts {
    /// Dead cells that came alive.
    pub births: usize,
    /// Alive cells that died.
    pub deaths: usize,
    /// Alive cells after the step.
    pub alive: usize,
}

/// Compute the generation after `src` into `dst`.
///
/// `dst` must have the same shape as `src`; every cell of `dst` is
/// overwritten.
pub(crate) fn step_into(src: &Grid, dst: &mut Grid, mode: BoundaryMode) -> StepCounts {
    debug_assert!(src.same_shape(dst), "step buffers must share a shape");
    let (w, h) = src.dimensions();
    let before = src.cells();
    let mut counts = StepCounts::default();
    let out = dst.cells_mut();

    let mut i = 0usize;
    for y in 0..h {
        for x in 0..w {
            let was = before[i];
            let now = next_state(was, live_neighbours(src, x, y, mode));
            match (was, now) {
                (false, true) => counts.births += 1,
                (true, false) => counts.deaths += 1,
                _ => {}
            }
            if now {
                counts.alive += 1;
            }
            out[i] = now;
            i += 1;
        }
    }
    counts
}

/// Advance `grid` by one generation, returning a brand-new grid of the
/// same dimensions. `grid` is not modified.
///
/// # Examples
///
/// ```
/// use lifegrid_core::Grid;
/// use lifegrid_engine::step;
/// use lifegrid_space::BoundaryMode;
///
/// let mut grid = Grid::new(3, 3).unwrap();
/// grid.set(1, 1, true).unwrap();
/// let next = step(&grid, BoundaryMode::Finite);
/// assert_eq!(next.active_count(), 0); // lonely cell dies
/// assert_eq!(grid.active_count(), 1); // input untouched
/// ```
pub fn step(grid: &Grid, mode: BoundaryMode) -> Grid {
    let mut next = grid.clone();
    step_into(grid, &mut next, mode);
    next
}

/// Apply [`step`] `n` times in sequence and return the result.
///
/// Each generation strictly consumes the previous one's output. `n == 0`
/// returns a copy of `grid`. Internally the two buffers are reused via
/// [`PingPong`] rather than allocating per generation.
pub fn run_n(grid: &Grid, mode: BoundaryMode, n: u64) -> Grid {
    let mut buffers = PingPong::new(grid.clone());
    for _ in 0..n {
        buffers.step(mode);
    }
    buffers.into_current()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifegrid_test_utils::{alive_cells, grid_from_rows, patterns};
    use proptest::prelude::*;

    fn arb_mode() -> impl Strategy<Value = BoundaryMode> {
        prop_oneof![Just(BoundaryMode::Finite), Just(BoundaryMode::Toroidal)]
    }

    #[test]
    fn lone_cell_dies_in_both_modes() {
        let g = grid_from_rows(&["...", ".O.", "..."]);
        for mode in BoundaryMode::ALL {
            assert_eq!(step(&g, mode).active_count(), 0);
        }
    }

    #[test]
    fn block_is_still() {
        let g = patterns::block();
        for mode in BoundaryMode::ALL {
            assert_eq!(step(&g, mode), g);
            assert_eq!(run_n(&g, mode, 50), g);
        }
    }

    #[test]
    fn full_two_by_two_survives_only_with_finite_edges() {
        let g = grid_from_rows(&["OO", "OO"]);
        assert_eq!(step(&g, BoundaryMode::Finite), g);
        // On a 2x2 torus every offset lands on a live cell: 8 neighbours.
        assert_eq!(step(&g, BoundaryMode::Toroidal).active_count(), 0);
    }

    #[test]
    fn beehive_is_still() {
        let g = patterns::beehive();
        for mode in BoundaryMode::ALL {
            assert_eq!(run_n(&g, mode, 7), g);
        }
    }

    #[test]
    fn blinker_oscillates() {
        let h = patterns::blinker_horizontal();
        let v = patterns::blinker_vertical();
        for mode in BoundaryMode::ALL {
            assert_eq!(step(&h, mode), v);
            assert_eq!(step(&v, mode), h);
            assert_eq!(run_n(&h, mode, 10), h);
            assert_eq!(run_n(&h, mode, 11), v);
        }
    }

    #[test]
    fn glider_translates_after_four_generations() {
        let g = patterns::glider();
        let moved = run_n(&g, BoundaryMode::Finite, 4);
        let expected: Vec<(i32, i32)> = alive_cells(&g).iter().map(|&(x, y)| (x + 1, y + 1)).collect();
        assert_eq!(alive_cells(&moved), expected);
    }

    #[test]
    fn glider_wraps_around_torus() {
        // 8x8 torus: after 32 generations the glider has moved 8 cells on
        // each axis and is back where it started.
        let g = patterns::glider();
        assert_eq!(run_n(&g, BoundaryMode::Toroidal, 32), g);
        // Finite edges destroy it instead (it collapses into a block).
        assert_ne!(run_n(&g, BoundaryMode::Finite, 32), g);
    }

    #[test]
    fn blinker_straddling_the_seam_only_lives_on_a_torus() {
        // Horizontal blinker whose middle cell sits on column 0.
        let g = grid_from_rows(&["......", "......", "OO...O", "......", "......"]);
        let next = step(&g, BoundaryMode::Toroidal);
        assert_eq!(alive_cells(&next), vec![(0, 1), (0, 2), (0, 3)]);
        assert_eq!(step(&g, BoundaryMode::Finite).active_count(), 0);
    }

    #[test]
    fn run_zero_is_identity() {
        let g = patterns::glider();
        assert_eq!(run_n(&g, BoundaryMode::Toroidal, 0), g);
    }

    #[test]
    fn empty_grids_step_cleanly() {
        for (w, h) in [(0, 0), (0, 3), (4, 0)] {
            let g = Grid::new(w, h).unwrap();
            for mode in BoundaryMode::ALL {
                assert_eq!(step(&g, mode), g);
            }
        }
    }

    #[test]
    fn step_into_reports_population_changes() {
        let h = patterns::blinker_horizontal();
        let mut out = Grid::new(5, 5).unwrap();
        let counts = step_into(&h, &mut out, BoundaryMode::Finite);
        assert_eq!(counts, StepCounts { births: 2, deaths: 2, alive: 3 });
    }

    proptest! {
        #[test]
        fn dead_grid_stays_dead(w in 0i32..20, h in 0i32..20, mode in arb_mode()) {
            let g = Grid::new(w, h).unwrap();
            prop_assert_eq!(step(&g, mode).active_count(), 0);
        }

        #[test]
        fn step_preserves_dimensions(
            w in 0i32..12,
            h in 0i32..12,
            mode in arb_mode(),
            bits in proptest::collection::vec(any::<bool>(), 144),
        ) {
            let g = Grid::from_cells(w, h, bits[..(w * h) as usize].to_vec()).unwrap();
            let next = step(&g, mode);
            prop_assert_eq!(next.dimensions(), g.dimensions());
        }

        #[test]
        fn run_n_matches_repeated_step(
            w in 1i32..10,
            h in 1i32..10,
            n in 0u64..6,
            mode in arb_mode(),
            bits in proptest::collection::vec(any::<bool>(), 100),
        ) {
            let g = Grid::from_cells(w, h, bits[..(w * h) as usize].to_vec()).unwrap();
            let mut expected = g.clone();
            for _ in 0..n {
                expected = step(&expected, mode);
            }
            prop_assert_eq!(run_n(&g, mode, n), expected);
        }
    }
}
