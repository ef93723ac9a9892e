//! Lockstep (synchronous) Life session.
//!
//! [`LockstepLife`] bundles everything an interactive front end keeps
//! between frames: the current grid and its scratch buffer, the boundary
//! mode, the generation counter and the randomization seed. Each call to
//! [`step_sync()`](LockstepLife::step_sync) advances exactly one
//! generation and returns a [`StepResult`] that borrows the new grid.
//!
//! # Ownership model
//!
//! All mutating methods take `&mut self`, and the grid inside a
//! [`StepResult`] borrows from the session. The caller cannot step or
//! edit again while still holding a previous result.

use std::fmt;
use std::time::Instant;

use lifegrid_cells::CellsError;
use lifegrid_core::{Generation, Grid, GridError};
use lifegrid_space::{neighbour_counts, BoundaryMode};

use crate::config::{ConfigError, LifeConfig};
use crate::metrics::StepMetrics;
use crate::pingpong::PingPong;
use crate::seed::{randomize, randomize_with};

// ── StepResult ──────────────────────────────────────────────────

/// Result of a [`LockstepLife::step_sync()`] call.
#[derive(Debug)]
pub struct StepResult<'w> {
    /// The grid after this generation.
    pub grid: &'w Grid,
    /// Generation counter after this step.
    pub generation: Generation,
    /// Timing and population changes for this step.
    pub metrics: StepMetrics,
}

// ── WorldStatus ─────────────────────────────────────────────────

/// Point-in-time summary of a session, as shown in a heads-up display.
///
/// `Display` renders five lines:
///
/// ```text
/// Generations: 12
/// Cell Count: 41
/// Boundary Type: Toroidal
/// Universe Size: { Width: 30, Height: 30 }
/// Seed: 0
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorldStatus {
    /// Generations stepped since the last reset, resize or load.
    pub generation: Generation,
    /// Live cells in the current grid.
    pub alive: usize,
    /// Active boundary mode.
    pub boundary: BoundaryMode,
    /// Grid width.
    pub width: i32,
    /// Grid height.
    pub height: i32,
    /// Current randomization seed.
    pub seed: u64,
}

impl fmt::Display for WorldStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generations: {}", self.generation)?;
        writeln!(f, "Cell Count: {}", self.alive)?;
        writeln!(f, "Boundary Type: {}", self.boundary)?;
        writeln!(
            f,
            "Universe Size: {{ Width: {}, Height: {} }}",
            self.width, self.height
        )?;
        write!(f, "Seed: {}", self.seed)
    }
}

// ── LockstepLife ────────────────────────────────────────────────

/// Single-owner Life session driven one generation per call.
///
/// # Example
///
/// ```
/// use lifegrid_engine::{LifeConfig, LockstepLife};
///
/// let mut life = LockstepLife::new(LifeConfig::default()).unwrap();
/// life.randomize_from_current_seed();
/// for _ in 0..10 {
///     let result = life.step_sync();
///     assert_eq!(result.grid.dimensions(), (30, 30));
/// }
/// assert_eq!(life.generation().0, 10);
/// ```
pub struct LockstepLife {
    buffers: PingPong,
    boundary: BoundaryMode,
    generation: Generation,
    seed: u64,
    reproducible: bool,
    interval_ms: u64,
    last_metrics: StepMetrics,
}

impl LockstepLife {
    /// Create a session from a validated [`LifeConfig`].
    ///
    /// The grid starts all dead at generation 0.
    pub fn new(config: LifeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(config.width, config.height)?;
        Ok(Self {
            buffers: PingPong::new(grid),
            boundary: config.boundary,
            generation: Generation::default(),
            seed: config.seed,
            reproducible: config.reproducible,
            interval_ms: config.interval_ms,
            last_metrics: StepMetrics::default(),
        })
    }

    /// Advance one generation.
    ///
    /// The counter increments exactly once. The returned grid borrows
    /// from `self`.
    pub fn step_sync(&mut self) -> StepResult<'_> {
        let start = Instant::now();
        let counts = self.buffers.step(self.boundary);
        self.generation = self.generation.next();

        let metrics = StepMetrics {
            total_us: start.elapsed().as_micros() as u64,
            births: counts.births,
            deaths: counts.deaths,
            alive: counts.alive,
        };
        tracing::trace!(
            generation = self.generation.0,
            alive = metrics.alive,
            births = metrics.births,
            deaths = metrics.deaths,
            "stepped"
        );
        self.last_metrics = metrics.clone();

        StepResult {
            grid: self.buffers.current(),
            generation: self.generation,
            metrics,
        }
    }

    /// Advance `n` generations in sequence and return the final grid.
    pub fn run(&mut self, n: u64) -> &Grid {
        for _ in 0..n {
            self.step_sync();
        }
        self.buffers.current()
    }

    /// Kill every cell and return to generation 0.
    pub fn reset(&mut self) {
        self.buffers.current_mut().clear();
        self.generation = Generation::default();
        self.last_metrics = StepMetrics::default();
        tracing::debug!("session reset");
    }

    /// Replace the grid with an all-dead `width x height` one at
    /// generation 0.
    ///
    /// On error the session is unchanged.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), GridError> {
        let grid = Grid::new(width, height)?;
        self.buffers.replace(grid);
        self.generation = Generation::default();
        self.last_metrics = StepMetrics::default();
        tracing::debug!(width, height, "session resized");
        Ok(())
    }

    /// Store `seed` as the current seed and fill the grid from it.
    pub fn randomize_from_seed(&mut self, seed: u64) {
        self.seed = seed;
        self.randomize_from_current_seed();
    }

    /// Fill the grid from the current seed. Always reproducible.
    pub fn randomize_from_current_seed(&mut self) {
        randomize(self.buffers.current_mut(), self.seed, true);
        tracing::debug!(
            seed = self.seed,
            alive = self.buffers.current().active_count(),
            "grid randomized"
        );
    }

    /// Initial fill as configured: from the current seed when
    /// `reproducible` is set, otherwise from OS entropy.
    pub fn randomize_as_configured(&mut self) {
        if self.reproducible {
            self.randomize_from_current_seed();
        } else {
            self.randomize_from_entropy();
        }
    }

    /// Fill the grid from OS entropy, leaving the stored seed alone.
    pub fn randomize_from_entropy(&mut self) {
        randomize(self.buffers.current_mut(), self.seed, false);
        tracing::debug!(
            alive = self.buffers.current().active_count(),
            "grid randomized from entropy"
        );
    }

    /// Fill the grid from a caller-supplied generator.
    pub fn randomize_with<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        randomize_with(self.buffers.current_mut(), rng);
    }

    /// Flip one cell, returning its new state.
    pub fn toggle(&mut self, x: i32, y: i32) -> Result<bool, GridError> {
        self.buffers.current_mut().toggle(x, y)
    }

    /// Replace the grid wholesale (e.g. with a freshly opened document)
    /// and return to generation 0.
    pub fn load(&mut self, grid: Grid) {
        tracing::debug!(
            width = grid.width(),
            height = grid.height(),
            alive = grid.active_count(),
            "grid loaded"
        );
        self.buffers.replace(grid);
        self.generation = Generation::default();
        self.last_metrics = StepMetrics::default();
    }

    /// Overlay a `.cells` document onto the current grid without resizing.
    ///
    /// The generation counter is kept. Fails without touching the grid
    /// if the document is malformed or larger than the grid.
    pub fn import(&mut self, text: &str) -> Result<(), CellsError> {
        lifegrid_cells::import_into(self.buffers.current_mut(), text)?;
        tracing::debug!(
            alive = self.buffers.current().active_count(),
            "document imported"
        );
        Ok(())
    }

    /// Switch the boundary mode used by subsequent steps.
    pub fn set_boundary(&mut self, mode: BoundaryMode) {
        self.boundary = mode;
    }

    /// Live-neighbour count of every cell under the current boundary mode,
    /// row-major.
    pub fn neighbour_counts(&self) -> Vec<u8> {
        neighbour_counts(self.buffers.current(), self.boundary)
    }

    /// HUD summary of the current state.
    pub fn status(&self) -> WorldStatus {
        let grid = self.buffers.current();
        WorldStatus {
            generation: self.generation,
            alive: grid.active_count(),
            boundary: self.boundary,
            width: grid.width(),
            height: grid.height(),
            seed: self.seed,
        }
    }

    /// The current grid.
    pub fn grid(&self) -> &Grid {
        self.buffers.current()
    }

    /// Generations stepped since the last reset, resize or load.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Active boundary mode.
    pub fn boundary(&self) -> BoundaryMode {
        self.boundary
    }

    /// The current randomization seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Configured animation cadence, in milliseconds.
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Metrics from the most recent step.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }
}

impl fmt::Debug for LockstepLife {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.buffers.current();
        f.debug_struct("LockstepLife")
            .field("generation", &self.generation)
            .field("width", &grid.width())
            .field("height", &grid.height())
            .field("boundary", &self.boundary)
            .field("seed", &self.seed)
            .finish()
    }
}
