//! lifegrid: Conway's Game of Life on a bounded grid.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! lifegrid sub-crates. For most users, adding `lifegrid` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use lifegrid::prelude::*;
//!
//! // A blinker on a 5x5 grid flips between horizontal and vertical.
//! let mut grid = Grid::new(5, 5).unwrap();
//! for x in 1..4 {
//!     grid.set(x, 2, true).unwrap();
//! }
//! let next = step(&grid, BoundaryMode::Finite);
//! assert!(next.get(2, 1).unwrap() && next.get(2, 3).unwrap());
//! assert_eq!(run_n(&grid, BoundaryMode::Finite, 2), grid);
//!
//! // Save and load through the `.cells` format.
//! let text = serialize(&next);
//! assert_eq!(deserialize(&text).unwrap(), next);
//!
//! // Or drive a session one generation at a time.
//! let mut life = LockstepLife::new(LifeConfig::default()).unwrap();
//! life.load(grid);
//! let result = life.step_sync();
//! assert_eq!(result.generation, Generation(1));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`core`] | `lifegrid-core` | `Grid`, `GridError`, `Generation` |
//! | [`space`] | `lifegrid-space` | `BoundaryMode`, neighbour counting |
//! | [`engine`] | `lifegrid-engine` | Stepping, randomization, sessions, config |
//! | [`cells`] | `lifegrid-cells` | `.cells` codec, reader/writer, grid hash |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid storage and core types (`lifegrid-core`).
pub use lifegrid_core as core;

/// Boundary modes and Moore-neighbourhood counting (`lifegrid-space`).
pub use lifegrid_space as space;

/// Generation stepping, randomization and sessions (`lifegrid-engine`).
///
/// [`engine::LockstepLife`] bundles grid, boundary mode, generation counter
/// and seed for front ends that step one generation per frame.
pub use lifegrid_engine as engine;

/// Plain-text `.cells` documents (`lifegrid-cells`).
pub use lifegrid_cells as cells;

/// Common imports for typical lifegrid usage.
///
/// ```rust
/// use lifegrid::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use lifegrid_core::{Generation, Grid, GridError};

    // Space
    pub use lifegrid_space::{count_neighbours, BoundaryMode};

    // Engine
    pub use lifegrid_engine::{
        randomize, run_n, step, LifeConfig, LockstepLife, StepMetrics, StepResult, WorldStatus,
    };

    // Codec
    pub use lifegrid_cells::{deserialize, read_cells, serialize, write_cells, CellsError};
}
