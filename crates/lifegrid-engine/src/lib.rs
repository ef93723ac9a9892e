//! Generation stepping for lifegrid.
//!
//! - [`step`] / [`run_n`]: pure Conway transitions over a [`Grid`](lifegrid_core::Grid)
//! - [`PingPong`]: two preallocated buffers swapped each generation
//! - [`randomize`]: reproducible or entropy-seeded fills
//! - [`LockstepLife`]: a single-owner session bundling grid, boundary
//!   mode, generation counter and seed, driven one generation per call
//! - [`LifeConfig`]: the plain configuration a session is built from

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod lockstep;
pub mod metrics;
pub mod pingpong;
pub mod rule;
pub mod seed;
pub mod step;

pub use config::{ConfigError, LifeConfig};
pub use lockstep::{LockstepLife, StepResult, WorldStatus};
pub use metrics::StepMetrics;
pub use pingpong::PingPong;
pub use rule::next_state;
pub use seed::{randomize, randomize_with, seeded_rng};
pub use step::{run_n, step, StepCounts};
