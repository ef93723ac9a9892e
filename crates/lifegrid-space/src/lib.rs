//! Boundary topologies for lifegrid.
//!
//! A [`BoundaryMode`] decides how the Moore neighbourhood of an edge cell
//! resolves coordinates that fall outside the grid:
//!
//! - [`BoundaryMode::Finite`]: off-grid neighbours are omitted
//! - [`BoundaryMode::Toroidal`]: each axis wraps around independently
//!
//! [`count_neighbours`] is the single entry point used by the stepper; it
//! is pure, reads only the grid, and never allocates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod axis;
pub mod edge;
pub mod moore;

pub use edge::{BoundaryMode, ParseBoundaryError};
pub use moore::{count_neighbours, neighbour_counts, neighbours, OFFSETS_8};
