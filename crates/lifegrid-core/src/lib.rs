//! Core types for the lifegrid Game of Life engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! dense boolean [`Grid`], the [`Generation`] counter type and the
//! [`GridError`] kinds shared by every other lifegrid crate.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod id;

pub use error::GridError;
pub use grid::Grid;
pub use id::Generation;
