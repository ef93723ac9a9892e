//! Plain-text cell format for lifegrid.
//!
//! Grids persist as `.cells` documents: a `!` comment line followed by one
//! line per row, `O` for alive and `.` for dead. Dimensions are never
//! written; on read they are inferred from the line count and the longest
//! row.
//!
//! # Format
//!
//! ```text
//! !2026-10-17 09:30:00
//! .O.
//! ..O
//! OOO
//! ```
//!
//! Writing is strict (every row exactly `width` characters). Reading is
//! lenient: rows shorter than the longest one are dead-padded, and any
//! character other than `O` reads as dead.
//!
//! - [`serialize`] / [`deserialize`] work on in-memory strings
//! - [`read_cells`] / [`write_cells`] adapt them to `Read` / `Write`
//! - [`import_into`] overlays a document onto an existing grid
//! - [`grid_hash`] fingerprints a grid for run comparison

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod hash;
pub mod reader;
pub mod writer;

pub use codec::{
    deserialize, deserialize_bytes, import_into, render_rows, scan_dimensions, serialize,
    serialize_with_comment,
};
pub use error::CellsError;
pub use hash::grid_hash;
pub use reader::read_cells;
pub use writer::{write_cells, write_cells_with_comment};

/// First character of a comment line.
pub const COMMENT_PREFIX: char = '!';

/// Character for an alive cell.
pub const ALIVE: char = 'O';

/// Character written for a dead cell. Any non-`O` character reads as dead.
pub const DEAD: char = '.';

/// Conventional file extension, without the dot.
pub const FILE_EXTENSION: &str = "cells";
