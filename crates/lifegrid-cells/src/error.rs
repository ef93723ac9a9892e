//! Error types for the cell-format codec.

use lifegrid_core::GridError;
use std::io;
use thiserror::Error;

/// Errors that can occur while reading, writing or importing documents.
#[derive(Debug, Error)]
pub enum CellsError {
    /// The document has no lines, or its transport yielded nothing readable.
    #[error("malformed document: {detail}")]
    MalformedDocument {
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// A document is larger than the grid it is being imported into.
    #[error(
        "document of {doc_width}x{doc_height} does not fit a {grid_width}x{grid_height} grid"
    )]
    DoesNotFit {
        /// Inferred document width.
        doc_width: i32,
        /// Inferred document height.
        doc_height: i32,
        /// Target grid width.
        grid_width: i32,
        /// Target grid height.
        grid_height: i32,
    },
    /// Grid construction failed for the inferred dimensions.
    #[error(transparent)]
    Grid(#[from] GridError),
    /// Writing the document failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CellsError {
    pub(crate) fn malformed(detail: impl Into<String>) -> Self {
        Self::MalformedDocument {
            detail: detail.into(),
        }
    }
}
