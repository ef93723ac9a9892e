//! Error types for grid construction and cell access.

use thiserror::Error;

/// Errors arising from grid construction or cell access.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    /// A negative width or height was supplied to construction or resize.
    ///
    /// Zero is a valid dimension and yields an empty grid.
    #[error("invalid grid dimension {name}={value}: must be >= 0")]
    InvalidDimension {
        /// Which axis was rejected (`"width"` or `"height"`).
        name: &'static str,
        /// The offending value.
        value: i64,
    },
    /// `width * height` exceeds [`Grid::MAX_CELLS`](crate::Grid::MAX_CELLS).
    #[error("grid of {width}x{height} exceeds the maximum of {max} cells")]
    TooLarge {
        /// Requested width.
        width: i32,
        /// Requested height.
        height: i32,
        /// Largest permitted cell count.
        max: usize,
    },
    /// A coordinate is outside the grid.
    #[error("coordinate ({x}, {y}) out of bounds: [0, {width}) x [0, {height})")]
    OutOfBounds {
        /// The offending column.
        x: i32,
        /// The offending row.
        y: i32,
        /// Grid width at the time of access.
        width: i32,
        /// Grid height at the time of access.
        height: i32,
    },
    /// A raw cell buffer does not hold `width * height` entries.
    #[error("cell buffer holds {found} cells, expected {expected}")]
    CellCountMismatch {
        /// `width * height`.
        expected: usize,
        /// Length of the supplied buffer.
        found: usize,
    },
}
