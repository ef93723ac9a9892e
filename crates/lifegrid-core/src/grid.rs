//! Dense boolean cell matrix.

use crate::error::GridError;

/// A dense two-dimensional matrix of boolean cells.
///
/// Cells are stored row-major (`y` outer, `x` inner) in a single buffer of
/// `width * height` entries, so every row has the same length by
/// construction. `true` is alive, `false` is dead.
///
/// Dimensions and coordinates are `i32`: negative dimensions are rejected
/// with [`GridError::InvalidDimension`] and negative coordinates with
/// [`GridError::OutOfBounds`]. A `0 x 0` grid is valid and every
/// coordinate on it is out of bounds.
///
/// # Examples
///
/// ```
/// use lifegrid_core::Grid;
///
/// let mut grid = Grid::new(4, 3).unwrap();
/// grid.set(1, 2, true).unwrap();
/// assert!(grid.get(1, 2).unwrap());
/// assert_eq!(grid.active_count(), 1);
/// assert!(grid.get(4, 0).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<bool>,
}

impl Grid {
    /// Largest permitted `width * height`.
    ///
    /// Each axis already fits `i32`; this caps the product so a large but
    /// non-negative size is reported instead of exhausting memory.
    pub const MAX_CELLS: usize = 1 << 28;

    /// Check that `width x height` is a constructible grid size.
    ///
    /// Returns [`GridError::InvalidDimension`] for a negative axis and
    /// [`GridError::TooLarge`] when the cell count exceeds
    /// [`MAX_CELLS`](Self::MAX_CELLS). Used by every constructor, and by
    /// callers that want to validate a size before allocating.
    pub fn check_dimensions(width: i32, height: i32) -> Result<usize, GridError> {
        if width < 0 {
            return Err(GridError::InvalidDimension {
                name: "width",
                value: width as i64,
            });
        }
        if height < 0 {
            return Err(GridError::InvalidDimension {
                name: "height",
                value: height as i64,
            });
        }
        match (width as usize).checked_mul(height as usize) {
            Some(count) if count <= Self::MAX_CELLS => Ok(count),
            _ => Err(GridError::TooLarge {
                width,
                height,
                max: Self::MAX_CELLS,
            }),
        }
    }

    /// Create an all-dead grid of `width * height` cells.
    ///
    /// Returns `Err(GridError::InvalidDimension)` if either dimension is
    /// negative and `Err(GridError::TooLarge)` past
    /// [`MAX_CELLS`](Self::MAX_CELLS). Zero is permitted on either axis.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        let count = Self::check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![false; count],
        })
    }

    /// Build a grid from a row-major cell buffer.
    ///
    /// Returns `Err(GridError::CellCountMismatch)` unless `cells.len()`
    /// equals `width * height`.
    pub fn from_cells(width: i32, height: i32, cells: Vec<bool>) -> Result<Self, GridError> {
        let expected = Self::check_dimensions(width, height)?;
        if cells.len() != expected {
            return Err(GridError::CellCountMismatch {
                expected,
                found: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Total number of cells, alive or dead.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// `true` when the grid has no cells (either dimension is zero).
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `other` has the same width and height.
    pub fn same_shape(&self, other: &Grid) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Flat index of `(x, y)`, or `None` if the coordinate is outside the grid.
    #[inline]
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    fn checked_index(&self, x: i32, y: i32) -> Result<usize, GridError> {
        self.index(x, y).ok_or(GridError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })
    }

    /// Read the cell at `(x, y)`.
    pub fn get(&self, x: i32, y: i32) -> Result<bool, GridError> {
        let i = self.checked_index(x, y)?;
        Ok(self.cells[i])
    }

    /// Write the cell at `(x, y)`.
    pub fn set(&mut self, x: i32, y: i32, alive: bool) -> Result<(), GridError> {
        let i = self.checked_index(x, y)?;
        self.cells[i] = alive;
        Ok(())
    }

    /// Flip the cell at `(x, y)` and return its new state.
    ///
    /// Out-of-range coordinates fail with [`GridError::OutOfBounds`]
    /// rather than being clamped onto the nearest cell.
    pub fn toggle(&mut self, x: i32, y: i32) -> Result<bool, GridError> {
        let i = self.checked_index(x, y)?;
        self.cells[i] = !self.cells[i];
        Ok(self.cells[i])
    }

    /// Number of alive cells, counted by a full scan.
    pub fn active_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Replace the contents with an all-dead grid of the new dimensions.
    ///
    /// Overlapping cells from the old contents are not preserved. On error
    /// the grid is left untouched.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), GridError> {
        *self = Self::new(width, height)?;
        Ok(())
    }

    /// Kill every cell, keeping the dimensions.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Row-major cell buffer.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Mutable row-major cell buffer.
    pub fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    /// Iterate rows top to bottom, `height` slices of `width` cells each.
    ///
    /// A `0 x h` grid yields `h` empty rows.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        let w = self.width as usize;
        (0..self.height as usize).map(move |y| &self.cells[y * w..(y + 1) * w])
    }
}
