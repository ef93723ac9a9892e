//! `Write` adapter for the cell-format encoder.

use std::io::Write;

use lifegrid_core::Grid;

use crate::codec::{serialize, serialize_with_comment};
use crate::error::CellsError;

/// Write `grid` to `writer` with a timestamp comment, then flush.
pub fn write_cells<W: Write>(mut writer: W, grid: &Grid) -> Result<(), CellsError> {
    writer.write_all(serialize(grid).as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Write `grid` to `writer` with a caller-chosen comment, then flush.
pub fn write_cells_with_comment<W: Write>(
    mut writer: W,
    grid: &Grid,
    comment: &str,
) -> Result<(), CellsError> {
    writer.write_all(serialize_with_comment(grid, comment).as_bytes())?;
    writer.flush()?;
    Ok(())
}
