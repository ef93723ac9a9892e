//! `Read` adapter for the cell-format decoder.

use std::io::Read;

use lifegrid_core::Grid;

use crate::codec::deserialize_bytes;
use crate::error::CellsError;

/// Read a whole document from `reader` and parse it.
///
/// Generic over `R: Read` so tests can use `&[u8]` and production code
/// can use `BufReader<File>`. A read failure means the transport yielded
/// nothing readable and is reported as [`CellsError::MalformedDocument`],
/// as is content that is not valid UTF-8.
pub fn read_cells<R: Read>(mut reader: R) -> Result<Grid, CellsError> {
    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .map_err(|e| CellsError::malformed(format!("could not read document: {e}")))?;
    deserialize_bytes(&buf)
}
