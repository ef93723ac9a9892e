//! Text encode/decode for `.cells` documents.
//!
//! Decoding is two-pass: [`scan_dimensions`] walks every line once to
//! infer the grid size, then the rows are walked again to set cells.
//! Neither pass allocates per line.

use lifegrid_core::Grid;

use crate::error::CellsError;
use crate::{ALIVE, COMMENT_PREFIX, DEAD};

// ── Encoding ────────────────────────────────────────────────────

/// Serialize `grid` with a local-time timestamp comment.
///
/// Emits `!<timestamp>` then exactly `height` rows of exactly `width`
/// characters, each newline-terminated.
pub fn serialize(grid: &Grid) -> String {
    let stamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    serialize_with_comment(grid, &stamp)
}

/// Serialize `grid` with a caller-chosen comment line.
///
/// Line breaks inside `comment` are replaced with spaces so the comment
/// stays on the first line.
pub fn serialize_with_comment(grid: &Grid, comment: &str) -> String {
    let w = grid.width() as usize;
    let h = grid.height() as usize;
    let mut out = String::with_capacity(comment.len() + 2 + (w + 1) * h);

    out.push(COMMENT_PREFIX);
    for ch in comment.chars() {
        out.push(if ch == '\n' || ch == '\r' { ' ' } else { ch });
    }
    out.push('\n');

    for row in grid.rows() {
        for &alive in row {
            out.push(if alive { ALIVE } else { DEAD });
        }
        out.push('\n');
    }
    out
}

/// Render `grid` as bare rows (no comment line), for terminal display.
pub fn render_rows(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.cell_count() + grid.height() as usize);
    for row in grid.rows() {
        for &alive in row {
            out.push(if alive { ALIVE } else { DEAD });
        }
        out.push('\n');
    }
    out
}

// ── Decoding ────────────────────────────────────────────────────

fn is_comment(line: &str) -> bool {
    line.starts_with(COMMENT_PREFIX)
}

fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

/// Non-comment lines, in order.
fn content_rows(text: &str) -> impl Iterator<Item = &str> {
    strip_bom(text).lines().filter(|line| !is_comment(line))
}

/// First pass: infer `(width, height)` from a document.
///
/// Height is the number of non-comment lines; width is the longest of
/// them in characters. A document of only comments yields `(0, 0)`.
///
/// Fails with [`CellsError::MalformedDocument`] if `text` has no lines at
/// all, or if either dimension exceeds `i32::MAX`.
pub fn scan_dimensions(text: &str) -> Result<(i32, i32), CellsError> {
    let text = strip_bom(text);
    if text.lines().next().is_none() {
        return Err(CellsError::malformed("document is empty"));
    }

    let mut width = 0usize;
    let mut height = 0usize;
    for row in content_rows(text) {
        height += 1;
        width = width.max(row.chars().count());
    }

    let width = i32::try_from(width)
        .map_err(|_| CellsError::malformed(format!("row of {width} cells is too wide")))?;
    let height = i32::try_from(height)
        .map_err(|_| CellsError::malformed(format!("{height} rows is too tall")))?;
    Ok((width, height))
}

/// Second pass: write each row's cells into `grid`, row `y` at `y`.
///
/// Stops at each row's own length, so cells past the end of a short row
/// keep whatever `grid` already holds. Callers guarantee that every row
/// fits.
fn apply_rows(grid: &mut Grid, text: &str) {
    let w = grid.width() as usize;
    let cells = grid.cells_mut();
    for (y, row) in content_rows(text).enumerate() {
        let base = y * w;
        for (x, ch) in row.chars().enumerate() {
            cells[base + x] = ch == ALIVE;
        }
    }
}

/// Parse a document into a new grid sized from its contents.
///
/// Rows shorter than the widest row are dead-padded; this is not an
/// error.
///
/// # Examples
///
/// ```
/// let grid = lifegrid_cells::deserialize("!x\nO.O\n.O.\nOOO").unwrap();
/// assert_eq!(grid.dimensions(), (3, 3));
/// assert!(grid.get(0, 0).unwrap());
/// assert!(!grid.get(1, 0).unwrap());
/// assert_eq!(grid.active_count(), 6);
/// ```
pub fn deserialize(text: &str) -> Result<Grid, CellsError> {
    let (width, height) = scan_dimensions(text)?;
    let mut grid = Grid::new(width, height)?;
    apply_rows(&mut grid, text);

    if tracing::enabled!(tracing::Level::WARN) {
        let short = content_rows(text)
            .filter(|row| row.chars().count() < width as usize)
            .count();
        if short > 0 {
            tracing::warn!(width, height, short, "ragged document padded with dead cells");
        }
    }
    Ok(grid)
}

/// Parse a document from raw bytes.
///
/// Bytes that are not valid UTF-8 are reported as
/// [`CellsError::MalformedDocument`].
pub fn deserialize_bytes(bytes: &[u8]) -> Result<Grid, CellsError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| CellsError::malformed(format!("document is not valid UTF-8: {e}")))?;
    deserialize(text)
}

/// Overlay a document onto an existing grid without resizing it.
///
/// Row `y` of the document is written to row `y` of `grid`, up to that
/// row's own length; cells the document does not cover are left as they
/// were. Fails with [`CellsError::DoesNotFit`] before touching `grid` if
/// the document is wider or taller than the grid.
pub fn import_into(grid: &mut Grid, text: &str) -> Result<(), CellsError> {
    let (doc_width, doc_height) = scan_dimensions(text)?;
    if doc_width > grid.width() || doc_height > grid.height() {
        return Err(CellsError::DoesNotFit {
            doc_width,
            doc_height,
            grid_width: grid.width(),
            grid_height: grid.height(),
        });
    }
    apply_rows(grid, text);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifegrid_test_utils::{grid_from_rows, patterns};
    use proptest::prelude::*;

    // ── Encoding ────────────────────────────────────────────────

    #[test]
    fn serialize_writes_comment_then_rows() {
        let g = grid_from_rows(&["O..", ".OO"]);
        assert_eq!(serialize_with_comment(&g, "glider bits"), "!glider bits\nO..\n.OO\n");
    }

    #[test]
    fn serialize_timestamp_line_starts_with_bang() {
        let text = serialize(&grid_from_rows(&["O"]));
        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with('!'));
        assert_eq!(lines.next(), Some("O"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn serialize_keeps_comment_on_one_line() {
        let g = Grid::new(1, 1).unwrap();
        assert_eq!(serialize_with_comment(&g, "a\nb"), "!a b\n.\n");
    }

    #[test]
    fn serialize_empty_grid_is_comment_only() {
        let g = Grid::new(0, 0).unwrap();
        assert_eq!(serialize_with_comment(&g, "empty"), "!empty\n");
    }

    #[test]
    fn render_rows_has_no_comment() {
        assert_eq!(render_rows(&patterns::blinker_horizontal()), ".....\n.....\n.OOO.\n.....\n.....\n");
    }

    // ── Decoding ────────────────────────────────────────────────

    #[test]
    fn deserialize_three_by_three() {
        let g = deserialize("!x\nO.O\n.O.\nOOO").unwrap();
        assert_eq!(g.dimensions(), (3, 3));
        assert!(g.get(0, 0).unwrap());
        assert!(!g.get(1, 0).unwrap());
        assert!(g.get(2, 0).unwrap());
        assert!(!g.get(0, 1).unwrap());
        assert!(g.get(1, 1).unwrap());
        assert!(!g.get(2, 1).unwrap());
        for x in 0..3 {
            assert!(g.get(x, 2).unwrap());
        }
    }

    #[test]
    fn deserialize_short_row_is_dead_padded() {
        let g = deserialize("!x\nO\nOO").unwrap();
        assert_eq!(g.dimensions(), (2, 2));
        assert!(g.get(0, 0).unwrap());
        assert!(!g.get(1, 0).unwrap());
        assert!(g.get(0, 1).unwrap());
        assert!(g.get(1, 1).unwrap());
    }

    #[test]
    fn deserialize_only_comments_is_empty_grid() {
        let g = deserialize("!just a comment\n!another").unwrap();
        assert_eq!(g.dimensions(), (0, 0));
    }

    #[test]
    fn deserialize_empty_text_is_malformed() {
        assert!(matches!(
            deserialize(""),
            Err(CellsError::MalformedDocument { .. })
        ));
    }

    #[test]
    fn comments_anywhere_are_skipped() {
        let g = deserialize("!head\nO.\n!middle\n.O\n").unwrap();
        assert_eq!(g.dimensions(), (2, 2));
        assert!(g.get(0, 0).unwrap());
        assert!(g.get(1, 1).unwrap());
        assert_eq!(g.active_count(), 2);
    }

    #[test]
    fn any_non_o_character_is_dead() {
        let g = deserialize("!x\nOo0*O").unwrap();
        assert_eq!(g.cells(), &[true, false, false, false, true]);
    }

    #[test]
    fn blank_lines_are_dead_rows() {
        let g = deserialize("!x\nO\n\nO\n").unwrap();
        assert_eq!(g.dimensions(), (1, 3));
        assert!(!g.get(0, 1).unwrap());
    }

    #[test]
    fn crlf_and_bom_are_tolerated() {
        let g = deserialize("\u{feff}!x\r\nO.\r\n.O\r\n").unwrap();
        assert_eq!(g.dimensions(), (2, 2));
        assert!(g.get(1, 1).unwrap());
    }

    #[test]
    fn width_counts_characters_not_bytes() {
        let g = deserialize("!x\nOé.\nO").unwrap();
        assert_eq!(g.width(), 3);
        assert!(!g.get(1, 0).unwrap());
    }

    #[test]
    fn deserialize_bytes_rejects_invalid_utf8() {
        assert!(matches!(
            deserialize_bytes(&[b'!', 0xff, b'\n', b'O']),
            Err(CellsError::MalformedDocument { .. })
        ));
        let g = deserialize_bytes(b"!x\n.O\n").unwrap();
        assert!(g.get(1, 0).unwrap());
    }

    // ── Round trip ──────────────────────────────────────────────

    #[test]
    fn round_trip_zero_by_zero() {
        let g = Grid::new(0, 0).unwrap();
        assert_eq!(deserialize(&serialize(&g)).unwrap(), g);
    }

    #[test]
    fn round_trip_glider() {
        let g = patterns::glider();
        assert_eq!(deserialize(&serialize(&g)).unwrap(), g);
    }

    // ── Import ──────────────────────────────────────────────────

    #[test]
    fn import_overlays_without_resizing() {
        let mut g = Grid::new(4, 3).unwrap();
        g.set(3, 2, true).unwrap();
        g.set(1, 0, true).unwrap();
        import_into(&mut g, "!x\nO\n.O").unwrap();
        assert_eq!(g.dimensions(), (4, 3));
        assert!(g.get(0, 0).unwrap());
        // Past the end of the one-character first row: untouched.
        assert!(g.get(1, 0).unwrap());
        assert!(g.get(1, 1).unwrap());
        assert!(g.get(3, 2).unwrap());
        assert_eq!(g.active_count(), 4);
    }

    #[test]
    fn import_that_does_not_fit_leaves_grid_untouched() {
        let mut g = grid_from_rows(&["O.", ".."]);
        let before = g.clone();
        let err = import_into(&mut g, "!x\n...\n").unwrap_err();
        assert!(matches!(
            err,
            CellsError::DoesNotFit {
                doc_width: 3,
                doc_height: 1,
                grid_width: 2,
                grid_height: 2
            }
        ));
        assert_eq!(g, before);
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn round_trip_preserves_pattern(
            w in 0i32..16,
            h in 0i32..16,
            bits in proptest::collection::vec(any::<bool>(), 256),
        ) {
            let cells = bits[..(w * h) as usize].to_vec();
            let g = Grid::from_cells(w, h, cells).unwrap();
            let text = serialize_with_comment(&g, "prop");
            let back = deserialize(&text).unwrap();
            // With no rows there is nothing to infer a width from.
            let expected = if h == 0 { Grid::new(0, 0).unwrap() } else { g };
            prop_assert_eq!(back, expected);
        }

        #[test]
        fn every_written_row_has_width_characters(w in 0i32..20, h in 0i32..20) {
            let g = Grid::new(w, h).unwrap();
            let text = serialize_with_comment(&g, "");
            let rows: Vec<&str> = text.lines().skip(1).collect();
            prop_assert_eq!(rows.len(), h as usize);
            prop_assert!(rows.iter().all(|r| r.len() == w as usize));
        }
    }
}
