//! Single-axis coordinate resolution.

use crate::edge::BoundaryMode;

/// Resolve one axis value under the given boundary mode.
///
/// Returns `Some(resolved)` for in-range values and for wrapped values
/// under [`BoundaryMode::Toroidal`], or `None` for off-grid values under
/// [`BoundaryMode::Finite`]. `len` must be the length of *this* axis;
/// callers resolve x against the width and y against the height.
#[inline]
pub fn resolve_axis(val: i32, len: i32, mode: BoundaryMode) -> Option<i32> {
    if val >= 0 && val < len {
        return Some(val);
    }
    match mode {
        BoundaryMode::Finite => None,
        BoundaryMode::Toroidal if len > 0 => Some(val.rem_euclid(len)),
        BoundaryMode::Toroidal => None,
    }
}
