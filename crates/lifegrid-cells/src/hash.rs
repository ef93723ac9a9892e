//! Grid fingerprinting.
//!
//! Uses FNV-1a for a fast, deterministic hash of a grid's shape and
//! cells. Not cryptographically secure; it exists so two runs (or a run
//! and a saved document) can be compared with a single integer.

use lifegrid_core::Grid;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_i32(mut hash: u64, v: i32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Hash the dimensions and every cell of `grid`, row-major.
///
/// Dimensions are folded in first, so a `2x3` and a `3x2` grid with the
/// same cell buffer hash differently.
pub fn grid_hash(grid: &Grid) -> u64 {
    let mut hash = FNV_OFFSET;
    hash = fnv1a_i32(hash, grid.width());
    hash = fnv1a_i32(hash, grid.height());
    for &alive in grid.cells() {
        hash = fnv1a_byte(hash, alive as u8);
    }
    hash
}
