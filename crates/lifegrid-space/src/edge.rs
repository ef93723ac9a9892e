//! Boundary topology selector.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How the grid handles neighbours at its edges.
///
/// The mode is chosen by the caller and passed into every neighbour count
/// and step; it is never stored inside a [`Grid`](lifegrid_core::Grid).
///
/// # Examples
///
/// ```
/// use lifegrid_core::Grid;
/// use lifegrid_space::{count_neighbours, BoundaryMode};
///
/// let mut grid = Grid::new(4, 4).unwrap();
/// grid.set(3, 3, true).unwrap();
///
/// // Finite: the far corner is not adjacent to the origin.
/// assert_eq!(count_neighbours(&grid, 0, 0, BoundaryMode::Finite).unwrap(), 0);
///
/// // Toroidal: both axes wrap, so (3, 3) is the origin's NW neighbour.
/// assert_eq!(count_neighbours(&grid, 0, 0, BoundaryMode::Toroidal).unwrap(), 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryMode {
    /// Off-grid neighbours are omitted (fewer neighbours at edges).
    #[default]
    Finite,
    /// Off-grid neighbours wrap to the opposite side on each axis (torus).
    Toroidal,
}

impl BoundaryMode {
    /// Both modes, in menu order.
    pub const ALL: [BoundaryMode; 2] = [BoundaryMode::Finite, BoundaryMode::Toroidal];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Finite => "finite",
            Self::Toroidal => "toroidal",
        }
    }
}

impl fmt::Display for BoundaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite => write!(f, "Finite"),
            Self::Toroidal => write!(f, "Toroidal"),
        }
    }
}

/// Returned when a string names neither boundary mode.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown boundary mode '{0}' (expected 'finite' or 'toroidal')")]
pub struct ParseBoundaryError(pub String);

impl FromStr for BoundaryMode {
    type Err = ParseBoundaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "finite" => Ok(Self::Finite),
            "toroidal" | "torus" => Ok(Self::Toroidal),
            _ => Err(ParseBoundaryError(s.to_string())),
        }
    }
}
