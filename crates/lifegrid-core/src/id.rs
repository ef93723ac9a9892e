//! Strongly-typed generation counter.

use std::fmt;

/// Monotonically increasing generation counter.
///
/// Owned by whoever drives the simulation. Incremented exactly once per
/// successful step and reset to zero whenever the grid is replaced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation after this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Generation {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_advances_by_one() {
        assert_eq!(Generation(0).next(), Generation(1));
        assert_eq!(Generation::default().next().next(), Generation(2));
    }
}
