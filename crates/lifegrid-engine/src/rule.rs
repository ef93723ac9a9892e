//! Conway's B3/S23 transition rule.

/// State of a cell in the next generation, given its current state and
/// its live-neighbour count.
///
/// | current | neighbours | next  |
/// |---------|------------|-------|
/// | alive   | 2 or 3     | alive |
/// | alive   | otherwise  | dead  |
/// | dead    | 3          | alive |
/// | dead    | otherwise  | dead  |
#[inline]
pub fn next_state(alive: bool, neighbours: u8) -> bool {
    matches!((alive, neighbours), (true, 2) | (true, 3) | (false, 3))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_rule_table() {
        for n in 0..=8u8 {
            assert_eq!(next_state(true, n), n == 2 || n == 3, "alive with {n}");
            assert_eq!(next_state(false, n), n == 3, "dead with {n}");
        }
    }
}
