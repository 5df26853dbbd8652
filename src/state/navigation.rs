//! Wrap-around index arithmetic for stepping through the image list.

/// Direction for navigation through images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Returns the index one step from `index` in a list of `len` items,
/// wrapping at both ends. `len` must be non-zero and `index < len`.
pub fn step(index: usize, len: usize, direction: Direction) -> usize {
    debug_assert!(index < len);
    match direction {
        Direction::Next => (index + 1) % len,
        Direction::Previous => (index + len - 1) % len,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_to_first() {
        assert_eq!(step(0, 3, Direction::Next), 1);
        assert_eq!(step(2, 3, Direction::Next), 0);
    }

    #[test]
    fn previous_wraps_to_last() {
        assert_eq!(step(1, 3, Direction::Previous), 0);
        assert_eq!(step(0, 3, Direction::Previous), 2);
    }

    #[test]
    fn single_item_stays_put() {
        assert_eq!(step(0, 1, Direction::Next), 0);
        assert_eq!(step(0, 1, Direction::Previous), 0);
    }

    #[test]
    fn full_cycle_returns_to_start() {
        for len in 1..6 {
            for start in 0..len {
                for direction in [Direction::Next, Direction::Previous] {
                    let mut index = start;
                    for _ in 0..len {
                        index = step(index, len, direction);
                        assert!(index < len);
                    }
                    assert_eq!(index, start);
                }
            }
        }
    }
}
