//! Compass directions for movement and neighbour enumeration

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// One of the eight compass offsets
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// The four orthogonal directions, in flood fill order
    pub const CARDINALS: [Direction; 4] = [
        Direction::West,
        Direction::East,
        Direction::North,
        Direction::South,
    ];

    /// Offset as (dx, dy); y grows southwards
    pub const fn delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }

    pub const fn dx(&self) -> i32 {
        self.delta().0
    }

    pub const fn dy(&self) -> i32 {
        self.delta().1
    }

    /// Apply this direction to a coordinate
    pub const fn offset(&self, x: i32, y: i32) -> (i32, i32) {
        let (dx, dy) = self.delta();
        (x + dx, y + dy)
    }

    pub const fn is_cardinal(&self) -> bool {
        matches!(
            self,
            Direction::North | Direction::East | Direction::South | Direction::West
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_all_offsets_distinct_and_nonzero() {
        let deltas: HashSet<_> = Direction::iter().map(|d| d.delta()).collect();
        assert_eq!(deltas.len(), 8);
        assert!(!deltas.contains(&(0, 0)));
        for (dx, dy) in deltas {
            assert!((-1..=1).contains(&dx) && (-1..=1).contains(&dy));
        }
    }

    #[test]
    fn test_cardinals() {
        assert!(Direction::CARDINALS.iter().all(|d| d.is_cardinal()));
        assert_eq!(Direction::iter().filter(|d| d.is_cardinal()).count(), 4);
    }

    #[test]
    fn test_offset() {
        assert_eq!(Direction::NorthWest.offset(5, 5), (4, 4));
        assert_eq!(Direction::South.offset(0, 0), (0, 1));
    }
}
