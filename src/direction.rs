use crate::color::Color;

/// One of the four diagonal rays a checker can travel along.  North is
/// toward increasing rows, east toward increasing columns.
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

/// How many diagonal directions are there?
pub const NUM_DIRECTIONS: usize = 4;

/// Enumerate all diagonal directions
pub const ALL_DIRECTIONS: [Direction; NUM_DIRECTIONS] = [
    Direction::NorthEast,
    Direction::NorthWest,
    Direction::SouthEast,
    Direction::SouthWest,
];

impl Direction {
    /// The row delta of one step along this direction.
    #[inline]
    pub fn row_delta(&self) -> i8 {
        match *self {
            Direction::NorthEast | Direction::NorthWest => 1,
            Direction::SouthEast | Direction::SouthWest => -1,
        }
    }

    /// The column delta of one step along this direction.
    #[inline]
    pub fn column_delta(&self) -> i8 {
        match *self {
            Direction::NorthEast | Direction::SouthEast => 1,
            Direction::NorthWest | Direction::SouthWest => -1,
        }
    }

    /// Is this direction forward for the given color?  Men may only make
    /// quiet moves forward; captures go in all four directions.
    #[inline]
    pub fn is_forward(&self, color: Color) -> bool {
        self.row_delta() == color.forward()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_counts() {
        for &color in crate::color::ALL_COLORS.iter() {
            let forward = ALL_DIRECTIONS
                .iter()
                .filter(|d| d.is_forward(color))
                .count();
            assert_eq!(forward, 2);
        }
    }

    #[test]
    fn deltas_are_diagonal() {
        for &direction in ALL_DIRECTIONS.iter() {
            assert_eq!(direction.row_delta().abs(), 1);
            assert_eq!(direction.column_delta().abs(), 1);
        }
    }
}
