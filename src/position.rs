use crate::direction::Direction;
use std::fmt;

/// Represent a (row, column) coordinate pair on the checkered grid.  Both
/// are 1-indexed and run from 1 to the board size.  A `Position` does not
/// know how big its board is; the upper bound is checked by the `Board`
/// lookups, so it is valid, but useless, to construct one past the edge.
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    row: u8,
    column: u8,
}

impl Position {
    /// Make a position from a 1-indexed row and column.
    #[inline]
    pub fn new(row: u8, column: u8) -> Position {
        Position {
            row: row,
            column: column,
        }
    }

    /// Return the row of this position.
    #[inline]
    pub fn row(&self) -> u8 {
        self.row
    }

    /// Return the column of this position.
    #[inline]
    pub fn column(&self) -> u8 {
        self.column
    }

    /// Is this one of the dark squares of the checkered pattern?  Only
    /// dark squares are playable; row 1 holds them on columns 2, 4, ...
    ///
    /// ```
    /// use checkers::Position;
    ///
    /// assert!(Position::new(1, 2).is_dark());
    /// assert!(!Position::new(1, 1).is_dark());
    /// ```
    #[inline]
    pub fn is_dark(&self) -> bool {
        (self.row + self.column) % 2 == 1
    }

    /// Step `steps` cells along `direction`.  Returns `None` when that
    /// walks off the low edge of the grid; stepping past the far edge is
    /// caught by the board lookup instead.
    pub fn offset(&self, direction: Direction, steps: u8) -> Option<Position> {
        let row = self.row as i16 + direction.row_delta() as i16 * steps as i16;
        let column = self.column as i16 + direction.column_delta() as i16 * steps as i16;
        if row < 1 || column < 1 {
            None
        } else {
            Some(Position::new(row as u8, column as u8))
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
