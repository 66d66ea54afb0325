use std::fmt;

/// Represent one playable cell of a board by its dense index.  Cells are
/// numbered 1 up to half the board area in row-major zig-zag order, and a
/// `Square` is that number minus one.  A `Square` is only meaningful for
/// the board that produced it.
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Square(u8);

impl Square {
    /// Create a new square, given a 0-based index.  Note: it is invalid,
    /// but allowed, to pass in an index past the end of a board's cell
    /// array.  Asking that board about such a square will crash stuff.
    #[inline]
    pub fn new(index: u8) -> Square {
        Square(index)
    }

    /// Convert this `Square` to a `usize` for cell-array lookup purposes.
    #[inline]
    pub fn to_index(&self) -> usize {
        self.0 as usize
    }

    /// Convert this square to an integer.
    #[inline]
    pub fn to_int(&self) -> u8 {
        self.0
    }

    /// The 1-based cell number used by traditional checkers notation.
    ///
    /// ```
    /// use checkers::Square;
    ///
    /// assert_eq!(Square::new(0).number(), 1);
    /// ```
    #[inline]
    pub fn number(&self) -> usize {
        self.0 as usize + 1
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}
