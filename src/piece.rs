/// Represent a checkers piece as a very simple enum.  A `Man` becomes a
/// `King` when it lands on the far rank; the change is never undone.
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum Piece {
    Man,
    King,
}

/// How many piece types are there?
pub const NUM_PIECES: usize = 2;

/// An array representing each piece type.
pub const ALL_PIECES: [Piece; NUM_PIECES] = [Piece::Man, Piece::King];

impl Piece {
    /// Convert the `Piece` to a `usize` for table lookups.
    #[inline]
    pub fn to_index(&self) -> usize {
        *self as usize
    }
}
