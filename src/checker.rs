use crate::checker_move::CheckerMove;
use crate::color::Color;
use crate::piece::Piece;
use crate::square::Square;

/// A handle to a checker owned by a `Board`.  Handles stay valid for the
/// whole game, including after the checker is captured; a handle from one
/// game is meaningless to another.
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug, Hash)]
pub struct CheckerId(u8);

impl CheckerId {
    #[inline]
    pub(crate) fn new(index: u8) -> CheckerId {
        CheckerId(index)
    }

    /// Convert this `CheckerId` to a `usize` for arena lookup purposes.
    #[inline]
    pub fn to_index(&self) -> usize {
        self.0 as usize
    }
}

/// A single checker.  The checker itself is the authority on whether it is
/// still in play: `square` is the cell it stands on, and becomes `None`
/// forever once it is captured.
///
/// The raw move list is recomputed by the board at the start of its side's
/// turn and is stale the rest of the time; the filtered, playable view is
/// `Game::available_moves`.
#[derive(Clone, Debug)]
pub struct Checker {
    color: Color,
    piece: Piece,
    square: Option<Square>,
    moves: Vec<CheckerMove>,
}

impl Checker {
    pub(crate) fn new(color: Color, piece: Piece, square: Square) -> Checker {
        Checker {
            color: color,
            piece: piece,
            square: Some(square),
            moves: vec![],
        }
    }

    /// The color this checker plays for.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Man or king?
    #[inline]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// Has this checker been promoted?
    #[inline]
    pub fn is_king(&self) -> bool {
        self.piece == Piece::King
    }

    /// The cell this checker stands on, or `None` once it has been
    /// captured.
    #[inline]
    pub fn square(&self) -> Option<Square> {
        self.square
    }

    pub(crate) fn raw_moves(&self) -> &[CheckerMove] {
        &self.moves
    }

    pub(crate) fn set_moves(&mut self, moves: Vec<CheckerMove>) {
        self.moves = moves;
    }

    pub(crate) fn relocate(&mut self, square: Square) {
        self.square = Some(square);
    }

    pub(crate) fn remove_from_board(&mut self) {
        self.square = None;
        self.moves.clear();
    }

    pub(crate) fn promote(&mut self) {
        self.piece = Piece::King;
    }
}
