use crate::board::Board;
use crate::color::Color;
use crate::error::Error;
use crate::game::Game;
use crate::piece::Piece;
use crate::settings::GameSettings;

/// Lays out an arbitrary position instead of the standard initial rows.
///
/// This structure is useful in the following cases:
/// * You are mid-game in some external representation and want to continue
///   from there without replaying the move sequence.
/// * You are writing tests and need five checkers on a big board, not
///   forty.
///
/// ```
/// use checkers::{BoardBuilder, Color, GameSettings, Piece};
///
/// let game = BoardBuilder::with_settings(GameSettings::russian())
///     .piece(1, Color::White, Piece::King)
///     .piece(32, Color::Black, Piece::Man)
///     .side_to_move(Color::Black)
///     .build()
///     .unwrap();
/// assert_eq!(game.side_to_move(), Color::Black);
/// ```
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    settings: GameSettings,
    pieces: Vec<(usize, Color, Piece)>,
    side_to_move: Color,
}

impl BoardBuilder {
    /// Construct a new, empty, BoardBuilder for International draughts.
    ///
    /// * No checkers are on the board
    /// * `side_to_move` is the variant's first mover
    pub fn new() -> BoardBuilder {
        BoardBuilder::with_settings(GameSettings::default())
    }

    /// Construct a new, empty, BoardBuilder for the given rule set.
    pub fn with_settings(settings: GameSettings) -> BoardBuilder {
        BoardBuilder {
            settings: settings,
            pieces: vec![],
            side_to_move: settings.first_move(),
        }
    }

    /// Put a checker on the cell with the given 1-based number.
    ///
    /// The number is only checked against the board in `build()`, where a
    /// bad one fails the whole position.
    ///
    /// This function can be used on self directly or in a builder pattern.
    ///
    /// ```
    /// use checkers::{BoardBuilder, Color, Piece};
    ///
    /// let mut builder = BoardBuilder::new();
    /// builder.piece(1, Color::White, Piece::Man);
    /// builder.piece(50, Color::Black, Piece::King);
    /// ```
    pub fn piece(&mut self, number: usize, color: Color, piece: Piece) -> &mut Self {
        self.pieces.push((number, color, piece));
        self
    }

    /// Set the side to move on the position.
    ///
    /// This function can be used on self directly or in a builder pattern.
    pub fn side_to_move(&mut self, color: Color) -> &mut Self {
        self.side_to_move = color;
        self
    }

    /// Check the position and make a `Game` of it, with the legal moves of
    /// the side to move already computed.
    ///
    /// ```
    /// use checkers::{BoardBuilder, Color, Piece};
    ///
    /// // cell 51 does not exist on a 10x10 board
    /// let result = BoardBuilder::new()
    ///     .piece(51, Color::White, Piece::Man)
    ///     .build();
    /// assert!(result.is_err());
    /// ```
    pub fn build(&self) -> Result<Game, Error> {
        let mut board = Board::empty(&self.settings);
        for &(number, color, piece) in self.pieces.iter() {
            let square = match board.square(number) {
                Some(square) => square,
                None => return Err(Error::InvalidSquare { number: number }),
            };
            if board.checker_on(square).is_some() {
                return Err(Error::InvalidBoard);
            }
            board.place(square, color, piece);
        }
        board.recompute_moves(self.side_to_move);
        Ok(Game::from_parts(self.settings, board, self.side_to_move))
    }
}

impl Default for BoardBuilder {
    fn default() -> BoardBuilder {
        BoardBuilder::new()
    }
}
