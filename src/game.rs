use crate::board::Board;
use crate::checker::CheckerId;
use crate::checker_move::CheckerMove;
use crate::color::Color;
use crate::error::Error;
use crate::settings::GameSettings;
use crate::square::Square;
use std::str::FromStr;

/// A game of checkers: one board, the rule set it is played under, and
/// whose move it is.
///
/// The game is the only place moves get played.  It exposes each checker's
/// moves through [`Game::available_moves`], which filters the raw lists by
/// the variant's capture policy, and accepts moves through
/// [`Game::try_move`], which either applies a move atomically and passes
/// the turn, or rejects it and changes nothing.
///
/// The game never declares a result.  A side with no available move on any
/// of its checkers has lost (or is stalled, depending on the variant), and
/// the host is the one to notice that and say so.
#[derive(Clone, Debug)]
pub struct Game {
    settings: GameSettings,
    board: Board,
    side_to_move: Color,
}

impl Game {
    /// Create a new `Game` of International draughts in the initial
    /// position.
    ///
    /// ```
    /// use checkers::{Color, Game};
    ///
    /// let game = Game::new();
    /// assert_eq!(game.board().num_squares(), 50);
    /// assert_eq!(game.side_to_move(), Color::White);
    /// ```
    pub fn new() -> Game {
        Game::with_settings(GameSettings::default())
    }

    /// Create a new `Game` under the given rule set, in that variant's
    /// initial position.
    ///
    /// ```
    /// use checkers::{Game, GameSettings};
    ///
    /// let game = Game::with_settings(GameSettings::canadian());
    /// assert_eq!(game.board().size(), 12);
    /// ```
    pub fn with_settings(settings: GameSettings) -> Game {
        Game {
            settings: settings,
            board: Board::new(&settings),
            side_to_move: settings.first_move(),
        }
    }

    pub(crate) fn from_parts(settings: GameSettings, board: Board, side_to_move: Color) -> Game {
        Game {
            settings: settings,
            board: board,
            side_to_move: side_to_move,
        }
    }

    /// The rule set this game is played under.
    #[inline]
    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    /// The current board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Who's turn is it to move?
    ///
    /// ```
    /// use checkers::{Color, Game};
    ///
    /// let game = Game::new();
    /// assert_eq!(game.side_to_move(), Color::White);
    /// ```
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// The moves the given checker may actually play right now, or `None`
    /// when it is not that checker's turn (or it has been captured).
    ///
    /// This is a filtered view of the checker's raw move list, derived
    /// fresh on every read:
    ///
    /// * under a maximum-capture rule set, only moves whose power equals
    ///   the board-wide maximum survive;
    /// * otherwise, if any checker of the mover can capture, only capture
    ///   moves survive;
    /// * otherwise the raw list is returned as is.
    ///
    /// A checker of the side to move that is simply blocked (or filtered
    /// down to nothing) gets `Some` with an empty list, not `None`.
    ///
    /// ```
    /// use checkers::{Game, GameSettings};
    ///
    /// let game = Game::with_settings(GameSettings::russian());
    /// let board = game.board();
    /// let white = board.checker_on(board.square(9).unwrap()).unwrap();
    /// let black = board.checker_on(board.square(21).unwrap()).unwrap();
    /// assert_eq!(game.available_moves(white).unwrap().len(), 2);
    /// assert_eq!(game.available_moves(black), None);
    /// ```
    pub fn available_moves(&self, id: CheckerId) -> Option<Vec<CheckerMove>> {
        let checker = self.board.checker(id);
        if checker.color() != self.side_to_move || checker.square().is_none() {
            return None;
        }
        let raw = checker.raw_moves();
        let max_power = self.board.max_move_power();
        if self.settings.must_capture_maximum() {
            Some(
                raw.iter()
                    .filter(|mv| mv.power() == max_power)
                    .cloned()
                    .collect(),
            )
        } else if max_power > 0 {
            Some(raw.iter().filter(|mv| mv.is_capture()).cloned().collect())
        } else {
            Some(raw.to_vec())
        }
    }

    /// Play a move: send the given checker to `dest`.
    ///
    /// Returns `false`, touching nothing, when the checker is off the
    /// board, out of turn, or `dest` is not among its available moves.  On
    /// success the checker is relocated, every captured checker is taken
    /// off the board, a man landing on the far row becomes a king, and the
    /// turn passes to the other side, whose move lists are recomputed.
    ///
    /// When more than one available move lands on `dest`, the first one in
    /// the raw list's search order is played.
    ///
    /// ```
    /// use checkers::{Color, Game, GameSettings};
    ///
    /// let mut game = Game::with_settings(GameSettings::russian());
    /// let board = game.board();
    /// let id = board.checker_on(board.square(9).unwrap()).unwrap();
    /// let dest = board.square(13).unwrap();
    /// assert!(game.try_move(id, dest));
    /// assert_eq!(game.side_to_move(), Color::Black);
    /// ```
    pub fn try_move(&mut self, id: CheckerId, dest: Square) -> bool {
        let origin = match self.board.checker(id).square() {
            Some(square) => square,
            None => return false,
        };
        let moves = match self.available_moves(id) {
            Some(moves) => moves,
            None => return false,
        };
        let mv = match moves.iter().find(|mv| mv.dest() == dest) {
            Some(mv) => mv,
            None => return false,
        };
        self.board.apply_move(id, origin, mv);
        self.side_to_move = !self.side_to_move;
        let mover = self.side_to_move;
        self.board.recompute_moves(mover);
        true
    }

    /// Play a move keyed by its origin cell instead of a checker handle.
    /// Returns `false` when the origin cell is empty; otherwise behaves
    /// exactly like [`Game::try_move`].
    ///
    /// ```
    /// use checkers::{Game, GameSettings};
    ///
    /// let mut game = Game::with_settings(GameSettings::russian());
    /// let origin = game.board().square(9).unwrap();
    /// let dest = game.board().square(13).unwrap();
    /// assert!(game.try_move_from(origin, dest));
    /// // cell 9 is empty now
    /// assert!(!game.try_move_from(origin, dest));
    /// ```
    pub fn try_move_from(&mut self, origin: Square, dest: Square) -> bool {
        match self.board.checker_on(origin) {
            Some(id) => self.try_move(id, dest),
            None => false,
        }
    }
}

impl Default for Game {
    #[inline]
    fn default() -> Game {
        Game::new()
    }
}

impl FromStr for Game {
    type Err = Error;

    /// Start a game of the named variant.
    ///
    /// ```
    /// use checkers::Game;
    /// use std::str::FromStr;
    ///
    /// let game = Game::from_str("russian").expect("a known variant");
    /// assert_eq!(game.board().size(), 8);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Game::with_settings(GameSettings::from_str(s)?))
    }
}
