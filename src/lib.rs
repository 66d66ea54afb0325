//! This is a rust checkers move generator.
//!
//! It knows the rules of the International, Russian and Canadian variants:
//! for any position it can list the legal moves of the side to move,
//! honoring the mandatory-capture and maximum-capture policies, and it can
//! apply a chosen move, including multi-capture chains and promotion.
//!
//! ```
//! use checkers::{Color, Game, GameSettings};
//!
//! let mut game = Game::with_settings(GameSettings::russian());
//! let origin = game.board().square(9).unwrap();
//! let dest = game.board().square(13).unwrap();
//! assert!(game.try_move_from(origin, dest));
//! assert_eq!(game.side_to_move(), Color::Black);
//! ```

pub mod board;
pub mod board_builder;
pub mod checker;
pub mod checker_move;
pub mod color;
pub mod direction;
pub mod error;
pub mod game;
pub mod movegen;
pub mod piece;
pub mod position;
pub mod settings;
pub mod square;

pub use crate::board::Board;
pub use crate::board_builder::BoardBuilder;
pub use crate::checker::{Checker, CheckerId};
pub use crate::checker_move::{CheckerMove, MAX_CAPTURES};
pub use crate::color::{Color, ALL_COLORS, NUM_COLORS};
pub use crate::direction::{Direction, ALL_DIRECTIONS, NUM_DIRECTIONS};
pub use crate::error::Error;
pub use crate::game::Game;
pub use crate::piece::{Piece, ALL_PIECES, NUM_PIECES};
pub use crate::position::Position;
pub use crate::settings::GameSettings;
pub use crate::square::Square;
