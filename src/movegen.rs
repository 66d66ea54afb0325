//! The move generation engine.
//!
//! Everything here is a pure function of the board: the search never looks
//! at whose turn it is and never mutates anything, so a capture chain can
//! be probed from any cell with any captured-set.  The board stays frozen
//! for the whole search; the moving checker sits on its origin cell until
//! a move is actually applied, and cells captured earlier in a chain keep
//! their occupants, which is what makes them block further sliding.

use crate::board::Board;
use crate::checker::CheckerId;
use crate::checker_move::{CheckerMove, MAX_CAPTURES};
use crate::color::Color;
use crate::direction::{Direction, ALL_DIRECTIONS};
use crate::piece::Piece;
use crate::square::Square;
use arrayvec::ArrayVec;

/// Recompute the full raw move list for one checker: every capture chain
/// it can start, or its quiet moves when it has no capture at all.  A
/// piece's own captures suppress its quiet moves even when the variant
/// would not force a capture board-wide.  Returns nothing for a captured
/// checker.
pub fn piece_moves(board: &Board, id: CheckerId) -> Vec<CheckerMove> {
    let checker = board.checker(id);
    let square = match checker.square() {
        Some(square) => square,
        None => return vec![],
    };
    let moves = capture_moves(board, checker.color(), checker.piece(), square, square, &[]);
    if !moves.is_empty() {
        return moves;
    }
    quiet_moves(board, checker.color(), checker.piece(), square)
}

/// Depth-first search for capture moves, recursing over the four diagonal
/// directions.  `origin` is the cell the moving checker physically
/// occupies for the whole search; `from` is where the chain has jumped to
/// so far (they start out equal); `captured` is the chain's captured-set
/// so far, in capture order.
///
/// Every move returned carries its full captured-set, so the power of the
/// moves grows strictly along a chain and the longest chains sit next to
/// their shorter prefixes in the result.
pub fn capture_moves(
    board: &Board,
    color: Color,
    piece: Piece,
    origin: Square,
    from: Square,
    captured: &[Square],
) -> Vec<CheckerMove> {
    let mut moves = Vec::new();
    for &direction in ALL_DIRECTIONS.iter() {
        match piece {
            Piece::Man => {
                man_captures_in(board, color, origin, from, captured, direction, &mut moves)
            }
            Piece::King => {
                king_captures_in(board, color, origin, from, captured, direction, &mut moves)
            }
        }
    }
    moves
}

/// Quiet (non-capturing) moves from `from`: one forward step for a man, a
/// full slide along all four diagonals for a king.
pub fn quiet_moves(board: &Board, color: Color, piece: Piece, from: Square) -> Vec<CheckerMove> {
    let mut moves = Vec::new();
    match piece {
        Piece::Man => {
            for &direction in ALL_DIRECTIONS.iter() {
                if !direction.is_forward(color) {
                    continue;
                }
                if let Some(dest) = board.offset_square(from, direction, 1) {
                    if board.checker_on(dest).is_none() {
                        moves.push(CheckerMove::quiet(dest));
                    }
                }
            }
        }
        Piece::King => {
            for &direction in ALL_DIRECTIONS.iter() {
                let mut steps = 1;
                while let Some(dest) = board.offset_square(from, direction, steps) {
                    if board.checker_on(dest).is_some() {
                        break;
                    }
                    moves.push(CheckerMove::quiet(dest));
                    steps += 1;
                }
            }
        }
    }
    moves
}

fn occupant(board: &Board, square: Square) -> Option<Color> {
    board
        .checker_on(square)
        .map(|id| board.checker(id).color())
}

fn extend_chain(captured: &[Square], next: Square) -> ArrayVec<Square, MAX_CAPTURES> {
    let mut chain = ArrayVec::new();
    for &square in captured {
        chain.push(square);
    }
    chain.push(next);
    chain
}

/// A man captures by hopping an adjacent enemy onto the cell directly
/// beyond it.
fn man_captures_in(
    board: &Board,
    color: Color,
    origin: Square,
    from: Square,
    captured: &[Square],
    direction: Direction,
    moves: &mut Vec<CheckerMove>,
) {
    let target = match board.offset_square(from, direction, 1) {
        Some(square) => square,
        None => return,
    };
    let dest = match board.offset_square(from, direction, 2) {
        Some(square) => square,
        None => return,
    };
    // the same piece cannot be taken twice in one chain
    if captured.contains(&target) {
        return;
    }
    match occupant(board, target) {
        Some(other) if other != color => {}
        _ => return,
    }
    // the origin cell vacates when the move is applied, so a chain may
    // hop back onto it; any other occupied cell blocks the landing
    if dest != origin && occupant(board, dest).is_some() {
        return;
    }
    let chain = extend_chain(captured, target);
    moves.push(CheckerMove::capture(dest, &chain));
    moves.extend(capture_moves(board, color, Piece::Man, origin, dest, &chain));
}

/// A king slides to its victim from any distance and may land on any empty
/// cell beyond it along the same diagonal.
fn king_captures_in(
    board: &Board,
    color: Color,
    origin: Square,
    from: Square,
    captured: &[Square],
    direction: Direction,
    moves: &mut Vec<CheckerMove>,
) {
    // slide to the first non-empty cell along the ray; a cell captured
    // earlier in the chain still blocks and cannot be taken again
    let mut steps = 1;
    let target = loop {
        let square = match board.offset_square(from, direction, steps) {
            Some(square) => square,
            None => return,
        };
        if captured.contains(&square) {
            return;
        }
        match occupant(board, square) {
            Some(other) if other != color => break square,
            Some(_) => return,
            None => steps += 1,
        }
    };
    let chain = extend_chain(captured, target);
    let mut beyond = steps + 1;
    while let Some(dest) = board.offset_square(from, direction, beyond) {
        if occupant(board, dest).is_some() {
            break;
        }
        moves.push(CheckerMove::capture(dest, &chain));
        moves.extend(capture_moves(board, color, Piece::King, origin, dest, &chain));
        beyond += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board_builder::BoardBuilder;
    use crate::game::Game;
    use crate::settings::GameSettings;

    fn raw_moves(game: &Game, number: usize) -> Vec<CheckerMove> {
        let board = game.board();
        let square = board.square(number).unwrap();
        let id = board.checker_on(square).unwrap();
        piece_moves(board, id)
    }

    #[test]
    fn man_hops_an_adjacent_enemy() {
        // 9 = (3,2), 14 = (4,3), landing on 18 = (5,4)
        let game = BoardBuilder::with_settings(GameSettings::russian())
            .piece(9, Color::White, Piece::Man)
            .piece(14, Color::Black, Piece::Man)
            .build()
            .unwrap();
        let moves = raw_moves(&game, 9);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].dest().number(), 18);
        assert_eq!(moves[0].power(), 1);
        assert_eq!(moves[0].captures()[0].number(), 14);
    }

    #[test]
    fn man_chain_keeps_growing() {
        // after taking 14 and landing on 18, the man can also take 23
        let game = BoardBuilder::with_settings(GameSettings::russian())
            .piece(9, Color::White, Piece::Man)
            .piece(14, Color::Black, Piece::Man)
            .piece(23, Color::Black, Piece::Man)
            .build()
            .unwrap();
        let moves = raw_moves(&game, 9);
        assert_eq!(moves.len(), 2);
        let longest = moves.iter().max_by_key(|m| m.power()).unwrap();
        assert_eq!(longest.power(), 2);
        assert_eq!(longest.dest().number(), 27);
        let taken: Vec<usize> = longest.captures().iter().map(|s| s.number()).collect();
        assert_eq!(taken, vec![14, 23]);
    }

    #[test]
    fn captures_suppress_quiet_moves() {
        let game = BoardBuilder::with_settings(GameSettings::russian())
            .piece(9, Color::White, Piece::Man)
            .piece(14, Color::Black, Piece::Man)
            .build()
            .unwrap();
        for mv in raw_moves(&game, 9).iter() {
            assert!(mv.is_capture());
        }
    }

    #[test]
    fn man_quiet_moves_go_forward_only() {
        let game = BoardBuilder::with_settings(GameSettings::russian())
            .piece(14, Color::White, Piece::Man)
            .build()
            .unwrap();
        // 14 = (4,3) may step to (5,4) = 18 or (5,2) = 17, never backward
        let dests: Vec<usize> = raw_moves(&game, 14).iter().map(|m| m.dest().number()).collect();
        assert_eq!(dests.len(), 2);
        assert!(dests.contains(&17));
        assert!(dests.contains(&18));
    }

    #[test]
    fn king_slides_any_distance() {
        let game = BoardBuilder::with_settings(GameSettings::russian())
            .piece(18, Color::White, Piece::King)
            .build()
            .unwrap();
        // 18 = (5,4) sees 3 + 3 + 4 + 3 empty cells along the four rays
        let moves = raw_moves(&game, 18);
        assert_eq!(moves.len(), 13);
        for mv in moves.iter() {
            assert!(!mv.is_capture());
        }
    }

    #[test]
    fn king_cannot_take_the_same_piece_twice() {
        let game = BoardBuilder::with_settings(GameSettings::russian())
            .piece(1, Color::White, Piece::King)
            .piece(10, Color::Black, Piece::Man)
            .build()
            .unwrap();
        // one victim, four landing cells behind it, and no way to circle
        // back for a second bite
        let moves = raw_moves(&game, 1);
        assert_eq!(moves.len(), 4);
        for mv in moves.iter() {
            assert_eq!(mv.power(), 1);
            assert_eq!(mv.captures()[0].number(), 10);
        }
    }

    #[test]
    fn king_chains_through_three_victims() {
        let game = BoardBuilder::with_settings(GameSettings::russian())
            .piece(1, Color::White, Piece::King)
            .piece(10, Color::Black, Piece::Man)
            .piece(17, Color::Black, Piece::Man)
            .piece(18, Color::Black, Piece::Man)
            .build()
            .unwrap();
        let moves = raw_moves(&game, 1);
        let best = moves.iter().max_by_key(|m| m.power()).unwrap();
        assert_eq!(best.power(), 3);
        assert_eq!(best.dest().number(), 13);
        let taken: Vec<usize> = best.captures().iter().map(|s| s.number()).collect();
        assert_eq!(taken, vec![10, 18, 17]);
    }

    #[test]
    fn man_may_land_back_on_its_own_cell() {
        // four victims arranged in a ring around 14 = (4,3); the chain
        // goes all the way around and ends where it began
        let game = BoardBuilder::with_settings(GameSettings::russian())
            .piece(14, Color::White, Piece::Man)
            .piece(18, Color::Black, Piece::Man)
            .piece(26, Color::Black, Piece::Man)
            .piece(25, Color::Black, Piece::Man)
            .piece(17, Color::Black, Piece::Man)
            .build()
            .unwrap();
        let moves = raw_moves(&game, 14);
        let best = moves.iter().max_by_key(|m| m.power()).unwrap();
        assert_eq!(best.power(), 4);
        assert_eq!(best.dest().number(), 14);
    }
}
