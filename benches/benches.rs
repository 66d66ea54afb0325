#[macro_use]
extern crate bencher;
extern crate checkers;

use bencher::Bencher;
use checkers::{Board, BoardBuilder, Color, Game, GameSettings, Piece};

// This is a helper function to remove boilerplate code from all the perft_*
// benchmarks.  It walks every available move of every checker of the mover,
// recursively, counting the positions reached; that exercises the whole
// engine in one loop: recompute, filter, apply.
fn perft(game: &Game, depth: usize) -> usize {
    if depth == 0 {
        return 1;
    }
    let mut count = 0;
    for id in game.board().checker_ids() {
        let moves = match game.available_moves(id) {
            Some(moves) => moves,
            None => continue,
        };
        for mv in moves.iter() {
            let mut next = game.clone();
            assert!(next.try_move(id, mv.dest()));
            count += perft(&next, depth - 1);
        }
    }
    count
}

fn game_perft(bench: &mut Bencher, settings: GameSettings, depth: usize, count: usize) {
    let game = Game::with_settings(settings);

    bench.iter(|| assert_eq!(perft(&game, depth), count));
}

fn perft_russian_2(bench: &mut Bencher) {
    game_perft(bench, GameSettings::russian(), 2, 49);
}

fn perft_international_2(bench: &mut Bencher) {
    game_perft(bench, GameSettings::international(), 2, 81);
}

fn perft_canadian_2(bench: &mut Bencher) {
    game_perft(bench, GameSettings::canadian(), 2, 121);
}

fn board_build_international(bench: &mut Bencher) {
    bench.iter(|| {
        let board = Board::new(&GameSettings::international());
        assert_eq!(board.num_squares(), 50);
    });
}

fn board_build_canadian(bench: &mut Bencher) {
    bench.iter(|| {
        let board = Board::new(&GameSettings::canadian());
        assert_eq!(board.num_squares(), 72);
    });
}

fn movegen_king_chain(bench: &mut Bencher) {
    bench.iter(|| {
        let game = BoardBuilder::with_settings(GameSettings::russian())
            .piece(1, Color::White, Piece::King)
            .piece(10, Color::Black, Piece::Man)
            .piece(17, Color::Black, Piece::Man)
            .piece(18, Color::Black, Piece::Man)
            .build()
            .unwrap();
        assert_eq!(game.board().max_move_power(), 3);
    });
}

fn game_make_move(bench: &mut Bencher) {
    let game = Game::with_settings(GameSettings::russian());
    let origin = game.board().square(9).unwrap();
    let dest = game.board().square(13).unwrap();

    bench.iter(|| {
        let mut copy = game.clone();
        assert!(copy.try_move_from(origin, dest));
        assert_eq!(copy.side_to_move(), Color::Black);
    });
}

benchmark_group!(
    benches,
    perft_russian_2,
    perft_international_2,
    perft_canadian_2,
    board_build_international,
    board_build_canadian,
    movegen_king_chain,
    game_make_move
);

benchmark_main!(benches);
