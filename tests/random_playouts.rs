use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use skinchess::board::Board;
use skinchess::game::{GameEvent, GameState};
use skinchess::legality::{all_legal_moves, in_check};
use skinchess::move_generator::is_square_attacked;
use skinchess::piece::PieceKind;
use skinchess::square::Square;

// Plays random games click by click and checks the engine invariants after
// every move. Seeded so that a failure can be replayed.
#[test]
fn random_games_keep_the_invariants() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..20 {
        let mut game = GameState::new();
        for _ in 0..150 {
            if game.is_game_over() { break }
            let side = game.current_player();
            let mut board = game.board().clone();
            let moves = all_legal_moves(&mut board, side);
            assert_eq!(&board, game.board(), "move generation left the board changed");
            assert!(!moves.is_empty(), "game not over but no legal moves");

            // no legal move leaves the mover's king attacked
            for mv in &moves {
                let mut after = board.clone();
                after.make(*mv);
                let king = after.find_king(side).expect("king never disappears");
                assert!(!is_square_attacked(&after, king, side.opposite()), "{} exposes the king", mv);
            }

            let mv = *moves.choose(&mut rng).unwrap();
            assert!(matches!(game.handle_square_click(mv.from), GameEvent::Selected { .. }));
            let event = game.handle_square_click(mv.to);
            assert!(matches!(event, GameEvent::Moved { .. }), "{} was refused: {:?}", mv, event);

            assert_eq!(game.current_player(), side.opposite());
            assert_eq!(game.in_check(), in_check(game.board(), game.current_player()));
            assert!(no_pawn_on_a_last_rank(game.board()));
        }
    }
}

fn no_pawn_on_a_last_rank(board: &Board) -> bool {
    (0..8).all(|col| {
        [0, 7].iter().all(|&row| board.kind_on(Square::new(row, col)) != Some(PieceKind::Pawn))
    })
}
