use std::time::Instant;

use crate::board::Board;
use crate::error::EngineError;
use crate::game::GameState;
use crate::legality::all_legal_moves;
use crate::piece::Color;

pub mod board;
pub mod castling;
pub mod cli;
pub mod config;
pub mod error;
pub mod game;
pub mod history;
pub mod legality;
pub mod move_generator;
pub mod movelist;
pub mod piece;
pub mod render;
pub mod skin;
pub mod square;
pub mod r#move;

/// Prints legal move tree sizes for every depth up to `depth`.
/// `position` is `<placement> [w|b]`, the start position when absent.
pub fn perft(depth: u32, position: Option<&str>) -> Result<(), EngineError> {
    let (mut board, side) = match position {
        None => (Board::starting_position(), Color::White),
        Some(p) => {
            let game = GameState::from_fen(p)?;
            (game.board().clone(), game.current_player())
        }
    };
    println!("{}\n", board);
    println!("depth nodes\n--------");
    for d in 0..depth + 1 {
        let start = Instant::now();
        let nodes = count_nodes(&mut board, side, d);
        let elapsed = start.elapsed();
        println!("{}     {} ({}s, {} nps)", d, nodes, elapsed.as_secs_f32(), nodes as f32 / elapsed.as_secs_f32());
    }
    Ok(())
}

/// Number of leaf positions `depth` plies below the current one
pub fn count_nodes(board: &mut Board, side: Color, depth: u32) -> u64 {
    if depth == 0 { return 1 }
    let moves = all_legal_moves(board, side);
    if depth == 1 { return moves.len() as u64 }
    let mut nodes = 0u64;
    for mv in moves {
        let mut child = board.clone();
        child.make(mv);
        nodes += count_nodes(&mut child, side.opposite(), depth - 1);
    }
    nodes
}
