use crate::{
    board::Board,
    move_generator::{candidate_moves, is_square_attacked},
    movelist::SquareList,
    piece::Color,
    r#move::Move,
    square::Square,
};

/// Candidate moves of the piece on `origin` that do not leave its own king
/// attacked. Each candidate is tried on the board and rolled back right away,
/// so the board reads the same before and after the call.
pub fn legal_moves(board: &mut Board, origin: Square) -> SquareList {
    let mut targets = candidate_moves(board, origin);
    let color = if let Some(c) = board.color_on(origin) { c } else { return targets };
    targets.retain(|target| !leaves_king_attacked(board, origin, *target, color));
    targets
}

/// Plays `origin -> target` as a bare relocation, looks at the mover's king
/// and restores both squares.
fn leaves_king_attacked(board: &mut Board, origin: Square, target: Square, color: Color) -> bool {
    let displaced = board.take(target);
    let moving = board.take(origin);
    board.set(target, moving);

    // No king on the board means there is nothing to protect
    let attacked = match board.find_king(color) {
        Some(king) => is_square_attacked(board, king, color.opposite()),
        None => false,
    };

    board.set(origin, moving);
    board.set(target, displaced);
    attacked
}

/// Every legal move for `color`, scanned row by row
pub fn all_legal_moves(board: &mut Board, color: Color) -> Vec<Move> {
    let origins: Vec<Square> = board.pieces_of(color).map(|(sq, _)| sq).collect();
    let mut moves = Vec::with_capacity(64);
    for origin in origins {
        for target in &legal_moves(board, origin) {
            moves.push(Move::new(origin, *target))
        }
    }
    moves
}

pub fn has_legal_move(board: &mut Board, color: Color) -> bool {
    let origins: Vec<Square> = board.pieces_of(color).map(|(sq, _)| sq).collect();
    origins.into_iter().any(|origin| !legal_moves(board, origin).is_empty())
}

pub fn in_check(board: &Board, color: Color) -> bool {
    match board.find_king(color) {
        Some(king) => is_square_attacked(board, king, color.opposite()),
        None => false,
    }
}
