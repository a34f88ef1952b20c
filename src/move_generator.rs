use crate::{
    board::Board,
    castling::CastleSide,
    movelist::SquareList,
    piece::{Color, Piece, PieceKind},
    square::Square,
};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2), (1, 2), (2, -1), (2, 1),
];
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1), (0, -1),
    (0, 1), (1, -1), (1, 0), (1, 1),
];
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Pseudo-legal destinations of the piece standing on `origin`.
/// Moves that leave the mover's own king attacked are still in there,
/// `legality::legal_moves` takes care of those.
pub fn candidate_moves(board: &Board, origin: Square) -> SquareList {
    let mut targets = SquareList::default();
    let piece = if let Some(p) = board.get(origin) { p } else { return targets };

    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, origin, piece, &mut targets),
        PieceKind::Knight => leaper_moves(board, origin, piece, &KNIGHT_OFFSETS, &mut targets),
        PieceKind::Bishop => slider_moves(board, origin, piece, &BISHOP_DIRECTIONS, &mut targets),
        PieceKind::Rook => slider_moves(board, origin, piece, &ROOK_DIRECTIONS, &mut targets),
        PieceKind::Queen => {
            slider_moves(board, origin, piece, &ROOK_DIRECTIONS, &mut targets);
            slider_moves(board, origin, piece, &BISHOP_DIRECTIONS, &mut targets);
        }
        PieceKind::King => {
            leaper_moves(board, origin, piece, &KING_OFFSETS, &mut targets);
            castling_moves(board, origin, piece, &mut targets);
        }
    }
    targets
}

fn pawn_moves(board: &Board, origin: Square, pawn: Piece, targets: &mut SquareList) {
    let m = pawn.color.forward();

    let single = origin.offset(m, 0);
    if single.is_on_board() && board.is_empty(single) {
        targets.push(single);
        // Eligibility comes from the row, not from has_moved
        let double = origin.offset(2 * m, 0);
        if origin.row == pawn.color.pawn_start_row() && double.is_on_board() && board.is_empty(double) {
            targets.push(double);
        }
    }

    for d_col in [-1, 1] {
        let target = origin.offset(m, d_col);
        if !target.is_on_board() { continue }
        if let Some(victim) = board.get(target) {
            if victim.is_enemy_of(&pawn) {
                targets.push(target)
            }
        }
    }
}

fn leaper_moves(board: &Board, origin: Square, piece: Piece, offsets: &[(i8, i8)], targets: &mut SquareList) {
    for &(d_row, d_col) in offsets {
        let target = origin.offset(d_row, d_col);
        if !target.is_on_board() { continue }
        match board.get(target) {
            None => targets.push(target),
            Some(other) if other.is_enemy_of(&piece) => targets.push(target),
            _ => (),
        }
    }
}

fn slider_moves(board: &Board, origin: Square, piece: Piece, directions: &[(i8, i8)], targets: &mut SquareList) {
    for &(d_row, d_col) in directions {
        let mut target = origin.offset(d_row, d_col);
        while target.is_on_board() {
            match board.get(target) {
                None => targets.push(target),
                Some(other) => {
                    if other.is_enemy_of(&piece) {
                        targets.push(target)
                    }
                    break;
                }
            }
            target = target.offset(d_row, d_col);
        }
    }
}

fn castling_moves(board: &Board, origin: Square, king: Piece, targets: &mut SquareList) {
    if king.has_moved { return }
    for side in CastleSide::BOTH {
        if can_castle(board, origin, king.color, side) {
            targets.push(side.king_target(origin))
        }
    }
}

/// Checks one castling side for an unmoved king standing on `king_square`
pub fn can_castle(board: &Board, king_square: Square, color: Color, side: CastleSide) -> bool {
    let rook_square = Square::new(king_square.row, side.rook_col());
    match board.get(rook_square) {
        Some(rook) if rook.kind == PieceKind::Rook && rook.color == color && !rook.has_moved => (),
        _ => return false,
    }

    let king_target = side.king_target(king_square);
    if !king_target.is_on_board() || !board.is_empty(king_target) { return false }

    let (low, high) = if rook_square.col < king_square.col {
        (rook_square.col, king_square.col)
    } else {
        (king_square.col, rook_square.col)
    };
    if (low + 1..high).any(|col| !board.is_empty(Square::new(king_square.row, col))) {
        return false;
    }

    // The king may not castle out of, through, or into an attacked square
    let opponent = color.opposite();
    (0..=2).all(|step| !is_square_attacked(board, king_square.offset(0, step * side.direction()), opponent))
}

/// Whether any piece of color `by` could capture on `target`.
/// Pins are ignored, and an empty square counts just like an occupied one:
/// pawns hit their forward diagonals, kings their neighbours (never castling).
pub fn is_square_attacked(board: &Board, target: Square, by: Color) -> bool {
    let is_attacker = |sq: Square, kind: PieceKind| {
        sq.is_on_board() && matches!(board.get(sq), Some(p) if p.color == by && p.kind == kind)
    };

    // A pawn of color `by` attacks forward, so it sits one step behind the target
    let pawn_row = -by.forward();
    if [-1, 1].iter().any(|&d_col| is_attacker(target.offset(pawn_row, d_col), PieceKind::Pawn)) {
        return true;
    }
    if KNIGHT_OFFSETS.iter().any(|&(r, c)| is_attacker(target.offset(r, c), PieceKind::Knight)) {
        return true;
    }
    if KING_OFFSETS.iter().any(|&(r, c)| is_attacker(target.offset(r, c), PieceKind::King)) {
        return true;
    }

    ray_hits(board, target, by, &ROOK_DIRECTIONS, PieceKind::is_rook_like)
        || ray_hits(board, target, by, &BISHOP_DIRECTIONS, PieceKind::is_bishop_like)
}

fn ray_hits(board: &Board, target: Square, by: Color, directions: &[(i8, i8)], slides_that_way: fn(&PieceKind) -> bool) -> bool {
    for &(d_row, d_col) in directions {
        let mut sq = target.offset(d_row, d_col);
        while sq.is_on_board() {
            if let Some(p) = board.get(sq) {
                if p.color == by && slides_that_way(&p.kind) {
                    return true;
                }
                break;
            }
            sq = sq.offset(d_row, d_col);
        }
    }
    false
}
