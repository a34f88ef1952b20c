use crate::castling::CastleSide;
use crate::error::EngineError;
use crate::piece::Color::{Black, White};
use crate::piece::PieceKind::{Bishop, King, Knight, Pawn, Queen, Rook};
use crate::piece::{Color, Piece, PieceKind};
use crate::r#move::Move;
use crate::square::Square;
use std::fmt::{Display, Formatter};

pub const START_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

const BACK_RANK_ORDER: [PieceKind; 8] = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

/// The 8x8 grid. It knows nothing about whose turn it is or what is legal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pieces: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl Board {
    pub fn empty() -> Board {
        Board { pieces: [None; 64] }
    }

    /// Standard initial setup, black on rows 0/1, white on rows 6/7
    pub fn starting_position() -> Board {
        let mut b = Board::empty();
        for col in 0..8 {
            b.set(Square::new(1, col), Some(Piece::new(Pawn, Black)));
            b.set(Square::new(6, col), Some(Piece::new(Pawn, White)));
            b.set(Square::new(0, col), Some(Piece::new(BACK_RANK_ORDER[col as usize], Black)));
            b.set(Square::new(7, col), Some(Piece::new(BACK_RANK_ORDER[col as usize], White)));
        }
        b
    }

    /// Builds a board from the piece placement field of a FEN string.
    /// Kings and rooks away from their original squares are marked as moved,
    /// everything else is considered fresh.
    pub fn from_placement(placement: &str) -> Result<Board, EngineError> {
        let bad = |why: &str| EngineError::InvalidPosition(format!("{}: {}", why, placement));
        let mut b = Board::empty();
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(bad("expected 8 ranks"));
        }
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0i8;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as i8;
                } else {
                    let mut piece = Piece::from_char(c).ok_or_else(|| bad("unknown piece letter"))?;
                    let sq = Square::new(row as i8, col);
                    if !sq.is_on_board() {
                        return Err(bad("rank too long"));
                    }
                    piece.has_moved = !Self::is_home_square(piece, sq);
                    b.set(sq, Some(piece));
                    col += 1;
                }
                if col > 8 {
                    return Err(bad("rank too long"));
                }
            }
            if col != 8 {
                return Err(bad("rank too short"));
            }
        }
        Ok(b)
    }

    fn is_home_square(piece: Piece, sq: Square) -> bool {
        let back_rank = piece.color.back_rank();
        match piece.kind {
            King => sq == Square::new(back_rank, 4),
            Rook => sq.row == back_rank && (sq.col == 0 || sq.col == 7),
            _ => true,
        }
    }

    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.pieces[sq.index()]
    }

    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.pieces[sq.index()] = piece;
    }

    /// Clears the given square, returning the piece that has been removed if any
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.pieces[sq.index()].take()
    }

    pub fn is_on_board(sq: Square) -> bool {
        sq.is_on_board()
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.get(sq).map(|p| p.color)
    }

    pub fn kind_on(&self, sq: Square) -> Option<PieceKind> {
        self.get(sq).map(|p| p.kind)
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, p)| p.kind == King)
            .map(|(sq, _)| sq)
    }

    /// Occupied squares of a given color, scanned row by row
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces
            .iter()
            .enumerate()
            .filter_map(move |(i, p)| match p {
                Some(p) if p.color == color => Some((Square::from_index(i), *p)),
                _ => None,
            })
    }

    /// Plays a move on the grid, returning whatever stood on the destination.
    /// Legality is not checked: pawns reaching the last row become queens, the
    /// piece is flagged as moved and a two column king step drags its rook along.
    pub fn make(&mut self, mv: Move) -> Option<Piece> {
        let mut piece = match self.take(mv.from) {
            Some(p) => p,
            None => return None,
        };
        if piece.kind == Pawn && mv.to.row == piece.color.promotion_row() {
            piece.kind = Queen;
        }
        piece.has_moved = true;

        if piece.kind == King {
            if let Some(side) = CastleSide::from_king_move(mv.from, mv.to) {
                let rook_from = Square::new(mv.from.row, side.rook_col());
                if let Some(mut rook) = self.take(rook_from) {
                    rook.has_moved = true;
                    self.set(Square::new(mv.from.row, side.rook_target_col()), Some(rook));
                }
            }
        }

        let captured = self.take(mv.to);
        self.set(mv.to, Some(piece));
        captured
    }

    pub fn placement(&self) -> String {
        let mut fen = String::new();
        for row in 0..8 {
            let mut empty_counter = 0;
            for col in 0..8 {
                match self.get(Square::new(row, col)) {
                    Some(p) => {
                        if empty_counter != 0 { fen.push_str(&empty_counter.to_string()) }
                        empty_counter = 0;
                        fen.push(p.to_char())
                    }
                    None => empty_counter += 1,
                }
            }
            if empty_counter != 0 { fen.push_str(&empty_counter.to_string()) }
            if row != 7 { fen.push('/') }
        }
        fen
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in 0..8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8 {
                match self.get(Square::new(row, col)) {
                    None => write!(f, ". ")?,
                    Some(p) => write!(f, "{} ", p)?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_layout() {
        let b = Board::starting_position();
        for col in 0..8 {
            assert_eq!(b.get(Square::new(1, col)), Some(Piece::new(Pawn, Black)));
            assert_eq!(b.get(Square::new(6, col)), Some(Piece::new(Pawn, White)));
            assert_eq!(b.kind_on(Square::new(0, col)), Some(BACK_RANK_ORDER[col as usize]));
            assert_eq!(b.kind_on(Square::new(7, col)), Some(BACK_RANK_ORDER[col as usize]));
            assert_eq!(b.color_on(Square::new(0, col)), Some(Black));
            assert_eq!(b.color_on(Square::new(7, col)), Some(White));
            for row in 2..6 {
                assert!(b.is_empty(Square::new(row, col)));
            }
        }
        assert_eq!(b.placement(), START_PLACEMENT);
    }

    #[test]
    fn placement_round_trip() {
        assert_eq!(Board::from_placement(START_PLACEMENT).unwrap(), Board::starting_position());
        let kiwipete = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R";
        assert_eq!(Board::from_placement(kiwipete).unwrap().placement(), kiwipete);
    }

    #[test]
    fn displaced_kings_and_rooks_count_as_moved() {
        let b = Board::from_placement("8/8/8/8/4K3/8/8/R6k").unwrap();
        assert!(b.get(Square::new(4, 4)).unwrap().has_moved);
        assert!(!b.get(Square::new(7, 0)).unwrap().has_moved);
        assert!(b.get(Square::new(7, 7)).unwrap().has_moved);
    }

    #[test]
    fn rejects_malformed_placement() {
        assert!(Board::from_placement("8/8/8").is_err());
        assert!(Board::from_placement("9/8/8/8/8/8/8/8").is_err());
        assert!(Board::from_placement("7/8/8/8/8/8/8/8").is_err());
        assert!(Board::from_placement("x7/8/8/8/8/8/8/8").is_err());
    }

    #[test]
    fn find_king() {
        let b = Board::starting_position();
        assert_eq!(b.find_king(White), Some(Square::new(7, 4)));
        assert_eq!(b.find_king(Black), Some(Square::new(0, 4)));
        assert_eq!(Board::empty().find_king(White), None);
    }

    #[test]
    fn make_moves_rook_when_castling() {
        let mut b = Board::from_placement("r3k2r/8/8/8/8/8/8/R3K2R").unwrap();
        assert_eq!(b.make(Move::new(Square::new(7, 4), Square::new(7, 6))), None);
        assert_eq!(b.kind_on(Square::new(7, 5)), Some(Rook));
        assert!(b.is_empty(Square::new(7, 7)));
        b.make(Move::new(Square::new(0, 4), Square::new(0, 2)));
        assert_eq!(b.kind_on(Square::new(0, 3)), Some(Rook));
        assert!(b.get(Square::new(0, 3)).unwrap().has_moved);
        assert!(b.is_empty(Square::new(0, 0)));
    }

    #[test]
    fn make_promotes_and_captures() {
        let mut b = Board::from_placement("1n5k/P7/8/8/8/8/8/K7").unwrap();
        let captured = b.make(Move::new(Square::new(1, 0), Square::new(0, 1)));
        assert_eq!(captured.map(|p| p.kind), Some(Knight));
        assert_eq!(b.get(Square::new(0, 1)).unwrap().kind, Queen);
        assert_eq!(b.get(Square::new(0, 1)).unwrap().color, White);
        assert!(b.get(Square::new(0, 1)).unwrap().has_moved);
    }
}
