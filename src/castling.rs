use crate::square::Square;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Column the castling rook starts on
    pub fn rook_col(&self) -> i8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// Signed column step of the king, it travels two of them
    pub fn direction(&self) -> i8 {
        match self {
            CastleSide::KingSide => 1,
            CastleSide::QueenSide => -1,
        }
    }

    /// Where the king lands when castling from `king`
    pub fn king_target(&self, king: Square) -> Square {
        king.offset(0, 2 * self.direction())
    }

    /// Column the rook lands on
    pub fn rook_target_col(&self) -> i8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    /// Recognizes a castling king move: the king travels two columns
    pub fn from_king_move(from: Square, to: Square) -> Option<CastleSide> {
        if from.row != to.row {
            return None;
        }
        match to.col - from.col {
            2 => Some(CastleSide::KingSide),
            -2 => Some(CastleSide::QueenSide),
            _ => None,
        }
    }
}

impl Display for CastleSide {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                CastleSide::KingSide => "O-O",
                CastleSide::QueenSide => "O-O-O",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_column_king_moves_are_castles() {
        let e1 = Square::new(7, 4);
        assert_eq!(CastleSide::from_king_move(e1, Square::new(7, 6)), Some(CastleSide::KingSide));
        assert_eq!(CastleSide::from_king_move(e1, Square::new(7, 2)), Some(CastleSide::QueenSide));
        assert_eq!(CastleSide::from_king_move(e1, Square::new(7, 5)), None);
        assert_eq!(CastleSide::from_king_move(e1, Square::new(6, 6)), None);
        assert_eq!(CastleSide::KingSide.king_target(e1), Square::new(7, 6));
    }
}
