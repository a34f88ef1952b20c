use crate::piece::Color::{Black, White};
use crate::piece::PieceKind::{Bishop, King, Knight, Pawn, Queen, Rook};
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

#[derive(Debug, Copy, Clone, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}
impl PieceKind {
    pub const ALL: [PieceKind; 6] = [Pawn, Knight, Bishop, Rook, Queen, King];

    /// Uppercase letter used in the move history
    pub fn letter(&self) -> char {
        match self {
            Pawn => 'P',
            Knight => 'N',
            Bishop => 'B',
            Rook => 'R',
            Queen => 'Q',
            King => 'K',
        }
    }
    pub fn can_slide(&self) -> bool {
        matches!(self, Bishop | Queen | Rook)
    }
    pub fn is_bishop_like(&self) -> bool {
        matches!(self, Bishop | Queen)
    }
    pub fn is_rook_like(&self) -> bool {
        matches!(self, Queen | Rook)
    }
}
impl Display for PieceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Pawn => "pawn",
                Knight => "knight",
                Bishop => "bishop",
                Rook => "rook",
                Queen => "queen",
                King => "king",
            }
        )
    }
}

#[derive(Debug, Copy, Clone, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn opposite(&self) -> Color {
        match self {
            White => Black,
            Black => White,
        }
    }
    /// Row direction of a pawn step
    pub fn forward(&self) -> i8 {
        match self {
            White => -1,
            Black => 1,
        }
    }
    pub fn pawn_start_row(&self) -> i8 {
        match self {
            White => 6,
            Black => 1,
        }
    }
    pub fn back_rank(&self) -> i8 {
        match self {
            White => 7,
            Black => 0,
        }
    }
    /// The row a pawn of this color promotes on
    pub fn promotion_row(&self) -> i8 {
        self.opposite().back_rank()
    }
    pub fn name(&self) -> &'static str {
        match self {
            White => "White",
            Black => "Black",
        }
    }
}
impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Piece {
        Piece { kind, color, has_moved: false }
    }

    /// Parses a FEN piece letter, uppercase being white
    pub fn from_char(c: char) -> Option<Piece> {
        let kind = match c.to_ascii_lowercase() {
            'p' => Pawn,
            'n' => Knight,
            'b' => Bishop,
            'r' => Rook,
            'q' => Queen,
            'k' => King,
            _ => return None,
        };
        let color = if c.is_ascii_lowercase() { Black } else { White };
        Some(Piece::new(kind, color))
    }

    pub fn to_char(&self) -> char {
        let c = self.kind.letter();
        if self.color == White { c } else { c.to_ascii_lowercase() }
    }

    pub fn glyph(&self) -> char {
        match (self.color, self.kind) {
            (White, King) => '♔',
            (White, Queen) => '♕',
            (White, Rook) => '♖',
            (White, Bishop) => '♗',
            (White, Knight) => '♘',
            (White, Pawn) => '♙',
            (Black, King) => '♚',
            (Black, Queen) => '♛',
            (Black, Rook) => '♜',
            (Black, Bishop) => '♝',
            (Black, Knight) => '♞',
            (Black, Pawn) => '♟',
        }
    }

    pub fn is_enemy_of(&self, other: &Piece) -> bool {
        self.color != other.color
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fen_letters() {
        let p = Piece::from_char('q').unwrap();
        assert_eq!(p.kind, Queen);
        assert_eq!(p.color, Black);
        assert!(!p.has_moved);
        assert_eq!(Piece::from_char('N').unwrap().color, White);
        assert_eq!(Piece::from_char('x'), None);
        assert_eq!(Piece::new(King, White).to_string(), "K");
        assert_eq!(Piece::new(Rook, Black).to_string(), "r");
    }

    #[test]
    fn pawn_geometry_per_color() {
        assert_eq!(White.forward(), -1);
        assert_eq!(Black.forward(), 1);
        assert_eq!(White.pawn_start_row(), 6);
        assert_eq!(Black.pawn_start_row(), 1);
        assert_eq!(White.promotion_row(), 0);
        assert_eq!(Black.promotion_row(), 7);
    }
}
