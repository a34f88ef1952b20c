use crate::square::{parse_square, Square};
use std::fmt::{Display, Formatter};

/// A relocation of the piece on `from` to `to`. Castling is encoded as the
/// king's two column step, promotion is implicit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Move {
        Move { from, to }
    }

    /// Parses a move in long algebraic notation (`e2e4`)
    pub fn parse(mv: &str) -> Option<Move> {
        let mv = mv.trim();
        if mv.len() != 4 || !mv.is_ascii() {
            return None;
        }
        Some(Move::new(parse_square(&mv[0..2])?, parse_square(&mv[2..4])?))
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_algebraic() {
        let mv = Move::parse("e2e4").unwrap();
        assert_eq!(mv, Move::new(Square::new(6, 4), Square::new(4, 4)));
        assert_eq!(mv.to_string(), "e2e4");
        assert_eq!(Move::parse("e2e9"), None);
        assert_eq!(Move::parse("e2e4q"), None);
    }
}
