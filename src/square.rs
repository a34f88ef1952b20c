use crate::error::EngineError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A (row, col) pair. Row 0 is black's back rank, row 7 white's.
/// Coordinates may be off the board while stepping along a ray,
/// `is_on_board` has to be checked before the square touches a `Board`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    pub const fn new(row: i8, col: i8) -> Square {
        Square { row, col }
    }

    /// Checks whether both coordinates are within 0..8
    /// ```
    /// use skinchess::square::Square;
    /// assert!(Square::new(0, 7).is_on_board());
    /// assert!(!Square::new(8, 0).is_on_board());
    /// assert!(!Square::new(3, -1).is_on_board());
    /// ```
    pub fn is_on_board(&self) -> bool {
        (0..8).contains(&self.row) && (0..8).contains(&self.col)
    }

    pub fn offset(&self, d_row: i8, d_col: i8) -> Square {
        Square::new(self.row + d_row, self.col + d_col)
    }

    /// Index into a 64 cell array, row major
    pub fn index(&self) -> usize {
        assert!(self.is_on_board(), "square {:?} is off the board", self);
        self.row as usize * 8 + self.col as usize
    }

    pub fn from_index(i: usize) -> Square {
        Square::new((i / 8) as i8, (i % 8) as i8)
    }

    pub fn file_char(&self) -> char {
        (b'a' + self.col as u8) as char
    }

    /// Displayed rank, 8 - row
    pub fn rank(&self) -> i8 {
        8 - self.row
    }

    /// Light squares are the ones where row + col is even
    pub fn is_light(&self) -> bool {
        (self.row + self.col) % 2 == 0
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

/// Parses a square from a given string slice, either algebraic (`e2`)
/// or as `row,col` in board coordinates
/// ```
/// use skinchess::square::{parse_square, Square};
/// assert_eq!(parse_square("e2"), Some(Square::new(6, 4)));
/// assert_eq!(parse_square("a8"), Some(Square::new(0, 0)));
/// assert_eq!(parse_square("6,4"), Some(Square::new(6, 4)));
/// assert_eq!(parse_square("k9"), None);
/// assert_eq!(parse_square("8,0"), None);
/// ```
pub fn parse_square(s: &str) -> Option<Square> {
    let s = s.trim();
    if let Some((row, col)) = s.split_once(',') {
        let sq = Square::new(row.trim().parse().ok()?, col.trim().parse().ok()?);
        return if sq.is_on_board() { Some(sq) } else { None };
    }
    let mut chars = s.chars();
    let col = match chars.next()? {
        c @ 'a'..='h' => (c as u8 - b'a') as i8,
        _ => return None,
    };
    let rank = match chars.next()?.to_digit(10) {
        Some(i) if (1..=8).contains(&i) => i as i8,
        _ => return None,
    };
    if chars.next().is_some() {
        return None;
    }
    Some(Square::new(8 - rank, col))
}

impl FromStr for Square {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_square(s).ok_or_else(|| EngineError::InvalidSquare(s.to_string()))
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_on_board() {
            write!(f, "{}{}", self.file_char(), self.rank())
        } else {
            write!(f, "**")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algebraic_representation() {
        assert_eq!(Square::new(6, 4).to_string(), "e2");
        assert_eq!(Square::new(0, 7).to_string(), "h8");
        assert_eq!(Square::new(9, 7).to_string(), "**");
        for sq in Square::all() {
            assert_eq!(sq.to_string().parse::<Square>().unwrap(), sq);
        }
    }

    #[test]
    fn rejects_garbage() {
        assert!("e".parse::<Square>().is_err());
        assert!("e22".parse::<Square>().is_err());
        assert!("i1".parse::<Square>().is_err());
        assert!("-1,3".parse::<Square>().is_err());
    }

    #[test]
    fn shading_alternates() {
        assert!(Square::new(0, 0).is_light());
        assert!(!Square::new(0, 1).is_light());
        assert!(Square::new(7, 7).is_light());
    }
}
