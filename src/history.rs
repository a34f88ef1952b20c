use crate::piece::{Color, PieceKind};
use crate::square::Square;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub move_number: u32,
    pub from: Square,
    pub to: Square,
    pub piece: PieceKind,
    pub color: Color,
    pub captured: Option<PieceKind>,
}

impl MoveRecord {
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// Renders one side's half of a history line, e.g. `Pe2 → Pe4`
impl Display for MoveRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let letter = self.piece.letter();
        write!(f, "{}{} → {}{}", letter, self.from, letter, self.to)
    }
}

/// Append-only log of the moves played so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    entries: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn new() -> MoveHistory {
        MoveHistory { entries: Vec::with_capacity(128) }
    }

    /// Full move number the next entry will carry, white and black share one
    pub fn next_move_number(&self) -> u32 {
        (self.entries.len() / 2) as u32 + 1
    }

    pub fn record(&mut self, from: Square, to: Square, piece: PieceKind, color: Color, captured: Option<PieceKind>) -> MoveRecord {
        let entry = MoveRecord {
            move_number: self.next_move_number(),
            from,
            to,
            piece,
            color,
            captured,
        };
        self.entries.push(entry);
        entry
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn last(&self) -> Option<&MoveRecord> {
        self.entries.last()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, MoveRecord> {
        self.entries.iter()
    }

    /// Entries grouped by full move: white's half, then black's if played
    pub fn pairs(&self) -> impl Iterator<Item = (&MoveRecord, Option<&MoveRecord>)> {
        self.entries.chunks(2).map(|pair| (&pair[0], pair.get(1)))
    }

    /// One line per full move, `1. Pe2 → Pe4   Pe7 → Pe5`
    pub fn lines(&self) -> Vec<String> {
        self.pairs()
            .map(|(white, black)| match black {
                Some(b) => format!("{}. {}   {}", white.move_number, white, b),
                None => format!("{}. {}", white.move_number, white),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Color::{Black, White};
    use crate::piece::PieceKind::{Knight, Pawn};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn move_numbers_are_shared_per_full_move() {
        let mut h = MoveHistory::new();
        assert_eq!(h.record(sq("e2"), sq("e4"), Pawn, White, None).move_number, 1);
        assert_eq!(h.record(sq("e7"), sq("e5"), Pawn, Black, None).move_number, 1);
        assert_eq!(h.record(sq("g1"), sq("f3"), Knight, White, None).move_number, 2);
        assert_eq!(h.len(), 3);
    }

    #[test]
    fn lines_pair_white_and_black() {
        let mut h = MoveHistory::new();
        h.record(sq("e2"), sq("e4"), Pawn, White, None);
        h.record(sq("e7"), sq("e5"), Pawn, Black, None);
        h.record(sq("g1"), sq("f3"), Knight, White, None);
        assert_eq!(h.lines(), vec!["1. Pe2 → Pe4   Pe7 → Pe5", "2. Ng1 → Nf3"]);
    }
}
