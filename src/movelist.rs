use crate::square::Square;
use arrayvec::ArrayVec;

// A queen in the middle of an empty board reaches 27 squares, nothing else
// gets close to that
pub const MAX_TARGETS: usize = 32;

/// Destination squares of a single piece, in generation order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SquareList(ArrayVec<Square, MAX_TARGETS>);

impl SquareList {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn push(&mut self, sq: Square) {
        self.0.push(sq)
    }
    pub fn get(&self, i: usize) -> Option<&Square> {
        self.0.get(i)
    }
    pub fn contains(&self, sq: Square) -> bool {
        self.0.contains(&sq)
    }
    pub fn clear(&mut self) {
        self.0.clear()
    }
    pub fn retain<F: FnMut(&mut Square) -> bool>(&mut self, f: F) {
        self.0.retain(f)
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Square> {
        self.0.iter()
    }
    pub fn as_slice(&self) -> &[Square] {
        &self.0
    }
}

impl std::fmt::Display for SquareList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        let mut s = String::new();
        for sq in self.0.iter() {
            s.push_str(&format!("{} ", sq))
        }
        write!(f, "{}", s.trim())
    }
}

impl<'a> IntoIterator for &'a SquareList {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Square> for SquareList {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut list = SquareList::default();
        for sq in iter {
            list.push(sq)
        }
        list
    }
}
