//! A set of squares packed into a 64-bit word, one bit per board index.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

use crate::square::Square;

/// A set of squares: bit `i` is set when square index `i` is a member.
///
/// This is the destination set returned by move generation. Iteration
/// yields squares in index order (a8 first, h1 last).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SquareSet(u64);

impl SquareSet {
    /// The set with no squares.
    pub const EMPTY: SquareSet = SquareSet(0);

    /// Return `true` if no square is a member.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of member squares.
    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 & (1u64 << sq.index())) != 0
    }

    /// Return a new set with the given square added.
    #[inline]
    pub const fn with(self, sq: Square) -> SquareSet {
        SquareSet(self.0 | (1u64 << sq.index()))
    }

    #[inline]
    pub fn insert(&mut self, sq: Square) {
        self.0 |= 1u64 << sq.index();
    }

    /// Iterate over member squares in index order.
    #[inline]
    pub const fn iter(self) -> SquareSetIter {
        SquareSetIter(self.0)
    }
}

impl BitOr for SquareSet {
    type Output = SquareSet;
    #[inline]
    fn bitor(self, rhs: SquareSet) -> SquareSet {
        SquareSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for SquareSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: SquareSet) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for SquareSet {
    type Output = SquareSet;
    #[inline]
    fn bitand(self, rhs: SquareSet) -> SquareSet {
        SquareSet(self.0 & rhs.0)
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> SquareSet {
        let mut set = SquareSet::EMPTY;
        for sq in iter {
            set.insert(sq);
        }
        set
    }
}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = SquareSetIter;

    fn into_iter(self) -> SquareSetIter {
        self.iter()
    }
}

/// Iterator over the squares of a [`SquareSet`], lowest index first.
#[derive(Debug, Clone)]
pub struct SquareSetIter(u64);

impl Iterator for SquareSetIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            let sq = Square::from_index_unchecked(self.0.trailing_zeros() as u8);
            self.0 &= self.0 - 1;
            Some(sq)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.0.count_ones() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for SquareSetIter {}

impl fmt::Debug for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, sq) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{sq}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::SquareSet;
    use crate::square::Square;

    #[test]
    fn insert_and_contains() {
        let mut set = SquareSet::EMPTY;
        assert!(set.is_empty());
        set.insert(Square::E4);
        assert!(set.contains(Square::E4));
        assert!(!set.contains(Square::D4));
        assert_eq!(set.len(), 1);
        set.insert(Square::E4);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn iterates_in_index_order() {
        let set = SquareSet::EMPTY
            .with(Square::A1)
            .with(Square::E4)
            .with(Square::H8);
        let squares: Vec<_> = set.iter().collect();
        assert_eq!(squares, vec![Square::H8, Square::E4, Square::A1]);
        assert_eq!(set.iter().len(), 3);
    }

    #[test]
    fn union_and_collect() {
        let a: SquareSet = [Square::A1, Square::B1].into_iter().collect();
        let b: SquareSet = [Square::B1, Square::C1].into_iter().collect();
        assert_eq!((a | b).len(), 3);
        assert_eq!((a & b).iter().collect::<Vec<_>>(), vec![Square::B1]);
    }

    #[test]
    fn display_lists_squares() {
        let set = SquareSet::EMPTY.with(Square::E3).with(Square::E4);
        assert_eq!(format!("{set}"), "e4 e3");
        assert_eq!(format!("{}", SquareSet::EMPTY), "");
    }
}
