use crate::chess::{File, Rank, Square, BOARD_SIZE};
use crate::util::Integer;
use derive_more::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign};
use derive_more::{Constructor, Deref, Not};
use std::fmt::{self, Write};

/// A set of squares on a chess board.
#[derive(
    Default,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Hash,
    Constructor,
    Deref,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(transparent)]
pub struct Bitboard(u64);

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('\n')?;
        for rank in Rank::iter().rev() {
            for file in File::iter() {
                let sq = Square::new(file, rank);
                f.write_char(if self.contains(sq) { '■' } else { '◻' })?;
                f.write_char(if file < File::H { ' ' } else { '\n' })?;
            }
        }

        Ok(())
    }
}

impl Bitboard {
    /// An empty board.
    #[inline(always)]
    pub const fn empty() -> Self {
        Bitboard(0)
    }

    /// A full board.
    #[inline(always)]
    pub const fn full() -> Self {
        Bitboard(0xFFFFFFFFFFFFFFFF)
    }

    /// Fills out squares on a bitboard.
    ///
    /// Starting from a square, fills out the squares by stepping on the board in each direction.
    /// Movement in a direction stops when an occupied square is reached.
    ///
    /// # Example
    /// ```
    /// # use lib::chess::*;
    /// assert_eq!(
    ///     Vec::from_iter(Bitboard::fill(Square::E2, &[(-1, 2), (1, -1)], Square::C6.bitboard())),
    ///     vec![Square::F1, Square::E2, Square::D4, Square::C6]
    /// );
    /// ```
    pub fn fill(sq: Square, steps: &[(i8, i8)], occupied: Bitboard) -> Bitboard {
        let mut bitboard = sq.bitboard();
        for &(df, dr) in steps {
            let mut next = sq.offset(df, dr);
            while let Some(s) = next {
                bitboard = bitboard.with(s);
                next = match occupied.contains(s) {
                    true => None,
                    false => s.offset(df, dr),
                };
            }
        }

        bitboard
    }

    /// Bitboard with squares in the open segment between two squares on the same rank.
    ///
    /// # Example
    /// ```
    /// # use lib::chess::*;
    /// assert_eq!(
    ///     Vec::from_iter(Bitboard::between(Square::E1, Square::A1)),
    ///     vec![Square::B1, Square::C1, Square::D1]
    /// );
    /// ```
    pub fn between(whence: Square, whither: Square) -> Self {
        if whence == whither || whence.rank() != whither.rank() {
            return Bitboard::empty();
        }

        let step = (whither.file() - whence.file()).signum();
        let bb = Bitboard::fill(whence, &[(step, 0)], whither.bitboard());
        bb.without(whence).without(whither)
    }

    /// The number of [`Square`]s in the set.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as _
    }

    /// Whether the board is empty.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether this [`Square`] is in the set.
    #[inline(always)]
    pub fn contains(&self, sq: Square) -> bool {
        !sq.bitboard().intersection(*self).is_empty()
    }

    /// Adds a [`Square`] to this bitboard.
    #[inline(always)]
    pub fn with(&self, sq: Square) -> Self {
        sq.bitboard().union(*self)
    }

    /// Removes a [`Square`]s from this bitboard.
    #[inline(always)]
    pub fn without(&self, sq: Square) -> Self {
        sq.bitboard().inverse().intersection(*self)
    }

    /// The set of [`Square`]s not in this bitboard.
    #[inline(always)]
    pub const fn inverse(&self) -> Self {
        Bitboard(!self.0)
    }

    /// The set of [`Square`]s in both bitboards.
    #[inline(always)]
    pub const fn intersection(&self, bb: Bitboard) -> Self {
        Bitboard(self.0 & bb.0)
    }

    /// The set of [`Square`]s in either bitboard.
    #[inline(always)]
    pub const fn union(&self, bb: Bitboard) -> Self {
        Bitboard(self.0 | bb.0)
    }

    /// An iterator over the [`Square`]s in this bitboard.
    #[inline(always)]
    pub const fn iter(&self) -> Squares {
        Squares::new(*self)
    }

    /// This set as a grid of flags indexed by [row][`Square::row`] and [column][`Square::column`].
    pub fn grid(&self) -> [[bool; BOARD_SIZE]; BOARD_SIZE] {
        let mut grid = [[false; BOARD_SIZE]; BOARD_SIZE];
        for sq in *self {
            grid[sq.row()][sq.column()] = true;
        }

        grid
    }
}

impl From<Square> for Bitboard {
    #[inline(always)]
    fn from(sq: Square) -> Self {
        sq.bitboard()
    }
}

impl FromIterator<Square> for Bitboard {
    #[inline(always)]
    fn from_iter<I: IntoIterator<Item = Square>>(squares: I) -> Self {
        squares.into_iter().fold(Bitboard::empty(), |bb, sq| bb.with(sq))
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = Squares;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        Squares::new(self)
    }
}

/// An iterator over the [`Square`]s in a [`Bitboard`].
#[derive(Debug, Constructor)]
pub struct Squares(Bitboard);

impl Iterator for Squares {
    type Item = Square;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            None
        } else {
            let sq = <Square as Integer>::new(self.0.trailing_zeros() as i8);
            self.0 ^= sq.bitboard();
            Some(sq)
        }
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl ExactSizeIterator for Squares {
    #[inline(always)]
    fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[test]
    fn empty_constructs_board_with_no_squares() {
        assert_eq!(Bitboard::empty().iter().count(), 0);
    }

    #[test]
    fn full_constructs_board_with_all_squares() {
        assert_eq!(Bitboard::full().iter().count(), 64);
    }

    #[proptest]
    fn fill_contains_starting_square(sq: Square, occupied: Bitboard) {
        assert!(Bitboard::fill(sq, &[(1, 1), (-1, 0)], occupied).contains(sq));
    }

    #[test]
    fn fill_stops_at_first_occupied_square() {
        let occupied = Square::E5.bitboard() | Square::E7.bitboard();
        assert_eq!(
            Vec::from_iter(Bitboard::fill(Square::E2, &[(0, 1)], occupied)),
            vec![Square::E2, Square::E3, Square::E4, Square::E5]
        );
    }

    #[test]
    fn between_is_empty_for_squares_on_different_ranks() {
        assert_eq!(Bitboard::between(Square::E1, Square::E8), Bitboard::empty());
    }

    #[proptest]
    fn between_does_not_contain_either_square(a: Square, f: File) {
        let b = Square::new(f, a.rank());
        assert!(!Bitboard::between(a, b).contains(a));
        assert!(!Bitboard::between(a, b).contains(b));

        let distance = (a.file() - b.file()).unsigned_abs();
        assert_eq!(
            Bitboard::between(a, b).len(),
            distance.saturating_sub(1) as usize
        );
    }

    #[proptest]
    fn len_returns_number_of_squares_on_the_board(bb: Bitboard) {
        assert_eq!(bb.len() as u32, bb.count_ones());
    }

    #[proptest]
    fn contains_checks_whether_square_is_on_the_board(bb: Bitboard) {
        for sq in bb {
            assert!(bb.contains(sq));
        }
    }

    #[proptest]
    fn with_adds_square_to_set(bb: Bitboard, sq: Square) {
        assert!(bb.with(sq).contains(sq));
    }

    #[proptest]
    fn without_removes_square_to_set(bb: Bitboard, sq: Square) {
        assert!(!bb.without(sq).contains(sq));
    }

    #[proptest]
    fn inverse_returns_squares_not_in_set(bb: Bitboard) {
        let pp = bb.inverse();
        for sq in Square::iter() {
            assert_ne!(bb.contains(sq), pp.contains(sq));
        }
    }

    #[proptest]
    fn intersection_returns_squares_in_both_sets(a: Bitboard, b: Bitboard) {
        let c = a.intersection(b);
        for sq in Square::iter() {
            assert_eq!(c.contains(sq), a.contains(sq) && b.contains(sq));
        }
    }

    #[proptest]
    fn union_returns_squares_in_either_set(a: Bitboard, b: Bitboard) {
        let c = a.union(b);
        for sq in Square::iter() {
            assert_eq!(c.contains(sq), a.contains(sq) || b.contains(sq));
        }
    }

    #[proptest]
    fn grid_flags_every_square_in_the_set(bb: Bitboard) {
        let grid = bb.grid();
        for sq in Square::iter() {
            assert_eq!(grid[sq.row()][sq.column()], bb.contains(sq));
        }
    }

    #[proptest]
    fn can_iterate_over_squares_in_a_bitboard(bb: Bitboard, sq: Square) {
        let v = Vec::from_iter(bb);
        assert_eq!(bb.iter().len(), v.len());
        assert_eq!(bb.contains(sq), v.contains(&sq));
    }

    #[proptest]
    fn collecting_squares_is_the_inverse_of_iterating(bb: Bitboard) {
        assert_eq!(Bitboard::from_iter(bb), bb);
    }
}
