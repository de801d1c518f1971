use crate::chess::{Bitboard, File, ParseFileError, ParseRankError, Perspective, Rank};
use crate::util::Integer;
use derive_more::{Display, Error, From};
use std::{fmt, str::FromStr};

/// A square on the chess board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(i8)]
#[rustfmt::skip]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

/// The number of rows and columns of the chess board.
pub const BOARD_SIZE: usize = 8;

/// Represents coordinates that fall outside of the chess board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Error)]
#[display("coordinates out of range, expected files `a..=h` and ranks `1..=8`")]
pub struct OutOfRange;

impl Square {
    /// Constructs [`Square`] from a pair of [`File`] and [`Rank`].
    #[inline(always)]
    pub fn new(f: File, r: Rank) -> Self {
        <Self as Integer>::new(f.get() | r.get() << 3)
    }

    /// This square's [`File`].
    #[inline(always)]
    pub fn file(&self) -> File {
        File::new(self.get() & 0b111)
    }

    /// This square's [`Rank`].
    #[inline(always)]
    pub fn rank(&self) -> Rank {
        Rank::new(self.get() >> 3)
    }

    /// Constructs [`Square`] from grid coordinates.
    ///
    /// Row `0` is the eighth rank and column `0` is the a-file.
    pub fn from_grid(row: usize, column: usize) -> Result<Self, OutOfRange> {
        if row >= BOARD_SIZE || column >= BOARD_SIZE {
            return Err(OutOfRange);
        }

        let f = File::new(column as i8);
        let r = Rank::new((BOARD_SIZE - 1 - row) as i8);
        Ok(Square::new(f, r))
    }

    /// This square's grid row, `8 - rank`.
    #[inline(always)]
    pub fn row(&self) -> usize {
        BOARD_SIZE - 1 - self.rank().get() as usize
    }

    /// This square's grid column, `file - 'a'`.
    #[inline(always)]
    pub fn column(&self) -> usize {
        self.file().get() as usize
    }

    /// Constructs [`Square`] from a file letter and a rank number.
    ///
    /// # Example
    /// ```
    /// # use lib::chess::*;
    /// assert_eq!(Square::from_algebraic('e', 4), Ok(Square::E4));
    /// assert_eq!(Square::from_algebraic('i', 4), Err(OutOfRange));
    /// ```
    pub fn from_algebraic(file: char, rank: u8) -> Result<Self, OutOfRange> {
        let f = File::from_char(file).ok_or(OutOfRange)?;
        let r = Rank::from_number(rank).ok_or(OutOfRange)?;
        Ok(Square::new(f, r))
    }

    /// This square's file letter and rank number.
    #[inline(always)]
    pub fn to_algebraic(&self) -> (char, u8) {
        (self.file().to_char(), self.rank().to_number())
    }

    /// The square reached by stepping over files and ranks, if still on the board.
    #[inline(always)]
    pub fn offset(&self, df: i8, dr: i8) -> Option<Self> {
        let f = File::try_new(self.file().get() + df)?;
        let r = Rank::try_new(self.rank().get() + dr)?;
        Some(Square::new(f, r))
    }

    /// Returns a [`Bitboard`] that only contains this square.
    #[inline(always)]
    pub fn bitboard(self) -> Bitboard {
        Bitboard::new(1 << self.get())
    }
}

unsafe impl Integer for Square {
    type Repr = i8;
    const MIN: Self::Repr = Square::A1 as _;
    const MAX: Self::Repr = Square::H8 as _;
}

impl Perspective for Square {
    /// Flips this square's [`Rank`].
    #[inline(always)]
    fn flip(&self) -> Self {
        <Self as Integer>::new(self.get() ^ Square::A8.get())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.file(), f)?;
        fmt::Display::fmt(&self.rank(), f)?;
        Ok(())
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseSquareError {
    #[display("failed to parse square")]
    InvalidFile(ParseFileError),
    #[display("failed to parse square")]
    InvalidRank(ParseRankError),
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let i = s.char_indices().nth(1).map_or_else(|| s.len(), |(i, _)| i);
        Ok(Square::new(s[..i].parse()?, s[i..].parse()?))
    }
}
