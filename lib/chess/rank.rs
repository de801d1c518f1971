use crate::chess::Perspective;
use crate::util::Integer;
use derive_more::{Display, Error};
use std::{ops::Sub, str::FromStr};

/// A row on the chess board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(i8)]
pub enum Rank {
    #[display("1")]
    First,
    #[display("2")]
    Second,
    #[display("3")]
    Third,
    #[display("4")]
    Fourth,
    #[display("5")]
    Fifth,
    #[display("6")]
    Sixth,
    #[display("7")]
    Seventh,
    #[display("8")]
    Eighth,
}

impl Rank {
    /// The rank with the given number in the range `(1..=8)`.
    #[inline(always)]
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1..=8 => Some(Rank::new(n as i8 - 1)),
            _ => None,
        }
    }

    /// This rank's number.
    #[inline(always)]
    pub fn to_number(self) -> u8 {
        self.get() as u8 + 1
    }
}

unsafe impl Integer for Rank {
    type Repr = i8;
    const MIN: Self::Repr = Rank::First as _;
    const MAX: Self::Repr = Rank::Eighth as _;
}

impl Perspective for Rank {
    /// This rank from the opponent's perspective.
    #[inline(always)]
    fn flip(&self) -> Self {
        Self::new(self.get() ^ Self::MAX)
    }
}

impl Sub for Rank {
    type Output = i8;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        self.get() - rhs.get()
    }
}

/// The reason why parsing [`Rank`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(
    "failed to parse rank, expected digit in the range `({}..={})`",
    Rank::First,
    Rank::Eighth
)]
pub struct ParseRankError;

impl FromStr for Rank {
    type Err = ParseRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Rank::First),
            "2" => Ok(Rank::Second),
            "3" => Ok(Rank::Third),
            "4" => Ok(Rank::Fourth),
            "5" => Ok(Rank::Fifth),
            "6" => Ok(Rank::Sixth),
            "7" => Ok(Rank::Seventh),
            "8" => Ok(Rank::Eighth),
            _ => Err(ParseRankError),
        }
    }
}
