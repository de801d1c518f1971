use crate::chess::Role;
use derive_more::{Display, Error};
use std::str::FromStr;

/// The [`Role`] a pawn may be promoted to.
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Promotion {
    #[display("n")]
    Knight,
    #[display("b")]
    Bishop,
    #[display("r")]
    Rook,
    #[default]
    #[display("q")]
    Queen,
}

impl From<Promotion> for Role {
    #[inline(always)]
    fn from(p: Promotion) -> Self {
        match p {
            Promotion::Knight => Role::Knight,
            Promotion::Bishop => Role::Bishop,
            Promotion::Rook => Role::Rook,
            Promotion::Queen => Role::Queen,
        }
    }
}

/// The reason why parsing [`Promotion`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display("failed to parse promotion, expected one of `B`, `N`, `Q` or `R`")]
pub struct ParsePromotionError;

impl FromStr for Promotion {
    type Err = ParsePromotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "n" | "N" => Ok(Promotion::Knight),
            "b" | "B" => Ok(Promotion::Bishop),
            "r" | "R" => Ok(Promotion::Rook),
            "q" | "Q" => Ok(Promotion::Queen),
            _ => Err(ParsePromotionError),
        }
    }
}
