use crate::chess::{Figure, Square};
use derive_more::{Debug, Deref, Display, Error};
use std::str::FromStr;

/// A chess move in [pure coordinate notation].
///
/// [pure coordinate notation]: https://www.chessprogramming.org/Algebraic_Chess_Notation#Pure_coordinate_notation
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[debug("Move({self})")]
#[display("{_0}{_1}")]
pub struct Move(pub Square, pub Square);

impl Move {
    /// The source [`Square`].
    #[inline(always)]
    pub fn whence(&self) -> Square {
        self.0
    }

    /// The destination [`Square`].
    #[inline(always)]
    pub fn whither(&self) -> Square {
        self.1
    }
}

/// The reason why the string is not a valid move.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display("failed to parse move, expected a pair of squares like `e2e4`")]
pub struct ParseMoveError;

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let i = s.char_indices().nth(2).map_or_else(|| s.len(), |(i, _)| i);
        let whence = s[..i].parse().map_err(|_| ParseMoveError)?;
        let whither = s[i..].parse().map_err(|_| ParseMoveError)?;
        Ok(Move(whence, whither))
    }
}

/// The side effects of a [`Move`] beyond relocating the moved piece.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MoveKind {
    /// Relocates a single piece, possibly capturing on the destination.
    Normal,
    /// The king moves two files and the rook follows as described by the inner [`Move`].
    Castling(Move),
    /// The pawn captures the enemy pawn standing on the given [`Square`].
    EnPassant(Square),
}

/// Everything needed to take back a [`Move`] applied to a [`Board`][`crate::chess::Board`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deref)]
pub struct MoveRecord(#[deref] pub Move, pub MoveKind, pub Option<(Figure, Square)>);

impl MoveRecord {
    /// The [`MoveKind`] of the move played.
    #[inline(always)]
    pub fn kind(&self) -> MoveKind {
        self.1
    }

    /// The [`Figure`] captured and the [`Square`] it was captured on, if any.
    #[inline(always)]
    pub fn capture(&self) -> Option<(Figure, Square)> {
        self.2
    }

    /// Whether this is a castling move.
    #[inline(always)]
    pub fn is_castling(&self) -> bool {
        matches!(self.kind(), MoveKind::Castling(_))
    }

    /// Whether this is an en passant capture move.
    #[inline(always)]
    pub fn is_en_passant(&self) -> bool {
        matches!(self.kind(), MoveKind::EnPassant(_))
    }
}
