use crate::chess::{Color, Piece, Role};
use derive_more::Display;

/// A [`Piece`] placed on the board along with how many times it has moved.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display("{piece}")]
pub struct Figure {
    pub piece: Piece,
    pub moves: u32,
}

impl Figure {
    /// A figure that has never moved.
    #[inline(always)]
    pub fn new(piece: Piece) -> Self {
        Figure { piece, moves: 0 }
    }

    /// This figure's [`Color`].
    #[inline(always)]
    pub fn color(&self) -> Color {
        self.piece.color()
    }

    /// This figure's [`Role`].
    #[inline(always)]
    pub fn role(&self) -> Role {
        self.piece.role()
    }

    /// Whether this figure has never moved.
    #[inline(always)]
    pub fn is_unmoved(&self) -> bool {
        self.moves == 0
    }
}

impl From<Piece> for Figure {
    #[inline(always)]
    fn from(piece: Piece) -> Self {
        Figure::new(piece)
    }
}
