use crate::chess::{Color, Role};
use std::fmt::{self, Formatter, Write};

/// A chess [piece][`Role`] of a certain [`Color`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Piece(pub Color, pub Role);

impl Piece {
    /// This piece's [`Color`].
    #[inline(always)]
    pub fn color(&self) -> Color {
        self.0
    }

    /// This piece's [`Role`].
    #[inline(always)]
    pub fn role(&self) -> Role {
        self.1
    }
}

/// Prints the piece letter, upper case for white and lower case for black.
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let letter = self.role().letter();
        match self.color() {
            Color::White => f.write_char(letter.to_ascii_uppercase()),
            Color::Black => f.write_char(letter),
        }
    }
}
