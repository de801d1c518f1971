use crate::chess::Color;

/// Board coordinates that are mirrored between the sides.
///
/// Values are written from white's point of view, e.g. [`Rank::Second`][`crate::chess::Rank`]
/// is where pawns start, and then translated for the side that moves.
///
/// # Example
/// ```
/// # use lib::chess::*;
/// assert_eq!(Rank::Second.perspective(Color::Black), Rank::Seventh);
/// assert_eq!(Square::E1.perspective(Color::Black), Square::E8);
/// ```
pub trait Perspective: Copy {
    /// Mirrors across the middle of the board.
    fn flip(&self) -> Self;

    /// Translates from white's point of view to `side`'s.
    #[inline(always)]
    fn perspective(&self, side: Color) -> Self {
        match side {
            Color::White => *self,
            Color::Black => self.flip(),
        }
    }
}
