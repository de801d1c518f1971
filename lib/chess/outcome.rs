use crate::chess::Color;
use derive_more::Display;

/// One of the possible outcomes of a chess match.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Outcome {
    #[display("checkmate by the {_0} player")]
    Checkmate(Color),
}

impl Outcome {
    /// The winning side.
    pub fn winner(&self) -> Color {
        match *self {
            Outcome::Checkmate(c) => c,
        }
    }
}
