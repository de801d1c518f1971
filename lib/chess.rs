mod bitboard;
mod board;
mod color;
mod figure;
mod file;
mod game;
mod r#move;
mod moves;
mod outcome;
mod perspective;
mod piece;
mod promotion;
mod rank;
mod role;
mod square;
mod trial;

pub use bitboard::*;
pub use board::*;
pub use color::*;
pub use figure::*;
pub use file::*;
pub use game::*;
pub use moves::*;
pub use outcome::*;
pub use perspective::*;
pub use piece::*;
pub use promotion::*;
pub use r#move::*;
pub use rank::*;
pub use role::*;
pub use square::*;
pub use trial::*;
