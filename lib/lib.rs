/// Chess domain types and the rules of a match.
pub mod chess;
/// Assorted utilities.
pub mod util;
