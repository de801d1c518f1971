use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::{Game, Move, Square};
use tracing::instrument;

/// Prints the squares a piece may move to.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Moves {
    /// The square the piece stands on, e.g. `g1`.
    square: Square,

    /// Moves to play from the initial position beforehand, e.g. `e2e4 e7e5`.
    #[clap(short, long, num_args = 1..)]
    after: Vec<Move>,
}

impl Moves {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut game = Game::default();
        for Move(whence, whither) in self.after {
            game.perform_move(whence, whither)?;
        }

        let moves = game.possible_moves(self.square)?;
        println!("{:?}", moves);

        let squares: Vec<_> = moves.into_iter().map(|s| s.to_string()).collect();
        println!("{}", squares.join(" "));

        Ok(())
    }
}
