use crate::io::Io;
use anyhow::Error as Anyhow;
use clap::Parser;
use derive_more::{Display, Error, From};
use lib::chess::*;
use std::io::{self, stdin, stdout, Read, Write};
use std::str::FromStr;
use tracing::{info, instrument, warn};

/// A match of chess between two players taking turns on the standard input.
///
/// Moves are entered in coordinate notation, e.g. `e2e4`. Other commands are
/// `moves <square>`, `promote <b|n|r|q>`, `board` and `quit`.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Command {
    Move(Move),
    Moves(Square),
    Promote(Promotion),
    Board,
    Quit,
}

/// The reason why parsing a [`Command`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
enum ParseCommandError {
    #[display("{_0}")]
    Move(ParseMoveError),
    #[display("{_0}")]
    Square(ParseSquareError),
    #[display("{_0}")]
    Promotion(ParsePromotionError),
    #[display("unrecognized command, expected a move, `moves`, `promote`, `board` or `quit`")]
    #[from(ignore)]
    Unrecognized,
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some("board"), None, None) => Ok(Command::Board),
            (Some("quit"), None, None) => Ok(Command::Quit),
            (Some("moves"), Some(sq), None) => Ok(Command::Moves(sq.parse()?)),
            (Some("promote"), Some(p), None) => Ok(Command::Promote(p.parse()?)),
            (Some(m), None, None) => Ok(Command::Move(m.parse()?)),
            _ => Err(ParseCommandError::Unrecognized),
        }
    }
}

fn report<W: Write, R: Read>(io: &mut Io<W, R>, game: &Game) -> io::Result<()> {
    io.send(game.board())?;

    if let Some(sq) = game.pending_promotion() {
        io.send(format_args!("pawn on {sq} promoted to a queen"))?;
    }

    match game.outcome() {
        Some(outcome) => io.send(outcome),
        None if game.is_check() => io.send(format_args!(
            "turn {}, {} to move and in check",
            game.turn(),
            game.player()
        )),
        None => io.send(format_args!("turn {}, {} to move", game.turn(), game.player())),
    }
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut io = Io::new(stdout().lock(), stdin().lock());
        let mut game = Game::default();

        report(&mut io, &game)?;
        io.flush()?;

        while let Some(line) = io.recv()? {
            if line.trim().is_empty() {
                continue;
            }

            match line.parse() {
                Err(e) => warn!("{}", e),
                Ok(Command::Quit) => break,
                Ok(Command::Board) => io.send(game.board())?,

                Ok(Command::Moves(sq)) => match game.possible_moves(sq) {
                    Err(e) => warn!("{}", e),
                    Ok(moves) => {
                        let squares: Vec<_> = moves.into_iter().map(|s| s.to_string()).collect();
                        io.send(squares.join(" "))?;
                    }
                },

                Ok(Command::Move(Move(whence, whither))) => {
                    match game.perform_move(whence, whither) {
                        Err(e) => warn!("{}", e),
                        Ok(captured) => {
                            if let Some(piece) = captured {
                                info!(%piece, square = %whither, "captured");
                            }

                            report(&mut io, &game)?;
                        }
                    }
                }

                Ok(Command::Promote(p)) => match game.promote(p) {
                    Err(e) => warn!("{}", e),
                    Ok(_) => report(&mut io, &game)?,
                },
            }

            io.flush()?;
        }

        Ok(())
    }
}
