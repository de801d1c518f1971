use crate::chess::*;
use arrayvec::ArrayVec;
use derive_more::{Display, Error, From};
use tracing::{debug, instrument};

/// The reason why a [`Move`] was rejected.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum IllegalMove {
    #[display("there is no piece on square `{_0}`")]
    NoPieceAtSource(#[error(not(source))] Square),
    #[display("the piece on square `{_0}` belongs to the opponent")]
    WrongOwner(#[error(not(source))] Square),
    #[display("the piece on square `{_0}` has no possible moves")]
    NoLegalMoves(#[error(not(source))] Square),
    #[display("move `{_0}` is not possible in this position")]
    IllegalTarget(#[error(not(source))] Move),
    #[display("move `{_0}` leaves the king in check")]
    SelfCheck(#[error(not(source))] Move),
    #[display("the game is over")]
    GameOver,
}

/// Represents a board where one of the sides has no king.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display("the {_0} king is missing from the board")]
pub struct NoKingOnBoard(#[error(not(source))] pub Color);

/// Represents an attempt to promote while no pawn is awaiting promotion.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display("there is no pawn awaiting promotion")]
pub struct NoPendingPromotion;

/// Any of the errors reported by a [`Game`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Error, From)]
pub enum GameError {
    #[display("{_0}")]
    IllegalMove(IllegalMove),
    #[display("{_0}")]
    NoPendingPromotion(NoPendingPromotion),
    #[display("{_0}")]
    NoKingOnBoard(NoKingOnBoard),
}

/// Whether the king of `side` is attacked by any of its opponent's pieces.
fn in_check(
    board: &Board,
    side: Color,
    en_passant: Option<Square>,
) -> Result<bool, NoKingOnBoard> {
    let king = board.king(side).ok_or(NoKingOnBoard(side))?;
    Ok(board
        .by_color(!side)
        .into_iter()
        .any(|sq| possible_moves(board, sq, en_passant).contains(king)))
}

/// Whether `side` is in check and no move of theirs gets them out of it.
fn in_checkmate(
    board: &mut Board,
    side: Color,
    en_passant: Option<Square>,
) -> Result<bool, NoKingOnBoard> {
    if !in_check(board, side, en_passant)? {
        return Ok(false);
    }

    for whence in board.by_color(side) {
        for whither in possible_moves(board, whence, en_passant) {
            let Some(trial) = Trial::new(board, Move(whence, whither)) else {
                continue;
            };

            if !in_check(&trial, side, en_passant)? {
                return Ok(false);
            }
        }
    }

    Ok(true)
}

/// A match of chess between two players.
///
/// Tracks the [`Board`] along with everything else the rules depend on: whose turn it is,
/// the pawn that may be captured en passant and the pawn awaiting promotion.
///
/// Once a game is over, [`Game::player`] is the winning side.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Game {
    board: Board,
    turn: u32,
    player: Color,
    check: bool,
    checkmate: bool,
    en_passant: Option<Square>,
    promotion: Option<Square>,
    captured: ArrayVec<Piece, 62>,
}

impl Default for Game {
    fn default() -> Self {
        Game {
            board: Board::default(),
            turn: 1,
            player: Color::White,
            check: false,
            checkmate: false,
            en_passant: None,
            promotion: None,
            captured: ArrayVec::new(),
        }
    }
}

impl Game {
    /// Starts a game from an arbitrary [`Board`] with `player` to move.
    ///
    /// Both sides must have a king on the board.
    ///
    /// # Example
    /// ```
    /// # use lib::chess::*;
    /// let mut board = Board::empty();
    /// board.place(Piece(Color::White, Role::King), Square::E1);
    /// assert_eq!(Game::new(board, Color::White), Err(NoKingOnBoard(Color::Black)));
    /// ```
    pub fn new(mut board: Board, player: Color) -> Result<Self, NoKingOnBoard> {
        for side in [Color::White, Color::Black] {
            board.king(side).ok_or(NoKingOnBoard(side))?;
        }

        let check = in_check(&board, player, None)?;
        let checkmate = check && in_checkmate(&mut board, player, None)?;

        Ok(Game {
            board,
            turn: 1,
            player: if checkmate { !player } else { player },
            check,
            checkmate,
            en_passant: None,
            promotion: None,
            captured: ArrayVec::new(),
        })
    }

    /// The current position.
    #[inline(always)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current position as a grid of pieces indexed by row and column.
    #[inline(always)]
    pub fn pieces(&self) -> [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE] {
        self.board.grid()
    }

    /// The current turn, starting at 1.
    #[inline(always)]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The side to move.
    #[inline(always)]
    pub fn player(&self) -> Color {
        self.player
    }

    /// Whether the last move put the opponent in check.
    #[inline(always)]
    pub fn is_check(&self) -> bool {
        self.check
    }

    /// Whether the last move put the opponent in checkmate.
    #[inline(always)]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    /// The pawn that may be captured en passant in this turn, if any.
    #[inline(always)]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// The square of the pawn promoted by the last move, if any.
    #[inline(always)]
    pub fn pending_promotion(&self) -> Option<Square> {
        self.promotion
    }

    /// The pieces captured so far, in order.
    #[inline(always)]
    pub fn captured(&self) -> &[Piece] {
        &self.captured
    }

    /// The [`Outcome`] of the game if it is over.
    #[inline(always)]
    pub fn outcome(&self) -> Option<Outcome> {
        self.checkmate.then_some(Outcome::Checkmate(self.player))
    }

    /// Whether the king of `side` is currently attacked.
    pub fn is_in_check(&self, side: Color) -> Result<bool, NoKingOnBoard> {
        in_check(&self.board, side, self.en_passant)
    }

    /// Whether `side` is currently in checkmate.
    pub fn is_in_checkmate(&self, side: Color) -> Result<bool, NoKingOnBoard> {
        let mut board = self.board;
        in_checkmate(&mut board, side, self.en_passant)
    }

    /// The squares the piece on `whence` could move to.
    ///
    /// Moves that would leave the mover's own king in check are included, they are only
    /// rejected by [`Game::perform_move`].
    pub fn possible_moves(&self, whence: Square) -> Result<Bitboard, IllegalMove> {
        if !self.board.is_occupied(whence) {
            return Err(IllegalMove::NoPieceAtSource(whence));
        }

        let moves = possible_moves(&self.board, whence, self.en_passant);
        if moves.is_empty() {
            return Err(IllegalMove::NoLegalMoves(whence));
        }

        Ok(moves)
    }

    /// Plays a move for the side to move, returning the captured [`Piece`], if any.
    ///
    /// Pawns that reach the last rank are promoted to a queen, which may later be exchanged
    /// for another role by [`Game::promote`]. The game is left untouched if an error occurs.
    #[instrument(level = "trace", skip(self), ret, err)]
    pub fn perform_move(
        &mut self,
        whence: Square,
        whither: Square,
    ) -> Result<Option<Piece>, GameError> {
        let m = Move(whence, whither);

        if self.checkmate {
            return Err(IllegalMove::GameOver.into());
        }

        let figure = self.board[whence].ok_or(IllegalMove::NoPieceAtSource(whence))?;
        if figure.color() != self.player {
            return Err(IllegalMove::WrongOwner(whence).into());
        }

        let moves = self.possible_moves(whence)?;
        let is_king = self.board[whither].is_some_and(|f| f.role() == Role::King);
        if !moves.contains(whither) || is_king {
            return Err(IllegalMove::IllegalTarget(m).into());
        }

        let mover = self.player;
        let trial = Trial::new(&mut self.board, m).ok_or(IllegalMove::NoPieceAtSource(whence))?;
        if in_check(&trial, mover, self.en_passant)? {
            debug!(%m, "move would expose the king");
            return Err(IllegalMove::SelfCheck(m).into());
        }

        let record = trial.commit();
        let captured = record.capture().map(|(f, _)| f.piece);
        self.captured.extend(captured);

        self.promotion = None;
        if figure.role() == Role::Pawn && whither.rank() == Rank::Eighth.perspective(mover) {
            let queen = Figure {
                piece: Piece(mover, Role::Queen),
                moves: figure.moves + 1,
            };

            self.board.place(queen, whither);
            self.promotion = Some(whither);
            debug!(square = %whither, "pawn promoted to a queen");
        }

        // The marker must be current before concluding, en passant replies are escapes too.
        let is_double_step = (whither.rank() - whence.rank()).abs() == 2;
        self.en_passant = (figure.role() == Role::Pawn && is_double_step).then_some(whither);

        self.conclude(mover)?;
        Ok(captured)
    }

    /// Exchanges the queen of the pending promotion for another role.
    ///
    /// Check and checkmate are evaluated again, since the new piece may attack different
    /// squares.
    #[instrument(level = "trace", skip(self), ret, err)]
    pub fn promote(&mut self, promotion: Promotion) -> Result<Piece, GameError> {
        let sq = self.promotion.ok_or(NoPendingPromotion)?;
        let mut figure = self.board[sq].ok_or(NoPendingPromotion)?;
        let mover = figure.color();

        figure.piece = Piece(mover, promotion.into());
        self.board.place(figure, sq);
        self.promotion = None;

        if self.player != mover {
            self.turn -= 1;
            self.player = mover;
        }

        self.conclude(mover)?;
        Ok(figure.piece)
    }

    /// Evaluates the position after `mover` played and hands the turn over, unless the game
    /// is over.
    fn conclude(&mut self, mover: Color) -> Result<(), NoKingOnBoard> {
        let opponent = !mover;
        self.check = in_check(&self.board, opponent, self.en_passant)?;
        self.checkmate = self.check && in_checkmate(&mut self.board, opponent, self.en_passant)?;

        if self.checkmate {
            self.player = mover;
            debug!(winner = %mover, turn = self.turn, "checkmate");
        } else {
            if self.check {
                debug!(side = %opponent, turn = self.turn, "check");
            }

            self.turn += 1;
            self.player = opponent;
        }

        Ok(())
    }
}

#[cfg(test)]
impl Game {
    /// Plays a move picked among the possible moves of the side to move, resolving any
    /// promotion with a randomly picked role.
    ///
    /// Returns `false` once the game is over or the side to move cannot move any piece.
    pub(crate) fn play_selected(
        &mut self,
        s: proptest::sample::Selector,
        t: proptest::sample::Selector,
    ) -> bool {
        let movable = self
            .board
            .by_color(self.player)
            .into_iter()
            .filter(|&sq| self.possible_moves(sq).is_ok());

        let Some(whence) = s.try_select(movable) else {
            return false;
        };

        let Ok(moves) = self.possible_moves(whence) else {
            return false;
        };

        if self.perform_move(whence, t.select(moves)).is_ok() && self.promotion.is_some() {
            use Promotion::*;
            if self.promote(s.select([Knight, Bishop, Rook, Queen])).is_err() {
                return false;
            }
        }

        !self.checkmate
    }
}
