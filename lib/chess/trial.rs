use crate::chess::{Board, Move, MoveRecord};
use std::ops::Deref;

/// A [`Move`] tentatively applied to a [`Board`].
///
/// The move is taken back when the trial is dropped, unless it is [committed](`Trial::commit`).
#[derive(Debug)]
pub struct Trial<'a> {
    board: &'a mut Board,
    record: MoveRecord,
    committed: bool,
}

impl<'a> Trial<'a> {
    /// Applies a move, returning `None` if the source square is empty.
    pub fn new(board: &'a mut Board, m: Move) -> Option<Self> {
        let record = board.make(m)?;
        Some(Trial {
            board,
            record,
            committed: false,
        })
    }

    /// The record of the move on trial.
    #[inline(always)]
    pub fn record(&self) -> MoveRecord {
        self.record
    }

    /// Keeps the move on the board.
    #[inline(always)]
    pub fn commit(mut self) -> MoveRecord {
        self.committed = true;
        self.record
    }
}

impl Deref for Trial<'_> {
    type Target = Board;

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        self.board
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        if !self.committed {
            self.board.unmake(self.record);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::{possible_moves, Game, Square};
    use proptest::{collection::vec, prelude::any, sample::Selector};
    use test_strategy::proptest;

    #[proptest]
    fn trial_applies_move_while_alive(selector: Selector) {
        let mut board = Board::default();
        let whence = selector.select(Vec::from_iter(board.occupied()));
        if let Some(whither) = selector.try_select(possible_moves(&board, whence, None)) {
            let before = board;
            let trial = Trial::new(&mut board, Move(whence, whither)).unwrap();
            assert_ne!(*trial, before);
            assert_eq!(trial[whence], None);
            assert_eq!(trial.record().whither(), whither);
        }
    }

    #[proptest]
    fn dropping_trial_restores_reachable_positions(
        #[strategy(vec(any::<(Selector, Selector)>(), 0..60))] plies: Vec<(Selector, Selector)>,
    ) {
        let mut game = Game::default();

        for (s, t) in plies {
            let before = *game.board();
            let mut board = before;

            for whence in before.occupied() {
                for whither in possible_moves(&before, whence, game.en_passant()) {
                    let m = Move(whence, whither);
                    let mut after = before;
                    let record = after.make(m);

                    let trial = Trial::new(&mut board, m);
                    assert_eq!(trial.as_ref().map(|t| t.record()), record);
                    assert_eq!(trial.as_deref(), Some(&after));

                    drop(trial);
                    assert_eq!(board, before);
                }
            }

            if !game.play_selected(s, t) {
                break;
            }
        }
    }

    #[test]
    fn committing_trial_keeps_move_on_board() {
        let mut board = Board::default();
        let record = Trial::new(&mut board, Move(Square::E2, Square::E4)).unwrap().commit();
        assert_eq!(record.whither(), Square::E4);
        assert_eq!(board[Square::E2], None);
        assert_eq!(board[Square::E4].map(|f| f.moves), Some(1));
    }

    #[proptest]
    fn trial_fails_if_source_is_empty(
        #[filter(!Board::default().is_occupied(#whence))] whence: Square,
        whither: Square,
    ) {
        let mut board = Board::default();
        assert!(Trial::new(&mut board, Move(whence, whither)).is_none());
        assert_eq!(board, Board::default());
    }
}
