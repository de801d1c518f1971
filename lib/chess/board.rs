use crate::chess::*;
use crate::util::Integer;
use derive_more::Debug;
use std::fmt::{self, Write};
use std::ops::Index;

/// The chess board.
///
/// Each [`Square`] holds at most one [`Figure`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[debug("Board(\n{self})")]
pub struct Board([Option<Figure>; 64]);

impl Default for Board {
    /// The standard initial position.
    fn default() -> Self {
        use {Color::*, Role::*};

        let mut board = Board::empty();
        let back = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];
        for (f, role) in File::iter().zip(back) {
            for side in [White, Black] {
                let home = Square::new(f, Rank::First).perspective(side);
                let front = Square::new(f, Rank::Second).perspective(side);
                board.place(Piece(side, role), home);
                board.place(Piece(side, Pawn), front);
            }
        }

        board
    }
}

impl Board {
    /// A board with no pieces.
    #[inline(always)]
    pub fn empty() -> Self {
        Board([None; 64])
    }

    /// Places a figure on a square, returning whatever occupied it before.
    #[inline(always)]
    pub fn place<F: Into<Figure>>(&mut self, figure: F, sq: Square) -> Option<Figure> {
        self.0[sq as usize].replace(figure.into())
    }

    /// Detaches the figure on a square, if any.
    #[inline(always)]
    pub fn remove(&mut self, sq: Square) -> Option<Figure> {
        self.0[sq as usize].take()
    }

    /// The figure on a square, if any.
    #[inline(always)]
    pub fn occupant(&self, sq: Square) -> Option<Figure> {
        self.0[sq as usize]
    }

    /// Whether a square is occupied.
    #[inline(always)]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.0[sq as usize].is_some()
    }

    /// An iterator over all figures on the board.
    #[inline(always)]
    pub fn iter(&self) -> impl Iterator<Item = (Figure, Square)> + '_ {
        Square::iter().filter_map(|sq| Some((self.occupant(sq)?, sq)))
    }

    /// [`Square`]s occupied.
    pub fn occupied(&self) -> Bitboard {
        self.iter().map(|(_, sq)| sq).collect()
    }

    /// [`Square`]s occupied by a [`Color`].
    pub fn by_color(&self, c: Color) -> Bitboard {
        self.iter()
            .filter(|(f, _)| f.color() == c)
            .map(|(_, sq)| sq)
            .collect()
    }

    /// [`Square`] occupied by the king of a [`Color`], if any.
    pub fn king(&self, side: Color) -> Option<Square> {
        let king = Piece(side, Role::King);
        self.iter().find(|(f, _)| f.piece == king).map(|(_, sq)| sq)
    }

    /// The pieces on the board indexed by [row][`Square::row`] and [column][`Square::column`].
    pub fn grid(&self) -> [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE] {
        let mut grid = [[None; BOARD_SIZE]; BOARD_SIZE];
        for (f, sq) in self.iter() {
            grid[sq.row()][sq.column()] = Some(f.piece);
        }

        grid
    }

    /// Determines the side effects of a [`Move`] from the moved piece and its displacement.
    ///
    /// Returns `None` if the source square is empty.
    pub fn classify(&self, m: Move) -> Option<MoveKind> {
        let figure = self.occupant(m.whence())?;
        let df = m.whither().file() - m.whence().file();

        match figure.role() {
            Role::King if df.abs() == 2 => {
                let corner = if df > 0 { File::H } else { File::A };
                let rook = Square::new(corner, m.whence().rank());
                let passed = m.whence().offset(df.signum(), 0)?;
                Some(MoveKind::Castling(Move(rook, passed)))
            }

            Role::Pawn if df != 0 && !self.is_occupied(m.whither()) => {
                let victim = Square::new(m.whither().file(), m.whence().rank());
                Some(MoveKind::EnPassant(victim))
            }

            _ => Some(MoveKind::Normal),
        }
    }

    /// Applies a [`Move`] without checking whether it is legal.
    ///
    /// Returns `None` and leaves the board untouched if the source square is empty.
    pub fn make(&mut self, m: Move) -> Option<MoveRecord> {
        let kind = self.classify(m)?;
        let mut figure = self.remove(m.whence())?;
        figure.moves += 1;

        let victim = match kind {
            MoveKind::EnPassant(sq) => sq,
            _ => m.whither(),
        };

        let capture = self.remove(victim).map(|f| (f, victim));
        self.place(figure, m.whither());

        if let MoveKind::Castling(r) = kind {
            if let Some(mut rook) = self.remove(r.whence()) {
                rook.moves += 1;
                self.place(rook, r.whither());
            }
        }

        Some(MoveRecord(m, kind, capture))
    }

    /// Takes back a move previously applied by [`Board::make`].
    pub fn unmake(&mut self, record: MoveRecord) {
        if let Some(mut figure) = self.remove(record.whither()) {
            figure.moves -= 1;
            self.place(figure, record.whence());
        }

        if let MoveKind::Castling(r) = record.kind() {
            if let Some(mut rook) = self.remove(r.whither()) {
                rook.moves -= 1;
                self.place(rook, r.whence());
            }
        }

        if let Some((victim, sq)) = record.capture() {
            self.place(victim, sq);
        }
    }
}

/// Retrieves the [`Figure`] at a given [`Square`], if any.
impl Index<Square> for Board {
    type Output = Option<Figure>;

    #[inline(always)]
    fn index(&self, sq: Square) -> &Self::Output {
        &self.0[sq as usize]
    }
}

/// Prints one line per rank from the eighth down, `-` marking empty squares.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::iter().rev() {
            write!(f, "{rank} ")?;
            for file in File::iter() {
                match self[Square::new(file, rank)] {
                    None => f.write_char('-')?,
                    Some(p) => write!(f, "{p}")?,
                }

                f.write_char(if file < File::H { ' ' } else { '\n' })?;
            }
        }

        f.write_str("  a b c d e f g h")
    }
}
