use crate::chess::*;

const KNIGHT: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];
const ORTHOGONAL: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

const ADJACENT: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// The squares the piece on `whence` could move to.
///
/// Whose turn it is and whether the move would leave the mover's own king in check are not
/// taken into account. The `en_passant` square is that of the pawn currently vulnerable to
/// an en passant capture, if any.
///
/// # Example
/// ```
/// # use lib::chess::*;
/// let board = Board::default();
/// assert_eq!(
///     Vec::from_iter(possible_moves(&board, Square::G1, None)),
///     vec![Square::F3, Square::H3]
/// );
/// ```
pub fn possible_moves(board: &Board, whence: Square, en_passant: Option<Square>) -> Bitboard {
    let Some(figure) = board[whence] else {
        return Bitboard::empty();
    };

    let friendly = board.by_color(figure.color());
    let occupied = board.occupied();

    match figure.role() {
        Role::Pawn => pawn(board, figure, whence, en_passant),
        Role::Knight => leaps(whence, &KNIGHT) & !friendly,
        Role::Bishop => rays(whence, &DIAGONAL, occupied) & !friendly,
        Role::Rook => rays(whence, &ORTHOGONAL, occupied) & !friendly,
        Role::Queen => {
            let lines = rays(whence, &DIAGONAL, occupied) | rays(whence, &ORTHOGONAL, occupied);
            lines & !friendly
        }

        Role::King => (leaps(whence, &ADJACENT) & !friendly) | castles(board, figure, whence),
    }
}

fn leaps(whence: Square, steps: &[(i8, i8)]) -> Bitboard {
    steps
        .iter()
        .filter_map(|&(df, dr)| whence.offset(df, dr))
        .collect()
}

fn rays(whence: Square, steps: &[(i8, i8)], occupied: Bitboard) -> Bitboard {
    Bitboard::fill(whence, steps, occupied).without(whence)
}

fn pawn(board: &Board, pawn: Figure, whence: Square, en_passant: Option<Square>) -> Bitboard {
    let side = pawn.color();
    let dr = match side {
        Color::White => 1,
        Color::Black => -1,
    };

    let mut moves = Bitboard::empty();
    let is_enemy = |sq: Square| board[sq].is_some_and(|f| f.color() != side);

    if let Some(push) = whence.offset(0, dr).filter(|&sq| !board.is_occupied(sq)) {
        moves = moves.with(push);
        if whence.rank() == Rank::Second.perspective(side) {
            if let Some(double) = push.offset(0, dr).filter(|&sq| !board.is_occupied(sq)) {
                moves = moves.with(double);
            }
        }
    }

    for df in [-1, 1] {
        if let Some(sq) = whence.offset(df, dr).filter(|&sq| is_enemy(sq)) {
            moves = moves.with(sq);
        }
    }

    if let Some(victim) = en_passant {
        let beside = victim.rank() == whence.rank() && (victim.file() - whence.file()).abs() == 1;
        let is_pawn = board[victim].is_some_and(|f| f.role() == Role::Pawn);
        if beside && is_pawn && is_enemy(victim) && whence.rank() == Rank::Fifth.perspective(side) {
            if let Some(sq) = victim.offset(0, dr).filter(|&sq| !board.is_occupied(sq)) {
                moves = moves.with(sq);
            }
        }
    }

    moves
}

fn castles(board: &Board, king: Figure, whence: Square) -> Bitboard {
    let side = king.color();
    if !king.is_unmoved() || whence != Square::E1.perspective(side) {
        return Bitboard::empty();
    }

    let rook = Piece(side, Role::Rook);
    [(Square::H1, Square::G1), (Square::A1, Square::C1)]
        .into_iter()
        .map(|(corner, whither)| (corner.perspective(side), whither.perspective(side)))
        .filter(|&(corner, _)| board[corner].is_some_and(|f| f.piece == rook && f.is_unmoved()))
        .filter(|&(corner, _)| (Bitboard::between(whence, corner) & board.occupied()).is_empty())
        .map(|(_, whither)| whither)
        .collect()
}
