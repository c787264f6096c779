//! Pseudo-legal move generation.
//!
//! [`piece_moves`] produces every move a piece's movement pattern allows from
//! its square, respecting occupancy but ignoring whether the mover's king is
//! left attacked. Filtering for check, castling and en passant happen on the
//! [`Board`](crate::Board), which knows the history these rules depend on.

pub mod attacks;
pub mod perft;

use crate::Board;
use chess_core::{Move, PieceKind, Position, TeamColor};

pub use attacks::{
    is_square_attacked, pawn_attacks, BISHOP_DIRECTIONS, KING_STEPS, KNIGHT_STEPS,
    QUEEN_DIRECTIONS, ROOK_DIRECTIONS,
};

const PLACEHOLDER: Move = Move::normal(Position::new(1, 1), Position::new(1, 1));

/// A list of moves with a fixed maximum capacity.
///
/// A single piece has at most 27 destinations (a centralised queen), so a
/// fixed-size array avoids heap allocations during generation.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; Self::MAX_MOVES],
    len: usize,
}

impl MoveList {
    /// Maximum number of moves one piece can produce, with headroom.
    pub const MAX_MOVES: usize = 64;

    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList {
            moves: [PLACEHOLDER; Self::MAX_MOVES],
            len: 0,
        }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        debug_assert!(self.len < Self::MAX_MOVES);
        self.moves[self.len] = m;
        self.len += 1;
    }

    /// Returns the number of moves.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    /// Returns true if the list holds `m`.
    #[inline]
    pub fn contains(&self, m: &Move) -> bool {
        self.as_slice().contains(m)
    }

    /// Returns true if any move ends on `position`.
    #[inline]
    pub fn reaches(&self, position: Position) -> bool {
        self.as_slice().iter().any(|m| m.end() == position)
    }

    /// Iterates over the moves.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    /// Clears the move list.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Retains only moves for which the predicate returns true.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&Move) -> bool,
    {
        let mut write = 0;
        for read in 0..self.len {
            if f(&self.moves[read]) {
                self.moves[write] = self.moves[read];
                write += 1;
            }
        }
        self.len = write;
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for MoveList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for MoveList {}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < self.len);
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Generates the pseudo-legal moves of the piece on `from`.
///
/// Returns an empty list for an empty square. Castling and en passant are
/// never produced here.
pub fn piece_moves(board: &Board, from: Position) -> MoveList {
    let mut moves = MoveList::new();
    let Some(piece) = board.piece_at(from) else {
        return moves;
    };

    match piece.kind {
        PieceKind::Rook => slide_moves(board, from, piece.color, &ROOK_DIRECTIONS, &mut moves),
        PieceKind::Bishop => slide_moves(board, from, piece.color, &BISHOP_DIRECTIONS, &mut moves),
        PieceKind::Queen => slide_moves(board, from, piece.color, &QUEEN_DIRECTIONS, &mut moves),
        PieceKind::King => step_moves(board, from, piece.color, &KING_STEPS, &mut moves),
        PieceKind::Knight => step_moves(board, from, piece.color, &KNIGHT_STEPS, &mut moves),
        PieceKind::Pawn => pawn_moves(board, from, piece.color, &mut moves),
    }

    moves
}

/// Walks each ray until the edge, a friendly piece, or a capture.
fn slide_moves(
    board: &Board,
    from: Position,
    us: TeamColor,
    directions: &[(i8, i8)],
    moves: &mut MoveList,
) {
    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(to) = current.offset(d_row, d_col) {
            match board.piece_at(to) {
                None => moves.push(Move::normal(from, to)),
                Some(other) => {
                    if other.color != us {
                        moves.push(Move::normal(from, to));
                    }
                    break;
                }
            }
            current = to;
        }
    }
}

/// Tries each fixed offset once.
fn step_moves(
    board: &Board,
    from: Position,
    us: TeamColor,
    offsets: &[(i8, i8)],
    moves: &mut MoveList,
) {
    for &(d_row, d_col) in offsets {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        if board.piece_at(to).map_or(true, |other| other.color != us) {
            moves.push(Move::normal(from, to));
        }
    }
}

/// Generates pseudo-legal pawn pushes and captures, expanding promotions.
fn pawn_moves(board: &Board, from: Position, us: TeamColor, moves: &mut MoveList) {
    let dir = us.pawn_direction();

    if let Some(one) = from.offset(dir, 0) {
        if board.is_empty_square(one) {
            push_pawn_move(from, one, us, moves);

            if from.row() == us.pawn_home_row() {
                if let Some(two) = one.offset(dir, 0) {
                    if board.is_empty_square(two) {
                        moves.push(Move::normal(from, two));
                    }
                }
            }
        }
    }

    for to in pawn_attacks(from, us) {
        if board.piece_at(to).is_some_and(|other| other.color != us) {
            push_pawn_move(from, to, us, moves);
        }
    }
}

/// Pushes a pawn move, once per promotion choice when it lands on the far rank.
fn push_pawn_move(from: Position, to: Position, us: TeamColor, moves: &mut MoveList) {
    if to.row() == us.promotion_row() {
        for kind in PieceKind::PROMOTIONS {
            moves.push(Move::promote(from, to, kind));
        }
    } else {
        moves.push(Move::normal(from, to));
    }
}
