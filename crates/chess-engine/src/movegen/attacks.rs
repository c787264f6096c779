//! Movement offsets and attack detection for all piece kinds.

use super::piece_moves;
use crate::Board;
use chess_core::{PieceKind, Position, TeamColor};

/// Orthogonal rays as (row, column) steps.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Diagonal rays as (row, column) steps.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Union of rook and bishop rays.
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// The eight squares around a king.
pub const KING_STEPS: [(i8, i8); 8] = QUEEN_DIRECTIONS;

/// The eight L-shaped knight jumps.
pub const KNIGHT_STEPS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// Returns the (up to two) squares a pawn of `color` on `from` attacks.
#[inline]
pub fn pawn_attacks(from: Position, color: TeamColor) -> impl Iterator<Item = Position> {
    let dir = color.pawn_direction();
    [-1, 1]
        .into_iter()
        .filter_map(move |d_col| from.offset(dir, d_col))
}

/// Returns true if a piece of color `by` could capture on `target`.
///
/// Every other piece uses its pseudo-legal move shape. Pawns count their
/// forward diagonals even when `target` is empty, so a pawn guarding a
/// castling square is seen.
pub fn is_square_attacked(board: &Board, target: Position, by: TeamColor) -> bool {
    board.pieces(by).any(|(from, piece)| match piece.kind {
        PieceKind::Pawn => pawn_attacks(from, by).any(|sq| sq == target),
        _ => piece_moves(board, from).reaches(target),
    })
}
