//! Legal move filtering and terminal-state detection.
//!
//! A move is legal when its piece's movement pattern allows it and the
//! mover's king is not attacked once it has been played. Legality is checked
//! by simulation: the move is applied to a scratch clone of the board and
//! the clone is asked whether the king is in check.

use crate::castling::{king_home, CastleSide};
use crate::movegen::{is_square_attacked, piece_moves, MoveList};
use crate::Board;
use chess_core::{Move, Piece, PieceKind, Position, TeamColor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a position from one side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// Legal moves exist and the king is safe.
    Ongoing,
    /// The king is attacked but can be saved.
    Check,
    /// The king is attacked and no legal move exists.
    Checkmate,
    /// No legal move exists but the king is safe.
    Stalemate,
}

impl GameStatus {
    /// Returns true for checkmate and stalemate.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        write!(f, "{}", name)
    }
}

impl Board {
    /// Returns the legal moves of the piece on `position`.
    ///
    /// Empty for an empty square. Includes castling for a king and the en
    /// passant capture for a pawn standing next to the passed pawn.
    pub fn valid_moves(&self, position: Position) -> MoveList {
        let Some(piece) = self.piece_at(position) else {
            return MoveList::new();
        };

        let mut moves = piece_moves(self, position);
        moves.retain(|m| self.keeps_king_safe(*m, piece.color));

        match piece.kind {
            PieceKind::King => {
                for side in CastleSide::ALL {
                    if position == king_home(piece.color) && self.can_castle(piece.color, side) {
                        let target = Position::new(position.row(), side.king_target_col());
                        moves.push(Move::normal(position, target));
                    }
                }
            }
            PieceKind::Pawn => {
                if let Some(capture) = self.en_passant_capture(position, piece) {
                    if self.keeps_king_safe(capture, piece.color) {
                        moves.push(capture);
                    }
                }
            }
            _ => {}
        }

        moves
    }

    /// Returns every legal move for `color`.
    pub fn legal_moves(&self, color: TeamColor) -> Vec<Move> {
        self.pieces(color)
            .flat_map(|(position, _)| self.valid_moves(position).as_slice().to_vec())
            .collect()
    }

    /// Returns true if `color` has at least one legal move.
    pub fn has_legal_move(&self, color: TeamColor) -> bool {
        self.pieces(color)
            .any(|(position, _)| !self.valid_moves(position).is_empty())
    }

    /// Returns true if `color` may castle on `side` right now.
    ///
    /// The right must still be held, king and rook must be on their home
    /// squares, the king must not be in check, the squares between them must
    /// be empty, and the king must not cross or land on an attacked square.
    /// Derived afresh on every call.
    pub fn can_castle(&self, color: TeamColor, side: CastleSide) -> bool {
        if !self.castling_rights().has(color, side) || !self.castling_pieces_home(color, side) {
            return false;
        }
        if self.is_in_check(color) {
            return false;
        }

        let row = color.back_rank();
        let path_clear = side
            .between_cols()
            .iter()
            .all(|&col| self.is_empty_square(Position::new(row, col)));
        if !path_clear {
            return false;
        }

        side.king_path_cols()
            .iter()
            .all(|&col| !is_square_attacked(self, Position::new(row, col), color.opposite()))
    }

    /// Returns true if `color`'s king is attacked.
    ///
    /// A board without that king is never in check.
    pub fn is_in_check(&self, color: TeamColor) -> bool {
        self.king_position(color)
            .is_some_and(|king| is_square_attacked(self, king, color.opposite()))
    }

    /// Returns true if `color` is in check with no legal move.
    pub fn is_in_checkmate(&self, color: TeamColor) -> bool {
        self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// Returns true if `color` is not in check but has no legal move.
    pub fn is_in_stalemate(&self, color: TeamColor) -> bool {
        !self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// Classifies the position for `color`.
    pub fn status(&self, color: TeamColor) -> GameStatus {
        match (self.is_in_check(color), self.has_legal_move(color)) {
            (true, true) => GameStatus::Check,
            (true, false) => GameStatus::Checkmate,
            (false, true) => GameStatus::Ongoing,
            (false, false) => GameStatus::Stalemate,
        }
    }

    /// Plays `mv` on a scratch copy and reports whether `color`'s king is
    /// safe afterwards.
    fn keeps_king_safe(&self, mv: Move, color: TeamColor) -> bool {
        let mut scratch = self.clone();
        scratch.make_move(mv);
        !scratch.is_in_check(color)
    }

    /// The en passant capture available to `pawn` on `from`, if any.
    ///
    /// The target must be a forward diagonal of the pawn, and the square
    /// behind it must hold the enemy pawn that just advanced.
    fn en_passant_capture(&self, from: Position, pawn: Piece) -> Option<Move> {
        let target = self.en_passant_target()?;
        let dir = pawn.color.pawn_direction();
        let diagonal = target.row() as i8 - from.row() as i8 == dir
            && (target.col() as i8 - from.col() as i8).abs() == 1;
        if !diagonal {
            return None;
        }
        let passed = target.offset(-dir, 0)?;
        let victim = Piece::new(pawn.color.opposite(), PieceKind::Pawn);
        (self.piece_at(passed) == Some(victim)).then(|| Move::normal(from, target))
    }
}
