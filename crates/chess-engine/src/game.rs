//! Turn sequencing on top of a [`Board`].
//!
//! [`Game`] owns the board and the side to move. It validates each move
//! against the active player and the board's legality rules, then applies the
//! side effects a move has beyond moving pieces: castling bookkeeping and the
//! en passant target.

use crate::movegen::MoveList;
use crate::rules::GameStatus;
use crate::Board;
use chess_core::{Move, NotationError, Piece, PieceKind, Position, TeamColor};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{debug, trace};

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IllegalMoveReason {
    /// The start square is empty.
    NoPiece,
    /// The piece on the start square belongs to the side not on move.
    WrongTurn,
    /// The piece cannot legally make that move.
    NotLegal,
}

impl fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            IllegalMoveReason::NoPiece => "no piece on the start square",
            IllegalMoveReason::WrongTurn => "not that side's turn",
            IllegalMoveReason::NotLegal => "not a legal move",
        };
        write!(f, "{}", text)
    }
}

/// Error type for game operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The move was rejected; the game is unchanged.
    #[error("illegal move {mv}: {reason}")]
    IllegalMove {
        mv: Move,
        reason: IllegalMoveReason,
    },
    /// Move text could not be parsed.
    #[error(transparent)]
    Notation(#[from] NotationError),
}

impl GameError {
    /// The rejection reason, if this is an illegal move.
    pub fn illegal_reason(&self) -> Option<IllegalMoveReason> {
        match self {
            GameError::IllegalMove { reason, .. } => Some(*reason),
            GameError::Notation(_) => None,
        }
    }
}

/// A chess game: a board plus the side to move.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    turn: TeamColor,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a game at the standard starting position with White to move.
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            turn: TeamColor::White,
        }
    }

    /// Creates a game from an arbitrary board and side to move.
    pub fn from_board(board: Board, turn: TeamColor) -> Self {
        Game { board, turn }
    }

    /// Returns the side to move.
    #[inline]
    pub fn team_turn(&self) -> TeamColor {
        self.turn
    }

    /// Sets the side to move.
    pub fn set_team_turn(&mut self, color: TeamColor) {
        self.turn = color;
    }

    /// Returns the current board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replaces the board with a copy of `board`.
    pub fn set_board(&mut self, board: &Board) {
        self.board = board.clone();
    }

    /// Returns the legal moves of the piece on `position`, whichever side
    /// it belongs to.
    pub fn valid_moves(&self, position: Position) -> MoveList {
        self.board.valid_moves(position)
    }

    /// Returns every legal move for the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.board.legal_moves(self.turn)
    }

    /// Returns true if `color`'s king is attacked.
    pub fn is_in_check(&self, color: TeamColor) -> bool {
        self.board.is_in_check(color)
    }

    /// Returns true if `color` is in check with no legal move.
    pub fn is_in_checkmate(&self, color: TeamColor) -> bool {
        self.board.is_in_checkmate(color)
    }

    /// Returns true if `color` is not in check but has no legal move.
    pub fn is_in_stalemate(&self, color: TeamColor) -> bool {
        self.board.is_in_stalemate(color)
    }

    /// Classifies the position for the side to move.
    pub fn status(&self) -> GameStatus {
        self.board.status(self.turn)
    }

    /// Plays `mv` for the side to move.
    ///
    /// On error the game is left exactly as it was.
    pub fn make_move(&mut self, mv: Move) -> Result<(), GameError> {
        if let Err(reason) = self.check_move(mv) {
            debug!(%mv, %reason, turn = %self.turn, "move rejected");
            return Err(GameError::IllegalMove { mv, reason });
        }

        self.apply(mv);
        debug!(%mv, turn = %self.turn, "move applied");
        Ok(())
    }

    /// Parses coordinate notation such as `e2e4` or `e7e8q` and plays it.
    pub fn make_move_str(&mut self, text: &str) -> Result<(), GameError> {
        let mv: Move = text.parse()?;
        self.make_move(mv)
    }

    fn check_move(&self, mv: Move) -> Result<(), IllegalMoveReason> {
        let piece = self
            .board
            .piece_at(mv.start())
            .ok_or(IllegalMoveReason::NoPiece)?;
        if piece.color != self.turn {
            return Err(IllegalMoveReason::WrongTurn);
        }
        if !self.board.valid_moves(mv.start()).contains(&mv) {
            return Err(IllegalMoveReason::NotLegal);
        }
        Ok(())
    }

    /// Applies a move already known to be legal.
    pub(crate) fn apply(&mut self, mv: Move) {
        let moved = self.board.piece_at(mv.start());

        self.board.maintain_castling_permissions(mv);
        self.board.make_move(mv);
        self.board.clear_en_passant_target();

        if let Some(piece) = moved {
            if piece.kind == PieceKind::Pawn && mv.row_delta().abs() == 2 {
                self.arm_en_passant(mv, piece.color);
            }
        }

        self.turn = self.turn.opposite();
    }

    /// Sets the en passant target behind a double push, but only when an
    /// enemy pawn stands beside the landing square to use it.
    fn arm_en_passant(&mut self, mv: Move, color: TeamColor) {
        let end = mv.end();
        let enemy_pawn = Piece::new(color.opposite(), PieceKind::Pawn);
        let contested = [-1, 1]
            .into_iter()
            .filter_map(|d_col| end.offset(0, d_col))
            .any(|sq| self.board.piece_at(sq) == Some(enemy_pawn));
        if contested {
            let skipped = Position::new((mv.start().row() + end.row()) / 2, end.col());
            trace!(%mv, target = %skipped, "en passant armed");
            self.board.set_en_passant_target(Some(skipped));
        }
    }
}
