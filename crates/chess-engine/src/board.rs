//! Board state: piece placement plus the history-derived state the rules need.

use crate::castling::{king_home, rook_home, CastleSide, CastlingRights, CastlingScope};
use chess_core::{Move, Piece, PieceKind, Position, TeamColor};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Back-rank layout from the a-file to the h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid of pieces with castling rights, the en passant target and a
/// cache of both king squares.
///
/// The king cache always matches the grid: every mutation goes through a
/// single setter that keeps it current. Cloning is a flat copy, which
/// makes the simulate-and-discard legality check cheap.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "BoardData", into = "BoardData")]
pub struct Board {
    /// Indexed `[row - 1][col - 1]`.
    squares: [[Option<Piece>; 8]; 8],
    king_positions: [Option<Position>; 2],
    castling: CastlingRights,
    en_passant: Option<Position>,
}

/// Serialized form. The king cache is derived, so it is rebuilt on load
/// rather than trusted.
#[derive(Serialize, Deserialize)]
struct BoardData {
    squares: [[Option<Piece>; 8]; 8],
    castling: CastlingRights,
    en_passant: Option<Position>,
}

impl From<BoardData> for Board {
    fn from(data: BoardData) -> Self {
        let mut board = Board {
            squares: data.squares,
            king_positions: [None; 2],
            castling: data.castling,
            en_passant: data.en_passant,
        };
        board.rescan_kings();
        board
    }
}

impl From<Board> for BoardData {
    fn from(board: Board) -> Self {
        BoardData {
            squares: board.squares,
            castling: board.castling,
            en_passant: board.en_passant,
        }
    }
}

impl Board {
    /// Creates a board with no pieces.
    ///
    /// Castling rights start granted; castling additionally needs king and
    /// rook on their home squares, so an empty board cannot castle until
    /// they are placed there.
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            king_positions: [None; 2],
            castling: CastlingRights::ALL,
            en_passant: None,
        }
    }

    /// Creates the standard starting position.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.reset();
        board
    }

    /// Restores the standard starting position, rights and all.
    pub fn reset(&mut self) {
        *self = Self::empty();
        for color in TeamColor::ALL {
            for (i, kind) in BACK_RANK.into_iter().enumerate() {
                let col = i as u8 + 1;
                self.put(Position::new(color.back_rank(), col), Some(Piece::new(color, kind)));
                self.put(
                    Position::new(color.pawn_home_row(), col),
                    Some(Piece::new(color, PieceKind::Pawn)),
                );
            }
        }
    }

    /// Returns the piece on `position`, if any.
    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        self.squares[position.row() as usize - 1][position.col() as usize - 1]
    }

    /// Returns true if no piece stands on `position`.
    #[inline]
    pub fn is_empty_square(&self, position: Position) -> bool {
        self.piece_at(position).is_none()
    }

    /// Places `piece` on `position`, replacing whatever stood there.
    pub fn add_piece(&mut self, position: Position, piece: Piece) {
        self.put(position, Some(piece));
    }

    /// Removes and returns the piece on `position`.
    pub fn remove_piece(&mut self, position: Position) -> Option<Piece> {
        let old = self.piece_at(position);
        self.put(position, None);
        old
    }

    /// Returns where `color`'s king stands, or `None` on a board without one.
    #[inline]
    pub fn king_position(&self, color: TeamColor) -> Option<Position> {
        self.king_positions[color.index()]
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    /// The square a pawn capturing en passant would land on.
    #[inline]
    pub fn en_passant_target(&self) -> Option<Position> {
        self.en_passant
    }

    /// Sets the en passant target. Used when restoring a saved game;
    /// [`Game`](crate::Game) maintains it during play.
    pub fn set_en_passant_target(&mut self, target: Option<Position>) {
        self.en_passant = target;
    }

    /// Clears the en passant target.
    #[inline]
    pub fn clear_en_passant_target(&mut self) {
        self.en_passant = None;
    }

    /// Iterates over every piece of `color` with its position.
    pub fn pieces(&self, color: TeamColor) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |position| {
            self.piece_at(position)
                .filter(|piece| piece.color == color)
                .map(|piece| (position, piece))
        })
    }

    /// Removes castling rights for `color`.
    pub fn revoke_castling(&mut self, color: TeamColor, scope: CastlingScope) {
        self.castling.revoke(color, scope);
    }

    /// Returns true if `mv` is a castling move: a king travelling two columns.
    pub fn is_castling_move(&self, mv: Move) -> bool {
        self.piece_at(mv.start())
            .is_some_and(|piece| piece.kind == PieceKind::King && mv.col_delta().abs() == 2)
    }

    /// Revokes the castling rights `mv` ends.
    ///
    /// Called before [`Board::make_move`] for every move actually played:
    /// a king move ends both of its rights; leaving a rook home square ends
    /// that side; landing on a rook home square captures the rook there and
    /// ends its owner's right on that side.
    pub fn maintain_castling_permissions(&mut self, mv: Move) {
        if let Some(piece) = self.piece_at(mv.start()) {
            if piece.kind == PieceKind::King {
                self.revoke_castling(piece.color, CastlingScope::All);
            }
        }
        for square in [mv.start(), mv.end()] {
            if let Some((color, side)) = CastleSide::for_rook_home(square) {
                self.revoke_castling(color, side.into());
            }
        }
    }

    /// Applies `mv` unconditionally.
    ///
    /// Legality is the caller's concern. Castling moves the rook too;
    /// promotions replace the pawn; a pawn landing on the en passant target
    /// removes the pawn it passed. The en passant target itself is left for
    /// [`Game`](crate::Game) to update.
    ///
    /// # Panics
    ///
    /// Panics if no piece stands on the start square.
    pub fn make_move(&mut self, mv: Move) {
        let piece = self
            .piece_at(mv.start())
            .expect("make_move called with an empty start square");

        if self.is_castling_move(mv) {
            self.castle(piece.color, mv);
            return;
        }

        let placed = match mv.promotion() {
            Some(kind) => Piece::new(piece.color, kind),
            None => piece,
        };
        self.put(mv.start(), None);
        self.put(mv.end(), Some(placed));

        if piece.kind == PieceKind::Pawn && self.en_passant == Some(mv.end()) {
            if let Some(passed) = mv.end().offset(-piece.color.pawn_direction(), 0) {
                trace!(%mv, captured = %passed, "en passant capture");
                self.put(passed, None);
            }
        }
    }

    /// Moves king and rook for a castling move in one step.
    fn castle(&mut self, color: TeamColor, mv: Move) {
        let side = CastleSide::from_col_delta(mv.col_delta());
        let row = mv.start().row();
        let rook_from = Position::new(row, side.rook_home_col());
        let rook_to = Position::new(row, side.rook_target_col());

        let king = self.piece_at(mv.start());
        self.put(mv.start(), None);
        self.put(mv.end(), king);
        let rook = self.piece_at(rook_from);
        self.put(rook_from, None);
        self.put(rook_to, rook);

        self.revoke_castling(color, CastlingScope::All);
        trace!(%mv, ?side, %color, "castled");
    }

    /// Sets a square, keeping the king cache in step with the grid.
    fn put(&mut self, position: Position, piece: Option<Piece>) {
        if let Some(old) = self.piece_at(position) {
            if old.kind == PieceKind::King
                && self.king_positions[old.color.index()] == Some(position)
            {
                self.king_positions[old.color.index()] = None;
            }
        }
        if let Some(new) = piece {
            if new.kind == PieceKind::King {
                self.king_positions[new.color.index()] = Some(position);
            }
        }
        self.squares[position.row() as usize - 1][position.col() as usize - 1] = piece;
    }

    /// Rebuilds the king cache by scanning the grid.
    fn rescan_kings(&mut self) {
        self.king_positions = [None; 2];
        for position in Position::all() {
            if let Some(piece) = self.piece_at(position) {
                if piece.kind == PieceKind::King {
                    self.king_positions[piece.color.index()] = Some(position);
                }
            }
        }
    }

    /// Returns true if `color`'s king and `side`'s rook are both home.
    pub(crate) fn castling_pieces_home(&self, color: TeamColor, side: CastleSide) -> bool {
        self.king_position(color) == Some(king_home(color))
            && self.piece_at(rook_home(color, side)) == Some(Piece::new(color, PieceKind::Rook))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    fn mv(s: &str) -> Move {
        s.parse().unwrap()
    }

    #[test]
    fn new_board_layout() {
        let board = Board::new();
        assert_eq!(
            board.piece_at(pos("e1")),
            Some(Piece::new(TeamColor::White, PieceKind::King))
        );
        assert_eq!(
            board.piece_at(pos("d8")),
            Some(Piece::new(TeamColor::Black, PieceKind::Queen))
        );
        assert_eq!(
            board.piece_at(pos("g7")),
            Some(Piece::new(TeamColor::Black, PieceKind::Pawn))
        );
        assert!(board.is_empty_square(pos("e4")));
        assert_eq!(board.pieces(TeamColor::White).count(), 16);
        assert_eq!(board.pieces(TeamColor::Black).count(), 16);
        assert_eq!(board.castling_rights(), CastlingRights::ALL);
        assert_eq!(board.en_passant_target(), None);
    }

    #[test]
    fn king_cache_tracks_placement() {
        let board = Board::new();
        assert_eq!(board.king_position(TeamColor::White), Some(pos("e1")));
        assert_eq!(board.king_position(TeamColor::Black), Some(pos("e8")));

        let mut board = Board::empty();
        assert_eq!(board.king_position(TeamColor::White), None);
        board.add_piece(pos("c3"), Piece::new(TeamColor::White, PieceKind::King));
        assert_eq!(board.king_position(TeamColor::White), Some(pos("c3")));
        board.remove_piece(pos("c3"));
        assert_eq!(board.king_position(TeamColor::White), None);
    }

    #[test]
    fn overwriting_a_king_clears_cache() {
        let mut board = Board::empty();
        board.add_piece(pos("c3"), Piece::new(TeamColor::Black, PieceKind::King));
        board.add_piece(pos("c3"), Piece::new(TeamColor::Black, PieceKind::Queen));
        assert_eq!(board.king_position(TeamColor::Black), None);
    }

    #[test]
    fn make_move_relocates_piece() {
        let mut board = Board::new();
        board.make_move(mv("g1f3"));
        assert!(board.is_empty_square(pos("g1")));
        assert_eq!(
            board.piece_at(pos("f3")),
            Some(Piece::new(TeamColor::White, PieceKind::Knight))
        );
    }

    #[test]
    fn make_move_updates_king_cache() {
        let mut board = Board::new();
        board.make_move(mv("e2e4"));
        board.make_move(mv("e1e2"));
        assert_eq!(board.king_position(TeamColor::White), Some(pos("e2")));
    }

    #[test]
    fn make_move_promotes() {
        let mut board = Board::empty();
        board.add_piece(pos("c7"), Piece::new(TeamColor::White, PieceKind::Pawn));
        board.make_move(mv("c7c8n"));
        assert_eq!(
            board.piece_at(pos("c8")),
            Some(Piece::new(TeamColor::White, PieceKind::Knight))
        );
        assert!(board.is_empty_square(pos("c7")));
    }

    #[test]
    fn make_move_en_passant_removes_passed_pawn() {
        let mut board = Board::empty();
        board.add_piece(pos("e5"), Piece::new(TeamColor::White, PieceKind::Pawn));
        board.add_piece(pos("d5"), Piece::new(TeamColor::Black, PieceKind::Pawn));
        board.set_en_passant_target(Some(pos("d6")));

        board.make_move(mv("e5d6"));
        assert!(board.is_empty_square(pos("d5")));
        assert!(board.is_empty_square(pos("e5")));
        assert_eq!(
            board.piece_at(pos("d6")),
            Some(Piece::new(TeamColor::White, PieceKind::Pawn))
        );
    }

    #[test]
    fn make_move_castles_both_pieces() {
        let mut board = Board::empty();
        board.add_piece(pos("e8"), Piece::new(TeamColor::Black, PieceKind::King));
        board.add_piece(pos("a8"), Piece::new(TeamColor::Black, PieceKind::Rook));
        board.add_piece(pos("h8"), Piece::new(TeamColor::Black, PieceKind::Rook));

        assert!(board.is_castling_move(mv("e8c8")));
        board.make_move(mv("e8c8"));

        assert_eq!(
            board.piece_at(pos("c8")),
            Some(Piece::new(TeamColor::Black, PieceKind::King))
        );
        assert_eq!(
            board.piece_at(pos("d8")),
            Some(Piece::new(TeamColor::Black, PieceKind::Rook))
        );
        assert!(board.is_empty_square(pos("a8")));
        assert!(board.is_empty_square(pos("e8")));
        assert_eq!(board.king_position(TeamColor::Black), Some(pos("c8")));
        assert!(!board.castling_rights().has_any(TeamColor::Black));
        assert!(board.castling_rights().has_any(TeamColor::White));
    }

    #[test]
    fn one_column_king_step_is_not_castling() {
        let board = Board::new();
        assert!(!board.is_castling_move(mv("e1f1")));
        assert!(!board.is_castling_move(mv("b1d2")));
    }

    #[test]
    fn castling_permissions_king_move() {
        let mut board = Board::new();
        board.maintain_castling_permissions(mv("e1e2"));
        assert!(!board.castling_rights().has_any(TeamColor::White));
        assert!(board.castling_rights().has_any(TeamColor::Black));
    }

    #[test]
    fn castling_permissions_rook_move() {
        let mut board = Board::new();
        board.maintain_castling_permissions(mv("h8h6"));
        let rights = board.castling_rights();
        assert!(!rights.has(TeamColor::Black, CastleSide::Kingside));
        assert!(rights.has(TeamColor::Black, CastleSide::Queenside));
    }

    #[test]
    fn castling_permissions_rook_captured_at_home() {
        let mut board = Board::new();
        board.maintain_castling_permissions(mv("b2a1"));
        let rights = board.castling_rights();
        assert!(!rights.has(TeamColor::White, CastleSide::Queenside));
        assert!(rights.has(TeamColor::White, CastleSide::Kingside));
    }

    #[test]
    fn clone_is_independent() {
        let board = Board::new();
        let mut scratch = board.clone();
        scratch.make_move(mv("e2e4"));
        assert_ne!(board, scratch);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn serde_rebuilds_king_cache() {
        let mut board = Board::new();
        board.make_move(mv("e2e4"));
        board.make_move(mv("e1e2"));
        board.set_en_passant_target(Some(pos("e3")));

        let json = serde_json::to_string(&board).unwrap();
        let restored: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, board);
        assert_eq!(restored.king_position(TeamColor::White), Some(pos("e2")));
    }
}
