//! Chess rules engine: legal move generation and game state.
//!
//! This crate provides:
//! - [`Board`] - piece placement plus castling rights, en passant target and
//!   cached king squares
//! - [`Game`] - turn sequencing and move validation for the side to move
//! - [`piece_moves`] - pseudo-legal move shapes for every piece kind
//! - Check, checkmate and stalemate detection via [`GameStatus`]
//!
//! # Architecture
//!
//! Each layer depends only on the one below it. Move generation knows piece
//! movement patterns; the board filters those by simulating each candidate on
//! a scratch copy and rejecting any that leave the mover's king attacked; the
//! game checks the side to move and applies the bookkeeping a move implies.
//!
//! # Example
//!
//! ```
//! use chess_engine::{Game, GameStatus};
//! use chess_core::TeamColor;
//!
//! let mut game = Game::new();
//! for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
//!     game.make_move_str(mv).unwrap();
//! }
//! assert!(game.is_in_checkmate(TeamColor::White));
//! assert_eq!(game.status(), GameStatus::Checkmate);
//! ```

mod board;
pub mod castling;
mod game;
pub mod movegen;
mod rules;

pub use board::Board;
pub use castling::{CastleSide, CastlingRights, CastlingScope};
pub use game::{Game, GameError, IllegalMoveReason};
pub use movegen::{is_square_attacked, piece_moves, MoveList};
pub use rules::GameStatus;
