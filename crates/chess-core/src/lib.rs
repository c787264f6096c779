//! Core value types for chess.
//!
//! This crate provides the fundamental types shared by the rules engine and
//! anything that talks to it:
//! - [`Piece`], [`PieceKind`] and [`TeamColor`] for piece representation
//! - [`Position`] for board coordinates
//! - [`Move`] for move representation
//! - coordinate notation ("e4", "e7e8q") parsing via [`NotationError`]

mod color;
mod mov;
mod piece;
mod position;

pub use color::TeamColor;
pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use position::{in_bounds, NotationError, Position};
