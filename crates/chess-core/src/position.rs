//! Board coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing squares or moves written in coordinate notation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid square: '{0}'")]
    InvalidSquare(String),

    #[error("invalid move: expected 4 or 5 characters, got '{0}'")]
    InvalidMove(String),

    #[error("invalid promotion piece: '{0}'")]
    InvalidPromotion(char),

    #[error("coordinates out of bounds: row {row}, column {col}")]
    OutOfBounds { row: u8, col: u8 },
}

/// Returns true if `n` is a valid row or column (1-8).
#[inline]
pub const fn in_bounds(n: i8) -> bool {
    n >= 1 && n <= 8
}

/// A square on the board, as a (row, column) pair in 1..=8.
///
/// Row 1 is White's back rank; column 1 is the a-file.
/// Out-of-range positions are never constructed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    row: u8,
    col: u8,
}

/// Unchecked wire form; validated on the way in.
#[derive(Deserialize)]
struct RawPosition {
    row: u8,
    col: u8,
}

impl TryFrom<RawPosition> for Position {
    type Error = NotationError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::try_new(raw.row as i8, raw.col as i8).ok_or(NotationError::OutOfBounds {
            row: raw.row,
            col: raw.col,
        })
    }
}

impl Position {
    /// Creates a position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` lies outside 1..=8. Callers bound-check
    /// first (see [`Position::try_new`]).
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(
            row >= 1 && row <= 8 && col >= 1 && col <= 8,
            "position out of bounds"
        );
        Position { row, col }
    }

    /// Creates a position, or `None` if either coordinate is off the board.
    #[inline]
    pub const fn try_new(row: i8, col: i8) -> Option<Self> {
        if in_bounds(row) && in_bounds(col) {
            Some(Position {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the position shifted by the given deltas, if still on the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::try_new(self.row as i8 + d_row, self.col as i8 + d_col)
    }

    /// Iterates over all 64 positions, row by row starting at a1.
    pub fn all() -> impl Iterator<Item = Position> {
        (1..=8u8).flat_map(|row| (1..=8u8).map(move |col| Position { row, col }))
    }

    /// Returns the algebraic name of this position (e.g. "e4").
    pub fn to_algebraic(self) -> String {
        format!("{}{}", (b'a' + self.col - 1) as char, self.row)
    }

    /// Parses algebraic notation ("a1".."h8").
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let (file, rank) = (bytes[0].to_ascii_lowercase(), bytes[1]);
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }
        Some(Position::new(rank - b'0', file - b'a' + 1))
    }
}

impl FromStr for Position {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_algebraic(s).ok_or_else(|| NotationError::InvalidSquare(s.to_string()))
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({})", self.to_algebraic())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
