//! Team color representation.

use serde::{Deserialize, Serialize};

/// The two sides of a chess game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TeamColor {
    White = 0,
    Black = 1,
}

impl TeamColor {
    /// Both colors, White first.
    pub const ALL: [TeamColor; 2] = [TeamColor::White, TeamColor::Black];

    /// Returns the opposite color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            TeamColor::White => TeamColor::Black,
            TeamColor::Black => TeamColor::White,
        }
    }

    /// Returns the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the pawn direction for this color (+1 for White, -1 for Black).
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            TeamColor::White => 1,
            TeamColor::Black => -1,
        }
    }

    /// Returns the row holding this color's king and rooks at the start (1 or 8).
    #[inline]
    pub const fn back_rank(self) -> u8 {
        match self {
            TeamColor::White => 1,
            TeamColor::Black => 8,
        }
    }

    /// Returns the row this color's pawns start on (2 or 7).
    #[inline]
    pub const fn pawn_home_row(self) -> u8 {
        match self {
            TeamColor::White => 2,
            TeamColor::Black => 7,
        }
    }

    /// Returns the row on which this color's pawns promote (8 or 1).
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        self.opposite().back_rank()
    }
}

impl std::fmt::Display for TeamColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamColor::White => write!(f, "White"),
            TeamColor::Black => write!(f, "Black"),
        }
    }
}
