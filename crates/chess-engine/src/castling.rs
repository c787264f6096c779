//! Castling rights and castling geometry.

use chess_core::{Position, TeamColor};
use serde::{Deserialize, Serialize};

/// Column of both kings at the start of the game.
pub const KING_HOME_COL: u8 = 5;

/// The two directions a king can castle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    /// Column the rook starts on.
    #[inline]
    pub const fn rook_home_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 8,
            CastleSide::Queenside => 1,
        }
    }

    /// Column the rook lands on.
    #[inline]
    pub const fn rook_target_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 4,
        }
    }

    /// Column the king lands on.
    #[inline]
    pub const fn king_target_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 3,
        }
    }

    /// Columns strictly between king and rook; all must be empty.
    #[inline]
    pub const fn between_cols(self) -> &'static [u8] {
        match self {
            CastleSide::Kingside => &[6, 7],
            CastleSide::Queenside => &[2, 3, 4],
        }
    }

    /// Columns the king crosses or lands on; none may be attacked.
    #[inline]
    pub const fn king_path_cols(self) -> &'static [u8] {
        match self {
            CastleSide::Kingside => &[6, 7],
            CastleSide::Queenside => &[4, 3],
        }
    }

    /// Side of a castling move, judged by the direction the king travels.
    #[inline]
    pub const fn from_col_delta(col_delta: i8) -> Self {
        if col_delta > 0 {
            CastleSide::Kingside
        } else {
            CastleSide::Queenside
        }
    }

    /// The side whose rook starts on `position`, with that rook's color.
    pub fn for_rook_home(position: Position) -> Option<(TeamColor, CastleSide)> {
        let color = TeamColor::ALL
            .into_iter()
            .find(|c| c.back_rank() == position.row())?;
        Self::ALL
            .into_iter()
            .find(|side| side.rook_home_col() == position.col())
            .map(|side| (color, side))
    }
}

/// King's starting square for a color.
#[inline]
pub const fn king_home(color: TeamColor) -> Position {
    Position::new(color.back_rank(), KING_HOME_COL)
}

/// Rook's starting square for a color and side.
#[inline]
pub const fn rook_home(color: TeamColor, side: CastleSide) -> Position {
    Position::new(color.back_rank(), side.rook_home_col())
}

/// Which rights a revocation removes. `All` is a case of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastlingScope {
    Kingside,
    Queenside,
    All,
}

impl From<CastleSide> for CastlingScope {
    fn from(side: CastleSide) -> Self {
        match side {
            CastleSide::Kingside => CastlingScope::Kingside,
            CastleSide::Queenside => CastlingScope::Queenside,
        }
    }
}

/// Castling rights flags.
///
/// Rights are only ever removed; nothing in the public API grants them back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const WHITE_KINGSIDE: u8 = 0b0001;
    pub const WHITE_QUEENSIDE: u8 = 0b0010;
    pub const BLACK_KINGSIDE: u8 = 0b0100;
    pub const BLACK_QUEENSIDE: u8 = 0b1000;
    pub const ALL: CastlingRights = CastlingRights(0b1111);

    const fn flag(color: TeamColor, side: CastleSide) -> u8 {
        match (color, side) {
            (TeamColor::White, CastleSide::Kingside) => Self::WHITE_KINGSIDE,
            (TeamColor::White, CastleSide::Queenside) => Self::WHITE_QUEENSIDE,
            (TeamColor::Black, CastleSide::Kingside) => Self::BLACK_KINGSIDE,
            (TeamColor::Black, CastleSide::Queenside) => Self::BLACK_QUEENSIDE,
        }
    }

    /// Returns true if `color` still holds the right to castle on `side`.
    #[inline]
    pub const fn has(self, color: TeamColor, side: CastleSide) -> bool {
        (self.0 & Self::flag(color, side)) != 0
    }

    /// Returns true if `color` holds either castling right.
    #[inline]
    pub const fn has_any(self, color: TeamColor) -> bool {
        self.has(color, CastleSide::Kingside) || self.has(color, CastleSide::Queenside)
    }

    /// Removes rights for `color`.
    #[inline]
    pub fn revoke(&mut self, color: TeamColor, scope: CastlingScope) {
        let mask = match scope {
            CastlingScope::Kingside => Self::flag(color, CastleSide::Kingside),
            CastlingScope::Queenside => Self::flag(color, CastleSide::Queenside),
            CastlingScope::All => {
                Self::flag(color, CastleSide::Kingside) | Self::flag(color, CastleSide::Queenside)
            }
        };
        self.0 &= !mask;
    }

    /// Returns the raw flags.
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::ALL
    }
}

impl From<u8> for CastlingRights {
    fn from(flags: u8) -> Self {
        CastlingRights(flags & Self::ALL.0)
    }
}

impl From<CastlingRights> for u8 {
    fn from(rights: CastlingRights) -> Self {
        rights.0
    }
}
