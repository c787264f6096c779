//! Chess piece representation.

use crate::TeamColor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The six kinds of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PieceKind {
    King = 0,
    Queen = 1,
    Bishop = 2,
    Knight = 3,
    Rook = 4,
    Pawn = 5,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
        PieceKind::Pawn,
    ];

    /// The kinds a pawn may promote to, in generation order.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
    ];

    /// Returns the letter for this kind with the given color
    /// (upper case for White, lower case for Black).
    pub const fn symbol(self, color: TeamColor) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match color {
            TeamColor::White => c.to_ascii_uppercase(),
            TeamColor::Black => c,
        }
    }

    /// Parses a promotion letter (`q`, `r`, `b`, `n`, either case).
    pub const fn from_promotion_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'q' => Some(PieceKind::Queen),
            'r' => Some(PieceKind::Rook),
            'b' => Some(PieceKind::Bishop),
            'n' => Some(PieceKind::Knight),
            _ => None,
        }
    }

    /// Returns true if this is a sliding piece (bishop, rook, or queen).
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// A piece on the board: a color and a kind, nothing else.
///
/// Two pieces with the same color and kind are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: TeamColor,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: TeamColor, kind: PieceKind) -> Self {
        Piece { color, kind }
    }

    #[inline]
    pub const fn color(self) -> TeamColor {
        self.color
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// Returns true if this piece is of the given color and kind.
    #[inline]
    pub fn is(self, color: TeamColor, kind: PieceKind) -> bool {
        self.color == color && self.kind == kind
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.symbol(self.color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_symbol() {
        assert_eq!(PieceKind::Pawn.symbol(TeamColor::White), 'P');
        assert_eq!(PieceKind::Pawn.symbol(TeamColor::Black), 'p');
        assert_eq!(PieceKind::King.symbol(TeamColor::White), 'K');
        assert_eq!(PieceKind::Knight.symbol(TeamColor::Black), 'n');
    }

    #[test]
    fn promotion_char() {
        assert_eq!(PieceKind::from_promotion_char('q'), Some(PieceKind::Queen));
        assert_eq!(PieceKind::from_promotion_char('N'), Some(PieceKind::Knight));
        assert_eq!(PieceKind::from_promotion_char('k'), None);
        assert_eq!(PieceKind::from_promotion_char('p'), None);
    }

    #[test]
    fn promotions_exclude_king_and_pawn() {
        assert!(!PieceKind::PROMOTIONS.contains(&PieceKind::King));
        assert!(!PieceKind::PROMOTIONS.contains(&PieceKind::Pawn));
        assert_eq!(PieceKind::PROMOTIONS.len(), 4);
    }

    #[test]
    fn is_slider() {
        assert!(!PieceKind::Pawn.is_slider());
        assert!(!PieceKind::Knight.is_slider());
        assert!(PieceKind::Bishop.is_slider());
        assert!(PieceKind::Rook.is_slider());
        assert!(PieceKind::Queen.is_slider());
        assert!(!PieceKind::King.is_slider());
    }

    #[test]
    fn pieces_compare_by_value() {
        let a = Piece::new(TeamColor::White, PieceKind::Rook);
        let b = Piece::new(TeamColor::White, PieceKind::Rook);
        assert_eq!(a, b);
        assert_ne!(a, Piece::new(TeamColor::Black, PieceKind::Rook));
        assert!(a.is(TeamColor::White, PieceKind::Rook));
        assert_eq!(a.to_string(), "R");
    }
}
