//! Move representation.

use crate::{NotationError, PieceKind, Position};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A chess move: where a piece starts, where it ends, and what a pawn
/// promotes to when it reaches the far rank.
///
/// Castling is written as the king's two-square move; en passant as the
/// capturing pawn's diagonal step onto the skipped square.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    start: Position,
    end: Position,
    promotion: Option<PieceKind>,
}

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(start: Position, end: Position, promotion: Option<PieceKind>) -> Self {
        Move {
            start,
            end,
            promotion,
        }
    }

    /// Creates a move without promotion.
    #[inline]
    pub const fn normal(start: Position, end: Position) -> Self {
        Self::new(start, end, None)
    }

    /// Creates a promoting pawn move.
    #[inline]
    pub const fn promote(start: Position, end: Position, kind: PieceKind) -> Self {
        Self::new(start, end, Some(kind))
    }

    #[inline]
    pub const fn start(self) -> Position {
        self.start
    }

    #[inline]
    pub const fn end(self) -> Position {
        self.end
    }

    #[inline]
    pub const fn promotion(self) -> Option<PieceKind> {
        self.promotion
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }

    /// Signed row distance travelled.
    #[inline]
    pub const fn row_delta(self) -> i8 {
        self.end.row() as i8 - self.start.row() as i8
    }

    /// Signed column distance travelled.
    #[inline]
    pub const fn col_delta(self) -> i8 {
        self.end.col() as i8 - self.start.col() as i8
    }

    /// Returns the coordinate notation for this move (e.g., "e2e4", "e7e8q").
    pub fn to_coordinate(self) -> String {
        match self.promotion {
            Some(kind) => format!(
                "{}{}{}",
                self.start,
                self.end,
                kind.symbol(crate::TeamColor::Black)
            ),
            None => format!("{}{}", self.start, self.end),
        }
    }
}

impl FromStr for Move {
    type Err = NotationError;

    /// Parses coordinate notation. Legality is not checked.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_ascii() || s.len() < 4 || s.len() > 5 {
            return Err(NotationError::InvalidMove(s.to_string()));
        }
        let start: Position = s[0..2].parse()?;
        let end: Position = s[2..4].parse()?;
        let promotion = match s[4..].chars().next() {
            Some(c) => {
                Some(PieceKind::from_promotion_char(c).ok_or(NotationError::InvalidPromotion(c))?)
            }
            None => None,
        };
        Ok(Move::new(start, end, promotion))
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_coordinate())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_coordinate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn move_accessors() {
        let m = Move::normal(pos("e2"), pos("e4"));
        assert_eq!(m.start(), pos("e2"));
        assert_eq!(m.end(), pos("e4"));
        assert_eq!(m.promotion(), None);
        assert_eq!(m.row_delta(), 2);
        assert_eq!(m.col_delta(), 0);
    }

    #[test]
    fn move_coordinate_notation() {
        assert_eq!(Move::normal(pos("e2"), pos("e4")).to_coordinate(), "e2e4");
        let promo = Move::promote(pos("e7"), pos("e8"), PieceKind::Knight);
        assert_eq!(promo.to_coordinate(), "e7e8n");
        assert!(promo.is_promotion());
    }

    #[test]
    fn move_from_str() {
        let m: Move = "g1f3".parse().unwrap();
        assert_eq!(m, Move::normal(pos("g1"), pos("f3")));

        let promo: Move = "b2a1R".parse().unwrap();
        assert_eq!(promo.promotion(), Some(PieceKind::Rook));
        assert_eq!(promo.col_delta(), -1);
    }

    #[test]
    fn move_from_str_errors() {
        assert_eq!(
            "e2".parse::<Move>(),
            Err(NotationError::InvalidMove("e2".to_string()))
        );
        assert_eq!(
            "e2e4qq".parse::<Move>(),
            Err(NotationError::InvalidMove("e2e4qq".to_string()))
        );
        assert_eq!(
            "e2e9".parse::<Move>(),
            Err(NotationError::InvalidSquare("e9".to_string()))
        );
        assert_eq!(
            "e7e8k".parse::<Move>(),
            Err(NotationError::InvalidPromotion('k'))
        );
    }

    #[test]
    fn promotion_is_part_of_equality() {
        let queen = Move::promote(pos("a7"), pos("a8"), PieceKind::Queen);
        let rook = Move::promote(pos("a7"), pos("a8"), PieceKind::Rook);
        assert_ne!(queen, rook);
        assert_ne!(queen, Move::normal(pos("a7"), pos("a8")));
    }

    #[test]
    fn move_serializes_structurally() {
        let m = Move::promote(pos("h2"), pos("h1"), PieceKind::Queen);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(
            json,
            r#"{"start":{"row":2,"col":8},"end":{"row":1,"col":8},"promotion":"Queen"}"#
        );
    }

    #[test]
    fn move_debug_display() {
        let m = Move::normal(pos("e2"), pos("e4"));
        assert_eq!(format!("{:?}", m), "Move(e2e4)");
        assert_eq!(format!("{}", m), "e2e4");
    }
}
