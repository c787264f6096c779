//! Plays a [`GameScript`] through the rules engine.

use crate::script::GameScript;
use chess_core::TeamColor;
use chess_engine::{Game, GameError, GameStatus};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

/// A script move that could not be played.
#[derive(Error, Debug)]
#[error("move {ply} ({text}) rejected: {source}")]
pub struct ReplayError {
    /// One-based index of the move in the script.
    pub ply: usize,
    /// The move as written in the script.
    pub text: String,
    #[source]
    pub source: GameError,
}

/// Outcome of a replayed script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    pub name: String,
    pub moves_played: usize,
    /// Side to move after the last move.
    pub turn: TeamColor,
    pub status: GameStatus,
}

/// Plays every move of `script` from the standard starting layout.
///
/// Stops at the first move the engine rejects.
pub fn replay(script: &GameScript) -> Result<(Game, ReplayReport), ReplayError> {
    let mut game = Game::new();
    game.set_team_turn(script.start.into());
    info!(name = %script.name, moves = script.moves.len(), "replaying script");

    for (i, text) in script.moves.iter().enumerate() {
        let turn = game.team_turn();
        game.make_move_str(text).map_err(|source| ReplayError {
            ply: i + 1,
            text: text.clone(),
            source,
        })?;
        debug!(ply = i + 1, mv = %text, %turn, "played");
    }

    let report = ReplayReport {
        name: script.name.clone(),
        moves_played: script.moves.len(),
        turn: game.team_turn(),
        status: game.status(),
    };
    Ok((game, report))
}

impl std::fmt::Display for ReplayReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} moves played, {} to move, {}",
            self.name, self.moves_played, self.turn, self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_engine::IllegalMoveReason;

    fn script(moves: &[&str]) -> GameScript {
        GameScript {
            name: "test".to_string(),
            start: Default::default(),
            moves: moves.iter().map(|m| m.to_string()).collect(),
        }
    }

    #[test]
    fn empty_script_is_the_start_position() {
        let (game, report) = replay(&script(&[])).unwrap();
        assert_eq!(game, Game::new());
        assert_eq!(report.moves_played, 0);
        assert_eq!(report.status, GameStatus::Ongoing);
    }

    #[test]
    fn fools_mate_report() {
        let (_, report) = replay(&script(&["f2f3", "e7e5", "g2g4", "d8h4"])).unwrap();
        assert_eq!(report.turn, TeamColor::White);
        assert_eq!(report.status, GameStatus::Checkmate);
        assert_eq!(
            report.to_string(),
            "test: 4 moves played, White to move, checkmate"
        );
    }

    #[test]
    fn stops_at_first_illegal_move() {
        let err = replay(&script(&["e2e4", "e7e5", "e4e5", "d2d4"])).unwrap_err();
        assert_eq!(err.ply, 3);
        assert_eq!(err.text, "e4e5");
        assert_eq!(err.source.illegal_reason(), Some(IllegalMoveReason::NotLegal));
    }

    #[test]
    fn black_may_start() {
        let mut s = script(&["e7e5"]);
        s.start = crate::script::StartSide::Black;
        let (game, report) = replay(&s).unwrap();
        assert_eq!(report.turn, TeamColor::White);
        assert!(game.board().piece_at("e5".parse().unwrap()).is_some());
    }

    #[test]
    fn report_json_shape() {
        let (_, report) = replay(&script(&["e2e4"])).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["moves_played"], 1);
        assert_eq!(json["turn"], "Black");
        assert_eq!(json["status"], "ongoing");
    }
}
