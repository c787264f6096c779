//! Game script loading.
//!
//! A script is a TOML file naming a game and listing its moves in coordinate
//! notation:
//!
//! ```toml
//! name = "Fool's mate"
//! start = "white"
//! moves = ["f2f3", "e7e5", "g2g4", "d8h4"]
//! ```

use chess_core::TeamColor;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading a game script.
#[derive(Error, Debug)]
pub enum ScriptError {
    /// Failed to read the script file from disk.
    #[error("Failed to read script file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the script as valid TOML.
    #[error("Failed to parse script: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// The side that makes the first move of a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StartSide {
    #[default]
    White,
    Black,
}

impl From<StartSide> for TeamColor {
    fn from(side: StartSide) -> Self {
        match side {
            StartSide::White => TeamColor::White,
            StartSide::Black => TeamColor::Black,
        }
    }
}

/// A game to replay from the standard starting layout.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GameScript {
    /// Display name. Defaults to "untitled".
    #[serde(default = "default_name")]
    pub name: String,
    /// Side to move first. Defaults to White.
    #[serde(default)]
    pub start: StartSide,
    /// Moves in coordinate notation, such as `e2e4` or `e7e8q`.
    #[serde(default)]
    pub moves: Vec<String>,
}

fn default_name() -> String {
    "untitled".to_string()
}

impl GameScript {
    /// Reads and parses a script file.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::ReadError`] if the file cannot be read, or
    /// [`ScriptError::ParseError`] if it is not a valid script.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses a script from TOML text.
    pub fn parse(content: &str) -> Result<Self, ScriptError> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_script() {
        let script = GameScript::parse(
            r#"
name = "Scholar's mate"
start = "white"
moves = ["e2e4", "e7e5", "d1h5", "b8c6", "f1c4", "g8f6", "h5f7"]
"#,
        )
        .unwrap();

        assert_eq!(script.name, "Scholar's mate");
        assert_eq!(script.start, StartSide::White);
        assert_eq!(script.moves.len(), 7);
        assert_eq!(script.moves[6], "h5f7");
    }

    #[test]
    fn missing_fields_use_defaults() {
        let script = GameScript::parse("").unwrap();
        assert_eq!(script.name, "untitled");
        assert_eq!(script.start, StartSide::White);
        assert!(script.moves.is_empty());
    }

    #[test]
    fn black_start() {
        let script = GameScript::parse(r#"start = "black""#).unwrap();
        assert_eq!(TeamColor::from(script.start), TeamColor::Black);
    }

    #[test]
    fn unknown_side_is_a_parse_error() {
        let result = GameScript::parse(r#"start = "red""#);
        assert!(matches!(result, Err(ScriptError::ParseError(_))));
    }

    #[test]
    fn load_missing_file_is_a_read_error() {
        let result = GameScript::load("definitely/not/here.toml");
        assert!(matches!(result, Err(ScriptError::ReadError(_))));
    }
}
