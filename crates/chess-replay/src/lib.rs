//! Chess Replay - plays scripted games through the rules engine.
//!
//! # Modules
//!
//! - [`script`] - TOML game script loading
//! - [`replay`] - move-by-move playback and the resulting report

pub mod replay;
pub mod script;
