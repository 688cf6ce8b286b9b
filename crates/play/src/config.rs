//! Settings for a terminal game

use chess_core::Color;
use minimax_engine::EngineConfig;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Side the human plays
    pub human: Side,
    /// Draw the board from Black's side
    pub flipped: bool,
    /// Log filter used when RUST_LOG is not set
    pub log: String,
    pub engine: EngineConfig,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            human: Side::White,
            flipped: false,
            log: "info".to_string(),
            engine: EngineConfig::default(),
        }
    }
}
