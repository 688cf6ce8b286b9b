//! Engine configuration, loaded from TOML

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::eval::TerminalScoring;

pub const DEFAULT_DEPTH: u8 = 3;
pub const MIN_DEPTH: u8 = 1;
pub const MAX_DEPTH: u8 = 8;

/// Settings for [`crate::MinimaxEngine`], the `[engine]` table of a config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Nominal depth in plies: the root move plus `depth - 1` recursive plies
    pub depth: u8,
    /// Scoring of checkmate, stalemate and drawn positions
    pub terminal_scoring: TerminalScoring,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            terminal_scoring: TerminalScoring::Decisive,
        }
    }
}

impl EngineConfig {
    /// Same config with `depth` clamped into the supported range.
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth.clamp(MIN_DEPTH, MAX_DEPTH);
        self
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Reads and deserializes a TOML file.
pub fn load_toml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
