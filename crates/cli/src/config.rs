//! CLI configuration, loaded from a TOML file.

use chesskit_core::Side;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for one game session. Every field has a default, so a config
/// file only needs the keys it wants to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Side the human plays: "white" or "black".
    pub human_side: String,
    /// Opposing engine: "minimax" or "random".
    pub engine: String,
    /// Wall-clock budget per engine move, in milliseconds.
    pub think_time_ms: u64,
    /// Optional FEN to start from instead of the standard position.
    pub fen: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            human_side: "white".to_string(),
            engine: "minimax".to_string(),
            think_time_ms: 2000,
            fen: None,
        }
    }
}

impl CliConfig {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
        toml::from_str(&contents).map_err(|e| format!("Failed to parse: {}", e))
    }

    pub fn human_side(&self) -> Result<Side, String> {
        match self.human_side.to_lowercase().as_str() {
            "white" | "w" => Ok(Side::White),
            "black" | "b" => Ok(Side::Black),
            other => Err(format!("Unknown side: {}", other)),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
