//! Engine configuration.
//!
//! Loaded from an optional YAML file; command-line flags override individual
//! fields afterwards. Missing keys fall back to the defaults below.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{Player, Team};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Team of `players[0]`, which opens the game.
    pub first_player: Team,
    /// Seed for reproducible games; `None` draws one from the OS.
    pub seed: Option<u64>,
    /// Ply cap for playing a game to completion.
    pub max_plies: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            first_player: Team::White,
            seed: None,
            max_plies: 2000,
        }
    }
}

impl EngineConfig {
    /// Read `path` if given and present, otherwise use the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ChessErrors> {
        match path {
            Some(p) if p.exists() => {
                let content = fs::read_to_string(p).map_err(|e| {
                    ChessErrors::ConfigError(format!("failed to read {}: {e}", p.display()))
                })?;
                Self::from_yaml(&content)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, ChessErrors> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| ChessErrors::ConfigError(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ChessErrors> {
        if self.first_player == Team::None {
            return Err(ChessErrors::ConfigError(
                "first_player must be White or Black".to_string(),
            ));
        }
        if self.max_plies == 0 {
            return Err(ChessErrors::ConfigError(
                "max_plies must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Player order derived from `first_player`.
    pub fn players(&self) -> [Player; 2] {
        [
            Player::new(self.first_player),
            Player::new(self.first_player.opposite()),
        ]
    }
}
