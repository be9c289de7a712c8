//! Harness configuration

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chess_core::Strategy;
use greedy_engine::GreedyEngine;
use lookahead_engine::LookaheadEngine;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown strategy: {0} (expected lookahead or greedy)")]
    UnknownStrategy(String),
}

/// Which move selector an automated player uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// One-ply material lookahead
    Lookahead,
    /// Highest-value capture, else random
    Greedy,
}

impl StrategyKind {
    /// Build the strategy, seeding its random fallback when `seed` is set.
    pub fn build(self, seed: Option<u64>) -> Box<dyn Strategy> {
        match (self, seed) {
            (StrategyKind::Lookahead, Some(s)) => Box::new(LookaheadEngine::with_seed(s)),
            (StrategyKind::Lookahead, None) => Box::new(LookaheadEngine::new()),
            (StrategyKind::Greedy, Some(s)) => Box::new(GreedyEngine::with_seed(s)),
            (StrategyKind::Greedy, None) => Box::new(GreedyEngine::new()),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lookahead" | "material" => Ok(StrategyKind::Lookahead),
            "greedy" | "capture" => Ok(StrategyKind::Greedy),
            _ => Err(ConfigError::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::Lookahead => f.write_str("lookahead"),
            StrategyKind::Greedy => f.write_str("greedy"),
        }
    }
}

/// Settings for a self-play run. Missing keys fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoplayConfig {
    pub white: StrategyKind,
    pub black: StrategyKind,
    /// Collect candidates on the rayon pool
    pub parallel: bool,
    /// Stop the game after this many plies
    pub max_plies: u32,
    /// Seed for the strategies' random fallback (None = entropy)
    pub seed: Option<u64>,
    /// Print the board after every ply
    pub show_board: bool,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            white: StrategyKind::Lookahead,
            black: StrategyKind::Greedy,
            parallel: true,
            max_plies: 200,
            seed: None,
            show_board: false,
        }
    }
}

impl AutoplayConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Seed for one side. Black gets a different stream than White so two
    /// identical strategies do not mirror each other.
    pub fn seed_for(&self, color: chess_core::Color) -> Option<u64> {
        self.seed.map(|s| s.wrapping_add(color.idx() as u64))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
