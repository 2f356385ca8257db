//! Game configuration: an optional TOML file overridden by command-line flags.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chessai_core::Color;
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use thiserror::Error;

/// Who controls each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Players {
    /// The engine plays both sides
    #[default]
    ComputerVsComputer,
    /// The engine plays White, a human plays Black
    ComputerVsHuman,
    /// Humans play both sides
    HumanVsHuman,
}

impl Players {
    pub fn is_computer(self, color: Color) -> bool {
        match self {
            Players::ComputerVsComputer => true,
            Players::ComputerVsHuman => color == Color::White,
            Players::HumanVsHuman => false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("search depth must be at least 1")]
    ZeroDepth,
}

/// Configuration for one game
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayConfig {
    pub players: Players,
    /// Search depth in plies for computer players
    pub depth: u8,
    /// Start from pawns, rooks and kings only
    pub reduced_board: bool,
    /// Full turns (one move by each side) before the game is stopped
    pub max_turns: u32,
    /// Default tracing filter when RUST_LOG is unset
    pub log_level: String,
    /// Start from this FEN instead of the initial board
    pub fen: Option<String>,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            players: Players::default(),
            depth: 3,
            reduced_board: false,
            max_turns: 200,
            log_level: "info".to_string(),
            fen: None,
        }
    }
}

impl PlayConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: PlayConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("failed to load config {}", path.display()))
    }

    /// Builds the configuration for a run: the config file if given, then CLI overrides.
    pub fn resolve(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(players) = cli.players {
            self.players = players;
        }
        if let Some(depth) = cli.depth {
            self.depth = depth;
        }
        if cli.reduced_board {
            self.reduced_board = true;
        }
        if let Some(max_turns) = cli.max_turns {
            self.max_turns = max_turns;
        }
        if let Some(level) = &cli.log_level {
            self.log_level = level.clone();
        }
        if let Some(fen) = &cli.fen {
            self.fen = Some(fen.clone());
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(())
    }
}

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// TOML file with game settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Who plays each side
    #[arg(short, long, value_enum)]
    pub players: Option<Players>,

    /// Search depth for computer players
    #[arg(short, long)]
    pub depth: Option<u8>,

    /// Start from pawns, rooks and kings only
    #[arg(long)]
    pub reduced_board: bool,

    /// Stop the game after this many full turns
    #[arg(long)]
    pub max_turns: Option<u32>,

    /// Tracing filter used when RUST_LOG is unset (e.g. "debug")
    #[arg(long)]
    pub log_level: Option<String>,

    /// Start from a FEN position
    #[arg(long)]
    pub fen: Option<String>,
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
