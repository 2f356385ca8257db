//! Console chess
//!
//! Plays games between the classical engine and human players typing moves on
//! stdin. Games are configured by a TOML file and command-line flags.

pub mod config;
pub mod game;
pub mod input;
pub mod render;

pub use config::{Cli, ConfigError, PlayConfig, Players};
pub use game::{GameOutcome, GameReport, GameRunner};
pub use input::{InputError, MoveKind};
pub use render::render_board;
