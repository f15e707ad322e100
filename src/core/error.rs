//! Error types.
//!
//! - `GameError`: rule violations raised by the engine
//! - `ConfigError`: problems loading or validating a `MatchConfig`
//! - `SessionError`: failures while driving a match with collaborators
//! - `StateError`: deserialised state that breaks a structural invariant

use std::path::PathBuf;

use super::player::PlayerId;

/// Errors raised by grid and match operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("column {column} is out of range for a grid of size {size}")]
    InvalidColumn { column: usize, size: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("{player} has no opponent")]
    NoOpponent { player: PlayerId },

    #[error("it is not {player}'s turn")]
    NotYourTurn { player: PlayerId },

    #[error("the game is already over")]
    GameOver,

    #[error("{0} is not a die face (expected 1-6)")]
    InvalidFace(u8),
}

impl GameError {
    /// Whether the caller can recover by choosing another column.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::InvalidColumn { .. } | GameError::ColumnFull { .. })
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that end a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error("move source stopped supplying columns")]
    Aborted,
}

/// Rejections from validated deserialisation of engine state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("{0} is not a seat (expected 0 or 1)")]
    InvalidSeat(u8),

    #[error("grid size must be at least 1")]
    EmptyGrid,

    #[error("grid of size {size} cannot hold {cells} cells")]
    CellCount { size: usize, cells: usize },

    #[error("grids differ in size ({first} and {second})")]
    MismatchedGrids { first: usize, second: usize },

    #[error("{player} is not paired with the other seat")]
    Unpaired { player: PlayerId },

    #[error("match state disagrees with the grids: {0}")]
    Inconsistent(&'static str),
}
