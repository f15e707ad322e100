//! # dice-clash
//!
//! Engine for a two-player grid dice game.
//!
//! Each player owns a square grid. On a turn the active player rolls a die
//! and drops it into a column of their own grid, which knocks every die of
//! the same face out of the opponent's matching column. Columns score
//! `value` for a lone die and `value * n * n` for `n` matching dice. The
//! game ends when both grids are full; the higher score wins and equal
//! scores tie.
//!
//! ## Design Principles
//!
//! 1. **Recompute, don't increment**: scores are derived from the grid
//!    after every mutation.
//!
//! 2. **Ids, not references**: players are owned by the `Match`; the
//!    opponent link is a `PlayerId`.
//!
//! 3. **Collaborators at the edges**: rolls, column choices and display
//!    are supplied through the `session` traits, so the engine does no I/O.
//!
//! ## Modules
//!
//! - `core`: faces, seats, actions, RNG, configuration, errors
//! - `board`: grids and scoring
//! - `game`: players, turn resolution, the match state machine
//! - `rules`: `RulesEngine` trait and `GameResult`
//! - `session`: drive a match with dice/move sources and observers

pub mod core;
pub mod board;
pub mod game;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Face, PlayerId, PlayerMap,
    GameRng, GameRngState,
    MatchConfig, normalize_name,
    Action, TurnRecord,
    GameError, ConfigError, SessionError, StateError,
};

pub use crate::board::{Grid, score, column_score};

pub use crate::game::{Player, Match, MatchState};

pub use crate::rules::{RulesEngine, GameResult};

pub use crate::session::{DiceSource, MoveSource, Observer, NoopObserver, TurnView, Session};
