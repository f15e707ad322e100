//! Core types: faces, seats, actions, RNG, configuration, errors.
//!
//! Everything here is independent of grid layout and match flow.

pub mod face;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use face::Face;
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::{GameRng, GameRngState};
pub use config::{normalize_name, MatchConfig};
pub use action::{Action, TurnRecord};
pub use error::{ConfigError, GameError, SessionError, StateError};
