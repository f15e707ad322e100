//! Rules engine trait and game results.
//!
//! `RulesEngine` defines:
//! - Who may act and where
//! - How actions modify state
//! - When the game ends and who won

pub mod engine;

pub use engine::{GameResult, RulesEngine};
