//! Rules engine trait.
//!
//! `Match` implements `RulesEngine`; callers that only need "who moves,
//! where can they move, apply it, is it over" can drive play through this
//! trait without depending on match internals.

use serde::{Deserialize, Serialize};

use crate::core::{Action, Face, GameError, PlayerId, TurnRecord};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Strictly higher score.
    Winner(PlayerId),
    /// Equal scores. Nobody loses.
    Tie,
}

impl GameResult {
    /// Compare two final scores.
    #[must_use]
    pub fn from_scores(first: u32, second: u32) -> Self {
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::ONE),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::TWO),
            std::cmp::Ordering::Equal => GameResult::Tie,
        }
    }

    /// Check if a player won outright.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// Check if a player lost. Always false on a tie.
    #[must_use]
    pub fn is_loser(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p != player)
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `active_player`: `None` once the game is over
/// - `legal_columns`: empty if the player can't act
/// - `apply_action`: must leave state untouched on error
/// - `is_terminal`: `None` while the game continues
pub trait RulesEngine {
    /// The seat expected to move next.
    fn active_player(&self) -> Option<PlayerId>;

    /// Columns the player may place into right now.
    fn legal_columns(&self, player: PlayerId) -> Vec<usize>;

    /// Apply an action for `player`.
    fn apply_action(&mut self, player: PlayerId, action: Action) -> Result<TurnRecord, GameError>;

    /// Check if the game is over.
    fn is_terminal(&self) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Enumerate all legal actions for a player holding `face`.
    fn legal_actions(&self, player: PlayerId, face: Face) -> Vec<Action> {
        self.legal_columns(player)
            .into_iter()
            .map(|column| Action::new(face, column))
            .collect()
    }
}
