//! Collaborator traits for driving a match.
//!
//! The engine never rolls dice or asks anyone for a column itself.
//! A [`Session`](super::Session) pulls rolls from a [`DiceSource`] and
//! columns from a [`MoveSource`], and reports progress to an [`Observer`].

use crate::core::{Face, GameError, GameRng, PlayerId, TurnRecord};
use crate::game::Match;
use crate::rules::GameResult;

/// What a move source sees when asked for a column.
#[derive(Clone, Copy, Debug)]
pub struct TurnView<'a> {
    /// The match as it stands before the move.
    pub game: &'a Match,
    /// The seat that must move.
    pub player: PlayerId,
    /// The face that was rolled.
    pub face: Face,
    /// How many columns this player has already been refused this turn.
    pub attempt: u32,
}

/// Supplies die rolls.
pub trait DiceSource {
    fn roll(&mut self) -> Face;
}

impl DiceSource for GameRng {
    fn roll(&mut self) -> Face {
        GameRng::roll(self)
    }
}

/// Supplies column choices.
///
/// Returning `None` gives up; the session then ends with
/// `SessionError::Aborted`.
pub trait MoveSource {
    fn choose_column(&mut self, view: &TurnView<'_>) -> Option<usize>;
}

/// Receives session events. Every hook defaults to doing nothing.
pub trait Observer {
    /// A turn was applied.
    fn on_turn(&mut self, _game: &Match, _record: &TurnRecord) {}

    /// A column was refused; the player will be asked again.
    fn on_retry(&mut self, _player: PlayerId, _error: &GameError) {}

    /// Both grids filled up.
    fn on_game_over(&mut self, _game: &Match, _result: &GameResult) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {}
