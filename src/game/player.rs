//! A seat's name, board and score.

use serde::{Deserialize, Serialize};

use crate::board::{score, Grid};
use crate::core::PlayerId;

/// One participant in a match.
///
/// The score is derived from the grid and only changes through
/// [`Player::rescore`]. The opponent is a seat id into the match's
/// `PlayerMap`, set once when the match pairs its players.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    grid: Grid,
    score: u32,
    opponent: Option<PlayerId>,
}

impl Player {
    /// Create an unpaired player with an empty `size × size` grid.
    #[must_use]
    pub fn new(name: impl Into<String>, size: usize) -> Self {
        Self {
            name: name.into(),
            grid: Grid::new(size),
            score: 0,
            opponent: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Score as of the last rescore.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn opponent(&self) -> Option<PlayerId> {
        self.opponent
    }

    pub(crate) fn set_opponent(&mut self, opponent: PlayerId) {
        self.opponent = Some(opponent);
    }

    /// Recompute the score from the grid.
    pub(crate) fn rescore(&mut self) {
        self.score = score(&self.grid);
    }

    /// Empty the grid for a new game. Name and opponent are kept.
    pub(crate) fn reset(&mut self) {
        self.grid.reset();
        self.score = 0;
    }
}
