//! Session driver: rolls, asks, retries, and replays.

use crate::core::{GameError, SessionError, TurnRecord};
use crate::game::{Match, MatchState};
use crate::rules::GameResult;

use super::traits::{DiceSource, MoveSource, Observer, TurnView};

/// Runs a match against its collaborators.
///
/// Column errors (`InvalidColumn`, `ColumnFull`) are reported to the
/// observer and the same player is asked again with the same roll, for as
/// long as it takes. Anything else ends the session.
pub struct Session<D, M> {
    game: Match,
    dice: D,
    moves: M,
    games_played: u32,
}

impl<D: DiceSource, M: MoveSource> Session<D, M> {
    pub fn new(game: Match, dice: D, moves: M) -> Self {
        Self {
            game,
            dice,
            moves,
            games_played: 0,
        }
    }

    #[must_use]
    pub fn game(&self) -> &Match {
        &self.game
    }

    /// Completed games, across replays.
    #[must_use]
    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Roll for the active player and keep asking for a column until one
    /// is accepted.
    pub fn play_turn(&mut self, observer: &mut impl Observer) -> Result<TurnRecord, SessionError> {
        let player = match self.game.state() {
            MatchState::AwaitingTurn(player) => player,
            MatchState::GameOver(_) => return Err(GameError::GameOver.into()),
        };
        let face = self.dice.roll();
        log::debug!("{player} rolled {face}");

        let mut attempt = 0;
        loop {
            let view = TurnView {
                game: &self.game,
                player,
                face,
                attempt,
            };
            let column = self
                .moves
                .choose_column(&view)
                .ok_or(SessionError::Aborted)?;

            match self.game.take_turn(player, face, column) {
                Ok(record) => {
                    observer.on_turn(&self.game, &record);
                    return Ok(record);
                }
                Err(err) if err.is_recoverable() => {
                    log::debug!("{player} retrying: {err}");
                    observer.on_retry(player, &err);
                    attempt += 1;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Play turns until both grids are full.
    pub fn play_game(&mut self, observer: &mut impl Observer) -> Result<GameResult, SessionError> {
        loop {
            if let Some(result) = self.game.result() {
                self.games_played += 1;
                observer.on_game_over(&self.game, &result);
                return Ok(result);
            }
            self.play_turn(observer)?;
        }
    }

    /// Clear both grids for another game between the same players.
    pub fn replay(&mut self) {
        self.game.reset();
    }

    pub fn into_parts(self) -> (Match, D, M) {
        (self.game, self.dice, self.moves)
    }
}
