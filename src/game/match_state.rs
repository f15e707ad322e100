//! Match orchestration and the round state machine.
//!
//! ## States
//!
//! - `AwaitingTurn(PlayerId::ONE)` / `AwaitingTurn(PlayerId::TWO)`
//! - `GameOver(GameResult)`
//!
//! After every turn a single transition runs: if both grids are full the
//! game is over, otherwise play moves to the next seat in round order,
//! skipping any seat whose grid is already full. The game can therefore
//! end straight after either player's turn, not only at the end of a
//! round.

use serde::{Deserialize, Serialize};

use crate::core::{
    Action, ConfigError, Face, GameError, MatchConfig, PlayerId, PlayerMap, StateError, TurnRecord,
};
use crate::rules::{GameResult, RulesEngine};

use super::player::Player;
use super::turn::resolve_turn;

/// Where a match currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchState {
    /// Waiting for this seat to move.
    AwaitingTurn(PlayerId),
    /// Both grids are full; no further turns.
    GameOver(GameResult),
}

/// Two paired players and the state of their game.
///
/// ## Example
///
/// ```
/// use dice_clash::core::{Face, PlayerId};
/// use dice_clash::game::{Match, MatchState};
///
/// let mut game = Match::new("Ada", "Grace", 3);
/// let three = Face::new(3).unwrap();
///
/// game.take_turn(PlayerId::ONE, three, 0).unwrap();
/// assert_eq!(game.player(PlayerId::ONE).score(), 3);
/// assert_eq!(game.state(), MatchState::AwaitingTurn(PlayerId::TWO));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "MatchRepr")]
pub struct Match {
    players: PlayerMap<Player>,
    state: MatchState,
    round: u32,
    history: Vec<TurnRecord>,
}

/// Unchecked wire form of `Match`.
#[derive(Deserialize)]
struct MatchRepr {
    players: PlayerMap<Player>,
    state: MatchState,
    round: u32,
    history: Vec<TurnRecord>,
}

impl TryFrom<MatchRepr> for Match {
    type Error = StateError;

    /// Holds a saved match to the same shape `from_players` builds:
    /// equal grids, symmetric pairing, and a state the grids agree with.
    /// Scores are derived, so they are recomputed rather than trusted.
    fn try_from(repr: MatchRepr) -> Result<Self, Self::Error> {
        let MatchRepr {
            mut players,
            state,
            round,
            history,
        } = repr;

        let first = players[PlayerId::ONE].grid().size();
        let second = players[PlayerId::TWO].grid().size();
        if first != second {
            return Err(StateError::MismatchedGrids { first, second });
        }
        for (id, player) in players.iter() {
            if player.opponent() != Some(id.other()) {
                return Err(StateError::Unpaired { player: id });
            }
        }
        if round == 0 {
            return Err(StateError::Inconsistent("rounds start at 1"));
        }

        for (_, player) in players.iter_mut() {
            player.rescore();
        }
        let game = Self {
            players,
            state,
            round,
            history,
        };

        let state = game.state;
        match state {
            MatchState::AwaitingTurn(_) if game.both_full() => {
                Err(StateError::Inconsistent("both grids are full but the game is not over"))
            }
            MatchState::AwaitingTurn(active) if game.players[active].grid().is_full() => {
                Err(StateError::Inconsistent("the seat to move has a full grid"))
            }
            MatchState::GameOver(_) if !game.both_full() => {
                Err(StateError::Inconsistent("the game is over but a grid has room"))
            }
            MatchState::GameOver(result)
                if result
                    != GameResult::from_scores(
                        game.players[PlayerId::ONE].score(),
                        game.players[PlayerId::TWO].score(),
                    ) =>
            {
                Err(StateError::Inconsistent("the result does not follow from the scores"))
            }
            _ => Ok(game),
        }
    }
}

impl Match {
    /// Create a match between two new players on `size × size` grids.
    #[must_use]
    pub fn new(player1: impl Into<String>, player2: impl Into<String>, size: usize) -> Self {
        Self::from_players(Player::new(player1, size), Player::new(player2, size))
    }

    /// Create a match from a validated configuration.
    pub fn from_config(config: &MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(
            config.player1.clone(),
            config.player2.clone(),
            config.size,
        ))
    }

    /// Pair two players and start at round 1 with `PlayerId::ONE` to move.
    ///
    /// # Panics
    ///
    /// Panics if the grids differ in size.
    #[must_use]
    pub fn from_players(mut first: Player, mut second: Player) -> Self {
        assert_eq!(
            first.grid().size(),
            second.grid().size(),
            "Both grids must have the same size"
        );
        first.set_opponent(PlayerId::TWO);
        second.set_opponent(PlayerId::ONE);

        let mut game = Self {
            players: PlayerMap::from_pair(first, second),
            state: MatchState::AwaitingTurn(PlayerId::ONE),
            round: 1,
            history: Vec::new(),
        };
        game.reset();
        game
    }

    // === Accessors ===

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    #[must_use]
    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Current round (starts at 1).
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Every resolved turn since the last reset, oldest first.
    #[must_use]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// Grid side length shared by both players.
    #[must_use]
    pub fn grid_size(&self) -> usize {
        self.players[PlayerId::ONE].grid().size()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.state, MatchState::GameOver(_))
    }

    /// The final result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.state {
            MatchState::GameOver(result) => Some(result),
            MatchState::AwaitingTurn(_) => None,
        }
    }

    /// True iff neither grid has an empty cell.
    #[must_use]
    pub fn both_full(&self) -> bool {
        self.players.iter().all(|(_, p)| p.grid().is_full())
    }

    // === Play ===

    /// Place `face` in `column` of `player`'s grid and knock matching dice
    /// out of the opponent's same column.
    ///
    /// Recoverable errors (`InvalidColumn`, `ColumnFull`) leave the match
    /// unchanged so the caller can ask for another column.
    pub fn take_turn(
        &mut self,
        player: PlayerId,
        face: Face,
        column: usize,
    ) -> Result<TurnRecord, GameError> {
        match self.state {
            MatchState::GameOver(_) => return Err(GameError::GameOver),
            MatchState::AwaitingTurn(active) if active != player => {
                return Err(GameError::NotYourTurn { player });
            }
            MatchState::AwaitingTurn(_) => {}
        }

        let mut record = resolve_turn(&mut self.players, player, Action::new(face, column))?;
        record.round = self.round;
        self.history.push(record.clone());
        self.advance(player);
        Ok(record)
    }

    /// Move to the next state after `from` has acted.
    fn advance(&mut self, from: PlayerId) {
        if self.both_full() {
            self.finish();
            return;
        }

        // At least one grid has room, so this settles within two steps.
        let mut next = from;
        loop {
            if next == PlayerId::TWO {
                self.round += 1;
            }
            next = next.other();
            if !self.players[next].grid().is_full() {
                break;
            }
            log::debug!(
                "{} ({}) skipped in round {}: grid is full",
                next,
                self.players[next].name(),
                self.round
            );
        }
        self.state = MatchState::AwaitingTurn(next);
    }

    fn finish(&mut self) {
        let result = GameResult::from_scores(
            self.players[PlayerId::ONE].score(),
            self.players[PlayerId::TWO].score(),
        );
        log::info!(
            "game over after {} rounds: {:?} ({} - {})",
            self.round,
            result,
            self.players[PlayerId::ONE].score(),
            self.players[PlayerId::TWO].score()
        );
        self.state = MatchState::GameOver(result);
    }

    /// Clear both grids and start again at round 1.
    ///
    /// Names and the opponent pairing are kept.
    pub fn reset(&mut self) {
        for (_, player) in self.players.iter_mut() {
            player.reset();
        }
        self.history.clear();
        self.round = 1;
        self.state = MatchState::AwaitingTurn(PlayerId::ONE);
        log::info!(
            "new game: {} vs {} on a {}x{} grid",
            self.players[PlayerId::ONE].name(),
            self.players[PlayerId::TWO].name(),
            self.grid_size(),
            self.grid_size()
        );
    }
}

impl RulesEngine for Match {
    fn active_player(&self) -> Option<PlayerId> {
        match self.state {
            MatchState::AwaitingTurn(player) => Some(player),
            MatchState::GameOver(_) => None,
        }
    }

    fn legal_columns(&self, player: PlayerId) -> Vec<usize> {
        if self.active_player() != Some(player) {
            return vec![];
        }
        self.players[player].grid().open_columns().collect()
    }

    fn apply_action(&mut self, player: PlayerId, action: Action) -> Result<TurnRecord, GameError> {
        self.take_turn(player, action.face, action.column)
    }

    fn is_terminal(&self) -> Option<GameResult> {
        self.result()
    }
}
