//! Turn resolution: place, remove, rescore.

use crate::core::{Action, GameError, PlayerId, PlayerMap, TurnRecord};

use super::player::Player;

/// Apply one turn for `player` to a pair of players.
///
/// 1. Fails with `NoOpponent` if `player` was never paired.
/// 2. Places the face on the player's own grid. `ColumnFull` and
///    `InvalidColumn` leave both grids untouched, including when the
///    column only exists on one of the two grids.
/// 3. Clears every matching face from the opponent's same column.
/// 4. Rescores both players from scratch.
///
/// The returned record has `round` set to 0; the match fills it in.
pub fn resolve_turn(
    players: &mut PlayerMap<Player>,
    player: PlayerId,
    action: Action,
) -> Result<TurnRecord, GameError> {
    let opponent = players[player]
        .opponent()
        .ok_or(GameError::NoOpponent { player })?;
    debug_assert_eq!(opponent, player.other(), "pairing must be symmetric");

    let (own, other) = players.pair_mut(player);
    let size = other.grid().size();
    if action.column >= size {
        return Err(GameError::InvalidColumn {
            column: action.column,
            size,
        });
    }
    let row = own.grid_mut().place(action.column, action.face)?;
    let removed_rows = other.grid_mut().clear_matches(action.column, action.face)?;

    for (_, p) in players.iter_mut() {
        p.rescore();
    }

    log::debug!(
        "{player} placed {} in column {} row {row}, removed {} from {opponent}",
        action.face,
        action.column,
        removed_rows.len()
    );

    Ok(TurnRecord {
        player,
        action,
        row,
        removed_rows,
        round: 0,
    })
}
