//! Turn actions and their recorded outcomes.
//!
//! An `Action` is what a player asks for: put the rolled face into a
//! column. A `TurnRecord` is what actually happened once the engine
//! applied it, including which of the opponent's dice were knocked out.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::face::Face;
use super::player::PlayerId;

/// Place `face` into `column` of the acting player's grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    /// The rolled face.
    pub face: Face,

    /// Target column (0-based).
    pub column: usize,
}

impl Action {
    #[must_use]
    pub fn new(face: Face, column: usize) -> Self {
        Self { face, column }
    }
}

/// A resolved turn, kept in match history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// The player who took the turn.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Row the die landed in.
    pub row: usize,

    /// Rows cleared from the opponent's grid in the same column.
    /// Grids are at most a handful of rows, so this stays inline.
    pub removed_rows: SmallVec<[usize; 5]>,

    /// Round number (starts at 1).
    pub round: u32,
}

impl TurnRecord {
    /// Number of opponent dice removed by this turn.
    #[must_use]
    pub fn removed(&self) -> usize {
        self.removed_rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_action_equality() {
        let three = Face::new(3).unwrap();
        let four = Face::new(4).unwrap();

        assert_eq!(Action::new(three, 0), Action::new(three, 0));
        assert_ne!(Action::new(three, 0), Action::new(three, 1));
        assert_ne!(Action::new(three, 0), Action::new(four, 0));
    }

    #[test]
    fn test_turn_record_serialization() {
        let record = TurnRecord {
            player: PlayerId::TWO,
            action: Action::new(Face::new(5).unwrap(), 2),
            row: 1,
            removed_rows: smallvec![0, 2],
            round: 4,
        };
        assert_eq!(record.removed(), 2);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: TurnRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
