//! Players, turn resolution and the match state machine.

pub mod player;
pub mod turn;
pub mod match_state;

pub use player::Player;
pub use turn::resolve_turn;
pub use match_state::{Match, MatchState};
