//! Driving a match with external collaborators.
//!
//! - `traits`: `DiceSource`, `MoveSource`, `Observer`
//! - `driver`: `Session`, which runs turns, retries refused columns and
//!   supports replay

pub mod traits;
pub mod driver;

pub use traits::{DiceSource, MoveSource, NoopObserver, Observer, TurnView};
pub use driver::Session;
