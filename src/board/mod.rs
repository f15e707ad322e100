//! Player boards and how they are scored.

pub mod grid;
pub mod scoring;

pub use grid::Grid;
pub use scoring::{column_score, face_score, score};
