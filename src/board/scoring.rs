//! Grid scoring.
//!
//! Each column is scored on its own. For every distinct face in a column:
//! a single die counts its pip value, while `n >= 2` matching dice count
//! `value * n * n`. Empty cells count nothing.
//!
//! Scores are always recomputed from the whole grid. Clearing a die can
//! change the multiplier of the dice left behind, so there is no
//! incremental form.

use crate::core::{Face, GameError};

use super::grid::Grid;

/// Contribution of `count` dice showing `face` in one column.
#[must_use]
pub fn face_score(face: Face, count: u32) -> u32 {
    let value = u32::from(face.value());
    match count {
        0 => 0,
        1 => value,
        n => value * n * n,
    }
}

/// Score of a single column.
///
/// Fails with `InvalidColumn` if `col` is out of range.
pub fn column_score(grid: &Grid, col: usize) -> Result<u32, GameError> {
    if col >= grid.size() {
        return Err(GameError::InvalidColumn {
            column: col,
            size: grid.size(),
        });
    }
    Ok(column_total(grid, col))
}

fn column_total(grid: &Grid, col: usize) -> u32 {
    let mut counts = [0u32; Face::COUNT];
    for face in grid.column(col).flatten() {
        counts[face.index()] += 1;
    }

    Face::ALL
        .iter()
        .zip(counts)
        .map(|(&face, count)| face_score(face, count))
        .sum()
}

/// Total score of a grid.
///
/// ```
/// use dice_clash::board::{score, Grid};
/// use dice_clash::core::Face;
///
/// let mut grid = Grid::new(3);
/// assert_eq!(score(&grid), 0);
///
/// let three = Face::new(3).unwrap();
/// grid.place(0, three).unwrap();
/// assert_eq!(score(&grid), 3);
/// grid.place(0, three).unwrap();
/// assert_eq!(score(&grid), 12);
/// ```
#[must_use]
pub fn score(grid: &Grid) -> u32 {
    (0..grid.size()).map(|col| column_total(grid, col)).sum()
}
