//! Property tests for grid operations and scoring.

use std::collections::HashMap;

use dice_clash::board::{column_score, score, Grid};
use dice_clash::core::{Face, GameError};
use proptest::prelude::*;

fn arb_face() -> impl Strategy<Value = Face> {
    (1u8..=6).prop_map(|v| Face::new(v).unwrap())
}

/// A grid of size 1-5 built from arbitrary placements. Placements into
/// full columns are skipped.
fn arb_grid() -> impl Strategy<Value = Grid> {
    (1usize..=5, prop::collection::vec((0usize..5, arb_face()), 0..40)).prop_map(
        |(size, moves)| {
            let mut grid = Grid::new(size);
            for (col, face) in moves {
                let _ = grid.place(col % size, face);
            }
            grid
        },
    )
}

/// Straightforward restatement of the column rule.
fn reference_score(grid: &Grid) -> u32 {
    let mut total = 0;
    for col in 0..grid.size() {
        let mut counts: HashMap<u8, u32> = HashMap::new();
        for face in grid.column(col).flatten() {
            *counts.entry(face.value()).or_default() += 1;
        }
        for (value, count) in counts {
            let value = u32::from(value);
            total += if count == 1 { value } else { value * count * count };
        }
    }
    total
}

proptest! {
    #[test]
    fn empty_grid_scores_zero(size in 1usize..=8) {
        prop_assert_eq!(score(&Grid::new(size)), 0);
    }

    #[test]
    fn single_die_scores_its_value(size in 1usize..=5, col in 0usize..5, face in arb_face()) {
        let mut grid = Grid::new(size);
        grid.place(col % size, face).unwrap();
        prop_assert_eq!(score(&grid), u32::from(face.value()));
    }

    #[test]
    fn pair_in_column_is_squared(size in 2usize..=5, col in 0usize..5, face in arb_face()) {
        let mut grid = Grid::new(size);
        grid.place(col % size, face).unwrap();
        grid.place(col % size, face).unwrap();
        prop_assert_eq!(score(&grid), u32::from(face.value()) * 4);
    }

    #[test]
    fn score_matches_reference(grid in arb_grid()) {
        prop_assert_eq!(score(&grid), reference_score(&grid));
        prop_assert_eq!(score(&grid), score(&grid));
        let by_column: u32 = (0..grid.size()).map(|c| column_score(&grid, c).unwrap()).sum();
        prop_assert_eq!(score(&grid), by_column);
        prop_assert!(column_score(&grid, grid.size()).is_err());
    }

    #[test]
    fn full_iff_every_column_full(grid in arb_grid()) {
        let all_columns = (0..grid.size()).all(|c| grid.is_column_full(c).unwrap());
        prop_assert_eq!(grid.is_full(), all_columns);
    }

    #[test]
    fn column_full_iff_no_empty_cell(grid in arb_grid(), col in 0usize..5) {
        let col = col % grid.size();
        let no_gaps = grid.column(col).all(|cell| cell.is_some());
        prop_assert_eq!(grid.is_column_full(col).unwrap(), no_gaps);
    }

    #[test]
    fn place_into_full_column_is_rejected(grid in arb_grid(), col in 0usize..5, face in arb_face()) {
        let col = col % grid.size();
        let mut after = grid.clone();
        let result = after.place(col, face);

        if grid.is_column_full(col).unwrap() {
            prop_assert_eq!(result, Err(GameError::ColumnFull { column: col }));
            prop_assert_eq!(&after, &grid);
        } else {
            let row = result.unwrap();
            prop_assert_eq!(grid.get(row, col), None);
            prop_assert!((0..row).all(|r| grid.get(r, col).is_some()));
            prop_assert_eq!(after.get(row, col), Some(face));
        }
    }

    #[test]
    fn clear_matches_is_exact(grid in arb_grid(), col in 0usize..5, face in arb_face()) {
        let col = col % grid.size();
        let mut after = grid.clone();
        let cleared = after.clear_matches(col, face).unwrap();

        for row in 0..grid.size() {
            for c in 0..grid.size() {
                let was = grid.get(row, c);
                let now = after.get(row, c);
                if c == col && was == Some(face) {
                    prop_assert_eq!(now, None);
                    prop_assert!(cleared.contains(&row));
                } else {
                    prop_assert_eq!(now, was);
                }
            }
        }
    }

    #[test]
    fn reset_empties_any_grid(grid in arb_grid()) {
        let mut grid = grid;
        let size = grid.size();
        grid.reset();
        prop_assert!(grid.is_empty());
        prop_assert_eq!(grid.size(), size);
        prop_assert_eq!(score(&grid), 0);
    }
}
