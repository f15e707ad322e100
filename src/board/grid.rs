//! Square grid of die faces.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Face, GameError, StateError};

/// A player's `size × size` board.
///
/// Cells are stored row-major. Row 0 is the top row; placement fills a
/// column from the top down.
///
/// ## Example
///
/// ```
/// use dice_clash::board::Grid;
/// use dice_clash::core::Face;
///
/// let mut grid = Grid::new(3);
/// let six = Face::new(6).unwrap();
///
/// assert_eq!(grid.place(1, six).unwrap(), 0);
/// assert_eq!(grid.place(1, six).unwrap(), 1);
/// assert_eq!(grid.clear_matches(1, six).unwrap().len(), 2);
/// assert!(grid.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GridRepr")]
pub struct Grid {
    size: usize,
    cells: Vec<Option<Face>>,
}

/// Unchecked wire form of `Grid`.
#[derive(Deserialize)]
struct GridRepr {
    size: usize,
    cells: Vec<Option<Face>>,
}

impl TryFrom<GridRepr> for Grid {
    type Error = StateError;

    fn try_from(repr: GridRepr) -> Result<Self, Self::Error> {
        let GridRepr { size, cells } = repr;
        if size == 0 {
            return Err(StateError::EmptyGrid);
        }
        if size.checked_mul(size) != Some(cells.len()) {
            return Err(StateError::CellCount {
                size,
                cells: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }
}

impl Grid {
    /// Create an empty grid.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Grid size must be at least 1");
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell contents, `None` if empty or out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Face> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells[row * self.size + col]
    }

    /// Iterate a column's cells top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = Option<Face>> + '_ {
        self.cells.iter().skip(col).step_by(self.size).copied()
    }

    /// Iterate rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Face>]> {
        self.cells.chunks(self.size)
    }

    fn check_column(&self, col: usize) -> Result<(), GameError> {
        if col < self.size {
            Ok(())
        } else {
            Err(GameError::InvalidColumn {
                column: col,
                size: self.size,
            })
        }
    }

    /// True iff no cell in `col` is empty.
    pub fn is_column_full(&self, col: usize) -> Result<bool, GameError> {
        self.check_column(col)?;
        Ok(self.column(col).all(|cell| cell.is_some()))
    }

    /// Put `face` into the first empty cell of `col`, scanning top to bottom.
    ///
    /// Returns the row used. A full column is left untouched.
    pub fn place(&mut self, col: usize, face: Face) -> Result<usize, GameError> {
        self.check_column(col)?;
        let row = (0..self.size)
            .find(|&row| self.cells[row * self.size + col].is_none())
            .ok_or(GameError::ColumnFull { column: col })?;
        self.cells[row * self.size + col] = Some(face);
        Ok(row)
    }

    /// Empty every cell in `col` holding `face`.
    ///
    /// Returns the rows that were cleared (possibly none).
    pub fn clear_matches(
        &mut self,
        col: usize,
        face: Face,
    ) -> Result<SmallVec<[usize; 5]>, GameError> {
        self.check_column(col)?;
        let mut cleared = SmallVec::new();
        for row in 0..self.size {
            let cell = &mut self.cells[row * self.size + col];
            if *cell == Some(face) {
                *cell = None;
                cleared.push(row);
            }
        }
        Ok(cleared)
    }

    /// Columns that still have room.
    pub fn open_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.size).filter(|&col| self.column(col).any(|cell| cell.is_none()))
    }

    /// True iff no cell anywhere is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// True iff every cell is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Empty every cell; the size is unchanged.
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Some(face) => face.to_string(),
                    None => ".".to_string(),
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face(value: u8) -> Face {
        Face::new(value).unwrap()
    }

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(4);
        assert_eq!(grid.size(), 4);
        assert!(grid.is_empty());
        assert!(!grid.is_full());
        assert_eq!(grid.open_columns().count(), 4);
    }

    #[test]
    #[should_panic(expected = "Grid size must be at least 1")]
    fn test_zero_size_grid() {
        let _ = Grid::new(0);
    }

    #[test]
    fn test_place_fills_top_down() {
        let mut grid = Grid::new(3);

        assert_eq!(grid.place(2, face(1)), Ok(0));
        assert_eq!(grid.place(2, face(2)), Ok(1));
        assert_eq!(grid.place(2, face(3)), Ok(2));

        let column: Vec<_> = grid.column(2).collect();
        assert_eq!(column, vec![Some(face(1)), Some(face(2)), Some(face(3))]);
        assert_eq!(grid.is_column_full(2), Ok(true));
        assert_eq!(grid.is_column_full(0), Ok(false));
    }

    #[test]
    fn test_place_into_full_column_leaves_grid_unchanged() {
        let mut grid = Grid::new(3);
        for _ in 0..3 {
            grid.place(0, face(4)).unwrap();
        }
        let before = grid.clone();

        assert_eq!(grid.place(0, face(5)), Err(GameError::ColumnFull { column: 0 }));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_place_reuses_cleared_gap() {
        let mut grid = Grid::new(3);
        grid.place(0, face(2)).unwrap();
        grid.place(0, face(5)).unwrap();
        grid.clear_matches(0, face(2)).unwrap();

        // Top cell is empty again; nothing shifts down.
        assert_eq!(grid.get(0, 0), None);
        assert_eq!(grid.get(1, 0), Some(face(5)));
        assert_eq!(grid.place(0, face(6)), Ok(0));
    }

    #[test]
    fn test_invalid_column() {
        let mut grid = Grid::new(3);
        let err = GameError::InvalidColumn { column: 3, size: 3 };

        assert_eq!(grid.is_column_full(3), Err(err.clone()));
        assert_eq!(grid.place(3, face(1)), Err(err.clone()));
        assert_eq!(grid.clear_matches(3, face(1)), Err(err));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_clear_matches_only_touches_matching_cells() {
        let mut grid = Grid::new(3);
        grid.place(1, face(3)).unwrap();
        grid.place(1, face(4)).unwrap();
        grid.place(1, face(3)).unwrap();
        grid.place(0, face(3)).unwrap();

        let cleared = grid.clear_matches(1, face(3)).unwrap();
        assert_eq!(cleared.as_slice(), &[0, 2]);

        assert_eq!(grid.get(1, 1), Some(face(4)));
        assert_eq!(grid.get(0, 0), Some(face(3)));
        assert_eq!(grid.get(0, 1), None);
        assert_eq!(grid.get(2, 1), None);
    }

    #[test]
    fn test_clear_matches_no_op() {
        let mut grid = Grid::new(3);
        grid.place(0, face(1)).unwrap();
        let before = grid.clone();

        assert!(grid.clear_matches(0, face(6)).unwrap().is_empty());
        assert_eq!(grid, before);
    }

    #[test]
    fn test_is_full_iff_every_column_full() {
        let mut grid = Grid::new(3);
        for col in 0..3 {
            for _ in 0..3 {
                assert!(!grid.is_full());
                grid.place(col, face(1)).unwrap();
            }
        }
        assert!(grid.is_full());
        assert!((0..3).all(|col| grid.is_column_full(col).unwrap()));
        assert_eq!(grid.open_columns().count(), 0);
    }

    #[test]
    fn test_reset() {
        let mut grid = Grid::new(5);
        for col in 0..5 {
            grid.place(col, face(2)).unwrap();
        }

        grid.reset();
        assert!(grid.is_empty());
        assert_eq!(grid.size(), 5);
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::new(3);
        grid.place(0, face(3)).unwrap();
        grid.place(2, face(6)).unwrap();
        grid.place(2, face(1)).unwrap();

        assert_eq!(grid.to_string(), "3 . 6\n. . 1\n. . .\n");
    }

    #[test]
    fn test_grid_serde_rejects_bad_shape() {
        let mut grid = Grid::new(2);
        grid.place(1, face(4)).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, r#"{"size":2,"cells":[null,4,null,null]}"#);
        assert_eq!(serde_json::from_str::<Grid>(&json).unwrap(), grid);

        assert!(serde_json::from_str::<Grid>(r#"{"size":3,"cells":[]}"#).is_err());
        assert!(serde_json::from_str::<Grid>(r#"{"size":0,"cells":[]}"#).is_err());
        assert!(serde_json::from_str::<Grid>(r#"{"size":1,"cells":[null,null]}"#).is_err());
        assert!(serde_json::from_str::<Grid>(r#"{"size":1,"cells":[7]}"#).is_err());
    }
}
