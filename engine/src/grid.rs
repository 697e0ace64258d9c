//! The 3x3 neighborhood window and its immutable snapshots.
//!
//! Positions carry no physical adjacency: the window is a fixed combinatorial
//! slot set over which every write ordering of an algorithm is exercised.
//!
//! ```text
//!  (0,0) (0,1) (0,2)
//!  (1,0) (1,1) (1,2)
//!  (2,0) (2,1) (2,2)
//! ```

use core::fmt;

use serde::Serialize;

use crate::cell::Cell;

/// Rows (and columns) in the window.
pub const SIDE: usize = 3;

/// Cells in the window.
pub const CELLS: usize = SIDE * SIDE;

/// A `(row, col)` slot in the window, each coordinate in `[0, 2]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a position, or `None` if either coordinate is out of range.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < SIDE && col < SIDE {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Position of the `index`-th slot in row-major order, wrapping modulo 9.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        let index = index % CELLS;
        Self {
            row: (index / SIDE) as u8,
            col: (index % SIDE) as u8,
        }
    }

    /// Row-major index in `[0, 8]`.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * SIDE + self.col as usize
    }

    /// Row coordinate.
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    /// Column coordinate.
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// The live 3x3 window, mutated in place for the whole run.
///
/// `Grid` is `Copy`; capturing a pattern copies it by value, so the live
/// window and every stored snapshot are fully independent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [[Cell; SIDE]; SIDE],
}

impl Grid {
    /// An all-idle window.
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            cells: [[Cell::Idle; SIDE]; SIDE],
        }
    }

    /// Builds a window from explicit rows.
    #[must_use]
    pub const fn from_rows(cells: [[Cell; SIDE]; SIDE]) -> Self {
        Self { cells }
    }

    /// Cell at `pos`.
    #[inline]
    #[must_use]
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// Overwrites the cell at `pos`.
    #[inline]
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row()][pos.col()] = cell;
    }

    /// Snapshot of this window with the cell at `pos` replaced by `marker`.
    ///
    /// The live window is not touched.
    #[must_use]
    pub fn snapshot_with(&self, pos: Position, marker: Cell) -> Pattern {
        let mut cells = self.cells;
        cells[pos.row()][pos.col()] = marker;
        Pattern { cells }
    }

    /// The rows of the window.
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[[Cell; SIDE]; SIDE] {
        &self.cells
    }
}

/// An immutable snapshot of the window taken at a transition.
///
/// Two patterns are equal iff all nine cells match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Pattern {
    cells: [[Cell; SIDE]; SIDE],
}

impl Pattern {
    /// Builds a pattern from explicit rows.
    #[must_use]
    pub const fn from_rows(cells: [[Cell; SIDE]; SIDE]) -> Self {
        Self { cells }
    }

    /// Cell at `pos`.
    #[inline]
    #[must_use]
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// The rows of the snapshot.
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[[Cell; SIDE]; SIDE] {
        &self.cells
    }

    /// Position of the transient marker, if the snapshot carries one.
    #[must_use]
    pub fn transient_position(&self) -> Option<Position> {
        (0..CELLS)
            .map(Position::from_index)
            .find(|&pos| self.get(pos).is_transient())
    }
}

impl From<Grid> for Pattern {
    fn from(grid: Grid) -> Self {
        Self { cells: grid.cells }
    }
}

impl fmt::Display for Pattern {
    /// Three lines of three space-separated symbols.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            writeln!(f, "{} {} {}", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_bounds() {
        assert!(Position::new(2, 2).is_some());
        assert!(Position::new(3, 0).is_none());
        assert!(Position::new(0, 3).is_none());
    }

    #[test]
    fn row_major_index_roundtrip() {
        for i in 0..CELLS {
            assert_eq!(Position::from_index(i).index(), i);
        }
        assert_eq!(Position::from_index(5), Position::new(1, 2).unwrap());
    }

    #[test]
    fn snapshot_leaves_live_grid_untouched() {
        let mut grid = Grid::idle();
        let center = Position::new(1, 1).unwrap();
        grid.set(center, Cell::One);

        let pattern = grid.snapshot_with(center, Cell::TransitioningToZero);
        assert_eq!(pattern.get(center), Cell::TransitioningToZero);
        assert_eq!(grid.get(center), Cell::One);
        assert_eq!(pattern.transient_position(), Some(center));
    }

    #[test]
    fn equality_is_cell_wise() {
        let a = Pattern::from(Grid::idle());
        let mut grid = Grid::idle();
        assert_eq!(a, Pattern::from(grid));
        grid.set(Position::from_index(8), Cell::Zero);
        assert_ne!(a, Pattern::from(grid));
    }

    #[test]
    fn display_layout() {
        let mut grid = Grid::idle();
        grid.set(Position::from_index(0), Cell::TransitioningToOne);
        grid.set(Position::from_index(4), Cell::Zero);
        let text = Pattern::from(grid).to_string();
        assert_eq!(text, "U i i\ni 0 i\ni i i\n");
    }
}
