//! Grid module - the settled cells of the playfield
//!
//! A fixed 20x10 store held in a flat row-major array. Coordinates are
//! `(row, col)`, row 0 at the top. Signed coordinates are accepted everywhere so
//! collision code can look one cell past a wall without casting; anything
//! outside the grid is reported as [`CoreError::OutOfBounds`].

use crate::error::{CoreError, Result};
use crate::types::{Cell, COLUMNS, ROWS};

const WIDTH: usize = COLUMNS as usize;
const HEIGHT: usize = ROWS as usize;
const GRID_SIZE: usize = WIDTH * HEIGHT;

/// The settled playfield.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Row-major cells (row * COLUMNS + col)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a grid with every cell EMPTY.
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    /// Build a grid from explicit rows, top row first.
    pub fn from_rows(rows: &[[Cell; WIDTH]; HEIGHT]) -> Self {
        let mut grid = Self::new();
        for (r, row) in rows.iter().enumerate() {
            grid.cells[r * WIDTH..(r + 1) * WIDTH].copy_from_slice(row);
        }
        grid
    }

    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= ROWS as i8 || col < 0 || col >= COLUMNS as i8 {
            return None;
        }
        Some((row as usize) * WIDTH + (col as usize))
    }

    #[inline(always)]
    fn checked_index(row: i8, col: i8) -> Result<usize> {
        Self::index(row, col).ok_or(CoreError::OutOfBounds { row, col })
    }

    pub fn get(&self, row: i8, col: i8) -> Result<Cell> {
        Self::checked_index(row, col).map(|idx| self.cells[idx])
    }

    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> Result<()> {
        let idx = Self::checked_index(row, col)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// True iff `(row, col)` is inside the grid and EMPTY.
    ///
    /// Walls and the floor therefore read as occupied.
    pub fn is_vacant(&self, row: i8, col: i8) -> bool {
        matches!(Self::index(row, col), Some(idx) if self.cells[idx].is_none())
    }

    /// Slice of one row, left to right.
    pub fn row(&self, row: i8) -> Result<&[Cell]> {
        let start = Self::checked_index(row, 0)?;
        Ok(&self.cells[start..start + WIDTH])
    }

    /// All rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(WIDTH)
    }

    /// True iff every cell in `row` is occupied.
    pub fn is_row_full(&self, row: i8) -> Result<bool> {
        Ok(self.row(row)?.iter().all(|cell| cell.is_some()))
    }

    /// Number of rows with every cell occupied.
    pub fn full_row_count(&self) -> usize {
        self.rows()
            .filter(|row| row.iter().all(|cell| cell.is_some()))
            .count()
    }

    /// Remove `row`, shift every row above it down by one and insert an
    /// EMPTY row at the top. Rows below `row` are untouched.
    pub fn clear_row(&mut self, row: i8) -> Result<()> {
        let end = Self::checked_index(row, 0)?;
        // copy_within handles the overlap
        self.cells.copy_within(0..end, WIDTH);
        self.cells[..WIDTH].fill(None);
        Ok(())
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Set every cell back to EMPTY.
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
