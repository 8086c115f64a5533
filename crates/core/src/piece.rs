//! Piece module - the active tetromino
//!
//! A piece is a shape matrix, a color and the grid position of the matrix's
//! top-left corner. Its blocks live outside the grid until [`Piece::lock`]
//! writes them in; every other operation only queries the grid and reports the
//! cells it repaints into an event list.

use crate::error::Result;
use crate::events::EngineEvent;
use crate::grid::Grid;
use crate::rotation::rotate_cw;
use crate::shapes::{shape, ShapeMatrix};
use crate::types::{PieceColor, ShapeKind, COLUMNS, SPAWN_COLUMN, SPAWN_ROW};

/// Result of a one-row descent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Descent {
    /// The piece is one row lower and still active
    Moved,
    /// The piece has been written into the grid
    Locked,
}

/// The falling tetromino.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    matrix: ShapeMatrix,
    color: PieceColor,
    row: i8,
    col: i8,
}

impl Piece {
    pub fn new(matrix: ShapeMatrix, color: PieceColor, row: i8, col: i8) -> Self {
        Self {
            matrix,
            color,
            row,
            col,
        }
    }

    /// A fresh piece of `kind` at the spawn point.
    pub fn spawn(kind: ShapeKind) -> Self {
        Self::new(*shape(kind), kind.color(), SPAWN_ROW, SPAWN_COLUMN)
    }

    pub fn matrix(&self) -> &ShapeMatrix {
        &self.matrix
    }

    pub fn color(&self) -> PieceColor {
        self.color
    }

    pub fn row(&self) -> i8 {
        self.row
    }

    pub fn col(&self) -> i8 {
        self.col
    }

    /// Grid coordinates `(row, col)` of every block.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.matrix
            .occupied()
            .map(move |(x, y)| (self.row + x, self.col + y))
    }

    /// Whether every block sits on an in-bounds EMPTY cell.
    pub fn fits(&self, grid: &Grid) -> bool {
        self.cells().all(|(r, c)| grid.is_vacant(r, c))
    }

    /// Emit a draw for every block.
    pub fn draw(&self, events: &mut Vec<EngineEvent>) {
        let color = self.color;
        events.extend(
            self.cells()
                .map(|(row, col)| EngineEvent::DrawCell { row, col, color }),
        );
    }

    /// Emit an erase for every block and reset those grid cells to EMPTY.
    ///
    /// While the piece is active its footprint is already EMPTY in the grid.
    pub fn clear(&self, grid: &mut Grid, events: &mut Vec<EngineEvent>) -> Result<()> {
        for (row, col) in self.cells() {
            grid.set(row, col, None)?;
            events.push(EngineEvent::ClearCell { row, col });
        }
        Ok(())
    }

    /// True iff some block has the floor or a settled block directly below it.
    pub fn has_reached_maximum_bottom(&self, grid: &Grid) -> bool {
        self.cells().any(|(r, c)| !grid.is_vacant(r + 1, c))
    }

    /// True iff some block has the left wall or a settled block beside it.
    pub fn has_reached_maximum_left(&self, grid: &Grid) -> bool {
        self.cells().any(|(r, c)| !grid.is_vacant(r, c - 1))
    }

    /// True iff some block has the right wall or a settled block beside it.
    pub fn has_reached_maximum_right(&self, grid: &Grid) -> bool {
        self.cells().any(|(r, c)| !grid.is_vacant(r, c + 1))
    }

    /// Commit the piece's color into the grid.
    ///
    /// All cells are checked before any is written, so a failed lock leaves the
    /// grid unchanged.
    pub fn lock(&self, grid: &mut Grid) -> Result<()> {
        for (row, col) in self.cells() {
            grid.get(row, col)?;
        }
        for (row, col) in self.cells() {
            grid.set(row, col, Some(self.color))?;
        }
        Ok(())
    }

    /// Descend one row, then lock if the piece has landed.
    ///
    /// The move is not checked first: the piece always drops and the landing test
    /// runs on the new position. The one exception is a piece that already rests
    /// on something (after sliding or turning onto a ledge); it locks where it is
    /// instead of dropping into the blocks below.
    pub fn move_down(&mut self, grid: &mut Grid, events: &mut Vec<EngineEvent>) -> Result<Descent> {
        if self.has_reached_maximum_bottom(grid) {
            self.lock(grid)?;
            return Ok(Descent::Locked);
        }

        self.clear(grid, events)?;
        self.row += 1;
        self.draw(events);

        if self.has_reached_maximum_bottom(grid) {
            self.lock(grid)?;
            return Ok(Descent::Locked);
        }
        Ok(Descent::Moved)
    }

    /// Shift one column left unless blocked. Returns whether it moved.
    pub fn move_left(&mut self, grid: &mut Grid, events: &mut Vec<EngineEvent>) -> Result<bool> {
        if self.has_reached_maximum_left(grid) {
            return Ok(false);
        }
        self.clear(grid, events)?;
        self.col -= 1;
        self.draw(events);
        Ok(true)
    }

    /// Shift one column right unless blocked. Returns whether it moved.
    pub fn move_right(&mut self, grid: &mut Grid, events: &mut Vec<EngineEvent>) -> Result<bool> {
        if self.has_reached_maximum_right(grid) {
            return Ok(false);
        }
        self.clear(grid, events)?;
        self.col += 1;
        self.draw(events);
        Ok(true)
    }

    /// Whether `candidate`, placed at the current origin, fits.
    ///
    /// Columns are bounds-checked and every target cell must be EMPTY. Rows
    /// above the grid are not checked and pass; rows below the floor fail.
    ///
    /// A piece with blocks above the grid can pass this check but still cannot
    /// [`rotate`](Self::rotate), which rejects blocks outside the grid before
    /// changing anything. Spawned pieces start
    /// at row 0 and only move down, so play never reaches that case.
    pub fn can_rotate(&self, grid: &Grid, candidate: &ShapeMatrix) -> bool {
        candidate.occupied().all(|(x, y)| {
            let (r, c) = (self.row + x, self.col + y);
            if c < 0 || c >= COLUMNS as i8 {
                return false;
            }
            r < 0 || grid.is_vacant(r, c)
        })
    }

    /// Turn 90° clockwise in place if the result fits. No wall kicks.
    ///
    /// Fails with [`CoreError::OutOfBounds`](crate::error::CoreError::OutOfBounds)
    /// if a current block is above the grid; the grid, the matrix and `events`
    /// are left untouched.
    pub fn rotate(&mut self, grid: &mut Grid, events: &mut Vec<EngineEvent>) -> Result<bool> {
        let candidate = rotate_cw(&self.matrix);
        if !self.can_rotate(grid, &candidate) {
            return Ok(false);
        }
        for (row, col) in self.cells() {
            grid.get(row, col)?;
        }
        self.clear(grid, events)?;
        self.matrix = candidate;
        self.draw(events);
        Ok(true)
    }
}
