//! Line-clear sweep.
//!
//! Runs after every lock. Rows are scanned top to bottom; a full row is removed
//! with [`Grid::clear_row`] and the same index is examined again before the scan
//! moves on, so every row that is full when the sweep starts is gone when it ends.

use arrayvec::ArrayVec;

use crate::error::Result;
use crate::events::{push_full_redraw, EngineEvent};
use crate::grid::Grid;
use crate::types::{POINTS_PER_ROW, ROWS};

/// Rows removed by one sweep, in the order they were cleared.
pub type ClearedRows = ArrayVec<i8, { ROWS as usize }>;

/// Clear every full row, adding [`POINTS_PER_ROW`] to `score` for each.
///
/// Emits a score update per cleared row and, if anything was cleared, one
/// redraw of the whole grid.
pub fn sweep(
    grid: &mut Grid,
    score: &mut u32,
    events: &mut Vec<EngineEvent>,
) -> Result<ClearedRows> {
    let mut cleared = ClearedRows::new();
    let mut row = 0;

    while row < ROWS as i8 {
        if grid.is_row_full(row)? {
            grid.clear_row(row)?;
            cleared.push(row);
            *score = score.saturating_add(POINTS_PER_ROW);
            events.push(EngineEvent::ScoreChanged { total: *score });
            // Re-examine this index: it now holds the row that was above.
            continue;
        }
        row += 1;
    }

    if !cleared.is_empty() {
        push_full_redraw(grid, events);
    }
    Ok(cleared)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PieceColor, COLUMNS};

    fn fill_row(grid: &mut Grid, row: i8, color: PieceColor) {
        for col in 0..COLUMNS as i8 {
            grid.set(row, col, Some(color)).unwrap();
        }
    }

    #[test]
    fn no_full_rows_is_a_no_op() {
        let mut grid = Grid::new();
        grid.set(19, 0, Some(PieceColor::Red)).unwrap();
        let before = grid.clone();
        let mut score = 30;
        let mut events = Vec::new();

        let cleared = sweep(&mut grid, &mut score, &mut events).unwrap();

        assert!(cleared.is_empty());
        assert_eq!(grid, before);
        assert_eq!(score, 30);
        assert!(events.is_empty());
    }

    #[test]
    fn adjacent_full_rows_clear_in_one_pass() {
        let mut grid = Grid::new();
        grid.set(15, 2, Some(PieceColor::Blue)).unwrap();
        for row in 16..20 {
            fill_row(&mut grid, row, PieceColor::Cyan);
        }
        let mut score = 0;
        let mut events = Vec::new();

        let cleared = sweep(&mut grid, &mut score, &mut events).unwrap();

        assert_eq!(cleared.as_slice(), &[16, 17, 18, 19]);
        assert_eq!(score, 40);
        assert_eq!(grid.occupied_count(), 1);
        assert_eq!(grid.get(19, 2), Ok(Some(PieceColor::Blue)));
    }

    #[test]
    fn emits_running_score_then_redraw() {
        let mut grid = Grid::new();
        fill_row(&mut grid, 18, PieceColor::Green);
        fill_row(&mut grid, 19, PieceColor::Green);
        let mut score = 100;
        let mut events = Vec::new();

        sweep(&mut grid, &mut score, &mut events).unwrap();

        assert_eq!(events[0], EngineEvent::ScoreChanged { total: 110 });
        assert_eq!(events[1], EngineEvent::ScoreChanged { total: 120 });
        assert_eq!(events.len(), 2 + 200);
    }

    #[test]
    fn split_full_rows_both_clear() {
        let mut grid = Grid::new();
        fill_row(&mut grid, 10, PieceColor::Red);
        grid.set(11, 0, Some(PieceColor::Yellow)).unwrap();
        fill_row(&mut grid, 12, PieceColor::Red);
        let mut score = 0;
        let mut events = Vec::new();

        let cleared = sweep(&mut grid, &mut score, &mut events).unwrap();

        assert_eq!(cleared.len(), 2);
        assert_eq!(score, 20);
        // The lone block drops past the row cleared beneath it.
        assert_eq!(grid.get(12, 0), Ok(Some(PieceColor::Yellow)));
        assert_eq!(grid.occupied_count(), 1);
    }
}
