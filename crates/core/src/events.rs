//! Engine events and the sinks that consume them.
//!
//! The engine never draws. Every state change is appended to an ordered event
//! list that the host drains once per frame and forwards to whatever renders the
//! board, shows the score, or reacts to game over.

use crate::grid::Grid;
use crate::types::{PieceColor, ShapeKind};

/// One observable change, in the order it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// Paint `(row, col)` with `color`
    DrawCell { row: i8, col: i8, color: PieceColor },
    /// Paint `(row, col)` as background
    ClearCell { row: i8, col: i8 },
    /// Running score after a cleared row
    ScoreChanged { total: u32 },
    /// A new piece entered the grid at the spawn point
    Spawned { kind: ShapeKind },
    /// The active piece was committed to the grid
    Locked { row: i8, col: i8, lines_cleared: u32 },
    /// Terminal state reached; emitted once
    GameOver,
}

/// Consumer of engine events.
///
/// All methods default to no-ops so a sink only implements what it shows.
pub trait GameSink {
    fn draw_cell(&mut self, _row: i8, _col: i8, _color: PieceColor) {}

    fn clear_cell(&mut self, _row: i8, _col: i8) {}

    fn on_score_changed(&mut self, _total: u32) {}

    fn on_game_over(&mut self) {}
}

/// Forward events to a sink in order.
///
/// Spawn and lock notifications have no sink method; they exist for logging.
pub fn dispatch<'a, S: GameSink + ?Sized>(
    events: impl IntoIterator<Item = &'a EngineEvent>,
    sink: &mut S,
) {
    for event in events {
        match *event {
            EngineEvent::DrawCell { row, col, color } => sink.draw_cell(row, col, color),
            EngineEvent::ClearCell { row, col } => sink.clear_cell(row, col),
            EngineEvent::ScoreChanged { total } => sink.on_score_changed(total),
            EngineEvent::GameOver => sink.on_game_over(),
            EngineEvent::Spawned { .. } | EngineEvent::Locked { .. } => {}
        }
    }
}

/// Append a draw or clear for every grid cell, top to bottom.
pub(crate) fn push_full_redraw(grid: &Grid, events: &mut Vec<EngineEvent>) {
    for (r, row) in grid.rows().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let (row, col) = (r as i8, c as i8);
            events.push(match *cell {
                Some(color) => EngineEvent::DrawCell { row, col, color },
                None => EngineEvent::ClearCell { row, col },
            });
        }
    }
}
