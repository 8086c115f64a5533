//! Board canvas: the terminal side of the engine's event stream.
//!
//! The canvas never reads engine state. It rebuilds the picture of the board,
//! the score and the game-over flag purely from [`GameSink`] callbacks, the
//! same way a browser canvas would be painted square by square.

use tetrino_core::GameSink;
use tetrino_types::{PieceColor, COLUMNS, ROWS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardCanvas {
    squares: [[Option<PieceColor>; COLUMNS as usize]; ROWS as usize],
    score: u32,
    game_over: bool,
}

impl BoardCanvas {
    pub fn new() -> Self {
        Self {
            squares: [[None; COLUMNS as usize]; ROWS as usize],
            score: 0,
            game_over: false,
        }
    }

    /// Painted color at `(row, col)`; `None` for background or out of range.
    pub fn square(&self, row: i8, col: i8) -> Option<PieceColor> {
        if row < 0 || col < 0 {
            return None;
        }
        self.squares
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .copied()
            .flatten()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Forget everything, as before the first frame of a new game.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn paint(&mut self, row: i8, col: i8, value: Option<PieceColor>) {
        if row < 0 || col < 0 {
            return;
        }
        if let Some(square) = self
            .squares
            .get_mut(row as usize)
            .and_then(|r| r.get_mut(col as usize))
        {
            *square = value;
        }
    }
}

impl Default for BoardCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSink for BoardCanvas {
    fn draw_cell(&mut self, row: i8, col: i8, color: PieceColor) {
        self.paint(row, col, Some(color));
    }

    fn clear_cell(&mut self, row: i8, col: i8) {
        self.paint(row, col, None);
    }

    fn on_score_changed(&mut self, total: u32) {
        self.score = total;
    }

    fn on_game_over(&mut self) {
        self.game_over = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paints_and_erases() {
        let mut canvas = BoardCanvas::new();
        canvas.draw_cell(3, 4, PieceColor::Cyan);
        assert_eq!(canvas.square(3, 4), Some(PieceColor::Cyan));
        canvas.clear_cell(3, 4);
        assert_eq!(canvas.square(3, 4), None);
    }

    #[test]
    fn off_board_paint_is_ignored() {
        let mut canvas = BoardCanvas::new();
        canvas.draw_cell(-1, 0, PieceColor::Red);
        canvas.draw_cell(0, 10, PieceColor::Red);
        assert_eq!(canvas, BoardCanvas::new());
    }
}
