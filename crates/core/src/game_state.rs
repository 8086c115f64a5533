//! Game state module - the engine context
//!
//! Owns the grid, the single active-piece slot, the score, the spawn RNG and the
//! gravity timer. All mutation goes through `&mut GameState`, so ticks and player
//! commands are serialized by construction; a multi-threaded host has to put the
//! whole value behind one lock.

use crate::error::{CoreError, Result};
use crate::events::{push_full_redraw, EngineEvent};
use crate::grid::Grid;
use crate::piece::{Descent, Piece};
use crate::rng::SimpleRng;
use crate::scheduler::DropTimer;
use crate::sweep::sweep;
use crate::types::{GameCommand, ShapeKind, DROP_INTERVAL_MS};

/// Where the engine is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// The next tick spawns a piece
    NoActivePiece,
    /// A piece is falling
    PieceActive,
    /// Terminal; ticks and commands are ignored
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    active: Option<Piece>,
    score: u32,
    rng: SimpleRng,
    timer: DropTimer,
    game_over: bool,
    events: Vec<EngineEvent>,
}

impl GameState {
    /// New game with the nominal one-second gravity.
    pub fn new(seed: u32) -> Self {
        Self::with_drop_interval(seed, DROP_INTERVAL_MS)
    }

    /// New game with a custom gravity interval.
    ///
    /// The event list starts with a clear of every cell so a renderer begins
    /// from a blank board.
    pub fn with_drop_interval(seed: u32, drop_interval_ms: u32) -> Self {
        let grid = Grid::new();
        let mut events = Vec::with_capacity(256);
        push_full_redraw(&grid, &mut events);

        Self {
            grid,
            active: None,
            score: 0,
            rng: SimpleRng::new(seed),
            timer: DropTimer::new(drop_interval_ms),
            game_over: false,
            events,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.active.is_some() {
            Phase::PieceActive
        } else {
            Phase::NoActivePiece
        }
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Direct grid access for setting up positions (puzzles, tests).
    ///
    /// Cells under the active piece must stay EMPTY.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn timer(&self) -> &DropTimer {
        &self.timer
    }

    /// Take every event produced since the last drain.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, EngineEvent> {
        self.events.drain(..)
    }

    /// Feed wall-clock time into the gravity timer and run the ticks that are due.
    ///
    /// Returns the number of ticks processed. Stops early at game over.
    pub fn update(&mut self, elapsed_ms: u64) -> Result<u64> {
        if self.game_over {
            return Ok(0);
        }
        let due = self.timer.advance(elapsed_ms);
        let mut ran = 0;
        while ran < due && !self.game_over {
            self.tick()?;
            ran += 1;
        }
        Ok(ran)
    }

    /// One gravity step: spawn if the slot is empty, otherwise drop one row.
    pub fn tick(&mut self) -> Result<()> {
        match self.phase() {
            Phase::GameOver => Ok(()),
            Phase::NoActivePiece => {
                let kind = self.rng.next_shape();
                self.spawn(kind).map(|_| ())
            }
            Phase::PieceActive => self.move_down().map(|_| ()),
        }
    }

    /// Place a `kind` piece at the spawn point.
    ///
    /// If any spawn cell is taken, or the new piece already rests on something,
    /// the game is over: the piece is shown but never becomes active. Does
    /// nothing while a piece is active or after game over.
    pub fn spawn(&mut self, kind: ShapeKind) -> Result<Phase> {
        if self.phase() != Phase::NoActivePiece {
            return Ok(self.phase());
        }

        let piece = Piece::spawn(kind);
        self.events.push(EngineEvent::Spawned { kind });
        piece.draw(&mut self.events);

        if !piece.fits(&self.grid) || piece.has_reached_maximum_bottom(&self.grid) {
            self.game_over = true;
            self.events.push(EngineEvent::GameOver);
            return Ok(Phase::GameOver);
        }

        self.active = Some(piece);
        Ok(Phase::PieceActive)
    }

    /// Apply a player command to the active piece.
    ///
    /// Ignored (`Ok(false)`) when no piece is active or the game is over.
    /// Returns whether anything changed.
    pub fn apply(&mut self, command: GameCommand) -> Result<bool> {
        if self.phase() != Phase::PieceActive {
            return Ok(false);
        }
        match command {
            GameCommand::MoveLeft => self.move_left(),
            GameCommand::MoveRight => self.move_right(),
            GameCommand::RotateCw => self.rotate(),
            GameCommand::SoftDrop => self.move_down().map(|_| true),
        }
    }

    pub fn move_left(&mut self) -> Result<bool> {
        let piece = self.active.as_mut().ok_or(CoreError::NoActivePiece)?;
        piece.move_left(&mut self.grid, &mut self.events)
    }

    pub fn move_right(&mut self) -> Result<bool> {
        let piece = self.active.as_mut().ok_or(CoreError::NoActivePiece)?;
        piece.move_right(&mut self.grid, &mut self.events)
    }

    pub fn rotate(&mut self) -> Result<bool> {
        let piece = self.active.as_mut().ok_or(CoreError::NoActivePiece)?;
        piece.rotate(&mut self.grid, &mut self.events)
    }

    /// Drop the active piece one row; on landing, lock, sweep and empty the slot.
    pub fn move_down(&mut self) -> Result<Descent> {
        let piece = self.active.as_mut().ok_or(CoreError::NoActivePiece)?;
        let descent = piece.move_down(&mut self.grid, &mut self.events)?;

        if descent == Descent::Locked {
            let (row, col) = (piece.row(), piece.col());
            self.active = None;
            let full = self.grid.full_row_count();
            self.events.push(EngineEvent::Locked {
                row,
                col,
                lines_cleared: full as u32,
            });
            let cleared = sweep(&mut self.grid, &mut self.score, &mut self.events)?;
            debug_assert_eq!(cleared.len(), full);
        }
        Ok(descent)
    }

    /// Start over on an empty grid with score 0. The RNG keeps its sequence.
    pub fn restart(&mut self) {
        self.grid.reset();
        self.active = None;
        self.score = 0;
        self.game_over = false;
        self.timer.reset();
        self.events.clear();
        push_full_redraw(&self.grid, &mut self.events);
        self.events.push(EngineEvent::ScoreChanged { total: 0 });
    }
}
