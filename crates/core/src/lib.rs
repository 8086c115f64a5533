//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every rule of the game and nothing else: no terminal, no
//! clock, no I/O. Hosts feed it elapsed time and player commands and drain an
//! ordered list of [`EngineEvent`]s describing what changed.
//!
//! # Module Structure
//!
//! - [`grid`]: 20x10 cell store with row clearing
//! - [`shapes`]: the seven tetromino bitmasks and their colors
//! - [`rotation`]: clockwise rotation of a square bitmask
//! - [`piece`]: the active tetromino, its collision checks and moves
//! - [`sweep`]: full-row detection and clearing with scoring
//! - [`scheduler`]: drift-free gravity timer
//! - [`game_state`]: the engine context and its state machine
//! - [`events`]: event list and the sink trait renderers implement
//!
//! # Rules
//!
//! - A tick spawns a random piece at (0, 4) when none is active, otherwise drops
//!   the active piece one row.
//! - A piece that lands is locked into the grid; every full row is then cleared
//!   for 10 points each.
//! - Left/right moves and clockwise rotation happen only if the result fits.
//!   There are no wall kicks.
//! - A spawn that collides ends the game.
//!
//! # Example
//!
//! ```
//! use tetrino_core::{GameState, Phase};
//! use tetrino_core::types::{GameCommand, ShapeKind};
//!
//! let mut game = GameState::new(12345);
//! game.spawn(ShapeKind::O).unwrap();
//!
//! game.apply(GameCommand::MoveLeft).unwrap();
//! game.apply(GameCommand::SoftDrop).unwrap();
//! assert_eq!(game.active().unwrap().col(), 3);
//!
//! // One second of wall-clock time is one gravity tick.
//! assert_eq!(game.update(1000).unwrap(), 1);
//! assert_eq!(game.phase(), Phase::PieceActive);
//! ```

pub mod error;
pub mod events;
pub mod game_state;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod rotation;
pub mod scheduler;
pub mod shapes;
pub mod sweep;

pub use tetrino_types as types;

pub use error::{CoreError, Result};
pub use events::{dispatch, EngineEvent, GameSink};
pub use game_state::{GameState, Phase};
pub use grid::Grid;
pub use piece::{Descent, Piece};
pub use rng::SimpleRng;
pub use rotation::rotate_cw;
pub use scheduler::DropTimer;
pub use shapes::{shape, ShapeMatrix};
pub use sweep::{sweep, ClearedRows};
