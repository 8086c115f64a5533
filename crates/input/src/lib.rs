//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`types::GameCommand`]s plus the two host
//! keys (quit, restart). Key repeats count as fresh presses, so holding an arrow
//! keeps the piece moving at the terminal's repeat rate.

pub mod map;

pub use tetrino_types as types;

pub use map::{handle_key_event, is_actionable, should_quit, should_restart};
