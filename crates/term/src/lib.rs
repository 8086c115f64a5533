//! Terminal front-end for the engine.
//!
//! Engine events are painted onto a [`BoardCanvas`], the canvas is laid out
//! into a [`FrameBuffer`] by [`GameView`], and [`TerminalRenderer`] flushes the
//! changed glyphs with crossterm. Only the renderer touches the terminal.

pub mod canvas;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetrino_core as core;
pub use tetrino_types as types;

pub use canvas::BoardCanvas;
pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
