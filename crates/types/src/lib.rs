//! Shared types and constants for the tetrino workspace.
//!
//! Everything here is plain data with no dependencies, so the engine, the input
//! mapping and the terminal front-end can all agree on coordinates, colors and
//! commands without depending on each other.
//!
//! # Grid
//!
//! The playfield is [`ROWS`] x [`COLUMNS`]. Coordinates are `(row, col)` with
//! row 0 at the top and column 0 on the left. New pieces spawn with the top-left
//! corner of their shape matrix at ([`SPAWN_ROW`], [`SPAWN_COLUMN`]).
//!
//! # Examples
//!
//! ```
//! use tetrino_types::{ShapeKind, PieceColor, COLUMNS, ROWS};
//!
//! assert_eq!(ROWS, 20);
//! assert_eq!(COLUMNS, 10);
//! assert_eq!(ShapeKind::T.color(), PieceColor::Purple);
//! assert_eq!(ShapeKind::T.as_str(), "t");
//! ```

/// Number of rows in the grid.
pub const ROWS: u8 = 20;

/// Number of columns in the grid.
pub const COLUMNS: u8 = 10;

/// Row of the shape matrix origin for a freshly spawned piece.
pub const SPAWN_ROW: i8 = 0;

/// Column of the shape matrix origin for a freshly spawned piece.
pub const SPAWN_COLUMN: i8 = 4;

/// Nominal gravity interval: one automatic descent per second.
pub const DROP_INTERVAL_MS: u32 = 1000;

/// Points awarded for every cleared row (one per cleared cell).
pub const POINTS_PER_ROW: u32 = COLUMNS as u32;

/// The seven canonical tetromino shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    O,
    I,
    T,
    J,
    L,
    S,
    Z,
}

impl ShapeKind {
    /// All shapes, in spawn-table order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::O,
        ShapeKind::I,
        ShapeKind::T,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::S,
        ShapeKind::Z,
    ];

    /// Lowercase letter of the shape, as written to the event log.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::O => "o",
            ShapeKind::I => "i",
            ShapeKind::T => "t",
            ShapeKind::J => "j",
            ShapeKind::L => "l",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
        }
    }

    /// The fixed display color paired with this shape.
    pub fn color(&self) -> PieceColor {
        match self {
            ShapeKind::O => PieceColor::Yellow,
            ShapeKind::I => PieceColor::Cyan,
            ShapeKind::T => PieceColor::Purple,
            ShapeKind::J => PieceColor::Blue,
            ShapeKind::L => PieceColor::Orange,
            ShapeKind::S => PieceColor::Green,
            ShapeKind::Z => PieceColor::Red,
        }
    }
}

/// Color identifier stored in occupied grid cells.
///
/// There is exactly one color per shape; EMPTY is represented by `None` in a [`Cell`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Yellow,
    Cyan,
    Purple,
    Blue,
    Orange,
    Green,
    Red,
}

impl PieceColor {
    /// 24-bit display color as `(r, g, b)`.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            PieceColor::Yellow => (240, 240, 50),
            PieceColor::Cyan => (40, 240, 240),
            PieceColor::Purple => (160, 35, 235),
            PieceColor::Blue => (10, 35, 235),
            PieceColor::Orange => (240, 160, 40),
            PieceColor::Green => (40, 240, 40),
            PieceColor::Red => (240, 10, 25),
        }
    }
}

/// A grid cell: `None` is EMPTY, `Some(color)` is a settled block.
pub type Cell = Option<PieceColor>;

/// Player commands consumed by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Shift the piece one column left, if nothing blocks it
    MoveLeft,
    /// Shift the piece one column right, if nothing blocks it
    MoveRight,
    /// Rotate the piece 90° clockwise, if the rotated footprint fits
    RotateCw,
    /// Drop one row immediately (same as a gravity tick)
    SoftDrop,
}
