//! Core error type.
//!
//! Every variant is an integration error (bad coordinates, bad shape data, or a
//! piece operation with no piece). Blocked moves and rotations are not errors:
//! they are reported as `Ok(false)`.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("cell (row {row}, col {col}) is outside the grid")]
    OutOfBounds { row: i8, col: i8 },

    #[error("invalid shape matrix: {reason}")]
    InvalidShape { reason: &'static str },

    #[error("no active piece")]
    NoActivePiece,
}

pub type Result<T> = std::result::Result<T, CoreError>;
