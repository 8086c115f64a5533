//! Clockwise matrix rotation.
//!
//! Transpose, then reverse each row: `out[x][y] = in[n - 1 - y][x]`.
//! Pure and board-agnostic; the piece decides whether the result fits.

use crate::shapes::ShapeMatrix;

/// Rotate an N x N matrix 90° clockwise.
///
/// ```
/// use tetrino_core::{rotate_cw, ShapeMatrix};
///
/// let j = ShapeMatrix::from_rows(&[[1u8, 0, 0], [1, 1, 1], [0, 0, 0]]).unwrap();
/// let expected = ShapeMatrix::from_rows(&[[0u8, 1, 1], [0, 1, 0], [0, 1, 0]]).unwrap();
/// assert_eq!(rotate_cw(&j), expected);
/// ```
pub fn rotate_cw(matrix: &ShapeMatrix) -> ShapeMatrix {
    let n = matrix.size();
    let transposed = ShapeMatrix::from_fn(n, |x, y| matrix.is_occupied(y, x));
    ShapeMatrix::from_fn(n, |x, y| transposed.is_occupied(x, n - 1 - y))
}
