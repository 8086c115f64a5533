//! Shape library - the seven tetromino bitmasks
//!
//! Shapes are square boolean matrices (2x2, 3x3 or 4x4) indexed `[x][y]`, where
//! `x` is the row inside the matrix and `y` the column. A set cell is a block
//! relative to the piece origin. The table is built at compile time and never
//! changes.

use std::fmt;

use crate::error::{CoreError, Result};
use crate::types::ShapeKind;

/// Largest supported matrix edge.
pub const MAX_MATRIX_SIZE: usize = 4;

/// Square bitmask matrix of edge `size`; cells outside `size` are always unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    size: u8,
    bits: [[bool; MAX_MATRIX_SIZE]; MAX_MATRIX_SIZE],
}

impl ShapeMatrix {
    const fn from_table(size: u8, table: [[u8; MAX_MATRIX_SIZE]; MAX_MATRIX_SIZE]) -> Self {
        let mut bits = [[false; MAX_MATRIX_SIZE]; MAX_MATRIX_SIZE];
        let mut x = 0;
        while x < size as usize {
            let mut y = 0;
            while y < size as usize {
                bits[x][y] = table[x][y] == 1;
                y += 1;
            }
            x += 1;
        }
        Self { size, bits }
    }

    /// Build a matrix from rows of `0`/`1` values.
    ///
    /// Fails with [`CoreError::InvalidShape`] when the rows are empty, larger
    /// than [`MAX_MATRIX_SIZE`], not square, or contain anything but 0 and 1.
    ///
    /// ```
    /// use tetrino_core::ShapeMatrix;
    ///
    /// let t = ShapeMatrix::from_rows(&[[0u8, 1, 0], [1, 1, 1], [0, 0, 0]]).unwrap();
    /// assert_eq!(t.size(), 3);
    /// assert!(t.is_occupied(1, 0));
    ///
    /// assert!(ShapeMatrix::from_rows(&[vec![1u8, 1], vec![1]]).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(CoreError::InvalidShape {
                reason: "matrix has no rows",
            });
        }
        if size > MAX_MATRIX_SIZE {
            return Err(CoreError::InvalidShape {
                reason: "matrix is larger than 4x4",
            });
        }

        let mut bits = [[false; MAX_MATRIX_SIZE]; MAX_MATRIX_SIZE];
        for (x, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(CoreError::InvalidShape {
                    reason: "matrix is not square",
                });
            }
            for (y, &value) in row.iter().enumerate() {
                bits[x][y] = match value {
                    0 => false,
                    1 => true,
                    _ => {
                        return Err(CoreError::InvalidShape {
                            reason: "matrix cells must be 0 or 1",
                        })
                    }
                };
            }
        }

        Ok(Self {
            size: size as u8,
            bits,
        })
    }

    /// Build a `size` x `size` matrix from a predicate over `(x, y)`.
    pub(crate) fn from_fn(size: usize, f: impl Fn(usize, usize) -> bool) -> Self {
        debug_assert!(size <= MAX_MATRIX_SIZE);
        let mut bits = [[false; MAX_MATRIX_SIZE]; MAX_MATRIX_SIZE];
        for (x, row) in bits.iter_mut().enumerate().take(size) {
            for (y, bit) in row.iter_mut().enumerate().take(size) {
                *bit = f(x, y);
            }
        }
        Self {
            size: size as u8,
            bits,
        }
    }

    /// Edge length N of the N x N matrix.
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Whether cell `(x, y)` is set; false outside the matrix.
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        x < self.size() && y < self.size() && self.bits[x][y]
    }

    /// Local `(x, y)` offsets of every set cell, row by row.
    pub fn occupied(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let n = self.size();
        (0..n).flat_map(move |x| {
            (0..n)
                .filter(move |&y| self.bits[x][y])
                .map(move |y| (x as i8, y as i8))
        })
    }

    /// Number of set cells.
    pub fn cell_count(&self) -> usize {
        self.occupied().count()
    }
}

impl fmt::Display for ShapeMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for x in 0..self.size() {
            for y in 0..self.size() {
                f.write_str(if self.bits[x][y] { "#" } else { "." })?;
            }
            if x + 1 < self.size() {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

const O_SHAPE: ShapeMatrix = ShapeMatrix::from_table(
    2,
    [[1, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const I_SHAPE: ShapeMatrix = ShapeMatrix::from_table(
    4,
    [[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0]],
);

const T_SHAPE: ShapeMatrix = ShapeMatrix::from_table(
    3,
    [[0, 1, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const J_SHAPE: ShapeMatrix = ShapeMatrix::from_table(
    3,
    [[1, 0, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const L_SHAPE: ShapeMatrix = ShapeMatrix::from_table(
    3,
    [[0, 0, 1, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const S_SHAPE: ShapeMatrix = ShapeMatrix::from_table(
    3,
    [[0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const Z_SHAPE: ShapeMatrix = ShapeMatrix::from_table(
    3,
    [[1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

/// Spawn matrix for a shape.
pub fn shape(kind: ShapeKind) -> &'static ShapeMatrix {
    match kind {
        ShapeKind::O => &O_SHAPE,
        ShapeKind::I => &I_SHAPE,
        ShapeKind::T => &T_SHAPE,
        ShapeKind::J => &J_SHAPE,
        ShapeKind::L => &L_SHAPE,
        ShapeKind::S => &S_SHAPE,
        ShapeKind::Z => &Z_SHAPE,
    }
}
