//! Dense square matrix of `f64` values.
//!
//! Elements live in a flat column-major buffer: element (row `i`, col `j`),
//! 1-indexed, sits at offset `(i - 1) + (j - 1) * size`. Every public
//! accessor takes 1-indexed coordinates and validates them.
//!
//! Allocating operations always return a matrix with its own buffer.
//! Quadrants produced by [`Matrix::sub_matrix`] are copies, not views.

use std::fmt;

use rand::Rng;

use crate::constants::EQUALITY_TOLERANCE;
use crate::error::MatrixError;

/// An `n x n` matrix of `f64` values.
#[derive(Debug, Clone)]
pub struct Matrix {
    size: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Wrap a column-major buffer. Caller guarantees `data.len() == size * size`.
    pub(crate) fn from_column_major(size: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), size * size);
        Self { size, data }
    }

    /// Create an `n x n` matrix of zeros.
    pub fn zero(n: usize) -> Result<Self, MatrixError> {
        let len = element_count(n)?;
        Ok(Self::from_column_major(n, vec![0.0; len]))
    }

    /// Create the `n x n` identity matrix.
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        let mut m = Self::zero(n)?;
        for k in 0..n {
            m.data[k + k * n] = 1.0;
        }
        Ok(m)
    }

    /// Create an `n x n` matrix with elements drawn uniformly from `[-1, 1)`.
    ///
    /// Uses the thread-local generator, so values differ between calls.
    pub fn random(n: usize) -> Result<Self, MatrixError> {
        Self::random_with(n, &mut rand::thread_rng())
    }

    /// Like [`Matrix::random`], drawing from the given generator.
    pub fn random_with<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Self, MatrixError> {
        let len = element_count(n)?;
        let data = (0..len).map(|_| rng.gen_range(-1.0..1.0)).collect();
        Ok(Self::from_column_major(n, data))
    }

    /// Build a matrix from values listed in row-major order.
    ///
    /// `values.len()` must be a positive perfect square `k * k`. Value `i`
    /// lands in row `i / k`, column `i % k`; the buffer itself stays
    /// column-major.
    pub fn from_elements(values: &[f64]) -> Result<Self, MatrixError> {
        let count = values.len();
        let k = integer_sqrt(count);
        if count == 0 || k * k != count {
            return Err(MatrixError::InvalidElementCount(count));
        }

        let data = (0..count).map(|idx| values[(idx % k) * k + idx / k]).collect();
        Ok(Self::from_column_major(k, data))
    }

    /// Assemble a `2k x 2k` matrix from four `k x k` quadrants.
    pub fn from_parts(
        c11: &Matrix,
        c12: &Matrix,
        c21: &Matrix,
        c22: &Matrix,
    ) -> Result<Self, MatrixError> {
        let k = c11.size;
        for part in [c12, c21, c22] {
            c11.check_same_size(part)?;
        }

        let mut result = Self::zero(k * 2)?;
        result.set_sub_matrix(1, 1, c11)?;
        result.set_sub_matrix(1, k + 1, c12)?;
        result.set_sub_matrix(k + 1, 1, c21)?;
        result.set_sub_matrix(k + 1, k + 1, c22)?;
        Ok(result)
    }

    /// Number of rows (and columns).
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The column-major element buffer.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Copy the elements out as row vectors.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.size)
            .map(|row| (0..self.size).map(|col| self.data[row + col * self.size]).collect())
            .collect()
    }

    /// Element at row `i`, column `j` (1-indexed).
    pub fn get_element(&self, i: usize, j: usize) -> Result<f64, MatrixError> {
        if i < 1 || i > self.size || j < 1 || j > self.size {
            return Err(MatrixError::IndexOutOfBounds {
                row: i,
                col: j,
                size: self.size,
            });
        }
        Ok(self.data[(i - 1) + (j - 1) * self.size])
    }

    /// Copy out the `k x k` block whose top-left corner is at (`i`, `j`).
    pub fn sub_matrix(&self, i: usize, j: usize, k: usize) -> Result<Matrix, MatrixError> {
        self.check_block(i, j, k)?;

        let mut data = Vec::with_capacity(k * k);
        for col in 0..k {
            let start = (i - 1) + (j - 1 + col) * self.size;
            data.extend_from_slice(&self.data[start..start + k]);
        }
        Ok(Self::from_column_major(k, data))
    }

    /// Overwrite the block at (`i`, `j`) with the contents of `block`.
    pub fn set_sub_matrix(&mut self, i: usize, j: usize, block: &Matrix) -> Result<(), MatrixError> {
        let k = block.size;
        self.check_block(i, j, k)?;

        for col in 0..k {
            let start = (i - 1) + (j - 1 + col) * self.size;
            self.data[start..start + k].copy_from_slice(&block.data[col * k..(col + 1) * k]);
        }
        Ok(())
    }

    /// Whether every element differs from `other` by at most `tolerance`.
    #[must_use]
    pub fn approx_eq(&self, other: &Matrix, tolerance: f64) -> bool {
        self.size == other.size
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }

    /// Largest absolute element difference, or `None` if sizes differ.
    #[must_use]
    pub fn max_abs_diff(&self, other: &Matrix) -> Option<f64> {
        if self.size != other.size {
            return None;
        }
        Some(
            self.data
                .iter()
                .zip(&other.data)
                .map(|(a, b)| (a - b).abs())
                .fold(0.0, f64::max),
        )
    }

    pub(crate) fn data(&self) -> &[f64] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub(crate) fn check_same_size(&self, other: &Matrix) -> Result<(), MatrixError> {
        if self.size != other.size {
            return Err(MatrixError::SizeMismatch {
                expected: self.size,
                actual: other.size,
            });
        }
        Ok(())
    }

    fn check_block(&self, i: usize, j: usize, k: usize) -> Result<(), MatrixError> {
        if k == 0 {
            return Err(MatrixError::InvalidSize(k));
        }
        if i < 1 || j < 1 {
            return Err(MatrixError::IndexOutOfBounds {
                row: i,
                col: j,
                size: self.size,
            });
        }
        // `k <= size` once the first test passes, so `size - k + 1` never wraps.
        if k > self.size || i > self.size - k + 1 || j > self.size - k + 1 {
            return Err(MatrixError::BoundsExceeded {
                row: i,
                col: j,
                block: k,
                size: self.size,
            });
        }
        Ok(())
    }
}

/// Buffer length for an `n x n` matrix, rejecting sizes whose buffer
/// cannot be addressed.
fn element_count(n: usize) -> Result<usize, MatrixError> {
    if n == 0 {
        return Err(MatrixError::InvalidSize(n));
    }
    n.checked_mul(n)
        .filter(|len| {
            len.checked_mul(std::mem::size_of::<f64>())
                .is_some_and(|bytes| bytes <= isize::MAX.unsigned_abs())
        })
        .ok_or(MatrixError::InvalidSize(n))
}

/// Sizes must match and every element pair must lie within
/// [`EQUALITY_TOLERANCE`]. Not transitive, hence no `Eq`.
impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, EQUALITY_TOLERANCE)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                write!(f, "{:.2}", self.data[row + col * self.size])?;
                if col + 1 < self.size {
                    f.write_str(", ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn integer_sqrt(n: usize) -> usize {
    let mut k = (n as f64).sqrt() as usize;
    while k * k > n {
        k -= 1;
    }
    while (k + 1) * (k + 1) <= n {
        k += 1;
    }
    k
}
