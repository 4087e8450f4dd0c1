//! Quadrant split and operand checks shared by the recursive strategies.

use crate::error::MatrixError;
use crate::matrix::Matrix;

/// The four `k x k` blocks of a `2k x 2k` matrix.
pub(crate) struct Quadrants {
    pub q11: Matrix,
    pub q12: Matrix,
    pub q21: Matrix,
    pub q22: Matrix,
}

impl Quadrants {
    /// Split `m` at its midpoint along both axes. `m.size()` must be even.
    pub fn split(m: &Matrix) -> Result<Self, MatrixError> {
        let half = m.size() / 2;
        Ok(Self {
            q11: m.sub_matrix(1, 1, half)?,
            q12: m.sub_matrix(1, half + 1, half)?,
            q21: m.sub_matrix(half + 1, 1, half)?,
            q22: m.sub_matrix(half + 1, half + 1, half)?,
        })
    }
}

/// Validate a pair of operands for a recursive product, returning their size.
pub(crate) fn check_operands(a: &Matrix, b: &Matrix) -> Result<usize, MatrixError> {
    a.check_same_size(b)?;
    let n = a.size();
    if !n.is_power_of_two() {
        return Err(MatrixError::NotPowerOfTwo(n));
    }
    Ok(n)
}

/// Product of two matrices small enough to stop recursing.
pub(crate) fn leaf_product(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    if a.size() == 1 {
        return Matrix::from_elements(&[a.get_element(1, 1)? * b.get_element(1, 1)?]);
    }
    a.matrix_product(b)
}
