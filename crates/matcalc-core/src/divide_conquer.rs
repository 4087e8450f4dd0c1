//! Naive recursive divide-and-conquer product.
//!
//! Splits both operands into quadrants and forms each result quadrant from
//! two recursive sub-products: eight multiplications per level, `O(n^3)`
//! overall. It shares its recursion skeleton with Strassen, which makes it
//! a check on the split/reassemble machinery on its own.

use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::options::Options;
use crate::quadrant::{check_operands, leaf_product, Quadrants};

/// Multiply `a * b` by recursing all the way to 1x1 blocks.
///
/// Both operands must share the same power-of-two size.
pub fn multiply_dc(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    multiply_dc_with(a, b, &Options::default())
}

/// Like [`multiply_dc`], switching to the schoolbook product once blocks
/// reach `opts.leaf_size`.
pub fn multiply_dc_with(a: &Matrix, b: &Matrix, opts: &Options) -> Result<Matrix, MatrixError> {
    let n = check_operands(a, b)?;
    tracing::debug!(size = n, leaf_size = opts.leaf_size, "divide-and-conquer multiply");
    multiply_rec(a, b, opts.leaf_size.max(1))
}

fn multiply_rec(a: &Matrix, b: &Matrix, leaf_size: usize) -> Result<Matrix, MatrixError> {
    if a.size() <= leaf_size {
        return leaf_product(a, b);
    }

    let Quadrants {
        q11: a11,
        q12: a12,
        q21: a21,
        q22: a22,
    } = Quadrants::split(a)?;
    let Quadrants {
        q11: b11,
        q12: b12,
        q21: b21,
        q22: b22,
    } = Quadrants::split(b)?;

    let mut c11 = multiply_rec(&a11, &b11, leaf_size)?;
    c11.plus_ip(&multiply_rec(&a12, &b21, leaf_size)?)?;

    let mut c12 = multiply_rec(&a11, &b12, leaf_size)?;
    c12.plus_ip(&multiply_rec(&a12, &b22, leaf_size)?)?;

    let mut c21 = multiply_rec(&a21, &b11, leaf_size)?;
    c21.plus_ip(&multiply_rec(&a22, &b21, leaf_size)?)?;

    let mut c22 = multiply_rec(&a21, &b12, leaf_size)?;
    c22.plus_ip(&multiply_rec(&a22, &b22, leaf_size)?)?;

    Matrix::from_parts(&c11, &c12, &c21, &c22)
}
