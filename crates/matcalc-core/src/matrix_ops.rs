//! Elementwise arithmetic and the schoolbook product.
//!
//! `plus`/`minus` allocate a fresh result. `plus_ip`/`minus_ip` mutate the
//! receiver and hand it back, so the recursive strategies can chain
//! accumulations without extra buffers.

use crate::error::MatrixError;
use crate::matrix::Matrix;

impl Matrix {
    /// Elementwise sum into a new matrix.
    pub fn plus(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Elementwise difference into a new matrix.
    pub fn minus(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Add `other` into `self`. Mutates the receiver.
    pub fn plus_ip(&mut self, other: &Matrix) -> Result<&mut Matrix, MatrixError> {
        self.check_same_size(other)?;
        for (a, b) in self.data_mut().iter_mut().zip(other.data()) {
            *a += b;
        }
        Ok(self)
    }

    /// Subtract `other` from `self`. Mutates the receiver.
    pub fn minus_ip(&mut self, other: &Matrix) -> Result<&mut Matrix, MatrixError> {
        self.check_same_size(other)?;
        for (a, b) in self.data_mut().iter_mut().zip(other.data()) {
            *a -= b;
        }
        Ok(self)
    }

    /// Schoolbook `O(n^3)` product `self * other`.
    ///
    /// Each result element accumulates `self[row, k] * other[k, col]` for
    /// `k` ascending. This is the reference the recursive strategies are
    /// checked against.
    pub fn matrix_product(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.check_same_size(other)?;

        let n = self.size();
        let a = self.data();
        let b = other.data();
        let mut out = vec![0.0; n * n];

        // Column-major: walk each output column, streaming columns of `a`.
        for col in 0..n {
            let out_col = &mut out[col * n..(col + 1) * n];
            for k in 0..n {
                let scale = b[k + col * n];
                let a_col = &a[k * n..(k + 1) * n];
                for (c, &x) in out_col.iter_mut().zip(a_col) {
                    *c += x * scale;
                }
            }
        }

        Ok(Matrix::from_column_major(n, out))
    }

    fn zip_with(&self, other: &Matrix, op: impl Fn(f64, f64) -> f64) -> Result<Matrix, MatrixError> {
        self.check_same_size(other)?;
        let data = self
            .data()
            .iter()
            .zip(other.data())
            .map(|(&a, &b)| op(a, b))
            .collect();
        Ok(Matrix::from_column_major(self.size(), data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rows(values: &[f64]) -> Matrix {
        Matrix::from_elements(values).unwrap()
    }

    #[test]
    fn schoolbook_worked_example() {
        let a = rows(&[1.0, 2.0, 3.0, 4.0]);
        let b = rows(&[5.0, 6.0, 7.0, 8.0]);
        let c = a.matrix_product(&b).unwrap();
        assert_eq!(c, rows(&[19.0, 22.0, 43.0, 50.0]));
    }

    #[test]
    fn schoolbook_is_not_commutative() {
        let a = rows(&[1.0, 2.0, 3.0, 4.0]);
        let b = rows(&[5.0, 6.0, 7.0, 8.0]);
        let ba = b.matrix_product(&a).unwrap();
        assert_eq!(ba, rows(&[23.0, 34.0, 31.0, 46.0]));
    }

    #[test]
    fn schoolbook_identity() {
        let mut rng = StdRng::seed_from_u64(3);
        let a = Matrix::random_with(5, &mut rng).unwrap();
        let id = Matrix::identity(5).unwrap();
        assert_eq!(a.matrix_product(&id).unwrap(), a);
        assert_eq!(id.matrix_product(&a).unwrap(), a);
    }

    #[test]
    fn schoolbook_three_by_three() {
        let a = rows(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        let b = rows(&[9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0]);
        let expected = rows(&[30.0, 24.0, 18.0, 84.0, 69.0, 54.0, 138.0, 114.0, 90.0]);
        assert_eq!(a.matrix_product(&b).unwrap(), expected);
    }

    #[test]
    fn product_size_mismatch() {
        let a = Matrix::zero(2).unwrap();
        let b = Matrix::zero(4).unwrap();
        assert_eq!(
            a.matrix_product(&b),
            Err(MatrixError::SizeMismatch {
                expected: 2,
                actual: 4
            })
        );
    }

    #[test]
    fn plus_and_minus() {
        let a = rows(&[1.0, 2.0, 3.0, 4.0]);
        let b = rows(&[0.5, 0.5, 1.0, -1.0]);
        assert_eq!(a.plus(&b).unwrap(), rows(&[1.5, 2.5, 4.0, 3.0]));
        assert_eq!(a.minus(&b).unwrap(), rows(&[0.5, 1.5, 2.0, 5.0]));
        // Operands untouched.
        assert_eq!(a, rows(&[1.0, 2.0, 3.0, 4.0]));
    }

    #[test]
    fn minus_self_is_zero() {
        let a = Matrix::random_with(4, &mut StdRng::seed_from_u64(11)).unwrap();
        assert_eq!(a.minus(&a).unwrap(), Matrix::zero(4).unwrap());
    }

    #[test]
    fn in_place_matches_allocating() {
        let mut rng = StdRng::seed_from_u64(5);
        let a = Matrix::random_with(4, &mut rng).unwrap();
        let b = Matrix::random_with(4, &mut rng).unwrap();

        let mut sum = a.clone();
        sum.plus_ip(&b).unwrap();
        assert_eq!(sum, a.plus(&b).unwrap());

        let mut diff = a.clone();
        diff.minus_ip(&b).unwrap();
        assert_eq!(diff, a.minus(&b).unwrap());
    }

    #[test]
    fn in_place_chains() {
        let mut acc = rows(&[1.0, 1.0, 1.0, 1.0]);
        let one = rows(&[1.0, 1.0, 1.0, 1.0]);
        acc.plus_ip(&one).unwrap().plus_ip(&one).unwrap().minus_ip(&one).unwrap();
        assert_eq!(acc, rows(&[2.0, 2.0, 2.0, 2.0]));
    }

    #[test]
    fn arithmetic_size_mismatch() {
        let mut a = Matrix::zero(2).unwrap();
        let b = Matrix::zero(3).unwrap();
        assert!(matches!(a.plus(&b), Err(MatrixError::SizeMismatch { .. })));
        assert!(matches!(a.minus(&b), Err(MatrixError::SizeMismatch { .. })));
        assert!(matches!(a.plus_ip(&b), Err(MatrixError::SizeMismatch { .. })));
        assert!(matches!(a.minus_ip(&b), Err(MatrixError::SizeMismatch { .. })));
        // Failed in-place ops leave the receiver untouched.
        assert_eq!(a, Matrix::zero(2).unwrap());
    }
}
