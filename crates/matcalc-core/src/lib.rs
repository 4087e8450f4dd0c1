//! # matcalc-core
//!
//! Core library for the MatCalc-rs dense matrix engine.
//! Implements the schoolbook, divide-and-conquer and Strassen products over
//! a column-major square [`Matrix`], with an injectable [`WorkerPool`] for
//! Strassen's parallel fan-out.

pub mod constants;
pub mod divide_conquer;
pub mod error;
pub mod matrix;
pub(crate) mod matrix_ops;
pub mod options;
pub mod pool;
pub(crate) mod quadrant;
pub mod registry;
pub mod strassen;
pub mod strategy;

// Re-exports
pub use constants::{
    exit_codes, DEFAULT_LEAF_SIZE, DEFAULT_PARALLEL_THRESHOLD, DEFAULT_POOL_CAPACITY,
    EQUALITY_TOLERANCE,
};
pub use divide_conquer::{multiply_dc, multiply_dc_with};
pub use error::MatrixError;
pub use matrix::Matrix;
pub use options::Options;
pub use pool::{TaskHandle, WorkerPool};
pub use registry::{DefaultFactory, MultiplierFactory};
pub use strassen::multiply_strassen;
pub use strategy::Multiplier;

/// Schoolbook product `a * b`.
///
/// Free-function form of [`Matrix::matrix_product`].
///
/// # Example
/// ```
/// use matcalc_core::{matrix_product, Matrix};
///
/// let a = Matrix::from_elements(&[1.0, 2.0, 3.0, 4.0]).unwrap();
/// let b = Matrix::from_elements(&[5.0, 6.0, 7.0, 8.0]).unwrap();
/// let c = matrix_product(&a, &b).unwrap();
/// assert_eq!(c, Matrix::from_elements(&[19.0, 22.0, 43.0, 50.0]).unwrap());
/// ```
pub fn matrix_product(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    a.matrix_product(b)
}
