//! Multiplication strategy trait and implementations.
//!
//! `Multiplier` is the narrow interface consumed by orchestration and the
//! benchmarks. Each strategy wraps one of the product functions.

use crate::divide_conquer::multiply_dc_with;
use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::options::Options;
use crate::pool::WorkerPool;
use crate::strassen::multiply_strassen;

/// Narrow interface for square matrix multiplication.
pub trait Multiplier: Send + Sync {
    /// Multiply `a * b`.
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError>;

    /// Whether the strategy only accepts power-of-two sizes.
    fn requires_power_of_two(&self) -> bool {
        true
    }

    /// Get the name of this multiplication strategy.
    fn name(&self) -> &str;
}

/// Direct triple-loop product.
pub struct SchoolbookMultiplier;

impl SchoolbookMultiplier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for SchoolbookMultiplier {
    fn default() -> Self {
        Self::new()
    }
}

impl Multiplier for SchoolbookMultiplier {
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
        a.matrix_product(b)
    }

    fn requires_power_of_two(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "Schoolbook"
    }
}

/// Eight-product recursive quadrant multiply.
pub struct DivideConquerMultiplier {
    opts: Options,
}

impl DivideConquerMultiplier {
    #[must_use]
    pub fn new(opts: Options) -> Self {
        Self { opts }
    }
}

impl Multiplier for DivideConquerMultiplier {
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
        multiply_dc_with(a, b, &self.opts)
    }

    fn name(&self) -> &'static str {
        "DivideConquer"
    }
}

/// Strassen multiply, fanning out on its own worker pool.
pub struct StrassenMultiplier {
    opts: Options,
    pool: WorkerPool,
}

impl StrassenMultiplier {
    #[must_use]
    pub fn new(opts: Options, pool: WorkerPool) -> Self {
        Self { opts, pool }
    }

    /// The pool sub-products are dispatched to.
    #[must_use]
    pub fn pool(&self) -> &WorkerPool {
        &self.pool
    }
}

impl Multiplier for StrassenMultiplier {
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
        multiply_strassen(a, b, &self.opts, &self.pool)
    }

    fn name(&self) -> &'static str {
        "Strassen"
    }
}
