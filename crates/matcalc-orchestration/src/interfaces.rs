//! Orchestration interfaces.

use std::time::Duration;

use matcalc_core::{Matrix, MatrixError};

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a single strategy's product.
    fn present_result(&self, result: &CalculationResult, n: usize, details: bool);

    /// Present a comparison of all strategies.
    fn present_comparison(&self, results: &[CalculationResult], n: usize);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of running one strategy on an operand pair.
#[derive(Debug, Clone)]
pub struct CalculationResult {
    /// Strategy name.
    pub algorithm: String,
    /// The product or a structured error.
    pub outcome: Result<Matrix, MatrixError>,
    /// Best wall-clock duration over all runs.
    pub duration: Duration,
    /// Number of timed runs.
    pub runs: usize,
}

impl CalculationResult {
    /// Nominal throughput in GFLOP/s, counting `2 n^3` flops per product.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn gflops(&self, n: usize) -> Option<f64> {
        let secs = self.duration.as_secs_f64();
        if self.outcome.is_err() || secs <= 0.0 {
            return None;
        }
        let n = n as f64;
        Some(2.0 * n * n * n / secs / 1e9)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculation_result() {
        let result = CalculationResult {
            algorithm: "Strassen".into(),
            outcome: Ok(Matrix::identity(2).unwrap()),
            duration: Duration::from_millis(100),
            runs: 1,
        };
        assert_eq!(result.algorithm, "Strassen");
        assert!(result.outcome.is_ok());
    }

    #[test]
    fn gflops_from_duration() {
        let result = CalculationResult {
            algorithm: "Schoolbook".into(),
            outcome: Ok(Matrix::zero(1).unwrap()),
            duration: Duration::from_secs(2),
            runs: 1,
        };
        // 2 * 1000^3 flops in 2 s = 1 GFLOP/s
        let g = result.gflops(1000).unwrap();
        assert!((g - 1.0).abs() < 1e-9);
    }

    #[test]
    fn gflops_none_on_error_or_zero_duration() {
        let failed = CalculationResult {
            algorithm: "DivideConquer".into(),
            outcome: Err(MatrixError::NotPowerOfTwo(3)),
            duration: Duration::from_millis(1),
            runs: 1,
        };
        assert!(failed.gflops(3).is_none());

        let instant = CalculationResult {
            algorithm: "Schoolbook".into(),
            outcome: Ok(Matrix::zero(1).unwrap()),
            duration: Duration::ZERO,
            runs: 1,
        };
        assert!(instant.gflops(1).is_none());
    }
}
