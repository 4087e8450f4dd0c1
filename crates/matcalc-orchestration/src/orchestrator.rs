//! Core orchestration: timed execution and result analysis.

use std::sync::Arc;
use std::time::{Duration, Instant};

use matcalc_core::{Matrix, MatrixError, Multiplier};

use crate::interfaces::CalculationResult;

/// Multiply `a * b` with every given strategy.
///
/// Strategies run one after another so their timings do not overlap; each
/// is run `runs` times (at least once) and the fastest run is reported.
/// The first failing run ends that strategy's attempts.
pub fn execute_multiplications(
    strategies: &[Arc<dyn Multiplier>],
    a: &Matrix,
    b: &Matrix,
    runs: usize,
) -> Vec<CalculationResult> {
    let runs = runs.max(1);
    strategies
        .iter()
        .map(|strategy| execute_one(strategy.as_ref(), a, b, runs))
        .collect()
}

fn execute_one(strategy: &dyn Multiplier, a: &Matrix, b: &Matrix, runs: usize) -> CalculationResult {
    let mut best = Duration::MAX;
    let mut outcome = Err(MatrixError::Config("no runs executed".into()));
    let mut completed = 0;

    for run in 0..runs {
        let start = Instant::now();
        let result = strategy.multiply(a, b);
        let elapsed = start.elapsed();
        best = best.min(elapsed);
        completed += 1;

        tracing::debug!(
            algorithm = strategy.name(),
            size = a.size(),
            run,
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            "multiplication finished"
        );

        let failed = result.is_err();
        outcome = result;
        if failed {
            break;
        }
    }

    CalculationResult {
        algorithm: strategy.name().to_string(),
        outcome,
        duration: best,
        runs: completed,
    }
}

/// Analyze comparison results for mismatches.
///
/// Every successful product is compared with the first successful one
/// using the matrix equality tolerance.
pub fn analyze_comparison_results(results: &[CalculationResult]) -> Result<(), MatrixError> {
    let valid: Vec<(&str, &Matrix)> = results
        .iter()
        .filter_map(|r| r.outcome.as_ref().ok().map(|m| (r.algorithm.as_str(), m)))
        .collect();

    let Some(&(reference_name, reference)) = valid.first() else {
        return Err(MatrixError::Config("no valid results".into()));
    };

    for &(name, product) in &valid[1..] {
        if product != reference {
            tracing::warn!(
                reference = reference_name,
                algorithm = name,
                max_abs_diff = product.max_abs_diff(reference),
                "strategy results disagree"
            );
            return Err(MatrixError::Mismatch);
        }
    }

    tracing::info!(strategies = valid.len(), "all strategy results agree");
    Ok(())
}
