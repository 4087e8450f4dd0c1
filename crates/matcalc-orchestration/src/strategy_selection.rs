//! Strategy selection logic.

use std::sync::Arc;

use matcalc_core::registry::MultiplierFactory;
use matcalc_core::{MatrixError, Multiplier};

/// Get strategies to run based on the `--algo` selection.
///
/// Accepts `all`, a single strategy name, or a comma-separated list.
pub fn get_multipliers_to_run(
    algo: &str,
    factory: &dyn MultiplierFactory,
) -> Result<Vec<Arc<dyn Multiplier>>, MatrixError> {
    match algo.trim() {
        "all" => factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect(),
        list => {
            let strategies = list
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(|name| factory.get(name))
                .collect::<Result<Vec<_>, _>>()?;
            if strategies.is_empty() {
                return Err(MatrixError::Config("no strategy selected".into()));
            }
            Ok(strategies)
        }
    }
}

/// Drop strategies that cannot multiply matrices of size `n`.
///
/// Returns the kept strategies and the names of those skipped.
pub fn filter_for_size(
    strategies: Vec<Arc<dyn Multiplier>>,
    n: usize,
) -> (Vec<Arc<dyn Multiplier>>, Vec<String>) {
    if n.is_power_of_two() {
        return (strategies, Vec::new());
    }
    let mut skipped = Vec::new();
    let kept = strategies
        .into_iter()
        .filter(|s| {
            if s.requires_power_of_two() {
                skipped.push(s.name().to_string());
                false
            } else {
                true
            }
        })
        .collect();
    (kept, skipped)
}
