//! Application entry point and dispatch.

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use matcalc_cli::output::write_to_file;
use matcalc_cli::presenter::CLIResultPresenter;
use matcalc_cli::ui;
use matcalc_core::registry::DefaultFactory;
use matcalc_core::{Matrix, MatrixError, WorkerPool};
use matcalc_orchestration::interfaces::ResultPresenter;
use matcalc_orchestration::orchestrator::{analyze_comparison_results, execute_multiplications};
use matcalc_orchestration::strategy_selection::{filter_for_size, get_multipliers_to_run};

use crate::config::AppConfig;
use crate::version::full_version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        matcalc_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    run_cli(config)
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let n = config.size;
    if n == 0 {
        return Err(MatrixError::Config("matrix size must be at least 1".into()).into());
    }

    let opts = config.options();
    let pool = WorkerPool::new(opts.pool_capacity)?;
    let factory = DefaultFactory::new(opts, pool);

    let selected = get_multipliers_to_run(&config.algo, &factory)?;
    let (strategies, skipped) = filter_for_size(selected, n);
    for name in &skipped {
        tracing::warn!(algorithm = %name, size = n, "skipping strategy: size is not a power of two");
        if !config.quiet {
            ui::print_warning(&format!("{name} skipped: {n} is not a power of two"));
        }
    }
    if strategies.is_empty() {
        return Err(MatrixError::Config(format!(
            "no selected strategy can multiply {n}x{n} matrices"
        ))
        .into());
    }

    if config.verbose && !config.quiet {
        ui::print_header(&full_version());
    }

    let (a, b) = operands(n, config.seed)?;
    tracing::info!(
        size = n,
        strategies = strategies.len(),
        threshold = opts.parallel_threshold,
        leaf_size = opts.leaf_size,
        workers = opts.pool_capacity,
        "starting multiplications"
    );
    let results = execute_multiplications(&strategies, &a, &b, config.runs);

    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
    if config.quiet {
        // Only the first product is printed; the rest are only cross-checked.
        if let Some(result) = results.iter().find(|r| r.outcome.is_ok()) {
            presenter.present_result(result, n, false);
        }
    } else {
        for result in &results {
            presenter.present_result(result, n, config.details);
        }
    }

    if results.len() > 1 {
        presenter.present_comparison(&results, n);
    }

    if let Some(ref path) = config.output {
        if let Some((name, product)) = results
            .iter()
            .find_map(|r| r.outcome.as_ref().ok().map(|m| (r.algorithm.as_str(), m)))
        {
            write_to_file(path, name, product)
                .with_context(|| format!("writing {}", path.display()))?;
        }
    }

    if let Some(err) = results.iter().find_map(|r| r.outcome.as_ref().err()) {
        return Err(err.clone().into());
    }

    if results.len() > 1 {
        analyze_comparison_results(&results)?;
        if !config.quiet {
            ui::print_success("all strategies agree");
        }
    }

    Ok(())
}

/// Random operands, reproducible when a seed is given.
fn operands(n: usize, seed: Option<u64>) -> Result<(Matrix, Matrix), MatrixError> {
    match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            Ok((Matrix::random_with(n, &mut rng)?, Matrix::random_with(n, &mut rng)?))
        }
        None => Ok((Matrix::random(n)?, Matrix::random(n)?)),
    }
}
