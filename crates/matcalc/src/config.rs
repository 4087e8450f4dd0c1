//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

use matcalc_core::Options;

/// MatCalc-rs: dense square matrix multiplication with schoolbook,
/// divide-and-conquer and Strassen strategies.
#[derive(Parser, Debug)]
#[command(name = "matcalc", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Matrix size (rows and columns).
    #[arg(short = 'n', long = "size", default_value = "256", env = "MATCALC_N")]
    pub size: usize,

    /// Strategy to use: schoolbook, dc, strassen, a comma list, or all.
    #[arg(long, default_value = "all")]
    pub algo: String,

    /// Matrix size at or above which Strassen runs its sub-products in
    /// parallel (0 uses the default).
    #[arg(long, default_value = "0")]
    pub threshold: usize,

    /// Size at or below which recursion falls back to the schoolbook
    /// product (0 uses the default).
    #[arg(long, default_value = "0")]
    pub leaf_size: usize,

    /// Number of worker threads (0 uses the default).
    #[arg(long, default_value = "0")]
    pub workers: usize,

    /// Seed for the random operands.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Timed runs per strategy; the fastest is reported.
    #[arg(long, default_value = "1")]
    pub runs: usize,

    /// Write the product to this file as JSON.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Quiet mode (only print the product).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Show detailed information.
    #[arg(short, long)]
    pub details: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Multiplication options built from the flags.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            parallel_threshold: self.threshold,
            leaf_size: self.leaf_size,
            pool_capacity: self.workers,
        }
        .normalize()
    }

    /// Default `tracing` filter when `RUST_LOG` is unset.
    #[must_use]
    pub fn log_directives(&self) -> &'static str {
        if self.verbose {
            "warn,matcalc_lib=info,matcalc_core=info,matcalc_orchestration=info"
        } else {
            "warn"
        }
    }
}
