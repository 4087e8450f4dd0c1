//! CLI result presenter.

use std::fmt::Write as _;

use matcalc_orchestration::interfaces::{CalculationResult, ResultPresenter};

use crate::output::{format_duration, format_gflops, format_matrix, format_number};

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Text printed to stdout for one successful result, or `None` when the
    /// strategy failed.
    #[must_use]
    pub fn render_result(&self, result: &CalculationResult, n: usize, details: bool) -> Option<String> {
        let product = result.outcome.as_ref().ok()?;

        if self.quiet {
            return Some(product.to_string());
        }

        let mut out = String::new();
        let _ = writeln!(out, "Algorithm: {}", result.algorithm);
        let _ = writeln!(out, "Size: {n}x{n} ({} elements)", format_number(n * n));
        let _ = writeln!(out, "Duration: {}", format_duration(result.duration));
        if details {
            let _ = writeln!(out, "Runs: {}", result.runs);
            let _ = writeln!(out, "Throughput: {}", format_gflops(result.gflops(n)));
        }
        out.push_str("Product:\n");
        out.push_str(&format_matrix(product, self.verbose));
        Some(out)
    }

    /// Comparison table, or `None` in quiet mode.
    #[must_use]
    pub fn render_comparison(&self, results: &[CalculationResult], n: usize) -> Option<String> {
        if self.quiet {
            return None;
        }

        let mut out = format!("\nComparison Results ({n}x{n}):\n{:-<64}\n", "");
        for result in results {
            let status = if result.outcome.is_err() {
                "ERROR"
            } else {
                "OK"
            };
            let _ = writeln!(
                out,
                "  {:<16} {:>12} {:>18} [{}]",
                result.algorithm,
                format_duration(result.duration),
                format_gflops(result.gflops(n)),
                status,
            );
        }
        Some(out)
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, result: &CalculationResult, n: usize, details: bool) {
        match (&result.outcome, self.render_result(result, n, details)) {
            (_, Some(text)) => print!("{text}"),
            (Err(e), None) => self.present_error(&format!("{}: {e}", result.algorithm)),
            (Ok(_), None) => {}
        }
    }

    fn present_comparison(&self, results: &[CalculationResult], n: usize) {
        if let Some(table) = self.render_comparison(results, n) {
            print!("{table}");
        }
    }

    fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use matcalc_core::{Matrix, MatrixError};

    use super::*;

    fn ok(name: &str, n: usize) -> CalculationResult {
        CalculationResult {
            algorithm: name.into(),
            outcome: Ok(Matrix::identity(n).unwrap()),
            duration: Duration::from_millis(5),
            runs: 3,
        }
    }

    fn failed(name: &str) -> CalculationResult {
        CalculationResult {
            algorithm: name.into(),
            outcome: Err(MatrixError::NotPowerOfTwo(3)),
            duration: Duration::from_millis(3),
            runs: 1,
        }
    }

    #[test]
    fn quiet_result_is_product_only() {
        let presenter = CLIResultPresenter::new(false, true);
        let text = presenter.render_result(&ok("Strassen", 2), 2, true).unwrap();
        assert_eq!(text, "1.00, 0.00\n0.00, 1.00\n");
    }

    #[test]
    fn normal_result_lists_header_lines() {
        let presenter = CLIResultPresenter::new(false, false);
        let text = presenter.render_result(&ok("DivideConquer", 2), 2, false).unwrap();
        assert!(text.starts_with("Algorithm: DivideConquer\n"));
        assert!(text.contains("Size: 2x2 (4 elements)\n"));
        assert!(text.contains("Duration: 5.00ms\n"));
        assert!(!text.contains("Runs:"));
        assert!(text.ends_with("Product:\n1.00, 0.00\n0.00, 1.00\n"));
    }

    #[test]
    fn details_add_runs_and_throughput() {
        let presenter = CLIResultPresenter::new(false, false);
        let text = presenter.render_result(&ok("Schoolbook", 100), 100, true).unwrap();
        assert!(text.contains("Size: 100x100 (10,000 elements)\n"));
        assert!(text.contains("Runs: 3\n"));
        // 2 * 100^3 flops in 5ms = 0.4 GFLOP/s
        assert!(text.contains("Throughput: 400.0 MFLOP/s\n"));
    }

    #[test]
    fn large_product_is_previewed_unless_verbose() {
        let result = ok("Schoolbook", 16);
        let brief = CLIResultPresenter::new(false, false)
            .render_result(&result, 16, false)
            .unwrap();
        assert!(brief.contains("16x16, top-left 4x4 shown"));

        let full = CLIResultPresenter::new(true, false)
            .render_result(&result, 16, false)
            .unwrap();
        assert!(!full.contains("top-left"));
    }

    #[test]
    fn failed_result_renders_nothing() {
        let presenter = CLIResultPresenter::new(false, false);
        assert!(presenter.render_result(&failed("Strassen"), 3, true).is_none());
        // Routed to stderr instead.
        presenter.present_result(&failed("Strassen"), 3, false);
    }

    #[test]
    fn comparison_marks_status_and_throughput() {
        let presenter = CLIResultPresenter::new(false, false);
        let table = presenter
            .render_comparison(&[ok("Schoolbook", 4), failed("Strassen")], 4)
            .unwrap();
        let rows: Vec<&str> = table.lines().filter(|l| l.starts_with("  ")).collect();
        assert_eq!(rows.len(), 2);
        assert!(table.contains("Comparison Results (4x4):"));
        assert!(rows[0].contains("Schoolbook") && rows[0].ends_with("[OK]"));
        assert!(rows[0].contains("MFLOP/s"));
        assert!(rows[1].contains("Strassen") && rows[1].ends_with("[ERROR]"));
        assert!(rows[1].contains(" - "));
    }

    #[test]
    fn quiet_comparison_is_suppressed() {
        let presenter = CLIResultPresenter::new(false, true);
        assert!(presenter.render_comparison(&[ok("Schoolbook", 2)], 2).is_none());
    }
}
