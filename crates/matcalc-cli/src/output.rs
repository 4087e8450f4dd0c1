//! CLI output formatting and result files.

use std::io;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use matcalc_core::Matrix;

/// Largest matrix printed in full without `--verbose`.
const PREVIEW_LIMIT: usize = 8;

/// Row-major JSON form of a matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixDump {
    /// Strategy that produced the matrix.
    pub algorithm: String,
    /// Number of rows and columns.
    pub size: usize,
    /// Elements, one vector per row.
    pub rows: Vec<Vec<f64>>,
}

impl MatrixDump {
    #[must_use]
    pub fn new(algorithm: &str, matrix: &Matrix) -> Self {
        Self {
            algorithm: algorithm.to_string(),
            size: matrix.size(),
            rows: matrix.to_rows(),
        }
    }
}

/// Render a matrix for the terminal, showing only the top-left corner of
/// large matrices unless `verbose` is set.
#[must_use]
pub fn format_matrix(matrix: &Matrix, verbose: bool) -> String {
    let n = matrix.size();
    if verbose || n <= PREVIEW_LIMIT {
        return matrix.to_string();
    }

    let shown = PREVIEW_LIMIT / 2;
    let mut out = String::new();
    for row in matrix.to_rows().iter().take(shown) {
        let cells: Vec<String> = row.iter().take(shown).map(|x| format!("{x:.2}")).collect();
        out.push_str(&cells.join(", "));
        out.push_str(", ...\n");
    }
    out.push_str(&format!("... ({n}x{n}, top-left {shown}x{shown} shown)\n"));
    out
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a throughput figure.
#[must_use]
pub fn format_gflops(gflops: Option<f64>) -> String {
    match gflops {
        Some(g) if g >= 1.0 => format!("{g:.2} GFLOP/s"),
        Some(g) => format!("{:.1} MFLOP/s", g * 1000.0),
        None => "-".to_string(),
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Write a product to `path` as pretty-printed JSON.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &Path, algorithm: &str, matrix: &Matrix) -> io::Result<()> {
    let dump = MatrixDump::new(algorithm, matrix);
    let content = serde_json::to_string_pretty(&dump).map_err(io::Error::other)?;
    std::fs::write(path, content)
}
