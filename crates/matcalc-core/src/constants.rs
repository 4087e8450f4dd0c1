//! Constants for multiplication thresholds and configuration.

/// Absolute per-element tolerance used by matrix equality.
pub const EQUALITY_TOLERANCE: f64 = 1e-6;

/// Default matrix size at or above which Strassen fans its seven
/// sub-products out to the worker pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 128;

/// Default size at or below which recursive strategies switch to the
/// schoolbook product. 1 recurses all the way to the scalar base case.
pub const DEFAULT_LEAF_SIZE: usize = 1;

/// Default number of worker threads in a `WorkerPool`.
pub const DEFAULT_POOL_CAPACITY: usize = 16;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Strategy results did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallel_threshold_is_a_power_of_two() {
        assert!(DEFAULT_PARALLEL_THRESHOLD.is_power_of_two());
        assert!(DEFAULT_PARALLEL_THRESHOLD > DEFAULT_LEAF_SIZE);
    }

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            exit_codes::SUCCESS,
            exit_codes::ERROR_GENERIC,
            exit_codes::ERROR_MISMATCH,
            exit_codes::ERROR_CONFIG,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
