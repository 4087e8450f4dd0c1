//! Error handling and exit codes.

use matcalc_core::constants::exit_codes;
use matcalc_core::MatrixError;

/// Map a matrix error to the process exit code.
pub fn handle_error(err: &MatrixError) -> i32 {
    match err {
        MatrixError::InvalidSize(_)
        | MatrixError::InvalidElementCount(_)
        | MatrixError::IndexOutOfBounds { .. }
        | MatrixError::BoundsExceeded { .. }
        | MatrixError::SizeMismatch { .. }
        | MatrixError::NotPowerOfTwo(_)
        | MatrixError::Pool(_) => exit_codes::ERROR_GENERIC,
        MatrixError::Config(_) => exit_codes::ERROR_CONFIG,
        MatrixError::Mismatch => exit_codes::ERROR_MISMATCH,
    }
}

/// Exit code for any error surfaced by [`crate::app::run`].
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<MatrixError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
