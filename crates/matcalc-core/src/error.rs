//! Error type shared by every matrix operation.

/// Error type for matrix construction, access and multiplication.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatrixError {
    /// Requested dimension is zero, or too large for its buffer to be
    /// addressed.
    #[error("invalid matrix size {0}: must be positive and addressable")]
    InvalidSize(usize),

    /// Element count handed to `from_elements` is not a perfect square.
    #[error("element count is not a perfect square, was {0}")]
    InvalidElementCount(usize),

    /// A 1-indexed accessor fell outside `[1, size]`.
    #[error("element ({row}, {col}) is out of bounds for matrix of size {size}")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        size: usize,
    },

    /// A block read or write would run past the matrix edge.
    #[error(
        "block of size {block} at ({row}, {col}) exceeds bounds of matrix of size {size}"
    )]
    BoundsExceeded {
        row: usize,
        col: usize,
        block: usize,
        size: usize,
    },

    /// Binary operation on matrices of different sizes.
    #[error("matrix sizes are not equal: expected {expected}, was {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Recursive products need sizes that halve evenly down to 1.
    #[error("recursive multiplication requires a power-of-two size, was {0}")]
    NotPowerOfTwo(usize),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Worker pool could not be built or lost a task.
    #[error("worker pool error: {0}")]
    Pool(String),

    /// Results from different strategies don't match.
    #[error("result mismatch between strategies")]
    Mismatch,
}
