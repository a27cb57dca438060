/// An error type for vector and matrix operations.
///
/// Every variant names the operation that failed so that a caller can tell a
/// bad index in `set_column_vector` apart from one in `delete`.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum LinalgError {
    /// An index is outside `[0, len)`.
    #[error("{op}: index {index} is out of range for length {len}")]
    IndexOutOfRange {
        /// The failing operation.
        op: &'static str,
        /// The requested index.
        index: usize,
        /// The number of valid positions.
        len: usize,
    },

    /// The operand shapes are incompatible.
    ///
    /// Vectors report their shape as `[len]` and matrices as `[rows, cols]`.
    #[error("{op}: dimension mismatch {lhs:?} vs {rhs:?}")]
    DimensionMismatch {
        /// The failing operation.
        op: &'static str,
        /// Shape of the left-hand operand.
        lhs: Vec<usize>,
        /// Shape of the right-hand operand.
        rhs: Vec<usize>,
    },

    /// An operand does not have the single length the operation is defined for.
    #[error("{op}: expected a vector of length {expected}, got {actual}")]
    InvalidLength {
        /// The failing operation.
        op: &'static str,
        /// The required length.
        expected: usize,
        /// The length received.
        actual: usize,
    },

    /// The operation requires a square matrix.
    #[error("{op}: matrix is not square ({rows}x{cols})")]
    NonSquare {
        /// The failing operation.
        op: &'static str,
        /// Number of rows.
        rows: usize,
        /// Number of entries per row.
        cols: usize,
    },

    /// The matrix has a zero determinant and cannot be inverted.
    #[error("{op}: matrix is singular")]
    Singular {
        /// The failing operation.
        op: &'static str,
    },

    /// The rows handed to a matrix constructor do not all have the same length.
    #[error("row {row} has {actual} entries, expected {expected}")]
    RaggedRows {
        /// Index of the first offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        actual: usize,
    },

    /// A token could not be parsed as a number.
    #[error("cannot parse `{token}` as a number")]
    ParseEntry {
        /// The offending token.
        token: String,
        /// The underlying parse failure.
        #[source]
        source: std::num::ParseFloatError,
    },
}
