//! Error types for matrix construction and slicing

/// Errors that can occur while building or viewing a matrix representation
///
/// Property transfer itself never fails at runtime; these cover the
/// constructors that establish a representation's structural invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Buffer length does not match the requested dimensions
    ShapeMismatch,
    /// Index out of bounds
    IndexOutOfBounds,
    /// Row offsets are not a valid CSR prefix sum
    InvalidRowOffsets,
    /// Column index exceeds the number of columns
    InvalidColumnIndex,
    /// Empty or reversed range
    InvalidRange,
}

impl MatrixError {
    /// Short machine-friendly name of the error kind
    pub const fn kind(&self) -> &'static str {
        match self {
            MatrixError::ShapeMismatch => "shape_mismatch",
            MatrixError::IndexOutOfBounds => "index_out_of_bounds",
            MatrixError::InvalidRowOffsets => "invalid_row_offsets",
            MatrixError::InvalidColumnIndex => "invalid_column_index",
            MatrixError::InvalidRange => "invalid_range",
        }
    }
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            MatrixError::ShapeMismatch => "Buffer length does not match matrix shape",
            MatrixError::IndexOutOfBounds => "Index out of bounds",
            MatrixError::InvalidRowOffsets => "Invalid CSR row offsets",
            MatrixError::InvalidColumnIndex => "Column index out of range",
            MatrixError::InvalidRange => "Invalid range",
        };
        write!(f, "{msg}")
    }
}

/// Result type for matrix construction
pub type Result<T> = core::result::Result<T, MatrixError>;
