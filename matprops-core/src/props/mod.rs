//! Property value model
//!
//! Sparsity and symmetry are the two statistically derived properties a
//! matrix representation carries next to its data. They live outside the
//! data buffer and may be rewritten through a shared reference.

pub mod cell;
pub mod symmetry;

pub use cell::PropertyCell;
pub use symmetry::SymmetryFlag;

/// Sparsity value stored by freshly constructed representations
pub const SPARSITY_UNKNOWN: f64 = -1.0;

/// Plain snapshot of a representation's properties
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatrixProperties {
    /// Estimated fraction of non-zero elements, or `SPARSITY_UNKNOWN`
    pub sparsity: f64,
    /// Whether the matrix is known to be symmetric
    pub symmetric: SymmetryFlag,
}

impl MatrixProperties {
    /// Nothing determined yet
    pub const UNKNOWN: Self = Self {
        sparsity: SPARSITY_UNKNOWN,
        symmetric: SymmetryFlag::Unknown,
    };

    /// Create a snapshot from explicit values
    pub const fn new(sparsity: f64, symmetric: SymmetryFlag) -> Self {
        Self {
            sparsity,
            symmetric,
        }
    }

    /// Whether a sparsity estimate has been attached
    ///
    /// Only the sentinel counts as unknown; values outside [0, 1] supplied
    /// by a caller are reported as known. Anything that consumes this, such
    /// as representation selection, inherits that: a negative sparsity other
    /// than `SPARSITY_UNKNOWN` is treated as a real estimate.
    pub fn is_sparsity_known(&self) -> bool {
        self.sparsity != SPARSITY_UNKNOWN
    }
}

impl Default for MatrixProperties {
    fn default() -> Self {
        Self::UNKNOWN
    }
}
