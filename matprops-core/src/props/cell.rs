//! Interior-mutable storage for a representation's properties

use core::cell::Cell;

use super::{MatrixProperties, SymmetryFlag};

/// Sparsity and symmetry metadata that can be rewritten through `&self`
///
/// Representations treat their data buffer as immutable once shared, but
/// their properties behave like a cache that analysis results are attached
/// to later. `overwrite` is the only way to change them.
///
/// The cells make every owner `!Sync` and `!RefUnwindSafe`: a
/// representation cannot be read from another thread while its properties
/// may still be written. Publication is by move, or by one clone per reader.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyCell {
    sparsity: Cell<f64>,
    symmetric: Cell<SymmetryFlag>,
}

impl PropertyCell {
    /// Create a cell with both properties unknown
    pub const fn new() -> Self {
        Self::with_properties(MatrixProperties::UNKNOWN)
    }

    /// Create a cell holding the given properties
    pub const fn with_properties(props: MatrixProperties) -> Self {
        Self {
            sparsity: Cell::new(props.sparsity),
            symmetric: Cell::new(props.symmetric),
        }
    }

    /// Replace both properties, discarding whatever was stored before
    #[inline]
    pub fn overwrite(&self, sparsity: f64, symmetric: SymmetryFlag) {
        self.sparsity.set(sparsity);
        self.symmetric.set(symmetric);
    }

    /// Current sparsity estimate
    #[inline]
    pub fn sparsity(&self) -> f64 {
        self.sparsity.get()
    }

    /// Current symmetry flag
    #[inline]
    pub fn symmetric(&self) -> SymmetryFlag {
        self.symmetric.get()
    }

    /// Copy both properties out
    pub fn snapshot(&self) -> MatrixProperties {
        MatrixProperties::new(self.sparsity(), self.symmetric())
    }
}

impl Default for PropertyCell {
    fn default() -> Self {
        Self::new()
    }
}

impl From<MatrixProperties> for PropertyCell {
    fn from(props: MatrixProperties) -> Self {
        Self::with_properties(props)
    }
}
