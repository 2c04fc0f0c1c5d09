//! Core matrix abstraction traits
//!
//! This module defines the read-only interface every matrix representation
//! provides, independent of its physical layout.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use super::element::MatrixElement;
use crate::props::MatrixProperties;

/// Physical storage scheme of a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    /// Row-major dense storage
    Dense,
    /// Compressed sparse row storage
    Csr,
}

impl core::fmt::Display for Representation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Representation::Dense => write!(f, "dense"),
            Representation::Csr => write!(f, "CSR"),
        }
    }
}

/// Format-agnostic matrix access
pub trait Matrix {
    /// The value type stored in this matrix
    type Element: MatrixElement;

    /// Physical representation of this matrix
    fn representation(&self) -> Representation;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get an element at the specified position
    ///
    /// Returns `None` only if the position is out of bounds; elements that
    /// are not stored read as zero.
    fn get_element(&self, row: usize, col: usize) -> Option<Self::Element>;

    /// Number of non-zero elements
    fn nnz(&self) -> usize;

    /// Properties currently attached to this matrix
    fn properties(&self) -> MatrixProperties;
}

/// Extension trait for row/column operations (requires alloc feature)
#[cfg(feature = "alloc")]
pub trait MatrixOperations: Matrix {
    /// Get all elements in a row, zeros included, in column order
    fn get_row(&self, row_index: usize) -> Vec<Self::Element>;

    /// Get all elements in a column, zeros included, in row order
    fn get_col(&self, col_index: usize) -> Vec<Self::Element>;
}
