//! Row-major dense matrix representation
//!
//! The value buffer is reference counted so row slices are views that share
//! it. Each view carries its own property cell.
//!
//! Properties can be rewritten through `&DenseMatrix`, so the type is not
//! `Sync`:
//!
//! ```compile_fail,E0277
//! fn assert_sync<T: Sync>() {}
//! assert_sync::<matprops::DenseMatrix<f64>>();
//! ```

use log::debug;
use matprops_core::{
    DataBuffer, HasTransferableProperties, Matrix, MatrixElement, MatrixError, MatrixOperations,
    MatrixProperties, PropertyCell, Representation, SymmetryFlag,
};
use std::ops::Range;
use std::sync::Arc;

use crate::error::Result;

/// Dense matrix stored row by row
///
/// Attach properties while the matrix has a single owner, then move it to
/// its consumer. Several concurrent readers each get their own clone: the
/// clone shares the data buffer and copies the current properties.
#[derive(Debug, Clone)]
pub struct DenseMatrix<VT: MatrixElement> {
    num_rows: usize,
    num_cols: usize,
    /// Distance in elements between the starts of consecutive rows
    row_skip: usize,
    /// Index of element (0, 0) in `values`
    offset: usize,
    values: Arc<[VT]>,
    props: PropertyCell,
}

impl<VT: MatrixElement> DenseMatrix<VT> {
    /// Create a matrix from row-major values
    pub fn new(num_rows: usize, num_cols: usize, values: Vec<VT>) -> Result<Self> {
        let expected = num_rows
            .checked_mul(num_cols)
            .ok_or(MatrixError::ShapeMismatch)?;
        if values.len() != expected {
            return Err(MatrixError::ShapeMismatch.into());
        }

        debug!(
            "Created {num_rows}x{num_cols} dense {} matrix",
            VT::value_type()
        );

        Ok(Self {
            num_rows,
            num_cols,
            row_skip: num_cols,
            offset: 0,
            values: values.into(),
            props: PropertyCell::new(),
        })
    }

    /// Create a matrix of zeros
    pub fn zeros(num_rows: usize, num_cols: usize) -> Result<Self> {
        let len = num_rows
            .checked_mul(num_cols)
            .ok_or(MatrixError::ShapeMismatch)?;
        Self::new(num_rows, num_cols, vec![VT::zero(); len])
    }

    /// Create a matrix by evaluating `f(row, col)` for every position
    pub fn from_fn<F>(num_rows: usize, num_cols: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> VT,
    {
        let len = num_rows
            .checked_mul(num_cols)
            .ok_or(MatrixError::ShapeMismatch)?;
        let mut values = Vec::with_capacity(len);
        for row in 0..num_rows {
            for col in 0..num_cols {
                values.push(f(row, col));
            }
        }
        Self::new(num_rows, num_cols, values)
    }

    /// Get the number of rows
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Get the number of columns
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// The window of the shared buffer this matrix covers
    ///
    /// For a row slice of a wider parent this includes the gaps between
    /// rows; use [`row`](Self::row) for exact row contents.
    pub fn values(&self) -> &[VT] {
        if self.num_rows == 0 {
            return &[];
        }
        let end = self.offset + (self.num_rows - 1) * self.row_skip + self.num_cols;
        &self.values[self.offset..end]
    }

    /// Get one row, or `None` if out of bounds
    pub fn row(&self, row: usize) -> Option<&[VT]> {
        if row >= self.num_rows {
            return None;
        }
        let start = self.offset + row * self.row_skip;
        Some(&self.values[start..start + self.num_cols])
    }

    /// The reference-counted buffer shared with views and clones
    pub fn shared_values(&self) -> &Arc<[VT]> {
        &self.values
    }

    /// View a contiguous range of rows without copying
    ///
    /// The view shares the data buffer but starts with unknown properties:
    /// a slice's sparsity and symmetry need not match its parent's.
    pub fn slice_rows(&self, rows: Range<usize>) -> Result<Self> {
        if rows.start > rows.end {
            return Err(MatrixError::InvalidRange.into());
        }
        if rows.end > self.num_rows {
            return Err(MatrixError::IndexOutOfBounds.into());
        }

        Ok(Self {
            num_rows: rows.end - rows.start,
            num_cols: self.num_cols,
            row_skip: self.row_skip,
            offset: self.offset + rows.start * self.row_skip,
            values: Arc::clone(&self.values),
            props: PropertyCell::new(),
        })
    }

    /// The property cell of this matrix
    pub fn props(&self) -> &PropertyCell {
        &self.props
    }

    /// Current sparsity estimate
    pub fn sparsity(&self) -> f64 {
        self.props.sparsity()
    }

    /// Current symmetry flag
    pub fn symmetric(&self) -> SymmetryFlag {
        self.props.symmetric()
    }

    pub(crate) fn with_props(mut self, props: MatrixProperties) -> Self {
        self.props = PropertyCell::with_properties(props);
        self
    }
}

impl<VT: MatrixElement> HasTransferableProperties for DenseMatrix<VT> {
    #[inline]
    fn transfer(&self, sparsity: f64, symmetric: SymmetryFlag) {
        self.props.overwrite(sparsity, symmetric);
    }
}

impl<VT: MatrixElement> Matrix for DenseMatrix<VT> {
    type Element = VT;

    fn representation(&self) -> Representation {
        Representation::Dense
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.num_rows, self.num_cols)
    }

    fn get_element(&self, row: usize, col: usize) -> Option<VT> {
        if col >= self.num_cols {
            return None;
        }
        self.row(row).map(|r| r[col])
    }

    fn nnz(&self) -> usize {
        (0..self.num_rows)
            .filter_map(|r| self.row(r))
            .map(|r| r.iter().filter(|v| v.is_nonzero()).count())
            .sum()
    }

    fn properties(&self) -> MatrixProperties {
        self.props.snapshot()
    }
}

impl<VT: MatrixElement> MatrixOperations for DenseMatrix<VT> {
    fn get_row(&self, row_index: usize) -> Vec<VT> {
        self.row(row_index).map(<[VT]>::to_vec).unwrap_or_default()
    }

    fn get_col(&self, col_index: usize) -> Vec<VT> {
        if col_index >= self.num_cols {
            return Vec::new();
        }
        (0..self.num_rows)
            .filter_map(|r| self.row(r))
            .map(|r| r[col_index])
            .collect()
    }
}

impl<VT: MatrixElement> DataBuffer for DenseMatrix<VT> {
    fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.values())
    }
}
