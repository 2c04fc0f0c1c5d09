//! Compressed sparse row matrix representation

use log::debug;
use matprops_core::{
    DataBuffer, HasTransferableProperties, Matrix, MatrixElement, MatrixError, MatrixOperations,
    MatrixProperties, PropertyCell, Representation, SymmetryFlag,
};
use std::sync::Arc;

use crate::dense::DenseMatrix;
use crate::error::Result;

/// Sparse matrix in CSR layout
///
/// Column indices within a row are strictly increasing. The three arrays
/// are shared between clones.
///
/// The type is `Send` but not `Sync`. Attach properties before handing the
/// matrix off; give each concurrent reader a clone.
#[derive(Debug, Clone)]
pub struct CsrMatrix<VT: MatrixElement> {
    num_rows: usize,
    num_cols: usize,
    values: Arc<[VT]>,
    col_idxs: Arc<[usize]>,
    row_offsets: Arc<[usize]>,
    props: PropertyCell,
}

impl<VT: MatrixElement> CsrMatrix<VT> {
    /// Create a matrix from raw CSR arrays
    ///
    /// `row_offsets` must have `num_rows + 1` entries, start at 0, never
    /// decrease and end at `values.len()`.
    pub fn new(
        num_rows: usize,
        num_cols: usize,
        values: Vec<VT>,
        col_idxs: Vec<usize>,
        row_offsets: Vec<usize>,
    ) -> Result<Self> {
        if values.len() != col_idxs.len() {
            return Err(MatrixError::ShapeMismatch.into());
        }
        if num_rows.checked_add(1) != Some(row_offsets.len())
            || row_offsets.first() != Some(&0)
            || row_offsets.last() != Some(&values.len())
            || row_offsets.windows(2).any(|w| w[0] > w[1])
        {
            return Err(MatrixError::InvalidRowOffsets.into());
        }
        for w in row_offsets.windows(2) {
            let cols = &col_idxs[w[0]..w[1]];
            if cols.iter().any(|&c| c >= num_cols) || cols.windows(2).any(|p| p[0] >= p[1]) {
                return Err(MatrixError::InvalidColumnIndex.into());
            }
        }

        debug!(
            "Created {num_rows}x{num_cols} CSR {} matrix with {} stored values",
            VT::value_type(),
            values.len()
        );

        Ok(Self {
            num_rows,
            num_cols,
            values: values.into(),
            col_idxs: col_idxs.into(),
            row_offsets: row_offsets.into(),
            props: PropertyCell::new(),
        })
    }

    /// Build from `(row, col, value)` triplets in any order
    ///
    /// Zero values are dropped. If a position appears more than once the
    /// last triplet wins.
    pub fn from_triplets(
        num_rows: usize,
        num_cols: usize,
        triplets: &[(usize, usize, VT)],
    ) -> Result<Self> {
        let offsets_len = num_rows
            .checked_add(1)
            .ok_or(MatrixError::InvalidRowOffsets)?;
        if triplets
            .iter()
            .any(|&(r, c, _)| r >= num_rows || c >= num_cols)
        {
            return Err(MatrixError::IndexOutOfBounds.into());
        }

        let mut entries: Vec<(usize, usize, VT)> = triplets.to_vec();
        // Stable sort keeps input order among duplicates
        entries.sort_by_key(|&(r, c, _)| (r, c));

        let mut values = Vec::with_capacity(entries.len());
        let mut col_idxs = Vec::with_capacity(entries.len());
        let mut row_counts = vec![0usize; num_rows];
        let mut i = 0;
        while i < entries.len() {
            let (r, c, _) = entries[i];
            let mut j = i;
            while j + 1 < entries.len() && entries[j + 1].0 == r && entries[j + 1].1 == c {
                j += 1;
            }
            let v = entries[j].2;
            if v.is_nonzero() {
                values.push(v);
                col_idxs.push(c);
                row_counts[r] += 1;
            }
            i = j + 1;
        }

        let mut row_offsets = Vec::with_capacity(offsets_len);
        row_offsets.push(0);
        let mut total = 0;
        for count in row_counts {
            total += count;
            row_offsets.push(total);
        }

        Self::new(num_rows, num_cols, values, col_idxs, row_offsets)
    }

    /// Compress a dense matrix
    ///
    /// The logical matrix is unchanged, so its properties carry over.
    pub fn from_dense(dense: &DenseMatrix<VT>) -> Result<Self> {
        let mut values = Vec::new();
        let mut col_idxs = Vec::new();
        let offsets_len = dense
            .num_rows()
            .checked_add(1)
            .ok_or(MatrixError::InvalidRowOffsets)?;
        let mut row_offsets = Vec::with_capacity(offsets_len);
        row_offsets.push(0);
        for r in 0..dense.num_rows() {
            let row = dense.row(r).ok_or(MatrixError::IndexOutOfBounds)?;
            for (c, &v) in row.iter().enumerate() {
                if v.is_nonzero() {
                    values.push(v);
                    col_idxs.push(c);
                }
            }
            row_offsets.push(values.len());
        }

        let csr = Self::new(
            dense.num_rows(),
            dense.num_cols(),
            values,
            col_idxs,
            row_offsets,
        )?;
        csr.props.overwrite(dense.sparsity(), dense.symmetric());
        Ok(csr)
    }

    /// Expand into a dense matrix, carrying the properties over
    pub fn to_dense(&self) -> Result<DenseMatrix<VT>> {
        let len = self
            .num_rows
            .checked_mul(self.num_cols)
            .ok_or(MatrixError::ShapeMismatch)?;
        let mut values = vec![VT::zero(); len];
        for r in 0..self.num_rows {
            let (cols, vals) = self.row_entries(r).ok_or(MatrixError::IndexOutOfBounds)?;
            for (&c, &v) in cols.iter().zip(vals) {
                values[r * self.num_cols + c] = v;
            }
        }
        Ok(DenseMatrix::new(self.num_rows, self.num_cols, values)?.with_props(self.properties()))
    }

    /// Get the number of rows
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Get the number of columns
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Stored values
    pub fn values(&self) -> &[VT] {
        &self.values
    }

    /// Column index of every stored value
    pub fn col_idxs(&self) -> &[usize] {
        &self.col_idxs
    }

    /// Row offsets into `values` and `col_idxs`
    pub fn row_offsets(&self) -> &[usize] {
        &self.row_offsets
    }

    /// The reference-counted value buffer shared with clones
    pub fn shared_values(&self) -> &Arc<[VT]> {
        &self.values
    }

    /// Column indices and values of one row
    pub fn row_entries(&self, row: usize) -> Option<(&[usize], &[VT])> {
        if row >= self.num_rows {
            return None;
        }
        let range = self.row_offsets[row]..self.row_offsets[row + 1];
        Some((&self.col_idxs[range.clone()], &self.values[range]))
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
}

impl<VT: MatrixElement> HasTransferableProperties for CsrMatrix<VT> {
    #[inline]
    fn transfer(&self, sparsity: f64, symmetric: SymmetryFlag) {
        self.props.overwrite(sparsity, symmetric);
    }
}

impl<VT: MatrixElement> Matrix for CsrMatrix<VT> {
    type Element = VT;

    fn representation(&self) -> Representation {
        Representation::Csr
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.num_rows, self.num_cols)
    }

    fn get_element(&self, row: usize, col: usize) -> Option<VT> {
        if col >= self.num_cols {
            return None;
        }
        let (cols, vals) = self.row_entries(row)?;
        match cols.binary_search(&col) {
            Ok(pos) => Some(vals[pos]),
            Err(_) => Some(VT::zero()),
        }
    }

    fn nnz(&self) -> usize {
        self.values.iter().filter(|v| v.is_nonzero()).count()
    }

    fn properties(&self) -> MatrixProperties {
        self.props.snapshot()
    }
}

impl<VT: MatrixElement> MatrixOperations for CsrMatrix<VT> {
    fn get_row(&self, row_index: usize) -> Vec<VT> {
        let Some((cols, vals)) = self.row_entries(row_index) else {
            return Vec::new();
        };
        let mut row = vec![VT::zero(); self.num_cols];
        for (&c, &v) in cols.iter().zip(vals) {
            row[c] = v;
        }
        row
    }

    fn get_col(&self, col_index: usize) -> Vec<VT> {
        if col_index >= self.num_cols {
            return Vec::new();
        }
        (0..self.num_rows)
            .filter_map(|r| self.get_element(r, col_index))
            .collect()
    }
}

impl<VT: MatrixElement> DataBuffer for CsrMatrix<VT> {
    fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.values[..])
    }
}
