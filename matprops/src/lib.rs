//! matprops - Matrix representations with in-place property transfer
//!
//! This library provides dense and compressed sparse row matrices whose
//! sparsity and symmetry metadata can be attached after construction,
//! without touching the data buffers.
//!
//! ## Architecture
//!
//! - **matprops-core**: Property model, capability traits and the
//!   `transfer_properties` kernel (no_std, no storage)
//! - **matprops**: Concrete representations, configuration loading and
//!   property-driven representation selection
//!
//! ## Quick Start
//!
//! ```rust
//! use matprops::{transfer_properties, DenseMatrix, ExecutionContext, SymmetryFlag};
//!
//! fn example() -> matprops::Result<()> {
//!     let ctx = ExecutionContext::default();
//!     let matrix = DenseMatrix::new(2, 2, vec![1.0, 2.0, 0.0, 0.0])?;
//!
//!     // Attach analysis results; the data buffer is left as is
//!     transfer_properties(&matrix, 0.5, 1, &ctx);
//!
//!     assert_eq!(matrix.sparsity(), 0.5);
//!     assert_eq!(matrix.symmetric(), SymmetryFlag::True);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Adding a representation
//!
//! Implement [`HasTransferableProperties`] for the new type. The kernel
//! does not need to change, and calling it on a type without an impl is a
//! compile error.

// Re-export core abstractions
pub use matprops_core::{
    // Kernel
    transfer_properties,
    // Property model
    MatrixProperties, PropertyCell, SymmetryFlag,
    // Core traits
    DataBuffer, HasTransferableProperties, Matrix, MatrixElement, MatrixOperations,
    Representation, ValueType,
    // Context
    ContextConfig, ExecutionContext,
    // Errors
    MatrixError,
};

// Implementation modules
#[cfg(feature = "serde")]
pub mod config;
pub mod csr;
pub mod dense;
pub mod error;
pub mod select;

// Public exports
pub use csr::CsrMatrix;
pub use dense::DenseMatrix;
pub use error::{Error, Result};
pub use select::{preferred_representation, select_representation};
