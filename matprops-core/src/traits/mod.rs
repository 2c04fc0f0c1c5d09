//! Abstract interfaces shared by all matrix representations
//!
//! Traits are pure interfaces - concrete storage lives in `matprops`.

pub mod backend;
pub mod element;
pub mod matrix;
pub mod transfer;

pub use backend::DataBuffer;
pub use element::{MatrixElement, ValueType};
#[cfg(feature = "alloc")]
pub use matrix::MatrixOperations;
pub use matrix::{Matrix, Representation};
pub use transfer::HasTransferableProperties;
