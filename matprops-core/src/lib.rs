#![no_std]

//! matprops-core - Matrix property model and transfer dispatch
//!
//! This crate provides the property value model (sparsity ratio and
//! tri-state symmetry), the capability traits matrix representations
//! implement, and the statically dispatched `transfer_properties` kernel.
//! It contains no concrete matrix storage.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod context;
pub mod error;
pub mod kernels;
pub mod props;
pub mod traits;

pub use context::{ContextConfig, ExecutionContext};
pub use error::*;
pub use kernels::transfer_properties;
pub use props::{MatrixProperties, PropertyCell, SymmetryFlag};
pub use traits::*;
