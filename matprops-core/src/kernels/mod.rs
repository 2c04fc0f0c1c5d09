//! Kernels operating on any representation that opts in via a capability trait

pub mod transfer_properties;

pub use transfer_properties::transfer_properties;
