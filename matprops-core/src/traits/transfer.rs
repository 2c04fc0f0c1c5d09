//! Capability for receiving transferred properties

use crate::props::SymmetryFlag;

/// A representation that accepts sparsity and symmetry in place
///
/// Implementing this trait is how a representation opts into
/// [`transfer_properties`](crate::kernels::transfer_properties). The
/// handler must overwrite both properties unconditionally and must not
/// touch the data buffer, check bounds or check shape: a non-square
/// matrix still accepts `SymmetryFlag::True`.
pub trait HasTransferableProperties {
    /// Overwrite this representation's sparsity and symmetry metadata
    fn transfer(&self, sparsity: f64, symmetric: SymmetryFlag);
}
