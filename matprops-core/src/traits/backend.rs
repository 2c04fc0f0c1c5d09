//! Raw access to a representation's data buffer

/// Trait for representations that expose their value buffer as bytes
///
/// Used to observe that metadata updates leave the data untouched.
pub trait DataBuffer {
    /// Get a slice of the underlying value bytes
    fn as_bytes(&self) -> &[u8];

    /// Get the size of the data in bytes
    fn size(&self) -> usize {
        self.as_bytes().len()
    }
}
