//! Attach sparsity and symmetry to a matrix in place
//!
//! The kernel is generic over [`HasTransferableProperties`]; the handler is
//! picked by monomorphization, so there is no type tag to inspect at runtime
//! and no "unsupported representation" outcome. A representation without an
//! impl is rejected by the compiler:
//!
//! ```compile_fail,E0277
//! use matprops_core::{transfer_properties, ExecutionContext};
//!
//! // Has no HasTransferableProperties impl
//! struct CooMatrix {
//!     values: [f64; 4],
//! }
//!
//! let m = CooMatrix { values: [1.0, 2.0, 0.0, 0.0] };
//! transfer_properties(&m, 0.5, 1, &ExecutionContext::default());
//! ```

use log::{debug, trace};

use crate::context::ExecutionContext;
use crate::props::SymmetryFlag;
use crate::traits::HasTransferableProperties;

/// Overwrite the sparsity and symmetry metadata of `arg`
///
/// `symmetric` is the boundary code (`0` false, `1` true, anything else
/// unknown) and is decoded once here. `sparsity` is expected in [0, 1] and
/// is stored as given; checking it against the data is the caller's job.
/// `ctx` is passed through unused.
///
/// The call needs only a shared reference, but the caller must ensure no
/// one else reads or writes `arg`'s properties meanwhile. The property
/// cells make representations `!Sync`, which rules out concurrent readers
/// on other threads.
///
/// ```
/// use matprops_core::{
///     transfer_properties, ExecutionContext, HasTransferableProperties, PropertyCell,
///     SymmetryFlag,
/// };
///
/// struct Tagged {
///     props: PropertyCell,
/// }
///
/// impl HasTransferableProperties for Tagged {
///     fn transfer(&self, sparsity: f64, symmetric: SymmetryFlag) {
///         self.props.overwrite(sparsity, symmetric);
///     }
/// }
///
/// let m = Tagged { props: PropertyCell::new() };
/// transfer_properties(&m, 0.5, 1, &ExecutionContext::default());
/// assert_eq!(m.props.sparsity(), 0.5);
/// assert_eq!(m.props.symmetric(), SymmetryFlag::True);
/// ```
#[inline]
pub fn transfer_properties<DT>(arg: &DT, sparsity: f64, symmetric: i64, _ctx: &ExecutionContext)
where
    DT: HasTransferableProperties + ?Sized,
{
    let symmetric = SymmetryFlag::from_code(symmetric);

    if cfg!(debug_assertions) && !(0.0..=1.0).contains(&sparsity) {
        debug!("sparsity {sparsity} outside [0, 1] attached unchecked");
    }
    trace!(
        "transfer_properties: sparsity={sparsity} symmetric={symmetric} on {}",
        core::any::type_name::<DT>()
    );

    arg.transfer(sparsity, symmetric);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::{MatrixProperties, PropertyCell};
    use core::cell::Cell;

    /// Minimal representation that counts handler invocations
    struct Fixture {
        props: PropertyCell,
        calls: Cell<usize>,
        data: [u8; 4],
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                props: PropertyCell::new(),
                calls: Cell::new(0),
                data: [1, 2, 0, 0],
            }
        }
    }

    impl HasTransferableProperties for Fixture {
        fn transfer(&self, sparsity: f64, symmetric: SymmetryFlag) {
            self.calls.set(self.calls.get() + 1);
            self.props.overwrite(sparsity, symmetric);
        }
    }

    /// A second representation, to check the handler is chosen by type
    struct Other {
        props: PropertyCell,
    }

    impl HasTransferableProperties for Other {
        fn transfer(&self, sparsity: f64, symmetric: SymmetryFlag) {
            self.props.overwrite(sparsity, symmetric);
        }
    }

    #[test]
    fn test_single_handler_call() {
        let ctx = ExecutionContext::default();
        let m = Fixture::new();

        transfer_properties(&m, 0.5, 1, &ctx);

        assert_eq!(m.calls.get(), 1);
        assert_eq!(m.props.snapshot(), MatrixProperties::new(0.5, SymmetryFlag::True));
        assert_eq!(m.data, [1, 2, 0, 0]);
    }

    #[test]
    fn test_symmetry_codes() {
        let ctx = ExecutionContext::default();
        let m = Fixture::new();

        transfer_properties(&m, 0.1, 0, &ctx);
        assert_eq!(m.props.symmetric(), SymmetryFlag::False);
        transfer_properties(&m, 0.1, 1, &ctx);
        assert_eq!(m.props.symmetric(), SymmetryFlag::True);
        transfer_properties(&m, 0.1, 2, &ctx);
        assert_eq!(m.props.symmetric(), SymmetryFlag::Unknown);
        transfer_properties(&m, 0.1, -1, &ctx);
        assert_eq!(m.props.symmetric(), SymmetryFlag::Unknown);
    }

    #[test]
    fn test_out_of_range_sparsity_is_stored() {
        let ctx = ExecutionContext::default();
        let m = Fixture::new();

        transfer_properties(&m, 1.5, 0, &ctx);
        assert_eq!(m.props.sparsity(), 1.5);
    }

    #[test]
    fn test_dispatch_by_type() {
        let ctx = ExecutionContext::default();
        let a = Fixture::new();
        let b = Other {
            props: PropertyCell::new(),
        };

        transfer_properties(&b, 0.9, 0, &ctx);

        assert_eq!(a.calls.get(), 0);
        assert_eq!(a.props.snapshot(), MatrixProperties::UNKNOWN);
        assert_eq!(b.props.snapshot(), MatrixProperties::new(0.9, SymmetryFlag::False));
    }

    #[test]
    fn test_unsized_handle() {
        let ctx = ExecutionContext::default();
        let m = Fixture::new();
        let dynamic: &dyn HasTransferableProperties = &m;

        transfer_properties(dynamic, 0.2, 0, &ctx);
        assert_eq!(m.props.snapshot(), MatrixProperties::new(0.2, SymmetryFlag::False));
    }
}
