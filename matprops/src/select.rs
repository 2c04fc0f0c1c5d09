//! Representation selection driven by attached properties

use log::trace;
use matprops_core::{ExecutionContext, Matrix, MatrixProperties, Representation};

/// Choose a physical representation for a matrix with the given properties
///
/// CSR is chosen only when selection is enabled and the sparsity is known
/// and strictly below the configured threshold. Symmetry does not affect
/// the choice. Sparsity is not range-checked, so any value other than the
/// unknown sentinel that is below the threshold, negative ones included,
/// selects CSR.
pub fn select_representation(props: &MatrixProperties, ctx: &ExecutionContext) -> Representation {
    let config = ctx.config();
    let choice = if config.select_representation
        && props.is_sparsity_known()
        && props.sparsity < config.sparsity_threshold
    {
        Representation::Csr
    } else {
        Representation::Dense
    };
    trace!(
        "sparsity {} against threshold {}: {choice}",
        props.sparsity,
        config.sparsity_threshold
    );
    choice
}

/// Choose a representation for an existing matrix from its current properties
pub fn preferred_representation<M: Matrix + ?Sized>(
    matrix: &M,
    ctx: &ExecutionContext,
) -> Representation {
    select_representation(&matrix.properties(), ctx)
}
