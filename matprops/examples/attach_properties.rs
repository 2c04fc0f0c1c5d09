//! Example showing how analysis results are attached to matrices
//!
//! Builds a dense and a CSR matrix, attaches sparsity and symmetry the way
//! a lowered property annotation would, and asks which representation the
//! context prefers afterwards.

use matprops::{
    preferred_representation, transfer_properties, CsrMatrix, DenseMatrix, ExecutionContext,
    Matrix, SymmetryFlag,
};

fn main() -> matprops::Result<()> {
    let ctx = ExecutionContext::default();

    // 3x3 identity, stored densely
    let dense = DenseMatrix::<f64>::from_fn(3, 3, |r, c| if r == c { 1.0 } else { 0.0 })?;
    println!("Dense matrix dimensions: {:?}", dense.dimensions());
    println!("Before: {:?}", dense.properties());

    // Values an upstream analysis inferred: 3 of 9 non-zero, symmetric
    transfer_properties(&dense, 3.0 / 9.0, SymmetryFlag::True.code(), &ctx);
    println!("After:  {:?}", dense.properties());
    println!(
        "Preferred representation: {}",
        preferred_representation(&dense, &ctx)
    );

    // Compressing keeps the logical matrix, and so the properties
    let csr = CsrMatrix::from_dense(&dense)?;
    println!("CSR stored values: {}", csr.values().len());
    println!("CSR properties: {:?}", csr.properties());

    // A sparser estimate flips the preference
    transfer_properties(&csr, 0.1, SymmetryFlag::CODE_UNKNOWN, &ctx);
    println!("CSR properties: {:?}", csr.properties());
    println!(
        "Preferred representation: {}",
        preferred_representation(&csr, &ctx)
    );

    Ok(())
}
