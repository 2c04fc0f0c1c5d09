//! Property-based checks of the transfer kernel across representations

use matprops::{
    transfer_properties, CsrMatrix, DataBuffer, DenseMatrix, ExecutionContext, Matrix,
    MatrixProperties, SymmetryFlag,
};
use proptest::prelude::*;

fn symmetry_code() -> impl Strategy<Value = i64> {
    prop_oneof![Just(0_i64), Just(1_i64), Just(2_i64), any::<i64>()]
}

fn expected_flag(code: i64) -> SymmetryFlag {
    match code {
        0 => SymmetryFlag::False,
        1 => SymmetryFlag::True,
        _ => SymmetryFlag::Unknown,
    }
}

fn dense_values() -> impl Strategy<Value = (usize, usize, Vec<f64>)> {
    (1_usize..6, 1_usize..6).prop_flat_map(|(rows, cols)| {
        (
            Just(rows),
            Just(cols),
            prop::collection::vec(prop_oneof![Just(0.0), -100.0..100.0_f64], rows * cols),
        )
    })
}

proptest! {
    #[test]
    fn test_dense_read_back(
        (rows, cols, values) in dense_values(),
        sparsity in 0.0..=1.0_f64,
        code in symmetry_code(),
    ) {
        let ctx = ExecutionContext::default();
        let m = DenseMatrix::new(rows, cols, values).unwrap();
        let before = m.as_bytes().to_vec();

        transfer_properties(&m, sparsity, code, &ctx);

        prop_assert_eq!(m.sparsity(), sparsity);
        prop_assert_eq!(m.symmetric(), expected_flag(code));
        prop_assert_eq!(m.as_bytes(), before.as_slice());
    }

    #[test]
    fn test_csr_read_back(
        (rows, cols, values) in dense_values(),
        sparsity in 0.0..=1.0_f64,
        code in symmetry_code(),
    ) {
        let ctx = ExecutionContext::default();
        let dense = DenseMatrix::new(rows, cols, values).unwrap();
        let m = CsrMatrix::from_dense(&dense).unwrap();
        let before = m.as_bytes().to_vec();
        let offsets = m.row_offsets().to_vec();

        transfer_properties(&m, sparsity, code, &ctx);

        prop_assert_eq!(m.properties(), MatrixProperties::new(sparsity, expected_flag(code)));
        prop_assert_eq!(m.as_bytes(), before.as_slice());
        prop_assert_eq!(m.row_offsets(), offsets.as_slice());
        prop_assert_eq!(dense.properties(), MatrixProperties::UNKNOWN);
    }

    #[test]
    fn test_last_write_wins(
        first in (0.0..=1.0_f64, symmetry_code()),
        second in (0.0..=1.0_f64, symmetry_code()),
    ) {
        let ctx = ExecutionContext::default();
        let m = CsrMatrix::<f64>::from_triplets(2, 2, &[(0, 0, 1.0)]).unwrap();

        transfer_properties(&m, first.0, first.1, &ctx);
        transfer_properties(&m, second.0, second.1, &ctx);

        prop_assert_eq!(m.properties(), MatrixProperties::new(second.0, expected_flag(second.1)));
    }
}
