//! End-to-end property transfer on every shipped representation

use matprops::{
    transfer_properties, CsrMatrix, DataBuffer, DenseMatrix, ExecutionContext, Matrix,
    MatrixProperties, SymmetryFlag,
};

#[test]
fn test_dense_attach_leaves_buffer_untouched() {
    let ctx = ExecutionContext::default();
    let m = DenseMatrix::new(2, 2, vec![1.0_f64, 2.0, 0.0, 0.0]).unwrap();
    assert_eq!(m.properties(), MatrixProperties::UNKNOWN);
    let before = m.as_bytes().to_vec();

    transfer_properties(&m, 0.5, 1, &ctx);

    assert_eq!(m.sparsity(), 0.5);
    assert_eq!(m.symmetric(), SymmetryFlag::True);
    assert_eq!(m.as_bytes(), before.as_slice());
    assert_eq!(m.values(), &[1.0, 2.0, 0.0, 0.0]);
}

#[test]
fn test_csr_unknown_symmetry_code() {
    let ctx = ExecutionContext::default();
    let m = CsrMatrix::from_triplets(3, 3, &[(0, 0, 4.0_f32), (2, 1, 1.0)]).unwrap();

    transfer_properties(&m, 0.0, 2, &ctx);

    assert_eq!(m.sparsity(), 0.0);
    assert_eq!(m.symmetric(), SymmetryFlag::Unknown);
}

#[test]
fn test_later_call_replaces_earlier() {
    let ctx = ExecutionContext::default();
    let dense = DenseMatrix::<i32>::zeros(3, 3).unwrap();
    let csr = CsrMatrix::<i32>::from_triplets(3, 3, &[(1, 1, 7)]).unwrap();

    transfer_properties(&dense, 0.3, 0, &ctx);
    transfer_properties(&dense, 0.9, 1, &ctx);
    transfer_properties(&csr, 0.3, 0, &ctx);
    transfer_properties(&csr, 0.9, 1, &ctx);

    let expected = MatrixProperties::new(0.9, SymmetryFlag::True);
    assert_eq!(dense.properties(), expected);
    assert_eq!(csr.properties(), expected);
}

#[test]
fn test_later_unknown_clears_definite_flag() {
    let ctx = ExecutionContext::default();
    let m = DenseMatrix::<f64>::zeros(2, 2).unwrap();

    transfer_properties(&m, 0.4, 1, &ctx);
    transfer_properties(&m, 0.6, 7, &ctx);

    assert_eq!(m.properties(), MatrixProperties::new(0.6, SymmetryFlag::Unknown));
}

#[test]
fn test_repeated_call_is_idempotent() {
    let ctx = ExecutionContext::default();
    let once = CsrMatrix::from_triplets(2, 2, &[(0, 1, 3_u64)]).unwrap();
    let twice = once.clone();

    transfer_properties(&once, 0.25, 0, &ctx);
    transfer_properties(&twice, 0.25, 0, &ctx);
    transfer_properties(&twice, 0.25, 0, &ctx);

    assert_eq!(once.properties(), twice.properties());
    assert_eq!(once.as_bytes(), twice.as_bytes());
}

#[test]
fn test_other_handles_are_isolated() {
    let ctx = ExecutionContext::default();
    let target = DenseMatrix::new(2, 2, vec![1.0_f64, 0.0, 0.0, 1.0]).unwrap();
    let sibling = target.clone();
    let view = target.slice_rows(0..1).unwrap();
    let csr = CsrMatrix::from_dense(&target).unwrap();
    transfer_properties(&sibling, 0.7, 0, &ctx);

    let sibling_bytes = sibling.as_bytes().to_vec();
    let csr_bytes = csr.as_bytes().to_vec();

    transfer_properties(&target, 0.5, 1, &ctx);

    assert_eq!(target.properties(), MatrixProperties::new(0.5, SymmetryFlag::True));
    assert_eq!(sibling.properties(), MatrixProperties::new(0.7, SymmetryFlag::False));
    assert_eq!(view.properties(), MatrixProperties::UNKNOWN);
    assert_eq!(csr.properties(), MatrixProperties::UNKNOWN);
    assert_eq!(sibling.as_bytes(), sibling_bytes.as_slice());
    assert_eq!(csr.as_bytes(), csr_bytes.as_slice());
}

#[test]
fn test_outstanding_borrows_survive_transfer() {
    let ctx = ExecutionContext::default();
    let m = CsrMatrix::from_triplets(2, 3, &[(0, 2, 5_i64), (1, 0, 6)]).unwrap();

    let values = m.values();
    let cols = m.col_idxs();
    transfer_properties(&m, 0.33, 1, &ctx);

    assert_eq!(values, &[5, 6]);
    assert_eq!(cols, &[2, 0]);
    assert_eq!(m.symmetric(), SymmetryFlag::True);
}

#[test]
fn test_context_is_not_consulted() {
    let m = DenseMatrix::<u32>::zeros(1, 1).unwrap();
    let strict = ExecutionContext::new(
        matprops::ContextConfig::default()
            .with_sparsity_threshold(0.0)
            .with_representation_selection(false),
    );
    let before = strict.clone();

    transfer_properties(&m, 1.0, 0, &strict);

    assert_eq!(strict, before);
    assert_eq!(m.properties(), MatrixProperties::new(1.0, SymmetryFlag::False));
}

#[test]
fn test_clone_per_reader_after_transfer() {
    let ctx = ExecutionContext::default();
    let m = CsrMatrix::from_triplets(3, 3, &[(0, 0, 1.0_f64), (1, 1, 1.0), (2, 2, 1.0)]).unwrap();
    transfer_properties(&m, 1.0 / 3.0, 1, &ctx);

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let local = m.clone();
            std::thread::spawn(move || (local.properties(), local.as_bytes().to_vec()))
        })
        .collect();

    for reader in readers {
        let (props, bytes) = reader.join().unwrap();
        assert_eq!(props, MatrixProperties::new(1.0 / 3.0, SymmetryFlag::True));
        assert_eq!(bytes.as_slice(), m.as_bytes());
    }
}
