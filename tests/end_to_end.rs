//! Full generation runs into a scratch directory

use std::fs;

use matgen::cli::CliArgs;
use matgen::{generate, MatrixFactory, MatrixSpec, MatrixWriter, OutputFormat};

use clap::Parser;

#[test]
fn test_laplace1d_size_5() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("test_matrices");

    let args = CliArgs::try_parse_from([
        "matgen",
        "--type",
        "laplace1d",
        "--size",
        "5",
        "--output",
        out.to_str().unwrap(),
    ])
    .unwrap();

    let generated = generate(
        &mut args.factory(),
        &args.matrix_spec(),
        &args.writer(),
        &args.output,
    )
    .unwrap();

    assert_eq!(generated.path, out.join("laplace1d_5.mtx"));
    assert_eq!(generated.notice, None);
    assert_eq!(generated.matrix.shape(), (5, 5));
    assert_eq!(generated.matrix.nnz(), 13);

    let text = fs::read_to_string(&generated.path).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("%%MatrixMarket matrix coordinate real general")
    );
    assert_eq!(lines.next(), Some("5 5 13"));
    assert_eq!(lines.count(), 13);

    assert_eq!(generated.info.nnz, 13);
    assert!((generated.info.density - 0.52).abs() < 1e-12);
    assert!(matches!(generated.info.condition_number, Some(Ok(c)) if c > 1.0));
}

#[test]
fn test_laplace2d_2x2() {
    let dir = tempfile::tempdir().unwrap();
    let spec = MatrixSpec::Laplace2d { nx: 2, ny: 2 };

    let generated = generate(
        &mut MatrixFactory::new(0),
        &spec,
        &MatrixWriter::default(),
        dir.path(),
    )
    .unwrap();

    assert_eq!(generated.path, dir.path().join("laplace2d_2x2.mtx"));
    let m = &generated.matrix;
    assert_eq!(m.shape(), (4, 4));
    for i in 0..4 {
        assert_eq!(m.get(i, i), Some(4.0));
    }
    for &(i, j) in &[(0, 1), (0, 2), (1, 3), (2, 3)] {
        assert_eq!(m.get(i, j), Some(-1.0));
        assert_eq!(m.get(j, i), Some(-1.0));
    }
    assert_eq!(m.get(0, 3), None);
    assert_eq!(m.get(1, 2), None);
}

#[test]
fn test_random_file_name_and_reproducibility() {
    let dir = tempfile::tempdir().unwrap();
    let spec = MatrixSpec::RandomSparse { n: 60, density: 0.05 };

    let first = generate(
        &mut MatrixFactory::new(5),
        &spec,
        &MatrixWriter::default(),
        dir.path(),
    )
    .unwrap();
    let bytes = fs::read(&first.path).unwrap();

    let second = generate(
        &mut MatrixFactory::new(5),
        &spec,
        &MatrixWriter::default(),
        dir.path(),
    )
    .unwrap();

    assert_eq!(first.path, dir.path().join("random_60_density0.05.mtx"));
    assert_eq!(first.matrix, second.matrix);
    assert_eq!(bytes, fs::read(&second.path).unwrap());
}

#[test]
fn test_petsc_request_writes_matrix_market() {
    let dir = tempfile::tempdir().unwrap();
    let spec = MatrixSpec::DiagonalDominant { n: 10, dominance: 10.0 };

    let generated = generate(
        &mut MatrixFactory::new(1),
        &spec,
        &MatrixWriter::new(OutputFormat::PetscBinary),
        dir.path(),
    )
    .unwrap();

    assert_eq!(generated.path, dir.path().join("diagonal_10.mtx"));
    let notice = generated.notice.as_deref().unwrap();
    assert!(notice.ends_with("diagonal_10.mtx"));
    let text = fs::read_to_string(&generated.path).unwrap();
    assert!(text.starts_with("%%MatrixMarket matrix coordinate real general\n10 10 "));
}

#[test]
fn test_invalid_spec_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("never_created");
    let spec = MatrixSpec::RandomSparse { n: 10, density: 0.0 };

    let res = generate(
        &mut MatrixFactory::new(1),
        &spec,
        &MatrixWriter::default(),
        &out,
    );

    assert!(matches!(res, Err(matgen::MatgenError::InvalidParameter(_))));
    assert!(!out.exists());
}

#[test]
fn test_output_directory_is_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, b"not a directory").unwrap();

    let res = generate(
        &mut MatrixFactory::new(1),
        &MatrixSpec::Laplace1d { n: 3 },
        &MatrixWriter::default(),
        &blocker,
    );

    assert!(matches!(res, Err(matgen::MatgenError::Io(_))));
}
