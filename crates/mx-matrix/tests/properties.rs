use approx::assert_relative_eq;
use half::f16;
use mx_matrix::{
    MatmulBackend, Matrix, MatrixError, ParallelBackend, ParallelConfig, SequentialBackend,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_ints(rng: &mut StdRng, rows: usize, cols: usize) -> Matrix<i64> {
    let data = (0..rows * cols).map(|_| rng.gen_range(-50..50)).collect();
    Matrix::from_vec(rows, cols, data).unwrap()
}

fn random_floats(rng: &mut StdRng, rows: usize, cols: usize) -> Matrix<f64> {
    let data = (0..rows * cols).map(|_| rng.gen_range(-1.0..1.0)).collect();
    Matrix::from_vec(rows, cols, data).unwrap()
}

#[test]
fn test_add_then_sub_round_trips() {
    let mut rng = StdRng::seed_from_u64(7);
    for (rows, cols) in [(1, 1), (3, 5), (8, 2)] {
        let a = random_ints(&mut rng, rows, cols);
        let b = random_ints(&mut rng, rows, cols);
        assert_eq!(a.add(&b).unwrap().sub(&b).unwrap(), a);
    }
}

#[test]
fn test_double_transpose_is_identity() {
    let mut rng = StdRng::seed_from_u64(11);
    for (rows, cols) in [(1, 1), (1, 6), (4, 9), (7, 3)] {
        let a = random_floats(&mut rng, rows, cols);
        assert_eq!(a.transpose().transpose(), a);
    }
}

#[test]
fn test_scale_commutes_with_multiply() {
    let mut rng = StdRng::seed_from_u64(3);
    let a = random_ints(&mut rng, 6, 4);
    let b = random_ints(&mut rng, 4, 5);
    let s = -3;

    let ab_s = a.multiply(&b).unwrap().scale(s);
    assert_eq!(a.scale(s).multiply(&b).unwrap(), ab_s);
    assert_eq!(a.multiply(&b.scale(s)).unwrap(), ab_s);
}

#[test]
fn test_parallel_matches_sequential_ints() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(42);
    // 13 rows: 3, 5 and 7 workers leave a remainder for the last band.
    let a = random_ints(&mut rng, 13, 9);
    let b = random_ints(&mut rng, 9, 6);
    let expected = a.multiply_with(&b, &SequentialBackend::new()).unwrap();

    for workers in [1, 2, 3, 4, 5, 7, 13, 20] {
        let got = a
            .multiply_with(&b, &ParallelBackend::with_workers(workers))
            .unwrap();
        assert_eq!(got, expected, "workers = {workers}");
    }
}

#[test]
fn test_parallel_matches_sequential_floats_bitwise() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(1234);
    let a = random_floats(&mut rng, 37, 23);
    let b = random_floats(&mut rng, 23, 19);
    let bits = |m: &Matrix<f64>| -> Vec<u64> {
        m.as_slice().iter().map(|x| x.to_bits()).collect()
    };
    let expected = a.multiply_with(&b, &SequentialBackend::new()).unwrap();

    for workers in [1, 2, 4, 5] {
        let got = a
            .multiply_with(&b, &ParallelBackend::with_workers(workers))
            .unwrap();
        assert_eq!(bits(&got), bits(&expected), "workers = {workers}");
    }
}

#[test]
fn test_concrete_two_by_two() {
    let a = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
    let b = Matrix::from_rows(&[[5, 6], [7, 8]]).unwrap();

    assert_eq!(a.add(&b).unwrap().as_slice(), &[6, 8, 10, 12]);
    assert_eq!(a.sub(&b).unwrap().as_slice(), &[-4, -4, -4, -4]);
    assert_eq!(a.multiply(&b).unwrap().as_slice(), &[19, 22, 43, 50]);
    assert_eq!(a.transpose().as_slice(), &[1, 3, 2, 4]);
}

#[test]
fn test_one_by_one_times_row() {
    let a = Matrix::from_rows(&[[10]]).unwrap();
    let v = Matrix::from_rows(&[[1, 2, 3]]).unwrap();
    let r = a.multiply(&v).unwrap();
    assert_eq!((r.rows(), r.cols()), (1, 3));
    assert_eq!(r.as_slice(), &[10, 20, 30]);
}

#[test]
fn test_inner_dimension_mismatch() {
    let a = Matrix::<i32>::new(2, 2).unwrap();
    let b = Matrix::<i32>::new(3, 2).unwrap();
    assert!(matches!(
        a.multiply(&b),
        Err(MatrixError::DimensionMismatch { .. })
    ));
    assert!(matches!(
        a.multiply_with(&b, &ParallelBackend::with_workers(4)),
        Err(MatrixError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_construction_failures() {
    assert!(matches!(
        Matrix::<f64>::new(0, 3),
        Err(MatrixError::InvalidArgument(_))
    ));
    assert!(matches!(
        Matrix::<f64>::filled(3, 0, 1.0),
        Err(MatrixError::InvalidArgument(_))
    ));
    let ragged: Vec<Vec<i32>> = vec![vec![1, 2], vec![3]];
    assert!(matches!(
        Matrix::try_from(ragged),
        Err(MatrixError::InvalidArgument(_))
    ));
}

#[test]
fn test_large_constant_product() {
    init_logger();
    const N: usize = 200;
    let a = Matrix::filled(N, N, 1.0f64).unwrap();
    let b = Matrix::filled(N, N, 2.0f64).unwrap();
    let c = a.multiply(&b).unwrap();
    assert_eq!((c.rows(), c.cols()), (N, N));
    assert!(c.as_slice().iter().all(|&x| x == 2.0 * N as f64));
}

#[test]
fn test_default_config_backend() {
    let backend = ParallelBackend::with_config(ParallelConfig::default());
    assert_eq!(MatmulBackend::<f32>::name(&backend), "parallel");

    let a = Matrix::filled(64, 64, 0.5f32).unwrap();
    let b = Matrix::filled(64, 64, 0.25f32).unwrap();
    let c = a.multiply_with(&b, &backend).unwrap();
    for &x in c.as_slice() {
        assert_relative_eq!(x, 8.0, epsilon = 1e-6);
    }
}

#[test]
fn test_half_precision_elements() {
    let a = Matrix::from_rows(&[
        [f16::from_f32(1.0), f16::from_f32(2.0)],
        [f16::from_f32(3.0), f16::from_f32(4.0)],
    ])
    .unwrap();
    let b = Matrix::filled(2, 2, f16::from_f32(0.5)).unwrap();
    let c = a.multiply_with(&b, &ParallelBackend::with_workers(2)).unwrap();
    let got: Vec<f32> = c.as_slice().iter().map(|x| x.to_f32()).collect();
    assert_eq!(got, vec![1.5, 1.5, 3.5, 3.5]);
}

#[test]
fn test_display_dump() {
    let m = Matrix::from_rows(&[[1, 3], [2, 4]]).unwrap();
    assert_eq!(format!("{m}"), "       1       3\n       2       4\n");
}
