#![allow(non_snake_case)]

use log::debug;

use crate::error::LinalgError;
use crate::real::{RealMatrix, TOLERANCE};

fn sign(k: usize) -> f64 {
    if k % 2 == 0 {
        1.
    } else {
        -1.
    }
}

/// Determinant by Laplace expansion along the first row.
///
/// Runs in `O(n!)`, which is fine for the hand-entered matrices this is meant for and nothing
/// else. The determinant of the empty matrix is 1.
pub fn determinant(M: &RealMatrix) -> f64 {
    debug_assert!(M.is_square(), "determinant of a non-square matrix");
    match M.nrows() {
        0 => 1.,
        1 => M[(0, 0)],
        2 => M[(0, 0)] * M[(1, 1)] - M[(0, 1)] * M[(1, 0)],
        n => (0..n)
            .map(|c| sign(c) * M[(0, c)] * determinant(&M.minor(0, c)))
            .sum(),
    }
}

/// `C[r][c] = (-1)^(r+c) det(minor(M, r, c))`.
pub fn cofactor_matrix(M: &RealMatrix) -> RealMatrix {
    let n = M.nrows();
    RealMatrix::from_fn(n, n, |r, c| sign(r + c) * determinant(&M.minor(r, c)))
}

/// `M^-1 = adj(M) / det(M)`, where the adjugate is the transposed cofactor matrix.
pub fn inverse_by_adjugate(M: &RealMatrix) -> Result<RealMatrix, LinalgError> {
    let det = determinant(M);
    if det.abs() < TOLERANCE {
        debug!("inverse_by_adjugate: determinant {det} is below tolerance");
        return Err(LinalgError::Singular {
            magnitude: det.abs(),
        });
    }
    Ok(cofactor_matrix(M).transpose().map(|x| x / det))
}

#[allow(non_snake_case)]
#[cfg(test)]
mod tests {
    use pretty_env_logger::env_logger;

    use super::*;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_determinant_small() {
        assert_eq!(determinant(&RealMatrix::from_rows(&[vec![-3.5]])), -3.5);
        assert_eq!(
            determinant(&RealMatrix::from_rows(&[vec![4., 7.], vec![2., 6.]])),
            10.
        );
        assert_eq!(determinant(&RealMatrix::zeros(0, 0)), 1.);
    }

    #[test]
    fn test_determinant_3x3() {
        let M = RealMatrix::from_rows(&[vec![2., -3., 1.], vec![2., 0., -1.], vec![1., 4., 5.]]);
        assert_eq!(determinant(&M), 49.);
    }

    #[test]
    fn test_determinant_triangular_is_diagonal_product() {
        let M = RealMatrix::from_fn(5, 5, |i, j| if j >= i { (i + j + 1) as f64 } else { 0. });
        let expected: f64 = (0..5).map(|i| (2 * i + 1) as f64).product();
        assert_eq!(determinant(&M), expected);
        assert_eq!(determinant(&M.transpose()), expected);
    }

    #[test]
    fn test_determinant_row_swap_flips_sign() {
        let M = RealMatrix::from_rows(&[
            vec![1., 2., 0., 1.],
            vec![3., -1., 2., 0.],
            vec![0., 1., 1., 4.],
            vec![2., 0., -2., 1.],
        ]);
        let mut N = M.clone();
        N.swap_rows(1, 3);
        assert!((determinant(&M) + determinant(&N)).abs() < TOLERANCE);
    }

    #[test]
    fn test_cofactor_matrix() {
        let M = RealMatrix::from_rows(&[vec![4., 7.], vec![2., 6.]]);
        assert_eq!(cofactor_matrix(&M).to_rows(), vec![vec![6., -2.], vec![-7., 4.]]);
    }

    #[test]
    fn test_inverse_by_adjugate_1x1() {
        let M = RealMatrix::from_rows(&[vec![4.]]);
        assert_eq!(inverse_by_adjugate(&M).unwrap().to_rows(), vec![vec![0.25]]);
    }

    #[test]
    fn test_inverse_by_adjugate_singular() {
        init_logger();
        let M = RealMatrix::from_rows(&[vec![1., 2.], vec![2., 4.]]);
        assert!(inverse_by_adjugate(&M).unwrap_err().is_singular());
    }
}
