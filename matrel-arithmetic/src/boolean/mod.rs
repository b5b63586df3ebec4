//! Boolean matrices over the `{0, 1}` semiring (OR for addition, AND for multiplication), used
//! as adjacency matrices of binary relations on `{0, .., n-1}`.
#![allow(non_snake_case)]

use ark_std::rand;
use log::trace;

use crate::error::LinalgError;
use crate::linear_algebra::Matrix;

mod closure;

pub use closure::{reachability_matrix, reflexive_closure, symmetric_closure, transitive_closure};

pub type BooleanMatrix = Matrix<bool>;

impl BooleanMatrix {
    /// Builds a relation matrix from rows of 0/1 entries; any non-zero entry counts as 1.
    pub fn from_bits(rows: &[Vec<u8>]) -> Self {
        Self::from_rows(
            &rows
                .iter()
                .map(|row| row.iter().map(|&b| b != 0).collect())
                .collect::<Vec<Vec<bool>>>(),
        )
    }

    /// The identity relation `{(i, i)}`.
    pub fn identity_relation(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| i == j)
    }

    /// Random relation in which every pair is present independently with probability `density`.
    pub fn rand_with_density<Rng: rand::Rng + ?Sized>(n: usize, density: f64, rng: &mut Rng) -> Self {
        Self::from_fn(n, n, |_, _| rng.gen_bool(density))
    }

    pub fn to_bits(&self) -> Vec<Vec<u8>> {
        self.to_rows()
            .into_iter()
            .map(|row| row.into_iter().map(u8::from).collect())
            .collect()
    }
}

/// `C[i][j] = OR_k (A[i][k] AND B[k][j])`.
pub fn boolean_product(A: &BooleanMatrix, B: &BooleanMatrix) -> BooleanMatrix {
    debug_assert_eq!(A.ncols(), B.nrows());
    BooleanMatrix::from_fn(A.nrows(), B.ncols(), |i, j| {
        (0..A.ncols()).any(|k| A[(i, k)] && B[(k, j)])
    })
}

/// Returns `M^path_length`, i.e. the relation "connected by a path of exactly `path_length`
/// edges".
pub fn path_matrix(M: &BooleanMatrix, path_length: usize) -> Result<BooleanMatrix, LinalgError> {
    if path_length == 0 {
        return Err(("path_length", "must be at least 1").into());
    }
    trace!("computing boolean power M^{path_length} of a {}x{} matrix", M.nrows(), M.ncols());
    Ok((1..path_length).fold(M.clone(), |acc, _| boolean_product(&acc, M)))
}

pub fn is_reflexive(M: &BooleanMatrix) -> bool {
    (0..M.nrows()).all(|i| M[(i, i)])
}

pub fn is_symmetric(M: &BooleanMatrix) -> bool {
    let n = M.nrows();
    (0..n).all(|i| (i + 1..n).all(|j| M[(i, j)] == M[(j, i)]))
}

pub fn is_transitive(M: &BooleanMatrix) -> bool {
    let n = M.nrows();
    for i in 0..n {
        for j in 0..n {
            if !M[(i, j)] {
                continue;
            }
            for k in 0..n {
                if M[(j, k)] && !M[(i, k)] {
                    return false;
                }
            }
        }
    }
    true
}

#[allow(non_snake_case)]
#[cfg(test)]
mod tests {
    use ark_std::test_rng;

    use super::*;

    #[test]
    fn test_boolean_product() {
        let A = BooleanMatrix::from_bits(&[vec![0, 1, 0], vec![0, 0, 1], vec![0, 0, 0]]);
        let A2 = boolean_product(&A, &A);
        assert_eq!(A2.to_bits(), vec![vec![0, 0, 1], vec![0, 0, 0], vec![0, 0, 0]]);
        assert_eq!(boolean_product(&A2, &A).to_bits(), vec![vec![0; 3]; 3]);
    }

    #[test]
    fn test_boolean_product_with_identity() {
        let rng = &mut test_rng();
        let I = BooleanMatrix::identity_relation(5);
        for _ in 0..10 {
            let M = BooleanMatrix::rand_with_density(5, 0.4, rng);
            assert_eq!(boolean_product(&M, &I), M);
            assert_eq!(boolean_product(&I, &M), M);
        }
    }

    #[test]
    fn test_path_matrix() {
        // 1 -> 2 -> 3 -> 1
        let M = BooleanMatrix::from_bits(&[vec![0, 1, 0], vec![0, 0, 1], vec![1, 0, 0]]);
        assert_eq!(path_matrix(&M, 1).unwrap(), M);
        assert_eq!(
            path_matrix(&M, 2).unwrap().to_bits(),
            vec![vec![0, 0, 1], vec![1, 0, 0], vec![0, 1, 0]]
        );
        assert_eq!(path_matrix(&M, 3).unwrap(), BooleanMatrix::identity_relation(3));
        assert_eq!(path_matrix(&M, 4).unwrap(), M);
    }

    #[test]
    fn test_path_matrix_rejects_zero_length() {
        let M = BooleanMatrix::identity_relation(2);
        assert!(matches!(
            path_matrix(&M, 0),
            Err(LinalgError::InvalidArgument { name: "path_length", .. })
        ));
    }

    #[test]
    fn test_predicates() {
        let M = BooleanMatrix::from_bits(&[vec![1, 1, 0], vec![1, 1, 0], vec![0, 0, 1]]);
        assert!(is_reflexive(&M));
        assert!(is_symmetric(&M));
        assert!(is_transitive(&M));

        let M = BooleanMatrix::from_bits(&[vec![1, 0], vec![1, 1]]);
        assert!(is_reflexive(&M));
        assert!(!is_symmetric(&M));
        assert!(is_transitive(&M));

        // 1 -> 2 -> 3 without 1 -> 3
        let M = BooleanMatrix::from_bits(&[vec![0, 1, 0], vec![0, 0, 1], vec![0, 0, 0]]);
        assert!(!is_reflexive(&M));
        assert!(!is_symmetric(&M));
        assert!(!is_transitive(&M));
    }

    #[test]
    fn test_empty_relation() {
        let M = BooleanMatrix::from_element(4, 4, false);
        assert!(!is_reflexive(&M));
        assert!(is_symmetric(&M));
        assert!(is_transitive(&M));
    }

    #[test]
    fn test_transitive_iff_square_is_contained() {
        let rng = &mut test_rng();
        for _ in 0..50 {
            let M = BooleanMatrix::rand_with_density(4, 0.3, rng);
            let M2 = boolean_product(&M, &M);
            let contained = M2.iter().zip(M.iter()).all(|(&a, &b)| !a || b);
            assert_eq!(is_transitive(&M), contained);
        }
    }
}
