#![allow(non_snake_case)]

use crate::boolean::BooleanMatrix;

/// Copy of `M` with the diagonal forced to 1.
pub fn reflexive_closure(M: &BooleanMatrix) -> BooleanMatrix {
    let mut closure = M.clone();
    for i in 0..closure.nrows() {
        closure[(i, i)] = true;
    }
    closure
}

/// Copy of `M` in which `(i, j)` and `(j, i)` are both set whenever either one is.
pub fn symmetric_closure(M: &BooleanMatrix) -> BooleanMatrix {
    let n = M.nrows();
    let mut closure = M.clone();
    for i in 0..n {
        for j in i + 1..n {
            if closure[(i, j)] || closure[(j, i)] {
                closure[(i, j)] = true;
                closure[(j, i)] = true;
            }
        }
    }
    closure
}

/// Warshall's algorithm: after round `k`, `(i, j)` is set iff `j` is reachable from `i` through
/// intermediate nodes in `{0, .., k}`.
pub fn transitive_closure(M: &BooleanMatrix) -> BooleanMatrix {
    let n = M.nrows();
    let mut closure = M.clone();
    for k in 0..n {
        for i in 0..n {
            if !closure[(i, k)] {
                continue;
            }
            for j in 0..n {
                if closure[(k, j)] {
                    closure[(i, j)] = true;
                }
            }
        }
    }
    closure
}

/// Reachability in zero or more steps, given the (one or more steps) transitive closure.
pub fn reachability_matrix(transitive_closure: &BooleanMatrix) -> BooleanMatrix {
    reflexive_closure(transitive_closure)
}

#[allow(non_snake_case)]
#[cfg(test)]
mod tests {
    use ark_std::test_rng;

    use crate::boolean::{boolean_product, is_reflexive, is_symmetric, is_transitive, path_matrix};

    use super::*;

    #[test]
    fn test_reflexive_closure() {
        let M = BooleanMatrix::from_bits(&[vec![0, 1], vec![0, 0]]);
        assert_eq!(reflexive_closure(&M).to_bits(), vec![vec![1, 1], vec![0, 1]]);
        // input untouched
        assert_eq!(M.to_bits(), vec![vec![0, 1], vec![0, 0]]);
    }

    #[test]
    fn test_symmetric_closure() {
        let M = BooleanMatrix::from_bits(&[vec![1, 0], vec![1, 1]]);
        assert_eq!(symmetric_closure(&M).to_bits(), vec![vec![1, 1], vec![1, 1]]);
    }

    #[test]
    fn test_transitive_closure_chain() {
        let M = BooleanMatrix::from_bits(&[
            vec![0, 1, 0, 0],
            vec![0, 0, 1, 0],
            vec![0, 0, 0, 1],
            vec![0, 0, 0, 0],
        ]);
        assert_eq!(
            transitive_closure(&M).to_bits(),
            vec![
                vec![0, 1, 1, 1],
                vec![0, 0, 1, 1],
                vec![0, 0, 0, 1],
                vec![0, 0, 0, 0],
            ]
        );
        assert_eq!(
            reachability_matrix(&transitive_closure(&M)).to_bits(),
            vec![
                vec![1, 1, 1, 1],
                vec![0, 1, 1, 1],
                vec![0, 0, 1, 1],
                vec![0, 0, 0, 1],
            ]
        );
    }

    #[test]
    fn test_transitive_closure_cycle_reaches_itself() {
        let M = BooleanMatrix::from_bits(&[vec![0, 1], vec![1, 0]]);
        assert_eq!(transitive_closure(&M).to_bits(), vec![vec![1, 1], vec![1, 1]]);
    }

    #[test]
    fn test_transitive_closure_is_union_of_powers() {
        let rng = &mut test_rng();
        for _ in 0..20 {
            let M = BooleanMatrix::rand_with_density(5, 0.25, rng);
            let union = (1..=5)
                .map(|k| path_matrix(&M, k).unwrap())
                .reduce(|acc, P| BooleanMatrix::from_fn(5, 5, |i, j| acc[(i, j)] || P[(i, j)]))
                .unwrap();
            assert_eq!(transitive_closure(&M), union);
        }
    }

    #[test]
    fn test_closures_establish_property() {
        let rng = &mut test_rng();
        for _ in 0..50 {
            let M = BooleanMatrix::rand_with_density(5, 0.3, rng);
            assert!(is_reflexive(&reflexive_closure(&M)));
            assert!(is_symmetric(&symmetric_closure(&M)));
            assert!(is_transitive(&transitive_closure(&M)));
            let R = reachability_matrix(&transitive_closure(&M));
            assert!((0..5).all(|i| R[(i, i)]));
        }
    }

    #[test]
    fn test_closures_are_idempotent() {
        let rng = &mut test_rng();
        for _ in 0..50 {
            let M = BooleanMatrix::rand_with_density(5, 0.3, rng);
            let r = reflexive_closure(&M);
            assert_eq!(reflexive_closure(&r), r);
            let s = symmetric_closure(&M);
            assert_eq!(symmetric_closure(&s), s);
            let t = transitive_closure(&M);
            assert_eq!(transitive_closure(&t), t);
        }
    }

    #[test]
    fn test_closures_only_add_pairs() {
        let rng = &mut test_rng();
        for _ in 0..20 {
            let M = BooleanMatrix::rand_with_density(5, 0.3, rng);
            let closures = [reflexive_closure(&M), symmetric_closure(&M), transitive_closure(&M)];
            for C in &closures {
                assert!(M.iter().zip(C.iter()).all(|(&m, &c)| !m || c));
            }
            // M^2 is contained in the transitive closure
            let M2 = boolean_product(&M, &M);
            let T = &closures[2];
            assert!(M2.iter().zip(T.iter()).all(|(&m, &t)| !m || t));
        }
    }
}
