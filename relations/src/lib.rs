#![allow(non_snake_case)]

use matrel_arithmetic::boolean::{
    is_reflexive, is_symmetric, is_transitive, reflexive_closure, symmetric_closure,
    transitive_closure, BooleanMatrix,
};

#[doc(hidden)]
pub use ark_std;
#[doc(hidden)]
pub use matrel_arithmetic;

pub mod analysis;
pub mod closure_transformer;
pub mod partition;
pub mod properties;

/// Labels of the set the relation tool works on.
pub const RELATION_DOMAIN: [u32; 5] = [1, 2, 3, 4, 5];
pub const RELATION_SIZE: usize = RELATION_DOMAIN.len();

/// A property of binary relations together with its closure operator.
pub trait RelationProperty {
    /// Human-readable name, e.g. "reflexive".
    const NAME: &'static str;

    /// Returns true iff the relation `M` has the property.
    fn holds(M: &BooleanMatrix) -> bool;

    /// Returns `Ok(())` iff the relation `M` has the property.
    fn holds_err(M: &BooleanMatrix) -> anyhow::Result<()> {
        if Self::holds(M) {
            Ok(())
        } else {
            anyhow::bail!("the relation is not {}", Self::NAME)
        }
    }

    /// Returns the smallest relation containing `M` that has the property.
    /// The closure must be idempotent and must not modify `M`.
    fn closure(M: &BooleanMatrix) -> BooleanMatrix;
}

pub struct Reflexive;
pub struct Symmetric;
pub struct Transitive;

impl RelationProperty for Reflexive {
    const NAME: &'static str = "reflexive";

    fn holds(M: &BooleanMatrix) -> bool {
        is_reflexive(M)
    }

    fn closure(M: &BooleanMatrix) -> BooleanMatrix {
        reflexive_closure(M)
    }
}

impl RelationProperty for Symmetric {
    const NAME: &'static str = "symmetric";

    fn holds(M: &BooleanMatrix) -> bool {
        is_symmetric(M)
    }

    fn closure(M: &BooleanMatrix) -> BooleanMatrix {
        symmetric_closure(M)
    }
}

impl RelationProperty for Transitive {
    const NAME: &'static str = "transitive";

    fn holds(M: &BooleanMatrix) -> bool {
        is_transitive(M)
    }

    fn closure(M: &BooleanMatrix) -> BooleanMatrix {
        transitive_closure(M)
    }
}

#[macro_export]
macro_rules! test_closure_establishes_property {
    ($P:ty, $size:expr) => {
        #[test]
        fn test_closure_establishes_property() {
            let rng = &mut $crate::ark_std::test_rng();
            for density in [0.1, 0.3, 0.5] {
                let M = $crate::matrel_arithmetic::boolean::BooleanMatrix::rand_with_density(
                    $size, density, rng,
                );
                let C = <$P as $crate::RelationProperty>::closure(&M);
                assert!(<$P as $crate::RelationProperty>::holds(&C));
                assert!(<$P as $crate::RelationProperty>::holds_err(&C).is_ok());
                // closures only add pairs
                assert!(M.iter().zip(C.iter()).all(|(&m, &c)| !m || c));
            }
        }
    };
}

#[macro_export]
macro_rules! test_closure_is_idempotent {
    ($P:ty, $size:expr) => {
        #[test]
        fn test_closure_is_idempotent() {
            let rng = &mut $crate::ark_std::test_rng();
            for density in [0.1, 0.3, 0.5] {
                let M = $crate::matrel_arithmetic::boolean::BooleanMatrix::rand_with_density(
                    $size, density, rng,
                );
                let C = <$P as $crate::RelationProperty>::closure(&M);
                assert_eq!(<$P as $crate::RelationProperty>::closure(&C), C);
            }
        }
    };
}
