#![allow(non_snake_case)]

use std::ops::{Mul, Sub};

use delegate::delegate;
use derive_more::{Display, From, Index, IndexMut, Into};
use nalgebra::allocator::Allocator;
use nalgebra::{self, DefaultAllocator, Dim, Owned, RawStorage, Scalar};

/// Thin wrapper around an `nalgebra` matrix, so that the rest of the workspace only sees the
/// operations it actually needs.
#[derive(Clone, Debug, Display, From, Into, Index, IndexMut)]
pub struct GenericMatrix<T: Scalar, R: Dim, C: Dim, S: RawStorage<T, R, C>>(
    pub(crate) nalgebra::Matrix<T, R, C, S>,
);

impl<T: Scalar, R: Dim, C: Dim, S: RawStorage<T, R, C>> GenericMatrix<T, R, C, S> {
    delegate! {
        to self.0 {
            pub fn nrows(&self) -> usize;
            pub fn ncols(&self) -> usize;
            pub fn is_square(&self) -> bool;
            pub fn iter(&self) -> impl Iterator<Item=&'_ T>;
        }
    }
}

impl<T: Scalar, R: Dim, C: Dim, S: RawStorage<T, R, C>> GenericMatrix<T, R, C, S> {
    delegate! {
        to self.0 {
            #[into]
            pub fn map<O: Scalar, F: FnMut(T) -> O>(&self, f: F) -> GenericMatrix<O, R, C, Owned<O, R, C>>
            where DefaultAllocator: Allocator<R, C>;
        }
    }

    pub fn transpose(&self) -> GenericMatrix<T, C, R, Owned<T, C, R>>
    where
        DefaultAllocator: Allocator<C, R>,
    {
        self.0.transpose().into()
    }
}

impl<T: Scalar, R: Dim, C: Dim, S: RawStorage<T, R, C>> PartialEq for GenericMatrix<T, R, C, S>
where
    nalgebra::Matrix<T, R, C, S>: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T: Scalar, R: Dim, C: Dim, S: RawStorage<T, R, C>> Eq for GenericMatrix<T, R, C, S> where
    nalgebra::Matrix<T, R, C, S>: Eq
{
}

/// Implement binary operation `&GenericMatrix<T>` x `&GenericMatrix<TRhs>` -> `GenericMatrix<TO>`
macro_rules! impl_binop_matrix {
    ($op:ident, $OpTrait:ident) => {
        impl<
                'a,
                'b,
                T: Scalar,
                R: Dim,
                C: Dim,
                S: RawStorage<T, R, C>,
                TRhs: Scalar,
                RRhs: Dim,
                CRhs: Dim,
                SRhs: RawStorage<TRhs, RRhs, CRhs>,
                TO: Scalar,
                RO: Dim,
                CO: Dim,
                SO: RawStorage<TO, RO, CO>,
            > $OpTrait<&'b GenericMatrix<TRhs, RRhs, CRhs, SRhs>> for &'a GenericMatrix<T, R, C, S>
        where
            &'a nalgebra::Matrix<T, R, C, S>: $OpTrait<
                &'b nalgebra::Matrix<TRhs, RRhs, CRhs, SRhs>,
                Output = nalgebra::Matrix<TO, RO, CO, SO>,
            >,
        {
            type Output = GenericMatrix<TO, RO, CO, SO>;

            fn $op(self, rhs: &'b GenericMatrix<TRhs, RRhs, CRhs, SRhs>) -> Self::Output {
                self.0.$op(&rhs.0).into()
            }
        }
    };
}

impl_binop_matrix!(mul, Mul);
impl_binop_matrix!(sub, Sub);
