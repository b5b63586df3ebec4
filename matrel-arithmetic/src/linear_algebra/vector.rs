use delegate::delegate;
use nalgebra::{self, Const, Dyn, VecStorage};
use num_traits::Zero;

use crate::linear_algebra::generic_matrix::GenericMatrix;
use crate::linear_algebra::Scalar;

pub type GenericVector<T, R, S> = GenericMatrix<T, R, Const<1>, S>;
pub type Vector<T> = GenericVector<T, Dyn, VecStorage<T, Dyn, Const<1>>>;

impl<T: Scalar> From<Vec<T>> for Vector<T> {
    fn from(v: Vec<T>) -> Self {
        nalgebra::DVector::from(v).into()
    }
}

impl<T: Scalar> Vector<T> {
    delegate! {
        to self.0 {
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
            pub fn as_slice(&self) -> &[T];
        }
    }

    pub fn from_fn(n: usize, mut f: impl FnMut(usize) -> T) -> Self {
        nalgebra::DVector::from_fn(n, |i, _| f(i)).into()
    }

    pub fn from_slice(data: &[T]) -> Self {
        nalgebra::DVector::from_row_slice(data).into()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.as_slice().to_vec()
    }
}

impl<T: Scalar + Zero> Vector<T> {
    pub fn zeros(n: usize) -> Self {
        nalgebra::DVector::zeros(n).into()
    }
}
