#![allow(non_snake_case)]

use ark_std::{rand, UniformRand};
use delegate::delegate;
use nalgebra::{self, Dyn, VecStorage};
use num_traits::{One, Zero};

use crate::linear_algebra::generic_matrix::GenericMatrix;
use crate::linear_algebra::Scalar;

pub type Matrix<T> = GenericMatrix<T, Dyn, Dyn, VecStorage<T, Dyn, Dyn>>;

impl<T: Scalar> Matrix<T> {
    pub fn from_fn(m: usize, n: usize, f: impl FnMut(usize, usize) -> T) -> Self {
        nalgebra::DMatrix::from_fn(m, n, f).into()
    }

    pub fn from_element(m: usize, n: usize, element: T) -> Self {
        nalgebra::DMatrix::from_element(m, n, element).into()
    }

    /// Builds a matrix from row-major nested vectors.
    ///
    /// Panics if the rows do not all have the same length.
    pub fn from_rows(rows: &[Vec<T>]) -> Self {
        let m = rows.len();
        let n = rows.first().map_or(0, |r| r.len());
        assert!(
            rows.iter().all(|r| r.len() == n),
            "cannot convert rows to Matrix<T>, row has wrong number of entries"
        );
        Self::from_fn(m, n, |i, j| rows[i][j].clone())
    }

    pub fn to_rows(&self) -> Vec<Vec<T>> {
        (0..self.nrows())
            .map(|i| (0..self.ncols()).map(|j| self[(i, j)].clone()).collect())
            .collect()
    }

    delegate! {
        to self.0 {
            pub fn swap_rows(&mut self, i: usize, j: usize);
        }
    }

    /// Returns a copy of `self` without row `i` and column `j`.
    pub fn minor(&self, i: usize, j: usize) -> Self {
        self.0.clone().remove_row(i).remove_column(j).into()
    }

    /// Returns the `(m, n)` block of `self` starting at `(i, j)`.
    pub fn block(&self, i: usize, j: usize, m: usize, n: usize) -> Self {
        Self::from_fn(m, n, |r, c| self[(i + r, j + c)].clone())
    }
}

impl<R: Scalar + Zero> Matrix<R> {
    pub fn zeros(m: usize, n: usize) -> Self {
        nalgebra::DMatrix::zeros(m, n).into()
    }
    pub fn identity(m: usize, n: usize) -> Self
    where
        R: One,
    {
        nalgebra::DMatrix::identity(m, n).into()
    }
}

impl<T: Scalar + UniformRand> Matrix<T> {
    pub fn rand<Rng: rand::Rng + ?Sized>(m: usize, n: usize, rng: &mut Rng) -> Self {
        Self::from_fn(m, n, |_, _| T::rand(rng))
    }
}
