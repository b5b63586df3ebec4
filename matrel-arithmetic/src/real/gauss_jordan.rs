#![allow(non_snake_case)]

use log::{debug, trace};
use matrel_util::check_eq;

use crate::error::LinalgError;
use crate::real::{RealMatrix, RealVector, TOLERANCE};

/// Working copy `[M | rhs]` for elimination. It owns its data; nothing the caller holds is ever
/// modified.
#[derive(Clone, Debug)]
pub struct AugmentedSystem {
    n: usize,
    rows: RealMatrix,
}

impl AugmentedSystem {
    /// `[M | I]`, for inversion.
    pub fn with_identity(M: &RealMatrix) -> Self {
        let n = M.nrows();
        debug_assert!(M.is_square());
        let rows = RealMatrix::from_fn(n, 2 * n, |i, j| {
            if j < n {
                M[(i, j)]
            } else if j - n == i {
                1.
            } else {
                0.
            }
        });
        Self { n, rows }
    }

    /// `[A | b]`, for solving `Ax = b`.
    pub fn with_column(A: &RealMatrix, b: &RealVector) -> Result<Self, LinalgError> {
        let n = A.nrows();
        debug_assert!(A.is_square());
        check_eq!(
            b.len(),
            n,
            LinalgError::DimensionMismatch {
                expected: n,
                actual: b.len(),
            }
        );
        let rows = RealMatrix::from_fn(n, n + 1, |i, j| if j < n { A[(i, j)] } else { b[i] });
        Ok(Self { n, rows })
    }

    pub fn ncols(&self) -> usize {
        self.rows.ncols()
    }

    /// Moves the row in `col..n` with the largest `|entry|` in column `col` to position `col`
    /// and returns the pivot. Ties keep the topmost row.
    pub fn select_pivot(&mut self, col: usize) -> Result<f64, LinalgError> {
        let mut best = col;
        for r in col + 1..self.n {
            if self.rows[(r, col)].abs() > self.rows[(best, col)].abs() {
                best = r;
            }
        }
        if best != col {
            trace!("pivot column {col}: swapping rows {col} and {best}");
            self.rows.swap_rows(col, best);
        }
        let pivot = self.rows[(col, col)];
        if pivot.abs() < TOLERANCE {
            debug!("pivot column {col}: |{pivot}| is below tolerance, system is singular");
            return Err(LinalgError::Singular {
                magnitude: pivot.abs(),
            });
        }
        Ok(pivot)
    }

    /// `row[i] -= factor * row[pivot]`, for the columns from `from_col` on.
    fn subtract_row(&mut self, i: usize, pivot: usize, factor: f64, from_col: usize) {
        for j in from_col..self.ncols() {
            let delta = factor * self.rows[(pivot, j)];
            self.rows[(i, j)] -= delta;
        }
    }

    /// Reduces the left block to the identity.
    pub fn reduce(mut self) -> Result<Self, LinalgError> {
        for i in 0..self.n {
            let pivot = self.select_pivot(i)?;
            for j in i..self.ncols() {
                self.rows[(i, j)] /= pivot;
            }
            for k in (0..self.n).filter(|&k| k != i) {
                let factor = self.rows[(k, i)];
                self.subtract_row(k, i, factor, i);
            }
        }
        Ok(self)
    }

    /// Reduces the left block to upper-triangular form, without normalising the pivot rows.
    pub fn forward_eliminate(mut self) -> Result<Self, LinalgError> {
        for i in 0..self.n {
            let pivot = self.select_pivot(i)?;
            for k in i + 1..self.n {
                let factor = self.rows[(k, i)] / pivot;
                self.subtract_row(k, i, factor, i);
            }
        }
        Ok(self)
    }

    /// Solves the upper-triangular system left by [`Self::forward_eliminate`].
    pub fn back_substitute(&self) -> RealVector {
        let n = self.n;
        let mut x = vec![0.; n];
        for i in (0..n).rev() {
            let s: f64 = (i + 1..n).map(|j| self.rows[(i, j)] * x[j]).sum();
            x[i] = (self.rows[(i, n)] - s) / self.rows[(i, i)];
        }
        x.into()
    }

    /// The columns to the right of the coefficient block.
    pub fn right_block(&self) -> RealMatrix {
        self.rows.block(0, self.n, self.n, self.ncols() - self.n)
    }
}

/// Inverse via Gauss-Jordan elimination on `[M | I]` with partial pivoting.
pub fn inverse_by_gauss_jordan(M: &RealMatrix) -> Result<RealMatrix, LinalgError> {
    Ok(AugmentedSystem::with_identity(M).reduce()?.right_block())
}

/// Solves `Ax = b` by forward elimination with partial pivoting and back substitution.
///
/// Fails with [`LinalgError::Singular`] when the system has no unique solution.
pub fn solve_linear_system(A: &RealMatrix, b: &RealVector) -> Result<RealVector, LinalgError> {
    let system = AugmentedSystem::with_column(A, b)?.forward_eliminate()?;
    Ok(system.back_substitute())
}
