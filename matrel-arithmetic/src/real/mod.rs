//! Dense linear algebra over `f64`: determinants, two independent inversion methods and
//! linear-system solving.
#![allow(non_snake_case)]

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::LinalgError;
use crate::linear_algebra::{Matrix, Vector};

mod determinant;
mod gauss_jordan;

pub use determinant::{cofactor_matrix, determinant, inverse_by_adjugate};
pub use gauss_jordan::{inverse_by_gauss_jordan, solve_linear_system, AugmentedSystem};

pub type RealMatrix = Matrix<f64>;
pub type RealVector = Vector<f64>;

/// Determinants and pivots smaller than this in magnitude are treated as zero.
pub const TOLERANCE: f64 = 1e-9;

/// True iff `M1` and `M2` have the same shape and every pair of entries differs by at most
/// `tolerance`.
pub fn matrices_approximately_equal(M1: &RealMatrix, M2: &RealMatrix, tolerance: f64) -> bool {
    if M1.nrows() != M2.nrows() || M1.ncols() != M2.ncols() {
        return false;
    }
    (M1 - M2).iter().all(|d| d.abs() <= tolerance)
}

/// Both inverses of a matrix and whether they agree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InverseComparison {
    pub by_adjugate: RealMatrix,
    pub by_gauss_jordan: RealMatrix,
    pub agree: bool,
}

/// Inverts `M` with both methods and compares the results within [`TOLERANCE`].
///
/// Fails with [`LinalgError::Singular`] if either method finds `M` singular.
pub fn cross_checked_inverse(M: &RealMatrix) -> Result<InverseComparison, LinalgError> {
    let by_adjugate = inverse_by_adjugate(M)?;
    let by_gauss_jordan = inverse_by_gauss_jordan(M)?;
    let agree = matrices_approximately_equal(&by_adjugate, &by_gauss_jordan, TOLERANCE);
    if !agree {
        debug!("adjugate and Gauss-Jordan inverses differ by more than {TOLERANCE}");
    }
    Ok(InverseComparison {
        by_adjugate,
        by_gauss_jordan,
        agree,
    })
}
