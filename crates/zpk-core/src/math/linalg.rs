//! Linear algebra operations
//!
//! Uses nalgebra as the backend. All ndarray<->nalgebra conversions are
//! contained here so callers only deal with ndarray types.

use nalgebra::DMatrix;
use ndarray::Array2;
use num_complex::Complex64;

use crate::error::{Result, ZpkError};

/// Convert ndarray Array2<f64> to nalgebra DMatrix<f64>
#[inline]
fn to_na_real(a: &Array2<f64>) -> DMatrix<f64> {
    let (m, n) = a.dim();
    DMatrix::from_fn(m, n, |i, j| a[[i, j]])
}

/// Compute complex eigenvalues of a real matrix
///
/// Returns an error if the matrix is not square.
pub fn eigenvalues(a: &Array2<f64>) -> Result<Vec<Complex64>> {
    let (m, n) = a.dim();
    if m != n {
        return Err(ZpkError::invalid(format!(
            "Matrix must be square to compute eigenvalues, but has shape ({}, {})",
            m, n
        )));
    }
    if m == 0 {
        return Ok(Vec::new());
    }

    let mat = to_na_real(a);
    let eigs = mat.complex_eigenvalues();

    Ok(eigs.iter().map(|e| Complex64::new(e.re, e.im)).collect())
}
