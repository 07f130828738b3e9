//! Python bindings for zpk-core
//!
//! This module exposes zpk-core functionality to Python via PyO3.
//!
//! ## Classes
//!
//! - `ZerosAndPolesSISO` - SISO system in zeros/poles/gain form
//! - `ZerosAndPoles` - MIMO system, a matrix of SISO systems
//! - `Frequency` - Frequency sweep representation

use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;
use zpk_core::ZpkError;

mod frequency;
mod zpk;

pub use frequency::PyFrequency;
pub use zpk::{PyZerosAndPoles, PyZerosAndPolesSiso};

/// Map core errors onto the matching Python exception
pub(crate) fn to_py_err(err: ZpkError) -> PyErr {
    match err {
        ZpkError::InvalidArgument(_) => PyValueError::new_err(err.to_string()),
        ZpkError::OutOfRange { .. } => PyIndexError::new_err(err.to_string()),
    }
}

/// zpk_python - zeros/poles/gain LTI systems implemented in Rust
///
/// Example:
///     >>> import zpk_python as zpk
///     >>> sys = zpk.ZerosAndPolesSISO.from_roots(2.0, [-1.0], [-2.0 + 1j, -2.0 - 1j])
///     >>> f, y = sys.frequency_response(n=100)
#[pymodule]
fn zpk_python(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Add classes with clean names (no Py prefix in Python)
    m.add_class::<PyZerosAndPolesSiso>()?;
    m.add_class::<PyZerosAndPoles>()?;
    m.add_class::<PyFrequency>()?;

    m.add_function(wrap_pyfunction!(zpk::transform_roots_to_poly2, m)?)?;

    // Add module version
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
