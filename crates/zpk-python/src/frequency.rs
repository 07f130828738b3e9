//! Python bindings for Frequency class

use numpy::{PyArray1, ToPyArray};
use pyo3::prelude::*;
use zpk_core::frequency::{Frequency, SweepType};

/// Python wrapper for Frequency
#[pyclass(name = "Frequency")]
#[derive(Clone)]
pub struct PyFrequency {
    inner: Frequency,
}

#[pymethods]
impl PyFrequency {
    /// Create a new frequency sweep
    ///
    /// Args:
    ///     start: Start frequency in Hz
    ///     stop: Stop frequency in Hz
    ///     npoints: Number of frequency points
    ///     sweep_type: Sweep type ('linear' or 'log')
    #[new]
    #[pyo3(signature = (start, stop, npoints, sweep_type="log"))]
    pub fn new(start: f64, stop: f64, npoints: usize, sweep_type: &str) -> PyResult<Self> {
        let sweep = match sweep_type.to_lowercase().as_str() {
            "linear" | "lin" => SweepType::Linear,
            "log" | "logarithmic" => SweepType::Log,
            _ => {
                return Err(pyo3::exceptions::PyValueError::new_err(format!(
                    "Invalid sweep type: {}. Use 'linear' or 'log'",
                    sweep_type
                )))
            }
        };

        Ok(Self {
            inner: Frequency::new(start, stop, npoints, sweep),
        })
    }

    /// Frequencies in Hz as numpy array
    #[getter]
    pub fn f<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.f().to_pyarray(py)
    }

    /// Angular frequencies in rad/s as numpy array
    #[getter]
    pub fn w<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.w().to_pyarray(py)
    }

    #[getter]
    pub fn npoints(&self) -> usize {
        self.inner.npoints()
    }

    #[getter]
    pub fn sweep_type(&self) -> &str {
        match self.inner.sweep_type() {
            SweepType::Linear => "linear",
            SweepType::Log => "log",
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "Frequency({} Hz - {} Hz, {} points, {})",
            self.inner.start(),
            self.inner.stop(),
            self.npoints(),
            self.sweep_type()
        )
    }

    fn __len__(&self) -> usize {
        self.npoints()
    }
}
