//! Python bindings for SISO and MIMO zeros/poles/gain systems

use num_complex::Complex64;
use numpy::{PyArray1, PyArray2, PyArray3, PyReadonlyArray1, PyReadonlyArray2, ToPyArray};
use pyo3::prelude::*;
use pyo3::IntoPyObjectExt;
use zpk_core::math;
use zpk_core::{ResponseOptions, Selection, SweepType, ZerosAndPoles, ZerosAndPolesSiso, ZpkEntry};

use crate::to_py_err;

/// Evaluation points: a single value or a sequence of values
#[derive(FromPyObject)]
enum Points {
    Scalar(Complex64),
    Many(Vec<Complex64>),
}

/// Index key of a MIMO cell: `m[i, j]`, a lone `m[i]` is rejected later
#[derive(FromPyObject)]
enum ItemKey {
    Single(isize),
    Many(Vec<isize>),
}

/// One cell of a MIMO system: a SISO object or a raw tuple
///
/// `(k, z, p)` holds gain, zeros and poles, `(k, n1, n2, d1, d2)` gain and
/// real factors.
#[derive(FromPyObject)]
enum ZpkCell<'py> {
    Siso(PyZerosAndPolesSiso),
    Roots(f64, Vec<Complex64>, Vec<Complex64>),
    Factors(
        f64,
        PyReadonlyArray1<'py, f64>,
        PyReadonlyArray2<'py, f64>,
        PyReadonlyArray1<'py, f64>,
        PyReadonlyArray2<'py, f64>,
    ),
}

impl ZpkCell<'_> {
    fn into_entry(self) -> ZpkEntry {
        match self {
            ZpkCell::Siso(siso) => ZpkEntry::Siso(siso.inner),
            ZpkCell::Roots(k, z, p) => ZpkEntry::Roots { k, z, p },
            ZpkCell::Factors(k, n1, n2, d1, d2) => ZpkEntry::Factors {
                k,
                n1: n1.as_array().to_owned(),
                n2: n2.as_array().to_owned(),
                d1: d1.as_array().to_owned(),
                d2: d2.as_array().to_owned(),
            },
        }
    }
}

fn response_options(n: usize, f_range: Option<(f64, f64)>, f_logspace: bool) -> ResponseOptions {
    ResponseOptions {
        n,
        f_range,
        sweep_type: if f_logspace {
            SweepType::Log
        } else {
            SweepType::Linear
        },
    }
}

/// Convert complex conjugate root pairs into rows `(a, b)` of `s^2 + b*s + a`
#[pyfunction]
pub fn transform_roots_to_poly2<'py>(
    py: Python<'py>,
    roots: Vec<Complex64>,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let poly2 = math::transform_roots_to_poly2(&roots).map_err(to_py_err)?;
    Ok(poly2.to_pyarray(py))
}

/// Python wrapper for a SISO zeros/poles/gain system
#[pyclass(name = "ZerosAndPolesSISO")]
#[derive(Clone)]
pub struct PyZerosAndPolesSiso {
    inner: ZerosAndPolesSiso,
}

#[pymethods]
impl PyZerosAndPolesSiso {
    /// Create a system from gain, zeros and poles
    ///
    /// Complex roots must come in adjacent conjugate pairs.
    #[staticmethod]
    pub fn from_roots(k: f64, z: Vec<Complex64>, p: Vec<Complex64>) -> PyResult<Self> {
        let inner = ZerosAndPolesSiso::from_roots(k, &z, &p).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Create a system from gain and real first/second order factors
    ///
    /// Args:
    ///     k: Gain
    ///     n1: Numerator factors `s + a`
    ///     n2: Numerator factors `s^2 + b*s + a`, one row `(a, b)` each
    ///     d1: Denominator factors `s + a`
    ///     d2: Denominator factors `s^2 + b*s + a`, one row `(a, b)` each
    #[staticmethod]
    pub fn from_factors<'py>(
        k: f64,
        n1: PyReadonlyArray1<'py, f64>,
        n2: PyReadonlyArray2<'py, f64>,
        d1: PyReadonlyArray1<'py, f64>,
        d2: PyReadonlyArray2<'py, f64>,
    ) -> PyResult<Self> {
        let inner = ZerosAndPolesSiso::from_factors(
            k,
            n1.as_array().to_owned(),
            n2.as_array().to_owned(),
            d1.as_array().to_owned(),
            d2.as_array().to_owned(),
        )
        .map_err(to_py_err)?;
        Ok(Self { inner })
    }

    #[getter]
    pub fn k(&self) -> f64 {
        self.inner.gain()
    }

    #[setter]
    pub fn set_k(&mut self, k: f64) {
        self.inner.set_k(k);
    }

    #[getter]
    pub fn z<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<Complex64>> {
        self.inner.zeros().to_pyarray(py)
    }

    #[getter]
    pub fn p<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<Complex64>> {
        self.inner.poles().to_pyarray(py)
    }

    #[getter]
    pub fn n1<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.n1().to_pyarray(py)
    }

    #[getter]
    pub fn n2<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray2<f64>> {
        self.inner.n2().to_pyarray(py)
    }

    #[getter]
    pub fn d1<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.d1().to_pyarray(py)
    }

    #[getter]
    pub fn d2<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray2<f64>> {
        self.inner.d2().to_pyarray(py)
    }

    /// Number of poles
    #[getter]
    pub fn order(&self) -> usize {
        self.inner.order()
    }

    /// Evaluate the transfer function at `s`
    ///
    /// A single number gives a complex number, a sequence gives an array of
    /// the same length.
    #[pyo3(signature = (s, den_min=0.0))]
    fn evaluate_at_s(&self, py: Python<'_>, s: Points, den_min: f64) -> PyResult<PyObject> {
        match s {
            Points::Scalar(s) => self.inner.evaluate_at_s(s, den_min).into_py_any(py),
            Points::Many(s) => self
                .inner
                .evaluate_at_points(&s, den_min)
                .to_pyarray(py)
                .into_py_any(py),
        }
    }

    /// Useful frequency range `(f_min, f_max)` in Hz
    #[pyo3(signature = (f_range=None))]
    pub fn frequency_range(&self, f_range: Option<(f64, f64)>) -> PyResult<(f64, f64)> {
        self.inner.frequency_range(f_range).map_err(to_py_err)
    }

    /// Frequency response over `n + 1` points
    ///
    /// Returns:
    ///     Tuple `(f, y)` of frequencies in Hz and complex responses
    #[pyo3(signature = (n=200, f_range=None, f_logspace=true))]
    pub fn frequency_response<'py>(
        &self,
        py: Python<'py>,
        n: usize,
        f_range: Option<(f64, f64)>,
        f_logspace: bool,
    ) -> PyResult<(Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<Complex64>>)> {
        let resp = self
            .inner
            .frequency_response(&response_options(n, f_range, f_logspace))
            .map_err(to_py_err)?;
        Ok((resp.f().to_pyarray(py), resp.y.to_pyarray(py)))
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "ZerosAndPolesSISO(k={}, {} zeros, {} poles)",
            self.inner.gain(),
            self.inner.zeros().len(),
            self.inner.poles().len()
        )
    }
}

/// Python wrapper for a MIMO zeros/poles/gain system
#[pyclass(name = "ZerosAndPoles")]
#[derive(Clone)]
pub struct PyZerosAndPoles {
    inner: ZerosAndPoles,
}

#[pymethods]
impl PyZerosAndPoles {
    /// Create a MIMO system
    ///
    /// Args:
    ///     zpk: Rows (outputs) of cells (inputs). A cell is a
    ///         `ZerosAndPolesSISO`, a tuple `(k, z, p)` or a tuple
    ///         `(k, n1, n2, d1, d2)`. A single cell gives a 1x1 system.
    #[new]
    pub fn new<'py>(zpk: &Bound<'py, PyAny>) -> PyResult<Self> {
        let rows: Vec<Vec<ZpkEntry>> = match zpk.extract::<ZpkCell<'py>>() {
            Ok(cell) => vec![vec![cell.into_entry()]],
            Err(_) => zpk
                .extract::<Vec<Vec<ZpkCell<'py>>>>()?
                .into_iter()
                .map(|row| row.into_iter().map(ZpkCell::into_entry).collect())
                .collect(),
        };
        let inner = ZerosAndPoles::new(rows).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Number of outputs
    #[getter]
    pub fn ny(&self) -> usize {
        self.inner.ny()
    }

    /// Number of inputs
    #[getter]
    pub fn nu(&self) -> usize {
        self.inner.nu()
    }

    /// Cell `m[i, j]`; negative indices raise `IndexError`
    fn __getitem__(&self, key: ItemKey) -> PyResult<PyZerosAndPolesSiso> {
        let key = match key {
            ItemKey::Single(i) => vec![i],
            ItemKey::Many(key) => key,
        };
        let cell = self.inner.item(&key).map_err(to_py_err)?;
        Ok(PyZerosAndPolesSiso {
            inner: cell.clone(),
        })
    }

    /// Evaluate the selected transfer functions at `s`
    ///
    /// Returns:
    ///     Array of shape (n_inputs, n_outputs) for a single number,
    ///     (n_inputs, n_outputs, len(s)) for a sequence
    #[pyo3(signature = (s, den_min=0.0, u_indices=None, y_indices=None))]
    fn evaluate_at_s(
        &self,
        py: Python<'_>,
        s: Points,
        den_min: f64,
        u_indices: Option<Vec<usize>>,
        y_indices: Option<Vec<usize>>,
    ) -> PyResult<PyObject> {
        let u = Selection::from(u_indices);
        let y = Selection::from(y_indices);
        match s {
            Points::Scalar(s) => self
                .inner
                .evaluate_at_s(s, den_min, &u, &y)
                .map_err(to_py_err)?
                .to_pyarray(py)
                .into_py_any(py),
            Points::Many(s) => self
                .inner
                .evaluate_at_points(&s, den_min, &u, &y)
                .map_err(to_py_err)?
                .to_pyarray(py)
                .into_py_any(py),
        }
    }

    /// Useful frequency range `(f_min, f_max)` in Hz of the selected cells
    #[pyo3(signature = (f_range=None, u_indices=None, y_indices=None))]
    pub fn frequency_range(
        &self,
        f_range: Option<(f64, f64)>,
        u_indices: Option<Vec<usize>>,
        y_indices: Option<Vec<usize>>,
    ) -> PyResult<(f64, f64)> {
        self.inner
            .frequency_range(
                f_range,
                &Selection::from(u_indices),
                &Selection::from(y_indices),
            )
            .map_err(to_py_err)
    }

    /// Frequency response of the selected cells over `n + 1` points
    ///
    /// Returns:
    ///     Tuple `(f, y)`, `y` with shape (n_inputs, n_outputs, n + 1)
    #[pyo3(signature = (n=200, f_range=None, f_logspace=true, u_indices=None, y_indices=None))]
    pub fn frequency_response<'py>(
        &self,
        py: Python<'py>,
        n: usize,
        f_range: Option<(f64, f64)>,
        f_logspace: bool,
        u_indices: Option<Vec<usize>>,
        y_indices: Option<Vec<usize>>,
    ) -> PyResult<(Bound<'py, PyArray1<f64>>, Bound<'py, PyArray3<Complex64>>)> {
        let resp = self
            .inner
            .frequency_response(
                &response_options(n, f_range, f_logspace),
                &Selection::from(u_indices),
                &Selection::from(y_indices),
            )
            .map_err(to_py_err)?;
        Ok((resp.f().to_pyarray(py), resp.y.to_pyarray(py)))
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        format!("ZerosAndPoles({} outputs, {} inputs)", self.ny(), self.nu())
    }
}
