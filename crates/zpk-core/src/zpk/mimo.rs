//! MIMO zeros/poles/gain system: a matrix of SISO systems

use std::fmt;

use ndarray::{Array1, Array2, Array3};
use num_complex::Complex64;

use super::response::{MimoFrequencyResponse, ResponseOptions};
use super::selection::Selection;
use super::siso::ZerosAndPolesSiso;
use crate::constants::RESPONSE_DEN_MIN;
use crate::error::{Result, ZpkError};
use crate::frequency::validate_range;

/// One cell of a MIMO system as passed to [`ZerosAndPoles::new`]
///
/// Raw root and factor data is turned into a [`ZerosAndPolesSiso`] when the
/// matrix is built.
#[derive(Debug, Clone, PartialEq)]
pub enum ZpkEntry {
    /// An already constructed SISO system
    Siso(ZerosAndPolesSiso),
    /// Gain, zeros and poles
    Roots {
        k: f64,
        z: Vec<Complex64>,
        p: Vec<Complex64>,
    },
    /// Gain and real first/second order factors
    Factors {
        k: f64,
        n1: Array1<f64>,
        n2: Array2<f64>,
        d1: Array1<f64>,
        d2: Array2<f64>,
    },
}

impl ZpkEntry {
    /// Shorthand for a `Roots` entry
    pub fn roots(k: f64, z: &[Complex64], p: &[Complex64]) -> Self {
        ZpkEntry::Roots {
            k,
            z: z.to_vec(),
            p: p.to_vec(),
        }
    }

    fn into_siso(self) -> Result<ZerosAndPolesSiso> {
        match self {
            ZpkEntry::Siso(siso) => Ok(siso),
            ZpkEntry::Roots { k, z, p } => ZerosAndPolesSiso::from_roots(k, &z, &p),
            ZpkEntry::Factors { k, n1, n2, d1, d2 } => {
                ZerosAndPolesSiso::from_factors(k, n1, n2, d1, d2)
            }
        }
    }
}

impl From<ZerosAndPolesSiso> for ZpkEntry {
    fn from(siso: ZerosAndPolesSiso) -> Self {
        ZpkEntry::Siso(siso)
    }
}

/// A multi input, multi output LTI system in zeros/poles/gain form
///
/// Cell `[i, j]` is the SISO transfer function from input `j` to output `i`;
/// the matrix has `ny` rows (outputs) and `nu` columns (inputs).
#[derive(Debug, Clone, PartialEq)]
pub struct ZerosAndPoles {
    /// SISO systems [ny, nu]
    zpk: Array2<ZerosAndPolesSiso>,
}

impl ZerosAndPoles {
    /// Create a MIMO system from rows of cells
    ///
    /// # Errors
    /// `InvalidArgument` if there are no rows, the rows are empty or of
    /// different length, or a raw cell is not a valid SISO system.
    pub fn new(rows: Vec<Vec<ZpkEntry>>) -> Result<Self> {
        let ny = rows.len();
        let nu = rows.first().map_or(0, Vec::len);
        if nu == 0 {
            return Err(ZpkError::invalid(format!(
                "Argument zpk must have at least one row and one column, but has {} rows and {} columns",
                ny, nu
            )));
        }
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != nu) {
            return Err(ZpkError::invalid(format!(
                "All rows of zpk must have {} elements, but row {} has {} elements",
                nu,
                i,
                row.len()
            )));
        }

        let mut cells = Vec::with_capacity(ny * nu);
        for (i, row) in rows.into_iter().enumerate() {
            for (j, entry) in row.into_iter().enumerate() {
                let siso = entry.into_siso().map_err(|e| match e {
                    ZpkError::InvalidArgument(msg) => {
                        ZpkError::invalid(format!("zpk[{}][{}]: {}", i, j, msg))
                    }
                    other => other,
                })?;
                cells.push(siso);
            }
        }

        let zpk = Array2::from_shape_vec((ny, nu), cells)
            .map_err(|e| ZpkError::invalid(e.to_string()))?;
        Ok(Self { zpk })
    }

    /// Number of outputs (rows)
    #[inline]
    pub fn ny(&self) -> usize {
        self.zpk.nrows()
    }

    /// Number of inputs (columns)
    #[inline]
    pub fn nu(&self) -> usize {
        self.zpk.ncols()
    }

    fn check_index(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.ny() {
            return Err(ZpkError::OutOfRange {
                axis: "row",
                index: row as isize,
                len: self.ny(),
            });
        }
        if col >= self.nu() {
            return Err(ZpkError::OutOfRange {
                axis: "column",
                index: col as isize,
                len: self.nu(),
            });
        }
        Ok(())
    }

    /// SISO system from input `col` to output `row`
    pub fn get(&self, row: usize, col: usize) -> Result<&ZerosAndPolesSiso> {
        self.check_index(row, col)?;
        Ok(&self.zpk[[row, col]])
    }

    /// Mutable access to a cell, e.g. to change its gain
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut ZerosAndPolesSiso> {
        self.check_index(row, col)?;
        Ok(&mut self.zpk[[row, col]])
    }

    /// Access a cell with a `[row, col]` key
    ///
    /// Negative indices do not count from the end.
    ///
    /// # Errors
    /// `InvalidArgument` unless the key has exactly two elements,
    /// `OutOfRange` if an element is negative or outside the matrix.
    pub fn item(&self, key: &[isize]) -> Result<&ZerosAndPolesSiso> {
        match *key {
            [row, col] => {
                let row = non_negative(row, "row", self.ny())?;
                let col = non_negative(col, "column", self.nu())?;
                self.get(row, col)
            }
            _ => Err(ZpkError::invalid(format!(
                "Item must have two elements, e.g. [1, 2], but has {} ({:?})",
                key.len(),
                key
            ))),
        }
    }

    /// Iterate over `((row, col), cell)`
    pub fn indexed_iter(&self) -> impl Iterator<Item = ((usize, usize), &ZerosAndPolesSiso)> + '_ {
        self.zpk.indexed_iter()
    }

    fn resolve(&self, u: &Selection, y: &Selection) -> Result<(Vec<usize>, Vec<usize>)> {
        Ok((u.resolve(self.nu(), "input")?, y.resolve(self.ny(), "output")?))
    }

    /// Evaluate the selected transfer functions at one point
    ///
    /// The result has shape `[n_inputs, n_outputs]`: the first axis walks the
    /// selected inputs, the second the selected outputs.
    pub fn evaluate_at_s(
        &self,
        s: impl Into<Complex64>,
        den_min: f64,
        u: &Selection,
        y: &Selection,
    ) -> Result<Array2<Complex64>> {
        let (ui, yi) = self.resolve(u, y)?;
        let s = s.into();
        Ok(Array2::from_shape_fn((ui.len(), yi.len()), |(a, b)| {
            self.zpk[[yi[b], ui[a]]].evaluate_at_s(s, den_min)
        }))
    }

    /// Evaluate the selected transfer functions at every point of `s`
    ///
    /// The result has shape `[n_inputs, n_outputs, s.len()]`.
    pub fn evaluate_at_points(
        &self,
        s: &[Complex64],
        den_min: f64,
        u: &Selection,
        y: &Selection,
    ) -> Result<Array3<Complex64>> {
        let (ui, yi) = self.resolve(u, y)?;
        Ok(self.evaluate_selected(s, den_min, &ui, &yi))
    }

    fn evaluate_selected(
        &self,
        s: &[Complex64],
        den_min: f64,
        ui: &[usize],
        yi: &[usize],
    ) -> Array3<Complex64> {
        let mut out = Array3::<Complex64>::zeros((ui.len(), yi.len(), s.len()));
        for (a, &j) in ui.iter().enumerate() {
            for (b, &i) in yi.iter().enumerate() {
                let values = self.zpk[[i, j]].evaluate_at_points(s, den_min);
                out.slice_mut(ndarray::s![a, b, ..]).assign(&values);
            }
        }
        out
    }

    /// Useful frequency range `(f_min, f_max)` in Hz for the selected cells
    ///
    /// An explicit `f_range` is validated and returned unchanged. Otherwise
    /// the union of the ranges of all selected cells is returned.
    pub fn frequency_range(
        &self,
        f_range: Option<(f64, f64)>,
        u: &Selection,
        y: &Selection,
    ) -> Result<(f64, f64)> {
        let (ui, yi) = self.resolve(u, y)?;
        self.selected_range(f_range, &ui, &yi)
    }

    fn selected_range(
        &self,
        f_range: Option<(f64, f64)>,
        ui: &[usize],
        yi: &[usize],
    ) -> Result<(f64, f64)> {
        if let Some(range) = f_range {
            return validate_range(range);
        }

        let mut union: Option<(f64, f64)> = None;
        for &i in yi {
            for &j in ui {
                let (f_min, f_max) = self.zpk[[i, j]].frequency_range(None)?;
                union = Some(match union {
                    Some((lo, hi)) => (lo.min(f_min), hi.max(f_max)),
                    None => (f_min, f_max),
                });
            }
        }
        union.ok_or_else(|| {
            ZpkError::invalid("At least one input and one output must be selected")
        })
    }

    /// Frequency response of the selected transfer functions
    ///
    /// All cells share one frequency sweep of `opts.n + 1` points.
    pub fn frequency_response(
        &self,
        opts: &ResponseOptions,
        u: &Selection,
        y: &Selection,
    ) -> Result<MimoFrequencyResponse> {
        let (ui, yi) = self.resolve(u, y)?;
        let range = self.selected_range(opts.f_range, &ui, &yi)?;
        let frequency = opts.sweep(range)?;
        let y = self.evaluate_selected(&frequency.s(), RESPONSE_DEN_MIN, &ui, &yi);

        Ok(MimoFrequencyResponse {
            frequency,
            y,
            u_indices: ui,
            y_indices: yi,
        })
    }
}

fn non_negative(index: isize, axis: &'static str, len: usize) -> Result<usize> {
    usize::try_from(index).map_err(|_| ZpkError::OutOfRange { axis, index, len })
}

impl From<ZerosAndPolesSiso> for ZerosAndPoles {
    fn from(siso: ZerosAndPolesSiso) -> Self {
        Self {
            zpk: Array2::from_elem((1, 1), siso),
        }
    }
}

impl fmt::Display for ZerosAndPoles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ny() == 1 && self.nu() == 1 {
            return write!(f, "{}", self.zpk[[0, 0]]);
        }
        writeln!(f)?;
        for ((i, j), cell) in self.zpk.indexed_iter() {
            writeln!(f, " [{},{}] = {}", i, j, cell)?;
        }
        Ok(())
    }
}
