//! Frequency response options and results

use ndarray::{Array1, Array3};
use num_complex::Complex64;

use crate::constants::DEFAULT_RESPONSE_INTERVALS;
use crate::error::{Result, ZpkError};
use crate::frequency::{Frequency, SweepType};
use crate::math::conversions::{complex_2_db, complex_2_degree, complex_2_magnitude};

/// Options of a frequency response sweep
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseOptions {
    /// Number of frequency intervals; the sweep has `n + 1` points
    pub n: usize,
    /// Frequency range `(f_min, f_max)` in Hz, selected automatically if `None`
    pub f_range: Option<(f64, f64)>,
    /// Logarithmic (default) or linear spacing
    pub sweep_type: SweepType,
}

impl Default for ResponseOptions {
    fn default() -> Self {
        Self {
            n: DEFAULT_RESPONSE_INTERVALS,
            f_range: None,
            sweep_type: SweepType::Log,
        }
    }
}

impl ResponseOptions {
    /// Build the frequency sweep for an already determined range
    pub(crate) fn sweep(&self, (f_min, f_max): (f64, f64)) -> Result<Frequency> {
        if self.sweep_type == SweepType::Log && f_min <= 0.0 {
            return Err(ZpkError::invalid(format!(
                "Logarithmic frequency sweep requires f_min > 0, but f_min = {}",
                f_min
            )));
        }
        Ok(Frequency::new(f_min, f_max, self.n + 1, self.sweep_type))
    }
}

/// Frequency response of a SISO system
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyResponse {
    /// Frequency points
    pub frequency: Frequency,
    /// Response `y(j*w)` at every frequency point
    pub y: Array1<Complex64>,
}

impl FrequencyResponse {
    /// Frequencies in Hz
    #[inline]
    pub fn f(&self) -> &[f64] {
        self.frequency.f()
    }

    /// Angular frequencies in rad/s
    pub fn w(&self) -> Vec<f64> {
        self.frequency.w()
    }

    /// Number of frequency points
    #[inline]
    pub fn len(&self) -> usize {
        self.y.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Magnitude of the response
    pub fn magnitude(&self) -> Array1<f64> {
        self.y.mapv(complex_2_magnitude)
    }

    /// Magnitude of the response in dB
    pub fn magnitude_db(&self) -> Array1<f64> {
        self.y.mapv(complex_2_db)
    }

    /// Phase of the response in degrees
    pub fn phase_deg(&self) -> Array1<f64> {
        self.y.mapv(complex_2_degree)
    }
}

/// Frequency response of a MIMO system
///
/// `y` has shape `[n_inputs, n_outputs, n_points]` where the first two axes
/// walk the selected inputs and outputs in `u_indices`/`y_indices` order.
#[derive(Debug, Clone, PartialEq)]
pub struct MimoFrequencyResponse {
    /// Frequency points
    pub frequency: Frequency,
    /// Responses [n_inputs, n_outputs, n_points]
    pub y: Array3<Complex64>,
    /// Selected input indices (first axis of `y`)
    pub u_indices: Vec<usize>,
    /// Selected output indices (second axis of `y`)
    pub y_indices: Vec<usize>,
}

impl MimoFrequencyResponse {
    /// Frequencies in Hz
    #[inline]
    pub fn f(&self) -> &[f64] {
        self.frequency.f()
    }

    /// Response from the `u`-th selected input to the `y`-th selected output
    pub fn entry(&self, u: usize, y: usize) -> Option<FrequencyResponse> {
        let (nu, ny, _) = self.y.dim();
        if u >= nu || y >= ny {
            return None;
        }
        Some(FrequencyResponse {
            frequency: self.frequency.clone(),
            y: self.y.slice(ndarray::s![u, y, ..]).to_owned(),
        })
    }

    /// Magnitude of all responses in dB
    pub fn magnitude_db(&self) -> Array3<f64> {
        self.y.mapv(complex_2_db)
    }

    /// Phase of all responses in degrees
    pub fn phase_deg(&self) -> Array3<f64> {
        self.y.mapv(complex_2_degree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_options() {
        let opts = ResponseOptions::default();
        assert_eq!(opts.n, 200);
        assert_eq!(opts.f_range, None);
        assert_eq!(opts.sweep_type, SweepType::Log);
    }

    #[test]
    fn test_sweep_has_n_plus_one_points() {
        let opts = ResponseOptions {
            n: 4,
            sweep_type: SweepType::Linear,
            ..Default::default()
        };
        let freq = opts.sweep((0.0, 2.0)).unwrap();
        assert_eq!(freq.f(), &[0.0, 0.5, 1.0, 1.5, 2.0]);
    }

    #[test]
    fn test_log_sweep_rejects_zero_start() {
        let opts = ResponseOptions::default();
        assert!(matches!(
            opts.sweep((0.0, 2.0)),
            Err(ZpkError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_bode_views() {
        let frequency = Frequency::new(1.0, 2.0, 2, SweepType::Linear);
        let resp = FrequencyResponse {
            frequency,
            y: Array1::from_vec(vec![Complex64::new(0.1, 0.0), Complex64::new(0.0, -10.0)]),
        };

        assert_eq!(resp.len(), 2);
        assert_relative_eq!(resp.magnitude()[1], 10.0, epsilon = 1e-12);
        let db = resp.magnitude_db();
        assert_relative_eq!(db[0], -20.0, epsilon = 1e-10);
        assert_relative_eq!(db[1], 20.0, epsilon = 1e-10);
        let deg = resp.phase_deg();
        assert_relative_eq!(deg[0], 0.0, epsilon = 1e-10);
        assert_relative_eq!(deg[1], -90.0, epsilon = 1e-10);
    }

    #[test]
    fn test_mimo_entry() {
        let frequency = Frequency::new(1.0, 2.0, 2, SweepType::Linear);
        let y = Array3::from_shape_fn((2, 1, 2), |(u, _, k)| Complex64::new(u as f64, k as f64));
        let resp = MimoFrequencyResponse {
            frequency,
            y,
            u_indices: vec![0, 1],
            y_indices: vec![0],
        };

        let entry = resp.entry(1, 0).unwrap();
        assert_eq!(entry.y[0], Complex64::new(1.0, 0.0));
        assert_eq!(entry.y[1], Complex64::new(1.0, 1.0));
        assert!(resp.entry(2, 0).is_none());
        assert!(resp.entry(0, 1).is_none());
    }
}
