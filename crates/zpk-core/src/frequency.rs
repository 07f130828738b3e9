//! Frequency module - frequency sweeps and automatic range selection
//!
//! Provides a frequency vector in Hz with its sweep type, and the
//! heuristic that picks a useful band from the zeros and poles of a system.

use num_complex::Complex64;

use crate::constants::{DEFAULT_F_MAX, DEFAULT_F_MIN, FREQUENCY_RANGE_MARGIN, ROOT_MAGNITUDE_TOL};
use crate::error::{Result, ZpkError};
use crate::math::conversions::{from_hz, rad_per_s_2_hz};

/// Sweep type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SweepType {
    Linear,
    #[default]
    Log,
}

/// A frequency sweep
#[derive(Debug, Clone, PartialEq)]
pub struct Frequency {
    /// Frequency vector in Hz
    f: Vec<f64>,
    /// Sweep type (linear or log)
    sweep_type: SweepType,
}

impl Frequency {
    /// Create a new Frequency with start/stop/npoints
    ///
    /// # Arguments
    /// * `start_hz` - Start frequency in Hz
    /// * `stop_hz` - Stop frequency in Hz
    /// * `npoints` - Number of frequency points
    /// * `sweep_type` - Linear or logarithmic sweep
    ///
    /// # Example
    /// ```
    /// use zpk_core::frequency::{Frequency, SweepType};
    /// let freq = Frequency::new(0.1, 10.0, 21, SweepType::Log);
    /// assert_eq!(freq.npoints(), 21);
    /// ```
    pub fn new(start_hz: f64, stop_hz: f64, npoints: usize, sweep_type: SweepType) -> Self {
        let f = match npoints {
            0 => Vec::new(),
            1 => vec![start_hz],
            _ => {
                let last = (npoints - 1) as f64;
                match sweep_type {
                    SweepType::Linear => {
                        let step = (stop_hz - start_hz) / last;
                        (0..npoints).map(|i| start_hz + i as f64 * step).collect()
                    }
                    SweepType::Log => {
                        let log_start = start_hz.log10();
                        let log_step = (stop_hz.log10() - log_start) / last;
                        (0..npoints)
                            .map(|i| 10f64.powf(log_start + i as f64 * log_step))
                            .collect()
                    }
                }
            }
        };

        Self { f, sweep_type }
    }

    /// Get frequency vector in Hz
    #[inline]
    pub fn f(&self) -> &[f64] {
        &self.f
    }

    /// Get angular frequency vector in rad/s
    pub fn w(&self) -> Vec<f64> {
        from_hz(&self.f)
    }

    /// Points `s = j*w` on the imaginary axis for every frequency
    pub fn s(&self) -> Vec<Complex64> {
        self.w().into_iter().map(|w| Complex64::new(0.0, w)).collect()
    }

    /// Get the number of frequency points
    #[inline]
    pub fn npoints(&self) -> usize {
        self.f.len()
    }

    /// Get the start frequency in Hz
    #[inline]
    pub fn start(&self) -> f64 {
        *self.f.first().unwrap_or(&0.0)
    }

    /// Get the stop frequency in Hz
    #[inline]
    pub fn stop(&self) -> f64 {
        *self.f.last().unwrap_or(&0.0)
    }

    /// Get the sweep type
    #[inline]
    pub fn sweep_type(&self) -> SweepType {
        self.sweep_type
    }
}

/// Determine a useful frequency range in Hz for a set of zeros and poles
///
/// An explicit `f_range` is validated and returned unchanged. Otherwise the
/// magnitudes of all zeros and poles (rad/s) are converted to Hz, the band
/// between the smallest and largest one is widened by a decade on each side
/// and rounded outward to whole decades. Roots at the origin are ignored; if
/// no root is left the default band `(0.1, 10)` Hz is returned.
pub fn frequency_range(
    zeros: &[Complex64],
    poles: &[Complex64],
    f_range: Option<(f64, f64)>,
) -> Result<(f64, f64)> {
    if let Some(range) = f_range {
        return validate_range(range);
    }

    let (w_min, w_max) = zeros
        .iter()
        .chain(poles.iter())
        .map(|r| r.norm())
        .filter(|w| w.is_finite() && *w > ROOT_MAGNITUDE_TOL)
        .fold((f64::INFINITY, 0.0_f64), |(lo, hi), w| (lo.min(w), hi.max(w)));

    if w_max == 0.0 {
        return Ok((DEFAULT_F_MIN, DEFAULT_F_MAX));
    }

    let f_min = rad_per_s_2_hz(w_min) / FREQUENCY_RANGE_MARGIN;
    let f_max = rad_per_s_2_hz(w_max) * FREQUENCY_RANGE_MARGIN;
    Ok((
        10f64.powf(f_min.log10().floor()),
        10f64.powf(f_max.log10().ceil()),
    ))
}

/// Check that an explicit range is finite, non-negative and increasing
pub fn validate_range((f_min, f_max): (f64, f64)) -> Result<(f64, f64)> {
    if !f_min.is_finite() || !f_max.is_finite() || f_min < 0.0 || f_min >= f_max {
        return Err(ZpkError::invalid(format!(
            "Frequency range must satisfy 0 <= f_min < f_max, but is ({}, {})",
            f_min, f_max
        )));
    }
    Ok((f_min, f_max))
}
