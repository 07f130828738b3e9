//! Numerical constants for zpk calculations
//!
//! Provides standardized tolerance values and defaults used throughout
//! the library.

/// Multiple of machine epsilon used when checking that two roots are
/// complex conjugates of each other.
pub const CONJUGATE_EPS_FACTOR: f64 = 100.0;

/// Lower bound for |denominator(s)| used by frequency response sweeps.
pub const RESPONSE_DEN_MIN: f64 = 1e-10;

/// Default number of frequency intervals (the sweep has one more point).
pub const DEFAULT_RESPONSE_INTERVALS: usize = 200;

/// Roots with a magnitude below this value (rad/s) do not take part in the
/// automatic frequency range selection.
pub const ROOT_MAGNITUDE_TOL: f64 = 1e-10;

/// Frequency band in Hz used when a system has no usable zeros or poles.
pub const DEFAULT_F_MIN: f64 = 0.1;
pub const DEFAULT_F_MAX: f64 = 10.0;

/// Factor by which the automatic range is widened beyond the outermost
/// zero/pole frequency on each side.
pub const FREQUENCY_RANGE_MARGIN: f64 = 10.0;
