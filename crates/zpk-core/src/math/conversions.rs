//! Unit conversion functions
//!
//! Conversions between frequency units (Hz, rad/s) and between complex
//! numbers and their Bode representation (dB, degrees).

use num_complex::Complex64;
use std::f64::consts::PI;

/// Convert a frequency in Hz to an angular frequency in rad/s
#[inline]
pub fn hz_2_rad_per_s(f: f64) -> f64 {
    2.0 * PI * f
}

/// Convert an angular frequency in rad/s to a frequency in Hz
#[inline]
pub fn rad_per_s_2_hz(w: f64) -> f64 {
    w / (2.0 * PI)
}

/// Convert a vector of frequencies in Hz to angular frequencies in rad/s
pub fn from_hz(f: &[f64]) -> Vec<f64> {
    f.iter().map(|&x| hz_2_rad_per_s(x)).collect()
}

/// Convert complex number to magnitude
pub fn complex_2_magnitude(z: Complex64) -> f64 {
    z.norm()
}

/// Convert complex number to dB (20*log10(|z|))
pub fn complex_2_db(z: Complex64) -> f64 {
    20.0 * z.norm().log10()
}

/// Convert complex number to phase in degrees
pub fn complex_2_degree(z: Complex64) -> f64 {
    radian_2_degree(z.arg())
}

/// Convert radians to degrees
pub fn radian_2_degree(rad: f64) -> f64 {
    rad * 180.0 / PI
}
