//! SISO zeros/poles/gain system

use std::fmt;

use ndarray::{Array1, Array2};
use num_complex::Complex64;

use super::response::{FrequencyResponse, ResponseOptions};
use crate::constants::RESPONSE_DEN_MIN;
use crate::error::{Result, ZpkError};
use crate::frequency;
use crate::math::polynomial::{factor_roots, format_roots, transform_roots_to_poly2};

/// A single input, single output LTI system in zeros/poles/gain form
///
/// Internally the system is always held as real first order factors
/// (`n1`, `d1`, factor `s + a`) and real second order factors (`n2`, `d2`,
/// row `(a, b)` is the factor `s^2 + b*s + a`). The zeros `z` and poles `p`
/// are kept alongside and describe the same transfer function.
///
/// # Example
/// ```
/// use num_complex::Complex64;
/// use zpk_core::ZerosAndPolesSiso;
///
/// // 2 * (s - 1) / ((s + 1 - 2j) * (s + 1 + 2j))
/// let sys = ZerosAndPolesSiso::from_roots(
///     2.0,
///     &[Complex64::new(1.0, 0.0)],
///     &[Complex64::new(-1.0, 2.0), Complex64::new(-1.0, -2.0)],
/// )
/// .unwrap();
///
/// assert_eq!(sys.d2().dim(), (1, 2));
/// let y = sys.evaluate_at_s(0.0, 0.0);
/// assert!((y.re + 0.4).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ZerosAndPolesSiso {
    /// Gain
    k: f64,
    /// Numerator first order factors: s + n1[i]
    n1: Array1<f64>,
    /// Numerator second order factors: s^2 + n2[i,1]*s + n2[i,0]
    n2: Array2<f64>,
    /// Denominator first order factors: s + d1[i]
    d1: Array1<f64>,
    /// Denominator second order factors: s^2 + d2[i,1]*s + d2[i,0]
    d2: Array2<f64>,
    /// Zeros
    z: Array1<Complex64>,
    /// Poles
    p: Array1<Complex64>,
}

impl ZerosAndPolesSiso {
    /// Create a system from gain, zeros and poles
    ///
    /// Real entries (imaginary part exactly zero) become first order factors.
    /// The remaining complex entries are paired in the order they appear and
    /// every pair must be conjugate complex.
    ///
    /// # Errors
    /// `InvalidArgument` if the complex zeros or poles can not be paired.
    pub fn from_roots(k: f64, z: &[Complex64], p: &[Complex64]) -> Result<Self> {
        let (n1, n2) = split_roots("z", z)?;
        let (d1, d2) = split_roots("p", p)?;

        Ok(Self {
            k,
            n1,
            n2,
            d1,
            d2,
            z: Array1::from_vec(z.to_vec()),
            p: Array1::from_vec(p.to_vec()),
        })
    }

    /// Create a system from gain and real first/second order factors
    ///
    /// ```text
    ///            prod(s + n1[i]) * prod(s^2 + n2[i,1]*s + n2[i,0])
    /// y(s) = k * -------------------------------------------------
    ///            prod(s + d1[i]) * prod(s^2 + d2[i,1]*s + d2[i,0])
    /// ```
    ///
    /// Zeros and poles are derived from the factors: first order roots in
    /// factor order, then the root pair of every second order factor.
    ///
    /// # Errors
    /// `InvalidArgument` if `n2` or `d2` does not have exactly two columns.
    pub fn from_factors(
        k: f64,
        n1: Array1<f64>,
        n2: Array2<f64>,
        d1: Array1<f64>,
        d2: Array2<f64>,
    ) -> Result<Self> {
        check_second_order_width("n2", &n2)?;
        check_second_order_width("d2", &d2)?;

        let z = factor_roots(&n1, &n2)?;
        let p = factor_roots(&d1, &d2)?;

        Ok(Self {
            k,
            n1,
            n2,
            d1,
            d2,
            z,
            p,
        })
    }

    /// Gain
    #[inline]
    pub fn gain(&self) -> f64 {
        self.k
    }

    /// Change the gain; zeros, poles and factors stay untouched
    pub fn set_k(&mut self, k: f64) {
        self.k = k;
    }

    /// Return the system with a new gain
    pub fn with_gain(mut self, k: f64) -> Self {
        self.k = k;
        self
    }

    /// Zeros of the transfer function
    #[inline]
    pub fn zeros(&self) -> &Array1<Complex64> {
        &self.z
    }

    /// Poles of the transfer function
    #[inline]
    pub fn poles(&self) -> &Array1<Complex64> {
        &self.p
    }

    #[inline]
    pub fn n1(&self) -> &Array1<f64> {
        &self.n1
    }

    #[inline]
    pub fn n2(&self) -> &Array2<f64> {
        &self.n2
    }

    #[inline]
    pub fn d1(&self) -> &Array1<f64> {
        &self.d1
    }

    #[inline]
    pub fn d2(&self) -> &Array2<f64> {
        &self.d2
    }

    /// Number of poles
    pub fn order(&self) -> usize {
        self.d1.len() + 2 * self.d2.nrows()
    }

    /// Number of poles minus number of zeros
    pub fn relative_degree(&self) -> isize {
        self.order() as isize - (self.n1.len() + 2 * self.n2.nrows()) as isize
    }

    /// Numerator k * prod(factors) at s
    fn numerator(&self, s: Complex64) -> Complex64 {
        eval_factors(Complex64::new(self.k, 0.0), &self.n1, &self.n2, s)
    }

    /// Denominator prod(factors) at s
    fn denominator(&self, s: Complex64) -> Complex64 {
        eval_factors(Complex64::new(1.0, 0.0), &self.d1, &self.d2, s)
    }

    /// Evaluate the transfer function at one point
    ///
    /// If `|denominator(s)| < den_min`, the real value `den_min` is used as
    /// divisor instead and the phase of the denominator is lost.
    /// `den_min = 0.0` disables the floor.
    pub fn evaluate_at_s(&self, s: impl Into<Complex64>, den_min: f64) -> Complex64 {
        let s = s.into();
        let num = self.numerator(s);
        let den = self.denominator(s);
        if den.norm() >= den_min {
            num / den
        } else {
            num / den_min
        }
    }

    /// Evaluate the transfer function at every point of `s`
    ///
    /// See [`evaluate_at_s`](Self::evaluate_at_s) for the meaning of `den_min`.
    pub fn evaluate_at_points(&self, s: &[Complex64], den_min: f64) -> Array1<Complex64> {
        s.iter().map(|&si| self.evaluate_at_s(si, den_min)).collect()
    }

    /// Useful frequency range `(f_min, f_max)` in Hz
    ///
    /// Returns `f_range` unchanged if given (after validation), otherwise the
    /// range is derived from the zeros and poles.
    pub fn frequency_range(&self, f_range: Option<(f64, f64)>) -> Result<(f64, f64)> {
        frequency::frequency_range(&self.z.to_vec(), &self.p.to_vec(), f_range)
    }

    /// Frequency response `y(j*w)` over `opts.n + 1` frequency points
    pub fn frequency_response(&self, opts: &ResponseOptions) -> Result<FrequencyResponse> {
        let range = self.frequency_range(opts.f_range)?;
        let frequency = opts.sweep(range)?;
        let y = self.evaluate_at_points(&frequency.s(), RESPONSE_DEN_MIN);
        Ok(FrequencyResponse { frequency, y })
    }
}

impl fmt::Display for ZerosAndPolesSiso {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "   k = {}", self.k)?;
        writeln!(f, "   z = {}", format_roots(self.z.iter()))?;
        writeln!(f, "   p = {}", format_roots(self.p.iter()))
    }
}

/// Running product of first and second order factors, starting at `init`
fn eval_factors(init: Complex64, r1: &Array1<f64>, r2: &Array2<f64>, s: Complex64) -> Complex64 {
    let mut acc = init;
    for &a in r1.iter() {
        acc *= s + a;
    }
    for row in r2.rows() {
        acc *= (s + row[1]) * s + row[0];
    }
    acc
}

/// Split roots into negated real roots and second order coefficients
///
/// Errors name the argument (`z` or `p`) and carry the full root vector.
fn split_roots(name: &str, roots: &[Complex64]) -> Result<(Array1<f64>, Array2<f64>)> {
    let real: Array1<f64> = roots.iter().filter(|r| r.im == 0.0).map(|r| -r.re).collect();
    let complex: Vec<Complex64> = roots.iter().copied().filter(|r| r.im != 0.0).collect();
    let poly2 = transform_roots_to_poly2(&complex).map_err(|e| match e {
        ZpkError::InvalidArgument(msg) => ZpkError::invalid(format!(
            "{}: {} ({} = {})",
            name,
            msg,
            name,
            format_roots(roots)
        )),
        other => other,
    })?;
    Ok((real, poly2))
}

fn check_second_order_width(name: &str, factors: &Array2<f64>) -> Result<()> {
    if factors.ncols() != 2 {
        return Err(ZpkError::invalid(format!(
            "Second dimension of {} must be 2 and not {} ({} = {})",
            name,
            factors.ncols(),
            name,
            factors
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::arr2;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_from_roots_splits_real_and_complex() {
        let sys = ZerosAndPolesSiso::from_roots(
            1.5,
            &[c(2.0, 3.0), c(-1.0, 0.0), c(2.0, -3.0)],
            &[c(-4.0, 0.0), c(-5.0, 0.0)],
        )
        .unwrap();

        assert_eq!(sys.gain(), 1.5);
        assert_eq!(sys.n1().to_vec(), vec![1.0]);
        assert_eq!(sys.n2().dim(), (1, 2));
        assert_relative_eq!(sys.n2()[[0, 0]], 13.0, epsilon = 1e-12);
        assert_relative_eq!(sys.n2()[[0, 1]], -4.0, epsilon = 1e-12);
        assert_eq!(sys.d1().to_vec(), vec![4.0, 5.0]);
        assert_eq!(sys.d2().dim(), (0, 2));
        assert_eq!(sys.zeros().len(), 3);
        assert_eq!(sys.order(), 2);
        assert_eq!(sys.relative_degree(), -1);
    }

    #[test]
    fn test_from_roots_rejects_unpaired() {
        let err = ZerosAndPolesSiso::from_roots(1.0, &[c(1.0, 2.0)], &[]).unwrap_err();
        assert!(matches!(err, ZpkError::InvalidArgument(_)));
    }

    #[test]
    fn test_from_roots_error_names_argument() {
        let err = ZerosAndPolesSiso::from_roots(1.0, &[], &[c(-3.0, 0.0), c(1.0, 1.0)])
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("Invalid argument: p: Number of roots must be even"));
        assert!(msg.contains("p = [-3+0i, 1+1i]"));

        let err = ZerosAndPolesSiso::from_roots(1.0, &[c(1.0, 2.0), c(1.0, 3.0)], &[])
            .unwrap_err();
        assert!(err.to_string().contains("Invalid argument: z: "));
    }

    #[test]
    fn test_from_factors_derives_roots() {
        let sys = ZerosAndPolesSiso::from_factors(
            2.0,
            Array1::from_vec(vec![2.0]),
            arr2(&[[1.0, 2.0], [2.0, 3.0]]),
            Array1::from_vec(vec![3.0, 4.0]),
            arr2(&[[3.0, 4.0], [5.0, 6.0]]),
        )
        .unwrap();

        // s + 2 -> -2 ; s^2 + 2s + 1 -> -1 (double) ; s^2 + 3s + 2 -> -2, -1
        let z = sys.zeros();
        assert_eq!(z.len(), 5);
        assert_relative_eq!(z[0].re, -2.0, epsilon = 1e-12);
        assert_relative_eq!(z[1].re, -1.0, epsilon = 1e-6);
        assert_relative_eq!(z[2].re, -1.0, epsilon = 1e-6);
        assert_relative_eq!(z[3].re, -2.0, epsilon = 1e-12);
        assert_relative_eq!(z[4].re, -1.0, epsilon = 1e-12);

        // s^2 + 6s + 5 -> -5, -1
        let p = sys.poles();
        assert_eq!(p.len(), 6);
        assert_relative_eq!(p[0].re, -3.0, epsilon = 1e-12);
        assert_relative_eq!(p[1].re, -4.0, epsilon = 1e-12);
        assert_relative_eq!(p[4].re, -5.0, epsilon = 1e-12);
        assert_relative_eq!(p[5].re, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_from_factors_rejects_wrong_width() {
        let err = ZerosAndPolesSiso::from_factors(
            1.0,
            Array1::zeros(0),
            arr2(&[[1.0, 2.0, 3.0]]),
            Array1::zeros(0),
            Array2::zeros((0, 2)),
        )
        .unwrap_err();

        match err {
            ZpkError::InvalidArgument(msg) => {
                assert!(msg.contains("n2"));
                assert!(msg.contains("not 3"));
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = ZerosAndPolesSiso::from_factors(
            1.0,
            Array1::zeros(0),
            Array2::zeros((0, 2)),
            Array1::zeros(0),
            Array2::zeros((1, 1)),
        )
        .unwrap_err();
        assert!(err.to_string().contains("d2"));
    }

    #[test]
    fn test_evaluate_first_order() {
        // 2 / (s + 1) at s = 1 -> 1
        let sys = ZerosAndPolesSiso::from_roots(2.0, &[], &[c(-1.0, 0.0)]).unwrap();
        let y = sys.evaluate_at_s(1.0, 0.0);
        assert_relative_eq!(y.re, 1.0, epsilon = 1e-12);
        assert_relative_eq!(y.im, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_evaluate_points_matches_scalar() {
        let sys = ZerosAndPolesSiso::from_roots(
            3.0,
            &[c(-2.0, 0.0)],
            &[c(-1.0, 1.0), c(-1.0, -1.0)],
        )
        .unwrap();

        let s = [c(0.0, 1.0), c(2.0, 0.0), c(-0.5, 3.0)];
        let y = sys.evaluate_at_points(&s, 0.0);
        assert_eq!(y.len(), 3);
        for (i, &si) in s.iter().enumerate() {
            assert_eq!(y[i], sys.evaluate_at_s(si, 0.0));
        }
    }

    #[test]
    fn test_den_min_floor() {
        // (s - 1) / s at s = 0 -> num(0) / den_min
        let sys = ZerosAndPolesSiso::from_roots(1.0, &[c(1.0, 0.0)], &[c(0.0, 0.0)]).unwrap();
        let y = sys.evaluate_at_s(0.0, 1e-10);
        assert!(y.re.is_finite());
        assert_relative_eq!(y.re, -1e10, max_relative = 1e-12);
        assert_eq!(y.im, 0.0);
    }

    #[test]
    fn test_den_min_inactive_away_from_poles() {
        let sys = ZerosAndPolesSiso::from_roots(1.0, &[], &[c(-1.0, 0.0)]).unwrap();
        assert_eq!(sys.evaluate_at_s(1.0, 1e-10), sys.evaluate_at_s(1.0, 0.0));
    }

    #[test]
    fn test_set_k_keeps_factors() {
        let mut sys = ZerosAndPolesSiso::from_roots(1.0, &[c(-1.0, 0.0)], &[c(-2.0, 0.0)]).unwrap();
        let before = sys.evaluate_at_s(1.0, 0.0);
        sys.set_k(4.0);

        assert_eq!(sys.gain(), 4.0);
        assert_eq!(sys.n1().to_vec(), vec![1.0]);
        assert_eq!(sys.d1().to_vec(), vec![2.0]);
        assert_relative_eq!(sys.evaluate_at_s(1.0, 0.0).re, 4.0 * before.re, epsilon = 1e-12);

        let sys = sys.with_gain(-1.0);
        assert_eq!(sys.gain(), -1.0);
    }

    #[test]
    fn test_display() {
        let sys = ZerosAndPolesSiso::from_roots(2.0, &[c(1.0, 0.0)], &[c(-1.0, 2.0), c(-1.0, -2.0)])
            .unwrap();
        let s = sys.to_string();
        assert!(s.contains("k = 2"));
        assert!(s.contains("z = [1+0i]"));
        assert!(s.contains("p = [-1+2i, -1-2i]"));
    }

    #[test]
    fn test_frequency_response_uses_range() {
        let sys = ZerosAndPolesSiso::from_roots(1.0, &[], &[c(-1.0, 0.0)]).unwrap();
        let opts = ResponseOptions {
            n: 4,
            f_range: Some((1.0, 1e4)),
            ..Default::default()
        };
        let resp = sys.frequency_response(&opts).unwrap();

        assert_eq!(resp.len(), 5);
        assert_relative_eq!(resp.f()[0], 1.0, max_relative = 1e-12);
        assert_relative_eq!(resp.f()[1], 10.0, max_relative = 1e-12);
        assert_relative_eq!(resp.f()[4], 1e4, max_relative = 1e-12);
    }
}
