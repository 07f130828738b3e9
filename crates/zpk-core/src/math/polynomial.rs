//! Polynomial and root conversion routines
//!
//! Converts between root vectors and real first/second order factors.
//! Polynomial coefficients are given in ascending order, i.e.
//! `[c0, c1, c2]` describes `c0 + c1*s + c2*s^2`.

use ndarray::{Array1, Array2};
use num_complex::Complex64;

use super::linalg;
use crate::constants::CONJUGATE_EPS_FACTOR;
use crate::error::{Result, ZpkError};

/// Transform a vector of conjugate complex roots into the coefficients of
/// real second order polynomials.
///
/// The roots are taken pairwise, `(roots[2j], roots[2j+1])`, and every pair
/// must be conjugate complex. Row `j` of the result holds `(a, b)` of
///
/// ```text
/// (s - roots[2j]) * (s - roots[2j+1]) = s^2 + b*s + a
/// ```
///
/// # Errors
/// `InvalidArgument` if the number of roots is odd or if a pair is not
/// conjugate complex within `100 * f64::EPSILON * max(1, |re|)`.
///
/// # Example
/// ```
/// use num_complex::Complex64;
/// use zpk_core::math::transform_roots_to_poly2;
///
/// let roots = [Complex64::new(1.0, 2.0), Complex64::new(1.0, -2.0)];
/// let c = transform_roots_to_poly2(&roots).unwrap();
/// assert_eq!(c.dim(), (1, 2));
/// assert!((c[[0, 0]] - 5.0).abs() < 1e-12);
/// assert!((c[[0, 1]] + 2.0).abs() < 1e-12);
/// ```
pub fn transform_roots_to_poly2(roots: &[Complex64]) -> Result<Array2<f64>> {
    let nroots = roots.len();
    if nroots % 2 != 0 {
        return Err(ZpkError::invalid(format!(
            "Number of roots must be even, but is {}",
            nroots
        )));
    }

    let eps = CONJUGATE_EPS_FACTOR * f64::EPSILON;
    let all_conjugate = roots
        .chunks_exact(2)
        .all(|pair| is_conjugate_pair(pair[0], pair[1], eps));
    if !all_conjugate {
        return Err(ZpkError::invalid(format!(
            "Vector of roots are not all conjugate complex numbers: roots = {}",
            format_roots(roots)
        )));
    }

    let mut c = Array2::<f64>::zeros((nroots / 2, 2));
    for (j, pair) in roots.chunks_exact(2).enumerate() {
        c[[j, 0]] = (pair[0] * pair[1]).re;
        c[[j, 1]] = (-(pair[0] + pair[1])).re;
    }
    Ok(c)
}

#[inline]
fn is_conjugate_pair(r1: Complex64, r2: Complex64, eps: f64) -> bool {
    (r1.conj() - r2).norm() < eps * r1.re.abs().max(1.0)
}

/// Compute the roots of a real polynomial from its companion matrix
///
/// `coeffs` is in ascending order and its last entry must be nonzero.
/// Roots are sorted by real part, then by imaginary part.
pub fn polyroots(coeffs: &[f64]) -> Result<Vec<Complex64>> {
    let lead = match coeffs.last() {
        Some(&c) if c != 0.0 => c,
        _ => {
            return Err(ZpkError::invalid(format!(
                "Leading polynomial coefficient must be nonzero (coeffs = {:?})",
                coeffs
            )))
        }
    };

    let degree = coeffs.len() - 1;
    let mut roots = match degree {
        0 => Vec::new(),
        1 => vec![Complex64::new(-coeffs[0] / lead, 0.0)],
        _ => {
            // Ones on the subdiagonal, normalized coefficients in the last column
            let companion = Array2::from_shape_fn((degree, degree), |(i, j)| {
                if j == degree - 1 {
                    -coeffs[i] / lead
                } else if i == j + 1 {
                    1.0
                } else {
                    0.0
                }
            });
            linalg::eigenvalues(&companion)?
        }
    };

    roots.sort_by(|a, b| a.re.total_cmp(&b.re).then(a.im.total_cmp(&b.im)));
    Ok(roots)
}

/// Roots of a factorized polynomial
///
/// `r1` describes `(s + r1[0]) * (s + r1[1]) * ...` and every row `(a, b)` of
/// `r2` describes a factor `s^2 + b*s + a`. The first order roots come first,
/// followed by the root pair of each second order factor in row order.
pub fn factor_roots(r1: &Array1<f64>, r2: &Array2<f64>) -> Result<Array1<Complex64>> {
    let mut roots = Vec::with_capacity(r1.len() + 2 * r2.nrows());
    roots.extend(r1.iter().map(|&a| Complex64::new(-a, 0.0)));
    for row in r2.rows() {
        roots.extend(polyroots(&[row[0], row[1], 1.0])?);
    }
    Ok(Array1::from_vec(roots))
}

/// Format a root vector as `[1+2i, 1-2i, ...]` for messages and display
pub(crate) fn format_roots<'a>(roots: impl IntoIterator<Item = &'a Complex64>) -> String {
    let items: Vec<String> = roots.into_iter().map(|r| r.to_string()).collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_transform_two_pairs() {
        let roots = [c(1.0, 2.0), c(1.0, -2.0), c(4.0, -3.0), c(4.0, 3.0)];
        let poly2 = transform_roots_to_poly2(&roots).unwrap();

        assert_eq!(poly2.dim(), (2, 2));
        assert_relative_eq!(poly2[[0, 0]], 5.0, epsilon = 1e-12);
        assert_relative_eq!(poly2[[0, 1]], -2.0, epsilon = 1e-12);
        assert_relative_eq!(poly2[[1, 0]], 25.0, epsilon = 1e-12);
        assert_relative_eq!(poly2[[1, 1]], -8.0, epsilon = 1e-12);
    }

    #[test]
    fn test_transform_empty() {
        let poly2 = transform_roots_to_poly2(&[]).unwrap();
        assert_eq!(poly2.dim(), (0, 2));
    }

    #[test]
    fn test_transform_odd_count() {
        let roots = [c(1.0, 2.0), c(1.0, -2.0), c(3.0, 0.0)];
        let err = transform_roots_to_poly2(&roots).unwrap_err();
        assert!(matches!(err, ZpkError::InvalidArgument(_)));
        assert!(err.to_string().contains("even"));
    }

    #[test]
    fn test_transform_not_conjugate() {
        let roots = [c(1.0, 2.0), c(1.0, -3.0)];
        let err = transform_roots_to_poly2(&roots).unwrap_err();
        match err {
            ZpkError::InvalidArgument(msg) => {
                assert!(msg.contains("not all conjugate"));
                assert!(msg.contains("1-3i"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_transform_tolerance_scales_with_real_part() {
        // 1e3 * 100 * eps ~ 2.2e-11 tolerance
        let roots = [c(1e3, 2.0), c(1e3, -2.0 + 1e-12)];
        assert!(transform_roots_to_poly2(&roots).is_ok());

        let roots = [c(1e3, 2.0), c(1e3, -2.0 + 1e-9)];
        assert!(transform_roots_to_poly2(&roots).is_err());
    }

    #[test]
    fn test_polyroots_complex_pair() {
        // s^2 - 2s + 5 -> 1 +- 2j
        let roots = polyroots(&[5.0, -2.0, 1.0]).unwrap();
        assert_eq!(roots.len(), 2);
        assert_relative_eq!(roots[0].re, 1.0, epsilon = 1e-12);
        assert_relative_eq!(roots[0].im, -2.0, epsilon = 1e-12);
        assert_relative_eq!(roots[1].re, 1.0, epsilon = 1e-12);
        assert_relative_eq!(roots[1].im, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_polyroots_real_roots_sorted() {
        // (s + 1)(s + 3) = s^2 + 4s + 3
        let roots = polyroots(&[3.0, 4.0, 1.0]).unwrap();
        assert_relative_eq!(roots[0].re, -3.0, epsilon = 1e-12);
        assert_relative_eq!(roots[1].re, -1.0, epsilon = 1e-12);
        assert_relative_eq!(roots[0].im, 0.0, epsilon = 1e-12);
        assert_relative_eq!(roots[1].im, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_polyroots_low_degree() {
        assert!(polyroots(&[2.0]).unwrap().is_empty());
        let r = polyroots(&[4.0, 2.0]).unwrap();
        assert_relative_eq!(r[0].re, -2.0);
        assert!(polyroots(&[1.0, 0.0]).is_err());
        assert!(polyroots(&[]).is_err());
    }

    #[test]
    fn test_poly2_roots_reproduce_input() {
        let roots = [c(1.0, 2.0), c(1.0, -2.0), c(4.0, -3.0), c(4.0, 3.0)];
        let poly2 = transform_roots_to_poly2(&roots).unwrap();

        let r1 = polyroots(&[poly2[[0, 0]], poly2[[0, 1]], 1.0]).unwrap();
        let r2 = polyroots(&[poly2[[1, 0]], poly2[[1, 1]], 1.0]).unwrap();
        assert_relative_eq!(r1[1].re, 1.0, epsilon = 1e-10);
        assert_relative_eq!(r1[1].im, 2.0, epsilon = 1e-10);
        assert_relative_eq!(r2[0].re, 4.0, epsilon = 1e-10);
        assert_relative_eq!(r2[0].im, -3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_factor_roots_order() {
        let r1 = Array1::from_vec(vec![2.0, -3.0]);
        let r2 = Array2::from_shape_vec((1, 2), vec![5.0, -2.0]).unwrap();
        let roots = factor_roots(&r1, &r2).unwrap();

        assert_eq!(roots.len(), 4);
        assert_eq!(roots[0], c(-2.0, 0.0));
        assert_eq!(roots[1], c(3.0, 0.0));
        assert_relative_eq!(roots[2].im, -2.0, epsilon = 1e-12);
        assert_relative_eq!(roots[3].im, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_format_roots() {
        let s = format_roots(&[c(1.0, 2.0), c(1.0, -2.0)]);
        assert_eq!(s, "[1+2i, 1-2i]");
    }
}
