//! Standardized evaluation kernels
//!
//! Density, cumulative and quantile functions of the standard law
//! (location 0, scale 1), written once over any backend with coefficient
//! tables. The distribution facade applies the affine transform on top.

use tracing::trace;

use crate::interval::Interval;
use crate::selector::{select_doubling, select_exponent, Selection};
use crate::tables::SaSPoint5Tables;
use crate::tail::{inverse_square_law, quantile_asymptote, TailLaw};

/// Probability density at `x`.
///
/// Symmetric in `x`; NaN propagates and `+-inf` gives zero.
pub fn pdf<T: SaSPoint5Tables>(x: T) -> T {
    if x.is_nan() {
        return x;
    }
    let table = T::pdf_table();
    let ax = x.abs();
    select_doubling(table, ax)
        .eval()
        .unwrap_or_else(|| TailLaw::Density.evaluate(&table.tail, ax))
}

/// Upper-tail probability `P(X > x)`.
///
/// Arguments with the sign bit set (including `-0.0`) are reflected:
/// `ccdf(x) = 1 - ccdf(-x)`.
pub fn ccdf<T: SaSPoint5Tables>(x: T) -> T {
    if x.is_nan() {
        return x;
    }
    if x.is_sign_negative() {
        return T::one() - ccdf(-x);
    }
    let table = T::ccdf_table();
    select_doubling(table, x)
        .eval()
        .unwrap_or_else(|| TailLaw::Survival.evaluate(&table.tail, x))
}

/// Cumulative probability on the requested side of `x`
#[inline]
pub fn cdf<T: SaSPoint5Tables>(x: T, interval: Interval) -> T {
    match interval {
        Interval::Lower => ccdf(-x),
        Interval::Upper => ccdf(x),
    }
}

/// Upper-tail quantile `V(p)`, the point with `P(X > V(p)) = p`.
///
/// `V(0) = +inf`, `V(1/2) = 0`, `V(1) = -inf`; values of `p` above one half
/// are reflected through `V(p) = -V(1 - p)`. The caller is responsible for
/// rejecting `p` outside `[0, 1]`.
pub fn upper_quantile<T: SaSPoint5Tables>(p: T) -> T {
    if p.is_nan() {
        return p;
    }
    let half = T::from_f64(0.5);
    if p > half {
        return -upper_quantile(T::one() - p);
    }
    let v = select_exponent(T::quantile_table(), p)
        .eval()
        .unwrap_or_else(|| {
            trace!(backend = T::NAME, p = p.to_f64(), "quantile asymptote");
            quantile_asymptote()
        });
    inverse_square_law(v, p)
}

/// Quantile on the requested side: `-V(p)` for `Lower`, `V(p)` for `Upper`.
///
/// Returns NaN for `p` outside `[0, 1]`.
pub fn quantile<T: SaSPoint5Tables>(p: T, interval: Interval) -> T {
    if !(p >= T::zero() && p <= T::one()) {
        return T::nan();
    }
    let v = upper_quantile(p);
    match interval {
        Interval::Lower => -v,
        Interval::Upper => v,
    }
}

/// Index of the segment that serves `x` in the density table, or `None`
/// for the asymptotic tail. Exposed for diagnostics and tests.
pub fn pdf_segment<T: SaSPoint5Tables>(x: T) -> Option<usize> {
    match select_doubling(T::pdf_table(), x.abs()) {
        Selection::Segment { index, .. } => Some(index),
        Selection::Tail => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use stable_core::DoubleDouble;

    #[test]
    fn test_pdf_at_origin() {
        // f(0) = 2 / pi for this law
        assert_relative_eq!(pdf(0.0), 2.0 / std::f64::consts::PI, max_relative = 1e-15);
        assert_eq!(pdf(0.5), pdf(-0.5));
        assert_eq!(pdf(f64::INFINITY), 0.0);
        assert_eq!(pdf(f64::NEG_INFINITY), 0.0);
        assert!(pdf(f64::NAN).is_nan());
    }

    #[test]
    fn test_ccdf_fixed_points() {
        assert_eq!(ccdf(0.0), 0.5);
        assert_eq!(ccdf(-0.0), 0.5);
        assert_eq!(ccdf(f64::INFINITY), 0.0);
        assert_eq!(ccdf(f64::NEG_INFINITY), 1.0);
        assert!(ccdf(f64::NAN).is_nan());
    }

    #[test]
    fn test_cdf_sides_are_complementary() {
        for &x in &[-100.0, -3.0, -0.2, 0.0, 0.7, 5.0, 1e6] {
            let sum = cdf(x, Interval::Lower) + cdf(x, Interval::Upper);
            assert_relative_eq!(sum, 1.0, max_relative = 4e-16);
        }
    }

    #[test]
    fn test_quantile_fixed_points() {
        assert_eq!(quantile(0.5, Interval::Lower), 0.0);
        assert_eq!(quantile(0.0, Interval::Upper), f64::INFINITY);
        assert_eq!(quantile(0.0, Interval::Lower), f64::NEG_INFINITY);
        assert_eq!(quantile(1.0, Interval::Lower), f64::INFINITY);
        assert!(quantile(-0.1, Interval::Lower).is_nan());
        assert!(quantile(1.1, Interval::Upper).is_nan());
        assert!(quantile(f64::NAN, Interval::Upper).is_nan());
    }

    #[test]
    fn test_quantile_inverts_ccdf() {
        for &x in &[0.01, 0.3, 1.0, 7.5, 50.0, 300.0, 1e5] {
            let p = ccdf(x);
            assert_relative_eq!(upper_quantile(p), x, max_relative = 1e-13);
        }
    }

    #[test]
    fn test_deep_tail_uses_asymptote() {
        let p = 2.0f64.powi(-80);
        let expected = 0.5 / std::f64::consts::PI / (p * p);
        assert_relative_eq!(upper_quantile(p), expected, max_relative = 1e-15);
    }

    #[test]
    fn test_extended_matches_native() {
        for &x in &[0.0, 0.1, 0.9, 3.3, 40.0, 1000.0] {
            let native = pdf(x);
            let extended = pdf(DoubleDouble::from(x)).to_f64();
            assert_relative_eq!(native, extended, max_relative = 1e-14);
        }
        let native = upper_quantile(1e-6);
        let extended = upper_quantile(DoubleDouble::from(1e-6)).to_f64();
        assert_relative_eq!(native, extended, max_relative = 1e-14);
    }

    #[test]
    fn test_pdf_segment_lookup() {
        assert_eq!(pdf_segment(0.1), Some(0));
        assert_eq!(pdf_segment(-3.0), Some(5));
        assert_eq!(pdf_segment(65.0), None);
    }
}
