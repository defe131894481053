//! Location-scale distribution object

use serde::{Deserialize, Serialize};
use stable_core::{square, Error, Numeric, Result};
use std::fmt;
use tracing::debug;

use crate::interval::Interval;
use crate::kernels;
use crate::tables::SaSPoint5Tables;

/// `3.63992444568030649573`, the differential entropy of the standard law
const ENTROPY_BASE: (f64, f64) = (3.6399244456803066, -1.0150945063888095e-16);

/// Symmetric alpha-stable distribution with `alpha = 1/2`, `beta = 0`
///
/// Evaluation is generic over the numeric backend: `SaSPoint5<f64>` is the
/// fast native distribution, `SaSPoint5<DoubleDouble>` the extended-precision
/// reference.
///
/// # Example
///
/// ```rust
/// use stable_saspoint5::{Interval, SaSPoint5};
///
/// let dist = SaSPoint5::new(1.0, 2.0).unwrap();
/// assert_eq!(dist.cdf(1.0, Interval::Lower), 0.5);
/// assert_eq!(dist.quantile(0.5, Interval::Lower), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaSPoint5<T: Numeric = f64> {
    location: T,
    scale: T,
    inv_scale: T,
}

impl<T: SaSPoint5Tables> SaSPoint5<T> {
    /// Create a distribution with the given location and scale.
    ///
    /// Fails when `location` is not finite or `scale` is not finite and
    /// strictly positive.
    pub fn new(location: T, scale: T) -> Result<Self> {
        if !location.is_finite() {
            debug!(location = location.to_f64(), "rejected location parameter");
            return Err(Error::invalid_location(location.to_f64()));
        }
        if !(scale > T::zero() && scale.is_finite()) {
            debug!(scale = scale.to_f64(), "rejected scale parameter");
            return Err(Error::invalid_scale(scale.to_f64()));
        }
        Ok(Self {
            location,
            scale,
            inv_scale: scale.recip(),
        })
    }

    /// Centered distribution with the given scale
    pub fn with_scale(scale: T) -> Result<Self> {
        Self::new(T::zero(), scale)
    }

    /// Location 0, scale 1
    pub fn standard() -> Self {
        Self {
            location: T::zero(),
            scale: T::one(),
            inv_scale: T::one(),
        }
    }

    pub fn location(&self) -> T {
        self.location
    }

    pub fn scale(&self) -> T {
        self.scale
    }

    #[inline]
    fn standardize(&self, x: T) -> T {
        (x - self.location) * self.inv_scale
    }

    /// Probability density at `x`
    pub fn pdf(&self, x: T) -> T {
        let u = self.standardize(x);
        if u.is_nan() {
            return T::nan();
        }
        if u.is_infinite() {
            return T::zero();
        }
        kernels::pdf(u) * self.inv_scale
    }

    /// `P(X <= x)` for [`Interval::Lower`], `P(X > x)` for [`Interval::Upper`]
    pub fn cdf(&self, x: T, interval: Interval) -> T {
        let u = self.standardize(x);
        if u.is_nan() {
            return T::nan();
        }
        kernels::cdf(u, interval)
    }

    /// Point at which [`cdf`](Self::cdf) on the same side equals `p`.
    ///
    /// `p` outside `[0, 1]` (or NaN) yields NaN.
    pub fn quantile(&self, p: T, interval: Interval) -> T {
        if !(p >= T::zero() && p <= T::one()) {
            return T::nan();
        }
        let v = kernels::upper_quantile(p);
        match interval {
            Interval::Lower => self.location - self.scale * v,
            Interval::Upper => self.location + self.scale * v,
        }
    }

    pub fn is_symmetric(&self) -> bool {
        true
    }

    pub fn median(&self) -> T {
        self.location
    }

    pub fn mode(&self) -> T {
        self.location
    }

    /// Undefined for this law
    pub fn mean(&self) -> T {
        T::nan()
    }

    /// Undefined for this law
    pub fn variance(&self) -> T {
        T::nan()
    }

    /// Undefined for this law
    pub fn skewness(&self) -> T {
        T::nan()
    }

    /// Undefined for this law
    pub fn kurtosis(&self) -> T {
        T::nan()
    }

    /// Differential entropy, `H(standard) + ln(scale)`
    pub fn entropy(&self) -> T {
        T::from_parts(ENTROPY_BASE.0, ENTROPY_BASE.1) + self.scale.ln()
    }

    /// Stability index
    pub fn alpha(&self) -> T {
        T::from_f64(0.5)
    }

    /// Skewness parameter
    pub fn beta(&self) -> T {
        T::zero()
    }

    pub fn formula(&self) -> &'static str {
        "p(x; mu, c) := stable_distribution(x; alpha = 1/2, beta = 0, mu, c)"
    }

    /// Distribution of `X + Y` for independent `X ~ self`, `Y ~ other`
    pub fn convolve(&self, other: &Self) -> Result<Self> {
        Self::new(self.location + other.location, self.combined_scale(other))
    }

    /// Distribution of `X - Y` for independent `X ~ self`, `Y ~ other`
    pub fn difference(&self, other: &Self) -> Result<Self> {
        Self::new(self.location - other.location, self.combined_scale(other))
    }

    fn combined_scale(&self, other: &Self) -> T {
        square(self.scale.sqrt() + other.scale.sqrt())
    }

    /// Distribution of `X + s`
    pub fn shift(&self, s: T) -> Result<Self> {
        Self::new(self.location + s, self.scale)
    }

    /// Distribution of `k X`; `k` must be positive
    pub fn scale_by(&self, k: T) -> Result<Self> {
        Self::new(self.location * k, self.scale * k)
    }

    /// Distribution of `X / k`; `k` must be positive
    pub fn divide_by(&self, k: T) -> Result<Self> {
        Self::new(self.location / k, self.scale / k)
    }

    /// Parameters as a serializable record, rounded to `f64`
    pub fn params(&self) -> SaSPoint5Params {
        SaSPoint5Params {
            location: self.location.to_f64(),
            scale: self.scale.to_f64(),
        }
    }
}

impl<T: SaSPoint5Tables> Default for SaSPoint5<T> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<T: SaSPoint5Tables> fmt::Display for SaSPoint5<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SaSPoint5[location={}, scale={}]",
            self.location.to_f64(),
            self.scale.to_f64()
        )
    }
}

/// Serializable distribution parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SaSPoint5Params {
    pub location: f64,
    pub scale: f64,
}

impl Default for SaSPoint5Params {
    fn default() -> Self {
        Self {
            location: 0.0,
            scale: 1.0,
        }
    }
}

impl<T: SaSPoint5Tables> TryFrom<SaSPoint5Params> for SaSPoint5<T> {
    type Error = Error;

    fn try_from(params: SaSPoint5Params) -> Result<Self> {
        Self::new(T::from_f64(params.location), T::from_f64(params.scale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use stable_core::DoubleDouble;

    #[test]
    fn test_construction_validation() {
        assert!(SaSPoint5::new(0.0, 1.0).is_ok());
        assert!(SaSPoint5::new(f64::NAN, 1.0).is_err());
        assert!(SaSPoint5::new(f64::INFINITY, 1.0).is_err());
        assert!(SaSPoint5::new(0.0, 0.0).is_err());
        assert!(SaSPoint5::new(0.0, -1.0).is_err());
        assert!(SaSPoint5::new(0.0, f64::INFINITY).is_err());
        assert!(SaSPoint5::new(0.0, f64::NAN).is_err());
        assert!(SaSPoint5::<f64>::with_scale(3.0).is_ok());

        let err = SaSPoint5::new(0.0, -1.0).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[test]
    fn test_default_is_standard() {
        let dist: SaSPoint5 = SaSPoint5::default();
        assert_eq!(dist.location(), 0.0);
        assert_eq!(dist.scale(), 1.0);
        assert_eq!(dist.cdf(0.0, Interval::Lower), 0.5);
        assert_eq!(dist.quantile(0.5, Interval::Lower), 0.0);
        assert_eq!(dist.cdf(f64::INFINITY, Interval::Lower), 1.0);
        assert_eq!(dist.cdf(f64::INFINITY, Interval::Upper), 0.0);
    }

    #[test]
    fn test_affine_transform() {
        let dist = SaSPoint5::new(2.0, 3.0).unwrap();
        let standard = SaSPoint5::<f64>::standard();
        assert_relative_eq!(dist.pdf(5.0), standard.pdf(1.0) / 3.0, max_relative = 1e-15);
        assert_relative_eq!(
            dist.cdf(-1.0, Interval::Lower),
            standard.cdf(-1.0, Interval::Lower),
            max_relative = 1e-15
        );
        let p = 0.1;
        assert_relative_eq!(
            dist.quantile(p, Interval::Upper),
            2.0 + 3.0 * standard.quantile(p, Interval::Upper),
            max_relative = 1e-15
        );
        assert_relative_eq!(
            dist.quantile(p, Interval::Lower) - 2.0,
            2.0 - dist.quantile(p, Interval::Upper),
            max_relative = 1e-14
        );
    }

    #[test]
    fn test_non_finite_inputs() {
        let dist = SaSPoint5::new(1.0, 0.5).unwrap();
        assert!(dist.pdf(f64::NAN).is_nan());
        assert_eq!(dist.pdf(f64::INFINITY), 0.0);
        assert_eq!(dist.pdf(f64::NEG_INFINITY), 0.0);
        assert!(dist.cdf(f64::NAN, Interval::Upper).is_nan());
        assert_eq!(dist.cdf(f64::NEG_INFINITY, Interval::Lower), 0.0);
        assert!(dist.quantile(1.5, Interval::Lower).is_nan());
        assert!(dist.quantile(-1e-300, Interval::Lower).is_nan());
        assert_eq!(dist.quantile(0.0, Interval::Lower), f64::NEG_INFINITY);
        assert_eq!(dist.quantile(1.0, Interval::Lower), f64::INFINITY);
    }

    #[test]
    fn test_descriptive_statistics() {
        let dist = SaSPoint5::new(-4.0, 2.0).unwrap();
        assert_eq!(dist.median(), -4.0);
        assert_eq!(dist.mode(), -4.0);
        assert!(dist.mean().is_nan());
        assert!(dist.variance().is_nan());
        assert!(dist.skewness().is_nan());
        assert!(dist.kurtosis().is_nan());
        assert!(dist.is_symmetric());
        assert_eq!(dist.alpha(), 0.5);
        assert_eq!(dist.beta(), 0.0);
        assert_relative_eq!(
            dist.entropy(),
            3.63992444568030649573 + 2.0f64.ln(),
            max_relative = 1e-15
        );
        assert!(dist.formula().contains("alpha = 1/2"));
    }

    #[test]
    fn test_closure_operations() {
        let a = SaSPoint5::new(1.0, 4.0).unwrap();
        let b = SaSPoint5::new(2.0, 9.0).unwrap();

        let sum = a.convolve(&b).unwrap();
        assert_eq!(sum.location(), 3.0);
        assert_eq!(sum.scale(), 25.0);

        let diff = a.difference(&b).unwrap();
        assert_eq!(diff.location(), -1.0);
        assert_eq!(diff.scale(), 25.0);

        let shifted = a.shift(-1.5).unwrap();
        assert_eq!(shifted.location(), -0.5);
        assert_eq!(shifted.scale(), 4.0);

        let scaled = a.scale_by(3.0).unwrap();
        assert_eq!((scaled.location(), scaled.scale()), (3.0, 12.0));

        let divided = a.divide_by(2.0).unwrap();
        assert_eq!((divided.location(), divided.scale()), (0.5, 2.0));

        assert!(a.scale_by(-1.0).is_err());
        assert!(a.divide_by(0.0).is_err());
        assert!(a.shift(f64::INFINITY).is_err());
    }

    #[test]
    fn test_display() {
        let dist = SaSPoint5::new(1.5, 2.0).unwrap();
        assert_eq!(dist.to_string(), "SaSPoint5[location=1.5, scale=2]");
    }

    #[test]
    fn test_params_round_trip() {
        let params = SaSPoint5Params {
            location: -0.25,
            scale: 8.0,
        };
        let json = serde_json::to_string(&params).unwrap();
        let back: SaSPoint5Params = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);

        let dist = SaSPoint5::<f64>::try_from(back).unwrap();
        assert_eq!(dist.params(), params);

        let bad = SaSPoint5Params {
            location: 0.0,
            scale: -2.0,
        };
        assert!(SaSPoint5::<f64>::try_from(bad).is_err());
        assert_eq!(SaSPoint5Params::default(), SaSPoint5::<f64>::standard().params());
    }

    #[test]
    fn test_extended_backend_facade() {
        let dist = SaSPoint5::<DoubleDouble>::new(DoubleDouble::from(1.0), DoubleDouble::from(2.0))
            .unwrap();
        let native = SaSPoint5::new(1.0, 2.0).unwrap();
        for &x in &[-50.0, -1.0, 0.3, 1.0, 7.0, 200.0] {
            assert_relative_eq!(
                dist.pdf(DoubleDouble::from(x)).to_f64(),
                native.pdf(x),
                max_relative = 1e-14
            );
            assert_relative_eq!(
                dist.cdf(DoubleDouble::from(x), Interval::Upper).to_f64(),
                native.cdf(x, Interval::Upper),
                max_relative = 1e-14
            );
        }
        let entropy = dist.entropy().to_f64();
        assert_relative_eq!(entropy, native.entropy(), max_relative = 1e-15);

        let centered =
            SaSPoint5::<DoubleDouble>::new(DoubleDouble::from(-0.0), DoubleDouble::ONE).unwrap();
        assert_eq!(centered.to_string(), "SaSPoint5[location=-0, scale=1]");
        assert!(centered.params().location.is_sign_negative());
    }
}
