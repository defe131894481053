//! Numeric backend contract
//!
//! Every special function in the stable-stats crates is written once,
//! generically over [`Numeric`]. A backend supplies field arithmetic, IEEE-754
//! style special values, and the handful of elementary functions the
//! evaluation kernels need (square and cube roots, base-2 logarithm, binary
//! exponent extraction and scaling).
//!
//! Two backends ship with the crate:
//!
//! - `f64`, the native double-precision type
//! - [`DoubleDouble`](crate::DoubleDouble), an unevaluated sum of two `f64`
//!   values carrying roughly 106 significant bits

use num_traits::{One, Zero};
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Arithmetic backend used by the evaluation kernels.
///
/// Semantics follow IEEE-754: NaN propagates, infinities saturate, and
/// `ilogb(0)` returns `i32::MIN`.
pub trait Numeric:
    Copy
    + PartialEq
    + PartialOrd
    + Debug
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Zero
    + One
{
    /// Short name used in logs and reports
    const NAME: &'static str;

    /// Binary exponent magnitude above which `x^(3/2)` is assembled from
    /// `sqrt(x) * x` to avoid overflowing `x^3`.
    const POW3D2_EXPONENT_LIMIT: u32 = 320;

    /// Binary exponent magnitude above which `x^(2/3)` is assembled from
    /// `cbrt(x)^2` to avoid overflowing `x^2`.
    const POW2D3_EXPONENT_LIMIT: u32 = 480;

    /// Unit roundoff of the backend
    fn epsilon() -> Self;

    /// Convert from `f64` (exact for both shipped backends)
    fn from_f64(value: f64) -> Self;

    /// Build a value from a leading part and a correction term.
    ///
    /// Backends narrower than the pair simply add the two.
    fn from_parts(hi: f64, lo: f64) -> Self;

    /// Round to the nearest `f64`
    fn to_f64(self) -> f64;

    fn nan() -> Self;

    fn infinity() -> Self;

    /// `1/pi`
    fn frac_1_pi() -> Self;

    /// `ln 2`
    fn ln_2() -> Self;

    fn sqrt(self) -> Self;

    fn cbrt(self) -> Self;

    fn abs(self) -> Self;

    /// True when the sign bit is set, including for `-0.0`
    fn is_sign_negative(self) -> bool;

    fn is_nan(self) -> bool;

    fn is_infinite(self) -> bool;

    fn is_finite(self) -> bool {
        !self.is_nan() && !self.is_infinite()
    }

    /// Unbiased binary exponent, `floor(log2(|x|))`.
    ///
    /// Returns `i32::MIN` for zero and `i32::MAX` for NaN and infinities.
    fn ilogb(self) -> i32;

    /// Multiply by `2^n` exactly (up to overflow and underflow)
    fn scale_b(self, n: i32) -> Self;

    fn log2(self) -> Self;

    fn ln(self) -> Self {
        self.log2() * Self::ln_2()
    }

    fn recip(self) -> Self {
        Self::one() / self
    }
}

impl Numeric for f64 {
    const NAME: &'static str = "f64";

    #[inline]
    fn epsilon() -> Self {
        f64::EPSILON / 2.0
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn from_parts(hi: f64, lo: f64) -> Self {
        hi + lo
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn nan() -> Self {
        f64::NAN
    }

    #[inline]
    fn infinity() -> Self {
        f64::INFINITY
    }

    #[inline]
    fn frac_1_pi() -> Self {
        std::f64::consts::FRAC_1_PI
    }

    #[inline]
    fn ln_2() -> Self {
        std::f64::consts::LN_2
    }

    #[inline]
    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }

    #[inline]
    fn cbrt(self) -> Self {
        f64::cbrt(self)
    }

    #[inline]
    fn abs(self) -> Self {
        f64::abs(self)
    }

    #[inline]
    fn is_sign_negative(self) -> bool {
        f64::is_sign_negative(self)
    }

    #[inline]
    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }

    #[inline]
    fn is_infinite(self) -> bool {
        f64::is_infinite(self)
    }

    #[inline]
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }

    #[inline]
    fn ilogb(self) -> i32 {
        ilogb_f64(self)
    }

    #[inline]
    fn scale_b(self, n: i32) -> Self {
        scalbn_f64(self, n)
    }

    #[inline]
    fn log2(self) -> Self {
        f64::log2(self)
    }

    #[inline]
    fn ln(self) -> Self {
        f64::ln(self)
    }

    #[inline]
    fn recip(self) -> Self {
        f64::recip(self)
    }
}

const EXP_MASK: u64 = 0x7ff;
const EXP_BIAS: i32 = 1023;
const SIG_BITS: u32 = 52;

/// Binary exponent of an `f64`, handling subnormals.
pub fn ilogb_f64(x: f64) -> i32 {
    let bits = x.to_bits();
    let exp = ((bits >> SIG_BITS) & EXP_MASK) as i32;

    if exp == 0 {
        let sig = bits << (64 - SIG_BITS);
        if sig == 0 {
            return i32::MIN;
        }
        // subnormal: count down past the leading zeros of the significand
        return -EXP_BIAS - sig.leading_zeros() as i32;
    }
    if exp == EXP_MASK as i32 {
        return i32::MAX;
    }
    exp - EXP_BIAS
}

/// `x * 2^n` without forming `2^n` directly.
pub fn scalbn_f64(mut x: f64, mut n: i32) -> f64 {
    let two_pow_1023 = f64::from_bits(0x7fe0_0000_0000_0000);
    // 2^-1022 * 2^53, keeps subnormal results correctly rounded
    let two_pow_m969 = f64::from_bits(0x0010_0000_0000_0000) * f64::from_bits(0x4340_0000_0000_0000);

    if n > 1023 {
        x *= two_pow_1023;
        n -= 1023;
        if n > 1023 {
            x *= two_pow_1023;
            n -= 1023;
            if n > 1023 {
                n = 1023;
            }
        }
    } else if n < -1022 {
        x *= two_pow_m969;
        n += 1022 - 53;
        if n < -1022 {
            x *= two_pow_m969;
            n += 1022 - 53;
            if n < -1022 {
                n = -1022;
            }
        }
    }
    x * f64::from_bits(((EXP_BIAS + n) as u64) << SIG_BITS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ilogb_normal_values() {
        assert_eq!(ilogb_f64(1.0), 0);
        assert_eq!(ilogb_f64(1.5), 0);
        assert_eq!(ilogb_f64(2.0), 1);
        assert_eq!(ilogb_f64(0.75), -1);
        assert_eq!(ilogb_f64(-8.0), 3);
        assert_eq!(ilogb_f64(f64::MAX), 1023);
        assert_eq!(ilogb_f64(f64::MIN_POSITIVE), -1022);
    }

    #[test]
    fn test_ilogb_special_values() {
        assert_eq!(ilogb_f64(0.0), i32::MIN);
        assert_eq!(ilogb_f64(-0.0), i32::MIN);
        assert_eq!(ilogb_f64(f64::INFINITY), i32::MAX);
        assert_eq!(ilogb_f64(f64::NAN), i32::MAX);
        // smallest subnormal
        assert_eq!(ilogb_f64(f64::from_bits(1)), -1074);
        assert_eq!(ilogb_f64(f64::MIN_POSITIVE / 4.0), -1024);
    }

    #[test]
    fn test_scalbn() {
        assert_eq!(scalbn_f64(1.0, 10), 1024.0);
        assert_eq!(scalbn_f64(3.0, -2), 0.75);
        assert_eq!(scalbn_f64(1.0, -1074), f64::from_bits(1));
        assert_eq!(scalbn_f64(f64::from_bits(1), 1074), 1.0);
        assert_eq!(scalbn_f64(1.0, 2000), f64::INFINITY);
        assert_eq!(scalbn_f64(1.0, -2000), 0.0);
        assert_eq!(scalbn_f64(f64::MIN_POSITIVE, 2045), f64::from_bits(0x7fe0_0000_0000_0000));
        assert!(scalbn_f64(f64::NAN, 3).is_nan());
    }

    #[test]
    fn test_f64_backend_basics() {
        assert_eq!(<f64 as Numeric>::NAME, "f64");
        assert_eq!(<f64 as Numeric>::epsilon(), 2.0f64.powi(-53));
        assert_eq!(<f64 as Numeric>::from_parts(1.0, 0.5), 1.5);
        assert_eq!(Numeric::ilogb(1024.0f64), 10);
        assert_eq!(Numeric::scale_b(1.0f64, -3), 0.125);
        assert_eq!(Numeric::log2(8.0f64), 3.0);
        assert!(Numeric::is_sign_negative(-0.0f64));
        assert!(!Numeric::is_finite(f64::INFINITY));
        assert_eq!(<f64 as Numeric>::POW3D2_EXPONENT_LIMIT, 320);
        assert_eq!(<f64 as Numeric>::POW2D3_EXPONENT_LIMIT, 480);
    }

    #[test]
    fn test_generic_code_dispatches_through_trait() {
        fn hypot_like<T: Numeric>(a: T, b: T) -> T {
            (a * a + b * b).sqrt()
        }
        assert_eq!(hypot_like(3.0f64, 4.0), 5.0);
    }
}
