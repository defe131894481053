//! Double-double arithmetic
//!
//! A [`DoubleDouble`] is the unevaluated sum `hi + lo` of two `f64` values
//! with `|lo| <= ulp(hi) / 2`. It carries about 106 significant bits while
//! keeping the exponent range of `f64`, which is why the power-function
//! thresholds of [`Numeric`] are shared with the native backend.
//!
//! Error-free transforms follow Dekker and Knuth. Products use fused
//! multiply-add for the exact low part.

use crate::error::Error;
use crate::numeric::{ilogb_f64, scalbn_f64, Numeric};
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

/// Extended-precision value stored as `hi + lo`
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DoubleDouble {
    pub hi: f64,
    pub lo: f64,
}

/// Terms of the `atanh` series used by `log2`; enough for `|t| <= 3 - 2*sqrt(2)`.
const LOG2_SERIES_TERMS: u32 = 22;

/// Significant decimal digits retained while parsing
const MAX_PARSE_DIGITS: usize = 36;

impl DoubleDouble {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 0.0);
    /// `2^-104`
    pub const EPSILON: Self = Self::new(4.930380657631324e-32, 0.0);
    pub const PI: Self = Self::new(3.141592653589793, 1.2246467991473532e-16);
    pub const FRAC_1_PI: Self = Self::new(0.3183098861837907, -1.9678676675182486e-17);
    pub const LN_2: Self = Self::new(0.6931471805599453, 2.3190468138462996e-17);
    pub const LOG2_E: Self = Self::new(1.4426950408889634, 2.0355273740931033e-17);
    pub const SQRT_2: Self = Self::new(1.4142135623730951, -9.667293313452913e-17);

    /// Build from an already normalized pair
    #[inline]
    pub const fn new(hi: f64, lo: f64) -> Self {
        Self { hi, lo }
    }

    /// `a + b` with the rounding error captured in `lo`
    #[inline]
    pub fn from_exact_add(a: f64, b: f64) -> Self {
        let s = a + b;
        let bb = s - a;
        let err = (a - (s - bb)) + (b - bb);
        Self::new(s, err)
    }

    /// Fast two-sum, valid when `|a| >= |b|` or `a == 0`
    #[inline]
    pub fn from_fast_add(a: f64, b: f64) -> Self {
        let s = a + b;
        let err = b - (s - a);
        Self::new(s, err)
    }

    /// `a * b` with the rounding error captured in `lo`
    #[inline]
    pub fn from_exact_mult(a: f64, b: f64) -> Self {
        let p = a * b;
        let err = a.mul_add(b, -p);
        Self::new(p, err)
    }

    /// Nearest `f64`; a zero keeps the sign of its leading word
    #[inline]
    pub fn to_f64(self) -> f64 {
        if self.lo == 0.0 {
            self.hi
        } else {
            self.hi + self.lo
        }
    }

    #[inline]
    fn non_finite(value: f64) -> Self {
        Self::new(value, 0.0)
    }

    /// Product with a plain `f64`
    pub fn mul_f64(self, b: f64) -> Self {
        let p = Self::from_exact_mult(self.hi, b);
        if !p.hi.is_finite() {
            return Self::non_finite(p.hi);
        }
        Self::from_fast_add(p.hi, p.lo + self.lo * b)
    }

    fn add_dd(self, rhs: Self) -> Self {
        let s = Self::from_exact_add(self.hi, rhs.hi);
        if !s.hi.is_finite() {
            return Self::non_finite(s.hi);
        }
        let t = Self::from_exact_add(self.lo, rhs.lo);
        let s = Self::from_fast_add(s.hi, s.lo + t.hi);
        Self::from_fast_add(s.hi, s.lo + t.lo)
    }

    fn mul_dd(self, rhs: Self) -> Self {
        let p = Self::from_exact_mult(self.hi, rhs.hi);
        if !p.hi.is_finite() || p.hi == 0.0 {
            return Self::non_finite(p.hi);
        }
        let cross = self.hi * rhs.lo + self.lo * rhs.hi;
        Self::from_fast_add(p.hi, p.lo + cross)
    }

    fn div_dd(self, rhs: Self) -> Self {
        let q1 = self.hi / rhs.hi;
        if !q1.is_finite() || q1 == 0.0 {
            return Self::non_finite(q1);
        }
        let r = self - rhs.mul_f64(q1);
        let q2 = r.hi / rhs.hi;
        let r = r - rhs.mul_f64(q2);
        let q3 = r.hi / rhs.hi;
        Self::from_fast_add(q1, q2) + Self::from(q3)
    }

    /// Square root, one Newton step from the `f64` estimate
    pub fn sqrt(self) -> Self {
        if self.hi <= 0.0 || !self.hi.is_finite() {
            // zero keeps its sign; negatives and NaN give NaN
            return Self::non_finite(self.hi.sqrt());
        }
        let s = self.hi.sqrt();
        let residual = self - Self::from_exact_mult(s, s);
        Self::from_fast_add(s, residual.hi / (2.0 * s))
    }

    /// Cube root, one Newton step from the `f64` estimate
    pub fn cbrt(self) -> Self {
        if self.hi == 0.0 || !self.hi.is_finite() {
            return Self::non_finite(self.hi.cbrt());
        }
        let c = self.hi.cbrt();
        let cube = Self::from_exact_mult(c, c).mul_f64(c);
        let residual = self - cube;
        Self::from_fast_add(c, residual.hi / (3.0 * c * c))
    }

    /// Base-2 logarithm.
    ///
    /// Splits `x = m * 2^e` with `m` in `[sqrt(1/2), sqrt(2))` and sums
    /// `log2(m) = 2 log2(e) atanh((m - 1) / (m + 1))`.
    pub fn log2(self) -> Self {
        if self.hi.is_nan() || self.hi < 0.0 {
            return Self::non_finite(f64::NAN);
        }
        if self.hi == 0.0 {
            return Self::non_finite(f64::NEG_INFINITY);
        }
        if self.hi.is_infinite() {
            return Self::non_finite(f64::INFINITY);
        }

        let mut e = self.ilogb();
        let mut m = self.scale_b(-e);
        if m > Self::SQRT_2 {
            m = m.scale_b(-1);
            e += 1;
        }

        let t = (m - Self::ONE) / (m + Self::ONE);
        let t2 = t * t;
        let mut acc = Self::ZERO;
        for k in (0..LOG2_SERIES_TERMS).rev() {
            let coef = Self::ONE / Self::from(f64::from(2 * k + 1));
            acc = acc * t2 + coef;
        }
        Self::from(f64::from(e)) + (Self::LOG2_E * t * acc).scale_b(1)
    }

    /// Binary exponent of the represented value, not merely of `hi`.
    ///
    /// When `hi` is an exact power of two and `lo` pulls the sum below it,
    /// the exponent drops by one.
    pub fn ilogb(self) -> i32 {
        let e = ilogb_f64(self.hi);
        if e == i32::MIN || e == i32::MAX {
            return e;
        }
        let power_of_two = self.hi.to_bits() & ((1u64 << 52) - 1) == 0;
        if power_of_two && self.lo != 0.0 && self.lo.is_sign_negative() != self.hi.is_sign_negative() {
            e - 1
        } else {
            e
        }
    }

    /// Multiply by `2^n`
    pub fn scale_b(self, n: i32) -> Self {
        Self::new(scalbn_f64(self.hi, n), scalbn_f64(self.lo, n))
    }

    pub fn abs(self) -> Self {
        if self.hi.is_sign_negative() {
            -self
        } else {
            self
        }
    }

    fn powi_u32(self, mut n: u32) -> Self {
        let mut base = self;
        let mut acc = Self::ONE;
        while n > 0 {
            if n & 1 == 1 {
                acc = acc * base;
            }
            base = base * base;
            n >>= 1;
        }
        acc
    }
}

impl From<f64> for DoubleDouble {
    #[inline]
    fn from(value: f64) -> Self {
        Self::new(value, 0.0)
    }
}

impl From<DoubleDouble> for f64 {
    #[inline]
    fn from(value: DoubleDouble) -> Self {
        value.to_f64()
    }
}

impl Add for DoubleDouble {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.add_dd(rhs)
    }
}

impl Sub for DoubleDouble {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.add_dd(-rhs)
    }
}

impl Mul for DoubleDouble {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_dd(rhs)
    }
}

impl Div for DoubleDouble {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        self.div_dd(rhs)
    }
}

impl Neg for DoubleDouble {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.hi, -self.lo)
    }
}

impl PartialOrd for DoubleDouble {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.hi.partial_cmp(&other.hi)? {
            Ordering::Equal => self.lo.partial_cmp(&other.lo),
            ord => Some(ord),
        }
    }
}

impl Zero for DoubleDouble {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.hi == 0.0
    }
}

impl One for DoubleDouble {
    fn one() -> Self {
        Self::ONE
    }
}

/// Formats the nearest `f64`; use the `hi`/`lo` fields for the full value.
impl fmt::Display for DoubleDouble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_f64(), f)
    }
}

impl FromStr for DoubleDouble {
    type Err = Error;

    /// Parse a decimal literal such as `-1.25e-3` to full double-double
    /// precision. `inf`, `infinity` and `nan` are accepted in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let (negative, body) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };

        let lowered = body.to_ascii_lowercase();
        if lowered == "inf" || lowered == "infinity" {
            let v = Self::non_finite(f64::INFINITY);
            return Ok(if negative { -v } else { v });
        }
        if lowered == "nan" {
            return Ok(Self::non_finite(f64::NAN));
        }

        let (mantissa, exponent) = match body.find(|c: char| c == 'e' || c == 'E') {
            Some(pos) => {
                let exp: i32 = body[pos + 1..]
                    .parse()
                    .map_err(|_| Error::malformed_literal(s))?;
                (&body[..pos], exp)
            }
            None => (body, 0),
        };

        let ten = Self::from(10.0);
        let mut value = Self::ZERO;
        let mut digits = 0usize;
        let mut seen_digit = false;
        let mut seen_point = false;
        let mut decimal_shift: i32 = 0;

        for c in mantissa.chars() {
            match c {
                '0'..='9' => {
                    seen_digit = true;
                    let d = f64::from(c as u8 - b'0');
                    if digits < MAX_PARSE_DIGITS {
                        if digits > 0 || d != 0.0 {
                            digits += 1;
                        }
                        value = value * ten + Self::from(d);
                        if seen_point {
                            decimal_shift -= 1;
                        }
                    } else if !seen_point {
                        decimal_shift += 1;
                    }
                }
                '.' if !seen_point => seen_point = true,
                _ => return Err(Error::malformed_literal(s)),
            }
        }
        if !seen_digit {
            return Err(Error::malformed_literal(s));
        }

        let total = exponent.saturating_add(decimal_shift);
        if total != 0 && !value.is_zero() {
            let scale = ten.powi_u32(total.unsigned_abs());
            value = if total > 0 { value * scale } else { value / scale };
        }
        Ok(if negative { -value } else { value })
    }
}

impl Numeric for DoubleDouble {
    const NAME: &'static str = "double-double";

    fn epsilon() -> Self {
        Self::EPSILON
    }

    fn from_f64(value: f64) -> Self {
        Self::from(value)
    }

    fn from_parts(hi: f64, lo: f64) -> Self {
        Self::from_exact_add(hi, lo)
    }

    fn to_f64(self) -> f64 {
        DoubleDouble::to_f64(self)
    }

    fn nan() -> Self {
        Self::non_finite(f64::NAN)
    }

    fn infinity() -> Self {
        Self::non_finite(f64::INFINITY)
    }

    fn frac_1_pi() -> Self {
        Self::FRAC_1_PI
    }

    fn ln_2() -> Self {
        Self::LN_2
    }

    fn sqrt(self) -> Self {
        DoubleDouble::sqrt(self)
    }

    fn cbrt(self) -> Self {
        DoubleDouble::cbrt(self)
    }

    fn abs(self) -> Self {
        DoubleDouble::abs(self)
    }

    fn is_sign_negative(self) -> bool {
        self.hi.is_sign_negative()
    }

    fn is_nan(self) -> bool {
        self.hi.is_nan()
    }

    fn is_infinite(self) -> bool {
        self.hi.is_infinite()
    }

    fn ilogb(self) -> i32 {
        DoubleDouble::ilogb(self)
    }

    fn scale_b(self, n: i32) -> Self {
        DoubleDouble::scale_b(self, n)
    }

    fn log2(self) -> Self {
        DoubleDouble::log2(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rel_err(a: DoubleDouble, b: DoubleDouble) -> f64 {
        ((a - b) / b).abs().to_f64()
    }

    #[test]
    fn test_exact_transforms() {
        let s = DoubleDouble::from_exact_add(1.0, 1e-20);
        assert_eq!(s.hi, 1.0);
        assert_eq!(s.lo, 1e-20);

        let p = DoubleDouble::from_exact_mult(1.0 + f64::EPSILON, 1.0 + f64::EPSILON);
        assert_eq!(p.hi, 1.0 + 2.0 * f64::EPSILON);
        assert_eq!(p.lo, f64::EPSILON * f64::EPSILON);
    }

    #[test]
    fn test_arithmetic_identities() {
        let third = DoubleDouble::ONE / DoubleDouble::from(3.0);
        assert_eq!(third.hi, 1.0 / 3.0);
        assert!(rel_err(third, DoubleDouble::new(0.3333333333333333, 1.850371707708594e-17)) < 1e-30);
        assert!(rel_err(third * DoubleDouble::from(3.0), DoubleDouble::ONE) < 1e-30);

        let x = DoubleDouble::new(1.0, 1e-20);
        assert_eq!((x - DoubleDouble::ONE).to_f64(), 1e-20);
    }

    #[test]
    fn test_sqrt_and_cbrt() {
        let two = DoubleDouble::from(2.0);
        let r = two.sqrt();
        assert!(rel_err(r, DoubleDouble::SQRT_2) < 1e-30);
        assert!(rel_err(r * r, two) < 1e-30);

        let c = two.cbrt();
        assert!(rel_err(c, DoubleDouble::new(1.2599210498948732, -2.589933375300507e-17)) < 1e-30);
        assert!(rel_err(c * c * c, two) < 1e-30);

        assert_eq!(DoubleDouble::from(-8.0).cbrt().to_f64(), -2.0);
        assert!(DoubleDouble::from(-1.0).sqrt().hi.is_nan());
        assert_eq!(DoubleDouble::ZERO.sqrt(), DoubleDouble::ZERO);
    }

    #[test]
    fn test_log2() {
        let l3 = DoubleDouble::from(3.0).log2();
        assert!(rel_err(l3, DoubleDouble::new(1.584962500721156, 1.0579781240112554e-16)) < 1e-30);

        assert_eq!(DoubleDouble::from(1024.0).log2(), DoubleDouble::from(10.0));
        assert_eq!(DoubleDouble::from(0.125).log2(), DoubleDouble::from(-3.0));
        assert_eq!(DoubleDouble::ZERO.log2().hi, f64::NEG_INFINITY);
        assert!(DoubleDouble::from(-1.0).log2().hi.is_nan());

        let ln2 = Numeric::ln(DoubleDouble::from(2.0));
        assert!(rel_err(ln2, DoubleDouble::LN_2) < 1e-30);
    }

    #[test]
    fn test_ilogb_accounts_for_low_part() {
        assert_eq!(DoubleDouble::from(1.0).ilogb(), 0);
        assert_eq!(DoubleDouble::new(1.0, -1e-20).ilogb(), -1);
        assert_eq!(DoubleDouble::new(1.0, 1e-20).ilogb(), 0);
        assert_eq!(DoubleDouble::new(-4.0, 1e-20).ilogb(), 1);
        assert_eq!(DoubleDouble::ZERO.ilogb(), i32::MIN);
    }

    #[test]
    fn test_non_finite_special_cases() {
        let inf = <DoubleDouble as Numeric>::infinity();
        assert_eq!((inf * DoubleDouble::from(2.0)).hi, f64::INFINITY);
        assert!((inf - inf).hi.is_nan());
        assert_eq!((DoubleDouble::ONE / inf).hi, 0.0);
        assert_eq!((DoubleDouble::ONE / DoubleDouble::ZERO).hi, f64::INFINITY);
        assert!((DoubleDouble::ZERO * inf).hi.is_nan());
        assert_eq!(DoubleDouble::from(f64::MAX) * DoubleDouble::from(2.0), inf);
    }

    #[test]
    fn test_signed_zero_survives_rounding() {
        let neg = <DoubleDouble as Numeric>::from_f64(-0.0);
        assert!(neg.to_f64().is_sign_negative());
        assert!(f64::from(neg).is_sign_negative());
        assert!(<DoubleDouble as Numeric>::is_sign_negative(neg));
        assert_eq!(neg.to_string(), "-0");

        assert!(!DoubleDouble::ZERO.to_f64().is_sign_negative());
        assert!((-DoubleDouble::ZERO).to_f64().is_sign_negative());
        // a non-zero tail is still folded in
        assert_eq!(DoubleDouble::new(1.0, f64::EPSILON).to_f64(), 1.0 + f64::EPSILON);
    }

    #[test]
    fn test_ordering() {
        let a = DoubleDouble::new(1.0, 1e-20);
        let b = DoubleDouble::new(1.0, -1e-20);
        assert!(a > b);
        assert!(DoubleDouble::from(-2.0) < b);
        assert!(<DoubleDouble as Numeric>::nan().partial_cmp(&a).is_none());
    }

    #[test]
    fn test_parse() {
        let pi: DoubleDouble = "3.14159265358979323846264338327950288".parse().unwrap();
        assert!(rel_err(pi, DoubleDouble::PI) < 1e-30);

        let tenth: DoubleDouble = "0.1".parse().unwrap();
        assert_eq!(tenth.hi, 0.1);
        assert!(rel_err(tenth, DoubleDouble::new(0.1, -5.551115123125783e-18)) < 1e-30);

        let small: DoubleDouble = "-2.5e-3".parse().unwrap();
        assert_relative_eq!(small.to_f64(), -2.5e-3);

        let big: DoubleDouble = "1.5E+10".parse().unwrap();
        assert_eq!(big.to_f64(), 1.5e10);

        assert_eq!("-inf".parse::<DoubleDouble>().unwrap().hi, f64::NEG_INFINITY);
        assert!("NaN".parse::<DoubleDouble>().unwrap().hi.is_nan());
        assert!("1.2.3".parse::<DoubleDouble>().is_err());
        assert!("e5".parse::<DoubleDouble>().is_err());
        assert!("".parse::<DoubleDouble>().is_err());
    }

    #[test]
    fn test_backend_contract() {
        assert_eq!(<DoubleDouble as Numeric>::NAME, "double-double");
        assert_eq!(<DoubleDouble as Numeric>::POW3D2_EXPONENT_LIMIT, 320);
        let v = <DoubleDouble as Numeric>::from_parts(1.0, 1e-20);
        assert_eq!(v, DoubleDouble::new(1.0, 1e-20));
        assert_eq!(Numeric::scale_b(v, 3).hi, 8.0);
        assert!(Numeric::is_sign_negative(-DoubleDouble::ZERO));
        assert_eq!(format!("{}", DoubleDouble::from(0.5)), "0.5");
    }
}
