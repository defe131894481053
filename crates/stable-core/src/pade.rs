//! Polynomial and rational (Padé) evaluation
//!
//! Coefficient slices are ordered from degree 0 upward. Every denominator in
//! the shipped tables has leading coefficient 1 and stays at or above 0.5
//! across its segment, so the quotient is well conditioned; the tables are
//! checked against that bound by tests rather than at evaluation time.

use crate::numeric::Numeric;

/// Evaluate `c[0] + c[1] x + ... + c[n] x^n` by Horner's rule.
///
/// An empty coefficient slice evaluates to zero.
#[inline]
pub fn poly<T: Numeric>(x: T, coefficients: &[T]) -> T {
    coefficients
        .iter()
        .rev()
        .fold(T::zero(), |acc, &c| acc * x + c)
}

/// Evaluate the rational function `poly(x, numer) / poly(x, denom)`.
#[inline]
pub fn pade<T: Numeric>(x: T, numer: &[T], denom: &[T]) -> T {
    poly(x, numer) / poly(x, denom)
}

/// One piece of a piecewise rational approximation.
///
/// The segment covers `(lower, upper]` of the selection variable and is
/// evaluated at the re-centered argument `x - lower`.
#[derive(Debug, Clone, Copy)]
pub struct Segment<T: 'static> {
    pub lower: T,
    pub upper: T,
    pub numer: &'static [T],
    pub denom: &'static [T],
}

impl<T: Numeric> Segment<T> {
    /// Width of the covered interval; the valid range of the local argument
    #[inline]
    pub fn width(&self) -> T {
        self.upper - self.lower
    }

    /// True when `x` lies in `[lower, upper]`
    #[inline]
    pub fn contains(&self, x: T) -> bool {
        x >= self.lower && x <= self.upper
    }

    /// Evaluate at a local argument already shifted by `lower`
    #[inline]
    pub fn eval(&self, local: T) -> T {
        pade(local, self.numer, self.denom)
    }

    /// Evaluate at an absolute position of the selection variable
    #[inline]
    pub fn eval_at(&self, x: T) -> T {
        self.eval(x - self.lower)
    }

    /// Denominator value at a local argument
    #[inline]
    pub fn denominator(&self, local: T) -> T {
        poly(local, self.denom)
    }

    /// Smallest denominator on an evenly spaced grid of `samples + 1`
    /// local arguments spanning `[0, width]`, with the argument where it
    /// occurs.
    pub fn min_denominator(&self, samples: usize) -> (T, T) {
        let samples = samples.max(1);
        let step = self.width() / T::from_f64(samples as f64);
        let mut best_x = T::zero();
        let mut best = self.denominator(best_x);
        for i in 1..=samples {
            let local = step * T::from_f64(i as f64);
            let d = self.denominator(local);
            if d < best {
                best = d;
                best_x = local;
            }
        }
        (best_x, best)
    }
}
