//! Asymptotic tails
//!
//! Past the last doubling segment the density decays as `|x|^(-3/2)` and the
//! upper-tail probability as `x^(-1/2)`. The tail segment is a rational
//! function of `u = 1/sqrt(|x|)`; multiplying its value by `u^3` or `u`
//! restores the power law, so the limit as `x -> inf` is the segment's
//! constant term rather than some spurious finite value.

use stable_core::{cube, Numeric, Segment};

/// Power law carried by a tail segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TailLaw {
    /// `|x|^(-3/2)`
    Density,
    /// `x^(-1/2)`
    Survival,
}

impl TailLaw {
    /// `u^3` for the density, `u` for the survival function
    #[inline]
    pub fn rescale<T: Numeric>(self, u: T) -> T {
        match self {
            TailLaw::Density => cube(u),
            TailLaw::Survival => u,
        }
    }

    /// Evaluate the tail at a magnitude `x` beyond the segmented region.
    ///
    /// `x = inf` gives `u = 0` and therefore zero.
    pub fn evaluate<T: Numeric>(self, tail: &Segment<T>, x: T) -> T {
        let u = x.sqrt().recip();
        tail.eval_at(u) * self.rescale(u)
    }

    /// Limit of `f(x) * x^(3/2)` (density) or `f(x) * x^(1/2)` (survival)
    /// implied by the tail segment: its value at `u = 0`.
    pub fn limit<T: Numeric>(self, tail: &Segment<T>) -> T {
        tail.eval_at(T::zero())
    }

    /// Exact limit of the tail constant, `1/(2 sqrt(2 pi))` for the density
    /// and `1/sqrt(2 pi)` for the survival function.
    pub fn exact_limit<T: Numeric>(self) -> T {
        let survival = T::from_parts(0.3989422804014327, -2.49232720227773e-17);
        match self {
            TailLaw::Density => survival.scale_b(-1),
            TailLaw::Survival => survival,
        }
    }
}

/// Standardized upper quantile below the last exponent band:
/// `V(p) = 1 / (2 pi p^2)`, returned here without the `p^-2` factor.
#[inline]
pub fn quantile_asymptote<T: Numeric>() -> T {
    T::frac_1_pi().scale_b(-1)
}

/// Undo the `p^2` factor the quantile approximants are fitted against
#[inline]
pub fn inverse_square_law<T: Numeric>(v: T, p: T) -> T {
    v / (p * p)
}
