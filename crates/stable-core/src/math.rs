//! Mathematical utilities shared by the stable-law kernels
//!
//! Fractional powers used to move between the natural variable of a
//! distribution and the argument of its tail approximation.

/// Overflow-aware fractional powers
pub mod powers {
    use crate::numeric::Numeric;

    #[inline]
    pub fn square<T: Numeric>(x: T) -> T {
        x * x
    }

    #[inline]
    pub fn cube<T: Numeric>(x: T) -> T {
        x * x * x
    }

    /// `x^(3/2)`
    ///
    /// For moderate exponents `sqrt(x^3)` keeps a single rounding in the
    /// root. Once `x^3` could leave the exponent range the result is
    /// assembled as `sqrt(x) * x` instead.
    pub fn pow3d2<T: Numeric>(x: T) -> T {
        if x.ilogb().unsigned_abs() >= T::POW3D2_EXPONENT_LIMIT {
            x.sqrt() * x
        } else {
            cube(x).sqrt()
        }
    }

    /// `x^(2/3)`
    ///
    /// Uses `cbrt(x^2)` for moderate exponents and `cbrt(x)^2` once `x^2`
    /// could overflow or underflow.
    pub fn pow2d3<T: Numeric>(x: T) -> T {
        if x.ilogb().unsigned_abs() >= T::POW2D3_EXPONENT_LIMIT {
            square(x.cbrt())
        } else {
            square(x).cbrt()
        }
    }

}

pub use powers::{cube, pow2d3, pow3d2, square};
