//! Piecewise Padé coefficient tables
//!
//! Each backend carries three tables built from the same segment layout:
//!
//! - density over `|x|`: doubling segments up to 64, then a tail in
//!   `u = 1/sqrt(|x|)` scaled by `u^3`
//! - upper-tail probability over `x >= 0`: doubling segments starting at
//!   `[0, 0.5]`, then a tail in `u` scaled by `u`
//! - quantile over `p <= 0.5`: four sub-bins of `-log2(2p)` for `p >= 1/4`,
//!   then bands keyed on the binary exponent of `p`
//!
//! Coefficient slices run from degree 0 upward and every denominator has a
//! leading coefficient of one.

pub mod extended;
pub mod native;

use stable_core::{DoubleDouble, Numeric, Segment};

/// Doubling segments over the distribution variable plus an asymptotic tail
#[derive(Debug)]
pub struct PadeTable<T: 'static> {
    pub segments: &'static [Segment<T>],
    /// Evaluated at `u = 1/sqrt(|x|)`, which lies in `[0, 0.125)` past 64
    pub tail: Segment<T>,
}

impl<T: Numeric> PadeTable<T> {
    /// Upper end of the segmented region; the tail takes over beyond it
    pub fn tail_start(&self) -> T {
        self.segments
            .last()
            .map(|s| s.upper)
            .unwrap_or_else(T::zero)
    }
}

/// Quantile band for `p` whose binary exponent is at least `min_exponent`.
///
/// The segment is evaluated at `-log2(p * 2^rescale)`, which lies in
/// `(0, rescale]` across the band.
#[derive(Debug)]
pub struct ExponentBand<T: 'static> {
    pub min_exponent: i32,
    pub rescale: i32,
    pub segment: Segment<T>,
}

/// Quantile coefficients for the lower half `p <= 0.5`
#[derive(Debug)]
pub struct QuantileTable<T: 'static> {
    /// Sub-bins of `-log2(2p)` over `[0, 1]` for `p` in `[1/4, 1/2]`
    pub head: &'static [Segment<T>],
    /// Bands ordered by decreasing `min_exponent`
    pub bands: &'static [ExponentBand<T>],
}

impl<T> QuantileTable<T> {
    /// Binary exponent below which only the asymptote `1/(2 pi p^2)` applies
    pub fn asymptote_exponent(&self) -> i32 {
        self.bands
            .last()
            .map(|b| b.min_exponent)
            .unwrap_or(HEAD_MIN_EXPONENT)
    }
}

/// Smallest binary exponent of `p` served by the quantile head bins
pub const HEAD_MIN_EXPONENT: i32 = -2;

/// Coefficient tables available for a numeric backend
pub trait SaSPoint5Tables: Numeric {
    fn pdf_table() -> &'static PadeTable<Self>;
    fn ccdf_table() -> &'static PadeTable<Self>;
    fn quantile_table() -> &'static QuantileTable<Self>;
}

impl SaSPoint5Tables for f64 {
    fn pdf_table() -> &'static PadeTable<Self> {
        &native::PDF
    }

    fn ccdf_table() -> &'static PadeTable<Self> {
        &native::CCDF
    }

    fn quantile_table() -> &'static QuantileTable<Self> {
        &native::QUANTILE
    }
}

impl SaSPoint5Tables for DoubleDouble {
    fn pdf_table() -> &'static PadeTable<Self> {
        &extended::PDF
    }

    fn ccdf_table() -> &'static PadeTable<Self> {
        &extended::CCDF
    }

    fn quantile_table() -> &'static QuantileTable<Self> {
        &extended::QUANTILE
    }
}
