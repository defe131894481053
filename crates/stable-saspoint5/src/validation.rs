//! Offline checks of the coefficient tables
//!
//! These routines are not on any evaluation path. They exist so the test
//! suite (or a table regeneration tool) can confirm that a backend's tables
//! are numerically sound:
//!
//! - every denominator stays at or above [`MIN_DENOMINATOR`] over its
//!   segment, so no digits are lost to cancellation
//! - adjacent segments agree where they meet
//! - the tails reproduce the `x^(-3/2)` and `x^(-1/2)` power laws

use stable_core::{pow3d2, Error, Numeric, Result, Segment};
use tracing::debug;

use crate::kernels;
use crate::tables::SaSPoint5Tables;
use crate::tail::{quantile_asymptote, TailLaw};

/// Lower bound for every normalized denominator over its valid range
pub const MIN_DENOMINATOR: f64 = 0.5;

/// A named segment of one of the backend's tables
struct NamedSegment<T: 'static> {
    table: &'static str,
    index: usize,
    segment: &'static Segment<T>,
}

fn all_segments<T: SaSPoint5Tables>() -> Vec<NamedSegment<T>> {
    let pdf = T::pdf_table();
    let ccdf = T::ccdf_table();
    let quantile = T::quantile_table();

    let mut out = Vec::new();
    for (name, table) in [("pdf", pdf), ("ccdf", ccdf)] {
        out.extend(
            table
                .segments
                .iter()
                .chain(std::iter::once(&table.tail))
                .enumerate()
                .map(|(index, segment)| NamedSegment {
                    table: name,
                    index,
                    segment,
                }),
        );
    }
    out.extend(
        quantile
            .head
            .iter()
            .chain(quantile.bands.iter().map(|b| &b.segment))
            .enumerate()
            .map(|(index, segment)| NamedSegment {
                table: "quantile",
                index,
                segment,
            }),
    );
    out
}

/// Check every segment of every table at `samples + 1` evenly spaced local
/// arguments, returning the number of segments checked.
///
/// Segment indices in the error count the tail (density and survival
/// tables) or the exponent bands (quantile table) after the regular
/// segments.
pub fn check_denominators<T: SaSPoint5Tables>(samples: usize) -> Result<usize> {
    let segments = all_segments::<T>();
    let floor = T::from_f64(MIN_DENOMINATOR);

    for named in &segments {
        let (local, denominator) = named.segment.min_denominator(samples);
        if denominator < floor {
            return Err(Error::TableInvariant {
                table: named.table,
                segment: named.index,
                x: (named.segment.lower + local).to_f64(),
                denominator: denominator.to_f64(),
            });
        }
    }

    debug!(
        backend = T::NAME,
        segments = segments.len(),
        samples,
        "denominator check passed"
    );
    Ok(segments.len())
}

/// Mismatch between two approximations that meet at a shared point
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryGap {
    pub table: &'static str,
    /// Boundary in the table's selection variable (`x`, `u = -log2(2p)`, or
    /// the binary exponent of `p` for band edges)
    pub at: f64,
    pub left: f64,
    pub right: f64,
}

impl BoundaryGap {
    /// `|left - right| / |right|`
    pub fn relative(&self) -> f64 {
        ((self.left - self.right) / self.right).abs()
    }
}

fn gap<T: Numeric>(table: &'static str, at: f64, left: T, right: T) -> BoundaryGap {
    BoundaryGap {
        table,
        at,
        left: left.to_f64(),
        right: right.to_f64(),
    }
}

fn doubling_gaps<T: SaSPoint5Tables>(
    name: &'static str,
    segments: &'static [Segment<T>],
    out: &mut Vec<BoundaryGap>,
) {
    for pair in segments.windows(2) {
        let (lo, hi) = (&pair[0], &pair[1]);
        out.push(gap(name, lo.upper.to_f64(), lo.eval(lo.width()), hi.eval(T::zero())));
    }
}

/// Gaps at every internal boundary, the tail hand-off and the quantile
/// asymptote.
pub fn boundary_gaps<T: SaSPoint5Tables>() -> Vec<BoundaryGap> {
    let mut out = Vec::new();

    for (name, table, law) in [
        ("pdf", T::pdf_table(), TailLaw::Density),
        ("ccdf", T::ccdf_table(), TailLaw::Survival),
    ] {
        doubling_gaps(name, table.segments, &mut out);
        if let Some(last) = table.segments.last() {
            let edge = last.upper;
            out.push(gap(
                name,
                edge.to_f64(),
                last.eval(last.width()),
                law.evaluate(&table.tail, edge),
            ));
        }
    }

    let quantile = T::quantile_table();
    doubling_gaps("quantile", quantile.head, &mut out);

    // head meets the first band at p = 1/4, where the band argument is 0
    let mut previous = quantile.head.last().map(|s| s.eval(s.width()));
    for band in quantile.bands {
        let right = band.segment.eval(T::zero());
        if let Some(left) = previous {
            let edge = band.min_exponent + band.rescale;
            out.push(gap("quantile", f64::from(edge), left, right));
        }
        previous = Some(band.segment.eval(band.segment.width()));
    }
    if let (Some(left), Some(band)) = (previous, quantile.bands.last()) {
        out.push(gap(
            "quantile",
            f64::from(band.min_exponent),
            left,
            quantile_asymptote::<T>(),
        ));
    }

    out
}

/// Scaled tail values at `x = 2^k`
#[derive(Debug, Clone, PartialEq)]
pub struct TailPoint<T> {
    pub exponent: i32,
    pub x: T,
    /// `pdf(x) * x^(3/2)`
    pub pdf_scaled: T,
    /// `ccdf(x) * x^(1/2)`
    pub ccdf_scaled: T,
}

/// Tail scaling along doubling steps, with the limits the tail segments imply
#[derive(Debug, Clone)]
pub struct TailConstants<T> {
    pub points: Vec<TailPoint<T>>,
    pub pdf_limit: T,
    pub ccdf_limit: T,
}

/// Evaluate `pdf(x) x^(3/2)` and `ccdf(x) x^(1/2)` at `x = 2^k` for `k` in
/// `from_exp..=to_exp`.
pub fn tail_constants<T: SaSPoint5Tables>(from_exp: i32, to_exp: i32) -> TailConstants<T> {
    let points = (from_exp..=to_exp)
        .map(|exponent| {
            let x = T::one().scale_b(exponent);
            TailPoint {
                exponent,
                x,
                pdf_scaled: kernels::pdf(x) * pow3d2(x),
                ccdf_scaled: kernels::ccdf(x) * x.sqrt(),
            }
        })
        .collect();

    TailConstants {
        points,
        pdf_limit: TailLaw::Density.limit(&T::pdf_table().tail),
        ccdf_limit: TailLaw::Survival.limit(&T::ccdf_table().tail),
    }
}
