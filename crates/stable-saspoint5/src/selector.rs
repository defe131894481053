//! Segment selection
//!
//! Maps a distribution argument (or a probability) to the table segment that
//! covers it and the local argument the segment is evaluated at. Selection
//! is a pure function of the input; no state is carried between calls.

use stable_core::{Numeric, Segment};

use crate::tables::{PadeTable, QuantileTable, HEAD_MIN_EXPONENT};

/// Outcome of locating an argument in a piecewise table
#[derive(Debug, Clone, Copy)]
pub enum Selection<T: 'static> {
    /// Evaluate `segment` at the local argument `arg`
    Segment {
        index: usize,
        segment: &'static Segment<T>,
        arg: T,
    },
    /// Beyond the segmented region; the asymptotic law applies
    Tail,
}

impl<T: Numeric> Selection<T> {
    /// Evaluate the selected segment, or `None` for the tail
    #[inline]
    pub fn eval(&self) -> Option<T> {
        match self {
            Selection::Segment { segment, arg, .. } => Some(segment.eval(*arg)),
            Selection::Tail => None,
        }
    }
}

/// First segment whose closed upper bound admits `x`.
///
/// Boundary points belong to the lower segment. A NaN argument matches no
/// segment and lands in the tail.
fn scan<T: Numeric>(segments: &'static [Segment<T>], x: T) -> Selection<T> {
    segments
        .iter()
        .enumerate()
        .find(|(_, s)| x <= s.upper)
        .map(|(index, segment)| Selection::Segment {
            index,
            segment,
            arg: x - segment.lower,
        })
        .unwrap_or(Selection::Tail)
}

/// Select among doubling segments for a non-negative magnitude `x`
#[inline]
pub fn select_doubling<T: Numeric>(table: &'static PadeTable<T>, x: T) -> Selection<T> {
    scan(table.segments, x)
}

/// Select the quantile segment for `p` in `(0, 0.5]`.
///
/// Returns the head sub-bin of `-log2(2p)` when `ilogb(p) >= -2`, otherwise
/// the first band whose `min_exponent` admits `ilogb(p)`, evaluated at
/// `-log2(p * 2^rescale)`. Below the last band (including `p == 0`, whose
/// exponent is `i32::MIN`) the result is [`Selection::Tail`].
pub fn select_exponent<T: Numeric>(table: &'static QuantileTable<T>, p: T) -> Selection<T> {
    let exponent = p.ilogb();

    if exponent >= HEAD_MIN_EXPONENT {
        let u = -p.scale_b(1).log2();
        return scan(table.head, u);
    }

    let head_len = table.head.len();
    table
        .bands
        .iter()
        .enumerate()
        .find(|(_, band)| exponent >= band.min_exponent)
        .map(|(i, band)| {
            let u = -p.scale_b(band.rescale).log2();
            Selection::Segment {
                index: head_len + i,
                segment: &band.segment,
                arg: u - band.segment.lower,
            }
        })
        .unwrap_or(Selection::Tail)
}
