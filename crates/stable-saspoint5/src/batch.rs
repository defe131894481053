//! Slice evaluation
//!
//! Every evaluation is independent of every other, so slices are mapped
//! element-wise. With the `parallel` feature, inputs of at least
//! [`PARALLEL_THRESHOLD`] elements are split into chunks and mapped on the
//! rayon thread pool.

use stable_core::{Error, Result};
#[cfg(feature = "parallel")]
use tracing::debug;

use crate::distribution::SaSPoint5;
use crate::interval::Interval;
use crate::tables::SaSPoint5Tables;

/// Smallest input length dispatched to the thread pool
pub const PARALLEL_THRESHOLD: usize = 4096;

/// Chunk length aiming at several chunks per worker thread
pub fn chunk_size(n_items: usize, n_threads: usize) -> usize {
    let target_chunks = n_threads.max(1) * 6;
    n_items.div_ceil(target_chunks).max(4).min(n_items.max(1))
}

fn fill<T, F>(input: &[T], output: &mut [T], f: F)
where
    T: SaSPoint5Tables,
    F: Fn(T) -> T + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        if input.len() >= PARALLEL_THRESHOLD {
            use rayon::prelude::*;

            let chunk = chunk_size(input.len(), rayon::current_num_threads());
            debug!(
                backend = T::NAME,
                len = input.len(),
                chunk,
                "parallel batch evaluation"
            );
            output
                .par_chunks_mut(chunk)
                .zip(input.par_chunks(chunk))
                .for_each(|(out, inp)| {
                    for (o, &x) in out.iter_mut().zip(inp) {
                        *o = f(x);
                    }
                });
            return;
        }
    }

    for (o, &x) in output.iter_mut().zip(input) {
        *o = f(x);
    }
}

fn checked_fill<T, F>(input: &[T], output: &mut [T], context: &str, f: F) -> Result<()>
where
    T: SaSPoint5Tables,
    F: Fn(T) -> T + Sync + Send,
{
    if input.len() != output.len() {
        return Err(Error::size_mismatch(input.len(), output.len(), context));
    }
    fill(input, output, f);
    Ok(())
}

impl<T: SaSPoint5Tables> SaSPoint5<T> {
    /// Write `pdf(xs[i])` into `out[i]`
    pub fn pdf_into(&self, xs: &[T], out: &mut [T]) -> Result<()> {
        checked_fill(xs, out, "pdf_into", |x| self.pdf(x))
    }

    /// Write `cdf(xs[i], interval)` into `out[i]`
    pub fn cdf_into(&self, xs: &[T], interval: Interval, out: &mut [T]) -> Result<()> {
        checked_fill(xs, out, "cdf_into", |x| self.cdf(x, interval))
    }

    /// Write `quantile(ps[i], interval)` into `out[i]`
    pub fn quantile_into(&self, ps: &[T], interval: Interval, out: &mut [T]) -> Result<()> {
        checked_fill(ps, out, "quantile_into", |p| self.quantile(p, interval))
    }

    pub fn pdf_batch(&self, xs: &[T]) -> Vec<T> {
        let mut out = vec![T::zero(); xs.len()];
        fill(xs, &mut out, |x| self.pdf(x));
        out
    }

    pub fn cdf_batch(&self, xs: &[T], interval: Interval) -> Vec<T> {
        let mut out = vec![T::zero(); xs.len()];
        fill(xs, &mut out, |x| self.cdf(x, interval));
        out
    }

    pub fn quantile_batch(&self, ps: &[T], interval: Interval) -> Vec<T> {
        let mut out = vec![T::zero(); ps.len()];
        fill(ps, &mut out, |p| self.quantile(p, interval));
        out
    }
}
