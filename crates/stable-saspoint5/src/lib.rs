//! Symmetric alpha-stable distribution with stability index 1/2
//!
//! Density, cumulative distribution and quantile functions over the whole
//! real line, computed from piecewise Padé approximants:
//!
//! - doubling segments on `|x|` up to 64, each evaluated at `|x| - lower`
//! - an asymptotic tail in `u = 1/sqrt(|x|)` rescaled by the known power law
//! - quantile bins keyed on the binary exponent of `p`, with a closed-form
//!   asymptote below `2^-64`
//!
//! The same code runs on the native `f64` backend and on the
//! extended-precision [`DoubleDouble`](stable_core::DoubleDouble) backend,
//! each with its own coefficient tables.
//!
//! # Example
//!
//! ```rust
//! use stable_saspoint5::{Interval, SaSPoint5};
//!
//! let dist = SaSPoint5::new(0.0, 1.0).unwrap();
//! let p = dist.cdf(3.0, Interval::Lower);
//! let x = dist.quantile(p, Interval::Lower);
//! assert!((x - 3.0).abs() < 1e-12);
//! ```

pub mod batch;
pub mod distribution;
pub mod interval;
pub mod kernels;
#[cfg(feature = "rand")]
pub mod sampling;
pub mod selector;
pub mod tables;
pub mod tail;
pub mod validation;

pub use distribution::{SaSPoint5, SaSPoint5Params};
pub use interval::Interval;
pub use tables::SaSPoint5Tables;

pub use stable_core::{DoubleDouble, Error, Numeric, Result};
