//! Core numeric layer for stable-law special functions
//!
//! This crate provides the building blocks the distribution crates are
//! written against:
//!
//! - [`Numeric`]: the arithmetic backend contract, implemented for `f64` and
//!   for the extended-precision [`DoubleDouble`]
//! - [`poly`], [`pade`] and [`Segment`]: Horner and rational evaluation of
//!   piecewise coefficient tables
//! - [`math`]: overflow-aware fractional powers
//! - [`Error`]: the shared error type
//!
//! # Example
//!
//! ```rust
//! use stable_core::{pade, DoubleDouble, Numeric};
//!
//! // (1 + x) / (1 + 2x) at x = 0.25 in both precisions
//! let native = pade(0.25, &[1.0, 1.0], &[1.0, 2.0]);
//! assert!((native - 1.25 / 1.5).abs() < 1e-15);
//!
//! let third = DoubleDouble::ONE / DoubleDouble::from(3.0);
//! assert_eq!(third.to_f64(), 1.0 / 3.0);
//! ```

pub mod double_double;
pub mod error;
pub mod math;
pub mod numeric;
pub mod pade;

pub use double_double::DoubleDouble;
pub use error::{Error, Result};
pub use math::{cube, pow2d3, pow3d2, square};
pub use numeric::Numeric;
pub use pade::{pade, poly, Segment};
