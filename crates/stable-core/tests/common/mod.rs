//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

use stable_core::DoubleDouble;

/// Agreement expected from a handful of double-double operations
pub const DD_TOLERANCE: f64 = 1e-30;

/// Relative error of `actual` against `expected`, evaluated in double-double
pub fn dd_relative_error(actual: DoubleDouble, expected: DoubleDouble) -> f64 {
    ((actual - expected) / expected).abs().to_f64()
}

/// Special floating-point values for edge case testing
pub fn special_values() -> Vec<f64> {
    vec![
        0.0,
        -0.0,
        1.0,
        -1.0,
        f64::MIN_POSITIVE,
        f64::EPSILON,
        std::f64::consts::PI,
        1e-300,
        1e300,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::NAN,
    ]
}
