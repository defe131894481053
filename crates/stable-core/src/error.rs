//! Error types for stable-law evaluation
//!
//! Provides a unified error type for all stable-stats crates. Numeric
//! evaluation itself never fails: out-of-domain arguments map to NaN and
//! infinities per IEEE-754. Errors are reserved for misconfiguration.

use thiserror::Error;

/// Core error type for stable-law operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a constructor or function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A coefficient table failed its denominator-magnitude check
    #[error(
        "Table invariant violated in {table} segment {segment}: denominator {denominator:e} at x = {x:e}"
    )]
    TableInvariant {
        table: &'static str,
        segment: usize,
        x: f64,
        denominator: f64,
    },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a non-finite location parameter
    pub fn invalid_location(location: f64) -> Self {
        Self::InvalidParameter(format!("location {location} must be finite"))
    }

    /// Create an error for a scale parameter that is not finite and positive
    pub fn invalid_scale(scale: f64) -> Self {
        Self::InvalidParameter(format!("scale {scale} must be finite and positive"))
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for an unparsable numeric literal
    pub fn malformed_literal(literal: &str) -> Self {
        Self::InvalidInput(format!("malformed numeric literal {literal:?}"))
    }
}
