//! Stable-law distribution functions
//!
//! This crate re-exports the workspace crates:
//!
//! - [`stable_core`]: numeric backends (`f64` and double-double) and the Padé
//!   evaluation primitives shared by every approximation
//! - [`stable_saspoint5`]: the symmetric alpha-stable law with `alpha = 1/2`
//!
//! # Example
//!
//! ```rust
//! use stable_stats::prelude::*;
//!
//! let dist = SaSPoint5::new(1.0, 2.0).unwrap();
//! assert_eq!(dist.median(), 1.0);
//! assert_eq!(dist.cdf(1.0, Interval::Upper), 0.5);
//!
//! let precise = SaSPoint5::<DoubleDouble>::standard();
//! let q = precise.quantile(DoubleDouble::from(0.9), Interval::Lower);
//! assert!(q > DoubleDouble::ZERO);
//! ```

pub use stable_core;
pub use stable_saspoint5;

pub use stable_core::{DoubleDouble, Error, Numeric, Result};
pub use stable_saspoint5::{Interval, SaSPoint5, SaSPoint5Params};

/// Commonly used types
pub mod prelude {
    pub use stable_core::{DoubleDouble, Numeric};
    pub use stable_saspoint5::{Interval, SaSPoint5, SaSPoint5Params, SaSPoint5Tables};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_member_crates_reexported_under_own_names() {
        let dist = crate::stable_saspoint5::SaSPoint5::<crate::stable_core::DoubleDouble>::standard();
        assert_eq!(dist.to_string(), "SaSPoint5[location=0, scale=1]");
        // the built-in `core` crate stays reachable
        assert_eq!(core::cmp::max(1, 2), 2);
    }
}
