//! Tail selector for cumulative and quantile functions

use serde::{Deserialize, Serialize};

/// Which side of the distribution a probability refers to.
///
/// `Lower` is `P(X <= x)`, `Upper` is `P(X > x)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    #[default]
    Lower,
    Upper,
}

impl Interval {
    /// The opposite tail
    pub fn complement(self) -> Self {
        match self {
            Interval::Lower => Interval::Upper,
            Interval::Upper => Interval::Lower,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complement() {
        assert_eq!(Interval::Lower.complement(), Interval::Upper);
        assert_eq!(Interval::Upper.complement().complement(), Interval::Upper);
        assert_eq!(Interval::default(), Interval::Lower);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Interval::Upper).unwrap(), "\"upper\"");
        let parsed: Interval = serde_json::from_str("\"lower\"").unwrap();
        assert_eq!(parsed, Interval::Lower);
    }
}
