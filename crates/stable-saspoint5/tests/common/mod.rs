//! Shared utilities for integration tests

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Once;

use stable_core::DoubleDouble;

static INIT: Once = Once::new();

/// Route `tracing` output through the test harness, filtered by `RUST_LOG`
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// One row of a reference table: an argument and its high-precision value
#[derive(Debug, Clone)]
pub struct ReferenceRow {
    /// Argument as written; always exactly representable as `f64`
    pub arg: f64,
    /// Reference value kept as text so it can be parsed at full precision
    pub value: String,
}

impl ReferenceRow {
    pub fn value_f64(&self) -> f64 {
        self.value.parse().expect("reference value parses as f64")
    }

    pub fn value_dd(&self) -> DoubleDouble {
        self.value
            .parse()
            .expect("reference value parses as double-double")
    }
}

fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

/// Load `tests/data/<name>`, a two-column CSV with a header row
pub fn load_reference(name: &str) -> Vec<ReferenceRow> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(data_path(name))
        .unwrap_or_else(|e| panic!("cannot open {name}: {e}"));

    let rows: Vec<ReferenceRow> = reader
        .records()
        .map(|record| {
            let record = record.expect("well-formed csv record");
            ReferenceRow {
                arg: record[0].trim().parse().expect("argument parses as f64"),
                value: record[1].trim().to_string(),
            }
        })
        .collect();
    assert!(!rows.is_empty(), "{name} has no rows");
    rows
}

/// Relative error, falling back to absolute error at an exact zero
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected == 0.0 {
        actual.abs()
    } else {
        ((actual - expected) / expected).abs()
    }
}

/// Relative error evaluated in double-double
pub fn dd_relative_error(actual: DoubleDouble, expected: DoubleDouble) -> f64 {
    if expected == DoubleDouble::ZERO {
        actual.abs().to_f64()
    } else {
        ((actual - expected) / expected).abs().to_f64()
    }
}
