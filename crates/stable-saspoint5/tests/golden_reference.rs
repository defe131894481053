//! Agreement with high-precision reference values
//!
//! The tables in `tests/data` hold 25 significant digits per value, enough to
//! resolve the error of both backends. Arguments are dyadic rationals (or
//! their `f64` roundings), so both backends see exactly the same input.

mod common;

use common::{dd_relative_error, init_tracing, load_reference, relative_error, ReferenceRow};
use stable_saspoint5::{DoubleDouble, Interval, SaSPoint5};

const NATIVE_TOLERANCE: f64 = 2e-15;
const EXTENDED_TOLERANCE: f64 = 2e-16;

fn worst_native<F: Fn(f64) -> f64>(rows: &[ReferenceRow], f: F) -> (f64, f64) {
    rows.iter()
        .map(|row| (relative_error(f(row.arg), row.value_f64()), row.arg))
        .fold((0.0, f64::NAN), |acc, e| if e.0 > acc.0 { e } else { acc })
}

fn worst_extended<F: Fn(DoubleDouble) -> DoubleDouble>(rows: &[ReferenceRow], f: F) -> (f64, f64) {
    rows.iter()
        .map(|row| {
            let got = f(DoubleDouble::from(row.arg));
            (dd_relative_error(got, row.value_dd()), row.arg)
        })
        .fold((0.0, f64::NAN), |acc, e| if e.0 > acc.0 { e } else { acc })
}

#[test]
fn test_pdf_native() {
    init_tracing();
    let dist = SaSPoint5::<f64>::standard();
    let rows = load_reference("pdf.csv");
    let (err, at) = worst_native(&rows, |x| dist.pdf(x));
    assert!(err <= NATIVE_TOLERANCE, "pdf error {err:e} at x = {at}");
}

#[test]
fn test_pdf_extended() {
    init_tracing();
    let dist = SaSPoint5::<DoubleDouble>::standard();
    let rows = load_reference("pdf.csv");
    let (err, at) = worst_extended(&rows, |x| dist.pdf(x));
    assert!(err <= EXTENDED_TOLERANCE, "pdf error {err:e} at x = {at}");
}

#[test]
fn test_upper_cdf_native() {
    init_tracing();
    let dist = SaSPoint5::<f64>::standard();
    let rows = load_reference("ccdf.csv");
    let (err, at) = worst_native(&rows, |x| dist.cdf(x, Interval::Upper));
    assert!(err <= NATIVE_TOLERANCE, "ccdf error {err:e} at x = {at}");
}

#[test]
fn test_upper_cdf_extended() {
    init_tracing();
    let dist = SaSPoint5::<DoubleDouble>::standard();
    let rows = load_reference("ccdf.csv");
    let (err, at) = worst_extended(&rows, |x| dist.cdf(x, Interval::Upper));
    assert!(err <= EXTENDED_TOLERANCE, "ccdf error {err:e} at x = {at}");
}

#[test]
fn test_lower_cdf_by_reflection() {
    // P(X <= x) = P(X > -x) for the symmetric law
    let dist = SaSPoint5::<f64>::standard();
    for row in load_reference("ccdf.csv") {
        let lower = dist.cdf(-row.arg, Interval::Lower);
        assert!(relative_error(lower, row.value_f64()) <= NATIVE_TOLERANCE);
    }
}

#[test]
fn test_lower_quantile_native() {
    init_tracing();
    let dist = SaSPoint5::<f64>::standard();
    let rows = load_reference("quantile.csv");
    let (err, at) = worst_native(&rows, |p| dist.quantile(p, Interval::Lower));
    assert!(err <= NATIVE_TOLERANCE, "quantile error {err:e} at p = {at}");
}

#[test]
fn test_lower_quantile_extended() {
    init_tracing();
    let dist = SaSPoint5::<DoubleDouble>::standard();
    let rows = load_reference("quantile.csv");
    let (err, at) = worst_extended(&rows, |p| dist.quantile(p, Interval::Lower));
    assert!(err <= EXTENDED_TOLERANCE, "quantile error {err:e} at p = {at}");
}

#[test]
fn test_affine_transform_of_reference() {
    // pdf(x; mu, c) = pdf((x - mu) / c) / c with exact dyadic parameters
    let dist = SaSPoint5::new(2.0, 4.0).unwrap();
    let rows = load_reference("pdf.csv");
    for row in rows.iter().filter(|r| r.arg.abs() < 1e12).step_by(13) {
        let x = 2.0 + 4.0 * row.arg;
        let expected = row.value_f64() / 4.0;
        assert!(relative_error(dist.pdf(x), expected) <= NATIVE_TOLERANCE);
    }
}
