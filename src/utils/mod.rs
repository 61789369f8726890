//! Utility functions and helpers

pub mod formats;

pub use formats::{from_sprs_csr, to_sprs_csr};

/// Computes an exclusive prefix sum (scan) for a vector
pub fn exclusive_scan(input: &[usize]) -> Vec<usize> {
    let mut result = Vec::with_capacity(input.len() + 1);
    let mut sum = 0;

    result.push(0);

    for &val in input {
        sum += val;
        result.push(sum);
    }

    result
}

/// Renders a float the way Python's `repr` does.
///
/// Shortest round-trip digits, a trailing `.0` on integral values, and
/// scientific notation with a signed, two-digit exponent outside
/// `1e-4 <= |x| < 1e16`. File names such as `random_100_density0.05.mtx`
/// depend on this exact rendering.
pub fn format_float_repr(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if x == 0.0 {
        return if x.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let sci = format!("{:e}", x);
    let (mantissa, exponent) = split_exponent(&sci);

    if (-4..16).contains(&exponent) {
        let fixed = format!("{}", x);
        if fixed.contains('.') {
            fixed
        } else {
            format!("{}.0", fixed)
        }
    } else {
        join_exponent(mantissa, exponent)
    }
}

/// `{:.prec$e}` with a signed, at least two-digit exponent (`1.39e+01`).
pub fn format_scientific(x: f64, precision: usize) -> String {
    if !x.is_finite() {
        return format!("{}", x);
    }
    let sci = format!("{:.*e}", precision, x);
    let (mantissa, exponent) = split_exponent(&sci);
    join_exponent(mantissa, exponent)
}

fn split_exponent(sci: &str) -> (&str, i32) {
    match sci.split_once('e') {
        Some((mantissa, exp)) => (mantissa, exp.parse().unwrap_or(0)),
        None => (sci, 0),
    }
}

fn join_exponent(mantissa: &str, exponent: i32) -> String {
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", mantissa, sign, exponent.abs())
}
