//! Parsing of command-line style bound, domain, point and coefficient strings

use crate::domain::Domain;
use crate::error::{Result, TestFunctionError};
use ndarray::Array2;
use regex::Regex;
use std::sync::OnceLock;

const NUMBER: &str = r"[-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?";

fn bounds_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"^\s*\(?\s*({NUMBER})\s*[,:]\s*({NUMBER})\s*\)?\s*$"))
            .expect("bounds pattern is valid")
    })
}

fn parse_error(input: &str, reason: impl Into<String>) -> TestFunctionError {
    TestFunctionError::Parse {
        input: input.to_string(),
        reason: reason.into(),
    }
}

fn parse_number(input: &str, token: &str) -> Result<f64> {
    token
        .trim()
        .parse::<f64>()
        .map_err(|e| parse_error(input, format!("'{}': {}", token.trim(), e)))
}

/// Parse bounds in format "min,max" (also "min:max" or "(min, max)")
pub fn parse_bounds(s: &str) -> Result<(f64, f64)> {
    let caps = bounds_regex()
        .captures(s)
        .ok_or_else(|| parse_error(s, "expected 'min,max'"))?;
    let lower = parse_number(s, &caps[1])?;
    let upper = parse_number(s, &caps[2])?;
    if lower > upper {
        return Err(parse_error(s, "min is larger than max"));
    }
    Ok((lower, upper))
}

/// Parse a domain: intervals separated by ';', e.g. "-1,1;0,2".
///
/// A single interval is replicated to `dim` axes.
pub fn parse_domain(s: &str, dim: usize) -> Result<Domain> {
    let intervals = s
        .split(';')
        .filter(|part| !part.trim().is_empty())
        .map(parse_bounds)
        .collect::<Result<Vec<_>>>()?;
    if intervals.is_empty() {
        return Err(parse_error(s, "expected at least one 'min,max' interval"));
    }
    let bounds = match intervals.as_slice() {
        [single] if dim > 1 => vec![*single; dim],
        _ => intervals,
    };
    Domain::new(bounds)
}

/// Parse a comma-separated coefficient list, e.g. "1,2,3"
pub fn parse_coeffs(s: &str) -> Result<Vec<f64>> {
    s.split(',')
        .filter(|token| !token.trim().is_empty())
        .map(|token| parse_number(s, token))
        .collect()
}

/// Parse points: points separated by ';', coordinates by ','.
///
/// "0;0.5;1" gives three 1-D points, "0,0;1,1" two 2-D points.
pub fn parse_points(s: &str, dim: usize) -> Result<Array2<f64>> {
    let mut values = Vec::new();
    let mut n_points = 0;
    for point in s.split(';').filter(|p| !p.trim().is_empty()) {
        let coords = parse_coeffs(point)?;
        if coords.len() != dim {
            return Err(TestFunctionError::DimensionMismatch {
                expected: dim,
                actual: coords.len(),
            });
        }
        values.extend(coords);
        n_points += 1;
    }
    Array2::from_shape_vec((n_points, dim), values)
        .map_err(|e| parse_error(s, e.to_string()))
}
