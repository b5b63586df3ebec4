//! Validation of whitespace-separated console input. Every failure is a
//! [`LinalgError::MalformedInput`]; re-prompting is left to the caller.

use matrel_util::{check, check_eq};

use crate::error::LinalgError;

/// Parses a strictly positive matrix order.
pub fn parse_dimension(line: &str) -> Result<usize, LinalgError> {
    let n: usize = line
        .trim()
        .parse()
        .map_err(|_| LinalgError::MalformedInput(format!("`{}` is not a positive integer", line.trim())))?;
    check!(n > 0, "the matrix order must be at least 1".into());
    Ok(n)
}

fn check_count<T>(values: &[T], n: usize) -> Result<(), LinalgError> {
    check_eq!(
        values.len(),
        n,
        LinalgError::MalformedInput(format!("expected {n} entries, got {}", values.len()))
    );
    Ok(())
}

/// Parses one row of a relation matrix: exactly `n` entries, each `0` or `1`.
pub fn parse_boolean_row(line: &str, n: usize) -> Result<Vec<bool>, LinalgError> {
    let values = line
        .split_whitespace()
        .map(|token| match token.parse::<i64>() {
            Ok(0) => Ok(false),
            Ok(1) => Ok(true),
            Ok(v) => Err(LinalgError::MalformedInput(format!("{v} is neither 0 nor 1"))),
            Err(_) => Err(LinalgError::MalformedInput(format!("`{token}` is not a number"))),
        })
        .collect::<Result<Vec<_>, _>>()?;
    check_count(&values, n)?;
    Ok(values)
}

/// Parses one row of a real matrix (or a right-hand side vector): exactly `n` numbers.
pub fn parse_real_row(line: &str, n: usize) -> Result<Vec<f64>, LinalgError> {
    let values = line
        .split_whitespace()
        .map(|token| {
            token
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| LinalgError::MalformedInput(format!("`{token}` is not a number")))
        })
        .collect::<Result<Vec<_>, _>>()?;
    check_count(&values, n)?;
    Ok(values)
}
