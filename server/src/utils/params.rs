//! Query-string coercion shared by the handlers.
//!
//! Numeric parameters arrive as raw strings so that malformed input maps to
//! [`AppError::ValidationError`] instead of the framework's plain-text
//! rejection. Blank values count as absent.

use std::str::FromStr;

use crate::utils::error::AppError;

fn present(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

/// Parses a strictly positive integer, falling back to `default` when absent.
pub fn positive_u32(name: &str, raw: Option<&str>, default: u32) -> Result<u32, AppError> {
    let Some(value) = present(raw) else {
        return Ok(default);
    };

    match value.parse::<u32>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        _ => Err(AppError::ValidationError(format!(
            "'{name}' must be a positive integer, got '{value}'"
        ))),
    }
}

/// Parses an integer without range restrictions. Used where out-of-range
/// values are clamped downstream rather than rejected, so well-formed values
/// beyond `i64` saturate instead of failing.
pub fn integer(name: &str, raw: Option<&str>, default: i64) -> Result<i64, AppError> {
    let Some(value) = present(raw) else {
        return Ok(default);
    };

    if let Ok(parsed) = value.parse::<i64>() {
        return Ok(parsed);
    }

    let (negative, digits) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        Ok(if negative { i64::MIN } else { i64::MAX })
    } else {
        Err(AppError::ValidationError(format!(
            "'{name}' must be an integer, got '{value}'"
        )))
    }
}

/// Parses a finite floating point number, falling back to `default`.
pub fn finite_f64(name: &str, raw: Option<&str>, default: f64) -> Result<f64, AppError> {
    let value = parse_or(name, raw, default, "a number")?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AppError::ValidationError(format!("'{name}' must be finite")))
    }
}

/// Returns the trimmed value, or `None` when absent or blank.
pub fn optional_text(raw: Option<&str>) -> Option<String> {
    present(raw).map(str::to_string)
}

fn parse_or<T: FromStr>(
    name: &str,
    raw: Option<&str>,
    default: T,
    expected: &str,
) -> Result<T, AppError> {
    match present(raw) {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| {
            AppError::ValidationError(format!("'{name}' must be {expected}, got '{value}'"))
        }),
    }
}
