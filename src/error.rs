//! Error types for the boundary around the shape engine.
//!
//! The engine itself never fails: out-of-range values are clamped by the
//! constraint resolver. Errors only come from text that cannot be turned into
//! numbers, colors or documents in the first place.

use thiserror::Error;

/// Errors raised when input is rejected before it reaches the resolver, or
/// when an exported artifact cannot be produced.
#[derive(Error, Debug)]
pub enum ShapeError {
    /// A numeric field did not parse.
    #[error("{field} must be a number, got {value:?}")]
    InvalidNumber {
        /// The name of the field being parsed.
        field: &'static str,
        /// The raw text that failed to parse.
        value: String,
    },

    /// A numeric field was negative where only non-negative values are allowed.
    #[error("{field} must not be negative, got {value}")]
    NegativeValue {
        /// The name of the field being parsed.
        field: &'static str,
        /// The offending value.
        value: f64,
    },

    /// Canvas dimensions must be finite and strictly positive.
    #[error("invalid canvas dimensions {width}x{height}")]
    InvalidDimension { width: f64, height: f64 },

    /// A hex color did not parse.
    #[error("invalid hex color {0:?}")]
    InvalidColor(String),

    /// The SVG parser rejected an exported document.
    #[error("exported SVG is not valid: {0}")]
    InvalidSvg(String),

    /// A share link base was not an absolute URL.
    #[error("invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON profile (de)serialization failed.
    #[error("profile error: {0}")]
    Profile(#[from] serde_json::Error),
}

/// Parses a user-supplied numeric field.
///
/// Rejects text that is not a finite number and negative values. Clamping
/// against the canvas is left to the resolver.
pub fn parse_number(field: &'static str, text: &str) -> Result<f64, ShapeError> {
    let value: f64 = text
        .trim()
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .ok_or_else(|| ShapeError::InvalidNumber {
            field,
            value: text.to_string(),
        })?;

    if value < 0.0 {
        return Err(ShapeError::NegativeValue { field, value });
    }
    Ok(value)
}
