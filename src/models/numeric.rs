//! Loosely-typed numeric input handling.
//!
//! Records arriving from the hosted data store are not strictly typed:
//! fields such as disposition hours or extra-charge prices may be stored
//! as numbers or as free-text strings. [`NumericInput`] captures both
//! shapes and provides the explicit parse-with-fallback step applied at
//! the engine boundary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A numeric field that may arrive as a number or as a string.
///
/// Deserialization is untagged: JSON numbers and numeric strings both land
/// in the `Number` variant (rust_decimal accepts either), while anything
/// unparsable is preserved as `Text` so the caller can decide on a fallback.
///
/// # Example
///
/// ```
/// use billing_engine::models::NumericInput;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let parsed: NumericInput = serde_json::from_str("\"4.5\"").unwrap();
/// assert_eq!(parsed.as_decimal(), Some(Decimal::from_str("4.5").unwrap()));
///
/// let garbage: NumericInput = serde_json::from_str("\"abc\"").unwrap();
/// assert_eq!(garbage.as_decimal(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    /// A value that was already numeric (or a numeric string).
    Number(Decimal),
    /// A raw string that did not deserialize as a number.
    Text(String),
}

impl NumericInput {
    /// Attempts to interpret the input as a decimal value.
    ///
    /// Returns `None` when the underlying text is not a valid number.
    /// Leading and trailing whitespace is tolerated.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            NumericInput::Number(value) => Some(*value),
            NumericInput::Text(text) => Decimal::from_str(text.trim()).ok(),
        }
    }
}

impl From<Decimal> for NumericInput {
    fn from(value: Decimal) -> Self {
        NumericInput::Number(value)
    }
}

impl From<i64> for NumericInput {
    fn from(value: i64) -> Self {
        NumericInput::Number(Decimal::from(value))
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        NumericInput::Text(value.to_string())
    }
}
