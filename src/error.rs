//! Error types for the pricing and invoicing engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The calculation layer itself is infallible (malformed numeric input
//! degrades to zero contributions); errors only arise when loading
//! configuration or validating requests at the API boundary.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the pricing and invoicing engine.
///
/// # Example
///
/// ```
/// use billing_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A transfer record was invalid or contained inconsistent data.
    #[error("Invalid transfer '{transfer_id}': {message}")]
    InvalidTransfer {
        /// The ID of the invalid transfer.
        transfer_id: String,
        /// A description of what made the transfer invalid.
        message: String,
    },

    /// A tax rate outside the accepted range was supplied.
    #[error("Invalid tax rate: {rate}")]
    InvalidTaxRate {
        /// The rejected rate, as a percentage value.
        rate: Decimal,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
