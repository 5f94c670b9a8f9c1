//! Error types for the Payroll Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll calculation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Payroll Calculation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
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

    /// The IRT bracket table failed validation.
    #[error("Invalid IRT bracket table: {message}")]
    InvalidBracketTable {
        /// A description of what made the table invalid.
        message: String,
    },

    /// No tax table version is in force on the given date.
    #[error("No tax table in force on {date}")]
    TableNotFound {
        /// The date for which a table was requested.
        date: NaiveDate,
    },

    /// A monetary amount was negative where a non-negative value is required.
    #[error("Negative amount for '{field}': {value}")]
    NegativeAmount {
        /// The name of the offending input field.
        field: String,
        /// The rejected value.
        value: Decimal,
    },

    /// The service period was inverted or empty.
    #[error("Invalid service period: hire date {hire_date} must precede termination date {termination_date}")]
    InvalidServicePeriod {
        /// The hire date supplied by the caller.
        hire_date: NaiveDate,
        /// The termination date supplied by the caller.
        termination_date: NaiveDate,
    },

    /// An input value was out of its accepted range.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
