//! Error types for structured error handling.
//!
//! This module provides:
//! - `DateError`: Errors from date construction, parsing, and schedule rolling
//! - `CurrencyError`: Errors from currency parsing

use thiserror::Error;

/// Date-related errors.
///
/// # Examples
/// ```
/// use market_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2025, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2025-2-30");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    #[error("Date parse error: {0}")]
    ParseError(String),

    /// Date arithmetic left the representable range.
    #[error("Date out of range: {0}")]
    OutOfRange(String),
}

/// Currency-related errors.
///
/// # Examples
/// ```
/// use market_core::types::CurrencyError;
///
/// let err = CurrencyError::UnknownCurrency("XYZ".to_string());
/// assert_eq!(format!("{}", err), "Unknown currency: XYZ");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    /// Unknown currency code.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_error_display() {
        let err = DateError::ParseError("bad input".to_string());
        assert_eq!(err.to_string(), "Date parse error: bad input");

        let err = DateError::OutOfRange("2025-01-01 + 100000 months".to_string());
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_currency_error_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&CurrencyError::UnknownCurrency("ABC".to_string()));
    }
}
