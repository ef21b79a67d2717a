//! Core time, currency, and error types.
//!
//! This module provides:
//! - `time`: Type-safe `Date` wrapper used as the key of every generated table
//! - `currency`: ISO 4217 currency codes with metadata
//! - `error`: Structured error types for date and currency operations
//!
//! # Re-exports
//!
//! - [`Date`] from `time`
//! - [`Currency`] from `currency`
//! - [`DateError`], [`CurrencyError`] from `error`

pub mod currency;
pub mod error;
pub mod time;

pub use currency::Currency;
pub use error::{CurrencyError, DateError};
pub use time::Date;
