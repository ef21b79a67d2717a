//! Currency types for synthetic market data.
//!
//! # Examples
//!
//! ```
//! use market_core::types::currency::Currency;
//!
//! assert_eq!(Currency::JPY.code(), "JPY");
//! assert_eq!(Currency::ZAR.to_string(), "ZAR");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::CurrencyError;

/// ISO 4217 currency codes of the curve columns.
///
/// # Examples
///
/// ```
/// use market_core::types::currency::Currency;
///
/// // Parse from string (case-insensitive)
/// let zar: Currency = "zar".parse().unwrap();
/// assert_eq!(zar, Currency::ZAR);
/// ```
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// Japanese Yen
    JPY,
    /// South African Rand
    ZAR,
    /// United States Dollar, accepted as a curve currency but not in the
    /// default configuration
    USD,
}

impl Currency {
    /// Returns the ISO 4217 three-letter currency code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::JPY => "JPY",
            Currency::ZAR => "ZAR",
            Currency::USD => "USD",
        }
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, CurrencyError> {
        match s.to_uppercase().as_str() {
            "JPY" => Ok(Currency::JPY),
            "ZAR" => Ok(Currency::ZAR),
            "USD" => Ok(Currency::USD),
            _ => Err(CurrencyError::UnknownCurrency(s.to_string())),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
