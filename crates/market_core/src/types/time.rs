//! Calendar date type for market data tables.
//!
//! # Examples
//!
//! ```
//! use market_core::types::time::Date;
//!
//! let maturity = Date::from_ymd(2025, 8, 26).unwrap();
//! let parsed: Date = "2025-08-26".parse().unwrap();
//! assert_eq!(maturity, parsed);
//! assert_eq!(maturity.to_string(), "2025-08-26");
//! ```

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Serialises as an ISO 8601 string (`YYYY-MM-DD`).
///
/// # Examples
///
/// ```
/// use market_core::types::time::Date;
///
/// let date = Date::from_ymd(2029, 8, 24).unwrap();
/// assert_eq!(date.year(), 2029);
/// assert_eq!(date.month(), 8);
/// assert_eq!(date.day(), 24);
///
/// let start = Date::from_ymd(2024, 8, 15).unwrap();
/// let end = Date::from_ymd(2024, 8, 25).unwrap();
/// assert_eq!(end - start, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use market_core::types::time::Date;
    ///
    /// assert!(Date::from_ymd(2028, 2, 29).is_ok());
    /// assert!(Date::from_ymd(2027, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// # Examples
    ///
    /// ```
    /// use market_core::types::time::Date;
    ///
    /// assert!(Date::parse("2026-08-17").is_ok());
    /// assert!(Date::parse("17/08/2026").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(format!("'{}': {}", s, e)))
    }

    /// Returns the underlying NaiveDate.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the day of the week.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Returns the next calendar day, or `None` at the end of the supported range.
    pub fn succ(&self) -> Option<Self> {
        self.0.succ_opt().map(Date)
    }

    /// Returns the previous calendar day, or `None` at the start of the supported range.
    pub fn pred(&self) -> Option<Self> {
        self.0.pred_opt().map(Date)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_from_ymd_invalid() {
        match Date::from_ymd(2025, 13, 1) {
            Err(DateError::InvalidDate { year, month, day }) => {
                assert_eq!((year, month, day), (2025, 13, 1));
            }
            other => panic!("Expected InvalidDate, got {:?}", other),
        }
    }

    #[test]
    fn test_date_parse_and_display() {
        let date = Date::parse("2027-08-16").unwrap();
        assert_eq!(date.to_string(), "2027-08-16");
        assert_eq!(date.weekday(), Weekday::Mon);
    }

    #[test]
    fn test_date_parse_invalid() {
        let err = Date::parse("not-a-date").unwrap_err();
        assert!(matches!(err, DateError::ParseError(_)));
    }

    #[test]
    fn test_date_ordering() {
        let earlier = Date::from_ymd(2024, 8, 15).unwrap();
        let later = Date::from_ymd(2025, 8, 15).unwrap();
        assert!(earlier < later);
        assert_eq!(later - earlier, 365);
    }

    #[test]
    fn test_succ_pred() {
        let date = Date::from_ymd(2028, 2, 28).unwrap();
        assert_eq!(date.succ(), Some(Date::from_ymd(2028, 2, 29).unwrap()));
        assert_eq!(date.pred(), Some(Date::from_ymd(2028, 2, 27).unwrap()));
    }

    #[test]
    fn test_date_serde_roundtrip() {
        let date = Date::from_ymd(2029, 8, 15).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2029-08-15\"");
        let back: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
    }
}
