//! Business day arithmetic for observation and maturity schedules.
//!
//! Only weekends are treated as non-business days; no holiday calendar is
//! applied.
//!
//! ## Example
//!
//! ```rust
//! use market_core::calendar::{month_start_schedule, BusinessCalendar};
//! use market_core::types::Date;
//!
//! let calendar = BusinessCalendar::new();
//! let wednesday = Date::from_ymd(2028, 8, 16).unwrap();
//! assert_eq!(
//!     calendar.add_business_days(wednesday, 7).unwrap(),
//!     Date::from_ymd(2028, 8, 25).unwrap()
//! );
//!
//! let anchor = Date::from_ymd(2025, 8, 22).unwrap();
//! let rolls = month_start_schedule(anchor, 3, 12).unwrap();
//! assert_eq!(rolls[0], Date::from_ymd(2025, 9, 1).unwrap());
//! ```

use chrono::{Months, Weekday};

use crate::types::{Date, DateError};

/// Weekend-only business day calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BusinessCalendar;

impl BusinessCalendar {
    /// Create a new weekend-only calendar.
    pub fn new() -> Self {
        Self
    }

    /// Check if a date is a weekend.
    pub fn is_weekend(&self, date: Date) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Check if a date is a business day.
    pub fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date)
    }

    /// Get the next business day on or after the given date.
    ///
    /// # Errors
    ///
    /// [`DateError::OutOfRange`] when no business day is representable
    /// after `date`.
    pub fn following(&self, mut date: Date) -> Result<Date, DateError> {
        while !self.is_business_day(date) {
            date = step(date, true)?;
        }
        Ok(date)
    }

    /// Add business days to a date.
    ///
    /// A zero offset rolls the date forward to the next business day;
    /// a negative offset moves backwards.
    ///
    /// # Errors
    ///
    /// [`DateError::OutOfRange`] when the shift runs past the first or
    /// last representable date.
    pub fn add_business_days(&self, mut date: Date, days: i32) -> Result<Date, DateError> {
        if days == 0 {
            return self.following(date);
        }

        let forward = days > 0;
        let mut remaining = days.unsigned_abs();

        while remaining > 0 {
            date = step(date, forward)?;
            if self.is_business_day(date) {
                remaining -= 1;
            }
        }

        Ok(date)
    }
}

fn step(date: Date, forward: bool) -> Result<Date, DateError> {
    let next = if forward { date.succ() } else { date.pred() };
    next.ok_or_else(|| {
        DateError::OutOfRange(format!(
            "{} {} one calendar day",
            date,
            if forward { "+" } else { "-" }
        ))
    })
}

/// Roll a schedule of month-start dates.
///
/// The first date is `anchor` when it already falls on the first of the
/// month, otherwise the first day of the following month. Each subsequent
/// date is `step_months` months after the previous one.
pub fn month_start_schedule(
    anchor: Date,
    periods: usize,
    step_months: u32,
) -> Result<Vec<Date>, DateError> {
    let naive = anchor.into_inner();
    let month_start = Date::from_ymd(anchor.year(), anchor.month(), 1)?.into_inner();
    let first = if naive == month_start {
        month_start
    } else {
        month_start
            .checked_add_months(Months::new(1))
            .ok_or_else(|| DateError::OutOfRange(format!("{} + 1 month", anchor)))?
    };

    (0..periods)
        .map(|i| {
            let offset = step_months.saturating_mul(i as u32);
            first
                .checked_add_months(Months::new(offset))
                .map(Date::from)
                .ok_or_else(|| DateError::OutOfRange(format!("{} + {} months", anchor, offset)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_is_weekend() {
        let calendar = BusinessCalendar::new();
        assert!(calendar.is_weekend(d(2026, 1, 10))); // Saturday
        assert!(calendar.is_weekend(d(2026, 1, 11))); // Sunday
        assert!(!calendar.is_weekend(d(2026, 1, 12))); // Monday
    }

    #[test]
    fn test_following() {
        let calendar = BusinessCalendar::new();
        assert_eq!(calendar.following(d(2026, 1, 10)).unwrap(), d(2026, 1, 12));
        assert_eq!(calendar.following(d(2026, 1, 12)).unwrap(), d(2026, 1, 12));
    }

    #[test]
    fn test_add_business_days() {
        let calendar = BusinessCalendar::new();
        let friday = d(2026, 1, 9);
        let monday = d(2026, 1, 12);
        assert_eq!(calendar.add_business_days(friday, 1).unwrap(), monday);
        assert_eq!(calendar.add_business_days(friday, 2).unwrap(), d(2026, 1, 13));
        assert_eq!(calendar.add_business_days(monday, -1).unwrap(), friday);
        assert_eq!(calendar.add_business_days(d(2026, 1, 10), 0).unwrap(), monday);
    }

    #[test]
    fn test_seven_business_day_lag() {
        let calendar = BusinessCalendar::new();
        // Friday, Monday, Monday, Wednesday, Wednesday
        let cases = [
            (d(2025, 8, 15), d(2025, 8, 26)),
            (d(2026, 8, 17), d(2026, 8, 26)),
            (d(2027, 8, 16), d(2027, 8, 25)),
            (d(2028, 8, 16), d(2028, 8, 25)),
            (d(2029, 8, 15), d(2029, 8, 24)),
        ];
        for (start, expected) in cases {
            assert_eq!(calendar.add_business_days(start, 7).unwrap(), expected);
        }
    }

    #[test]
    fn test_add_business_days_past_range_end() {
        let calendar = BusinessCalendar::new();
        let last = Date::from(chrono::NaiveDate::MAX);
        let near_end = Date::from(chrono::NaiveDate::MAX - chrono::Duration::days(2));

        assert!(matches!(
            calendar.add_business_days(near_end, 5),
            Err(DateError::OutOfRange(_))
        ));
        assert!(matches!(
            calendar.add_business_days(last, 1),
            Err(DateError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_add_business_days_past_range_start() {
        let calendar = BusinessCalendar::new();
        let first = Date::from(chrono::NaiveDate::MIN);
        assert!(matches!(
            calendar.add_business_days(first, -1),
            Err(DateError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_month_start_schedule_rolls_forward() {
        let rolls = month_start_schedule(d(2025, 8, 22), 5, 12).unwrap();
        assert_eq!(
            rolls,
            vec![
                d(2025, 9, 1),
                d(2026, 9, 1),
                d(2027, 9, 1),
                d(2028, 9, 1),
                d(2029, 9, 1)
            ]
        );
    }

    #[test]
    fn test_month_start_schedule_anchor_on_first() {
        let rolls = month_start_schedule(d(2025, 12, 1), 3, 1).unwrap();
        assert_eq!(rolls, vec![d(2025, 12, 1), d(2026, 1, 1), d(2026, 2, 1)]);
    }

    #[test]
    fn test_month_start_schedule_empty() {
        assert!(month_start_schedule(d(2025, 8, 22), 0, 12).unwrap().is_empty());
    }
}
