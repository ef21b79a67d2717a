//! Generator configuration.
//!
//! [`MarketDataConfig::default`] carries the fixed schedules, rate bands and
//! level parameters used for the JPY/ZAR dummy data. A TOML document can
//! override any subset of them via [`MarketDataConfig::from_toml_str`];
//! missing sections and fields keep their defaults.

use market_core::calendar::{month_start_schedule, BusinessCalendar};
use market_core::types::{Currency, Date};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::asset::Asset;
use crate::error::SynthError;

/// Business days between an equity fixing and the matching FX fixing.
pub const FX_FIXING_LAG: i32 = 7;

/// Date from a literal in a `Default` impl.
///
/// This is the only non-test panic site on date construction; callers pass
/// compile-time literals that are valid calendar dates.
pub(crate) fn static_date(year: i32, month: u32, day: u32) -> Date {
    Date::from_ymd(year, month, day).expect("literal date is a valid calendar date")
}

/// Rate band for one currency of the yield curve, in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateBand {
    /// Curve currency
    pub currency: Currency,
    /// Lower bound (inclusive)
    pub low: f64,
    /// Upper bound
    pub high: f64,
}

impl RateBand {
    /// Create a new band.
    pub fn new(currency: Currency, low: f64, high: f64) -> Self {
        Self {
            currency,
            low,
            high,
        }
    }

    /// Map a uniform draw in [0, 1) into the band.
    #[inline]
    pub fn scale(&self, draw: f64) -> f64 {
        self.low + draw * (self.high - self.low)
    }

    /// Check whether `rate` lies inside the closed band.
    pub fn contains(&self, rate: f64) -> bool {
        rate >= self.low && rate <= self.high
    }
}

/// Yield curve generator settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct YieldCurveConfig {
    /// Seed for the rate draws
    pub seed: u64,
    /// Maturity dates, strictly increasing
    pub maturities: Vec<Date>,
    /// Domestic currency band
    pub domestic: RateBand,
    /// Foreign currency band
    pub foreign: RateBand,
    /// Decimal places kept on each rate
    pub decimals: u32,
}

impl Default for YieldCurveConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            maturities: vec![
                static_date(2025, 8, 26),
                static_date(2026, 8, 26),
                static_date(2027, 8, 25),
                static_date(2028, 8, 25),
                static_date(2029, 8, 24),
            ],
            domestic: RateBand::new(Currency::JPY, 0.2, 1.0),
            foreign: RateBand::new(Currency::ZAR, 6.0, 10.0),
            decimals: 3,
        }
    }
}

impl YieldCurveConfig {
    /// Default bands with maturities rolled on month starts.
    ///
    /// `anchor` is rolled forward to the next first-of-month, then every
    /// `step_months` months for `periods` maturities.
    pub fn month_start(anchor: Date, periods: usize, step_months: u32) -> Result<Self, SynthError> {
        Ok(Self {
            maturities: month_start_schedule(anchor, periods, step_months)?,
            ..Self::default()
        })
    }

    /// Validate the yield curve settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        collect(|errors| self.validate_into(errors))
    }

    fn validate_into(&self, errors: &mut Vec<String>) {
        if self.maturities.is_empty() {
            errors.push("yield_curve.maturities must not be empty".to_string());
        }
        check_increasing("yield_curve.maturities", &self.maturities, errors);

        for (name, band) in [("domestic", &self.domestic), ("foreign", &self.foreign)] {
            if !(band.low.is_finite() && band.high.is_finite()) || band.low >= band.high {
                errors.push(format!(
                    "yield_curve.{} band [{}, {}] must satisfy low < high",
                    name, band.low, band.high
                ));
            }
        }

        if self.domestic.currency == self.foreign.currency {
            errors.push(format!(
                "yield_curve domestic and foreign currencies are both {}",
                self.domestic.currency
            ));
        }

        if self.decimals > 12 {
            errors.push(format!("yield_curve.decimals {} exceeds 12", self.decimals));
        }
    }
}

/// Observation schedule and level parameters for one asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationSchedule {
    /// Simulated asset
    pub asset: Asset,
    /// Mean level of the draws
    pub mean: f64,
    /// Standard deviation of the draws
    pub std_dev: f64,
    /// Observation dates, strictly increasing
    pub dates: Vec<Date>,
}

impl ObservationSchedule {
    /// Create a schedule from explicit dates.
    pub fn new(asset: Asset, mean: f64, std_dev: f64, dates: Vec<Date>) -> Self {
        Self {
            asset,
            mean,
            std_dev,
            dates,
        }
    }

    /// Create a schedule that fixes `business_days` after each reference date.
    ///
    /// # Errors
    ///
    /// [`SynthError::Date`] when a shifted date runs off the calendar.
    pub fn lagged(
        asset: Asset,
        mean: f64,
        std_dev: f64,
        reference: &[Date],
        business_days: i32,
    ) -> Result<Self, SynthError> {
        let calendar = BusinessCalendar::new();
        let dates = reference
            .iter()
            .map(|&date| calendar.add_business_days(date, business_days))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(asset, mean, std_dev, dates))
    }
}

/// Path simulator settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// Simulation count used when none is given
    pub n_simulations: usize,
    /// Seed used when none is given
    pub seed: u64,
    /// Minimum value kept for any simulated level
    pub floor: f64,
    /// Per-asset schedules, in output row order
    pub assets: Vec<ObservationSchedule>,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            n_simulations: 10,
            seed: 42,
            floor: 0.001,
            assets: vec![
                ObservationSchedule::new(
                    Asset::Nikkei225,
                    35_000.0,
                    1_000.0,
                    vec![
                        static_date(2024, 8, 15),
                        static_date(2025, 8, 15),
                        static_date(2026, 8, 17),
                        static_date(2027, 8, 16),
                        static_date(2028, 8, 16),
                        static_date(2029, 8, 15),
                    ],
                ),
                ObservationSchedule::new(
                    Asset::JpyZar,
                    0.125,
                    0.01,
                    vec![
                        static_date(2025, 8, 26),
                        static_date(2026, 8, 26),
                        static_date(2027, 8, 25),
                        static_date(2028, 8, 25),
                        static_date(2029, 8, 24),
                    ],
                ),
            ],
        }
    }
}

impl PathConfig {
    /// Total number of (date, asset) rows produced per table.
    pub fn row_count(&self) -> usize {
        self.assets.iter().map(|s| s.dates.len()).sum()
    }

    /// Schedule for `asset`, if configured.
    pub fn schedule(&self, asset: Asset) -> Option<&ObservationSchedule> {
        self.assets.iter().find(|s| s.asset == asset)
    }

    /// Validate the path simulator settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        collect(|errors| self.validate_into(errors))
    }

    fn validate_into(&self, errors: &mut Vec<String>) {
        if self.n_simulations == 0 {
            errors.push("paths.n_simulations must be greater than 0".to_string());
        }
        if !(self.floor.is_finite() && self.floor > 0.0) {
            errors.push(format!("paths.floor {} must be positive", self.floor));
        }
        if self.assets.is_empty() {
            errors.push("paths.assets must not be empty".to_string());
        }

        for (i, schedule) in self.assets.iter().enumerate() {
            let name = format!("paths.assets[{}] ({})", i, schedule.asset);
            if schedule.dates.is_empty() {
                errors.push(format!("{} dates must not be empty", name));
            }
            check_increasing(&name, &schedule.dates, errors);
            if !schedule.mean.is_finite() {
                errors.push(format!("{} mean must be finite", name));
            }
            if !(schedule.std_dev.is_finite() && schedule.std_dev > 0.0) {
                errors.push(format!(
                    "{} std_dev {} must be positive",
                    name, schedule.std_dev
                ));
            }
            if self.assets[..i].iter().any(|s| s.asset == schedule.asset) {
                errors.push(format!("{} is configured more than once", name));
            }
        }
    }
}

/// Full generator configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketDataConfig {
    /// Yield curve settings
    pub yield_curve: YieldCurveConfig,
    /// Path simulator settings
    pub paths: PathConfig,
}

impl MarketDataConfig {
    /// Parse configuration from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Parse and validate configuration from a TOML document
    pub fn from_toml_str_validated(content: &str) -> Result<Self, ConfigError> {
        let config = Self::from_toml_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        collect(|errors| {
            self.yield_curve.validate_into(errors);
            self.paths.validate_into(errors);
        })
    }
}

fn collect(check: impl FnOnce(&mut Vec<String>)) -> Result<(), ConfigError> {
    let mut errors = Vec::new();
    check(&mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::Validation(errors))
    }
}

fn check_increasing(name: &str, dates: &[Date], errors: &mut Vec<String>) {
    for pair in dates.windows(2) {
        if pair[1] <= pair[0] {
            errors.push(format!(
                "{} must be strictly increasing ({} follows {})",
                name, pair[1], pair[0]
            ));
        }
    }
}

/// Configuration error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Parse error in the TOML document
    Parse(String),
    /// Validation error
    Validation(Vec<String>),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "Parse error: {}", msg),
            Self::Validation(errors) => write!(f, "Validation errors: {}", errors.join("; ")),
        }
    }
}

impl std::error::Error for ConfigError {}
