//! Synthetic two-currency yield curve.
//!
//! For every maturity one uniform draw is taken for the domestic
//! currency, then one per maturity for the foreign currency, each scaled
//! into its band and rounded.

use market_core::rng::SynthRng;
use market_core::types::{Currency, Date};
use serde::Serialize;
use tracing::debug;

use crate::config::{RateBand, YieldCurveConfig};
use crate::error::{Result, SynthError};

/// One maturity of the curve. Rates are in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YieldCurveRow {
    /// Maturity date (table key)
    pub maturity_date: Date,
    /// Domestic currency rate
    pub rate_domestic: f64,
    /// Foreign currency rate
    pub rate_foreign: f64,
}

/// Immutable yield curve table keyed by maturity date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YieldCurve {
    domestic: Currency,
    foreign: Currency,
    rows: Vec<YieldCurveRow>,
}

impl YieldCurve {
    /// Rows in maturity order.
    pub fn rows(&self) -> &[YieldCurveRow] {
        &self.rows
    }

    /// Number of maturities.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the curve has no maturities.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Currency of the `rate_domestic` column.
    pub fn domestic_currency(&self) -> Currency {
        self.domestic
    }

    /// Currency of the `rate_foreign` column.
    pub fn foreign_currency(&self) -> Currency {
        self.foreign
    }

    /// Column headers: `maturity_date` then one per currency code.
    pub fn column_names(&self) -> Vec<String> {
        vec![
            "maturity_date".to_string(),
            self.domestic.code().to_string(),
            self.foreign.code().to_string(),
        ]
    }

    /// Maturity dates in order.
    pub fn maturities(&self) -> impl Iterator<Item = Date> + '_ {
        self.rows.iter().map(|row| row.maturity_date)
    }

    /// Row for an exact maturity date.
    pub fn get(&self, maturity_date: Date) -> Option<&YieldCurveRow> {
        self.rows
            .binary_search_by(|row| row.maturity_date.cmp(&maturity_date))
            .ok()
            .map(|i| &self.rows[i])
    }

    /// Rate for `currency` at an exact maturity date.
    pub fn rate(&self, maturity_date: Date, currency: Currency) -> Option<f64> {
        let row = self.get(maturity_date)?;
        if currency == self.domestic {
            Some(row.rate_domestic)
        } else if currency == self.foreign {
            Some(row.rate_foreign)
        } else {
            None
        }
    }

    /// Render the table as CSV with a header row.
    pub fn to_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(self.column_names())
            .map_err(|e| SynthError::render(e.to_string()))?;

        for row in &self.rows {
            writer
                .write_record([
                    row.maturity_date.to_string(),
                    row.rate_domestic.to_string(),
                    row.rate_foreign.to_string(),
                ])
                .map_err(|e| SynthError::render(e.to_string()))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| SynthError::render(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| SynthError::render(e.to_string()))
    }
}

/// Yield curve generator
#[derive(Debug, Clone, Default)]
pub struct YieldCurveGenerator {
    config: YieldCurveConfig,
}

impl YieldCurveGenerator {
    /// Create a generator from a validated configuration
    pub fn new(config: YieldCurveConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Generator settings.
    pub fn config(&self) -> &YieldCurveConfig {
        &self.config
    }

    /// Generate the curve with the configured seed.
    pub fn generate(&self) -> YieldCurve {
        self.generate_with_seed(self.config.seed)
    }

    /// Generate the curve with an explicit seed.
    pub fn generate_with_seed(&self, seed: u64) -> YieldCurve {
        let mut rng = SynthRng::from_seed(seed);
        let count = self.config.maturities.len();

        let domestic = self.draw_rates(&mut rng, &self.config.domestic, count);
        let foreign = self.draw_rates(&mut rng, &self.config.foreign, count);

        let rows: Vec<YieldCurveRow> = self
            .config
            .maturities
            .iter()
            .zip(domestic.into_iter().zip(foreign))
            .map(|(&maturity_date, (rate_domestic, rate_foreign))| YieldCurveRow {
                maturity_date,
                rate_domestic,
                rate_foreign,
            })
            .collect();

        debug!(
            seed,
            maturities = rows.len(),
            domestic = %self.config.domestic.currency,
            foreign = %self.config.foreign.currency,
            "generated yield curve"
        );

        YieldCurve {
            domestic: self.config.domestic.currency,
            foreign: self.config.foreign.currency,
            rows,
        }
    }

    fn draw_rates(&self, rng: &mut SynthRng, band: &RateBand, count: usize) -> Vec<f64> {
        let mut draws = vec![0.0; count];
        rng.fill_uniform(&mut draws);
        draws
            .into_iter()
            .map(|u| round_to(band.scale(u), self.config.decimals))
            .collect()
    }
}

/// Round half away from zero to `decimals` places.
pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
