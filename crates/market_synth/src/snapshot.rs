//! Static spot snapshot and product terms delivered alongside the dummy
//! market data.
//!
//! Both records are plain data for downstream consumers; no generator reads
//! them.

use market_core::types::{Currency, Date};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::asset::Asset;
use crate::config::static_date;

/// Spot levels observed on a single date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// Observation date
    pub as_of: Date,
    /// Nikkei 225 closing level
    pub nikkei: f64,
    /// ZAR per 1 JPY
    pub jpy_zar: f64,
}

impl Default for MarketSnapshot {
    fn default() -> Self {
        Self {
            as_of: static_date(2024, 8, 8),
            nikkei: 34_831.15,
            jpy_zar: 0.124_632,
        }
    }
}

impl MarketSnapshot {
    /// Spot for `asset`.
    pub fn spot(&self, asset: Asset) -> f64 {
        match asset {
            Asset::Nikkei225 => self.nikkei,
            Asset::JpyZar => self.jpy_zar,
        }
    }

    /// Convert a JPY amount to ZAR at the snapshot rate.
    pub fn jpy_to_zar(&self, jpy_amount: f64) -> f64 {
        jpy_amount * self.jpy_zar
    }
}

/// Terms of the structured note the data is generated for.
///
/// The barrier is a fraction of the initial Nikkei level; coupons are
/// redemption multipliers keyed by observation year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductTerms {
    /// Initial notional amount
    pub initial_notional: f64,
    /// Notional currency
    pub notional_currency: Currency,
    /// Knock-in barrier as a fraction of the initial level
    pub barrier: f64,
    /// Coupon multiplier per observation year
    pub coupons: BTreeMap<u32, f64>,
}

impl Default for ProductTerms {
    fn default() -> Self {
        Self {
            initial_notional: 1_000_000.0,
            notional_currency: Currency::JPY,
            barrier: 0.70,
            coupons: BTreeMap::from([(1, 1.17), (2, 1.34), (3, 1.51), (4, 1.68), (5, 1.85)]),
        }
    }
}

impl ProductTerms {
    /// Coupon multiplier for `year`, if scheduled.
    pub fn coupon(&self, year: u32) -> Option<f64> {
        self.coupons.get(&year).copied()
    }

    /// Barrier level in index points for a given initial level.
    pub fn barrier_level(&self, initial_level: f64) -> f64 {
        initial_level * self.barrier
    }
}
