//! # market_synth: Synthetic JPY/ZAR Market Data
//!
//! Seeded placeholder inputs for a downstream pricing or risk system:
//!
//! - [`yield_curve`]: JPY and ZAR rates across fixed maturities
//! - [`paths`]: Nikkei 225 and JPYZAR simulation tables across fixed
//!   observation dates
//! - [`snapshot`]: Spot snapshot and product terms delivered with the data
//! - [`config`]: Schedules, rate bands and level parameters
//!
//! Every call seeds its own random stream, so the same seed always yields
//! the same table and generators can be used from several threads.
//!
//! ## Usage Examples
//!
//! ```rust
//! use market_synth::prelude::*;
//!
//! let curve = generate_yield_curve();
//! assert_eq!(curve.column_names(), vec!["maturity_date", "JPY", "ZAR"]);
//!
//! let paths = generate_simulated_paths(10, 42).unwrap();
//! assert_eq!(paths.shape(), (11, 12));
//!
//! assert!(generate_simulated_paths(0, 42).is_err());
//! ```

#![deny(missing_docs)]

pub mod asset;
pub mod config;
pub mod error;
pub mod paths;
pub mod snapshot;
pub mod yield_curve;

pub use error::{Result, SynthError};

use paths::{PathSimulator, SimulatedPaths};
use yield_curve::{YieldCurve, YieldCurveGenerator};

/// Generate the default JPY/ZAR yield curve (seed 42).
pub fn generate_yield_curve() -> YieldCurve {
    YieldCurveGenerator::default().generate()
}

/// Simulate the default Nikkei/JPYZAR table.
///
/// # Errors
///
/// [`SynthError::InvalidArgument`] when `n_simulations` is zero.
pub fn generate_simulated_paths(n_simulations: usize, seed: u64) -> Result<SimulatedPaths> {
    PathSimulator::default().generate_paths(n_simulations, seed)
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::asset::{Asset, AssetKind};
    pub use crate::config::{
        ConfigError, MarketDataConfig, ObservationSchedule, PathConfig, RateBand,
        YieldCurveConfig, FX_FIXING_LAG,
    };
    pub use crate::error::SynthError;
    pub use crate::paths::{
        PathRow, PathSimulator, SimulatedPaths, SimulationObservation, SimulationRequest,
    };
    pub use crate::snapshot::{MarketSnapshot, ProductTerms};
    pub use crate::yield_curve::{YieldCurve, YieldCurveGenerator, YieldCurveRow};
    pub use crate::{generate_simulated_paths, generate_yield_curve};
}
