//! Simulated Nikkei / JPYZAR observation tables.
//!
//! ## Sampling Modes
//!
//! - **Levels**: each row draws `n` normal variates with the asset's mean and
//!   standard deviation, floored so no price or rate is non-positive.
//! - **Standard shocks**: each row draws `n` raw N(0, 1) variates with no
//!   floor, for callers that apply their own dynamics.
//!
//! Rows are emitted schedule by schedule in configuration order, dates
//! ascending within each schedule, and draws are taken row by row from a
//! single stream seeded per call.

use market_core::rng::SynthRng;
use market_core::types::Date;
use rand_distr::Normal;
use serde::Serialize;
use tracing::debug;

use crate::asset::Asset;
use crate::config::{ObservationSchedule, PathConfig};
use crate::error::{Result, SynthError};

/// One simulated value, keyed by (date, asset, simulation index).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationObservation {
    /// Observation date
    pub date: Date,
    /// Simulated asset
    pub asset: Asset,
    /// Simulation column, starting at 1
    pub simulation_index: usize,
    /// Simulated value
    pub value: f64,
}

/// One (date, asset) row across all simulation columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathRow {
    /// Observation date
    pub date: Date,
    /// Simulated asset
    pub asset: Asset,
    /// Values for `sim_1 ..= sim_n`
    pub values: Vec<f64>,
}

impl PathRow {
    /// Value of simulation column `simulation_index` (1-based).
    pub fn value(&self, simulation_index: usize) -> Option<f64> {
        simulation_index
            .checked_sub(1)
            .and_then(|i| self.values.get(i))
            .copied()
    }
}

/// Immutable table of simulated observations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulatedPaths {
    seed: u64,
    n_simulations: usize,
    rows: Vec<PathRow>,
}

impl SimulatedPaths {
    /// Seed the table was drawn with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of simulation columns.
    pub fn n_simulations(&self) -> usize {
        self.n_simulations
    }

    /// Rows in output order.
    pub fn rows(&self) -> &[PathRow] {
        &self.rows
    }

    /// `(rows, columns)` including the leading `Date` and `Asset` columns.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), 2 + self.n_simulations)
    }

    /// Column headers: `Date`, `Asset`, `sim_1 ..= sim_n`.
    pub fn column_names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(2 + self.n_simulations);
        names.push("Date".to_string());
        names.push("Asset".to_string());
        names.extend((1..=self.n_simulations).map(|i| format!("sim_{}", i)));
        names
    }

    /// Rows for one asset, in date order.
    pub fn rows_for(&self, asset: Asset) -> impl Iterator<Item = &PathRow> + '_ {
        self.rows.iter().filter(move |row| row.asset == asset)
    }

    /// Row for an exact (date, asset) pair.
    pub fn row(&self, date: Date, asset: Asset) -> Option<&PathRow> {
        self.rows
            .iter()
            .find(|row| row.date == date && row.asset == asset)
    }

    /// Single value lookup; `simulation_index` is 1-based.
    pub fn value(&self, date: Date, asset: Asset, simulation_index: usize) -> Option<f64> {
        self.row(date, asset)?.value(simulation_index)
    }

    /// Iterate over every value in long form, row by row.
    pub fn observations(&self) -> impl Iterator<Item = SimulationObservation> + '_ {
        self.rows.iter().flat_map(|row| {
            row.values
                .iter()
                .enumerate()
                .map(move |(i, &value)| SimulationObservation {
                    date: row.date,
                    asset: row.asset,
                    simulation_index: i + 1,
                    value,
                })
        })
    }

    /// Render the table as CSV with a header row.
    pub fn to_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(self.column_names())
            .map_err(|e| SynthError::render(e.to_string()))?;

        for row in &self.rows {
            let mut record = Vec::with_capacity(2 + row.values.len());
            record.push(row.date.to_string());
            record.push(row.asset.label().to_string());
            record.extend(row.values.iter().map(|v| v.to_string()));
            writer
                .write_record(&record)
                .map_err(|e| SynthError::render(e.to_string()))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| SynthError::render(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| SynthError::render(e.to_string()))
    }
}

/// Simulation count and seed for one table.
///
/// The default is 10 simulations with seed 42.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationRequest {
    /// Number of `sim_*` columns, at least 1
    pub n_simulations: usize,
    /// Seed for the table's random stream
    pub seed: u64,
}

impl Default for SimulationRequest {
    fn default() -> Self {
        Self {
            n_simulations: 10,
            seed: 42,
        }
    }
}

impl SimulationRequest {
    /// Request `n_simulations` columns drawn with `seed`.
    pub fn new(n_simulations: usize, seed: u64) -> Self {
        Self {
            n_simulations,
            seed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SamplingMode {
    Levels,
    StandardShocks,
}

/// Path simulator
#[derive(Debug, Clone, Default)]
pub struct PathSimulator {
    config: PathConfig,
}

impl PathSimulator {
    /// Create a simulator from a validated configuration
    pub fn new(config: PathConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Simulator settings.
    pub fn config(&self) -> &PathConfig {
        &self.config
    }

    /// Simulate levels with the configured simulation count and seed.
    pub fn generate(&self) -> Result<SimulatedPaths> {
        self.generate_paths(self.config.n_simulations, self.config.seed)
    }

    /// Simulate levels for a [`SimulationRequest`].
    ///
    /// # Errors
    ///
    /// [`SynthError::InvalidArgument`] when `request.n_simulations` is zero.
    pub fn generate_request(&self, request: SimulationRequest) -> Result<SimulatedPaths> {
        self.generate_paths(request.n_simulations, request.seed)
    }

    /// Simulate floored levels for every configured (date, asset) row.
    ///
    /// # Errors
    ///
    /// [`SynthError::InvalidArgument`] when `n_simulations` is zero.
    pub fn generate_paths(&self, n_simulations: usize, seed: u64) -> Result<SimulatedPaths> {
        self.simulate(n_simulations, seed, SamplingMode::Levels)
    }

    /// Draw raw standard normal shocks for every configured (date, asset) row.
    ///
    /// # Errors
    ///
    /// [`SynthError::InvalidArgument`] when `n_simulations` is zero.
    pub fn generate_shocks(&self, n_simulations: usize, seed: u64) -> Result<SimulatedPaths> {
        self.simulate(n_simulations, seed, SamplingMode::StandardShocks)
    }

    fn simulate(&self, n_simulations: usize, seed: u64, mode: SamplingMode) -> Result<SimulatedPaths> {
        if n_simulations < 1 {
            return Err(SynthError::invalid_argument(format!(
                "n_simulations must be at least 1, got {}",
                n_simulations
            )));
        }

        let mut rng = SynthRng::from_seed(seed);
        let mut rows = Vec::with_capacity(self.config.row_count());

        for schedule in &self.config.assets {
            let dist = match mode {
                SamplingMode::Levels => Some(level_distribution(schedule)?),
                SamplingMode::StandardShocks => None,
            };

            for &date in &schedule.dates {
                let mut values = vec![0.0; n_simulations];
                match &dist {
                    Some(dist) => {
                        rng.fill_from(dist, &mut values);
                        for value in values.iter_mut() {
                            *value = value.max(self.config.floor);
                        }
                    }
                    None => rng.fill_normal(&mut values),
                }
                rows.push(PathRow {
                    date,
                    asset: schedule.asset,
                    values,
                });
            }
        }

        debug!(
            seed,
            n_simulations,
            rows = rows.len(),
            mode = ?mode,
            "simulated paths"
        );

        Ok(SimulatedPaths {
            seed,
            n_simulations,
            rows,
        })
    }
}

fn level_distribution(schedule: &ObservationSchedule) -> Result<Normal<f64>> {
    Normal::new(schedule.mean, schedule.std_dev).map_err(|e| {
        SynthError::invalid_argument(format!(
            "{} level distribution N({}, {}): {}",
            schedule.asset, schedule.mean, schedule.std_dev, e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_default_shape() {
        let paths = PathSimulator::default().generate_paths(10, 42).unwrap();
        assert_eq!(paths.shape(), (11, 12));
        assert_eq!(paths.column_names().len(), 12);
        assert_eq!(paths.column_names()[2], "sim_1");
        assert_eq!(paths.column_names()[11], "sim_10");
    }

    #[test]
    fn test_equity_rows_precede_fx_rows() {
        let paths = PathSimulator::default().generate_paths(3, 42).unwrap();
        let assets: Vec<Asset> = paths.rows().iter().map(|r| r.asset).collect();
        assert!(assets[..6].iter().all(|&a| a == Asset::Nikkei225));
        assert!(assets[6..].iter().all(|&a| a == Asset::JpyZar));

        for asset in [Asset::Nikkei225, Asset::JpyZar] {
            let dates: Vec<Date> = paths.rows_for(asset).map(|r| r.date).collect();
            assert!(dates.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_zero_simulations_rejected() {
        let result = PathSimulator::default().generate_paths(0, 42);
        assert!(matches!(result, Err(SynthError::InvalidArgument(_))));

        let result = PathSimulator::default().generate_shocks(0, 42);
        assert!(matches!(result, Err(SynthError::InvalidArgument(_))));
    }

    #[test]
    fn test_values_floored() {
        let mut config = PathConfig::default();
        // Mean far below zero so nearly every draw is clipped
        config.assets[1].mean = -1.0;
        let simulator = PathSimulator::new(config).unwrap();
        let paths = simulator.generate_paths(50, 3).unwrap();

        assert!(paths.observations().all(|o| o.value >= 0.001));
        assert!(paths
            .rows_for(Asset::JpyZar)
            .flat_map(|r| r.values.iter())
            .all(|&v| v == 0.001));
    }

    #[test]
    fn test_first_equity_value_sanity_bound() {
        let paths = PathSimulator::default().generate_paths(10, 42).unwrap();
        let first = paths.value(d(2024, 8, 15), Asset::Nikkei225, 1).unwrap();
        assert!((31_000.0..=39_000.0).contains(&first), "{}", first);
    }

    #[test]
    fn test_same_seed_identical_table() {
        let simulator = PathSimulator::default();
        let a = simulator.generate_paths(10, 42).unwrap();
        let b = simulator.generate_paths(10, 42).unwrap();
        assert_eq!(a, b);
        assert_eq!(simulator.generate().unwrap(), a);
    }

    #[test]
    fn test_default_request_matches_default_arguments() {
        let simulator = PathSimulator::default();
        let request = SimulationRequest::default();
        assert_eq!(request, SimulationRequest::new(10, 42));
        assert_eq!(
            simulator.generate_request(request).unwrap(),
            simulator.generate_paths(10, 42).unwrap()
        );
        assert_eq!(
            simulator.generate_request(request).unwrap(),
            simulator.generate().unwrap()
        );
    }

    #[test]
    fn test_request_with_zero_simulations_rejected() {
        let result = PathSimulator::default().generate_request(SimulationRequest::new(0, 42));
        assert!(matches!(result, Err(SynthError::InvalidArgument(_))));
    }

    #[test]
    fn test_level_distribution_rejects_bad_std_dev() {
        let schedule = ObservationSchedule::new(Asset::JpyZar, 0.125, f64::NAN, vec![]);
        assert!(matches!(
            level_distribution(&schedule),
            Err(SynthError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_different_seed_different_table() {
        let simulator = PathSimulator::default();
        assert_ne!(
            simulator.generate_paths(4, 1).unwrap(),
            simulator.generate_paths(4, 2).unwrap()
        );
    }

    #[test]
    fn test_shocks_unfloored_standard_normals() {
        let paths = PathSimulator::default().generate_shocks(500, 42).unwrap();
        assert_eq!(paths.shape(), (11, 502));

        let values: Vec<f64> = paths.observations().map(|o| o.value).collect();
        assert!(values.iter().any(|&v| v < 0.0));
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        assert!(mean.abs() < 0.05, "{}", mean);
    }

    #[test]
    fn test_shocks_share_stream_with_levels() {
        // Levels are mean + std_dev * z for the same stream position
        let simulator = PathSimulator::default();
        let shocks = simulator.generate_shocks(1, 9).unwrap();
        let levels = simulator.generate_paths(1, 9).unwrap();
        let z = shocks.rows()[0].values[0];
        let level = levels.rows()[0].values[0];
        assert!((level - (35_000.0 + 1_000.0 * z)).abs() < 1e-6);
    }

    #[test]
    fn test_observations_long_form() {
        let paths = PathSimulator::default().generate_paths(2, 42).unwrap();
        let observations: Vec<SimulationObservation> = paths.observations().collect();
        assert_eq!(observations.len(), 22);
        assert_eq!(observations[0].simulation_index, 1);
        assert_eq!(observations[1].simulation_index, 2);
        assert_eq!(observations[1].date, observations[0].date);
        assert_eq!(observations[21].asset, Asset::JpyZar);
        assert_eq!(observations[21].date, d(2029, 8, 24));
    }

    #[test]
    fn test_value_lookup_out_of_range() {
        let paths = PathSimulator::default().generate_paths(2, 42).unwrap();
        let date = d(2025, 8, 26);
        assert!(paths.value(date, Asset::JpyZar, 0).is_none());
        assert!(paths.value(date, Asset::JpyZar, 3).is_none());
        assert!(paths.value(date, Asset::Nikkei225, 1).is_none());
        assert!(paths.value(date, Asset::JpyZar, 2).is_some());
    }

    #[test]
    fn test_to_csv() {
        let paths = PathSimulator::default().generate_paths(3, 42).unwrap();
        let csv = paths.to_csv().unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Date,Asset,sim_1,sim_2,sim_3"));
        let first = lines.next().unwrap();
        assert!(first.starts_with("2024-08-15,Nikkei,"));
        assert_eq!(lines.count(), 10);
    }
}
