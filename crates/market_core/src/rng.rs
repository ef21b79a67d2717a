//! Seeded random stream for synthetic data generation.
//!
//! Every generator call owns its own [`SynthRng`]. There is no process-wide
//! generator, so generators can run on several threads without locking and
//! a given seed always reproduces the same draws.
//!
//! Draws are taken in buffer order, one buffer per table row:
//!
//! - [`SynthRng::fill_uniform`]: rates scaled into a band
//! - [`SynthRng::fill_normal`]: raw N(0, 1) shocks
//! - [`SynthRng::fill_from`]: levels from any `Distribution<f64>`
//!
//! ## Usage Example
//!
//! ```rust
//! use market_core::rng::SynthRng;
//! use rand_distr::Normal;
//!
//! let mut rng = SynthRng::from_seed(12345);
//!
//! let mut rates = [0.0; 5];
//! rng.fill_uniform(&mut rates);
//! assert!(rates.iter().all(|u| (0.0..1.0).contains(u)));
//!
//! let level = Normal::new(35_000.0, 1_000.0).unwrap();
//! let mut row = vec![0.0; 10];
//! rng.fill_from(&level, &mut row);
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Owned, seeded pseudo-random stream.
///
/// The seed is kept so a table can report what it was drawn with.
#[derive(Debug, Clone)]
pub struct SynthRng {
    inner: StdRng,
    seed: u64,
}

impl SynthRng {
    /// Stream seeded from `seed` via `StdRng::seed_from_u64`.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed the stream was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Overwrite `buffer` with uniform draws in [0, 1).
    pub fn fill_uniform(&mut self, buffer: &mut [f64]) {
        buffer
            .iter_mut()
            .for_each(|slot| *slot = self.inner.gen::<f64>());
    }

    /// Overwrite `buffer` with standard normal shocks.
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        self.fill_from(&StandardNormal, buffer);
    }

    /// Overwrite `buffer` with draws from `dist`.
    #[inline]
    pub fn fill_from<D: Distribution<f64>>(&mut self, dist: &D, buffer: &mut [f64]) {
        buffer
            .iter_mut()
            .for_each(|slot| *slot = dist.sample(&mut self.inner));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand_distr::Normal;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SynthRng::from_seed(7);
        let mut b = SynthRng::from_seed(7);
        let mut buf_a = vec![0.0; 64];
        let mut buf_b = vec![0.0; 64];
        a.fill_normal(&mut buf_a);
        b.fill_normal(&mut buf_b);
        assert_eq!(buf_a, buf_b);
    }

    #[test]
    fn test_different_seed_different_sequence() {
        let mut xs = [0.0; 8];
        let mut ys = [0.0; 8];
        SynthRng::from_seed(1).fill_uniform(&mut xs);
        SynthRng::from_seed(2).fill_uniform(&mut ys);
        assert_ne!(xs, ys);
    }

    #[test]
    fn test_fill_uniform_in_unit_interval() {
        let mut rng = SynthRng::from_seed(42);
        let mut buffer = vec![0.0; 1000];
        rng.fill_uniform(&mut buffer);
        assert!(buffer.iter().all(|&u| (0.0..1.0).contains(&u)));
    }

    #[test]
    fn test_fill_normal_empty_buffer() {
        let mut rng = SynthRng::from_seed(42);
        let mut buffer: Vec<f64> = Vec::new();
        rng.fill_normal(&mut buffer);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_fill_from_sample_moments() {
        let mut rng = SynthRng::from_seed(42);
        let dist = Normal::new(0.125, 0.01).unwrap();
        let mut buffer = vec![0.0; 20_000];
        rng.fill_from(&dist, &mut buffer);

        let n = buffer.len() as f64;
        let mean = buffer.iter().sum::<f64>() / n;
        let var = buffer.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
        assert_relative_eq!(mean, 0.125, epsilon = 1e-3);
        assert_relative_eq!(var.sqrt(), 0.01, epsilon = 1e-3);
    }

    #[test]
    fn test_split_buffers_continue_one_stream() {
        let mut whole = SynthRng::from_seed(99);
        let mut split = SynthRng::from_seed(99);
        let mut all = [0.0; 6];
        whole.fill_normal(&mut all);

        let (mut head, mut tail) = ([0.0; 2], [0.0; 4]);
        split.fill_normal(&mut head);
        split.fill_normal(&mut tail);
        assert_eq!(&all[..2], &head);
        assert_eq!(&all[2..], &tail);
    }
}
