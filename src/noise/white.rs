//! Gaussian white noise.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::core::SampleSource;
use crate::error::{Result, SignalError};

/// A Gaussian white noise generator.
///
/// White noise has equal power across all frequencies. Each sample is drawn
/// independently from a normal distribution with the given mean and
/// standard deviation.
pub struct WhiteNoise<R: Rng = StdRng> {
    mean: f64,
    std_dev: f64,
    distribution: Normal<f64>,
    rng: R,
}

impl WhiteNoise<StdRng> {
    /// Creates a white noise generator seeded from the operating system.
    ///
    /// # Examples
    ///
    /// ```
    /// use sigspec::SampleSource;
    /// use sigspec::noise::WhiteNoise;
    ///
    /// let mut noise = WhiteNoise::new(0.0, 1.0).unwrap();
    /// let sample = noise.next_sample();
    /// assert!(sample.is_finite());
    /// ```
    pub fn new(mean: f64, std_dev: f64) -> Result<Self> {
        Self::with_rng(mean, std_dev, StdRng::from_entropy())
    }

    /// Creates a reproducible white noise generator.
    pub fn seeded(mean: f64, std_dev: f64, seed: u64) -> Result<Self> {
        Self::with_rng(mean, std_dev, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> WhiteNoise<R> {
    /// Creates a white noise generator drawing from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::InvalidParameter`] if `mean` is not finite or
    /// `std_dev` is negative or not finite.
    pub fn with_rng(mean: f64, std_dev: f64, rng: R) -> Result<Self> {
        if !mean.is_finite() {
            return Err(SignalError::invalid("mean", mean, "must be a finite number"));
        }
        if !std_dev.is_finite() || std_dev < 0.0 {
            return Err(SignalError::invalid(
                "std_dev",
                std_dev,
                "must be a finite non-negative number",
            ));
        }
        let distribution = Normal::new(mean, std_dev)
            .map_err(|e| SignalError::invalid("std_dev", std_dev, e.to_string()))?;
        Ok(Self {
            mean,
            std_dev,
            distribution,
            rng,
        })
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }
}

impl<R: Rng> SampleSource for WhiteNoise<R> {
    fn next_sample(&mut self) -> f64 {
        self.distribution.sample(&mut self.rng)
    }
}
