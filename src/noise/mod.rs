//! Noise generators.
//!
//! [`WhiteNoise`] and [`PinkNoise`] are streaming [`SampleSource`]s;
//! [`ImpulseNoise`] places impulses over a whole buffer. [`generate_noise`]
//! renders any of them, plus low-pass filtered white noise, onto a sample
//! grid so the result can be superimposed on a waveform.

mod impulse;
mod pink;
mod white;

pub use impulse::ImpulseNoise;
pub use pink::PinkNoise;
pub use white::WhiteNoise;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::{SampleGrid, SampleSource, Signal};
use crate::error::Result;
use crate::filters::Butterworth;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Order used for filtered white noise when none is given.
pub const DEFAULT_FILTER_ORDER: u32 = 5;

/// Noise kinds and their parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum NoiseParameters {
    /// Gaussian noise with the given mean and standard deviation.
    White { mean: f64, std_dev: f64 },
    /// 1/f noise within `[-1, 1]`.
    Pink,
    /// Unit Gaussian noise through a low-pass Butterworth filter.
    FilteredWhite { cutoff: f64, order: u32 },
    /// Sparse `±magnitude` impulses; `density` is the share of samples hit.
    Impulse { density: f64, magnitude: f64 },
}

impl NoiseParameters {
    /// Unit-variance, zero-mean white noise.
    pub fn standard_white() -> Self {
        NoiseParameters::White {
            mean: 0.0,
            std_dev: 1.0,
        }
    }

    /// White noise low-pass filtered at `cutoff` Hz with the default order.
    pub fn filtered_white(cutoff: f64) -> Self {
        NoiseParameters::FilteredWhite {
            cutoff,
            order: DEFAULT_FILTER_ORDER,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            NoiseParameters::White { .. } => "white",
            NoiseParameters::Pink => "pink",
            NoiseParameters::FilteredWhite { .. } => "filtered white",
            NoiseParameters::Impulse { .. } => "impulse",
        }
    }
}

/// Renders noise on the grid `[0, duration)` with spacing `step`.
///
/// With `Some(seed)` the output is reproducible; with `None` the generator is
/// seeded from the operating system.
///
/// # Examples
///
/// ```
/// use sigspec::noise::{NoiseParameters, generate_noise};
///
/// let a = generate_noise(&NoiseParameters::Pink, 1.0, 0.01, Some(7)).unwrap();
/// let b = generate_noise(&NoiseParameters::Pink, 1.0, 0.01, Some(7)).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 100);
/// ```
///
/// # Errors
///
/// Returns [`SignalError::InvalidParameter`](crate::SignalError::InvalidParameter)
/// for an unusable grid or noise parameters; filtered noise also requires
/// `0 < cutoff < 1 / (2 * step)`.
pub fn generate_noise(
    params: &NoiseParameters,
    duration: f64,
    step: f64,
    seed: Option<u64>,
) -> Result<Signal> {
    let grid = SampleGrid::new(0.0, duration, step)?;
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let signal = match *params {
        NoiseParameters::White { mean, std_dev } => {
            WhiteNoise::with_rng(mean, std_dev, rng)?.render(&grid)
        }
        NoiseParameters::Pink => PinkNoise::with_rng(rng).render(&grid),
        NoiseParameters::FilteredWhite { cutoff, order } => {
            let white = WhiteNoise::with_rng(0.0, 1.0, rng)?;
            Butterworth::lowpass(white, cutoff, order, 1.0 / step)?.render(&grid)
        }
        NoiseParameters::Impulse { density, magnitude } => {
            let mut rng = rng;
            let amplitude = ImpulseNoise::new(density, magnitude)?.generate(grid.len(), &mut rng);
            Signal::from_grid(&grid, amplitude)
        }
    };

    tracing::debug!(
        kind = params.name(),
        samples = signal.len(),
        seeded = seed.is_some(),
        "generated noise"
    );
    Ok(signal)
}
