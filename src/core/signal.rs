//! The sampled signal container.
//!
//! A [`Signal`] pairs a time axis with the amplitude observed at each
//! instant. Generators return a fresh `Signal` per call; every transformation
//! produces a new value instead of editing one in place.

use super::grid::SampleGrid;
use crate::error::{Result, SignalError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A sampled signal: `time[i]` is the instant of `amplitude[i]`.
///
/// Invariants: both sequences have the same length, `time` is strictly
/// increasing and consecutive instants are `step` seconds apart.
///
/// # Examples
///
/// ```
/// use sigspec::Signal;
///
/// let signal = Signal::new(vec![0.0, 0.5, 1.0], vec![0.0, 1.0, 0.0], 0.5).unwrap();
/// assert_eq!(signal.len(), 3);
/// assert_eq!(signal.amplitude()[1], 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Signal {
    time: Vec<f64>,
    amplitude: Vec<f64>,
    step: f64,
}

impl Signal {
    /// Creates a signal from explicit sequences.
    ///
    /// # Errors
    ///
    /// * [`SignalError::LengthMismatch`] if the sequences differ in length
    /// * [`SignalError::InvalidParameter`] if `step` is not positive or `time`
    ///   is not strictly increasing
    pub fn new(time: Vec<f64>, amplitude: Vec<f64>, step: f64) -> Result<Self> {
        if time.len() != amplitude.len() {
            return Err(SignalError::LengthMismatch {
                expected: time.len(),
                actual: amplitude.len(),
            });
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(SignalError::invalid("step", step, "must be a positive number"));
        }
        if time.windows(2).any(|w| w[1] <= w[0]) {
            return Err(SignalError::invalid(
                "time",
                "sequence",
                "instants must be strictly increasing",
            ));
        }
        Ok(Self {
            time,
            amplitude,
            step,
        })
    }

    /// Samples `f` at every instant of `grid`.
    pub fn sample(grid: &SampleGrid, f: impl Fn(f64) -> f64) -> Self {
        let time = grid.to_vec();
        let amplitude = time.iter().map(|&t| f(t)).collect();
        Self {
            time,
            amplitude,
            step: grid.step(),
        }
    }

    /// Attaches precomputed amplitudes to `grid`.
    pub(crate) fn from_grid(grid: &SampleGrid, amplitude: Vec<f64>) -> Self {
        debug_assert_eq!(grid.len(), amplitude.len());
        Self {
            time: grid.to_vec(),
            amplitude,
            step: grid.step(),
        }
    }

    /// Sample instants in seconds.
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Amplitude at each instant.
    pub fn amplitude(&self) -> &[f64] {
        &self.amplitude
    }

    /// Sampling interval in seconds.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Returns true if the signal holds no samples.
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Iterates over `(time, amplitude)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.time.iter().copied().zip(self.amplitude.iter().copied())
    }

    /// Splits the signal into its time and amplitude sequences.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.time, self.amplitude)
    }

    /// Adds `other` to this signal sample by sample, e.g. to lay noise over a
    /// waveform. The time axis of `self` is kept.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::LengthMismatch`] when the signals differ in length.
    pub fn superimpose(&self, other: &Signal) -> Result<Signal> {
        if other.len() != self.len() {
            return Err(SignalError::LengthMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }
        let amplitude = self
            .amplitude
            .iter()
            .zip(&other.amplitude)
            .map(|(a, b)| a + b)
            .collect();
        Ok(Self {
            time: self.time.clone(),
            amplitude,
            step: self.step,
        })
    }

    /// Largest absolute amplitude, or 0.0 for an empty signal.
    pub fn peak_amplitude(&self) -> f64 {
        self.amplitude.iter().fold(0.0_f64, |acc, a| acc.max(a.abs()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_checks_lengths() {
        let err = Signal::new(vec![0.0, 1.0], vec![0.0], 1.0).unwrap_err();
        assert_eq!(
            err,
            SignalError::LengthMismatch {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_new_checks_monotonic_time() {
        assert!(Signal::new(vec![0.0, 0.0], vec![1.0, 1.0], 0.1).is_err());
        assert!(Signal::new(vec![0.0, 0.1], vec![1.0, 1.0], 0.0).is_err());
    }

    #[test]
    fn test_sample_over_grid() {
        let grid = SampleGrid::new(0.0, 1.0, 0.25).unwrap();
        let signal = Signal::sample(&grid, |t| 2.0 * t);
        assert_eq!(signal.amplitude(), &[0.0, 0.5, 1.0, 1.5]);
        assert_eq!(signal.step(), 0.25);
        assert_eq!(signal.time().len(), signal.amplitude().len());
    }

    #[test]
    fn test_superimpose() {
        let grid = SampleGrid::new(0.0, 1.0, 0.5).unwrap();
        let a = Signal::sample(&grid, |_| 1.0);
        let b = Signal::sample(&grid, |t| t);
        let sum = a.superimpose(&b).unwrap();
        assert_eq!(sum.amplitude(), &[1.0, 1.5]);
        assert_eq!(sum.time(), a.time());
    }

    #[test]
    fn test_superimpose_length_mismatch() {
        let a = Signal::sample(&SampleGrid::new(0.0, 1.0, 0.5).unwrap(), |_| 1.0);
        let b = Signal::sample(&SampleGrid::new(0.0, 1.0, 0.25).unwrap(), |_| 1.0);
        assert!(matches!(
            a.superimpose(&b),
            Err(SignalError::LengthMismatch { expected: 2, actual: 4 })
        ));
    }

    #[test]
    fn test_peak_amplitude() {
        let signal = Signal::new(vec![0.0, 1.0, 2.0], vec![0.5, -3.0, 2.0], 1.0).unwrap();
        assert_eq!(signal.peak_amplitude(), 3.0);
    }
}
