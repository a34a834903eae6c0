//! Aperiodic signal families.

use std::f64::consts::PI;

use super::limits;
use crate::core::{SampleGrid, Signal};
use crate::error::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A sinusoid under a decaying exponential envelope, `A·e^{−αt}·sin(2πft)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DampedSine {
    /// Decay coefficient α in 1/s.
    pub decay: f64,
    /// Oscillation frequency in Hz.
    pub frequency: f64,
    /// Length of the signal in seconds.
    pub duration: f64,
    /// Sampling step in seconds.
    pub step: f64,
    pub amplitude: f64,
}

impl DampedSine {
    pub fn new(decay: f64, frequency: f64, duration: f64, step: f64) -> Self {
        Self {
            decay,
            frequency,
            duration,
            step,
            amplitude: 1.0,
        }
    }

    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    pub fn check_domain(&self) -> Result<()> {
        limits::require_non_negative("decay", self.decay)?;
        limits::require_positive("frequency", self.frequency)?;
        limits::check_range("step", self.step, &limits::DAMPED_SINE_STEP)
    }

    pub fn render(&self) -> Result<Signal> {
        limits::require_finite("decay", self.decay)?;
        limits::require_finite("frequency", self.frequency)?;
        limits::require_finite("amplitude", self.amplitude)?;
        limits::require_positive("duration", self.duration)?;

        let grid = SampleGrid::new(0.0, self.duration, self.step)?;
        let omega = 2.0 * PI * self.frequency;
        Ok(Signal::sample(&grid, |t| {
            self.amplitude * (-self.decay * t).exp() * (omega * t).sin()
        }))
    }
}

/// A decaying exponential pulse `A·e^{−βt}`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExponentialPulse {
    pub amplitude: f64,
    /// Decay rate β in 1/s.
    pub rate: f64,
    pub span: f64,
    pub step: f64,
}

impl ExponentialPulse {
    pub fn new(amplitude: f64, rate: f64, span: f64, step: f64) -> Self {
        Self {
            amplitude,
            rate,
            span,
            step,
        }
    }

    pub fn check_domain(&self) -> Result<()> {
        limits::require_non_negative("rate", self.rate)?;
        limits::check_range("step", self.step, &limits::STEP)
    }

    pub fn render(&self) -> Result<Signal> {
        limits::require_finite("amplitude", self.amplitude)?;
        limits::require_finite("rate", self.rate)?;
        limits::require_positive("span", self.span)?;

        let grid = SampleGrid::new(0.0, self.span, self.step)?;
        Ok(Signal::sample(&grid, |t| self.amplitude * (-self.rate * t).exp()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damped_sine_envelope() {
        let signal = DampedSine::new(0.5, 2.0, 10.0, 0.01).render().unwrap();
        assert_eq!(signal.len(), 1000);
        for (t, a) in signal.iter() {
            assert!(a.abs() <= (-0.5 * t).exp() + 1e-12);
        }
        // Quarter period of a 2 Hz sine is 0.125 s
        let peak = signal.amplitude()[12];
        assert!(peak > 0.9 && peak < 1.0);
    }

    #[test]
    fn test_undamped_is_plain_sine() {
        let signal = DampedSine::new(0.0, 1.0, 1.0, 0.25).render().unwrap();
        assert!((signal.amplitude()[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_damped_sine_step_domain() {
        assert!(DampedSine::new(0.5, 2.0, 10.0, 0.1).check_domain().is_ok());
        assert!(DampedSine::new(0.5, 2.0, 10.0, 0.2).check_domain().is_err());
        assert!(DampedSine::new(-1.0, 2.0, 10.0, 0.01).check_domain().is_err());
    }

    #[test]
    fn test_exponential_pulse() {
        let signal = ExponentialPulse::new(2.0, 1.0, 3.0, 1.0).render().unwrap();
        assert_eq!(signal.len(), 3);
        assert_eq!(signal.amplitude()[0], 2.0);
        assert!((signal.amplitude()[2] - 2.0 * (-2.0_f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_bad_duration() {
        assert!(DampedSine::new(0.5, 2.0, 0.0, 0.01).render().is_err());
        assert!(ExponentialPulse::new(1.0, 1.0, -1.0, 0.1).render().is_err());
    }
}
