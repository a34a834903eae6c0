//! Special test signals: single pulse, unit step, delta function and the
//! centered rectangular pulse.

use super::limits;
use crate::config::GeneratorConfig;
use crate::core::{SampleGrid, Signal};
use crate::error::{Result, SignalError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fraction of a step by which an instant may miss an edge and still count
/// as sitting on it (`20 * 0.05` is `1.0000000000000002`, not `1.0`).
const EDGE_TOLERANCE: f64 = 1e-9;

/// A rectangular pulse of height 1 starting at `t = 0`: `1` for `t < width`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SinglePulse {
    /// Pulse width in seconds.
    pub width: f64,
    /// Length of the signal in seconds.
    pub span: f64,
    pub step: f64,
}

impl SinglePulse {
    pub fn new(width: f64, span: f64, step: f64) -> Self {
        Self { width, span, step }
    }

    pub fn check_domain(&self) -> Result<()> {
        limits::check_range("width", self.width, &limits::SINGLE_PULSE_DURATION)?;
        limits::check_range("step", self.step, &limits::STEP)
    }

    pub fn render(&self) -> Result<Signal> {
        limits::require_positive("width", self.width)?;
        limits::require_positive("span", self.span)?;

        let grid = SampleGrid::new(0.0, self.span, self.step)?;
        let edge = self.width - self.step * EDGE_TOLERANCE;
        Ok(Signal::sample(&grid, |t| if t < edge { 1.0 } else { 0.0 }))
    }
}

/// The Heaviside step delayed to `moment`: `0` before it, `1` from it on.
/// The end of the span is included.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnitStep {
    /// Instant of the jump in seconds.
    pub moment: f64,
    pub span: f64,
    pub step: f64,
}

impl UnitStep {
    pub fn new(moment: f64, span: f64, step: f64) -> Self {
        Self { moment, span, step }
    }

    pub fn check_domain(&self) -> Result<()> {
        if self.moment.fract() != 0.0 {
            return Err(SignalError::invalid(
                "moment",
                self.moment,
                "must be a whole number of seconds",
            ));
        }
        let (low, high) = limits::STEP_MOMENT.into_inner();
        limits::check_range("moment", self.moment, &(f64::from(low)..=f64::from(high)))?;
        limits::check_range("step", self.step, &limits::STEP)
    }

    pub fn render(&self, config: &GeneratorConfig) -> Result<Signal> {
        limits::require_finite("moment", self.moment)?;
        limits::require_positive("span", self.span)?;

        let grid = SampleGrid::new(0.0, self.span + config.inclusive_epsilon, self.step)?;
        let edge = self.moment - self.step * EDGE_TOLERANCE;
        Ok(Signal::sample(&grid, |t| if t >= edge { 1.0 } else { 0.0 }))
    }
}

/// A sampled stand-in for the Dirac impulse.
///
/// The sample whose instant lies within half a step of `moment` takes the
/// value `amplitude`; every other sample is zero. The impulse is therefore
/// one sample wide and its width changes with the sampling step, which is
/// intended: it is a plotting approximation, not a distribution. If `moment`
/// falls exactly between two instants, neither of them is set.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeltaFunction {
    pub amplitude: f64,
    /// Instant of the impulse in seconds.
    pub moment: f64,
    pub span: f64,
    pub step: f64,
}

impl DeltaFunction {
    pub fn new(amplitude: f64, moment: f64, span: f64, step: f64) -> Self {
        Self {
            amplitude,
            moment,
            span,
            step,
        }
    }

    pub fn check_domain(&self) -> Result<()> {
        if !limits::DELTA_AMPLITUDES.contains(&self.amplitude) {
            return Err(SignalError::invalid(
                "amplitude",
                self.amplitude,
                "must be a multiple of 1000 between 1000 and 10000",
            ));
        }
        limits::check_range("step", self.step, &limits::STEP)
    }

    pub fn render(&self, config: &GeneratorConfig) -> Result<Signal> {
        limits::require_finite("amplitude", self.amplitude)?;
        limits::require_finite("moment", self.moment)?;
        limits::require_positive("span", self.span)?;

        let grid = SampleGrid::new(0.0, self.span + config.inclusive_epsilon, self.step)?;
        let half_width = self.step / 2.0;
        Ok(Signal::sample(&grid, |t| {
            if (t - self.moment).abs() < half_width {
                self.amplitude
            } else {
                0.0
            }
        }))
    }
}

/// A rectangular pulse of height `A` and width `T` centered in the span:
/// `A` where `|t − span/2| ≤ T/2`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RectangularPulse {
    pub amplitude: f64,
    pub width: f64,
    pub span: f64,
    pub step: f64,
}

impl RectangularPulse {
    pub fn new(amplitude: f64, width: f64, span: f64, step: f64) -> Self {
        Self {
            amplitude,
            width,
            span,
            step,
        }
    }

    pub fn check_domain(&self) -> Result<()> {
        limits::check_range("step", self.step, &limits::STEP)
    }

    pub fn render(&self) -> Result<Signal> {
        limits::require_finite("amplitude", self.amplitude)?;
        limits::require_positive("width", self.width)?;
        limits::require_positive("span", self.span)?;

        let grid = SampleGrid::new(0.0, self.span, self.step)?;
        let center = self.span / 2.0;
        let half_width = self.width / 2.0 + self.step * EDGE_TOLERANCE;
        Ok(Signal::sample(&grid, |t| {
            if (t - center).abs() <= half_width {
                self.amplitude
            } else {
                0.0
            }
        }))
    }
}
