//! Deterministic test-signal generators.
//!
//! Every family is a plain parameter struct with a `render` method; the
//! [`SignalParameters`] union and the [`Generator`] tie them together behind
//! one `generate` entry point:
//! - Periodic: [`Harmonic`], [`Polyharmonic`], unipolar/bipolar [`PulseTrain`], [`Triangular`]
//! - Aperiodic: [`DampedSine`], [`ExponentialPulse`]
//! - Special: [`SinglePulse`], [`UnitStep`], [`DeltaFunction`], [`RectangularPulse`]
//!
//! Generators are pure: the same parameters always produce bit-identical
//! signals.

mod aperiodic;
pub mod limits;
mod periodic;
mod special;

pub use aperiodic::{DampedSine, ExponentialPulse};
pub use periodic::{
    Harmonic, Polarity, Polyharmonic, PulseInterval, PulseTrain, Triangular, parse_frequencies,
};
pub use special::{DeltaFunction, RectangularPulse, SinglePulse, UnitStep};

use crate::config::GeneratorConfig;
use crate::core::Signal;
use crate::error::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Broad grouping of the signal families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SignalCategory {
    Periodic,
    Aperiodic,
    Special,
}

/// Parameters of one signal, tagged by family.
///
/// # Examples
///
/// ```
/// use sigspec::{SignalParameters, generate, waveforms::PulseTrain};
///
/// let params = SignalParameters::UnipolarPulses(PulseTrain::new(1.0, 3, 0.1));
/// let signal = generate(&params).unwrap();
/// assert_eq!(signal.len(), 30);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "family", rename_all = "snake_case"))]
pub enum SignalParameters {
    Harmonic(Harmonic),
    Polyharmonic(Polyharmonic),
    UnipolarPulses(PulseTrain),
    BipolarPulses(PulseTrain),
    Triangular(Triangular),
    DampedSine(DampedSine),
    ExponentialPulse(ExponentialPulse),
    SinglePulse(SinglePulse),
    RectangularPulse(RectangularPulse),
    UnitStep(UnitStep),
    DeltaFunction(DeltaFunction),
}

impl SignalParameters {
    /// Short family name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            SignalParameters::Harmonic(_) => "harmonic",
            SignalParameters::Polyharmonic(_) => "polyharmonic",
            SignalParameters::UnipolarPulses(_) => "unipolar_pulses",
            SignalParameters::BipolarPulses(_) => "bipolar_pulses",
            SignalParameters::Triangular(_) => "triangular",
            SignalParameters::DampedSine(_) => "damped_sine",
            SignalParameters::ExponentialPulse(_) => "exponential_pulse",
            SignalParameters::SinglePulse(_) => "single_pulse",
            SignalParameters::RectangularPulse(_) => "rectangular_pulse",
            SignalParameters::UnitStep(_) => "unit_step",
            SignalParameters::DeltaFunction(_) => "delta_function",
        }
    }

    pub fn category(&self) -> SignalCategory {
        match self {
            SignalParameters::Harmonic(_)
            | SignalParameters::Polyharmonic(_)
            | SignalParameters::UnipolarPulses(_)
            | SignalParameters::BipolarPulses(_)
            | SignalParameters::Triangular(_) => SignalCategory::Periodic,
            SignalParameters::DampedSine(_) | SignalParameters::ExponentialPulse(_) => {
                SignalCategory::Aperiodic
            }
            SignalParameters::SinglePulse(_)
            | SignalParameters::RectangularPulse(_)
            | SignalParameters::UnitStep(_)
            | SignalParameters::DeltaFunction(_) => SignalCategory::Special,
        }
    }

    /// Sampling step in seconds.
    pub fn step(&self) -> f64 {
        match self {
            SignalParameters::Harmonic(p) => p.step,
            SignalParameters::Polyharmonic(p) => p.step,
            SignalParameters::UnipolarPulses(p) | SignalParameters::BipolarPulses(p) => p.step,
            SignalParameters::Triangular(p) => p.step,
            SignalParameters::DampedSine(p) => p.step,
            SignalParameters::ExponentialPulse(p) => p.step,
            SignalParameters::SinglePulse(p) => p.step,
            SignalParameters::RectangularPulse(p) => p.step,
            SignalParameters::UnitStep(p) => p.step,
            SignalParameters::DeltaFunction(p) => p.step,
        }
    }

    /// Checks the parameters against the input domain in [`limits`].
    ///
    /// # Errors
    ///
    /// [`SignalError::TooManyComponents`](crate::SignalError::TooManyComponents)
    /// for more than seven harmonics, otherwise
    /// [`SignalError::InvalidParameter`](crate::SignalError::InvalidParameter).
    pub fn check_domain(&self) -> Result<()> {
        match self {
            SignalParameters::Harmonic(p) => p.check_domain(),
            SignalParameters::Polyharmonic(p) => p.check_domain(),
            SignalParameters::UnipolarPulses(p) | SignalParameters::BipolarPulses(p) => {
                p.check_domain()
            }
            SignalParameters::Triangular(p) => p.check_domain(),
            SignalParameters::DampedSine(p) => p.check_domain(),
            SignalParameters::ExponentialPulse(p) => p.check_domain(),
            SignalParameters::SinglePulse(p) => p.check_domain(),
            SignalParameters::RectangularPulse(p) => p.check_domain(),
            SignalParameters::UnitStep(p) => p.check_domain(),
            SignalParameters::DeltaFunction(p) => p.check_domain(),
        }
    }

    /// Renders the signal without the domain check.
    pub fn render(&self, config: &GeneratorConfig) -> Result<Signal> {
        match self {
            SignalParameters::Harmonic(p) => p.render(config),
            SignalParameters::Polyharmonic(p) => p.render(config),
            SignalParameters::UnipolarPulses(p) => p.render(Polarity::Unipolar),
            SignalParameters::BipolarPulses(p) => p.render(Polarity::Bipolar),
            SignalParameters::Triangular(p) => p.render(),
            SignalParameters::DampedSine(p) => p.render(),
            SignalParameters::ExponentialPulse(p) => p.render(),
            SignalParameters::SinglePulse(p) => p.render(),
            SignalParameters::RectangularPulse(p) => p.render(),
            SignalParameters::UnitStep(p) => p.render(config),
            SignalParameters::DeltaFunction(p) => p.render(config),
        }
    }
}

/// Produces signals from parameters under a fixed configuration.
///
/// A generator holds no state besides its configuration, so one value can
/// serve any number of requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Validates `params` and renders the signal.
    ///
    /// # Errors
    ///
    /// * [`SignalError::TooManyComponents`](crate::SignalError::TooManyComponents)
    ///   for a polyharmonic signal with more than seven frequencies
    /// * [`SignalError::InvalidParameter`](crate::SignalError::InvalidParameter)
    ///   for structurally invalid input, or input outside the domain when
    ///   [`GeneratorConfig::enforce_domain`] is set
    pub fn generate(&self, params: &SignalParameters) -> Result<Signal> {
        if self.config.enforce_domain {
            params.check_domain().inspect_err(|err| {
                tracing::debug!(family = params.name(), %err, "parameters outside domain");
            })?;
        }
        let signal = params.render(&self.config)?;
        tracing::debug!(
            family = params.name(),
            samples = signal.len(),
            step = signal.step(),
            "generated signal"
        );
        Ok(signal)
    }
}

/// Generates a signal with the default [`GeneratorConfig`].
pub fn generate(params: &SignalParameters) -> Result<Signal> {
    Generator::default().generate(params)
}

/// Observation window offered for a family with a characteristic time `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Interval {
    /// `1.2·T`, rounded to the millisecond.
    #[default]
    Short,
    /// `10·T`.
    Long,
}

impl Interval {
    /// Span in seconds for characteristic time `base`.
    pub fn span(self, base: f64) -> f64 {
        match self {
            Interval::Short => round_to_millis(1.2 * base),
            Interval::Long => 10.0 * base,
        }
    }
}

/// Default sampling step for a period: about a hundredth of a radian of
/// phase per sample (`T / 62.8`), rounded to the millisecond.
pub fn suggested_step(period: f64) -> f64 {
    round_to_millis(period / 62.8)
}

pub(crate) fn round_to_millis(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
