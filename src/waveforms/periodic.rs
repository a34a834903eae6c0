//! Periodic signal families: harmonic, polyharmonic, pulse trains and the
//! triangular wave.

use std::f64::consts::PI;

use super::limits::{self, FREQUENCY_RESOLUTION};
use super::round_to_millis;
use crate::config::GeneratorConfig;
use crate::core::grid::index_at_or_before;
use crate::core::{SampleGrid, Signal};
use crate::error::{Result, SignalError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single sinusoid `A·sin(2πft + φ)` sampled over `[0, duration]`.
///
/// # Examples
///
/// ```
/// use sigspec::{GeneratorConfig, waveforms::Harmonic};
///
/// let signal = Harmonic::new(1.0, 1.0, 0.01, 0.0)
///     .render(&GeneratorConfig::default())
///     .unwrap();
/// assert_eq!(signal.len(), 101);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Harmonic {
    /// Frequency in Hz.
    pub frequency: f64,
    /// Length of the signal in seconds; the end point is included.
    pub duration: f64,
    /// Sampling step in seconds.
    pub step: f64,
    /// Phase shift in radians.
    pub phase: f64,
    /// Peak amplitude.
    #[cfg_attr(feature = "serde", serde(default = "unit_amplitude"))]
    pub amplitude: f64,
}

#[cfg(feature = "serde")]
fn unit_amplitude() -> f64 {
    1.0
}

impl Harmonic {
    /// Creates a unit-amplitude harmonic.
    pub fn new(frequency: f64, duration: f64, step: f64, phase: f64) -> Self {
        Self {
            frequency,
            duration,
            step,
            phase,
            amplitude: 1.0,
        }
    }

    /// Creates a harmonic from its period; the frequency is `1/T` rounded to
    /// the millihertz.
    pub fn from_period(period: f64, duration: f64, step: f64, phase: f64) -> Self {
        Self::new(round_to_millis(1.0 / period), duration, step, phase)
    }

    /// Sets the peak amplitude.
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Period `1/f` in seconds.
    pub fn period(&self) -> f64 {
        1.0 / self.frequency
    }

    pub fn check_domain(&self) -> Result<()> {
        // Frequencies derived from a period are rounded, so allow half a
        // resolution step of slack at the bounds.
        let frequencies = (1.0 / limits::PERIOD.end())..=(1.0 / limits::PERIOD.start());
        limits::check_range_with(
            "frequency",
            self.frequency,
            &frequencies,
            FREQUENCY_RESOLUTION / 2.0,
        )?;
        limits::check_range("step", self.step, &limits::STEP)?;
        limits::check_range("phase", self.phase, &limits::PHASE)
    }

    pub fn render(&self, config: &GeneratorConfig) -> Result<Signal> {
        limits::require_positive("frequency", self.frequency)?;
        limits::require_positive("duration", self.duration)?;
        limits::require_finite("phase", self.phase)?;
        limits::require_finite("amplitude", self.amplitude)?;

        let grid = SampleGrid::new(0.0, self.duration + config.inclusive_epsilon, self.step)?;
        let omega = 2.0 * PI * self.frequency;
        Ok(Signal::sample(&grid, |t| {
            self.amplitude * (omega * t + self.phase).sin()
        }))
    }
}

/// A sum of unit sinusoids `Σ sin(2πf_k t)` sampled over `[0, duration]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polyharmonic {
    /// Component frequencies in Hz, 1 to 7 of them.
    pub frequencies: Vec<f64>,
    /// Length of the signal in seconds; the end point is included.
    pub duration: f64,
    /// Sampling step in seconds.
    pub step: f64,
}

impl Polyharmonic {
    pub fn new(frequencies: Vec<f64>, duration: f64, step: f64) -> Self {
        Self {
            frequencies,
            duration,
            step,
        }
    }

    /// Creates a polyharmonic signal from a frequency list such as `"1; 2; 3"`.
    ///
    /// See [`parse_frequencies`] for the accepted format.
    pub fn parse(frequencies: &str, duration: f64, step: f64) -> Result<Self> {
        Ok(Self::new(parse_frequencies(frequencies)?, duration, step))
    }

    fn check_components(&self) -> Result<()> {
        if self.frequencies.len() > limits::MAX_HARMONICS {
            return Err(SignalError::TooManyComponents(self.frequencies.len()));
        }
        if self.frequencies.is_empty() {
            return Err(SignalError::invalid(
                "frequencies",
                "[]",
                "at least one frequency is required",
            ));
        }
        for &frequency in &self.frequencies {
            limits::require_positive("frequency", frequency)?;
        }
        Ok(())
    }

    pub fn check_domain(&self) -> Result<()> {
        self.check_components()?;
        limits::check_range("duration", self.duration, &limits::POLYHARMONIC_DURATION)?;
        limits::check_range("step", self.step, &limits::STEP)
    }

    pub fn render(&self, config: &GeneratorConfig) -> Result<Signal> {
        self.check_components()?;
        limits::require_positive("duration", self.duration)?;

        let grid = SampleGrid::new(0.0, self.duration + config.inclusive_epsilon, self.step)?;
        let omegas: Vec<f64> = self.frequencies.iter().map(|f| 2.0 * PI * f).collect();
        Ok(Signal::sample(&grid, |t| {
            omegas.iter().map(|omega| (omega * t).sin()).sum()
        }))
    }
}

/// Parses a `;`-separated list of frequencies.
///
/// Whitespace around each entry is ignored and `,` is accepted as the decimal
/// separator, so `"1,5; 2;3"` yields `[1.5, 2.0, 3.0]`. The component limit
/// is not checked here.
///
/// # Errors
///
/// Returns [`SignalError::InvalidParameter`] for empty or non-numeric entries.
///
/// # Examples
///
/// ```
/// use sigspec::waveforms::parse_frequencies;
///
/// assert_eq!(parse_frequencies("1; 2; 3").unwrap(), vec![1.0, 2.0, 3.0]);
/// assert!(parse_frequencies("1;;2").is_err());
/// ```
pub fn parse_frequencies(input: &str) -> Result<Vec<f64>> {
    input
        .split(';')
        .map(|entry| {
            let entry = entry.trim();
            if entry.is_empty() {
                return Err(SignalError::invalid(
                    "frequencies",
                    input,
                    "empty entry in frequency list",
                ));
            }
            let value: f64 = entry.replace(',', ".").parse().map_err(|_| {
                SignalError::invalid("frequencies", input, format!("`{entry}` is not a number"))
            })?;
            if !value.is_finite() {
                return Err(SignalError::invalid(
                    "frequencies",
                    input,
                    format!("`{entry}` is not finite"),
                ));
            }
            Ok(value)
        })
        .collect()
}

/// Span over which a pulse train is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PulseInterval {
    /// `pulse_count · pulse_duration`
    #[default]
    Standard,
    /// `5 · pulse_count · pulse_duration`
    Extended,
}

impl PulseInterval {
    fn factor(self) -> u32 {
        match self {
            PulseInterval::Standard => 1,
            PulseInterval::Extended => 5,
        }
    }
}

/// Level of the second half of each pulse period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// High half is `1`, low half is `0`.
    Unipolar,
    /// High half is `+1`, low half is `-1`.
    Bipolar,
}

impl Polarity {
    fn low_level(self) -> f64 {
        match self {
            Polarity::Unipolar => 0.0,
            Polarity::Bipolar => -1.0,
        }
    }
}

/// A square pulse train: every period is high for its first half.
///
/// With `P = pulse_duration / step` samples per period, period `k` starts at
/// sample `floor(k·P)`, stays high up to `floor(start + P/2)` and low up to
/// the start of the next period. A non-integral `P` thus moves each period
/// start at most one sample before its nominal instant, and consecutive
/// periods always abut. Samples after the last period stay at `0`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PulseTrain {
    /// Length of one period in seconds.
    pub pulse_duration: f64,
    /// Number of pulses in the standard interval.
    pub pulse_count: u32,
    /// Sampling step in seconds.
    pub step: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub interval: PulseInterval,
}

impl PulseTrain {
    pub fn new(pulse_duration: f64, pulse_count: u32, step: f64) -> Self {
        Self {
            pulse_duration,
            pulse_count,
            step,
            interval: PulseInterval::Standard,
        }
    }

    /// Draws the train over the extended (×5) interval.
    pub fn extended(mut self) -> Self {
        self.interval = PulseInterval::Extended;
        self
    }

    /// Number of periods drawn.
    pub fn periods(&self) -> u32 {
        self.pulse_count * self.interval.factor()
    }

    /// Total span in seconds.
    pub fn span(&self) -> f64 {
        self.pulse_duration * self.periods() as f64
    }

    pub fn check_domain(&self) -> Result<()> {
        limits::check_count("pulse_count", self.pulse_count, &limits::PULSE_COUNT)?;
        limits::check_range("pulse_duration", self.pulse_duration, &limits::PULSE_DURATION)?;
        limits::check_range("step", self.step, &limits::STEP)
    }

    pub fn render(&self, polarity: Polarity) -> Result<Signal> {
        limits::require_positive("pulse_duration", self.pulse_duration)?;
        if self.pulse_count == 0 {
            return Err(SignalError::invalid("pulse_count", 0, "must be at least 1"));
        }

        let grid = SampleGrid::new(0.0, self.span(), self.step)?;
        let len = grid.len();
        let mut amplitude = vec![0.0; len];

        let samples_per_period = self.pulse_duration / self.step;
        let edge = |position: f64| index_at_or_before(position).min(len);

        for period in 0..self.periods() {
            let start = edge(period as f64 * samples_per_period);
            let middle = edge(start as f64 + samples_per_period / 2.0);
            let end = edge((period + 1) as f64 * samples_per_period);

            amplitude[start..middle].fill(1.0);
            amplitude[middle..end].fill(polarity.low_level());
        }

        Ok(Signal::from_grid(&grid, amplitude))
    }
}

/// A symmetric triangular wave rising from 0 to `2A` and back every period.
///
/// With phase `p = (t mod T) / T` the value is `4Ap` for `p < ½` and
/// `4A(1 − p)` otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triangular {
    pub amplitude: f64,
    pub period: f64,
    pub duration: f64,
    pub step: f64,
}

impl Triangular {
    pub fn new(amplitude: f64, period: f64, duration: f64, step: f64) -> Self {
        Self {
            amplitude,
            period,
            duration,
            step,
        }
    }

    pub fn check_domain(&self) -> Result<()> {
        limits::check_range("period", self.period, &limits::PERIOD)?;
        limits::check_range("step", self.step, &limits::STEP)
    }

    pub fn render(&self) -> Result<Signal> {
        limits::require_finite("amplitude", self.amplitude)?;
        limits::require_positive("period", self.period)?;
        limits::require_positive("duration", self.duration)?;

        let grid = SampleGrid::new(0.0, self.duration, self.step)?;
        Ok(Signal::sample(&grid, |t| {
            let phase = t.rem_euclid(self.period) / self.period;
            if phase < 0.5 {
                4.0 * self.amplitude * phase
            } else {
                4.0 * self.amplitude * (1.0 - phase)
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_at(signal: &Signal, t: f64) -> f64 {
        let index = signal
            .time()
            .iter()
            .position(|&x| (x - t).abs() < 1e-9)
            .expect("instant on grid");
        signal.amplitude()[index]
    }

    #[test]
    fn test_harmonic_peak_and_zero() {
        let signal = Harmonic::new(1.0, 1.0, 0.01, 0.0)
            .render(&GeneratorConfig::default())
            .unwrap();
        assert!(value_at(&signal, 0.0).abs() < 1e-12);
        assert!((value_at(&signal, 0.25) - 1.0).abs() < 1e-9);
        assert!((value_at(&signal, 1.0)).abs() < 1e-9);
    }

    #[test]
    fn test_harmonic_phase_and_amplitude() {
        let signal = Harmonic::new(1.0, 1.0, 0.01, PI / 2.0)
            .with_amplitude(3.0)
            .render(&GeneratorConfig::default())
            .unwrap();
        assert!((signal.amplitude()[0] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_harmonic_from_period_rounds_frequency() {
        let harmonic = Harmonic::from_period(6.28, 7.536, 0.1, 0.0);
        assert_eq!(harmonic.frequency, 0.159);
        assert!(harmonic.check_domain().is_ok());
    }

    #[test]
    fn test_harmonic_domain() {
        assert!(Harmonic::new(1.0, 1.0, 0.01, 0.0).check_domain().is_ok());
        assert!(Harmonic::new(10.0, 1.0, 0.01, 0.0).check_domain().is_err());
        assert!(Harmonic::new(1.0, 1.0, 0.01, 7.0).check_domain().is_err());
        assert!(Harmonic::new(1.0, 1.0, 3.0, 0.0).check_domain().is_err());
    }

    #[test]
    fn test_polyharmonic_sum() {
        let signal = Polyharmonic::new(vec![1.0, 2.0], 1.0, 0.125)
            .render(&GeneratorConfig::default())
            .unwrap();
        // sin(π/4) + sin(π/2) at t = 0.125
        let expected = (PI / 4.0).sin() + (PI / 2.0).sin();
        assert!((signal.amplitude()[1] - expected).abs() < 1e-12);
        assert_eq!(signal.len(), 9);
    }

    #[test]
    fn test_polyharmonic_too_many_components() {
        let poly = Polyharmonic::new(vec![1.0; 8], 1.0, 0.01);
        assert_eq!(
            poly.render(&GeneratorConfig::default()),
            Err(SignalError::TooManyComponents(8))
        );
        assert_eq!(poly.check_domain(), Err(SignalError::TooManyComponents(8)));
    }

    #[test]
    fn test_polyharmonic_seven_components_allowed() {
        let poly = Polyharmonic::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0], 1.0, 0.01);
        assert!(poly.check_domain().is_ok());
        assert!(poly.render(&GeneratorConfig::default()).is_ok());
    }

    #[test]
    fn test_polyharmonic_needs_a_component() {
        let poly = Polyharmonic::new(vec![], 1.0, 0.01);
        assert!(matches!(
            poly.render(&GeneratorConfig::default()),
            Err(SignalError::InvalidParameter { name: "frequencies", .. })
        ));
    }

    #[test]
    fn test_parse_frequencies() {
        assert_eq!(parse_frequencies("1; 2; 3").unwrap(), vec![1.0, 2.0, 3.0]);
        assert_eq!(parse_frequencies("1;2;3").unwrap(), vec![1.0, 2.0, 3.0]);
        assert_eq!(parse_frequencies(" 0,5 ;1.25").unwrap(), vec![0.5, 1.25]);
        assert!(parse_frequencies("").is_err());
        assert!(parse_frequencies("1; two").is_err());
        assert!(parse_frequencies("1;").is_err());
        assert!(parse_frequencies("inf").is_err());
    }

    #[test]
    fn test_parse_eight_then_generate() {
        let poly = Polyharmonic::parse("1;2;3;4;5;6;7;8", 1.0, 0.01).unwrap();
        assert_eq!(
            poly.render(&GeneratorConfig::default()),
            Err(SignalError::TooManyComponents(8))
        );
    }

    #[test]
    fn test_unipolar_first_period() {
        let signal = PulseTrain::new(1.0, 3, 0.1).render(Polarity::Unipolar).unwrap();
        assert_eq!(signal.len(), 30);
        for (t, a) in signal.iter().take(10) {
            let expected = if t < 0.5 - 1e-9 { 1.0 } else { 0.0 };
            assert_eq!(a, expected, "at t = {t}");
        }
    }

    #[test]
    fn test_unipolar_exact_layout() {
        let signal = PulseTrain::new(1.0, 3, 0.1).render(Polarity::Unipolar).unwrap();
        let expected: Vec<f64> = (0..30)
            .map(|i| if i % 10 < 5 { 1.0 } else { 0.0 })
            .collect();
        assert_eq!(signal.amplitude(), expected.as_slice());
    }

    #[test]
    fn test_bipolar_levels() {
        let signal = PulseTrain::new(1.0, 3, 0.1).render(Polarity::Bipolar).unwrap();
        let expected: Vec<f64> = (0..30)
            .map(|i| if i % 10 < 5 { 1.0 } else { -1.0 })
            .collect();
        assert_eq!(signal.amplitude(), expected.as_slice());
    }

    #[test]
    fn test_pulse_count_matches_rising_edges() {
        for count in 3..=7 {
            let signal = PulseTrain::new(0.628, count, 0.01)
                .render(Polarity::Unipolar)
                .unwrap();
            let a = signal.amplitude();
            let rising = 1 + a.windows(2).filter(|w| w[0] == 0.0 && w[1] == 1.0).count();
            assert_eq!(rising, count as usize);
        }
    }

    #[test]
    fn test_extended_interval() {
        let train = PulseTrain::new(1.0, 3, 0.1).extended();
        assert_eq!(train.periods(), 15);
        let signal = train.render(Polarity::Bipolar).unwrap();
        assert_eq!(signal.len(), 150);
        assert_eq!(signal.amplitude()[149], -1.0);
        assert_eq!(signal.amplitude()[140], 1.0);
    }

    #[test]
    fn test_non_integral_period_edges() {
        // 0.628 / 0.03 = 20.93 samples per period
        let train = PulseTrain::new(0.628, 3, 0.03);
        let signal = train.render(Polarity::Bipolar).unwrap();
        let a = signal.amplitude();
        assert_eq!(a.len(), 63);

        // floor(3 * 20.93) = 62: the last sample lies past the final period
        assert!(a[..62].iter().all(|&x| x == 1.0 || x == -1.0));
        assert_eq!(a[62], 0.0);

        let half: f64 = 0.628 / 0.03 / 2.0;
        let mut runs = Vec::new();
        let mut current = (a[0], 0usize);
        for &x in &a[..62] {
            if x == current.0 {
                current.1 += 1;
            } else {
                runs.push(current.1);
                current = (x, 1);
            }
        }
        runs.push(current.1);
        assert_eq!(runs.len(), 6);
        for run in runs {
            assert!(
                run == half.floor() as usize || run == half.ceil() as usize,
                "half-period of {run} samples"
            );
        }
    }

    #[test]
    fn test_truncated_pulse_layout() {
        // starts at 0, 20, 41; high halves end at 10, 30, 51
        let signal = PulseTrain::new(0.628, 3, 0.03)
            .render(Polarity::Unipolar)
            .unwrap();
        let high: Vec<usize> = signal
            .amplitude()
            .iter()
            .enumerate()
            .filter(|(_, a)| **a == 1.0)
            .map(|(i, _)| i)
            .collect();
        let expected: Vec<usize> = (0..10).chain(20..30).chain(41..51).collect();
        assert_eq!(high, expected);
    }

    #[test]
    fn test_high_samples_follow_period_start() {
        // Each sample is high exactly when the whole sample interval fits in
        // the first half of its period, counted from the truncated start.
        let train = PulseTrain::new(0.7, 4, 0.03);
        let signal = train.render(Polarity::Unipolar).unwrap();
        let per_period: f64 = 0.7 / 0.03;
        let starts: Vec<usize> = (0..4)
            .map(|k| (k as f64 * per_period).floor() as usize)
            .collect();
        assert_eq!(starts, vec![0, 23, 46, 70]);
        let end = (4.0 * per_period).floor() as usize;

        for (i, &a) in signal.amplitude().iter().enumerate() {
            let expected = match starts.iter().rev().find(|&&start| start <= i) {
                Some(&start) if i < end && ((i - start + 1) as f64) <= per_period / 2.0 => 1.0,
                _ => 0.0,
            };
            assert_eq!(a, expected, "sample {i}");
        }
    }

    #[test]
    fn test_pulse_domain() {
        assert!(PulseTrain::new(1.0, 3, 0.1).check_domain().is_ok());
        assert!(PulseTrain::new(1.0, 2, 0.1).check_domain().is_err());
        assert!(PulseTrain::new(0.5, 3, 0.1).check_domain().is_err());
    }

    #[test]
    fn test_zero_pulse_count() {
        assert!(PulseTrain::new(1.0, 0, 0.1).render(Polarity::Unipolar).is_err());
    }

    #[test]
    fn test_triangular_shape() {
        let signal = Triangular::new(1.0, 2.0, 4.0, 0.5).render().unwrap();
        assert_eq!(
            signal.amplitude(),
            &[0.0, 1.0, 2.0, 1.0, 0.0, 1.0, 2.0, 1.0]
        );
    }
}
