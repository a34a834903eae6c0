//! One-sided spectrum computation and its display projections.

use std::f64::consts::PI;

use num_complex::Complex64;

use super::fft::FftEngine;
use super::window::Window;
use crate::config::SpectrumConfig;
use crate::core::Signal;
use crate::error::{Result, SignalError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Transform lengths the analyzer accepts.
pub const SUPPORTED_TRANSFORM_LENGTHS: [usize; 6] = [128, 256, 512, 1024, 2048, 4096];

const FREQUENCY_LABEL: &str = "Frequency (rad/s)";

/// Returns an error unless `length` is one of [`SUPPORTED_TRANSFORM_LENGTHS`].
pub fn validate_transform_length(length: usize) -> Result<()> {
    if SUPPORTED_TRANSFORM_LENGTHS.contains(&length) {
        Ok(())
    } else {
        Err(SignalError::InvalidTransformLength(length))
    }
}

/// Which projection of the spectrum to plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SpectrumView {
    /// Real part of the scaled bins against frequency.
    Real,
    /// Imaginary part of the scaled bins against frequency.
    Imag,
    /// Imaginary against real part of the scaled bins (Argand plot).
    Complex,
    /// Bin magnitudes normalized to a peak of 1 against frequency.
    Magnitude,
    /// Bin phase in radians against frequency.
    Phase,
}

impl SpectrumView {
    pub const ALL: [SpectrumView; 5] = [
        SpectrumView::Real,
        SpectrumView::Imag,
        SpectrumView::Complex,
        SpectrumView::Magnitude,
        SpectrumView::Phase,
    ];

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            SpectrumView::Real => "Real",
            SpectrumView::Imag => "Imaginary",
            SpectrumView::Complex => "Complex",
            SpectrumView::Magnitude => "Magnitude",
            SpectrumView::Phase => "Phase",
        }
    }

    /// Returns true if the x axis of this view is angular frequency.
    pub fn is_frequency_axis(self) -> bool {
        self != SpectrumView::Complex
    }

    fn labels(self) -> (&'static str, &'static str) {
        match self {
            SpectrumView::Real => (FREQUENCY_LABEL, "Re"),
            SpectrumView::Imag => (FREQUENCY_LABEL, "Im"),
            SpectrumView::Complex => ("Re", "Im"),
            SpectrumView::Magnitude => (FREQUENCY_LABEL, "Normalized magnitude"),
            SpectrumView::Phase => (FREQUENCY_LABEL, "Phase (rad)"),
        }
    }
}

/// Everything needed to compute one spectrum view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectrumRequest<'a> {
    /// Time-domain samples.
    pub amplitude: &'a [f64],
    /// Sampling step in seconds.
    pub step: f64,
    /// Number of transform points; the samples are zero-padded or truncated
    /// to it.
    pub transform_length: usize,
    pub view: SpectrumView,
    pub window: Window,
}

impl<'a> SpectrumRequest<'a> {
    /// Creates a request with a rectangular window.
    pub fn new(
        amplitude: &'a [f64],
        step: f64,
        transform_length: usize,
        view: SpectrumView,
    ) -> Self {
        Self {
            amplitude,
            step,
            transform_length,
            view,
            window: Window::Rectangular,
        }
    }

    /// Creates a request for the samples of `signal`.
    pub fn for_signal(signal: &'a Signal, transform_length: usize, view: SpectrumView) -> Self {
        Self::new(signal.amplitude(), signal.step(), transform_length, view)
    }

    /// Creates a request for `signal` using the transform length and window
    /// of `config`.
    pub fn with_defaults(signal: &'a Signal, view: SpectrumView, config: &SpectrumConfig) -> Self {
        Self::for_signal(signal, config.default_transform_length, view).with_window(config.window)
    }

    pub fn with_window(mut self, window: Window) -> Self {
        self.window = window;
        self
    }
}

/// The one-sided, unscaled spectrum of a sequence.
///
/// Computing it once and projecting it several times avoids repeating the
/// transform when a caller shows more than one view.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    /// Angular frequency of each retained bin in rad/s.
    frequencies: Vec<f64>,
    /// Retained transform bins, unnormalized.
    bins: Vec<Complex64>,
    transform_length: usize,
    empty_input: bool,
}

impl Spectrum {
    /// Angular frequency of each bin in rad/s, starting at 0.
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// Unscaled transform bins for the non-negative frequencies.
    pub fn bins(&self) -> &[Complex64] {
        &self.bins
    }

    pub fn transform_length(&self) -> usize {
        self.transform_length
    }

    /// Spacing of the frequency axis in rad/s.
    pub fn bin_width(&self) -> f64 {
        self.frequencies.get(1).copied().unwrap_or(0.0)
    }

    /// Bins with one-sided amplitude scaling: divided by the transform length
    /// and doubled everywhere except at DC.
    pub fn scaled_bins(&self) -> Vec<Complex64> {
        let n = self.transform_length as f64;
        self.bins
            .iter()
            .enumerate()
            .map(|(k, &bin)| if k == 0 { bin / n } else { bin * (2.0 / n) })
            .collect()
    }

    /// Projects the spectrum onto `view`.
    pub fn project(&self, view: SpectrumView) -> SpectrumResult {
        let (x, y) = match view {
            SpectrumView::Real => (
                self.frequencies.clone(),
                self.scaled_bins().iter().map(|b| b.re).collect(),
            ),
            SpectrumView::Imag => (
                self.frequencies.clone(),
                self.scaled_bins().iter().map(|b| b.im).collect(),
            ),
            SpectrumView::Complex => self.scaled_bins().iter().map(|b| (b.re, b.im)).unzip(),
            SpectrumView::Magnitude => {
                let magnitudes: Vec<f64> = self.bins.iter().map(|b| b.norm()).collect();
                let peak = magnitudes.iter().copied().fold(0.0_f64, f64::max);
                let y = if peak > 0.0 {
                    magnitudes.iter().map(|m| m / peak).collect()
                } else {
                    magnitudes
                };
                (self.frequencies.clone(), y)
            }
            SpectrumView::Phase => (
                self.frequencies.clone(),
                self.bins.iter().map(|b| b.arg()).collect(),
            ),
        };

        let (x_label, y_label) = view.labels();
        SpectrumResult {
            x,
            y,
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            view,
            warning: self.empty_input.then_some(SignalError::EmptySignal),
        }
    }
}

/// The (x, y) pair to plot for one view.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumResult {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub x_label: String,
    pub y_label: String,
    pub view: SpectrumView,
    /// Non-fatal condition met while computing the spectrum.
    pub warning: Option<SignalError>,
}

impl SpectrumResult {
    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Index, x and y of the largest `y` value.
    pub fn peak(&self) -> Option<(usize, f64, f64)> {
        self.y
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (i, &y)| match best {
                Some((_, top)) if top >= y => best,
                _ => Some((i, y)),
            })
            .map(|(i, y)| (i, self.x[i], y))
    }
}

/// Computes spectra, caching FFT plans between calls.
///
/// Each call depends only on its request; the cached plans never change a
/// result.
#[derive(Default)]
pub struct SpectrumAnalyzer {
    config: SpectrumConfig,
    engine: FftEngine,
}

impl SpectrumAnalyzer {
    pub fn new(config: SpectrumConfig) -> Self {
        Self {
            config,
            engine: FftEngine::new(),
        }
    }

    pub fn config(&self) -> &SpectrumConfig {
        &self.config
    }

    /// Computes the one-sided spectrum of the request's samples.
    ///
    /// The request's `view` is ignored; see [`Spectrum::project`].
    pub fn spectrum(&mut self, request: &SpectrumRequest<'_>) -> Result<Spectrum> {
        validate_transform_length(request.transform_length)?;
        if !request.step.is_finite() || request.step <= 0.0 {
            return Err(SignalError::invalid(
                "step",
                request.step,
                "must be a positive number",
            ));
        }

        let length = request.transform_length;
        let empty_input = request.amplitude.is_empty();
        if empty_input {
            tracing::warn!(transform_length = length, "spectrum of an empty signal");
        }

        let retained = request.amplitude.len().min(length);
        let mut samples = request.amplitude[..retained].to_vec();
        request.window.apply(&mut samples);
        let mut bins = self.engine.forward(&samples, length);

        // fftfreq ordering puts the Nyquist bin on the negative side
        let positive = length / 2;
        bins.truncate(positive);
        let resolution = 2.0 * PI / (length as f64 * request.step);
        let frequencies = (0..positive).map(|k| k as f64 * resolution).collect();

        tracing::debug!(
            samples = request.amplitude.len(),
            transform_length = length,
            window = ?request.window,
            "computed spectrum"
        );

        Ok(Spectrum {
            frequencies,
            bins,
            transform_length: length,
            empty_input,
        })
    }

    /// Computes the spectrum and projects it onto the requested view.
    ///
    /// # Errors
    ///
    /// * [`SignalError::InvalidTransformLength`] for an unsupported length
    /// * [`SignalError::InvalidParameter`] for a non-positive step
    ///
    /// An empty sequence is not an error: the result is all zeros and
    /// carries [`SignalError::EmptySignal`] as its warning.
    pub fn analyze(&mut self, request: &SpectrumRequest<'_>) -> Result<SpectrumResult> {
        Ok(self.spectrum(request)?.project(request.view))
    }
}

/// Analyzes a request with a fresh [`SpectrumAnalyzer`].
pub fn analyze(request: &SpectrumRequest<'_>) -> Result<SpectrumResult> {
    SpectrumAnalyzer::default().analyze(request)
}

impl Signal {
    /// Shorthand for analyzing this signal's samples with a rectangular window.
    pub fn spectrum(&self, transform_length: usize, view: SpectrumView) -> Result<SpectrumResult> {
        analyze(&SpectrumRequest::for_signal(self, transform_length, view))
    }
}
