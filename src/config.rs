//! Engine configuration.
//!
//! All settings have defaults that reproduce the reference behavior, so
//! `EngineConfig::default()` is the usual starting point. With the `serde`
//! feature the configuration can be loaded from any serde format; missing
//! fields fall back to their defaults.

use crate::error::{Result, SignalError};
use crate::spectrum::{Window, validate_transform_length};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Epsilon added to the span of inclusive-end families.
pub const DEFAULT_INCLUSIVE_EPSILON: f64 = 0.001;

/// Transform length offered first to callers that do not pick one.
pub const DEFAULT_TRANSFORM_LENGTH: usize = 1024;

/// Top-level configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Waveform generation settings.
    pub generator: GeneratorConfig,

    /// Spectrum analysis settings.
    pub spectrum: SpectrumConfig,
}

impl EngineConfig {
    /// Checks that every section holds usable values.
    pub fn validate(&self) -> Result<()> {
        self.generator.validate()?;
        self.spectrum.validate()
    }
}

/// Waveform generation settings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneratorConfig {
    /// Added to the span of families whose nominal end point is part of the
    /// signal (harmonic, polyharmonic, unit step, delta function).
    pub inclusive_epsilon: f64,

    /// Reject parameters outside the documented input domain.
    ///
    /// Structural checks (finite values, positive step) run regardless.
    pub enforce_domain: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            inclusive_epsilon: DEFAULT_INCLUSIVE_EPSILON,
            enforce_domain: true,
        }
    }
}

impl GeneratorConfig {
    /// Configuration that only runs structural checks.
    pub fn permissive() -> Self {
        Self {
            enforce_domain: false,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.inclusive_epsilon.is_finite() || self.inclusive_epsilon < 0.0 {
            return Err(SignalError::invalid(
                "inclusive_epsilon",
                self.inclusive_epsilon,
                "must be a finite non-negative number",
            ));
        }
        Ok(())
    }
}

/// Spectrum analysis settings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpectrumConfig {
    /// Transform length used by
    /// [`SpectrumRequest::with_defaults`](crate::SpectrumRequest::with_defaults).
    pub default_transform_length: usize,

    /// Window applied to the retained samples before the transform.
    pub window: Window,
}

impl Default for SpectrumConfig {
    fn default() -> Self {
        Self {
            default_transform_length: DEFAULT_TRANSFORM_LENGTH,
            window: Window::Rectangular,
        }
    }
}

impl SpectrumConfig {
    pub fn validate(&self) -> Result<()> {
        validate_transform_length(self.default_transform_length)
    }
}
