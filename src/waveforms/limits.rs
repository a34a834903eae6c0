//! Input domains of the generator parameters.
//!
//! These bounds describe what the interactive front end offers. The
//! generator enforces them when [`GeneratorConfig::enforce_domain`] is set.
//!
//! [`GeneratorConfig::enforce_domain`]: crate::GeneratorConfig::enforce_domain

use std::ops::RangeInclusive;

use crate::error::{Result, SignalError};

/// Harmonic period `T`, seconds.
pub const PERIOD: RangeInclusive<f64> = 0.628..=6.28;

/// Sampling step, seconds.
pub const STEP: RangeInclusive<f64> = 0.001..=2.0;

/// Sampling step of the damped sine, seconds.
pub const DAMPED_SINE_STEP: RangeInclusive<f64> = 0.001..=0.1;

/// Phase shift, radians.
pub const PHASE: RangeInclusive<f64> = 0.0..=6.28;

/// Most harmonics a polyharmonic signal can hold.
pub const MAX_HARMONICS: usize = 7;

/// Polyharmonic duration, seconds.
pub const POLYHARMONIC_DURATION: RangeInclusive<f64> = 0.001..=10.0;

/// Pulses per train.
pub const PULSE_COUNT: RangeInclusive<u32> = 3..=7;

/// Pulse-train period, seconds.
pub const PULSE_DURATION: RangeInclusive<f64> = 0.628..=6.28;

/// Single-pulse width, seconds.
pub const SINGLE_PULSE_DURATION: RangeInclusive<f64> = 1.57..=6.28;

/// Unit-step moment, whole seconds.
pub const STEP_MOMENT: RangeInclusive<u32> = 1..=20;

/// Delta-function amplitudes offered to the user.
pub const DELTA_AMPLITUDES: [f64; 10] = [
    1000.0, 2000.0, 3000.0, 4000.0, 5000.0, 6000.0, 7000.0, 8000.0, 9000.0, 10000.0,
];

/// Resolution harmonic frequencies are rounded to when derived from a period.
pub const FREQUENCY_RESOLUTION: f64 = 0.001;

/// Slack for bounds typed in with three decimals.
const BOUND_TOLERANCE: f64 = 1e-9;

pub(crate) fn check_range(
    name: &'static str,
    value: f64,
    range: &RangeInclusive<f64>,
) -> Result<()> {
    check_range_with(name, value, range, BOUND_TOLERANCE)
}

pub(crate) fn check_range_with(
    name: &'static str,
    value: f64,
    range: &RangeInclusive<f64>,
    tolerance: f64,
) -> Result<()> {
    if value >= range.start() - tolerance && value <= range.end() + tolerance {
        Ok(())
    } else {
        Err(SignalError::invalid(
            name,
            value,
            format!("must lie in [{}, {}]", range.start(), range.end()),
        ))
    }
}

pub(crate) fn check_count(
    name: &'static str,
    value: u32,
    range: &RangeInclusive<u32>,
) -> Result<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(SignalError::invalid(
            name,
            value,
            format!("must lie in {}..={}", range.start(), range.end()),
        ))
    }
}

pub(crate) fn require_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SignalError::invalid(name, value, "must be finite"))
    }
}

pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SignalError::invalid(name, value, "must be a positive number"))
    }
}

pub(crate) fn require_non_negative(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SignalError::invalid(name, value, "must be a non-negative number"))
    }
}
