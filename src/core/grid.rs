//! Time-axis construction.
//!
//! A [`SampleGrid`] describes the half-open interval `[start, stop_exclusive)`
//! sampled every `step` seconds. Sample instants are computed by index
//! (`start + i * step`) so that rounding error never accumulates along the
//! axis.

use crate::error::{Result, SignalError};

/// Relative tolerance used when a ratio is "an integer up to float error".
///
/// `3.0 / 0.1` evaluates to `30.000000000000004`; without the snap the grid
/// `[0, 3)` would gain a spurious 31st sample sitting on its excluded end.
const RATIO_TOLERANCE: f64 = 1e-9;

/// Largest number of samples a grid may hold.
pub const MAX_GRID_LEN: usize = 1 << 22;

/// A uniformly spaced set of sample instants over `[start, stop_exclusive)`.
///
/// The grid never extends its stop point on its own. Callers that want the
/// nominal end point included add an explicit epsilon to `stop_exclusive`
/// (see [`GeneratorConfig::inclusive_epsilon`](crate::GeneratorConfig)).
///
/// # Examples
///
/// ```
/// use sigspec::SampleGrid;
///
/// let grid = SampleGrid::new(0.0, 1.0, 0.25).unwrap();
/// assert_eq!(grid.to_vec(), vec![0.0, 0.25, 0.5, 0.75]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleGrid {
    start: f64,
    stop_exclusive: f64,
    step: f64,
    len: usize,
}

impl SampleGrid {
    /// Creates a grid over `[start, stop_exclusive)` with the given step.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::InvalidParameter`] when any bound is not
    /// finite, when `step <= 0`, when `stop_exclusive <= start`, or when the
    /// grid would hold more than [`MAX_GRID_LEN`] samples.
    pub fn new(start: f64, stop_exclusive: f64, step: f64) -> Result<Self> {
        if !start.is_finite() {
            return Err(SignalError::invalid("start", start, "must be finite"));
        }
        if !stop_exclusive.is_finite() {
            return Err(SignalError::invalid("stop", stop_exclusive, "must be finite"));
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(SignalError::invalid("step", step, "must be a positive number"));
        }
        if stop_exclusive <= start {
            return Err(SignalError::invalid(
                "stop",
                stop_exclusive,
                format!("must be greater than start ({start})"),
            ));
        }

        let ratio = (stop_exclusive - start) / step;
        if ratio > MAX_GRID_LEN as f64 {
            return Err(SignalError::invalid(
                "step",
                step,
                format!("grid over [{start}, {stop_exclusive}) exceeds {MAX_GRID_LEN} samples"),
            ));
        }
        let len = first_index_at_or_after(ratio);

        Ok(Self {
            start,
            stop_exclusive,
            step,
            len,
        })
    }

    /// First sample instant.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Excluded upper bound of the interval.
    pub fn stop_exclusive(&self) -> f64 {
        self.stop_exclusive
    }

    /// Sampling interval in seconds.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of samples on the grid.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the grid holds no samples.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sample instant at `index`. Does not check `index < len()`.
    pub fn at(&self, index: usize) -> f64 {
        self.start + index as f64 * self.step
    }

    /// Iterates over the sample instants in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len).map(move |i| self.at(i))
    }

    /// Collects the sample instants.
    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }
}

/// Builds the sample instants of `[start, stop_exclusive)` directly.
///
/// Equivalent to `SampleGrid::new(start, stop_exclusive, step)?.to_vec()`.
pub fn build(start: f64, stop_exclusive: f64, step: f64) -> Result<Vec<f64>> {
    Ok(SampleGrid::new(start, stop_exclusive, step)?.to_vec())
}

/// Index of the first grid sample at or after `position` (in units of steps).
///
/// Positions within the grid tolerance of an integer snap to it, so
/// `0.628 / 0.001` lands on 628 rather than 629.
pub(crate) fn first_index_at_or_after(position: f64) -> usize {
    (position - position.abs().max(1.0) * RATIO_TOLERANCE)
        .ceil()
        .max(0.0) as usize
}

/// Index of the last grid sample at or before `position` (in units of
/// steps), i.e. `position` truncated to an integer.
///
/// Positions within the grid tolerance below an integer snap up to it, so
/// `3.0 * (0.3 / 0.1)` lands on 9 rather than 8.
pub(crate) fn index_at_or_before(position: f64) -> usize {
    (position + position.abs().max(1.0) * RATIO_TOLERANCE)
        .floor()
        .max(0.0) as usize
}
