//! Filters applied to sample sources and finished signals.

mod butterworth;

pub use butterworth::{Butterworth, LowpassCascade, lowpass};
