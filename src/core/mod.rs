//! Core signal types.
//!
//! This module provides the fundamental abstractions used throughout the
//! library:
//! - `SampleGrid` for building time axes
//! - `Signal` for sampled (time, amplitude) data
//! - `SampleSource` trait for streaming sample producers

pub mod grid;
mod signal;
mod source;

pub use grid::SampleGrid;
pub use signal::Signal;
pub use source::SampleSource;
