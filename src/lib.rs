//! Sigspec - test-signal synthesis and spectrum analysis for Rust
//!
//! This library generates deterministic test signals (harmonic,
//! polyharmonic, pulse trains, damped sines, steps, impulses and more) on a
//! uniform sample grid, optionally lays noise over them, and computes
//! one-sided spectra with five display projections.
//!
//! # Examples
//!
//! ```
//! use sigspec::{SignalParameters, SpectrumRequest, SpectrumView, analyze, generate};
//! use sigspec::waveforms::Harmonic;
//!
//! let params = SignalParameters::Harmonic(Harmonic::new(1.0, 2.0, 0.01, 0.0));
//! let signal = generate(&params).unwrap();
//! assert_eq!(signal.len(), 201);
//!
//! let request = SpectrumRequest::for_signal(&signal, 256, SpectrumView::Magnitude);
//! let spectrum = analyze(&request).unwrap();
//! assert_eq!(spectrum.x.len(), 128);
//! ```

pub mod config;
pub mod core;
pub mod error;
#[cfg(feature = "noise")]
pub mod filters;
#[cfg(feature = "noise")]
pub mod noise;
pub mod spectrum;
pub mod waveforms;

// Re-export commonly used types at the crate root
pub use config::{EngineConfig, GeneratorConfig, SpectrumConfig};
pub use crate::core::{SampleGrid, SampleSource, Signal};
pub use error::{Result, SignalError};
#[cfg(feature = "noise")]
pub use noise::{NoiseParameters, generate_noise};
pub use spectrum::{
    SUPPORTED_TRANSFORM_LENGTHS, SpectrumAnalyzer, SpectrumRequest, SpectrumResult, SpectrumView,
    Window, analyze,
};
pub use waveforms::{Generator, SignalCategory, SignalParameters, generate};
