//! Spectrum analysis of sampled signals.
//!
//! A [`SpectrumRequest`] names the samples, their step, the transform length
//! and the view to produce. [`SpectrumAnalyzer::analyze`] zero-pads or
//! truncates the samples to the transform length, transforms them and keeps
//! the non-negative frequency bins.
//!
//! # Examples
//!
//! ```
//! use sigspec::{SpectrumRequest, SpectrumView, analyze};
//!
//! let samples: Vec<f64> = (0..256).map(|i| (i as f64 * 0.3).sin()).collect();
//! let request = SpectrumRequest::new(&samples, 0.01, 256, SpectrumView::Magnitude);
//! let result = analyze(&request).unwrap();
//!
//! assert_eq!(result.x.len(), 128);
//! assert_eq!(result.y_label, "Normalized magnitude");
//! ```

mod analyzer;
mod fft;
mod window;

pub use analyzer::{
    SUPPORTED_TRANSFORM_LENGTHS, Spectrum, SpectrumAnalyzer, SpectrumRequest, SpectrumResult,
    SpectrumView, analyze, validate_transform_length,
};
pub use fft::FftEngine;
pub use window::Window;
