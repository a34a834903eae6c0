//! Window functions applied before the transform.

use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Taper applied to the retained samples before zero padding.
///
/// `Rectangular` leaves the samples untouched and is what the one-sided
/// amplitude scaling assumes; the tapered windows trade amplitude accuracy
/// for lower sidelobes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Window {
    #[default]
    Rectangular,
    Hann,
    Hamming,
    Blackman,
}

impl Window {
    /// Generates `size` window coefficients (periodic form).
    pub fn coefficients(&self, size: usize) -> Vec<f64> {
        let n = size as f64;
        (0..size)
            .map(|i| {
                let x = 2.0 * PI * i as f64 / n;
                match self {
                    Window::Rectangular => 1.0,
                    Window::Hann => 0.5 * (1.0 - x.cos()),
                    Window::Hamming => 0.54 - 0.46 * x.cos(),
                    Window::Blackman => 0.42 - 0.5 * x.cos() + 0.08 * (2.0 * x).cos(),
                }
            })
            .collect()
    }

    /// Multiplies `samples` by the window in place.
    pub fn apply(&self, samples: &mut [f64]) {
        if *self == Window::Rectangular {
            return;
        }
        let coefficients = self.coefficients(samples.len());
        for (sample, w) in samples.iter_mut().zip(coefficients) {
            *sample *= w;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangular_is_identity() {
        let mut samples = vec![1.0, -2.0, 3.0];
        Window::Rectangular.apply(&mut samples);
        assert_eq!(samples, vec![1.0, -2.0, 3.0]);
    }

    #[test]
    fn test_hann_endpoints_and_center() {
        let w = Window::Hann.coefficients(8);
        assert_eq!(w[0], 0.0);
        assert!((w[4] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_tapered_windows_bounded() {
        for window in [Window::Hann, Window::Hamming, Window::Blackman] {
            for w in window.coefficients(64) {
                assert!((-1e-12..=1.0 + 1e-12).contains(&w), "{window:?}: {w}");
            }
        }
    }

    #[test]
    fn test_apply_scales_in_place() {
        let mut samples = vec![2.0; 4];
        Window::Hann.apply(&mut samples);
        let expected: Vec<f64> = Window::Hann.coefficients(4).iter().map(|w| 2.0 * w).collect();
        assert_eq!(samples, expected);
        assert_eq!(samples[0], 0.0);
        assert!((samples[2] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_apply_empty() {
        let mut samples: Vec<f64> = Vec::new();
        Window::Hann.apply(&mut samples);
        assert!(samples.is_empty());
    }
}
