//! Forward FFT of real sequences on top of rustfft.

use num_complex::Complex64;
use rustfft::FftPlanner;

/// FFT engine with a cached planner.
///
/// Plans are reused across calls of the same length, so keeping one engine
/// around avoids re-planning for every spectrum.
pub struct FftEngine {
    planner: FftPlanner<f64>,
}

impl FftEngine {
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
        }
    }

    /// Transforms `samples` zero-padded or truncated to `length` points.
    ///
    /// Returns all `length` bins, unnormalized.
    pub fn forward(&mut self, samples: &[f64], length: usize) -> Vec<Complex64> {
        let mut buffer: Vec<Complex64> = samples
            .iter()
            .take(length)
            .map(|&x| Complex64::new(x, 0.0))
            .collect();
        buffer.resize(length, Complex64::new(0.0, 0.0));

        if length > 0 {
            let fft = self.planner.plan_fft_forward(length);
            fft.process(&mut buffer);
        }
        buffer
    }
}

impl Default for FftEngine {
    fn default() -> Self {
        Self::new()
    }
}
