//! Low-pass Butterworth filter built from cascaded biquad sections.
//!
//! Second-order sections use Robert Bristow-Johnson's Audio EQ Cookbook
//! low-pass formulas with the Butterworth pole Q values; odd orders add one
//! first-order bilinear section. All sections are prewarped to the same
//! cutoff, so the cascade is the bilinear transform of the analog
//! prototype.

use std::f64::consts::PI;

use crate::core::{SampleSource, Signal};
use crate::error::{Result, SignalError};

/// One section of the cascade in Direct Form I.
///
/// First-order sections leave `b2` and `a2` at zero.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Biquad {
    b0: f64,
    b1: f64,
    b2: f64,
    a1: f64,
    a2: f64,

    x1: f64,
    x2: f64,
    y1: f64,
    y2: f64,
}

impl Biquad {
    fn from_coefficients(b0: f64, b1: f64, b2: f64, a1: f64, a2: f64) -> Self {
        Self {
            b0,
            b1,
            b2,
            a1,
            a2,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
        }
    }

    fn lowpass(omega: f64, q: f64) -> Self {
        let sin_omega = omega.sin();
        let cos_omega = omega.cos();
        let alpha = sin_omega / (2.0 * q);

        let a0 = 1.0 + alpha;
        Self::from_coefficients(
            (1.0 - cos_omega) / 2.0 / a0,
            (1.0 - cos_omega) / a0,
            (1.0 - cos_omega) / 2.0 / a0,
            -2.0 * cos_omega / a0,
            (1.0 - alpha) / a0,
        )
    }

    fn first_order_lowpass(omega: f64) -> Self {
        let k = (omega / 2.0).tan();
        let b = k / (1.0 + k);
        Self::from_coefficients(b, b, 0.0, (k - 1.0) / (k + 1.0), 0.0)
    }

    fn tick(&mut self, x0: f64) -> f64 {
        // y[n] = b0*x[n] + b1*x[n-1] + b2*x[n-2] - a1*y[n-1] - a2*y[n-2]
        let y0 = self.b0 * x0 + self.b1 * self.x1 + self.b2 * self.x2
            - self.a1 * self.y1
            - self.a2 * self.y2;

        self.x2 = self.x1;
        self.x1 = x0;
        self.y2 = self.y1;
        self.y1 = y0;

        y0
    }

    fn reset(&mut self) {
        self.x1 = 0.0;
        self.x2 = 0.0;
        self.y1 = 0.0;
        self.y2 = 0.0;
    }
}

/// Q of the `k`-th (1-based) conjugate pole pair of an order-`order`
/// Butterworth prototype.
fn pole_pair_q(k: u32, order: u32) -> f64 {
    let angle = f64::from(2 * k - 1) * PI / (2.0 * f64::from(order));
    1.0 / (2.0 * angle.sin())
}

/// Stateful low-pass Butterworth cascade operating on raw samples.
#[derive(Debug, Clone, PartialEq)]
pub struct LowpassCascade {
    cutoff: f64,
    sample_rate: f64,
    order: u32,
    sections: Vec<Biquad>,
}

impl LowpassCascade {
    /// Designs an order-`order` low-pass with `cutoff` Hz at `sample_rate` Hz.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::InvalidParameter`] if `sample_rate` is not a
    /// positive number, `cutoff` is outside `(0, sample_rate / 2)` or
    /// `order` is zero.
    pub fn new(cutoff: f64, order: u32, sample_rate: f64) -> Result<Self> {
        if !sample_rate.is_finite() || sample_rate <= 0.0 {
            return Err(SignalError::invalid(
                "sample_rate",
                sample_rate,
                "must be a positive number",
            ));
        }
        let nyquist = sample_rate / 2.0;
        if !(cutoff > 0.0 && cutoff < nyquist) {
            return Err(SignalError::invalid(
                "cutoff",
                cutoff,
                format!("must lie strictly between 0 and the Nyquist frequency {nyquist} Hz"),
            ));
        }
        if order == 0 {
            return Err(SignalError::invalid("order", order, "must be at least 1"));
        }

        let omega = 2.0 * PI * cutoff / sample_rate;
        let mut sections: Vec<Biquad> = (1..=order / 2)
            .map(|k| Biquad::lowpass(omega, pole_pair_q(k, order)))
            .collect();
        if order % 2 == 1 {
            sections.push(Biquad::first_order_lowpass(omega));
        }

        tracing::trace!(
            cutoff,
            order,
            sample_rate,
            sections = sections.len(),
            "designed butterworth"
        );

        Ok(Self {
            cutoff,
            sample_rate,
            order,
            sections,
        })
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    /// Filters one sample.
    pub fn tick(&mut self, sample: f64) -> f64 {
        self.sections
            .iter_mut()
            .fold(sample, |x, section| section.tick(x))
    }

    /// Filters `buffer` in place, continuing from the current state.
    pub fn filter_in_place(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.tick(*sample);
        }
    }

    /// Clears the delay lines.
    pub fn reset(&mut self) {
        self.sections.iter_mut().for_each(Biquad::reset);
    }
}

/// A low-pass Butterworth filter that processes an input source.
///
/// # Examples
///
/// ```
/// use sigspec::SampleSource;
/// use sigspec::filters::Butterworth;
/// use sigspec::noise::WhiteNoise;
///
/// let noise = WhiteNoise::seeded(0.0, 1.0, 42).unwrap();
/// let mut filtered = Butterworth::lowpass(noise, 5.0, 5, 100.0).unwrap();
/// assert!(filtered.next_sample().is_finite());
/// ```
pub struct Butterworth<S: SampleSource> {
    source: S,
    cascade: LowpassCascade,
}

impl<S: SampleSource> Butterworth<S> {
    /// Wraps `source`, sampled at `sample_rate` Hz, in an order-`order`
    /// low-pass with `cutoff` Hz.
    pub fn lowpass(source: S, cutoff: f64, order: u32, sample_rate: f64) -> Result<Self> {
        Ok(Self {
            source,
            cascade: LowpassCascade::new(cutoff, order, sample_rate)?,
        })
    }

    pub fn cascade(&self) -> &LowpassCascade {
        &self.cascade
    }

    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: SampleSource> SampleSource for Butterworth<S> {
    fn next_sample(&mut self) -> f64 {
        let x0 = self.source.next_sample();
        self.cascade.tick(x0)
    }
}

/// Low-pass filters a finished signal, using its step as the sampling period.
pub fn lowpass(signal: &Signal, cutoff: f64, order: u32) -> Result<Signal> {
    let mut cascade = LowpassCascade::new(cutoff, order, 1.0 / signal.step())?;
    let step = signal.step();
    let (time, mut amplitude) = signal.clone().into_parts();
    cascade.filter_in_place(&mut amplitude);
    Signal::new(time, amplitude, step)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tone {
        frequency: f64,
        sample_rate: f64,
        index: u64,
    }

    impl Tone {
        fn new(frequency: f64, sample_rate: f64) -> Self {
            Self {
                frequency,
                sample_rate,
                index: 0,
            }
        }
    }

    impl SampleSource for Tone {
        fn next_sample(&mut self) -> f64 {
            let t = self.index as f64 / self.sample_rate;
            self.index += 1;
            (2.0 * PI * self.frequency * t).sin()
        }
    }

    struct Constant(f64);

    impl SampleSource for Constant {
        fn next_sample(&mut self) -> f64 {
            self.0
        }
    }

    fn settled_peak<S: SampleSource>(filter: &mut S, settle: usize, window: usize) -> f64 {
        for _ in 0..settle {
            filter.next_sample();
        }
        (0..window)
            .map(|_| filter.next_sample().abs())
            .fold(0.0, f64::max)
    }

    #[test]
    fn test_section_count() {
        for (order, sections) in [(1, 1), (2, 1), (3, 2), (4, 2), (5, 3), (8, 4)] {
            let cascade = LowpassCascade::new(10.0, order, 100.0).unwrap();
            assert_eq!(cascade.sections.len(), sections, "order {order}");
        }
    }

    #[test]
    fn test_pole_pair_q() {
        assert!((pole_pair_q(1, 2) - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
        assert!((pole_pair_q(1, 3) - 1.0).abs() < 1e-12);
        assert!((pole_pair_q(1, 5) - 1.618_033_988_7).abs() < 1e-9);
        assert!((pole_pair_q(2, 5) - 0.618_033_988_7).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_bad_design() {
        assert!(LowpassCascade::new(0.0, 4, 100.0).is_err());
        assert!(LowpassCascade::new(50.0, 4, 100.0).is_err());
        assert!(LowpassCascade::new(10.0, 0, 100.0).is_err());
        assert!(LowpassCascade::new(10.0, 4, 0.0).is_err());
        assert!(LowpassCascade::new(f64::NAN, 4, 100.0).is_err());
    }

    #[test]
    fn test_unity_dc_gain() {
        for order in 1..=6 {
            let mut filter = Butterworth::lowpass(Constant(1.0), 5.0, order, 100.0).unwrap();
            for _ in 0..2000 {
                filter.next_sample();
            }
            let sample = filter.next_sample();
            assert!((sample - 1.0).abs() < 1e-6, "order {order}: {sample}");
        }
    }

    #[test]
    fn test_attenuates_above_cutoff() {
        let mut filter = Butterworth::lowpass(Tone::new(400.0, 1000.0), 50.0, 4, 1000.0).unwrap();
        let peak = settled_peak(&mut filter, 1000, 400);
        assert!(peak < 0.01, "Expected attenuation, got {peak}");
    }

    #[test]
    fn test_passes_below_cutoff() {
        let mut filter = Butterworth::lowpass(Tone::new(5.0, 1000.0), 50.0, 4, 1000.0).unwrap();
        let peak = settled_peak(&mut filter, 1000, 400);
        assert!(peak > 0.9, "Expected pass-through, got {peak}");
    }

    #[test]
    fn test_half_power_at_cutoff() {
        for order in [1, 2, 5] {
            let mut filter =
                Butterworth::lowpass(Tone::new(50.0, 1000.0), 50.0, order, 1000.0).unwrap();
            let peak = settled_peak(&mut filter, 2000, 40);
            assert!((0.65..0.75).contains(&peak), "order {order}: {peak}");
        }
    }

    #[test]
    fn test_filter_stability() {
        let mut filter = Butterworth::lowpass(Tone::new(45.0, 100.0), 49.0, 8, 100.0).unwrap();
        for _ in 0..10_000 {
            let sample = filter.next_sample();
            assert!(sample.is_finite(), "Filter became unstable");
            assert!(sample.abs() < 10.0, "Output amplitude too high: {sample}");
        }
    }

    #[test]
    fn test_reset_restores_initial_response() {
        let mut cascade = LowpassCascade::new(5.0, 3, 100.0).unwrap();
        let first: Vec<f64> = (0..10).map(|_| cascade.tick(1.0)).collect();
        cascade.reset();
        let second: Vec<f64> = (0..10).map(|_| cascade.tick(1.0)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_lowpass_signal_keeps_time_axis() {
        let signal = Signal::new(vec![0.0, 0.01, 0.02], vec![1.0, 1.0, 1.0], 0.01).unwrap();
        let filtered = lowpass(&signal, 10.0, 2).unwrap();
        assert_eq!(filtered.time(), signal.time());
        assert!(filtered.amplitude()[0] < 1.0);
    }
}
