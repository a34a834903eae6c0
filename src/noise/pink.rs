//! Pink (1/f) noise.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::SampleSource;

const ROWS: usize = 16;

/// A pink noise generator.
///
/// Pink noise has equal power per octave, so it carries more energy at low
/// frequencies than white noise. Implemented with the Voss-McCartney
/// algorithm: sixteen uniform rows, row `k` refreshed every `2^k` samples.
/// Output stays within `[-1, 1]`.
///
/// This is a streaming approximation of the 1/f slope. It does not shape a
/// finished block of Gaussian noise by `1/sqrt(f)` in the frequency domain,
/// so its samples are bounded rather than Gaussian and its spectrum follows
/// 1/f only in steps between the row rates.
pub struct PinkNoise<R: Rng = StdRng> {
    rng: R,
    rows: [f64; ROWS],
    counter: u32,
}

impl PinkNoise<StdRng> {
    /// Creates a pink noise generator seeded from the operating system.
    ///
    /// # Examples
    ///
    /// ```
    /// use sigspec::SampleSource;
    /// use sigspec::noise::PinkNoise;
    ///
    /// let mut noise = PinkNoise::new();
    /// assert!(noise.next_sample().abs() <= 1.0);
    /// ```
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a reproducible pink noise generator.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for PinkNoise<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PinkNoise<R> {
    pub fn with_rng(mut rng: R) -> Self {
        let rows = [0.0; ROWS].map(|_| rng.gen_range(-1.0..=1.0));
        Self {
            rng,
            rows,
            counter: 0,
        }
    }
}

impl<R: Rng> SampleSource for PinkNoise<R> {
    fn next_sample(&mut self) -> f64 {
        // refresh the rows selected by the counter's trailing zeros
        let refreshed = (self.counter.trailing_zeros() as usize + 1).min(ROWS);
        for row in &mut self.rows[..refreshed] {
            *row = self.rng.gen_range(-1.0..=1.0);
        }
        self.counter = self.counter.wrapping_add(1);

        self.rows.iter().sum::<f64>() / ROWS as f64
    }
}
