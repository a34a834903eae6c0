//! Impulsive (salt-and-pepper) noise.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Result, SignalError};

/// Sparse impulses of fixed magnitude and random sign.
///
/// Unlike the streaming generators, impulse noise is placed over a whole
/// buffer: `floor(len * density)` indices are drawn uniformly with
/// replacement, and each drawn index is set to `+magnitude` or `-magnitude`
/// with equal probability. A repeated index keeps the later sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpulseNoise {
    density: f64,
    magnitude: f64,
}

impl ImpulseNoise {
    /// # Errors
    ///
    /// Returns [`SignalError::InvalidParameter`] unless `density` lies in
    /// `[0, 1]` and `magnitude` is finite.
    pub fn new(density: f64, magnitude: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&density) {
            return Err(SignalError::invalid(
                "density",
                density,
                "must lie between 0 and 1",
            ));
        }
        if !magnitude.is_finite() {
            return Err(SignalError::invalid(
                "magnitude",
                magnitude,
                "must be a finite number",
            ));
        }
        Ok(Self { density, magnitude })
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Number of impulses drawn for a buffer of `len` samples.
    pub fn impulse_count(&self, len: usize) -> usize {
        (len as f64 * self.density).floor() as usize
    }

    /// Fills a zeroed buffer of `len` samples with impulses.
    pub fn generate<R: Rng>(&self, len: usize, rng: &mut R) -> Vec<f64> {
        let mut buffer = vec![0.0; len];
        self.add_to(&mut buffer, rng);
        buffer
    }

    /// Adds impulses to `buffer` in place, overwriting the hit samples.
    pub fn add_to<R: Rng>(&self, buffer: &mut [f64], rng: &mut R) {
        if buffer.is_empty() {
            return;
        }
        for _ in 0..self.impulse_count(buffer.len()) {
            let index = rng.gen_range(0..buffer.len());
            buffer[index] = if rng.gen_bool(0.5) {
                self.magnitude
            } else {
                -self.magnitude
            };
        }
    }

    /// Generates impulses with a generator seeded from `seed`, or from the
    /// operating system when `seed` is `None`.
    pub fn generate_seeded(&self, len: usize, seed: Option<u64>) -> Vec<f64> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.generate(len, &mut rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_density() {
        assert!(ImpulseNoise::new(-0.1, 1.0).is_err());
        assert!(ImpulseNoise::new(1.5, 1.0).is_err());
        assert!(ImpulseNoise::new(0.5, f64::NAN).is_err());
    }

    #[test]
    fn test_impulse_budget() {
        let noise = ImpulseNoise::new(0.05, 2.0).unwrap();
        assert_eq!(noise.impulse_count(1000), 50);
        assert_eq!(noise.impulse_count(19), 0);

        let buffer = noise.generate_seeded(1000, Some(9));
        let hits = buffer.iter().filter(|&&x| x != 0.0).count();
        assert!(hits > 0 && hits <= 50, "hits = {hits}");
        assert!(buffer.iter().all(|&x| x == 0.0 || x.abs() == 2.0));
    }

    #[test]
    fn test_both_signs_appear() {
        let noise = ImpulseNoise::new(0.5, 1.0).unwrap();
        let buffer = noise.generate_seeded(1000, Some(1));
        assert!(buffer.iter().any(|&x| x == 1.0));
        assert!(buffer.iter().any(|&x| x == -1.0));
    }

    #[test]
    fn test_zero_density_is_silent() {
        let noise = ImpulseNoise::new(0.0, 1.0).unwrap();
        assert!(noise.generate_seeded(100, None).iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_empty_buffer() {
        let noise = ImpulseNoise::new(1.0, 1.0).unwrap();
        assert!(noise.generate_seeded(0, Some(0)).is_empty());
    }

    #[test]
    fn test_seeded_reproducible() {
        let noise = ImpulseNoise::new(0.1, 3.0).unwrap();
        assert_eq!(
            noise.generate_seeded(500, Some(4)),
            noise.generate_seeded(500, Some(4))
        );
    }
}
