//! Streaming sample sources.

use super::grid::SampleGrid;
use super::signal::Signal;

/// Common interface for anything that produces samples one at a time.
///
/// Noise generators and filters implement this trait; a filter wraps another
/// source and is itself a source, so stages chain by value.
///
/// The trait provides two fundamental operations:
/// - Single sample generation via `next_sample()`
/// - Batch processing via `process()`
pub trait SampleSource {
    /// Generates the next sample.
    fn next_sample(&mut self) -> f64;

    /// Generates multiple samples into a buffer.
    ///
    /// Default implementation calls `next_sample()` for each element.
    fn process(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }

    /// Draws one sample per instant of `grid` and returns them as a [`Signal`].
    fn render(&mut self, grid: &SampleGrid) -> Signal
    where
        Self: Sized,
    {
        let mut amplitude = vec![0.0; grid.len()];
        self.process(&mut amplitude);
        Signal::from_grid(grid, amplitude)
    }
}

impl<S: SampleSource + ?Sized> SampleSource for Box<S> {
    fn next_sample(&mut self) -> f64 {
        (**self).next_sample()
    }

    fn process(&mut self, buffer: &mut [f64]) {
        (**self).process(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ramp(f64);

    impl SampleSource for Ramp {
        fn next_sample(&mut self) -> f64 {
            self.0 += 1.0;
            self.0
        }
    }

    #[test]
    fn test_process_buffer() {
        let mut ramp = Ramp(0.0);
        let mut buffer = [0.0; 4];
        ramp.process(&mut buffer);
        assert_eq!(buffer, [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_render_over_grid() {
        let grid = SampleGrid::new(0.0, 0.3, 0.1).unwrap();
        let signal = Ramp(10.0).render(&grid);
        assert_eq!(signal.amplitude(), &[11.0, 12.0, 13.0]);
        assert_eq!(signal.len(), grid.len());
    }

    #[test]
    fn test_boxed_source() {
        let mut boxed: Box<dyn SampleSource> = Box::new(Ramp(0.0));
        assert_eq!(boxed.next_sample(), 1.0);
    }
}
