use anyhow::Result;
use sigspec::noise::{NoiseParameters, generate_noise};
use sigspec::waveforms::Harmonic;
use sigspec::{SignalParameters, SpectrumRequest, SpectrumView, Window, analyze, generate};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let step = 0.01;
    let duration = 10.0;

    println!("Noise Spectra\n");

    let kinds = [
        NoiseParameters::standard_white(),
        NoiseParameters::Pink,
        NoiseParameters::filtered_white(5.0),
        NoiseParameters::Impulse {
            density: 0.02,
            magnitude: 3.0,
        },
    ];

    for (i, params) in kinds.iter().enumerate() {
        println!("{}. {} noise", i + 1, params.name());
        let noise = generate_noise(params, duration, step, Some(42))?;
        let request = SpectrumRequest::for_signal(&noise, 1024, SpectrumView::Magnitude)
            .with_window(Window::Hann);
        let result = analyze(&request)?;

        // share of spectral weight in the lower half of the axis
        let half = result.len() / 2;
        let total: f64 = result.y.iter().sum();
        let low: f64 = result.y[..half].iter().sum();
        println!(
            "   Samples: {}, peak amplitude: {:.3}, low-band weight: {:.1}%\n",
            noise.len(),
            noise.peak_amplitude(),
            100.0 * low / total.max(f64::MIN_POSITIVE)
        );
    }

    // Noise laid over a harmonic
    println!("{}. harmonic (1 Hz) + white noise (std: 0.3)", kinds.len() + 1);
    let params = SignalParameters::Harmonic(Harmonic::new(1.0, duration - 0.001, step, 0.0));
    let harmonic = generate(&params)?;
    let noise = generate_noise(
        &NoiseParameters::White {
            mean: 0.0,
            std_dev: 0.3,
        },
        duration,
        step,
        Some(7),
    )?;
    let noisy = harmonic.superimpose(&noise)?;
    let result = analyze(&SpectrumRequest::for_signal(&noisy, 1024, SpectrumView::Magnitude))?;
    if let Some((index, x, _)) = result.peak() {
        println!(
            "   Peak at bin {index}: {x:.3} rad/s (expected near {:.3})",
            2.0 * std::f64::consts::PI
        );
    }

    Ok(())
}
