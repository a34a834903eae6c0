use anyhow::Result;
use sigspec::waveforms::{Harmonic, Polyharmonic};
use sigspec::{
    Generator, GeneratorConfig, SignalParameters, SpectrumAnalyzer, SpectrumConfig,
    SpectrumRequest, SpectrumView,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let generator = Generator::new(GeneratorConfig::default());
    let mut analyzer = SpectrumAnalyzer::new(SpectrumConfig::default());

    println!("Harmonic and Polyharmonic Spectra\n");

    // Example 1: a single 1 Hz harmonic
    println!("1. Harmonic (f: 1 Hz, duration: 2 s, step: 0.01 s)");
    let params = SignalParameters::Harmonic(Harmonic::new(1.0, 2.0, 0.01, 0.0));
    let harmonic = generator.generate(&params)?;
    println!("   Samples: {}, peak amplitude: {:.3}", harmonic.len(), harmonic.peak_amplitude());

    for view in SpectrumView::ALL {
        let result = analyzer.analyze(&SpectrumRequest::for_signal(&harmonic, 256, view))?;
        match result.peak() {
            Some((index, x, y)) => println!(
                "   {:<10} peak at bin {index:>3}: {} = {x:.3}, {} = {y:.3}",
                view.name(),
                result.x_label,
                result.y_label
            ),
            None => println!("   {:<10} empty", view.name()),
        }
    }
    println!();

    // Example 2: three harmonics parsed from text
    println!("2. Polyharmonic (frequencies: \"0.5; 1; 1,5\")");
    let poly = Polyharmonic::parse("0.5; 1; 1,5", 4.0, 0.01)?;
    let signal = generator.generate(&SignalParameters::Polyharmonic(poly))?;
    let request = SpectrumRequest::for_signal(&signal, 1024, SpectrumView::Magnitude);
    let result = analyzer.analyze(&request)?;

    print!("   Bins above 0.5: ");
    for (x, y) in result.x.iter().zip(&result.y) {
        if *y > 0.5 {
            print!("{:.2} rad/s ", x);
        }
    }
    println!("\n");

    Ok(())
}
