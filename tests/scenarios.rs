use std::f64::consts::PI;

use sigspec::waveforms::{Harmonic, Polyharmonic, PulseTrain};
use sigspec::{
    EngineConfig, Generator, SignalError, SignalParameters, SpectrumAnalyzer, SpectrumRequest,
    SpectrumView, analyze, generate,
};

fn harmonic(frequency: f64, duration: f64, step: f64) -> SignalParameters {
    SignalParameters::Harmonic(Harmonic::new(frequency, duration, step, 0.0))
}

#[test]
fn test_generation_is_deterministic() {
    let params = SignalParameters::Polyharmonic(Polyharmonic::new(vec![0.5, 1.0, 1.5], 5.0, 0.01));
    assert_eq!(generate(&params).unwrap(), generate(&params).unwrap());
}

#[test]
fn test_harmonic_quarter_period() {
    let signal = generate(&harmonic(1.0, 1.0, 0.01)).unwrap();
    assert_eq!(signal.time().len(), signal.amplitude().len());
    assert!(signal.amplitude()[0].abs() < 1e-12);
    assert!((signal.amplitude()[25] - 1.0).abs() < 1e-9);
    assert!((signal.time()[25] - 0.25).abs() < 1e-12);
}

#[test]
fn test_eight_frequencies_rejected() {
    let params = SignalParameters::Polyharmonic(
        Polyharmonic::parse("1; 2; 3; 4; 5; 6; 7; 8", 1.0, 0.01).unwrap(),
    );
    assert_eq!(generate(&params), Err(SignalError::TooManyComponents(8)));
}

#[test]
fn test_unipolar_first_period() {
    let params = SignalParameters::UnipolarPulses(PulseTrain::new(1.0, 3, 0.1));
    let signal = generate(&params).unwrap();
    for (t, a) in signal.iter().take(10) {
        let expected = if t < 0.5 - 1e-9 { 1.0 } else { 0.0 };
        assert_eq!(a, expected, "at t = {t}");
    }
}

#[test]
fn test_pulse_periods_start_near_nominal() {
    let train = PulseTrain::new(0.628, 5, 0.03);
    let signal = generate(&SignalParameters::BipolarPulses(train)).unwrap();
    let amplitude = signal.amplitude();
    let per_period = train.pulse_duration / train.step;

    // floor(5 * 20.93) = 104 samples are covered without gaps
    let covered = (5.0 * per_period).floor() as usize;
    assert_eq!(amplitude.len(), 105);
    assert!(amplitude[..covered].iter().all(|&a| a == 1.0 || a == -1.0));
    assert!(amplitude[covered..].iter().all(|&a| a == 0.0));

    let starts: Vec<usize> = std::iter::once(0)
        .chain(
            amplitude[..covered]
                .windows(2)
                .enumerate()
                .filter(|(_, w)| w[0] < w[1])
                .map(|(i, _)| i + 1),
        )
        .collect();
    assert_eq!(starts.len(), 5);
    for (k, &start) in starts.iter().enumerate() {
        let nominal = k as f64 * per_period;
        assert!(
            start as f64 <= nominal + 1e-9 && nominal - (start as f64) < 1.0,
            "period {k} starts at {start}, nominal {nominal}"
        );
        let high = amplitude[start..].iter().take_while(|&&a| a == 1.0).count();
        assert_eq!(high, (per_period / 2.0).floor() as usize);
    }
}

#[test]
fn test_oversized_duration_rejected() {
    let result = generate(&harmonic(1.0, 1e9, 0.001));
    assert!(matches!(result, Err(SignalError::InvalidParameter { .. })));
}

#[test]
fn test_scenario_harmonic_spectrum() {
    let signal = generate(&harmonic(1.0, 2.0, 0.01)).unwrap();
    assert_eq!(signal.len(), 201);

    let request = SpectrumRequest::for_signal(&signal, 256, SpectrumView::Magnitude);
    let result = analyze(&request).unwrap();
    let (index, _, y) = result.peak().unwrap();
    assert!(index.abs_diff(3) <= 1, "peak at bin {index}");
    assert_eq!(y, 1.0);
}

#[test]
fn test_round_trip_peak_frequency() {
    // 8 cycles in 512 samples of 0.01 s
    let f0 = 8.0 / 5.12;
    let signal = generate(&harmonic(f0, 5.11, 0.01)).unwrap();
    assert_eq!(signal.len(), 512);

    let request = SpectrumRequest::for_signal(&signal, 512, SpectrumView::Magnitude);
    let result = analyze(&request).unwrap();
    let (_, x, _) = result.peak().unwrap();
    let bin_width = 2.0 * PI / 5.12;
    assert!((x - 2.0 * PI * f0).abs() <= bin_width);
}

#[test]
fn test_frequency_views_are_one_sided() {
    let signal = generate(&harmonic(1.2, 3.0, 0.02)).unwrap();
    let mut analyzer = SpectrumAnalyzer::default();
    for view in SpectrumView::ALL.into_iter().filter(|v| v.is_frequency_axis()) {
        let result = analyzer
            .analyze(&SpectrumRequest::for_signal(&signal, 4096, view))
            .unwrap();
        assert_eq!(result.len(), 2048);
        assert!(result.x.iter().all(|&x| x >= 0.0), "{view:?}");
    }
}

#[test]
fn test_config_drives_generator_and_analyzer() {
    let mut config = EngineConfig::default();
    config.generator.enforce_domain = false;
    config.spectrum.default_transform_length = 128;
    config.validate().unwrap();

    // 20 Hz is outside the checked range
    let signal = Generator::new(config.generator)
        .generate(&harmonic(20.0, 1.0, 0.001))
        .unwrap();
    let request = SpectrumRequest::with_defaults(&signal, SpectrumView::Real, &config.spectrum);
    let result = SpectrumAnalyzer::new(config.spectrum).analyze(&request).unwrap();
    assert_eq!(result.len(), 64);
}
