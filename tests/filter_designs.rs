use fir_window::{
    BandEdges, Convf64, DesignResult, FilterSpec, FilterType, Window, available_windows,
    catalog::catalog, design, response::evaluate,
};
use num_traits::Zero;
use rustfft::{Fft, FftPlanner, num_complex::Complex};
use std::sync::Arc;

#[cfg(feature = "num-bigfloat")]
use num_bigfloat::BigFloat;

struct FirResponseCalculator {
    fft: Arc<dyn Fft<f64>>,
    buffer: Box<[Complex<f64>]>,
}

// The frequency responses are checked against an FFT computed here
// independently of the one in the design.

impl FirResponseCalculator {
    fn new(num_points: usize) -> FirResponseCalculator {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(2 * num_points);
        let buffer = vec![Complex::zero(); 2 * num_points].into_boxed_slice();
        FirResponseCalculator { fft, buffer }
    }

    fn frequencies(&self, sample_rate: f64) -> Vec<f64> {
        let scale = sample_rate / self.buffer.len() as f64;
        (0..self.buffer.len() / 2)
            .map(|j| j as f64 * scale)
            .collect()
    }

    fn compute<T: Convf64>(&mut self, taps: &[T]) -> Vec<f64> {
        assert!(taps.len() <= self.buffer.len());
        self.buffer.fill(Complex::zero());
        for (b, t) in self.buffer.iter_mut().zip(taps.iter()) {
            *b = t.to_f64().into();
        }
        self.fft.process(&mut self.buffer);
        self.buffer[..self.buffer.len() / 2]
            .iter()
            .map(|z| z.norm())
            .collect()
    }
}

// Band in Hz and the magnitude expected in it.
struct Band {
    start: f64,
    end: f64,
    gain: f64,
}

fn check_response(
    response_calculator: &mut FirResponseCalculator,
    filter: &DesignResult<f64>,
    bands: &[Band],
    tolerance: f64,
) {
    let freqs = response_calculator.frequencies(filter.sample_rate);
    let response = response_calculator.compute(&filter.coefficients);
    let mut checked = 0;
    for (&f, &h) in freqs.iter().zip(response.iter()) {
        for band in bands.iter().filter(|b| (b.start..=b.end).contains(&f)) {
            assert!(
                (h - band.gain).abs() <= tolerance,
                "|H({f})| = {h}, expected {}",
                band.gain
            );
            checked += 1;
        }
    }
    assert!(checked > 0);
}

fn assert_symmetric<T: Convf64>(taps: &[T]) {
    for (a, b) in taps.iter().zip(taps.iter().rev()) {
        assert!((a.to_f64() - b.to_f64()).abs() < 1e-12);
    }
}

#[test]
fn lowpass_hamming() {
    let spec = FilterSpec::lowpass(8000.0, 1500.0, 500.0, 50.0, Window::Hamming).unwrap();
    let filter = design::<f64>(&spec).unwrap();
    assert_eq!(filter.normalized_transition_width, 0.0625);
    assert_eq!(filter.order, 53);
    assert_eq!(filter.cutoff_frequencies, BandEdges::Single(1750.0));
    // the lowpass impulse response is scaled by 2 fc, which gives a passband
    // gain of 2
    let mut response_calculator = FirResponseCalculator::new(4096);
    check_response(
        &mut response_calculator,
        &filter,
        &[
            Band {
                start: 0.0,
                end: 1400.0,
                gain: 2.0,
            },
            Band {
                start: 2100.0,
                end: 4000.0,
                gain: 0.0,
            },
        ],
        0.02,
    );
}

#[test]
fn highpass_hamming() {
    let spec = FilterSpec::highpass(8000.0, 2000.0, 400.0, 50.0, Window::Hamming).unwrap();
    let filter = design::<f64>(&spec).unwrap();
    assert_eq!(filter.cutoff_frequencies, BandEdges::Single(1800.0));
    // 3.3 / 0.05 = 66
    assert_eq!(filter.order, 67);
    assert!(filter.frequency_response.response[0].norm() < 0.01);
    let mut response_calculator = FirResponseCalculator::new(4096);
    check_response(
        &mut response_calculator,
        &filter,
        &[
            Band {
                start: 0.0,
                end: 1500.0,
                gain: 0.0,
            },
            Band {
                start: 2100.0,
                end: 4000.0,
                gain: 1.0,
            },
        ],
        0.01,
    );
}

#[test]
fn bandpass_hanning() {
    let spec = FilterSpec::bandpass(8000.0, 1000.0, 2000.0, 200.0, 40.0, Window::Hanning).unwrap();
    let filter = design::<f64>(&spec).unwrap();
    assert_eq!(filter.cutoff_frequencies, BandEdges::Pair(900.0, 2100.0));
    assert_eq!(filter.order, 125);
    let mut response_calculator = FirResponseCalculator::new(4096);
    check_response(
        &mut response_calculator,
        &filter,
        &[
            Band {
                start: 0.0,
                end: 700.0,
                gain: 0.0,
            },
            Band {
                start: 1100.0,
                end: 1900.0,
                gain: 1.0,
            },
            Band {
                start: 2300.0,
                end: 4000.0,
                gain: 0.0,
            },
        ],
        0.02,
    );
}

#[test]
fn bandstop_blackman() {
    let spec =
        FilterSpec::bandstop(8000.0, 1000.0, 2000.0, 300.0, 70.0, Window::Blackman).unwrap();
    let filter = design::<f64>(&spec).unwrap();
    assert_eq!(filter.cutoff_frequencies, BandEdges::Pair(850.0, 2150.0));
    // 5.5 / 0.0375 = 146.67
    assert_eq!(filter.order, 147);
    let mut response_calculator = FirResponseCalculator::new(4096);
    check_response(
        &mut response_calculator,
        &filter,
        &[
            Band {
                start: 0.0,
                end: 600.0,
                gain: 1.0,
            },
            Band {
                start: 1100.0,
                end: 1900.0,
                gain: 0.0,
            },
            Band {
                start: 2400.0,
                end: 4000.0,
                gain: 1.0,
            },
        ],
        0.01,
    );
}

#[test]
fn kaiser_order_formula() {
    let spec = FilterSpec::lowpass(8000.0, 1500.0, 500.0, 50.0, Window::KaiserBeta454).unwrap();
    let filter = design::<f64>(&spec).unwrap();
    // (50 - 8) / (2.285 * 2π * 0.0625) = 46.8
    assert_eq!(filter.order, 47);
    assert_eq!(filter.raw_order, 47);
    let mut response_calculator = FirResponseCalculator::new(4096);
    check_response(
        &mut response_calculator,
        &filter,
        &[
            Band {
                start: 0.0,
                end: 1400.0,
                gain: 2.0,
            },
            Band {
                start: 2100.0,
                end: 4000.0,
                gain: 0.0,
            },
        ],
        0.02,
    );
}

#[test]
fn clamping() {
    let spec = FilterSpec::highpass(48000.0, 1000.0, 1.0, 40.0, Window::Blackman).unwrap();
    let filter = design::<f64>(&spec).unwrap();
    assert_eq!(filter.order, 10001);
    assert!(filter.raw_order > 10001);
    assert_symmetric(&filter.coefficients);

    let spec =
        FilterSpec::bandpass(1000.0, 150.0, 300.0, 120.0, 20.0, Window::Rectangular).unwrap();
    let filter = design::<f64>(&spec).unwrap();
    assert_eq!(filter.order, 11);
    assert!(filter.raw_order < 11);
}

#[test]
fn catalog_filter() {
    assert_eq!(
        available_windows(60.0),
        vec![Window::Blackman, Window::KaiserBeta676, Window::KaiserBeta896]
    );
    assert_eq!(available_windows(0.0).len(), 8);
    assert!(available_windows(100.0).is_empty());
}

#[test]
fn symmetric_coefficients() {
    let specs = [
        FilterSpec::lowpass(8000.0, 1000.0, 400.0, 40.0, Window::Rectangular),
        FilterSpec::highpass(8000.0, 2500.0, 300.0, 40.0, Window::Rectangular),
        FilterSpec::bandpass(8000.0, 1000.0, 2000.0, 250.0, 40.0, Window::Rectangular),
        FilterSpec::bandstop(8000.0, 1000.0, 2000.0, 250.0, 40.0, Window::Rectangular),
    ];
    for spec in specs {
        let mut spec = spec.unwrap();
        for descriptor in catalog() {
            spec.set_window(descriptor.window).set_response_points(256);
            let filter = design::<f64>(&spec).unwrap();
            assert_eq!(filter.order % 2, 1);
            assert_eq!(filter.coefficients.len(), filter.order);
            assert_eq!(filter.window.name, descriptor.name);
            assert_symmetric(&filter.ideal_response);
            assert_symmetric(&filter.window_samples);
            assert_symmetric(&filter.coefficients);
        }
    }
}

#[test]
fn frequency_response_matches_taps() {
    let mut spec =
        FilterSpec::bandpass(16000.0, 2000.0, 5000.0, 600.0, 70.0, Window::KaiserBeta676).unwrap();
    spec.set_response_points(1024);
    let filter = design::<f64>(&spec).unwrap();
    let response = &filter.frequency_response;
    assert_eq!(response.len(), 1024);
    assert_eq!(response.frequencies[0], 0.0);
    assert_eq!(response.frequencies[1023], 1023.0 * 8000.0 / 1024.0);
    let mut response_calculator = FirResponseCalculator::new(1024);
    assert_eq!(
        response.frequencies,
        response_calculator.frequencies(filter.sample_rate)
    );
    let magnitude = response_calculator.compute(&filter.coefficients);
    for (j, (&f, z)) in response
        .frequencies
        .iter()
        .zip(response.response.iter())
        .enumerate()
    {
        assert!((z.norm() - magnitude[j]).abs() < 1e-12);
        if j % 64 == 0 {
            let direct = evaluate(&filter.coefficients, f / filter.sample_rate);
            assert!((*z - direct).norm() < 1e-10);
        }
    }
}

#[test]
fn single_precision() {
    let spec = FilterSpec::new(
        FilterType::BandStop,
        44100.0,
        BandEdges::Pair(5000.0, 8000.0),
        1000.0,
        60.0,
        Window::KaiserBeta676,
    )
    .unwrap();
    let design_f64 = design::<f64>(&spec).unwrap();
    let design_f32 = design::<f32>(&spec).unwrap();
    assert_eq!(design_f32.order, design_f64.order);
    assert_eq!(design_f32.cutoff_frequencies, design_f64.cutoff_frequencies);
    for (&a, &b) in design_f32
        .coefficients
        .iter()
        .zip(design_f64.coefficients.iter())
    {
        assert!((f64::from(a) - b).abs() < 1e-5);
    }
}

#[test]
#[cfg(feature = "num-bigfloat")]
fn lowpass_bigfloat() {
    let spec = FilterSpec::lowpass(8000.0, 1500.0, 500.0, 50.0, Window::KaiserBeta896).unwrap();
    let design_bigfloat = design::<BigFloat>(&spec).unwrap();
    let design_f64 = design::<f64>(&spec).unwrap();
    assert_eq!(design_bigfloat.order, design_f64.order);
    for (a, &b) in design_bigfloat
        .coefficients
        .iter()
        .zip(design_f64.coefficients.iter())
    {
        assert!((Convf64::to_f64(a) - b).abs() < 1e-12);
    }
    let mut response_calculator = FirResponseCalculator::new(4096);
    let magnitude = response_calculator.compute(&design_bigfloat.coefficients);
    for (h, z) in magnitude
        .iter()
        .zip(design_bigfloat.frequency_response.response.iter())
    {
        assert!((h - z.norm()).abs() < 1e-12);
    }
}
