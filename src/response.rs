//! Frequency response of FIR filters.

use num_complex::Complex;
use num_traits::Zero;
use rustfft::{Fft, FftPlanner};
use std::{f64::consts::PI, sync::Arc};

/// Sampled frequency response.
///
/// The response is sampled at `num_points` equally spaced frequencies
/// `f_k = k * Fs / (2 * num_points)`, for `k = 0, ..., num_points - 1`. The
/// grid starts at DC and stops one step short of the Nyquist frequency.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyResponse {
    /// Frequencies in Hz.
    pub frequencies: Vec<f64>,
    /// Complex response `H(f) = \sum_n h[n] exp(-j 2π f n / Fs)`.
    pub response: Vec<Complex<f64>>,
}

impl FrequencyResponse {
    /// Returns the magnitude of the response in dB.
    pub fn magnitude_db(&self) -> Vec<f64> {
        self.response
            .iter()
            .map(|z| 20.0 * z.norm().log10())
            .collect()
    }

    /// Returns the magnitude of the response.
    pub fn magnitude(&self) -> Vec<f64> {
        self.response.iter().map(|z| z.norm()).collect()
    }

    /// Returns the number of frequency samples.
    pub fn len(&self) -> usize {
        self.response.len()
    }

    /// Returns true if the response has no samples.
    pub fn is_empty(&self) -> bool {
        self.response.is_empty()
    }
}

/// Computes the frequency response of a filter.
///
/// The taps are given as `f64`, and `sample_rate` is the sample rate in Hz.
/// When the filter is not longer than `2 * num_points`, the response is
/// computed with a zero-padded FFT of size `2 * num_points`. Otherwise it is
/// computed by direct evaluation of the sum at each frequency.
pub fn frequency_response(taps: &[f64], sample_rate: f64, num_points: usize) -> FrequencyResponse {
    let frequencies = frequency_grid(sample_rate, num_points);
    let response = if taps.len() <= 2 * num_points {
        tracing::trace!(num_taps = taps.len(), num_points, "frequency response by FFT");
        ResponseCalculator::new(num_points).compute(taps)
    } else {
        tracing::trace!(
            num_taps = taps.len(),
            num_points,
            "frequency response by direct evaluation"
        );
        frequencies
            .iter()
            .map(|&f| evaluate(taps, f / sample_rate))
            .collect()
    };
    FrequencyResponse {
        frequencies,
        response,
    }
}

/// Evaluates the frequency response of a filter at a single frequency.
///
/// The frequency `freq` is normalized to a sample rate of 1.
pub fn evaluate(taps: &[f64], freq: f64) -> Complex<f64> {
    let omega = 2.0 * PI * freq;
    taps.iter()
        .enumerate()
        .fold(Complex::zero(), |acc, (n, &h)| {
            acc + Complex::from_polar(h, -omega * n as f64)
        })
}

fn frequency_grid(sample_rate: f64, num_points: usize) -> Vec<f64> {
    let scale = 0.5 * sample_rate / num_points as f64;
    (0..num_points).map(|k| k as f64 * scale).collect()
}

struct ResponseCalculator {
    fft: Arc<dyn Fft<f64>>,
    buffer: Box<[Complex<f64>]>,
}

impl ResponseCalculator {
    fn new(num_points: usize) -> ResponseCalculator {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(2 * num_points);
        let buffer = vec![Complex::zero(); 2 * num_points].into_boxed_slice();
        ResponseCalculator { fft, buffer }
    }

    fn compute(mut self, taps: &[f64]) -> Vec<Complex<f64>> {
        debug_assert!(taps.len() <= self.buffer.len());
        for (b, &t) in self.buffer.iter_mut().zip(taps.iter()) {
            *b = t.into();
        }
        self.fft.process(&mut self.buffer);
        let half = self.buffer.len() / 2;
        self.buffer[..half].to_vec()
    }
}
