//! # FIR filter design by the window method
//!
//! The [`fir_window`](crate) crate designs linear phase FIR filters using the
//! classical window method. A filter is specified in the frequency domain by
//! its type (lowpass, highpass, bandpass or bandstop), the sample rate, the
//! passband edge frequencies, the width of the transition bands and the
//! desired stopband attenuation. The design proceeds as follows:
//!
//! 1. The cutoff frequencies are placed at the center of the transition bands
//!    ([`resolve_cutoffs`]).
//! 2. The filter length is estimated from the transition width and the chosen
//!    window ([`order_estimates::estimate_order`]). The length is always odd,
//!    so that the filter has a center tap and Type I linear phase.
//! 3. The ideal impulse response of the filter is sampled and truncated to
//!    that length ([`IdealFilter`]).
//! 4. The ideal response is multiplied by a window taken from the window
//!    [`catalog`] ([`windows::generate`]).
//! 5. The frequency response of the resulting taps is sampled
//!    ([`response::frequency_response`]).
//!
//! The catalog contains the rectangular, Bartlett, Hann, Hamming and Blackman
//! windows, and three Kaiser windows with fixed shape parameters. The function
//! [`available_windows`] lists the windows whose nominal stopband attenuation
//! meets a requirement.
//!
//! ## Examples
//!
//! The main function of this crate is [`design`], which takes a
//! [`FilterSpec`] and returns a [`DesignResult`] containing the filter taps and
//! other information about the design.
//!
//! ```
//! # fn main() -> Result<(), fir_window::error::Error> {
//! use fir_window::{BandEdges, FilterSpec, Window, design};
//! // 8 kHz sample rate, 1500 Hz passband edge, 500 Hz transition band
//! let spec = FilterSpec::lowpass(8000.0, 1500.0, 500.0, 50.0, Window::Hamming)?;
//! let filter = design::<f64>(&spec)?;
//! assert_eq!(filter.order, 53);
//! assert_eq!(filter.cutoff_frequencies, BandEdges::Single(1750.0));
//! assert_eq!(filter.coefficients.len(), 53);
//! # Ok(())
//! # }
//! ```
//!
//! The computations are generic over the scalar type. Besides `f32` and
//! `f64`, the `num-bigfloat` feature allows using
//! [`num-bigfloat`](https://docs.rs/num-bigfloat/latest/num_bigfloat/) for the
//! impulse response and the window. The frequency response is always computed
//! with `f64`.
//!
//! ## Python bindings
//!
//! The `python` feature builds Python bindings for [`design`] and
//! [`available_windows`] using `pyo3`.

#![warn(missing_docs)]

use itertools::Itertools;
use num_traits::{Float, FloatConst};

pub mod catalog;
pub use catalog::{Window, WindowDescriptor, WindowShape, available_windows};
mod convf64;
pub use convf64::Convf64;
mod cutoffs;
pub use cutoffs::resolve_cutoffs;
pub mod error;
use error::{InvalidSpecification, Result};
mod ideal;
pub use ideal::IdealFilter;
pub mod order_estimates;
use order_estimates::estimate_order;
#[cfg(feature = "python")]
mod python;
pub mod response;
use response::frequency_response;
mod types;
pub use types::{BandEdges, DEFAULT_RESPONSE_POINTS, DesignResult, FilterSpec, FilterType};
pub mod windows;

/// Designs a FIR filter using the window method.
///
/// This function resolves the cutoff frequencies of the filter specified by
/// `spec`, estimates the filter length, samples the ideal impulse response,
/// multiplies it by the window of the specification and computes the
/// frequency response of the result.
///
/// The desired stopband attenuation of the specification is used in the
/// length estimate of Kaiser windows (see [`estimate_order`]). It does not
/// change the shape parameter β of the window.
///
/// The type parameter `T` represents the scalar used to compute the ideal
/// response, the window and the taps.
///
/// The function fails with
/// [`Error::InvalidSpecification`](error::Error::InvalidSpecification) if the
/// band edges and transition width are not realizable. In that case no
/// coefficients are computed.
pub fn design<T>(spec: &FilterSpec) -> Result<DesignResult<T>>
where
    T: Float + FloatConst + Convf64,
{
    let sample_rate = spec.sample_rate();
    let cutoff_frequencies = resolve_cutoffs(
        spec.filter_type(),
        spec.edges(),
        spec.transition_width(),
        sample_rate,
    )?;
    tracing::debug!(
        filter_type = ?spec.filter_type(),
        cutoffs = ?cutoff_frequencies,
        "cutoff frequencies resolved"
    );

    let window = spec.window();
    let estimate = estimate_order(
        spec.transition_width(),
        sample_rate,
        window,
        Some(spec.stopband_attenuation_db()),
    );
    let num_taps = estimate.order;
    tracing::debug!(
        %window,
        raw_order = estimate.raw,
        order = num_taps,
        "filter length estimated"
    );

    // Normalize the cutoff frequencies to the Nyquist frequency.
    let nyquist = spec.nyquist();
    let ideal_filter = ideal_filter::<T>(
        spec.filter_type(),
        cutoff_frequencies.map(|f| f / nyquist),
    )?;
    let ideal_response = ideal_filter.impulse_response(num_taps);
    let window_samples: Vec<T> = windows::generate(window, num_taps);
    let coefficients: Vec<T> = ideal_response
        .iter()
        .zip_eq(window_samples.iter())
        .map(|(&h, &w)| h * w)
        .collect();

    let taps: Vec<f64> = coefficients.iter().map(Convf64::to_f64).collect();
    let frequency_response = frequency_response(&taps, sample_rate, spec.response_points());
    tracing::debug!(num_taps, "filter designed");

    Ok(DesignResult {
        order: num_taps,
        raw_order: estimate.raw,
        cutoff_frequencies,
        ideal_response,
        window_samples,
        coefficients,
        frequency_response,
        normalized_transition_width: spec.transition_width() / sample_rate,
        sample_rate,
        window: window.descriptor(),
    })
}

// Builds the ideal filter from cutoffs normalized to the Nyquist frequency.
fn ideal_filter<T>(filter_type: FilterType, cutoffs: BandEdges) -> Result<IdealFilter<T>>
where
    T: Float + Convf64,
{
    Ok(match (filter_type, cutoffs) {
        (FilterType::LowPass, BandEdges::Single(fc)) => IdealFilter::LowPass {
            fc: T::from_f64(fc),
        },
        (FilterType::HighPass, BandEdges::Single(fc)) => IdealFilter::HighPass {
            fc: T::from_f64(fc),
        },
        (FilterType::BandPass, BandEdges::Pair(fc1, fc2)) => IdealFilter::BandPass {
            fc1: T::from_f64(fc1),
            fc2: T::from_f64(fc2),
        },
        (FilterType::BandStop, BandEdges::Pair(fc1, fc2)) => IdealFilter::BandStop {
            fc1: T::from_f64(fc1),
            fc2: T::from_f64(fc2),
        },
        _ => Err(InvalidSpecification::EdgeCountMismatch)?,
    })
}
