//! FIR filter order estimates.
//!
//! This module contains the functions that estimate the filter length
//! required by a window to meet a transition width and a stopband attenuation.

use crate::catalog::{Window, WindowShape};
use std::f64::consts::PI;

/// Shortest filter length produced by [`estimate_order`].
pub const MIN_ORDER: usize = 11;

/// Longest filter length produced by [`estimate_order`].
pub const MAX_ORDER: usize = 10001;

/// Filter length estimate.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct OrderEstimate {
    /// Odd length given by the order formula, before clamping.
    ///
    /// This can be outside `[MIN_ORDER, MAX_ORDER]`, and even negative for a
    /// Kaiser window with a target attenuation below 8 dB.
    pub raw: i64,
    /// Filter length, clamped to `[MIN_ORDER, MAX_ORDER]`.
    pub order: usize,
}

impl OrderEstimate {
    /// Returns true if the raw length was clamped.
    pub fn is_clamped(&self) -> bool {
        self.raw != self.order as i64
    }
}

/// Estimates the length of a window-method FIR filter.
///
/// The transition width `transition_width` and the sample rate `sample_rate`
/// are given in Hz. For windows in the Kaiser family the length follows
/// Kaiser's formula
///
/// `N = (A - 8) / (2.285 * 2π * Δf / Fs)`,
///
/// where `A` is `attenuation_db` if it is given, and the nominal stopband
/// attenuation of the window otherwise. The shape parameter β of the window is
/// not affected by `attenuation_db`. For the other windows `attenuation_db` is
/// ignored and the length is the transition width factor of the window divided
/// by `Δf / Fs`.
///
/// The length is rounded up, incremented if even, and finally clamped to
/// `[MIN_ORDER, MAX_ORDER]`. Clamping does not fail; it can be detected with
/// [`OrderEstimate::is_clamped`].
pub fn estimate_order(
    transition_width: f64,
    sample_rate: f64,
    window: Window,
    attenuation_db: Option<f64>,
) -> OrderEstimate {
    let delta = transition_width / sample_rate;
    let descriptor = window.descriptor();
    let length = match descriptor.shape {
        WindowShape::Kaiser { .. } => {
            let a = attenuation_db.unwrap_or(descriptor.stopband_attenuation_db);
            (a - 8.0) / (2.285 * 2.0 * PI * delta)
        }
        _ => descriptor.transition_width_factor / delta,
    };
    // float to int casts saturate, and NaN becomes 0
    let mut raw = length.ceil() as i64;
    if raw % 2 == 0 {
        raw = raw.saturating_add(1);
    }
    let order = raw.clamp(MIN_ORDER as i64, MAX_ORDER as i64) as usize;
    if order as i64 != raw {
        tracing::debug!(raw, order, "filter length clamped");
    }
    OrderEstimate { raw, order }
}
