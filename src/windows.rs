//! Window functions.
//!
//! All the windows are the symmetric versions, sampled over `N` points with
//! the first and last samples at the edges of the window, so that
//! `w[n] == w[N - 1 - n]`. The periodic versions used for spectral analysis
//! are not provided, since they break the symmetry of the filter taps.

use crate::{
    catalog::{Window, WindowShape},
    error::{Error, Result},
};
use num_traits::{Float, FloatConst};

/// Generates the samples of a window.
///
/// Returns `num_taps` samples. A window of length 1 is `[1]`.
pub fn generate<T: Float + FloatConst>(window: Window, num_taps: usize) -> Vec<T> {
    if num_taps <= 1 {
        return vec![T::one(); num_taps];
    }
    match window.descriptor().shape {
        WindowShape::Rectangular => vec![T::one(); num_taps],
        WindowShape::Bartlett => bartlett(num_taps),
        WindowShape::Hann => general_cosine(num_taps, &[0.5, 0.5]),
        WindowShape::Hamming => general_cosine(num_taps, &[0.54, 0.46]),
        WindowShape::Blackman => general_cosine(num_taps, &[0.42, 0.5, 0.08]),
        WindowShape::Kaiser { beta } => kaiser(num_taps, constant(beta)),
    }
}

/// Generates the samples of a window given by name.
///
/// Fails with [`Error::UnsupportedWindow`] if the name is not one of the
/// catalog windows.
pub fn generate_by_name<T: Float + FloatConst>(name: &str, num_taps: usize) -> Result<Vec<T>> {
    let window = name
        .parse::<Window>()
        .map_err(|_| Error::UnsupportedWindow(name.to_string()))?;
    Ok(generate(window, num_taps))
}

fn constant<T: Float>(x: f64) -> T {
    T::from(x).unwrap_or_else(T::nan)
}

// w[n] = 2n/(N-1) in the first half, 2 - 2n/(N-1) in the second half
fn bartlett<T: Float>(num_taps: usize) -> Vec<T> {
    let two = constant::<T>(2.0);
    let m = constant::<T>((num_taps - 1) as f64);
    let half = m / two;
    (0..num_taps)
        .map(|n| {
            let n = constant::<T>(n as f64);
            if n <= half {
                two * n / m
            } else {
                two - two * n / m
            }
        })
        .collect()
}

// w[n] = \sum_k a_k cos(k x_n), with x_n going linearly from -pi to pi
fn general_cosine<T: Float + FloatConst>(num_taps: usize, a: &[f64]) -> Vec<T> {
    let pi = T::PI();
    let step = (pi + pi) / constant((num_taps - 1) as f64);
    (0..num_taps)
        .map(|n| {
            let x = if n == num_taps - 1 {
                pi
            } else {
                -pi + step * constant(n as f64)
            };
            a.iter().enumerate().fold(T::zero(), |acc, (k, &ak)| {
                acc + constant::<T>(ak) * (constant::<T>(k as f64) * x).cos()
            })
        })
        .collect()
}

// w[n] = I0(beta * sqrt(1 - ((n - alpha) / alpha)^2)) / I0(beta)
fn kaiser<T: Float>(num_taps: usize, beta: T) -> Vec<T> {
    let alpha = constant::<T>((num_taps - 1) as f64) / constant(2.0);
    let i0_beta = bessel_i0(beta);
    (0..num_taps)
        .map(|n| {
            let r = (constant::<T>(n as f64) - alpha) / alpha;
            let arg = (T::one() - r * r).max(T::zero()).sqrt();
            bessel_i0(beta * arg) / i0_beta
        })
        .collect()
}

/// Modified Bessel function of the first kind of order zero.
///
/// This is evaluated with the power series
/// `I0(x) = \sum_k ((x/2)^k / k!)^2`, which converges quickly for the
/// arguments used by the Kaiser windows.
pub fn bessel_i0<T: Float>(x: T) -> T {
    let q = (x / constant(2.0)).powi(2);
    let mut sum = T::one();
    let mut term = T::one();
    for k in 1..500 {
        let k = constant::<T>(k as f64);
        term = term * q / (k * k);
        sum = sum + term;
        if term <= sum * T::epsilon() {
            break;
        }
    }
    sum
}
