use num_traits::{Float, FloatConst};

/// Ideal frequency selective filter.
///
/// The cutoff frequencies are normalized to the Nyquist frequency, so that
/// they lie in the interval (0.0, 1.0). For `BandPass` and `BandStop`, `fc1`
/// is the lower cutoff and `fc2` the upper cutoff.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum IdealFilter<T> {
    /// Ideal lowpass filter.
    LowPass {
        /// Cutoff frequency.
        fc: T,
    },
    /// Ideal highpass filter.
    HighPass {
        /// Cutoff frequency.
        fc: T,
    },
    /// Ideal bandpass filter.
    BandPass {
        /// Lower cutoff frequency.
        fc1: T,
        /// Upper cutoff frequency.
        fc2: T,
    },
    /// Ideal bandstop filter.
    BandStop {
        /// Lower cutoff frequency.
        fc1: T,
        /// Upper cutoff frequency.
        fc2: T,
    },
}

impl<T: Float + FloatConst> IdealFilter<T> {
    /// Samples the ideal impulse response.
    ///
    /// The infinitely long impulse response is centered on sample
    /// `(num_taps - 1) / 2` and truncated to `num_taps` samples. The response
    /// is even symmetric about its center.
    pub fn impulse_response(&self, num_taps: usize) -> Vec<T> {
        let center = T::from(num_taps).unwrap_or_else(T::zero) - T::one();
        let center = center / (T::one() + T::one());
        (0..num_taps)
            .map(|n| {
                let k = T::from(n).unwrap_or_else(T::zero) - center;
                self.sample(k)
            })
            .collect()
    }

    // Evaluates the impulse response at offset k from the center.
    //
    // Offsets closer than 1e-10 to zero use the limit of the sinc quotients
    // instead of evaluating 0 / 0.
    fn sample(&self, k: T) -> T {
        let one = T::one();
        let two = one + one;
        let pi = T::PI();
        let at_center = k.abs() < T::from(1e-10).unwrap_or_else(T::epsilon);
        match *self {
            IdealFilter::LowPass { fc } => {
                if at_center {
                    two * fc
                } else {
                    let omega_c = fc * pi;
                    two * fc * (omega_c * k).sin() / (omega_c * k)
                }
            }
            IdealFilter::HighPass { fc } => {
                if at_center {
                    one - fc
                } else {
                    // all-pass minus lowpass
                    let allpass = (pi * k).sin() / (pi * k);
                    let x = fc * k;
                    let lowpass = fc * (pi * x).sin() / (pi * x);
                    allpass - lowpass
                }
            }
            IdealFilter::BandPass { fc1, fc2 } => {
                if at_center {
                    fc2 - fc1
                } else {
                    let omega_c1 = fc1 * pi;
                    let omega_c2 = fc2 * pi;
                    fc2 * (omega_c2 * k).sin() / (omega_c2 * k)
                        - fc1 * (omega_c1 * k).sin() / (omega_c1 * k)
                }
            }
            IdealFilter::BandStop { fc1, fc2 } => {
                if at_center {
                    one - (fc2 - fc1)
                } else {
                    // all-pass minus bandpass
                    let allpass = (pi * k).sin() / (pi * k);
                    let bandpass = ((pi * fc2 * k).sin() - (pi * fc1 * k).sin()) / (pi * k);
                    allpass - bandpass
                }
            }
        }
    }
}
