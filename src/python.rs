#![cfg(not(doctest))]

// Do not run doctests, since rustdoc would try to build the numpy-style
// docstrings below as Rust code.

use crate::{BandEdges, DesignResult, FilterSpec, FilterType, Window, error::Error};
use num_complex::Complex;
use pyo3::{exceptions::PyValueError, prelude::*};

/// fir-window designs linear phase FIR filters using the window method.
///
/// The filter length is estimated from the transition width and the window,
/// the ideal impulse response is truncated to that length and multiplied by
/// the window, and the frequency response of the result is sampled.
#[pymodule]
fn fir_window(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(design, m)?)?;
    m.add_function(wrap_pyfunction!(available_windows, m)?)?;
    m.add_class::<FilterDesign>()?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("__license__", env!("CARGO_PKG_LICENSE"))?;
    Ok(())
}

/// Design a FIR filter using the window method.
///
/// Parameters
/// ----------
/// filter_type : {'lowpass', 'highpass', 'bandpass', 'bandstop'}
///     Type of filter.
/// fs : float
///     Sample rate in Hz.
/// edges : array_like
///     Passband edge frequencies in Hz. One element for lowpass and highpass
///     filters, two elements in increasing order for bandpass and bandstop
///     filters.
/// transition_width : float
///     Width of the transition bands in Hz.
/// stopband_atten : float
///     Desired stopband attenuation in dB. This is used in the length
///     estimate of Kaiser windows.
/// window : str
///     Name of the window, as returned by `available_windows`.
/// num_points : int, optional
///     Number of frequency response samples in [0, fs/2). Default is 8192.
///
/// Returns
/// -------
/// FilterDesign
///     The filter taps together with the intermediate results of the design.
#[pyfunction]
#[pyo3(signature = (filter_type, fs, edges, transition_width, stopband_atten, window, *, num_points=8192))]
fn design(
    filter_type: &str,
    fs: f64,
    edges: Vec<f64>,
    transition_width: f64,
    stopband_atten: f64,
    window: &str,
    num_points: usize,
) -> PyResult<FilterDesign> {
    let filter_type = match filter_type {
        "lowpass" => FilterType::LowPass,
        "highpass" => FilterType::HighPass,
        "bandpass" => FilterType::BandPass,
        "bandstop" => FilterType::BandStop,
        _ => {
            return Err(PyValueError::new_err(
                "filter_type must be \"lowpass\", \"highpass\", \"bandpass\" or \"bandstop\"",
            ));
        }
    };
    let edges = match edges.as_slice() {
        &[fp] => BandEdges::Single(fp),
        &[fp1, fp2] => BandEdges::Pair(fp1, fp2),
        _ => {
            return Err(PyValueError::new_err("edges must contain one or two frequencies"));
        }
    };
    let window: Window = window.parse()?;
    let mut spec = FilterSpec::new(
        filter_type,
        fs,
        edges,
        transition_width,
        stopband_atten,
        window,
    )?;
    spec.set_response_points(num_points);
    Ok(FilterDesign(crate::design(&spec)?))
}

/// List the windows that meet a stopband attenuation requirement.
///
/// Parameters
/// ----------
/// required_atten : float
///     Minimum nominal stopband attenuation in dB.
///
/// Returns
/// -------
/// List[str]
///     Names of the windows, in catalog order.
#[pyfunction]
fn available_windows(required_atten: f64) -> Vec<&'static str> {
    crate::available_windows(required_atten)
        .iter()
        .map(|w| w.name())
        .collect()
}

#[derive(Debug, Clone)]
#[pyclass]
struct FilterDesign(DesignResult<f64>);

#[pymethods]
impl FilterDesign {
    #[getter]
    fn get_coefficients(&self) -> Vec<f64> {
        self.0.coefficients.clone()
    }

    #[getter]
    fn get_ideal_response(&self) -> Vec<f64> {
        self.0.ideal_response.clone()
    }

    #[getter]
    fn get_window(&self) -> Vec<f64> {
        self.0.window_samples.clone()
    }

    #[getter]
    fn get_window_name(&self) -> &'static str {
        self.0.window.name
    }

    #[getter]
    fn get_order(&self) -> usize {
        self.0.order
    }

    #[getter]
    fn get_cutoff_frequencies(&self) -> Vec<f64> {
        self.0.cutoff_frequencies.to_vec()
    }

    #[getter]
    fn get_delta_f_norm(&self) -> f64 {
        self.0.normalized_transition_width
    }

    #[getter]
    fn get_group_delay(&self) -> f64 {
        self.0.group_delay()
    }

    #[getter]
    fn get_frequencies(&self) -> Vec<f64> {
        self.0.frequency_response.frequencies.clone()
    }

    #[getter]
    fn get_frequency_response(&self) -> Vec<Complex<f64>> {
        self.0.frequency_response.response.clone()
    }

    fn magnitude_db(&self) -> Vec<f64> {
        self.0.frequency_response.magnitude_db()
    }

    fn __repr__(&self) -> String {
        format!(
            "FilterDesign(order={}, cutoff_frequencies={:?}, window={:?}, coefficients={:?})",
            self.0.order,
            self.0.cutoff_frequencies.to_vec(),
            self.0.window.name,
            self.0.coefficients,
        )
    }
}

impl From<Error> for PyErr {
    fn from(error: Error) -> PyErr {
        PyValueError::new_err(error.to_string())
    }
}
