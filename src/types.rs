use crate::{
    catalog::{Window, WindowDescriptor},
    error::{InvalidSpecification, Result},
    response::FrequencyResponse,
};

/// Default number of frequency response samples.
pub const DEFAULT_RESPONSE_POINTS: usize = 8192;

/// Shape of the frequency response of the filter.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum FilterType {
    /// Lowpass filter.
    LowPass,
    /// Highpass filter.
    HighPass,
    /// Bandpass filter.
    BandPass,
    /// Bandstop (notch) filter.
    BandStop,
}

impl FilterType {
    /// Returns the number of band edges that this filter type takes.
    pub fn num_edges(&self) -> usize {
        match self {
            FilterType::LowPass | FilterType::HighPass => 1,
            FilterType::BandPass | FilterType::BandStop => 2,
        }
    }
}

/// One or two frequencies in Hz.
///
/// Used both for the passband edges of a [`FilterSpec`] and for the cutoff
/// frequencies of a [`DesignResult`]. Lowpass and highpass filters use
/// `Single`; bandpass and bandstop filters use `Pair`, with the lower
/// frequency first.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum BandEdges {
    /// A single frequency.
    Single(f64),
    /// A lower and an upper frequency.
    Pair(f64, f64),
}

impl BandEdges {
    /// Returns the number of frequencies.
    pub fn len(&self) -> usize {
        match self {
            BandEdges::Single(_) => 1,
            BandEdges::Pair(_, _) => 2,
        }
    }

    /// Always returns `false`; there is at least one frequency.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the frequencies as a vector, in increasing order for a valid
    /// pair.
    pub fn to_vec(&self) -> Vec<f64> {
        match *self {
            BandEdges::Single(f) => vec![f],
            BandEdges::Pair(f1, f2) => vec![f1, f2],
        }
    }

    /// Applies a function to each frequency.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> BandEdges {
        match *self {
            BandEdges::Single(a) => BandEdges::Single(f(a)),
            BandEdges::Pair(a, b) => BandEdges::Pair(f(a), f(b)),
        }
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.to_vec().iter().all(|f| f.is_finite())
    }
}

/// Filter specification.
///
/// A `FilterSpec` gathers the frequency-domain requirements of a filter
/// designed by [`design`](crate::design). The constructor checks the
/// requirements that do not depend on the filter shape (positive sample rate,
/// transition width and attenuation, and the number of band edges). The
/// feasibility of the band edges with respect to the Nyquist frequency is
/// checked when the cutoff frequencies are resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    filter_type: FilterType,
    sample_rate: f64,
    edges: BandEdges,
    transition_width: f64,
    stopband_attenuation_db: f64,
    window: Window,
    response_points: usize,
}

impl FilterSpec {
    /// Creates a new filter specification.
    ///
    /// `sample_rate`, the frequencies in `edges` and `transition_width` are
    /// given in Hz. `stopband_attenuation_db` is the desired stopband
    /// attenuation. For Kaiser windows it replaces the nominal attenuation of
    /// the window in the order estimate (see
    /// [`estimate_order`](crate::order_estimates::estimate_order)).
    ///
    /// The number of frequency response samples is set to
    /// [`DEFAULT_RESPONSE_POINTS`] and can be changed with
    /// [`FilterSpec::set_response_points`].
    pub fn new(
        filter_type: FilterType,
        sample_rate: f64,
        edges: BandEdges,
        transition_width: f64,
        stopband_attenuation_db: f64,
        window: Window,
    ) -> Result<FilterSpec> {
        if !sample_rate.is_finite()
            || !transition_width.is_finite()
            || !stopband_attenuation_db.is_finite()
            || !edges.is_finite()
        {
            Err(InvalidSpecification::NotFinite)?
        }
        if sample_rate <= 0.0 {
            Err(InvalidSpecification::NonPositiveSampleRate)?
        }
        if transition_width <= 0.0 {
            Err(InvalidSpecification::NonPositiveTransitionWidth)?
        }
        if stopband_attenuation_db <= 0.0 {
            Err(InvalidSpecification::NonPositiveAttenuation)?
        }
        if edges.len() != filter_type.num_edges() {
            Err(InvalidSpecification::EdgeCountMismatch)?
        }
        Ok(FilterSpec {
            filter_type,
            sample_rate,
            edges,
            transition_width,
            stopband_attenuation_db,
            window,
            response_points: DEFAULT_RESPONSE_POINTS,
        })
    }

    /// Creates a lowpass filter specification with passband edge `fp`.
    pub fn lowpass(
        sample_rate: f64,
        fp: f64,
        transition_width: f64,
        stopband_attenuation_db: f64,
        window: Window,
    ) -> Result<FilterSpec> {
        FilterSpec::new(
            FilterType::LowPass,
            sample_rate,
            BandEdges::Single(fp),
            transition_width,
            stopband_attenuation_db,
            window,
        )
    }

    /// Creates a highpass filter specification with passband edge `fp`.
    pub fn highpass(
        sample_rate: f64,
        fp: f64,
        transition_width: f64,
        stopband_attenuation_db: f64,
        window: Window,
    ) -> Result<FilterSpec> {
        FilterSpec::new(
            FilterType::HighPass,
            sample_rate,
            BandEdges::Single(fp),
            transition_width,
            stopband_attenuation_db,
            window,
        )
    }

    /// Creates a bandpass filter specification with passband `[fp1, fp2]`.
    pub fn bandpass(
        sample_rate: f64,
        fp1: f64,
        fp2: f64,
        transition_width: f64,
        stopband_attenuation_db: f64,
        window: Window,
    ) -> Result<FilterSpec> {
        FilterSpec::new(
            FilterType::BandPass,
            sample_rate,
            BandEdges::Pair(fp1, fp2),
            transition_width,
            stopband_attenuation_db,
            window,
        )
    }

    /// Creates a bandstop filter specification with stopband `[fp1, fp2]`.
    pub fn bandstop(
        sample_rate: f64,
        fp1: f64,
        fp2: f64,
        transition_width: f64,
        stopband_attenuation_db: f64,
        window: Window,
    ) -> Result<FilterSpec> {
        FilterSpec::new(
            FilterType::BandStop,
            sample_rate,
            BandEdges::Pair(fp1, fp2),
            transition_width,
            stopband_attenuation_db,
            window,
        )
    }

    /// Sets the number of frequency response samples.
    ///
    /// The samples are equally spaced in `[0, Fs/2)`. A value of zero is
    /// replaced by one.
    pub fn set_response_points(&mut self, response_points: usize) -> &mut Self {
        self.response_points = response_points.max(1);
        self
    }

    /// Sets the window.
    pub fn set_window(&mut self, window: Window) -> &mut Self {
        self.window = window;
        self
    }

    /// Returns the filter type.
    pub fn filter_type(&self) -> FilterType {
        self.filter_type
    }

    /// Returns the sample rate in Hz.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Returns the passband edges in Hz.
    pub fn edges(&self) -> BandEdges {
        self.edges
    }

    /// Returns the transition width in Hz.
    pub fn transition_width(&self) -> f64 {
        self.transition_width
    }

    /// Returns the desired stopband attenuation in dB.
    pub fn stopband_attenuation_db(&self) -> f64 {
        self.stopband_attenuation_db
    }

    /// Returns the window.
    pub fn window(&self) -> Window {
        self.window
    }

    /// Returns the number of frequency response samples.
    pub fn response_points(&self) -> usize {
        self.response_points
    }

    /// Returns the Nyquist frequency in Hz.
    pub fn nyquist(&self) -> f64 {
        0.5 * self.sample_rate
    }
}

/// A FIR filter design produced by the [`design`](crate::design) function.
///
/// The type parameter `T` corresponds to the scalar type used to compute the
/// impulse responses and the window. The frequency response is always
/// computed in `f64`.
#[derive(Debug, Clone)]
pub struct DesignResult<T> {
    /// Filter length.
    ///
    /// This is always odd and between 11 and 10001.
    pub order: usize,
    /// Filter length given by the order formula, before clamping.
    pub raw_order: i64,
    /// Cutoff frequencies in Hz.
    pub cutoff_frequencies: BandEdges,
    /// Ideal impulse response truncated to `order` samples.
    pub ideal_response: Vec<T>,
    /// Window samples.
    pub window_samples: Vec<T>,
    /// Filter taps.
    ///
    /// Each tap is the product of the ideal response and the window at the
    /// same index.
    pub coefficients: Vec<T>,
    /// Frequency response of the filter taps.
    pub frequency_response: FrequencyResponse,
    /// Transition width divided by the sample rate.
    pub normalized_transition_width: f64,
    /// Sample rate in Hz.
    pub sample_rate: f64,
    /// Catalog entry of the window that was used.
    pub window: &'static WindowDescriptor,
}

impl<T> DesignResult<T> {
    /// Returns the group delay of the filter in samples.
    pub fn group_delay(&self) -> f64 {
        (self.order - 1) as f64 / 2.0
    }

    /// Returns true if the filter length was clamped to the allowed range.
    pub fn is_clamped(&self) -> bool {
        self.raw_order != self.order as i64
    }

    /// Returns the cutoff frequencies as fractions of the Nyquist frequency.
    pub fn normalized_cutoffs(&self) -> BandEdges {
        let nyquist = 0.5 * self.sample_rate;
        self.cutoff_frequencies.map(|f| f / nyquist)
    }
}
