//! Error types used by `fir_window`.

use thiserror::Error;

/// `fir_window` `Result` type.
pub type Result<T> = core::result::Result<T, Error>;

/// `fir_window` error.
///
/// This enum represents all the errors that can be produced by `fir_window`.
/// Every error is detected before any filter coefficients are computed, so a
/// failed design never yields a partial result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The filter specification cannot be realized.
    #[error("invalid specification: {0}")]
    InvalidSpecification(InvalidSpecification),
    /// A window name that is not present in the window catalog was queried.
    #[error("unknown window: {0}")]
    UnknownWindow(String),
    /// A window generator was requested for a name that it does not support.
    #[error("unsupported window: {0}")]
    UnsupportedWindow(String),
}

/// Invalid specification error.
///
/// This enum classifies the precondition violations that make a filter
/// specification unrealizable.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidSpecification {
    /// The sample rate must be positive.
    #[error("the sample rate must be positive")]
    NonPositiveSampleRate,
    /// The transition width must be positive.
    #[error("the transition width must be positive")]
    NonPositiveTransitionWidth,
    /// The stopband attenuation must be positive.
    #[error("the stopband attenuation must be positive")]
    NonPositiveAttenuation,
    /// A frequency or attenuation is NaN or infinite.
    #[error("frequencies and attenuation must be finite")]
    NotFinite,
    /// The number of band edges does not match the filter type.
    #[error("lowpass and highpass filters take one band edge, bandpass and bandstop filters take two")]
    EdgeCountMismatch,
    /// A passband edge is at or above the Nyquist frequency.
    #[error("the passband edge must be below the Nyquist frequency")]
    EdgeAboveNyquist,
    /// A passband edge is zero or negative.
    #[error("the passband edge must be positive")]
    NonPositiveEdge,
    /// The lower band edge is not below the upper band edge.
    #[error("the lower band edge must be below the upper band edge")]
    EdgesWrongOrder,
    /// Subtracting the transition width from a passband edge leaves a
    /// stopband edge at or below zero.
    #[error("the transition width is too wide: the lower stopband edge must be positive")]
    StopbandEdgeBelowZero,
    /// Adding the transition width to a passband edge puts a stopband edge at
    /// or above the Nyquist frequency.
    #[error("the transition width is too wide: the upper stopband edge must be below the Nyquist frequency")]
    StopbandEdgeAboveNyquist,
    /// The cutoff frequency lies at or above the Nyquist frequency.
    #[error("the cutoff frequency must be below the Nyquist frequency")]
    CutoffAboveNyquist,
}

impl From<InvalidSpecification> for Error {
    fn from(value: InvalidSpecification) -> Error {
        Error::InvalidSpecification(value)
    }
}
