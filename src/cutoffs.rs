use crate::{
    error::{InvalidSpecification, Result},
    types::{BandEdges, FilterType},
};

/// Resolves the cutoff frequencies of a filter.
///
/// Each cutoff frequency is placed at the center of its transition band. The
/// stopband edges are obtained by moving each passband edge away from the
/// passband by `transition_width`. All the frequencies are given in Hz.
///
/// The function fails with
/// [`Error::InvalidSpecification`](crate::error::Error::InvalidSpecification)
/// if a passband edge is not below the Nyquist frequency, if the band edges
/// are not positive or not in increasing order, or if a stopband edge falls
/// outside `(0, sample_rate / 2)`. Non-finite inputs and a sample rate or
/// transition width that is not positive are rejected as well.
pub fn resolve_cutoffs(
    filter_type: FilterType,
    edges: BandEdges,
    transition_width: f64,
    sample_rate: f64,
) -> Result<BandEdges> {
    if !sample_rate.is_finite() || !transition_width.is_finite() || !edges.is_finite() {
        Err(InvalidSpecification::NotFinite)?
    }
    if sample_rate <= 0.0 {
        Err(InvalidSpecification::NonPositiveSampleRate)?
    }
    if transition_width <= 0.0 {
        Err(InvalidSpecification::NonPositiveTransitionWidth)?
    }
    let nyquist = 0.5 * sample_rate;
    match (filter_type, edges) {
        (FilterType::LowPass, BandEdges::Single(fp)) => {
            if fp >= nyquist {
                Err(InvalidSpecification::EdgeAboveNyquist)?
            }
            if fp <= 0.0 {
                Err(InvalidSpecification::NonPositiveEdge)?
            }
            let fs = fp + transition_width;
            let fc = (fp + fs) / 2.0;
            // the ideal response is only defined up to Nyquist
            if fc >= nyquist {
                Err(InvalidSpecification::CutoffAboveNyquist)?
            }
            Ok(BandEdges::Single(fc))
        }
        (FilterType::HighPass, BandEdges::Single(fp)) => {
            if fp >= nyquist {
                Err(InvalidSpecification::EdgeAboveNyquist)?
            }
            let fs = fp - transition_width;
            if fs <= 0.0 {
                Err(InvalidSpecification::StopbandEdgeBelowZero)?
            }
            Ok(BandEdges::Single((fs + fp) / 2.0))
        }
        (FilterType::BandPass | FilterType::BandStop, BandEdges::Pair(fp1, fp2)) => {
            if fp1 >= fp2 {
                Err(InvalidSpecification::EdgesWrongOrder)?
            }
            if fp2 >= nyquist {
                Err(InvalidSpecification::EdgeAboveNyquist)?
            }
            if fp1 <= 0.0 {
                Err(InvalidSpecification::NonPositiveEdge)?
            }
            let fs1 = fp1 - transition_width;
            let fs2 = fp2 + transition_width;
            if fs1 <= 0.0 {
                Err(InvalidSpecification::StopbandEdgeBelowZero)?
            }
            if fs2 >= nyquist {
                Err(InvalidSpecification::StopbandEdgeAboveNyquist)?
            }
            Ok(BandEdges::Pair((fs1 + fp1) / 2.0, (fp2 + fs2) / 2.0))
        }
        _ => Err(InvalidSpecification::EdgeCountMismatch.into()),
    }
}
