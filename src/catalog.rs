//! Window catalog.
//!
//! This module contains the table of windows that can be used to design a
//! filter, together with the empirical design figures of each window. The
//! table is static data and is never modified.

use crate::error::{Error, Result};
use std::{fmt, str::FromStr};

/// Window used to truncate the ideal impulse response.
///
/// The three Kaiser variants share the same shape and differ only in the
/// shape parameter β, each of which is tied to a nominal stopband attenuation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Window {
    /// Rectangular window (no tapering).
    Rectangular,
    /// Bartlett (triangular) window.
    Bartlett,
    /// Hann window.
    Hanning,
    /// Hamming window.
    Hamming,
    /// Blackman window.
    Blackman,
    /// Kaiser window with β = 4.54 (50 dB nominal attenuation).
    KaiserBeta454,
    /// Kaiser window with β = 6.76 (70 dB nominal attenuation).
    KaiserBeta676,
    /// Kaiser window with β = 8.96 (90 dB nominal attenuation).
    KaiserBeta896,
}

/// Shape family of a window.
///
/// This is the discriminant used to select the window formula and the order
/// estimate. Only the Kaiser family carries a shape parameter.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum WindowShape {
    /// `w(n) = 1`.
    Rectangular,
    /// Triangular window with zero endpoints.
    Bartlett,
    /// Raised cosine with zero endpoints.
    Hann,
    /// Raised cosine on a 0.08 pedestal.
    Hamming,
    /// Three-term cosine window.
    Blackman,
    /// Kaiser-Bessel window with shape parameter `beta`.
    Kaiser {
        /// Shape parameter β.
        beta: f64,
    },
}

/// Catalog entry describing a window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowDescriptor {
    /// Window described by this entry.
    pub window: Window,
    /// Canonical name of the window.
    pub name: &'static str,
    /// Normalized transition width factor.
    ///
    /// The filter length required by a non-Kaiser window is this factor
    /// divided by the transition width normalized to the sample rate.
    pub transition_width_factor: f64,
    /// Nominal passband ripple in dB.
    pub passband_ripple_db: f64,
    /// Nominal main lobe to side lobe ratio in dB.
    ///
    /// This is not tabulated for the Kaiser family.
    pub mainlobe_to_sidelobe_db: Option<f64>,
    /// Nominal stopband attenuation in dB.
    pub stopband_attenuation_db: f64,
    /// Shape family of the window.
    pub shape: WindowShape,
    /// Closed form of the window, as display text.
    pub expression: &'static str,
}

const KAISER_EXPRESSION: &str = "I₀(β√(1-(2n/(N-1))²))/I₀(β)";

// Entries are in the declaration order of `Window`.
const ENTRIES: [WindowDescriptor; 8] = [
    WindowDescriptor {
        window: Window::Rectangular,
        name: "Rectangular",
        transition_width_factor: 0.9,
        passband_ripple_db: 0.7416,
        mainlobe_to_sidelobe_db: Some(13.0),
        stopband_attenuation_db: 21.0,
        shape: WindowShape::Rectangular,
        expression: "w(n) = 1",
    },
    WindowDescriptor {
        window: Window::Bartlett,
        name: "Bartlett",
        transition_width_factor: 2.3,
        passband_ripple_db: 0.185,
        mainlobe_to_sidelobe_db: Some(25.0),
        stopband_attenuation_db: 25.0,
        shape: WindowShape::Bartlett,
        expression: "w(n) = 2 - 2n/M",
    },
    WindowDescriptor {
        window: Window::Hanning,
        name: "Hanning",
        transition_width_factor: 3.1,
        passband_ripple_db: 0.0546,
        mainlobe_to_sidelobe_db: Some(31.0),
        stopband_attenuation_db: 44.0,
        shape: WindowShape::Hann,
        expression: "w(n) = 0.5 + 0.5*cos(2πn/N)",
    },
    WindowDescriptor {
        window: Window::Hamming,
        name: "Hamming",
        transition_width_factor: 3.3,
        passband_ripple_db: 0.0194,
        mainlobe_to_sidelobe_db: Some(41.0),
        stopband_attenuation_db: 53.0,
        shape: WindowShape::Hamming,
        expression: "w(n) = 0.54 + 0.46*cos(2πn/N)",
    },
    WindowDescriptor {
        window: Window::Blackman,
        name: "Blackman",
        transition_width_factor: 5.5,
        passband_ripple_db: 0.0017,
        mainlobe_to_sidelobe_db: Some(57.0),
        stopband_attenuation_db: 75.0,
        shape: WindowShape::Blackman,
        expression: "w(n) = 0.42 + 0.5*cos(2πn/N) + 0.08*cos(4πn/(N-1))",
    },
    WindowDescriptor {
        window: Window::KaiserBeta454,
        name: "Kaiser_beta_4.54",
        transition_width_factor: 2.93,
        passband_ripple_db: 0.0274,
        mainlobe_to_sidelobe_db: None,
        stopband_attenuation_db: 50.0,
        shape: WindowShape::Kaiser { beta: 4.54 },
        expression: KAISER_EXPRESSION,
    },
    WindowDescriptor {
        window: Window::KaiserBeta676,
        name: "Kaiser_beta_6.76",
        transition_width_factor: 4.32,
        passband_ripple_db: 0.00275,
        mainlobe_to_sidelobe_db: None,
        stopband_attenuation_db: 70.0,
        shape: WindowShape::Kaiser { beta: 6.76 },
        expression: KAISER_EXPRESSION,
    },
    WindowDescriptor {
        window: Window::KaiserBeta896,
        name: "Kaiser_beta_8.96",
        transition_width_factor: 5.71,
        passband_ripple_db: 0.000275,
        mainlobe_to_sidelobe_db: None,
        stopband_attenuation_db: 90.0,
        shape: WindowShape::Kaiser { beta: 8.96 },
        expression: KAISER_EXPRESSION,
    },
];

static CATALOG: [WindowDescriptor; 8] = ENTRIES;

const _: () = {
    let mut i = 0;
    while i < ENTRIES.len() {
        assert!(ENTRIES[i].window as usize == i);
        i += 1;
    }
};

/// Returns the full window catalog, in catalog order.
pub fn catalog() -> &'static [WindowDescriptor] {
    &CATALOG
}

/// Returns the windows that meet a stopband attenuation requirement.
///
/// A window is returned if its nominal stopband attenuation is greater than or
/// equal to `required_attenuation_db`. The windows are listed in catalog
/// order, not ranked by performance.
pub fn available_windows(required_attenuation_db: f64) -> Vec<Window> {
    CATALOG
        .iter()
        .filter(|d| d.stopband_attenuation_db >= required_attenuation_db)
        .map(|d| d.window)
        .collect()
}

/// Looks up a catalog entry by window name.
///
/// Fails with [`Error::UnknownWindow`] if the name is not in the catalog.
pub fn descriptor_by_name(name: &str) -> Result<&'static WindowDescriptor> {
    name.parse::<Window>().map(|w| w.descriptor())
}

impl Window {
    /// Returns the catalog entry of this window.
    pub fn descriptor(&self) -> &'static WindowDescriptor {
        &CATALOG[*self as usize]
    }

    /// Returns the canonical name of this window.
    pub fn name(&self) -> &'static str {
        self.descriptor().name
    }

    /// Returns the Kaiser shape parameter β, or `None` if this is not a
    /// Kaiser window.
    pub fn kaiser_beta(&self) -> Option<f64> {
        match self.descriptor().shape {
            WindowShape::Kaiser { beta } => Some(beta),
            _ => None,
        }
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Window {
    type Err = Error;

    fn from_str(s: &str) -> Result<Window> {
        if s == "Hann" {
            return Ok(Window::Hanning);
        }
        CATALOG
            .iter()
            .find(|d| d.name == s)
            .map(|d| d.window)
            .ok_or_else(|| Error::UnknownWindow(s.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn descriptors_match_windows() {
        for d in catalog() {
            assert_eq!(d.window.descriptor(), d);
            assert_eq!(d.window.name().parse::<Window>().unwrap(), d.window);
        }
    }

    #[test]
    fn table_order() {
        for (index, d) in catalog().iter().enumerate() {
            assert_eq!(d.window as usize, index);
            assert!(std::ptr::eq(d.window.descriptor(), d));
        }
    }

    #[test]
    fn kaiser_discriminant() {
        assert_eq!(Window::KaiserBeta454.kaiser_beta(), Some(4.54));
        assert_eq!(Window::KaiserBeta676.kaiser_beta(), Some(6.76));
        assert_eq!(Window::KaiserBeta896.kaiser_beta(), Some(8.96));
        assert_eq!(Window::Hamming.kaiser_beta(), None);
        for d in catalog() {
            assert_eq!(
                d.mainlobe_to_sidelobe_db.is_none(),
                d.window.kaiser_beta().is_some()
            );
        }
    }

    #[test]
    fn available_windows_60db() {
        assert_eq!(
            available_windows(60.0),
            vec![
                Window::Blackman,
                Window::KaiserBeta676,
                Window::KaiserBeta896
            ]
        );
    }

    #[test]
    fn available_windows_inclusive() {
        let windows = available_windows(50.0);
        assert!(windows.contains(&Window::KaiserBeta454));
        assert!(windows.contains(&Window::Hamming));
        assert!(!windows.contains(&Window::Hanning));
        assert_eq!(available_windows(0.0).len(), catalog().len());
        assert!(available_windows(100.0).is_empty());
    }

    #[test]
    fn unknown_window() {
        assert_eq!(
            "Kaiser".parse::<Window>(),
            Err(Error::UnknownWindow("Kaiser".to_string()))
        );
        assert!(matches!(
            descriptor_by_name("Triangular"),
            Err(Error::UnknownWindow(_))
        ));
        assert_eq!("Hann".parse::<Window>(), Ok(Window::Hanning));
    }
}
