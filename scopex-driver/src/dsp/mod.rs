mod capture;
mod dft;

pub use capture::{decode_capture, demo_capture, to_voltage, CaptureData};
pub use dft::dft;

/// A point of a trace.
///
/// For captures `x` is the sample index and `y` the voltage \[V\]. For spectra `x` is the
/// frequency \[Hz\] and `y` the magnitude.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a new [`Point`].
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
