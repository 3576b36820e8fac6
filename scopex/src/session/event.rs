use scopex_driver::dsp::{CaptureData, Point};

/// A notification published by a [`Session`](super::Session).
#[derive(Clone, PartialEq, Debug)]
pub enum SessionEvent {
    /// The list of available ports may have changed.
    PortsChanged,
    /// The session connected or disconnected.
    ConnectionChanged,
    /// The status message changed.
    StatusChanged(String),
    /// A capture was received, or the demonstration capture was generated.
    CaptureDataReceived(CaptureData),
    /// Magnitude spectrum of channel 1 of the last capture.
    DftComputed(Vec<Point>),
    /// The digital input bitmask.
    DigitalInputsChanged(u8),
}
