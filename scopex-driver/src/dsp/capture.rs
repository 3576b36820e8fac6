use scopex_core::common::{
    CAPTURE_FRAME_SIZE, CAPTURE_SAMPLES_PER_CHANNEL, FULL_SCALE_VOLTAGE, PI,
};

use super::Point;

/// Calibrated samples of both channels.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CaptureData {
    /// Channel 1.
    pub ch1: Vec<Point>,
    /// Channel 2.
    pub ch2: Vec<Point>,
}

/// Converts a raw sample to a voltage: 0 is `-FULL_SCALE_VOLTAGE` and 255 is
/// `FULL_SCALE_VOLTAGE`.
#[must_use]
pub fn to_voltage(raw: u8) -> f64 {
    raw as f64 * (2.0 * FULL_SCALE_VOLTAGE) / 255.0 - FULL_SCALE_VOLTAGE
}

/// Decodes a capture reply.
///
/// The reply holds the samples of channel 1 followed by the samples of channel 2. Returns `None`
/// if `data` is shorter than [`CAPTURE_FRAME_SIZE`]; bytes after it are ignored.
#[must_use]
pub fn decode_capture(data: &[u8]) -> Option<CaptureData> {
    if data.len() < CAPTURE_FRAME_SIZE {
        return None;
    }

    let n = CAPTURE_SAMPLES_PER_CHANNEL.min(data.len() / 2);
    let ch1 = (0..n)
        .map(|i| Point::new(i as f64, to_voltage(data[i])))
        .collect();
    let ch2 = (0..n)
        .filter(|i| i + CAPTURE_SAMPLES_PER_CHANNEL < data.len())
        .map(|i| {
            Point::new(
                i as f64,
                to_voltage(data[i + CAPTURE_SAMPLES_PER_CHANNEL]),
            )
        })
        .collect();
    Some(CaptureData { ch1, ch2 })
}

/// A two-tone test signal used when no device is connected.
///
/// Channel 1 is a 5 V sine with a period of 50 samples, channel 2 a 3 V sine with a period of 25
/// samples shifted by π/4.
#[must_use]
pub fn demo_capture() -> CaptureData {
    let ch1 = (0..CAPTURE_SAMPLES_PER_CHANNEL)
        .map(|i| {
            let x = i as f64;
            Point::new(x, 5.0 * (2.0 * PI * x / 50.0).sin())
        })
        .collect();
    let ch2 = (0..CAPTURE_SAMPLES_PER_CHANNEL)
        .map(|i| {
            let x = i as f64;
            Point::new(x, 3.0 * (2.0 * PI * x / 25.0 + PI / 4.0).sin())
        })
        .collect();
    CaptureData { ch1, ch2 }
}
