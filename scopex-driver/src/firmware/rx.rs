use scopex_core::common::CAPTURE_FRAME_SIZE;

use crate::dsp::{decode_capture, CaptureData};

/// Live state of the eight digital input lines.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub struct DigitalInputs(u8);

impl DigitalInputs {
    /// Creates a new [`DigitalInputs`] from the raw bitmask.
    #[must_use]
    pub const fn new(bits: u8) -> Self {
        Self(bits)
    }

    /// The raw bitmask. Bit `n` is input line `n`.
    #[must_use]
    pub const fn bits(&self) -> u8 {
        self.0
    }

    /// Returns `true` if input line `line` (0-7) is high.
    #[must_use]
    pub const fn is_high(&self, line: u8) -> bool {
        line < 8 && (self.0 >> line) & 0x01 == 0x01
    }
}

/// A reply received from the device.
#[derive(Clone, PartialEq, Debug)]
pub enum RxFrame {
    /// Two channels of calibrated samples.
    Capture(CaptureData),
    /// The digital input bitmask.
    DigitalInputs(DigitalInputs),
}

impl RxFrame {
    /// Classifies a block of received bytes.
    ///
    /// Blocks of [`CAPTURE_FRAME_SIZE`] bytes or more are captures and single bytes are digital
    /// input replies. Anything else is not a reply and yields `None`.
    #[must_use]
    pub fn classify(data: &[u8]) -> Option<Self> {
        match data.len() {
            n if n >= CAPTURE_FRAME_SIZE => decode_capture(data).map(Self::Capture),
            1 => Some(Self::DigitalInputs(DigitalInputs::new(data[0]))),
            n => {
                tracing::trace!("Dropping {} bytes that do not form a reply", n);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    #[case(0b0000_0101, 0, true)]
    #[case(0b0000_0101, 1, false)]
    #[case(0b0000_0101, 2, true)]
    #[case(0b1000_0000, 7, true)]
    #[case(0xFF, 8, false)]
    #[test]
    fn digital_inputs(#[case] bits: u8, #[case] line: u8, #[case] expect: bool) {
        assert_eq!(expect, DigitalInputs::new(bits).is_high(line));
    }

    #[rstest::rstest]
    #[case(0)]
    #[case(2)]
    #[case(3)]
    #[case(399)]
    #[test]
    fn ignored(#[case] len: usize) {
        assert_eq!(None, RxFrame::classify(&vec![0x00; len]));
    }

    #[test]
    fn digital_input_reply() {
        assert_eq!(
            Some(RxFrame::DigitalInputs(DigitalInputs::new(0x81))),
            RxFrame::classify(&[0x81])
        );
    }

    #[rstest::rstest]
    #[case(400)]
    #[case(401)]
    #[case(1024)]
    #[test]
    fn capture_reply(#[case] len: usize) {
        let Some(RxFrame::Capture(data)) = RxFrame::classify(&vec![0x80; len]) else {
            panic!("expected a capture");
        };
        assert_eq!(200, data.ch1.len());
        assert_eq!(200, data.ch2.len());
    }
}
