use crate::firmware::{operation::FrameOp, Frame, Opcode};

use super::Datagram;

/// Gains the input stage supports. The gain code is the index into this table.
pub const GAIN_STEPS: [f64; 6] = [0.5, 1., 2., 4., 8., 16.];

const DEFAULT_GAIN_CODE: u8 = 1;

/// Returns the device code for `gain`. Gains not in [`GAIN_STEPS`] map to the code of unity gain.
#[must_use]
pub fn gain_code(gain: f64) -> u8 {
    GAIN_STEPS
        .iter()
        .position(|&g| g == gain)
        .map_or(DEFAULT_GAIN_CODE, |i| i as u8)
}

/// An input channel.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Channel {
    #[allow(missing_docs)]
    Ch1 = 0,
    #[allow(missing_docs)]
    Ch2 = 1,
}

impl Channel {
    /// The channel number on the wire.
    #[must_use]
    pub const fn index(&self) -> u8 {
        *self as u8
    }
}

/// Sets the input gain of a channel.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ChannelGain {
    channel: Channel,
    gain: f64,
}

impl ChannelGain {
    /// Creates a new [`ChannelGain`].
    #[must_use]
    pub const fn new(channel: Channel, gain: f64) -> Self {
        Self { channel, gain }
    }
}

impl Datagram for ChannelGain {
    type O = FrameOp;

    fn operation(self) -> Self::O {
        FrameOp::new(Frame::new(
            Opcode::Gain,
            self.channel.index(),
            gain_code(self.gain),
        ))
    }
}

/// Sets the DC offset of a channel.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ChannelOffset {
    channel: Channel,
    offset: u16,
}

impl ChannelOffset {
    /// Creates a new [`ChannelOffset`].
    #[must_use]
    pub const fn new(channel: Channel, offset: u16) -> Self {
        Self { channel, offset }
    }
}

impl Datagram for ChannelOffset {
    type O = FrameOp;

    fn operation(self) -> Self::O {
        let opcode = match self.channel {
            Channel::Ch1 => Opcode::OffsetCh1,
            Channel::Ch2 => Opcode::OffsetCh2,
        };
        FrameOp::new(Frame::with_u16(opcode, self.offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datagram::packets;

    #[rstest::rstest]
    #[case(0, 0.5)]
    #[case(1, 1.)]
    #[case(2, 2.)]
    #[case(3, 4.)]
    #[case(4, 8.)]
    #[case(5, 16.)]
    #[case(1, 3.)]
    #[case(1, 0.)]
    #[case(1, -2.)]
    #[case(1, f64::NAN)]
    #[test]
    fn gain_code_(#[case] expect: u8, #[case] gain: f64) {
        assert_eq!(expect, gain_code(gain));
    }

    #[test]
    fn gain() {
        assert_eq!(
            vec![vec![b'G', 0x00, 0x03]],
            packets(ChannelGain::new(Channel::Ch1, 4.))
        );
        assert_eq!(
            vec![vec![b'G', 0x01, 0x05]],
            packets(ChannelGain::new(Channel::Ch2, 16.))
        );
    }

    #[rstest::rstest]
    #[case([b'O', 0x12, 0x34], Channel::Ch1)]
    #[case([b'o', 0x12, 0x34], Channel::Ch2)]
    #[test]
    fn offset(#[case] expect: [u8; 3], #[case] channel: Channel) {
        assert_eq!(
            vec![expect.to_vec()],
            packets(ChannelOffset::new(channel, 0x1234))
        );
    }
}
