use crate::firmware::{operation::FrameOp, Frame, Opcode};

use super::Datagram;

/// Drives the eight digital output lines. Bit `n` is line `n`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DigitalOutput(u8);

impl DigitalOutput {
    /// Creates a new [`DigitalOutput`].
    #[must_use]
    pub const fn new(mask: u8) -> Self {
        Self(mask)
    }

    /// The output bitmask.
    #[must_use]
    pub const fn mask(&self) -> u8 {
        self.0
    }
}

impl Datagram for DigitalOutput {
    type O = FrameOp;

    fn operation(self) -> Self::O {
        FrameOp::new(Frame::new(Opcode::DigitalOutput, self.0, 0x00))
    }
}

/// Requests the digital input bitmask. The device answers with a single byte.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ReadDigitalInputs;

impl Datagram for ReadDigitalInputs {
    type O = FrameOp;

    fn operation(self) -> Self::O {
        FrameOp::new(Frame::bare(Opcode::DigitalInput))
    }
}
