use crate::firmware::{operation::FrameOp, Frame, Opcode};

use super::Datagram;

/// Sets the trigger mode.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TriggerMode(pub u8);

impl Datagram for TriggerMode {
    type O = FrameOp;

    fn operation(self) -> Self::O {
        FrameOp::new(Frame::new(Opcode::TriggerMode, self.0, 0x00))
    }
}

/// Sets the trigger polarity.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TriggerPolarity(pub u8);

impl Datagram for TriggerPolarity {
    type O = FrameOp;

    fn operation(self) -> Self::O {
        FrameOp::new(Frame::new(Opcode::TriggerPolarity, self.0, 0x00))
    }
}

/// Sets the trigger level.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TriggerLevel(pub u16);

impl Datagram for TriggerLevel {
    type O = FrameOp;

    fn operation(self) -> Self::O {
        FrameOp::new(Frame::with_u16(Opcode::TriggerLevel, self.0))
    }
}
