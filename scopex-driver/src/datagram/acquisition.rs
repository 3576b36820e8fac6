use crate::firmware::{operation::FrameOp, Frame, Opcode};

use super::Datagram;

/// Sets the display mode.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DisplayMode(pub u8);

impl Datagram for DisplayMode {
    type O = FrameOp;

    fn operation(self) -> Self::O {
        FrameOp::new(Frame::new(Opcode::DisplayMode, self.0, 0x00))
    }
}

/// Sets the sample rate code.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SampleRate(pub u8);

impl Datagram for SampleRate {
    type O = FrameOp;

    fn operation(self) -> Self::O {
        FrameOp::new(Frame::new(Opcode::SampleRate, self.0, 0x00))
    }
}

/// Starts a capture.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Capture {
    continuous: bool,
}

impl Capture {
    /// Captures a single block.
    #[must_use]
    pub const fn single() -> Self {
        Self { continuous: false }
    }

    /// Captures until aborted.
    #[must_use]
    pub const fn continuous() -> Self {
        Self { continuous: true }
    }

    /// Creates a new [`Capture`].
    #[must_use]
    pub const fn new(continuous: bool) -> Self {
        Self { continuous }
    }

    /// Returns `true` if the capture runs until aborted.
    #[must_use]
    pub const fn is_continuous(&self) -> bool {
        self.continuous
    }
}

impl Datagram for Capture {
    type O = FrameOp;

    fn operation(self) -> Self::O {
        FrameOp::new(Frame::new(Opcode::Capture, self.continuous as u8, 0x00))
    }
}

/// Aborts the running capture or DDS output.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Abort;

impl Datagram for Abort {
    type O = FrameOp;

    fn operation(self) -> Self::O {
        FrameOp::new(Frame::bare(Opcode::Abort))
    }
}
