use zerocopy::IntoBytes;

use super::Operation;
use crate::firmware::Frame;

/// Packs a single [`Frame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameOp {
    frame: Frame,
    is_done: bool,
}

impl FrameOp {
    /// Creates a new [`FrameOp`].
    #[must_use]
    pub const fn new(frame: Frame) -> Self {
        Self {
            frame,
            is_done: false,
        }
    }
}

impl Operation for FrameOp {
    fn required_size(&self) -> usize {
        size_of::<Frame>()
    }

    fn pack(&mut self, tx: &mut [u8]) -> usize {
        tx[..size_of::<Frame>()].copy_from_slice(self.frame.as_bytes());
        self.is_done = true;
        size_of::<Frame>()
    }

    fn is_done(&self) -> bool {
        self.is_done
    }
}
