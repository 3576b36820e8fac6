use zerocopy::IntoBytes;

use super::Operation;
use crate::firmware::Frame;

/// Packs a list of [`Frame`]s, one per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceOp {
    frames: Vec<Frame>,
    sent: usize,
}

impl SequenceOp {
    /// Creates a new [`SequenceOp`].
    #[must_use]
    pub const fn new(frames: Vec<Frame>) -> Self {
        Self { frames, sent: 0 }
    }
}

impl Operation for SequenceOp {
    fn required_size(&self) -> usize {
        size_of::<Frame>()
    }

    fn pack(&mut self, tx: &mut [u8]) -> usize {
        let Some(frame) = self.frames.get(self.sent) else {
            return 0;
        };
        tx[..size_of::<Frame>()].copy_from_slice(frame.as_bytes());
        self.sent += 1;
        size_of::<Frame>()
    }

    fn is_done(&self) -> bool {
        self.sent >= self.frames.len()
    }
}
