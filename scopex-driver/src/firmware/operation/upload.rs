use zerocopy::IntoBytes;

use super::Operation;
use crate::firmware::{Frame, Opcode};

/// Packs a waveform table behind its `'r'` header in a single buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaveformUploadOp {
    table: Vec<u8>,
    is_done: bool,
}

impl WaveformUploadOp {
    /// Creates a new [`WaveformUploadOp`].
    #[must_use]
    pub const fn new(table: Vec<u8>) -> Self {
        Self {
            table,
            is_done: false,
        }
    }
}

impl Operation for WaveformUploadOp {
    fn required_size(&self) -> usize {
        size_of::<Frame>() + self.table.len()
    }

    fn pack(&mut self, tx: &mut [u8]) -> usize {
        // a full 256-sample table is announced as 0
        let header = Frame::new(Opcode::WaveformUpload, self.table.len() as u8, 0x00);
        tx[..size_of::<Frame>()].copy_from_slice(header.as_bytes());
        tx[size_of::<Frame>()..self.required_size()].copy_from_slice(&self.table);
        self.is_done = true;
        self.required_size()
    }

    fn is_done(&self) -> bool {
        self.is_done
    }
}
