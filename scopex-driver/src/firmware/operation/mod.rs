mod frame;
mod sequence;
mod tuple;
mod upload;

pub use frame::FrameOp;
pub use sequence::SequenceOp;
pub use upload::WaveformUploadOp;

/// A unit of work that packs one command into a transmit buffer per call.
///
/// The sender keeps calling [`Operation::pack`] with a buffer of [`Operation::required_size`]
/// bytes until [`Operation::is_done`] returns `true`. Each packed buffer is written to the link
/// as a whole.
pub trait Operation {
    /// Size of the buffer the next [`Operation::pack`] needs.
    #[must_use]
    fn required_size(&self) -> usize;

    /// Packs the next command into `tx` and returns the number of bytes written.
    fn pack(&mut self, tx: &mut [u8]) -> usize;

    /// Returns `true` when there is nothing left to pack.
    #[must_use]
    fn is_done(&self) -> bool;
}

impl Operation for Box<dyn Operation + Send> {
    fn required_size(&self) -> usize {
        self.as_ref().required_size()
    }

    fn pack(&mut self, tx: &mut [u8]) -> usize {
        self.as_mut().pack(tx)
    }

    fn is_done(&self) -> bool {
        self.as_ref().is_done()
    }
}

/// Drains `op` into a list of transmit buffers.
#[must_use]
pub fn pack_all(op: &mut impl Operation) -> Vec<Vec<u8>> {
    let mut packets = Vec::new();
    while !op.is_done() {
        let mut tx = vec![0x00; op.required_size()];
        let size = op.pack(&mut tx);
        tx.truncate(size);
        packets.push(tx);
    }
    packets
}
