use crate::{
    firmware::{
        operation::{FrameOp, WaveformUploadOp},
        Frame, Opcode,
    },
    synthesizer::Quantized,
    waveform::WaveformTable,
};

use super::Datagram;

/// Uploads a waveform table to the DDS.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct WaveformUpload<'a> {
    table: &'a WaveformTable,
}

impl<'a> WaveformUpload<'a> {
    /// Creates a new [`WaveformUpload`].
    #[must_use]
    pub const fn new(table: &'a WaveformTable) -> Self {
        Self { table }
    }
}

impl Datagram for WaveformUpload<'_> {
    type O = WaveformUploadOp;

    fn operation(self) -> Self::O {
        WaveformUploadOp::new(self.table.as_slice().to_vec())
    }
}

/// Starts the DDS output with the uploaded table.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct DdsRun;

impl Datagram for DdsRun {
    type O = FrameOp;

    fn operation(self) -> Self::O {
        FrameOp::new(Frame::bare(Opcode::DdsRun))
    }
}

/// Programs the DDS clock divider and phase step.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DdsFrequency(Quantized);

impl DdsFrequency {
    /// Creates a new [`DdsFrequency`].
    #[must_use]
    pub const fn new(setting: Quantized) -> Self {
        Self(setting)
    }
}

impl Datagram for DdsFrequency {
    type O = (FrameOp, FrameOp);

    fn operation(self) -> Self::O {
        (
            FrameOp::new(Frame::with_u16(Opcode::DdsPeriod, self.0.divider())),
            FrameOp::new(Frame::with_u16(Opcode::DdsPhaseStep, self.0.phase_step())),
        )
    }
}
