/// The first byte of every command frame.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[repr(u8)]
#[non_exhaustive]
pub enum Opcode {
    /// Trigger mode.
    TriggerMode = b'T',
    /// Trigger polarity.
    TriggerPolarity = b'P',
    /// Display mode.
    DisplayMode = b'F',
    /// Channel gain.
    Gain = b'G',
    /// Channel 1 offset.
    OffsetCh1 = b'O',
    /// Channel 2 offset.
    OffsetCh2 = b'o',
    /// Trigger level.
    TriggerLevel = b'L',
    /// Sample rate.
    SampleRate = b'S',
    /// Start a capture.
    Capture = b'C',
    /// Abort the running capture or DDS output.
    Abort = b'A',
    /// Set the digital outputs.
    DigitalOutput = b'h',
    /// Request the digital inputs.
    DigitalInput = b'i',
    /// Upload a DDS waveform table.
    WaveformUpload = b'r',
    /// Start the DDS output.
    DdsRun = b'f',
    /// DDS timer period, i.e. the clock divider.
    DdsPeriod = b'p',
    /// DDS phase step.
    DdsPhaseStep = b'N',
}

impl Opcode {
    /// All opcodes known to the firmware.
    pub const ALL: [Opcode; 16] = [
        Opcode::TriggerMode,
        Opcode::TriggerPolarity,
        Opcode::DisplayMode,
        Opcode::Gain,
        Opcode::OffsetCh1,
        Opcode::OffsetCh2,
        Opcode::TriggerLevel,
        Opcode::SampleRate,
        Opcode::Capture,
        Opcode::Abort,
        Opcode::DigitalOutput,
        Opcode::DigitalInput,
        Opcode::WaveformUpload,
        Opcode::DdsRun,
        Opcode::DdsPeriod,
        Opcode::DdsPhaseStep,
    ];
}

impl From<Opcode> for u8 {
    fn from(value: Opcode) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for Opcode {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|&op| op as u8 == value)
            .ok_or(value)
    }
}
