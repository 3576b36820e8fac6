use crate::firmware::{operation::SequenceOp, Frame, Opcode};

use super::{gain_code, Channel, Datagram};

/// Acquisition settings of the oscilloscope.
///
/// Sent as one frame per setting in the order trigger mode, trigger polarity, display mode,
/// channel 1 gain, channel 2 gain, channel 1 offset, channel 2 offset, trigger level and sample
/// rate.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScopeConfig {
    /// Trigger mode code.
    pub trigger_mode: u8,
    /// Trigger polarity code.
    pub trigger_polarity: u8,
    /// Display mode code.
    pub display_mode: u8,
    /// Input gain per channel.
    pub gains: [f64; 2],
    /// DC offset per channel.
    pub offsets: [u16; 2],
    /// Trigger level.
    pub trigger_level: u16,
    /// Sample rate code.
    pub sample_rate: u8,
}

impl ScopeConfig {
    /// The power-on settings of the device.
    pub const DEFAULT: Self = Self {
        trigger_mode: 0,
        trigger_polarity: 0,
        display_mode: 0,
        gains: [1., 1.],
        offsets: [0, 0],
        trigger_level: 0,
        sample_rate: 0,
    };

    /// Sets the trigger mode.
    #[must_use]
    pub const fn with_trigger_mode(mut self, mode: u8) -> Self {
        self.trigger_mode = mode;
        self
    }

    /// Sets the trigger polarity.
    #[must_use]
    pub const fn with_trigger_polarity(mut self, polarity: u8) -> Self {
        self.trigger_polarity = polarity;
        self
    }

    /// Sets the display mode.
    #[must_use]
    pub const fn with_display_mode(mut self, mode: u8) -> Self {
        self.display_mode = mode;
        self
    }

    /// Sets the gain of `channel`.
    #[must_use]
    pub const fn with_gain(mut self, channel: Channel, gain: f64) -> Self {
        self.gains[channel as usize] = gain;
        self
    }

    /// Sets the offset of `channel`.
    #[must_use]
    pub const fn with_offset(mut self, channel: Channel, offset: u16) -> Self {
        self.offsets[channel as usize] = offset;
        self
    }

    /// Sets the trigger level.
    #[must_use]
    pub const fn with_trigger_level(mut self, level: u16) -> Self {
        self.trigger_level = level;
        self
    }

    /// Sets the sample rate code.
    #[must_use]
    pub const fn with_sample_rate(mut self, rate: u8) -> Self {
        self.sample_rate = rate;
        self
    }

    fn frames(&self) -> Vec<Frame> {
        vec![
            Frame::new(Opcode::TriggerMode, self.trigger_mode, 0x00),
            Frame::new(Opcode::TriggerPolarity, self.trigger_polarity, 0x00),
            Frame::new(Opcode::DisplayMode, self.display_mode, 0x00),
            Frame::new(Opcode::Gain, Channel::Ch1.index(), gain_code(self.gains[0])),
            Frame::new(Opcode::Gain, Channel::Ch2.index(), gain_code(self.gains[1])),
            Frame::with_u16(Opcode::OffsetCh1, self.offsets[0]),
            Frame::with_u16(Opcode::OffsetCh2, self.offsets[1]),
            Frame::with_u16(Opcode::TriggerLevel, self.trigger_level),
            Frame::new(Opcode::SampleRate, self.sample_rate, 0x00),
        ]
    }
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Datagram for ScopeConfig {
    type O = SequenceOp;

    fn operation(self) -> Self::O {
        SequenceOp::new(self.frames())
    }
}
