use std::collections::VecDeque;

use scopex_driver::{
    core::common::{CAPTURE_SAMPLES_PER_CHANNEL, FRAME_SIZE, WAVEFORM_TABLE_SIZE},
    datagram::{Channel, GAIN_STEPS},
    firmware::{Frame, Opcode},
};

use crate::dds::DdsEmulator;

use super::params::*;

pub struct DeviceEmulator {
    pub(crate) err: u8,
    pub(crate) rx_buf: Vec<u8>,
    pub(crate) replies: VecDeque<Vec<u8>>,
    pub(crate) num_frames: usize,
    pub(crate) trigger_mode: u8,
    pub(crate) trigger_polarity: u8,
    pub(crate) display_mode: u8,
    pub(crate) gain_codes: [u8; 2],
    pub(crate) offsets: [u16; 2],
    pub(crate) trigger_level: u16,
    pub(crate) sample_rate: u8,
    pub(crate) continuous_capture: bool,
    pub(crate) probes: [Option<Vec<u8>>; 2],
    pub(crate) digital_outputs: u8,
    pub(crate) digital_inputs: u8,
    pub(crate) dds: DdsEmulator,
    pub(crate) broken: bool,
}

impl Default for DeviceEmulator {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceEmulator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            err: NO_ERR,
            rx_buf: Vec::new(),
            replies: VecDeque::new(),
            num_frames: 0,
            trigger_mode: 0,
            trigger_polarity: 0,
            display_mode: 0,
            gain_codes: [1, 1],
            offsets: [0, 0],
            trigger_level: 0,
            sample_rate: 0,
            continuous_capture: false,
            probes: [None, None],
            digital_outputs: 0x00,
            digital_inputs: 0x00,
            dds: DdsEmulator::new(),
            broken: false,
        }
    }

    pub fn break_down(&mut self) {
        self.broken = true;
    }

    pub fn repair(&mut self) {
        self.broken = false;
    }

    #[must_use]
    pub const fn is_broken(&self) -> bool {
        self.broken
    }

    /// Error code of the last command.
    #[must_use]
    pub const fn err(&self) -> u8 {
        self.err
    }

    /// Number of commands executed so far.
    #[must_use]
    pub const fn num_frames(&self) -> usize {
        self.num_frames
    }

    #[must_use]
    pub const fn trigger_mode(&self) -> u8 {
        self.trigger_mode
    }

    #[must_use]
    pub const fn trigger_polarity(&self) -> u8 {
        self.trigger_polarity
    }

    #[must_use]
    pub const fn display_mode(&self) -> u8 {
        self.display_mode
    }

    #[must_use]
    pub const fn gain_code(&self, channel: Channel) -> u8 {
        self.gain_codes[channel as usize]
    }

    /// Gain of `channel`. Out of range codes act as unity gain.
    #[must_use]
    pub fn gain(&self, channel: Channel) -> f64 {
        GAIN_STEPS
            .get(self.gain_code(channel) as usize)
            .copied()
            .unwrap_or(1.)
    }

    #[must_use]
    pub const fn offset(&self, channel: Channel) -> u16 {
        self.offsets[channel as usize]
    }

    #[must_use]
    pub const fn trigger_level(&self) -> u16 {
        self.trigger_level
    }

    #[must_use]
    pub const fn sample_rate(&self) -> u8 {
        self.sample_rate
    }

    #[must_use]
    pub const fn is_capturing(&self) -> bool {
        self.continuous_capture
    }

    #[must_use]
    pub const fn digital_outputs(&self) -> u8 {
        self.digital_outputs
    }

    #[must_use]
    pub const fn digital_inputs(&self) -> u8 {
        self.digital_inputs
    }

    /// Sets the level of the digital input lines.
    pub fn set_digital_inputs(&mut self, inputs: u8) {
        self.digital_inputs = inputs;
    }

    /// Feeds raw samples into `channel`. The capture repeats them.
    ///
    /// Without a probe, channel 1 is looped back from the DDS output and channel 2 reads 0 V.
    pub fn connect_probe(&mut self, channel: Channel, samples: Vec<u8>) {
        self.probes[channel as usize] = (!samples.is_empty()).then_some(samples);
    }

    #[must_use]
    pub const fn dds(&self) -> &DdsEmulator {
        &self.dds
    }

    /// Returns `true` if a reply is waiting to be read.
    #[must_use]
    pub fn has_reply(&self) -> bool {
        !self.replies.is_empty() || self.continuous_capture
    }

    /// Takes the next reply.
    ///
    /// While a continuous capture runs, a fresh capture is produced whenever nothing else is
    /// queued.
    pub fn rx(&mut self) -> Option<Vec<u8>> {
        if self.broken {
            return None;
        }
        match self.replies.pop_front() {
            Some(reply) => Some(reply),
            None if self.continuous_capture => Some(self.acquire()),
            None => None,
        }
    }

    /// Writes bytes to the device. Incomplete commands are kept until the rest arrives.
    pub fn send(&mut self, bytes: &[u8]) {
        if self.broken {
            return;
        }
        self.rx_buf.extend_from_slice(bytes);
        while let Some(consumed) = self.process_next() {
            self.rx_buf.drain(..consumed);
        }
    }

    fn process_next(&mut self) -> Option<usize> {
        let frame = *Frame::parse(&self.rx_buf)?;
        match frame.opcode() {
            Ok(Opcode::WaveformUpload) => {
                let len = Self::table_len(frame.payload()[0]);
                let table = self.rx_buf.get(FRAME_SIZE..FRAME_SIZE + len)?.to_vec();
                self.err = self.waveform_upload(&table);
                self.num_frames += 1;
                Some(FRAME_SIZE + len)
            }
            Ok(opcode) => {
                self.err = self.handle_frame(opcode, &frame);
                self.num_frames += 1;
                Some(FRAME_SIZE)
            }
            Err(byte) => {
                tracing::warn!("Unknown opcode {:#04X}, skipping one byte", byte);
                self.err = ERR_NOT_SUPPORTED_OPCODE;
                Some(1)
            }
        }
    }

    // a length byte of 0 announces a full table
    const fn table_len(len: u8) -> usize {
        match len {
            0 => WAVEFORM_TABLE_SIZE,
            n => n as usize,
        }
    }

    #[must_use]
    fn handle_frame(&mut self, opcode: Opcode, frame: &Frame) -> u8 {
        match opcode {
            Opcode::TriggerMode
            | Opcode::TriggerPolarity
            | Opcode::DisplayMode
            | Opcode::Gain
            | Opcode::OffsetCh1
            | Opcode::OffsetCh2
            | Opcode::TriggerLevel
            | Opcode::SampleRate => self.configure(opcode, frame),
            Opcode::Capture => self.capture(frame),
            Opcode::Abort => self.abort(),
            Opcode::DigitalOutput => self.digital_output(frame),
            Opcode::DigitalInput => self.digital_input(),
            Opcode::DdsRun => self.dds_run(),
            Opcode::DdsPeriod => self.dds_period(frame),
            Opcode::DdsPhaseStep => self.dds_phase_step(frame),
            _ => ERR_NOT_SUPPORTED_OPCODE,
        }
    }

    pub(crate) fn acquire(&mut self) -> Vec<u8> {
        let gains = [self.gain(Channel::Ch1), self.gain(Channel::Ch2)];
        let ch1 = (0..CAPTURE_SAMPLES_PER_CHANNEL)
            .map(|i| match &self.probes[0] {
                Some(probe) => probe[i % probe.len()],
                None => self.dds.next_sample(),
            })
            .map(|raw| Self::amplify(raw, gains[0]))
            .collect::<Vec<_>>();
        let ch2 = (0..CAPTURE_SAMPLES_PER_CHANNEL).map(|i| {
            let raw = self.probes[1]
                .as_ref()
                .map_or(ADC_MID_SCALE, |probe| probe[i % probe.len()]);
            Self::amplify(raw, gains[1])
        });
        ch1.into_iter().chain(ch2).collect()
    }

    fn amplify(raw: u8, gain: f64) -> u8 {
        let centered = raw as f64 - ADC_MID_SCALE as f64;
        (ADC_MID_SCALE as f64 + centered * gain)
            .round()
            .clamp(u8::MIN as f64, u8::MAX as f64) as u8
    }
}
