use scopex_driver::{
    core::common::{Freq, WAVEFORM_TABLE_SIZE},
    synthesizer::Quantized,
};

use crate::cpu::params::ADC_MID_SCALE;

/// Emulated DDS: a 16-bit phase accumulator indexing the uploaded table.
#[derive(Clone, Debug)]
pub struct DdsEmulator {
    divider: u16,
    phase_step: u16,
    table: Vec<u8>,
    running: bool,
    phase: u16,
}

impl Default for DdsEmulator {
    fn default() -> Self {
        Self::new()
    }
}

impl DdsEmulator {
    /// Creates a stopped DDS with no table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            divider: 1,
            phase_step: 0,
            table: Vec::new(),
            running: false,
            phase: 0,
        }
    }

    #[must_use]
    pub const fn divider(&self) -> u16 {
        self.divider
    }

    #[must_use]
    pub const fn phase_step(&self) -> u16 {
        self.phase_step
    }

    #[must_use]
    pub fn table(&self) -> &[u8] {
        &self.table
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// The frequency the DDS outputs with the programmed divider and phase step.
    #[must_use]
    pub fn output_frequency(&self) -> Freq<f64> {
        Quantized::new(self.divider, self.phase_step).actual()
    }

    pub(crate) fn set_divider(&mut self, divider: u16) {
        self.divider = divider;
    }

    pub(crate) fn set_phase_step(&mut self, phase_step: u16) {
        self.phase_step = phase_step;
    }

    pub(crate) fn load(&mut self, table: &[u8]) {
        self.table = table.to_vec();
        self.phase = 0;
    }

    pub(crate) fn run(&mut self) {
        self.running = true;
    }

    pub(crate) fn stop(&mut self) {
        self.running = false;
        self.phase = 0;
    }

    /// Advances the phase accumulator by one tick and returns the output sample.
    ///
    /// A stopped DDS, or one without a table, outputs mid scale.
    pub fn next_sample(&mut self) -> u8 {
        if !self.running || self.table.is_empty() {
            return ADC_MID_SCALE;
        }
        let idx = (self.phase >> 8) as usize * self.table.len() / WAVEFORM_TABLE_SIZE;
        self.phase = self.phase.wrapping_add(self.phase_step);
        self.table[idx]
    }
}
