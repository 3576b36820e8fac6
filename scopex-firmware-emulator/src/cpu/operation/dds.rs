use scopex_driver::firmware::Frame;

use crate::{cpu::params::*, DeviceEmulator};

impl DeviceEmulator {
    #[must_use]
    pub(crate) fn waveform_upload(&mut self, table: &[u8]) -> u8 {
        self.dds.load(table);
        NO_ERR
    }

    #[must_use]
    pub(crate) fn dds_run(&mut self) -> u8 {
        self.dds.run();
        NO_ERR
    }

    #[must_use]
    pub(crate) fn dds_period(&mut self, frame: &Frame) -> u8 {
        self.dds.set_divider(frame.value());
        NO_ERR
    }

    #[must_use]
    pub(crate) fn dds_phase_step(&mut self, frame: &Frame) -> u8 {
        self.dds.set_phase_step(frame.value());
        NO_ERR
    }
}
