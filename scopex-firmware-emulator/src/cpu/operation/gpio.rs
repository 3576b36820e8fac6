use scopex_driver::firmware::Frame;

use crate::{cpu::params::*, DeviceEmulator};

impl DeviceEmulator {
    #[must_use]
    pub(crate) fn digital_output(&mut self, frame: &Frame) -> u8 {
        self.digital_outputs = frame.payload()[0];
        NO_ERR
    }

    #[must_use]
    pub(crate) fn digital_input(&mut self) -> u8 {
        self.replies.push_back(vec![self.digital_inputs]);
        NO_ERR
    }
}
