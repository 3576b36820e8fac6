use scopex_driver::firmware::Frame;

use crate::{cpu::params::*, DeviceEmulator};

impl DeviceEmulator {
    #[must_use]
    pub(crate) fn capture(&mut self, frame: &Frame) -> u8 {
        let [continuous, _] = frame.payload();
        let data = self.acquire();
        self.replies.push_back(data);
        self.continuous_capture = continuous != 0;
        NO_ERR
    }

    #[must_use]
    pub(crate) fn abort(&mut self) -> u8 {
        self.continuous_capture = false;
        self.dds.stop();
        NO_ERR
    }
}
