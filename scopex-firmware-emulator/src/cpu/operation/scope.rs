use scopex_driver::firmware::{Frame, Opcode};

use crate::{cpu::params::*, DeviceEmulator};

impl DeviceEmulator {
    #[must_use]
    pub(crate) fn configure(&mut self, opcode: Opcode, frame: &Frame) -> u8 {
        let [b1, _] = frame.payload();
        match opcode {
            Opcode::TriggerMode => self.trigger_mode = b1,
            Opcode::TriggerPolarity => self.trigger_polarity = b1,
            Opcode::DisplayMode => self.display_mode = b1,
            Opcode::Gain => {
                let [channel, code] = frame.payload();
                match self.gain_codes.get_mut(channel as usize) {
                    Some(gain) => *gain = code,
                    None => return ERR_NOT_SUPPORTED_OPCODE,
                }
            }
            Opcode::OffsetCh1 => self.offsets[0] = frame.value(),
            Opcode::OffsetCh2 => self.offsets[1] = frame.value(),
            Opcode::TriggerLevel => self.trigger_level = frame.value(),
            Opcode::SampleRate => self.sample_rate = b1,
            _ => return ERR_NOT_SUPPORTED_OPCODE,
        }
        NO_ERR
    }
}
