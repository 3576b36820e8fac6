pub const NO_ERR: u8 = 0x00;
pub const ERR_NOT_SUPPORTED_OPCODE: u8 = 0x80;

/// Raw ADC value of 0 V.
pub const ADC_MID_SCALE: u8 = 0x80;
