use derive_more::Display;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

use super::Opcode;

/// A command frame: an opcode followed by two payload bytes.
#[repr(C)]
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    IntoBytes,
    FromBytes,
    Immutable,
    KnownLayout,
    Unaligned,
    Display,
)]
#[display("('{}', {:#04X}, {:#04X})", *opcode as char, payload[0], payload[1])]
pub struct Frame {
    opcode: u8,
    payload: [u8; 2],
}

impl Frame {
    /// Creates a frame with two independent payload bytes.
    #[must_use]
    pub const fn new(opcode: Opcode, byte1: u8, byte2: u8) -> Self {
        Self {
            opcode: opcode as u8,
            payload: [byte1, byte2],
        }
    }

    /// Creates a frame whose payload is `value` in big-endian order.
    #[must_use]
    pub const fn with_u16(opcode: Opcode, value: u16) -> Self {
        Self {
            opcode: opcode as u8,
            payload: value.to_be_bytes(),
        }
    }

    /// Creates a frame without payload.
    #[must_use]
    pub const fn bare(opcode: Opcode) -> Self {
        Self::new(opcode, 0x00, 0x00)
    }

    /// Reads a frame from the head of `bytes`.
    #[must_use]
    pub fn parse(bytes: &[u8]) -> Option<&Self> {
        Self::ref_from_prefix(bytes).ok().map(|(frame, _)| frame)
    }

    /// The opcode, or the raw byte if it is unknown.
    pub fn opcode(&self) -> Result<Opcode, u8> {
        Opcode::try_from(self.opcode)
    }

    /// The payload bytes.
    #[must_use]
    pub const fn payload(&self) -> [u8; 2] {
        self.payload
    }

    /// The payload read as a big-endian value.
    #[must_use]
    pub const fn value(&self) -> u16 {
        u16::from_be_bytes(self.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_layout() {
        assert_eq!(3, std::mem::size_of::<Frame>());
        assert_eq!(0, std::mem::offset_of!(Frame, opcode));
        assert_eq!(1, std::mem::offset_of!(Frame, payload));
    }

    #[test]
    fn big_endian() {
        let frame = Frame::with_u16(Opcode::TriggerLevel, 0x1234);
        assert_eq!(&[b'L', 0x12, 0x34], frame.as_bytes());
        assert_eq!(0x1234, frame.value());
    }

    #[test]
    fn parse() {
        let bytes = [b'G', 0x01, 0x03, 0xFF];
        let frame = Frame::parse(&bytes);
        assert_eq!(Some(&Frame::new(Opcode::Gain, 0x01, 0x03)), frame);
        assert_eq!(None, Frame::parse(&bytes[..2]));
    }

    #[test]
    fn display() {
        assert_eq!(
            "('C', 0x01, 0x00)",
            Frame::new(Opcode::Capture, 1, 0).to_string()
        );
    }
}
