//! A software model of the scopex firmware.
//!
//! [`DeviceEmulator`] consumes the byte stream a host writes, applies every command to its
//! state and queues the replies the real device would send back.

/// Command interpreter.
pub mod cpu;
/// Signal generator.
pub mod dds;

pub use cpu::emulator::DeviceEmulator;
pub use dds::DdsEmulator;
