/// The emulator.
pub mod emulator;
mod operation;
/// Firmware constants.
pub mod params;
