mod freq;

use std::time::Duration;

pub use std::f64::consts::PI;

pub use freq::*;

/// The clock that drives the DDS phase accumulator before division.
pub const SYSTEM_CLOCK: Freq<u32> = Freq { freq: 32_000_000 };

/// One full turn of the 16-bit DDS phase accumulator.
pub const PHASE_ACCUMULATOR_MODULUS: u32 = 1 << 16;

/// The divider search stops here.
pub const MAX_CLOCK_DIVIDER: u16 = 1024;

/// Smallest phase step the divider search accepts.
pub const MIN_PHASE_STEP: u16 = 256;

/// Maximum number of samples in a waveform table.
pub const WAVEFORM_TABLE_SIZE: usize = 256;

/// Number of samples per channel in a capture reply.
pub const CAPTURE_SAMPLES_PER_CHANNEL: usize = 200;

/// Number of channels in a capture reply.
pub const NUM_CHANNELS: usize = 2;

/// Minimum length of a capture reply.
pub const CAPTURE_FRAME_SIZE: usize = CAPTURE_SAMPLES_PER_CHANNEL * NUM_CHANNELS;

/// Size of a command frame.
pub const FRAME_SIZE: usize = 3;

/// Full scale of the input stage \[V\]. Raw samples span `-FULL_SCALE..=FULL_SCALE`.
pub const FULL_SCALE_VOLTAGE: f64 = 10.0;

/// Sampling rate assumed by the spectrum calculation.
pub const DFT_SAMPLE_RATE: Freq<u32> = Freq { freq: 1000 };

/// The default timeout duration for a write to drain.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(1000);

/// Digital input bitmask reported while no device is connected.
pub const DEMO_DIGITAL_INPUTS: u8 = 0x05;
