mod acquisition;
mod channel;
mod dds;
mod gpio;
mod scope;
mod trigger;
mod tuple;

pub use acquisition::{Abort, Capture, DisplayMode, SampleRate};
pub use channel::{gain_code, Channel, ChannelGain, ChannelOffset, GAIN_STEPS};
pub use dds::{DdsFrequency, DdsRun, WaveformUpload};
pub use gpio::{DigitalOutput, ReadDigitalInputs};
pub use scope::ScopeConfig;
pub use trigger::{TriggerLevel, TriggerMode, TriggerPolarity};

use crate::firmware::operation::Operation;

/// A command that can be sent to the device.
pub trait Datagram {
    /// The operation that packs the command.
    type O: Operation;

    /// Converts the command into its operation.
    fn operation(self) -> Self::O;
}

#[cfg(test)]
pub(crate) fn packets<D: Datagram>(d: D) -> Vec<Vec<u8>> {
    crate::firmware::operation::pack_all(&mut d.operation())
}
