pub use scopex_core::{
    common::{kHz, Freq, Hz, MHz},
    link::{Link, LinkConfig, LinkError, PortEnumerator},
    timer::{ManualTimer, TaskId, Timer},
};
#[cfg(feature = "async")]
pub use scopex_core::timer::{TimerEvents, TokioTimer};
pub use scopex_driver::{
    datagram::{
        Abort, Capture, Channel, Datagram, DigitalOutput, DisplayMode, ReadDigitalInputs,
        SampleRate, ScopeConfig, TriggerLevel, TriggerMode, TriggerPolarity,
    },
    dsp::{CaptureData, Point},
    sweep::SweepStep,
    waveform::{WaveformTable, WaveformType},
};

#[cfg(feature = "link-nop")]
pub use crate::link::Nop;
pub use crate::{
    error::ScopexError,
    session::{Session, SessionEvent, SessionOption},
};
