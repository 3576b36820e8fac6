use scopex_core::{common::DEMO_DIGITAL_INPUTS, link::Link, timer::Timer};
use scopex_driver::{
    datagram::{Abort, Capture, DigitalOutput, ReadDigitalInputs, ScopeConfig},
    dsp::{demo_capture, CaptureData},
    sweep::SweepStep,
};

use super::{Session, SessionEvent};

impl<L: Link, T: Timer<SweepStep>> Session<L, T> {
    /// Applies the acquisition settings.
    #[tracing::instrument(skip(self))]
    pub fn configure_scope(&mut self, config: ScopeConfig) {
        self.dispatch(config);
    }

    /// Starts a capture. The data arrives later as [`SessionEvent::CaptureDataReceived`].
    ///
    /// While disconnected the demonstration capture is published right away and also returned.
    #[tracing::instrument(skip(self))]
    pub fn run_capture(&mut self, continuous: bool) -> Option<CaptureData> {
        if !self.connected {
            let capture = demo_capture();
            self.publish_capture(capture.clone());
            return Some(capture);
        }
        self.dispatch(Capture::new(continuous));
        None
    }

    /// Aborts the running capture.
    #[tracing::instrument(skip(self))]
    pub fn stop_capture(&mut self) {
        self.dispatch(Abort);
    }

    /// Stops the capture, the DDS output and the sweep.
    #[tracing::instrument(skip(self))]
    pub fn abort_all(&mut self) {
        self.stop_capture();
        self.stop_generator();
        self.stop_sweep();
    }

    /// Drives the digital output lines.
    #[tracing::instrument(skip(self))]
    pub fn set_digital_outputs(&mut self, mask: u8) {
        self.dispatch(DigitalOutput::new(mask));
    }

    /// Requests the digital inputs. The value arrives later as
    /// [`SessionEvent::DigitalInputsChanged`] and `0` is returned.
    ///
    /// While disconnected [`DEMO_DIGITAL_INPUTS`] is published and returned.
    #[tracing::instrument(skip(self))]
    pub fn read_digital_inputs(&mut self) -> u8 {
        if !self.connected {
            self.emit(SessionEvent::DigitalInputsChanged(DEMO_DIGITAL_INPUTS));
            return DEMO_DIGITAL_INPUTS;
        }
        self.dispatch(ReadDigitalInputs);
        0
    }
}
