mod event;
mod generator;
mod option;
mod scope;
mod sweep;

use getset::{Getters, MutGetters};
use itertools::Itertools;
use scopex_core::{
    link::{Link, LinkConfig, LinkError, PortEnumerator},
    timer::{TaskId, Timer},
};
use scopex_driver::{
    datagram::Datagram,
    dsp::dft,
    error::ScopexDriverError,
    firmware::{operation::pack_all, rx::RxFrame},
    sweep::SweepStep,
    waveform::WaveformBank,
};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use crate::error::ScopexError;

pub use event::SessionEvent;
pub use option::SessionOption;

/// A connection to one device.
///
/// All commands are synchronous and run to completion. Replies of the device are delivered by
/// calling [`Session::poll`] (or [`Session::on_bytes_available`] if the caller reads the link
/// itself) and sweep steps by feeding the events of the timer to [`Session::on_timer`].
///
/// While disconnected, commands that talk to the device do nothing. [`Session::run_capture`]
/// and [`Session::read_digital_inputs`] answer with demonstration data instead.
#[derive(Getters, MutGetters)]
pub struct Session<L: Link, T: Timer<SweepStep>> {
    /// The link to the device.
    #[getset(get = "pub", get_mut = "pub")]
    link: L,
    /// The timer that schedules sweep steps.
    #[getset(get = "pub", get_mut = "pub")]
    timer: T,
    /// The settings.
    #[getset(get = "pub")]
    option: SessionOption,
    ports: Box<dyn PortEnumerator + Send>,
    connected: bool,
    status: String,
    bank: WaveformBank,
    sweep_tasks: Vec<TaskId>,
    subscribers: Vec<UnboundedSender<SessionEvent>>,
    rx_buf: Vec<u8>,
}

impl<L: Link, T: Timer<SweepStep>> Session<L, T> {
    /// Creates a new disconnected [`Session`].
    #[must_use]
    pub fn new(
        link: L,
        timer: T,
        ports: impl PortEnumerator + Send + 'static,
        option: SessionOption,
    ) -> Self {
        Self {
            link,
            timer,
            option,
            ports: Box::new(ports),
            connected: false,
            status: String::from("Ready"),
            bank: WaveformBank::new(),
            sweep_tasks: Vec::new(),
            subscribers: Vec::new(),
            rx_buf: Vec::new(),
        }
    }

    /// Names of the ports a connection can be made to.
    #[must_use]
    pub fn available_ports(&self) -> Vec<String> {
        self.ports.available_ports()
    }

    /// Returns `true` while connected.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.connected
    }

    /// The last status message.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// The waveform tables and the current selection.
    #[must_use]
    pub const fn waveforms(&self) -> &WaveformBank {
        &self.bank
    }

    /// Returns a channel that receives every event published from now on.
    pub fn subscribe(&mut self) -> UnboundedReceiver<SessionEvent> {
        let (tx, rx) = unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    /// Tells subscribers to re-read [`Session::available_ports`].
    pub fn refresh_ports(&mut self) {
        self.emit(SessionEvent::PortsChanged);
    }

    /// Connects to the port `name`, disconnecting first if already connected.
    #[tracing::instrument(skip(self))]
    pub fn connect(&mut self, name: &str) -> Result<(), ScopexError> {
        if self.connected {
            self.disconnect();
        }

        match self.link.open(name, &LinkConfig::DEFAULT) {
            Ok(()) => {
                tracing::debug!("Connected to {}", name);
                self.connected = true;
                self.emit(SessionEvent::ConnectionChanged);
                self.set_status(format!("Connected to {}", name));
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to open {}: {}", name, e);
                self.set_status(format!("Error: {}", e));
                Err(e.into())
            }
        }
    }

    /// Closes the connection. Does nothing but report the status if not connected.
    #[tracing::instrument(skip(self))]
    pub fn disconnect(&mut self) {
        if self.link.is_open() {
            if let Err(e) = self.link.close() {
                tracing::warn!("Failed to close the link: {}", e);
            }
        }
        self.connected = false;
        self.rx_buf.clear();
        self.emit(SessionEvent::ConnectionChanged);
        self.set_status("Disconnected");
    }

    /// Sends a command to the device.
    ///
    /// Each packet of the command is written and drained before the next one. A failed write is
    /// reported in the status and aborts the rest of the command.
    #[tracing::instrument(skip(self, d))]
    pub fn send(&mut self, d: impl Datagram) -> Result<(), ScopexError> {
        if !self.connected {
            return Err(ScopexError::NotConnected);
        }
        let packets = pack_all(&mut d.operation());
        packets
            .iter()
            .try_for_each(|packet| self.write(packet))
            .map_err(|e| {
                if let ScopexDriverError::Link(link_err) = &e {
                    if link_err.is_fatal() {
                        self.on_link_error(link_err.clone());
                    }
                }
                e.into()
            })
    }

    fn write(&mut self, packet: &[u8]) -> Result<(), ScopexDriverError> {
        tracing::trace!("send: {:02X}", packet.iter().format(" "));

        let result = match self.link.send(packet) {
            Ok(n) if n == packet.len() => {
                if self.link.wait_until_written(self.option.write_timeout) {
                    return Ok(());
                }
                ScopexDriverError::WriteTimeout(self.option.write_timeout)
            }
            Ok(n) => ScopexDriverError::IncompleteWrite(n, packet.len()),
            Err(e) => ScopexDriverError::Link(e),
        };
        tracing::warn!("{}", result);
        match &result {
            ScopexDriverError::WriteTimeout(_) => self.set_status(result.to_string()),
            _ => self.set_status(format!("Failed to write command: {}", result)),
        }
        Err(result)
    }

    /// Sends a command if connected. Transport failures are already in the status, so they
    /// are only logged here.
    fn dispatch(&mut self, d: impl Datagram) -> bool {
        if !self.connected {
            return false;
        }
        match self.send(d) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!("Command failed: {}", e);
                false
            }
        }
    }

    /// Reads whatever the link received and processes it.
    ///
    /// Returns the number of bytes read.
    pub fn poll(&mut self) -> Result<usize, ScopexError> {
        if !self.connected {
            return Ok(0);
        }
        let mut buf = std::mem::take(&mut self.rx_buf);
        buf.clear();
        let n = match self.link.receive(&mut buf) {
            Ok(n) => n,
            Err(e) => {
                self.rx_buf = buf;
                self.on_link_error(e.clone());
                return Err(e.into());
            }
        };
        if n > 0 {
            self.on_bytes_available(&buf);
        }
        self.rx_buf = buf;
        Ok(n)
    }

    /// Processes one block of bytes received from the device.
    ///
    /// A capture is published together with the spectrum of its channel 1 and a single byte as
    /// the digital inputs. Other blocks are dropped.
    pub fn on_bytes_available(&mut self, data: &[u8]) {
        match RxFrame::classify(data) {
            Some(RxFrame::Capture(capture)) => self.publish_capture(capture),
            Some(RxFrame::DigitalInputs(inputs)) => {
                self.emit(SessionEvent::DigitalInputsChanged(inputs.bits()))
            }
            None => {}
        }
    }

    /// Reports an error of the link. A fatal error also disconnects.
    #[tracing::instrument(skip(self))]
    pub fn on_link_error(&mut self, err: LinkError) {
        tracing::error!("Link error: {}", err);
        self.set_status(format!("Serial Error: {}", err));
        if err.is_fatal() {
            self.disconnect();
        }
    }

    fn publish_capture(&mut self, capture: scopex_driver::dsp::CaptureData) {
        let spectrum = dft(&capture.ch1);
        self.emit(SessionEvent::CaptureDataReceived(capture));
        self.emit(SessionEvent::DftComputed(spectrum));
    }

    fn set_status(&mut self, msg: impl Into<String>) {
        self.status = msg.into();
        tracing::debug!("Status: {}", self.status);
        self.emit(SessionEvent::StatusChanged(self.status.clone()));
    }

    fn emit(&mut self, event: SessionEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

impl<L: Link, T: Timer<SweepStep>> Drop for Session<L, T> {
    fn drop(&mut self) {
        if !self.link.is_open() {
            return;
        }
        if let Err(e) = self.link.close() {
            tracing::warn!("Failed to close the link: {}", e);
        }
    }
}
