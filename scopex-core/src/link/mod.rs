mod config;
mod error;
mod ports;

use std::time::Duration;

pub use config::{DataBits, FlowControl, LinkConfig, Parity, StopBits};
pub use error::{LinkError, LinkErrorKind};
pub use ports::PortEnumerator;

/// A trait that provides the interface with the device.
///
/// A link is a duplex byte channel. It does not know anything about the command protocol; each
/// call of [`Link::send`] carries exactly one command frame.
pub trait Link: Send {
    /// Opens the link to the port `name`.
    fn open(&mut self, name: &str, config: &LinkConfig) -> Result<(), LinkError>;

    /// Closes the link.
    fn close(&mut self) -> Result<(), LinkError>;

    /// Writes bytes to the device and returns the number of bytes accepted.
    fn send(&mut self, tx: &[u8]) -> Result<usize, LinkError>;

    /// Blocks until the pending bytes are written or `timeout` elapses.
    ///
    /// Returns `false` on timeout.
    fn wait_until_written(&mut self, timeout: Duration) -> bool;

    /// Appends the bytes received so far to `rx` and returns how many were appended.
    fn receive(&mut self, rx: &mut Vec<u8>) -> Result<usize, LinkError>;

    /// Checks if the link is open.
    #[must_use]
    fn is_open(&self) -> bool;
}

impl Link for Box<dyn Link> {
    fn open(&mut self, name: &str, config: &LinkConfig) -> Result<(), LinkError> {
        self.as_mut().open(name, config)
    }

    fn close(&mut self) -> Result<(), LinkError> {
        self.as_mut().close()
    }

    fn send(&mut self, tx: &[u8]) -> Result<usize, LinkError> {
        self.as_mut().send(tx)
    }

    fn wait_until_written(&mut self, timeout: Duration) -> bool {
        self.as_mut().wait_until_written(timeout)
    }

    fn receive(&mut self, rx: &mut Vec<u8>) -> Result<usize, LinkError> {
        self.as_mut().receive(rx)
    }

    fn is_open(&self) -> bool {
        self.as_ref().is_open()
    }
}
