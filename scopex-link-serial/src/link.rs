use std::{
    io::{Read, Write},
    time::{Duration, Instant},
};

use scopex_core::link::{Link, LinkConfig, LinkError};
use serialport::SerialPort;

use crate::{convert, SerialLinkOption};

/// A [`Link`] over a serial port.
pub struct SerialLink {
    option: SerialLinkOption,
    port: Option<Box<dyn SerialPort>>,
}

impl SerialLink {
    /// Creates a new closed [`SerialLink`].
    #[must_use]
    pub const fn new(option: SerialLinkOption) -> Self {
        Self { option, port: None }
    }

    fn port(&mut self) -> Result<&mut Box<dyn SerialPort>, LinkError> {
        self.port
            .as_mut()
            .ok_or_else(|| LinkError::io("Port is not open"))
    }
}

impl Default for SerialLink {
    fn default() -> Self {
        Self::new(SerialLinkOption::DEFAULT)
    }
}

impl Link for SerialLink {
    #[tracing::instrument(skip(self))]
    fn open(&mut self, name: &str, config: &LinkConfig) -> Result<(), LinkError> {
        self.port = None;
        let port = serialport::new(name, config.baud_rate)
            .data_bits(convert::data_bits(config.data_bits))
            .parity(convert::parity(config.parity))
            .stop_bits(convert::stop_bits(config.stop_bits))
            .flow_control(convert::flow_control(config.flow_control))
            .timeout(self.option.read_timeout)
            .open()
            .map_err(|e| LinkError::open(e.to_string()))?;
        tracing::info!("Opened {} at {} baud", name, config.baud_rate);
        self.port = Some(port);
        Ok(())
    }

    fn close(&mut self) -> Result<(), LinkError> {
        if let Some(port) = self.port.take() {
            tracing::info!("Closed {}", port.name().unwrap_or_default());
        }
        Ok(())
    }

    fn send(&mut self, tx: &[u8]) -> Result<usize, LinkError> {
        self.port()?.write(tx).map_err(convert::io_error)
    }

    fn wait_until_written(&mut self, timeout: Duration) -> bool {
        let interval = self.option.drain_interval;
        let Ok(port) = self.port() else {
            return false;
        };
        let start = Instant::now();
        loop {
            match port.bytes_to_write() {
                Ok(0) => return true,
                Ok(_) if start.elapsed() < timeout => std::thread::sleep(interval),
                Ok(n) => {
                    tracing::warn!("{} bytes still pending after {:?}", n, timeout);
                    return false;
                }
                Err(e) => {
                    tracing::warn!("Failed to query the output buffer: {}", e);
                    return false;
                }
            }
        }
    }

    fn receive(&mut self, rx: &mut Vec<u8>) -> Result<usize, LinkError> {
        let port = self.port()?;
        let available = port.bytes_to_read().map_err(convert::serial_error)? as usize;
        if available == 0 {
            return Ok(0);
        }
        let start = rx.len();
        rx.resize(start + available, 0);
        match port.read(&mut rx[start..]) {
            Ok(n) => {
                rx.truncate(start + n);
                Ok(n)
            }
            Err(e) => {
                rx.truncate(start);
                Err(convert::io_error(e))
            }
        }
    }

    fn is_open(&self) -> bool {
        self.port.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_link() {
        let mut link = SerialLink::default();
        assert!(!link.is_open());
        assert_eq!(Err(LinkError::io("Port is not open")), link.send(&[b'A', 0, 0]));
        assert!(!link.wait_until_written(Duration::ZERO));
        assert_eq!(
            Err(LinkError::io("Port is not open")),
            link.receive(&mut Vec::new())
        );
        assert_eq!(Ok(()), link.close());
    }

    #[test]
    fn open_missing_port() {
        let mut link = SerialLink::default();
        let err = link.open("/dev/scopex-does-not-exist", &LinkConfig::DEFAULT);
        assert!(err.is_err());
        assert!(!link.is_open());
    }
}
