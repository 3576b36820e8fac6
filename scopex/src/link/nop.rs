use std::time::Duration;

use scopex_core::link::{Link, LinkConfig, LinkError};
use scopex_firmware_emulator::DeviceEmulator;

/// A [`Link`] to an emulated device.
///
/// Opening always succeeds, whatever the port name.
#[derive(Default)]
pub struct Nop {
    is_open: bool,
    cpu: DeviceEmulator,
}

impl Nop {
    /// Creates a new [`Nop`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            is_open: false,
            cpu: DeviceEmulator::new(),
        }
    }

    /// The emulated device.
    #[must_use]
    pub const fn emulator(&self) -> &DeviceEmulator {
        &self.cpu
    }

    /// The emulated device.
    #[must_use]
    pub fn emulator_mut(&mut self) -> &mut DeviceEmulator {
        &mut self.cpu
    }
}

impl Link for Nop {
    fn open(&mut self, _: &str, _: &LinkConfig) -> Result<(), LinkError> {
        self.is_open = true;
        self.cpu = DeviceEmulator::new();
        Ok(())
    }

    fn close(&mut self) -> Result<(), LinkError> {
        self.is_open = false;
        Ok(())
    }

    fn send(&mut self, tx: &[u8]) -> Result<usize, LinkError> {
        self.cpu.send(tx);
        Ok(tx.len())
    }

    fn wait_until_written(&mut self, _: Duration) -> bool {
        true
    }

    fn receive(&mut self, rx: &mut Vec<u8>) -> Result<usize, LinkError> {
        Ok(self.cpu.rx().map_or(0, |reply| {
            rx.extend_from_slice(&reply);
            reply.len()
        }))
    }

    fn is_open(&self) -> bool {
        self.is_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loopback() -> anyhow::Result<()> {
        let mut link = Nop::new();
        assert!(!link.is_open());
        link.open("anything", &LinkConfig::DEFAULT)?;
        assert!(link.is_open());

        link.emulator_mut().set_digital_inputs(0x42);
        assert_eq!(3, link.send(&[b'i', 0x00, 0x00])?);
        assert!(link.wait_until_written(Duration::ZERO));

        let mut rx = Vec::new();
        assert_eq!(1, link.receive(&mut rx)?);
        assert_eq!(vec![0x42], rx);
        assert_eq!(0, link.receive(&mut rx)?);

        link.close()?;
        assert!(!link.is_open());
        Ok(())
    }
}
