use std::{collections::VecDeque, time::Duration};

use scopex_core::link::{Link, LinkConfig, LinkError};
use scopex_firmware_emulator::DeviceEmulator;

#[derive(Default, Clone, Debug)]
#[doc(hidden)]
pub struct AuditOption {
    pub unavailable_ports: Vec<String>,
    pub write_timeout: bool,
    pub broken: bool,
}

#[doc(hidden)]
pub struct Audit {
    option: AuditOption,
    is_open: bool,
    port: Option<String>,
    config: Option<LinkConfig>,
    cpu: DeviceEmulator,
    written: Vec<Vec<u8>>,
    injected: VecDeque<Vec<u8>>,
    broken: bool,
    fatal: bool,
}

impl std::ops::Deref for Audit {
    type Target = DeviceEmulator;

    fn deref(&self) -> &Self::Target {
        &self.cpu
    }
}

impl std::ops::DerefMut for Audit {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.cpu
    }
}

impl Audit {
    pub fn new(option: AuditOption) -> Self {
        Self {
            option,
            is_open: false,
            port: None,
            config: None,
            cpu: DeviceEmulator::new(),
            written: Vec::new(),
            injected: VecDeque::new(),
            broken: false,
            fatal: false,
        }
    }

    /// Makes every transfer fail with an I/O error.
    pub fn break_down(&mut self) {
        self.broken = true;
    }

    /// Makes every transfer fail as if the port was unplugged.
    pub fn unplug(&mut self) {
        self.broken = true;
        self.fatal = true;
    }

    pub fn repair(&mut self) {
        self.broken = false;
        self.fatal = false;
    }

    pub fn set_write_timeout(&mut self, timeout: bool) {
        self.option.write_timeout = timeout;
    }

    /// Port the link was last opened on.
    pub fn port(&self) -> Option<&str> {
        self.port.as_deref()
    }

    /// Settings the link was last opened with.
    pub fn link_config(&self) -> Option<&LinkConfig> {
        self.config.as_ref()
    }

    /// Every buffer passed to [`Link::send`] since the last [`Audit::clear_written`].
    pub fn written(&self) -> &[Vec<u8>] {
        &self.written
    }

    pub fn clear_written(&mut self) {
        self.written.clear();
    }

    /// Queues raw bytes to be returned by the next [`Link::receive`] ahead of the device
    /// replies.
    pub fn inject(&mut self, bytes: Vec<u8>) {
        self.injected.push_back(bytes);
    }

    fn check(&self) -> Result<(), LinkError> {
        match (self.broken, self.fatal) {
            (false, _) => Ok(()),
            (true, false) => Err(LinkError::io("broken")),
            (true, true) => Err(LinkError::resource("device unplugged")),
        }
    }
}

impl Link for Audit {
    fn open(&mut self, name: &str, config: &LinkConfig) -> Result<(), LinkError> {
        if self.option.unavailable_ports.iter().any(|p| p == name) {
            return Err(LinkError::open(format!("Could not open {}", name)));
        }
        self.is_open = true;
        self.port = Some(name.to_string());
        self.config = Some(*config);
        self.cpu = DeviceEmulator::new();
        self.written.clear();
        self.injected.clear();
        self.broken = self.option.broken;
        Ok(())
    }

    fn close(&mut self) -> Result<(), LinkError> {
        self.is_open = false;
        Ok(())
    }

    fn send(&mut self, tx: &[u8]) -> Result<usize, LinkError> {
        self.check()?;
        self.written.push(tx.to_vec());
        self.cpu.send(tx);
        Ok(tx.len())
    }

    fn wait_until_written(&mut self, _: Duration) -> bool {
        !self.option.write_timeout
    }

    fn receive(&mut self, rx: &mut Vec<u8>) -> Result<usize, LinkError> {
        self.check()?;
        let reply = self.injected.pop_front().or_else(|| self.cpu.rx());
        Ok(reply.map_or(0, |reply| {
            rx.extend_from_slice(&reply);
            reply.len()
        }))
    }

    fn is_open(&self) -> bool {
        self.is_open
    }
}
